//! Additional tests for the CLI argument layer and output selection

use chatrace::cli::{Args, DEFAULT_DATA_FILE, DEFAULT_OUTPUT_FILE};
use chatrace::config::{DEFAULT_TITLE, RaceFile};
use chatrace::format::ExportFormat;
use chatrace::render::RenderTarget;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::str::FromStr;

fn parse(argv: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("chatrace").chain(argv.iter().copied())).unwrap()
}

#[test]
fn test_all_flags_parse() {
    let args = parse(&[
        "chat",
        "--data",
        "chat/export.txt",
        "-o",
        "chat/race.gif",
        "--title",
        "Family",
        "-n",
        "5",
        "-i",
        "120",
        "--width",
        "1280",
        "--height",
        "720",
        "--credit",
        "by me",
        "--names",
        "names.json",
        "-c",
        "race.toml",
        "--after",
        "2021-01-01",
        "--before",
        "2021-12-31",
        "--from",
        "Alice",
        "--export",
        "counts.csv",
        "--skip-system",
        "--dry-run",
        "-vv",
    ]);

    assert_eq!(args.folder, PathBuf::from("chat"));
    assert_eq!(args.top_n, Some(5));
    assert_eq!(args.interval, Some(120));
    assert_eq!((args.width, args.height), (Some(1280), Some(720)));
    assert_eq!(args.credit.as_deref(), Some("by me"));
    assert_eq!(args.from, vec!["Alice"]);
    assert!(args.skip_system);
    assert!(args.dry_run);
    assert_eq!(args.verbose, 2);
    assert!(args.validate().is_ok());
}

#[test]
fn test_defaults_follow_folder() {
    let args = parse(&["some/chat"]);
    assert_eq!(
        args.data_path(),
        Path::new("some/chat").join(DEFAULT_DATA_FILE)
    );
    assert_eq!(
        args.output_path(),
        Path::new("some/chat").join(DEFAULT_OUTPUT_FILE)
    );
    assert!(!args.dry_run);
    assert_eq!(args.verbose, 0);
}

#[test]
fn test_no_overrides_keeps_file_values() {
    let file = RaceFile::from_toml("[race]\ntop_n = 3\ninterval = 5\n");
    // unknown keys are rejected, so a typo cannot silently fall back to defaults
    assert!(file.is_err());

    let file = RaceFile::from_toml("[race]\ntop_n = 3\nframe_interval_ms = 50\n").unwrap();
    let merged = parse(&["chat"]).apply_overrides(file.clone()).unwrap();
    assert_eq!(merged, file);
    assert_eq!(merged.race.title, DEFAULT_TITLE);
}

#[test]
fn test_top_is_clamped_through_builder() {
    let merged = parse(&["chat", "-n", "1"])
        .apply_overrides(RaceFile::default())
        .unwrap();
    assert_eq!(merged.race.top_n, 1);
}

#[test]
fn test_rejects_bad_numbers() {
    assert!(Args::try_parse_from(["chatrace", "chat", "-n", "ten"]).is_err());
    assert!(Args::try_parse_from(["chatrace", "chat", "-i", "-5"]).is_err());
}

#[test]
fn test_export_format_from_str_all_variants() {
    assert_eq!(ExportFormat::from_str("csv").unwrap(), ExportFormat::Csv);
    assert_eq!(ExportFormat::from_str("CSV").unwrap(), ExportFormat::Csv);
    assert_eq!(ExportFormat::from_str("json").unwrap(), ExportFormat::Json);
    assert_eq!(ExportFormat::from_str("Json").unwrap(), ExportFormat::Json);
    assert!(ExportFormat::from_str("").is_err());
    assert!(ExportFormat::from_str("xlsx").is_err());
}

#[test]
fn test_export_format_serde() {
    let json = serde_json::to_string(&ExportFormat::Json).unwrap();
    assert_eq!(json, "\"json\"");
    let parsed: ExportFormat = serde_json::from_str("\"csv\"").unwrap();
    assert_eq!(parsed, ExportFormat::Csv);
}

#[test]
fn test_render_target_selection() {
    assert!(matches!(
        RenderTarget::from_path(Path::new("race.gif")),
        Ok(RenderTarget::Gif(_))
    ));
    assert!(matches!(
        RenderTarget::from_path(Path::new("frames")),
        Ok(RenderTarget::PngFrames(_))
    ));
    for ext in ["mp4", "webm", "png", "csv"] {
        let path = PathBuf::from(format!("race.{ext}"));
        assert!(RenderTarget::from_path(&path).is_err(), "{ext} accepted");
    }
}

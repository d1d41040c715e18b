//! # chatrace CLI
//!
//! Command-line interface for the chatrace library.

use std::io;
use std::process;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser as ClapParser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use chatrace::ChatraceError;
use chatrace::cli::Args;
use chatrace::core::{CountTable, apply_filters, build_frames};
use chatrace::format::{ExportFormat, write_to_format};
use chatrace::parser::LogParser;
use chatrace::progress::{Progress, ProgressCallback};
use chatrace::render::{RenderTarget, render};

fn main() {
    let args = <Args as ClapParser>::parse();

    if let Err(msg) = args.validate() {
        eprintln!("❌ Error: {}", msg);
        process::exit(1);
    }

    init_logging(&args);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Installs the tracing subscriber at the level chosen by `-v` / `-q`.
///
/// `RUST_LOG`, when set, takes over unless `--quiet` is given.
fn init_logging(args: &Args) {
    let builder = FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    let installed = if std::env::var_os("RUST_LOG").is_some() && !args.quiet {
        tracing::subscriber::set_global_default(
            builder.with_env_filter(EnvFilter::from_default_env()).finish(),
        )
    } else {
        tracing::subscriber::set_global_default(
            builder.with_max_level(args.log_level()).finish(),
        )
    };

    if installed.is_err() {
        eprintln!("⚠️  Logging was already initialised");
    }
}

fn run(args: &Args) -> Result<(), ChatraceError> {
    let total_start = Instant::now();
    let quiet = args.quiet;

    let settings = args.race_file()?;
    let filter_config = args.filter_config()?;
    let data_path = args.data_path();
    let output_path = args.output_path();

    // Resolve the render target up front so a bad extension fails fast
    let target = if args.dry_run {
        None
    } else {
        Some(RenderTarget::from_path(&output_path)?)
    };
    let export_format = match &args.export {
        Some(path) => Some(ExportFormat::from_path(path)?),
        None => None,
    };

    if !quiet {
        println!("🏁 chatrace v{}", env!("CARGO_PKG_VERSION"));
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("📂 Input:   {}", data_path.display());
        match &target {
            Some(target) => {
                println!("🎬 Output:  {} ({})", target.path().display(), target.kind());
            }
            None => println!("🎬 Output:  none (--dry-run)"),
        }
        if let Some(config_path) = args.config_path() {
            println!("⚙️  Config:  {}", config_path.display());
        }
        println!("🏷️  Title:   {}", settings.race.title);
        if let Some(after) = filter_config.after {
            println!("📅 After:   {}", after);
        }
        if let Some(before) = filter_config.before {
            println!("📅 Before:  {}", before);
        }
        if filter_config.has_sender_filter() {
            println!("👤 From:    {}", filter_config.senders.join(", "));
        }
        println!();
        println!("⏳ Parsing log...");
    }

    // Step 1: Parse
    let parse_start = Instant::now();
    let parser = LogParser::with_config(settings.parse.clone())?;
    if !data_path.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("chat log not found: {}", data_path.display()),
        )
        .into());
    }
    let (entries, parse_stats) = parser.parse_file(&data_path)?;
    if !quiet {
        println!(
            "   Matched {} of {} lines ({:.1}%, {:.2}s)",
            parse_stats.matched,
            parse_stats.total_lines,
            parse_stats.match_ratio(),
            parse_start.elapsed().as_secs_f64()
        );
    }
    if entries.is_empty() {
        return Err(ChatraceError::empty_log(Some(data_path)));
    }

    // Step 2: Filter
    let entries = if filter_config.is_active() {
        let filtered = apply_filters(entries, &filter_config);
        if !quiet {
            println!("🔍 Filtering messages...");
            println!("   {} messages after filtering", filtered.len());
        }
        filtered
    } else {
        entries
    };
    let message_count = entries.len();

    // Step 3: Aggregate
    let aggregate_start = Instant::now();
    let daily = CountTable::from_entries(&entries)?;
    let daily = if settings.names.is_empty() {
        daily
    } else {
        debug!(names = settings.names.len(), "renaming senders");
        daily.rename(&settings.names)
    };
    let cumulative = daily.cumulative();
    if !quiet {
        println!("🧮 Counting messages per day...");
        println!(
            "   {} senders over {} days ({:.2}s)",
            cumulative.senders().len(),
            cumulative.len(),
            aggregate_start.elapsed().as_secs_f64()
        );
    }

    // Step 4: Export
    if let (Some(path), Some(format)) = (&args.export, export_format) {
        if !quiet {
            println!("💾 Writing {}...", format);
        }
        write_to_format(&cumulative, path, format)?;
        if !quiet {
            println!("   Saved to {}", path.display());
        }
    }

    // Step 5: Render
    let frames = build_frames(&cumulative, settings.race.top_n);
    let render_stats = match &target {
        Some(target) => {
            if !quiet {
                println!("🎨 Rendering {} frames...", frames.len());
            }
            let bar = progress_bar(frames.len(), quiet);
            let callback = progress_callback(bar.clone());
            let stats = render(&frames, &settings.race, target, &callback)?;
            bar.finish_and_clear();
            if !quiet {
                println!(
                    "   Rendered in {:.2}s ({:.1}s of animation)",
                    stats.elapsed.as_secs_f64(),
                    stats.playback(&settings.race).as_secs_f64()
                );
            }
            Some(stats)
        }
        None => {
            info!("dry run, skipping render");
            None
        }
    };

    if quiet {
        return Ok(());
    }

    let total_time = total_start.elapsed();

    println!();
    match &target {
        Some(target) => println!("✅ Done! Race saved to {}", target.path().display()),
        None => println!("✅ Done! (dry run, nothing rendered)"),
    }

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Messages:  {}", message_count);
    println!("   Senders:   {}", cumulative.senders().len());
    if let (Some(first), Some(last)) = (cumulative.first_date(), cumulative.last_date()) {
        println!("   Period:    {} to {}", first, last);
    }
    if let Some(leader) = frames.last().and_then(|f| f.leader()) {
        println!("   Leader:    {} ({} messages)", leader.sender, leader.value);
    }
    if let Some(stats) = render_stats {
        println!("   Frames:    {}", stats.frames);
    }

    // Performance stats
    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", total_time.as_secs_f64());

    Ok(())
}

/// Frame counter shown while rendering; hidden with `--quiet`.
fn progress_bar(total: usize, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("   {spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
    {
        bar.set_style(style.progress_chars("#>-"));
    }
    bar
}

fn progress_callback(bar: ProgressBar) -> ProgressCallback {
    Arc::new(move |progress: Progress| {
        bar.set_position(progress.frames_done as u64);
    })
}

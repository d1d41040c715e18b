//! Command-line interface definition using clap.
//!
//! [`Args`] follows a folder convention: the chat log is read from
//! `<FOLDER>/data.txt` and the animation is written to
//! `<FOLDER>/barchart_race.gif`. Both can be overridden. A
//! `<FOLDER>/chatrace.toml` is picked up as the config file when present.
//!
//! Precedence for every setting is: command-line flag, then config file,
//! then built-in default.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{MIN_CANVAS_SIDE, RaceFile, load_name_map};
use crate::core::FilterConfig;
use crate::error::ChatraceError;

/// Log file looked up inside the folder.
pub const DEFAULT_DATA_FILE: &str = "data.txt";

/// Animation file written inside the folder.
pub const DEFAULT_OUTPUT_FILE: &str = "barchart_race.gif";

/// Config file picked up from the folder when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "chatrace.toml";

/// Render a barchart race of who sent the most messages in a chat log.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatrace")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatrace book-club
    chatrace book-club -o race.gif --title \"Book Club\" -n 8
    chatrace family --after 2023-01-01 --names family/names.json
    chatrace family -o family/frames          # PNG frames for ffmpeg
    chatrace family --export counts.csv --dry-run")]
pub struct Args {
    /// Folder holding the chat log (data.txt)
    pub folder: PathBuf,

    /// Chat log path [default: <FOLDER>/data.txt]
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Output .gif file, or a directory for PNG frames [default: <FOLDER>/barchart_race.gif]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Chart title
    #[arg(long)]
    pub title: Option<String>,

    /// Number of bars per frame
    #[arg(short = 'n', long = "top", value_name = "N")]
    pub top_n: Option<usize>,

    /// Delay between frames in milliseconds
    #[arg(short, long, value_name = "MS")]
    pub interval: Option<u32>,

    /// Canvas width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Credit text drawn in the lower-right corner
    #[arg(long)]
    pub credit: Option<String>,

    /// JSON object mapping raw sender names to display names
    #[arg(long, value_name = "FILE")]
    pub names: Option<PathBuf>,

    /// TOML config file [default: <FOLDER>/chatrace.toml if present]
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only count messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only count messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Only count messages from this sender, as written in the log (repeatable)
    #[arg(long = "from", value_name = "USER")]
    pub from: Vec<String>,

    /// Also write the cumulative count table (.csv or .json)
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Skip lines with a blank sender
    #[arg(long)]
    pub skip_system: bool,

    /// Parse and aggregate only; do not render
    #[arg(long)]
    pub dry_run: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Checks option combinations clap cannot express.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose > 0 && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }
        if self.top_n == Some(0) {
            return Err("--top must be at least 1".to_string());
        }
        if self.interval == Some(0) {
            return Err("--interval must be at least 1 ms".to_string());
        }
        if self.width.is_some_and(|w| w < MIN_CANVAS_SIDE)
            || self.height.is_some_and(|h| h < MIN_CANVAS_SIDE)
        {
            return Err(format!(
                "--width and --height must be at least {MIN_CANVAS_SIDE} pixels"
            ));
        }
        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::ERROR;
        }
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }

    /// Chat log to read.
    pub fn data_path(&self) -> PathBuf {
        self.data
            .clone()
            .unwrap_or_else(|| self.folder.join(DEFAULT_DATA_FILE))
    }

    /// Where the animation goes.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.folder.join(DEFAULT_OUTPUT_FILE))
    }

    /// Config file to load: `--config`, else `chatrace.toml` in the folder
    /// if it exists.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(|| {
            let candidate = self.folder.join(DEFAULT_CONFIG_FILE);
            candidate.is_file().then_some(candidate)
        })
    }

    /// Loads the config file (if any), applies command-line overrides and
    /// validates the merged `[race]` settings.
    pub fn race_file(&self) -> Result<RaceFile, ChatraceError> {
        let config_path = self.config_path();
        let file = match &config_path {
            Some(path) => RaceFile::load(path)?,
            None => RaceFile::default(),
        };
        let file = self.apply_overrides(file)?;

        file.race.validate().map_err(|e| match e {
            ChatraceError::Config { message, .. } => ChatraceError::config(config_path, message),
            other => other,
        })?;
        Ok(file)
    }

    /// Applies command-line flags on top of `file`.
    ///
    /// Names from `--names` are merged over the `[names]` table.
    pub fn apply_overrides(&self, mut file: RaceFile) -> Result<RaceFile, ChatraceError> {
        if self.skip_system {
            file.parse.skip_system_messages = true;
        }

        let mut race = file.race;
        if let Some(title) = &self.title {
            race = race.with_title(title.clone());
        }
        if let Some(n) = self.top_n {
            race = race.with_top_n(n);
        }
        if let Some(ms) = self.interval {
            race = race.with_frame_interval_ms(ms);
        }
        if self.width.is_some() || self.height.is_some() {
            let width = self.width.unwrap_or(race.width);
            let height = self.height.unwrap_or(race.height);
            race = race.with_size(width, height);
        }
        if let Some(credit) = &self.credit {
            race = race.with_credit(credit.clone());
        }
        file.race = race;

        if let Some(path) = &self.names {
            file.names.extend(load_name_map(path)?);
        }

        Ok(file)
    }

    /// Entry filter built from `--after`, `--before` and `--from`.
    pub fn filter_config(&self) -> Result<FilterConfig, ChatraceError> {
        let mut filter = FilterConfig::new();
        if let Some(after) = &self.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(before) = &self.before {
            filter = filter.with_date_to(before)?;
        }
        for sender in &self.from {
            filter = filter.with_sender(sender.clone());
        }
        Ok(filter)
    }
}

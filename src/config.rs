//! Configuration types for parsing and rendering.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParseConfig`] - line pattern and date format
//! - [`RaceConfig`] - title, bar count, frame timing and canvas size
//! - [`NameMap`] - renames raw sender names for display
//! - [`RaceFile`] - all of the above loaded from one TOML file
//!
//! # Example
//!
//! ```rust
//! use chatrace::config::{ParseConfig, RaceConfig};
//!
//! let parse = ParseConfig::new().with_skip_system_messages(true);
//! let race = RaceConfig::new()
//!     .with_title("Family Chat")
//!     .with_top_n(5)
//!     .with_frame_interval_ms(100);
//!
//! assert_eq!(race.top_n, 5);
//! assert!(parse.skip_system_messages);
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ChatraceError;

/// Default line pattern: `M/D/YY, H:MM - Sender:`.
///
/// Group 1 is the date, group 2 the time and group 3 the sender.
pub const DEFAULT_PATTERN: &str = r"(\d{1,2}/\d{1,2}/\d{2}), (\d{1,2}:\d{1,2}) - ([^:]*):";

/// Default chrono format for the date group.
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%y";

/// Default chart title.
pub const DEFAULT_TITLE: &str = "Group Chat Message Count";

/// Smallest accepted canvas width or height, in pixels.
pub const MIN_CANVAS_SIDE: u32 = 100;

/// Maps raw sender names to display names.
pub type NameMap = BTreeMap<String, String>;

/// Configuration for the line parser.
///
/// # Example
///
/// ```rust
/// use chatrace::config::ParseConfig;
///
/// let config = ParseConfig::new()
///     .with_pattern(r"^\[(\d{2}\.\d{2}\.\d{2}), (\d{2}:\d{2})\] ([^:]+):")
///     .with_date_format("%d.%m.%y");
///
/// assert_eq!(config.date_format, "%d.%m.%y");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseConfig {
    /// Regex applied at the start of every line (default: [`DEFAULT_PATTERN`])
    pub pattern: String,

    /// chrono format for capture group 1 (default: `%m/%d/%y`)
    pub date_format: String,

    /// Skip lines whose sender group is blank (default: false)
    pub skip_system_messages: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            skip_system_messages: false,
        }
    }
}

impl ParseConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the line pattern.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Sets the date format used for capture group 1.
    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Sets whether lines with a blank sender are skipped.
    #[must_use]
    pub fn with_skip_system_messages(mut self, skip: bool) -> Self {
        self.skip_system_messages = skip;
        self
    }
}

/// Configuration for the barchart race animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RaceConfig {
    /// Chart title drawn top-left (default: "Group Chat Message Count")
    pub title: String,

    /// Number of bars shown per frame (default: 10)
    pub top_n: usize,

    /// Delay between frames in milliseconds (default: 200)
    pub frame_interval_ms: u32,

    /// Canvas width in pixels (default: 1500)
    pub width: u32,

    /// Canvas height in pixels (default: 800)
    pub height: u32,

    /// Small attribution text in the lower-right corner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit: Option<String>,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            top_n: 10,
            frame_interval_ms: 200,
            width: 1500,
            height: 800,
            credit: None,
        }
    }
}

impl RaceConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the chart title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets how many bars each frame shows. Zero is raised to one.
    #[must_use]
    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = n.max(1);
        self
    }

    /// Sets the delay between frames.
    #[must_use]
    pub fn with_frame_interval_ms(mut self, ms: u32) -> Self {
        self.frame_interval_ms = ms;
        self
    }

    /// Sets the canvas size in pixels.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the attribution text.
    #[must_use]
    pub fn with_credit(mut self, credit: impl Into<String>) -> Self {
        self.credit = Some(credit.into());
        self
    }

    /// Checks that the settings describe a drawable animation.
    ///
    /// Values decoded from a config file bypass the builders, so this is
    /// the one place their ranges are enforced.
    ///
    /// # Errors
    ///
    /// Returns [`ChatraceError::Config`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ChatraceError> {
        if self.top_n == 0 {
            return Err(ChatraceError::config(None, "top_n must be at least 1"));
        }
        if self.frame_interval_ms == 0 {
            return Err(ChatraceError::config(
                None,
                "frame_interval_ms must be at least 1",
            ));
        }
        if self.width < MIN_CANVAS_SIDE || self.height < MIN_CANVAS_SIDE {
            return Err(ChatraceError::config(
                None,
                format!(
                    "canvas must be at least {MIN_CANVAS_SIDE}x{MIN_CANVAS_SIDE} pixels, got {}x{}",
                    self.width, self.height
                ),
            ));
        }
        Ok(())
    }
}

/// Everything configurable, as read from a TOML file.
///
/// ```toml
/// [parse]
/// date_format = "%m/%d/%y"
///
/// [race]
/// title = "Book Club"
/// top_n = 8
///
/// [names]
/// "+1 555 0100" = "Alice"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RaceFile {
    /// Parser settings
    pub parse: ParseConfig,

    /// Animation settings
    pub race: RaceConfig,

    /// Sender renames
    pub names: NameMap,
}

impl RaceFile {
    /// Loads a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ChatraceError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| match e {
            ChatraceError::Config { message, .. } => {
                ChatraceError::config(Some(path.to_path_buf()), message)
            }
            other => other,
        })
    }

    /// Decodes a TOML config from a string.
    pub fn from_toml(content: &str) -> Result<Self, ChatraceError> {
        toml::from_str(content).map_err(|e| ChatraceError::config(None, e.to_string()))
    }

    /// Encodes this config as TOML.
    pub fn to_toml(&self) -> Result<String, ChatraceError> {
        toml::to_string_pretty(self).map_err(|e| ChatraceError::config(None, e.to_string()))
    }
}

/// Loads a name map from a JSON object file (`{"raw name": "Display"}`).
pub fn load_name_map(path: &Path) -> Result<NameMap, ChatraceError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| ChatraceError::config(Some(path.to_path_buf()), e.to_string()))
}

//! Barchart race rendering.
//!
//! Frames are drawn with [plotters](https://docs.rs/plotters) either into a
//! single animated GIF or as numbered PNG files in a directory. The PNG
//! sequence can be handed to any video encoder, for example
//! `ffmpeg -framerate 5 -i frame_%05d.png race.mp4`.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatrace::config::RaceConfig;
//! use chatrace::core::{CountTable, build_frames};
//! use chatrace::parser::LogParser;
//! use chatrace::progress::no_progress;
//! use chatrace::render::{RenderTarget, render};
//! use std::path::Path;
//!
//! # fn main() -> chatrace::Result<()> {
//! let (entries, _) = LogParser::new().parse_file(Path::new("chat/data.txt"))?;
//! let cumulative = CountTable::from_entries(&entries)?.cumulative();
//! let config = RaceConfig::new().with_title("Book Club");
//! let frames = build_frames(&cumulative, config.top_n);
//!
//! let target = RenderTarget::from_path(Path::new("chat/barchart_race.gif"))?;
//! let stats = render(&frames, &config, &target, &no_progress())?;
//! println!("{} frames", stats.frames);
//! # Ok(())
//! # }
//! ```

pub mod layout;
mod race;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use plotters::prelude::*;
use tracing::{debug, info};

use crate::config::RaceConfig;
use crate::core::frames::Frame;
use crate::error::ChatraceError;
use crate::progress::{Progress, ProgressCallback};

pub use race::draw_frame;

/// Where rendered frames go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderTarget {
    /// One animated GIF file.
    Gif(PathBuf),

    /// A directory of `frame_00000.png`, `frame_00001.png`, ...
    PngFrames(PathBuf),
}

impl RenderTarget {
    /// Picks a target from an output path.
    ///
    /// `*.gif` renders an animation; a path without extension, or an
    /// existing directory, receives PNG frames.
    pub fn from_path(path: &Path) -> Result<Self, ChatraceError> {
        if path.is_dir() {
            return Ok(RenderTarget::PngFrames(path.to_path_buf()));
        }

        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("gif") => Ok(RenderTarget::Gif(path.to_path_buf())),
            None => Ok(RenderTarget::PngFrames(path.to_path_buf())),
            Some(ext) => Err(ChatraceError::unsupported_output(
                path,
                format!(
                    "cannot render '.{}'. Use a .gif file, or a directory for PNG frames \
                     that a video encoder can pick up",
                    ext
                ),
            )),
        }
    }

    /// The output path.
    pub fn path(&self) -> &Path {
        match self {
            RenderTarget::Gif(path) | RenderTarget::PngFrames(path) => path,
        }
    }

    /// Short name for status output.
    pub fn kind(&self) -> &'static str {
        match self {
            RenderTarget::Gif(_) => "GIF",
            RenderTarget::PngFrames(_) => "PNG frames",
        }
    }

    /// Creates missing directories. For PNG frames, also deletes frames
    /// left in the directory by an earlier run.
    ///
    /// Only files named like [`frame_file_name`] are removed. Returns how
    /// many were deleted.
    pub fn prepare(&self) -> Result<usize, ChatraceError> {
        match self {
            RenderTarget::Gif(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)?;
                }
                Ok(0)
            }
            RenderTarget::PngFrames(dir) => {
                fs::create_dir_all(dir)?;

                let mut removed = 0;
                for dir_entry in fs::read_dir(dir)? {
                    let dir_entry = dir_entry?;
                    let stale = dir_entry
                        .file_name()
                        .to_str()
                        .is_some_and(is_frame_file_name);
                    if stale && dir_entry.file_type()?.is_file() {
                        fs::remove_file(dir_entry.path())?;
                        removed += 1;
                    }
                }
                if removed > 0 {
                    info!(removed, dir = %dir.display(), "removed frames from a previous run");
                }
                Ok(removed)
            }
        }
    }
}

/// Outcome of a rendering run.
#[derive(Debug, Clone, Copy)]
pub struct RenderStats {
    /// Frames written.
    pub frames: usize,

    /// Wall time spent drawing and encoding.
    pub elapsed: Duration,
}

impl RenderStats {
    /// Playback length of the animation.
    pub fn playback(&self, config: &RaceConfig) -> Duration {
        Duration::from_millis(self.frames as u64 * u64::from(config.frame_interval_ms))
    }
}

/// File name of frame `index` in a PNG sequence.
pub fn frame_file_name(index: usize) -> String {
    format!("frame_{:05}.png", index)
}

/// Whether `name` is one of ours: `frame_` + at least five digits + `.png`.
fn is_frame_file_name(name: &str) -> bool {
    name.strip_prefix("frame_")
        .and_then(|rest| rest.strip_suffix(".png"))
        .is_some_and(|digits| digits.len() >= 5 && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Draws every frame, in order, to `target`.
///
/// `progress` is called after each frame.
///
/// # Errors
///
/// Returns [`ChatraceError::EmptyLog`] when `frames` is empty,
/// [`ChatraceError::Config`] when `config` fails [`RaceConfig::validate`]
/// and [`ChatraceError::Render`] when drawing or encoding fails.
pub fn render(
    frames: &[Frame],
    config: &RaceConfig,
    target: &RenderTarget,
    progress: &ProgressCallback,
) -> Result<RenderStats, ChatraceError> {
    if frames.is_empty() {
        return Err(ChatraceError::empty_log(None));
    }
    config.validate()?;
    target.prepare()?;

    let start = Instant::now();
    let total = frames.len();
    let size = (config.width, config.height);
    info!(frames = total, target = %target.path().display(), "rendering race");

    match target {
        RenderTarget::Gif(path) => {
            let root = BitMapBackend::gif(path, size, config.frame_interval_ms)
                .map_err(ChatraceError::render)?
                .into_drawing_area();

            for (idx, frame) in frames.iter().enumerate() {
                draw_frame(&root, frame, config)?;
                root.present().map_err(ChatraceError::render)?;
                progress(Progress::new(idx + 1, Some(total)));
            }
        }
        RenderTarget::PngFrames(dir) => {
            for (idx, frame) in frames.iter().enumerate() {
                let path = dir.join(frame_file_name(idx));
                let root = BitMapBackend::new(&path, size).into_drawing_area();
                draw_frame(&root, frame, config)?;
                root.present().map_err(ChatraceError::render)?;
                debug!(file = %path.display(), "wrote frame");
                progress(Progress::new(idx + 1, Some(total)));
            }
        }
    }

    Ok(RenderStats {
        frames: total,
        elapsed: start.elapsed(),
    })
}

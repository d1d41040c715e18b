//! Progress reporting for frame rendering.
//!
//! Rendering a long chat history can take a while, one frame per day. The
//! renderer pushes a [`Progress`] to an optional callback after each frame.
//!
//! # Example
//!
//! ```rust
//! use chatrace::progress::{Progress, ProgressCallback};
//! use std::sync::Arc;
//!
//! let callback: ProgressCallback = Arc::new(|progress| {
//!     if let Some(pct) = progress.percentage() {
//!         println!("Rendered {:.1}%", pct);
//!     }
//! });
//!
//! for i in 0..10usize {
//!     callback(Progress::new(i + 1, Some(10)));
//! }
//! ```

use std::sync::Arc;

/// Progress of a rendering run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    /// Frames finished so far.
    pub frames_done: usize,

    /// Total frames, if known.
    pub total_frames: Option<usize>,
}

impl Progress {
    /// Creates a new progress instance.
    pub fn new(frames_done: usize, total_frames: Option<usize>) -> Self {
        Self {
            frames_done,
            total_frames,
        }
    }

    /// Returns the progress as a percentage (0.0 - 100.0).
    ///
    /// Returns `None` if the total is not known.
    ///
    /// ```rust
    /// use chatrace::progress::Progress;
    ///
    /// assert_eq!(Progress::new(5, Some(10)).percentage(), Some(50.0));
    /// assert_eq!(Progress::new(5, None).percentage(), None);
    /// ```
    pub fn percentage(&self) -> Option<f64> {
        self.total_frames.map(|total| {
            if total == 0 {
                100.0
            } else {
                (self.frames_done as f64 / total as f64) * 100.0
            }
        })
    }

    /// Returns whether every frame is done.
    pub fn is_complete(&self) -> bool {
        self.total_frames
            .map(|total| self.frames_done >= total)
            .unwrap_or(false)
    }

    /// Returns the frames left to render.
    pub fn remaining(&self) -> Option<usize> {
        self.total_frames
            .map(|total| total.saturating_sub(self.frames_done))
    }
}

/// Callback type for receiving progress updates.
pub type ProgressCallback = Arc<dyn Fn(Progress) + Send + Sync>;

/// Creates a no-op progress callback.
///
/// Pass this to [`render`](crate::render::render) when no updates are needed.
pub fn no_progress() -> ProgressCallback {
    Arc::new(|_| {})
}

//! Core aggregation: filtering, counting and frame layout.
//!
//! - [`filter`] - drop entries outside a date range or sender list
//! - [`table`] - [`CountTable`] of daily and cumulative counts
//! - [`palette`] - fixed per-sender bar colours
//! - [`frames`] - top-N [`Frame`] layout for each day
//! - [`output`] - CSV / JSON export of a [`CountTable`]

pub mod filter;
pub mod frames;
pub mod output;
pub mod palette;
pub mod table;

pub use filter::{FilterConfig, apply_filters};
pub use frames::{Bar, Frame, build_frames};
pub use palette::Rgb;
pub use table::CountTable;

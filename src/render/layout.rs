//! Pixel geometry of a race frame.
//!
//! Everything here is plain arithmetic on canvas coordinates so it can be
//! checked without a drawing backend. `y` grows downwards.

use crate::config::RaceConfig;
use crate::core::frames::Frame;

/// Axis-aligned rectangle in pixels, `(left, top)` to `(right, bottom)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PixelRect {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn center_y(&self) -> i32 {
        (self.top + self.bottom) / 2
    }
}

/// One bar, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarGeometry {
    /// Index into `Frame::bars`.
    pub bar: usize,
    pub rect: PixelRect,
}

/// Gridline at a round value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub value: u64,
    pub x: i32,
}

/// Full layout of one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayout {
    /// Area bars are drawn in; sender names sit to its left.
    pub plot: PixelRect,
    /// Value at the right edge of `plot`.
    pub axis_max: u64,
    pub ticks: Vec<Tick>,
    pub bars: Vec<BarGeometry>,
    /// Multiplier for font sizes relative to an 800px tall canvas.
    pub scale: f64,
}

/// Fraction of a slot left empty between bars.
const BAR_GAP: f64 = 0.2;

impl FrameLayout {
    /// Lays out `frame` on a canvas of `config.width` × `config.height`.
    ///
    /// Slots are sized for `config.top_n` bars, so bar thickness stays
    /// constant while senders join the race. The leader takes the top slot.
    pub fn compute(frame: &Frame, config: &RaceConfig) -> Self {
        let width = config.width as i32;
        let height = config.height as i32;
        let scale = f64::from(config.height) / 800.0;

        let plot = PixelRect {
            left: (f64::from(config.width) * 0.16) as i32,
            top: (90.0 * scale) as i32,
            right: width - (60.0 * scale) as i32,
            bottom: height - (40.0 * scale) as i32,
        };

        let axis_max = axis_max(frame.max_value());
        let x_of = |value: u64| {
            plot.left + (value as f64 / axis_max as f64 * f64::from(plot.width())) as i32
        };

        let step = tick_step(axis_max);
        let ticks = (0..)
            .map(|i| i * step)
            .take_while(|v| *v <= axis_max)
            .map(|value| Tick {
                value,
                x: x_of(value),
            })
            .collect();

        let slots = config.top_n.max(frame.bars.len()).max(1);
        let slot_height = f64::from(plot.height()) / slots as f64;
        let pad = (slot_height * BAR_GAP / 2.0) as i32;
        let count = frame.bars.len();

        let bars = frame
            .bars
            .iter()
            .enumerate()
            .map(|(idx, bar)| {
                let rank = count - 1 - idx;
                let top = plot.top + (rank as f64 * slot_height) as i32;
                let bottom = plot.top + ((rank + 1) as f64 * slot_height) as i32;
                BarGeometry {
                    bar: idx,
                    rect: PixelRect {
                        left: plot.left,
                        top: top + pad,
                        right: x_of(bar.value).max(plot.left + 1),
                        bottom: bottom - pad,
                    },
                }
            })
            .collect();

        Self {
            plot,
            axis_max,
            ticks,
            bars,
            scale,
        }
    }

    /// Font size in pixels for a size given at 800px canvas height.
    pub fn font_size(&self, base: f64) -> f64 {
        (base * self.scale).max(8.0)
    }
}

/// Right edge value of the axis: 5% head-room over the leader, at least 1.
pub fn axis_max(max_value: u64) -> u64 {
    (max_value + max_value.div_ceil(20)).max(1)
}

/// Round gridline spacing giving roughly five ticks up to `max`.
///
/// Steps are 1, 2 or 5 times a power of ten.
pub fn tick_step(max: u64) -> u64 {
    if max <= 5 {
        return 1;
    }
    let raw = max as f64 / 5.0;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    (nice * magnitude) as u64
}

//! Drawing a laid-out frame with plotters.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontStyle;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::layout::FrameLayout;
use crate::config::RaceConfig;
use crate::core::frames::Frame;
use crate::core::palette::Rgb;
use crate::error::ChatraceError;

const FONT: &str = "sans-serif";
const LABEL_GREY: RGBColor = RGBColor(0x77, 0x77, 0x77);
const GRID_GREY: RGBColor = RGBColor(0xdd, 0xdd, 0xdd);
const TEXT_DARK: RGBColor = RGBColor(0x33, 0x33, 0x33);

fn to_color(rgb: Rgb) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}

fn text_style(size: f64, weight: FontStyle, color: RGBColor, pos: Pos) -> TextStyle<'static> {
    (FONT, size, weight).into_font().color(&color).pos(pos)
}

/// Draws one frame onto `root`, replacing whatever was there.
pub fn draw_frame<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    frame: &Frame,
    config: &RaceConfig,
) -> Result<(), ChatraceError> {
    let layout = FrameLayout::compute(frame, config);
    let plot = layout.plot;

    root.fill(&WHITE).map_err(ChatraceError::render)?;

    // value gridlines with labels above the plot
    let tick_style = text_style(
        layout.font_size(14.0),
        FontStyle::Normal,
        LABEL_GREY,
        Pos::new(HPos::Center, VPos::Bottom),
    );
    for tick in &layout.ticks {
        root.draw(&PathElement::new(
            vec![(tick.x, plot.top), (tick.x, plot.bottom)],
            GRID_GREY.stroke_width(1),
        ))
        .map_err(ChatraceError::render)?;
        root.draw(&Text::new(
            tick.value.to_string(),
            (tick.x, plot.top - 6),
            tick_style.clone(),
        ))
        .map_err(ChatraceError::render)?;
    }

    let name_style = text_style(
        layout.font_size(18.0),
        FontStyle::Normal,
        TEXT_DARK,
        Pos::new(HPos::Right, VPos::Center),
    );
    let value_style = text_style(
        layout.font_size(16.0),
        FontStyle::Normal,
        TEXT_DARK,
        Pos::new(HPos::Left, VPos::Center),
    );
    for geo in &layout.bars {
        let bar = &frame.bars[geo.bar];
        let rect = geo.rect;

        root.draw(&Rectangle::new(
            [(rect.left, rect.top), (rect.right, rect.bottom)],
            to_color(bar.color).filled(),
        ))
        .map_err(ChatraceError::render)?;
        root.draw(&Text::new(
            bar.sender.clone(),
            (rect.left - 8, rect.center_y()),
            name_style.clone(),
        ))
        .map_err(ChatraceError::render)?;
        root.draw(&Text::new(
            bar.value.to_string(),
            (rect.right + 6, rect.center_y()),
            value_style.clone(),
        ))
        .map_err(ChatraceError::render)?;
    }

    // large date in the lower right of the plot, 40% up from the bottom
    let date_y = plot.bottom - (f64::from(plot.height()) * 0.4) as i32;
    root.draw(&Text::new(
        frame.date_label(),
        (plot.right, date_y),
        text_style(
            layout.font_size(40.0),
            FontStyle::Bold,
            LABEL_GREY,
            Pos::new(HPos::Right, VPos::Center),
        ),
    ))
    .map_err(ChatraceError::render)?;

    root.draw(&Text::new(
        config.title.clone(),
        (plot.left, (30.0 * layout.scale) as i32),
        text_style(
            layout.font_size(24.0),
            FontStyle::Bold,
            BLACK,
            Pos::new(HPos::Left, VPos::Center),
        ),
    ))
    .map_err(ChatraceError::render)?;

    if let Some(credit) = &config.credit {
        let style = text_style(
            layout.font_size(14.0),
            FontStyle::Normal,
            LABEL_GREY,
            Pos::new(HPos::Right, VPos::Bottom),
        );
        let anchor = (plot.right - 8, plot.bottom - 8);
        let (w, h) = root
            .estimate_text_size(credit, &style)
            .map_err(ChatraceError::render)?;
        root.draw(&Rectangle::new(
            [
                (anchor.0 - w as i32 - 4, anchor.1 - h as i32 - 4),
                (anchor.0 + 4, anchor.1 + 4),
            ],
            WHITE.mix(0.8).filled(),
        ))
        .map_err(ChatraceError::render)?;
        root.draw(&Text::new(credit.clone(), anchor, style))
            .map_err(ChatraceError::render)?;
    }

    Ok(())
}

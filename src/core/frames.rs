//! Per-day frame layout for the barchart race.
//!
//! A [`Frame`] is everything the renderer needs for one day: the date and
//! the top-N bars with their values and colours. Layout is kept apart from
//! drawing so it can be tested without a canvas.

use chrono::NaiveDate;
use serde::Serialize;

use super::palette::Rgb;
use super::table::CountTable;

/// Date label format drawn on every frame.
pub const DATE_LABEL_FORMAT: &str = "%Y-%m-%d";

/// One bar of a frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bar {
    /// Display name of the sender.
    pub sender: String,

    /// Bar length (message count).
    pub value: u64,

    /// Fill colour, fixed per sender.
    pub color: Rgb,
}

/// One animation frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    /// The day this frame shows.
    pub date: NaiveDate,

    /// Bars in ascending order of value; the leader is last.
    pub bars: Vec<Bar>,
}

impl Frame {
    /// `YYYY-MM-DD` label for the frame.
    pub fn date_label(&self) -> String {
        self.date.format(DATE_LABEL_FORMAT).to_string()
    }

    /// Largest bar value, zero for an empty frame.
    pub fn max_value(&self) -> u64 {
        self.bars.iter().map(|b| b.value).max().unwrap_or(0)
    }

    /// The sender currently in front, if any.
    pub fn leader(&self) -> Option<&Bar> {
        self.bars.last()
    }
}

/// Lays out one frame per table row.
///
/// Each frame keeps the `top_n` largest senders of that row. Ranking is by
/// value, with ties going to the sender who appears first in the table.
/// `top_n` of zero is treated as one.
pub fn build_frames(table: &CountTable, top_n: usize) -> Vec<Frame> {
    let colors: Vec<Rgb> = (0..table.senders().len()).map(Rgb::for_column).collect();
    let top_n = top_n.max(1);

    table
        .rows()
        .map(|(date, row)| {
            let mut ranked: Vec<usize> = (0..row.len()).collect();
            // stable sort keeps column order among equal values
            ranked.sort_by(|&a, &b| row[b].cmp(&row[a]));
            ranked.truncate(top_n);

            let bars = ranked
                .into_iter()
                .rev()
                .map(|col| Bar {
                    sender: table.senders()[col].clone(),
                    value: row[col],
                    color: colors[col],
                })
                .collect();

            Frame { date, bars }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::LogEntry;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 1, d).unwrap()
    }

    fn table(rows: &[(u32, &str)]) -> CountTable {
        let entries: Vec<LogEntry> = rows
            .iter()
            .map(|&(d, sender)| LogEntry::new(date(d), sender))
            .collect();
        CountTable::from_entries(&entries).unwrap().cumulative()
    }

    fn senders(frame: &Frame) -> Vec<&str> {
        frame.bars.iter().map(|b| b.sender.as_str()).collect()
    }

    #[test]
    fn test_one_frame_per_day() {
        let frames = build_frames(&table(&[(1, "A"), (4, "B")]), 10);
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0].date_label(), "2022-01-01");
        assert_eq!(frames[3].date_label(), "2022-01-04");
    }

    #[test]
    fn test_bars_ascending_leader_last() {
        let frames = build_frames(
            &table(&[(1, "A"), (1, "B"), (1, "B"), (1, "C"), (1, "C"), (1, "C")]),
            10,
        );
        let frame = &frames[0];

        assert_eq!(senders(frame), ["A", "B", "C"]);
        assert_eq!(frame.leader().map(|b| b.value), Some(3));
        assert_eq!(frame.max_value(), 3);
    }

    #[test]
    fn test_overtaking_reorders_bars() {
        let frames = build_frames(
            &table(&[(1, "A"), (1, "A"), (1, "B"), (2, "B"), (2, "B")]),
            10,
        );
        assert_eq!(senders(&frames[0]), ["B", "A"]);
        assert_eq!(senders(&frames[1]), ["A", "B"]);
    }

    #[test]
    fn test_top_n_truncates_smallest() {
        let frames = build_frames(
            &table(&[(1, "A"), (1, "B"), (1, "B"), (1, "C"), (1, "C"), (1, "C")]),
            2,
        );
        assert_eq!(senders(&frames[0]), ["B", "C"]);
    }

    #[test]
    fn test_ties_favour_earlier_sender() {
        let frames = build_frames(&table(&[(1, "A"), (1, "B"), (1, "C")]), 2);
        // A and B survive the cut, A ranks above B
        assert_eq!(senders(&frames[0]), ["B", "A"]);
    }

    #[test]
    fn test_zero_top_n_shows_one_bar() {
        let frames = build_frames(&table(&[(1, "A"), (1, "B")]), 0);
        assert_eq!(frames[0].bars.len(), 1);
    }

    #[test]
    fn test_colours_follow_sender_not_rank() {
        let frames = build_frames(
            &table(&[(1, "A"), (1, "A"), (1, "B"), (2, "B"), (2, "B")]),
            10,
        );
        let color_of = |frame: &Frame, name: &str| {
            frame
                .bars
                .iter()
                .find(|b| b.sender == name)
                .map(|b| b.color)
        };

        assert_eq!(color_of(&frames[0], "A"), Some(Rgb::for_column(0)));
        assert_eq!(color_of(&frames[1], "A"), Some(Rgb::for_column(0)));
        assert_eq!(color_of(&frames[1], "B"), Some(Rgb::for_column(1)));
    }
}

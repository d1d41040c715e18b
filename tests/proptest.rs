//! Property-based tests for aggregation and frame layout
//!
//! Run with: cargo test --test proptest

use proptest::prelude::*;

use chatrace::config::NameMap;
use chatrace::core::{CountTable, FilterConfig, apply_filters, build_frames};
use chatrace::parser::LogParser;
use chatrace::LogEntry;
use chrono::{Duration, NaiveDate};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

fn arb_entry() -> impl Strategy<Value = LogEntry> {
    (
        prop::sample::select(vec!["Alice", "Bob", "Carol", "Dave", "Иван", "Eve 🔥"]),
        0i64..120,
    )
        .prop_map(|(sender, offset)| LogEntry::new(base_date() + Duration::days(offset), sender))
}

fn arb_entries(max_len: usize) -> impl Strategy<Value = Vec<LogEntry>> {
    prop::collection::vec(arb_entry(), 1..max_len)
}

proptest! {
    #[test]
    fn grand_total_equals_entry_count(entries in arb_entries(60)) {
        let table = CountTable::from_entries(&entries).unwrap();
        prop_assert_eq!(table.grand_total(), entries.len() as u64);
    }

    #[test]
    fn dates_are_contiguous(entries in arb_entries(60)) {
        let table = CountTable::from_entries(&entries).unwrap();
        let min = entries.iter().map(|e| e.date).min().unwrap();
        let max = entries.iter().map(|e| e.date).max().unwrap();

        prop_assert_eq!(table.first_date(), Some(min));
        prop_assert_eq!(table.last_date(), Some(max));
        prop_assert_eq!(table.len() as i64, (max - min).num_days() + 1);
        for pair in table.dates().windows(2) {
            prop_assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn cumulative_columns_never_decrease(entries in arb_entries(60)) {
        let cumulative = CountTable::from_entries(&entries).unwrap().cumulative();
        for sender in cumulative.senders() {
            let column = cumulative.column(sender).unwrap();
            prop_assert!(column.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn cumulative_last_row_is_totals(entries in arb_entries(60)) {
        let daily = CountTable::from_entries(&entries).unwrap();
        let cumulative = daily.cumulative();
        let last = cumulative.row(cumulative.last_date().unwrap()).unwrap();
        let totals: Vec<u64> = daily.totals().into_iter().map(|(_, n)| n).collect();
        prop_assert_eq!(last, totals.as_slice());
    }

    #[test]
    fn rename_preserves_total(entries in arb_entries(60), merge_all in any::<bool>()) {
        let daily = CountTable::from_entries(&entries).unwrap();
        let mut names = NameMap::new();
        names.insert("Bob".into(), if merge_all { "Alice".into() } else { "Robert".into() });
        names.insert("Carol".into(), "Alice".into());

        let renamed = daily.rename(&names);
        prop_assert_eq!(renamed.grand_total(), daily.grand_total());
        prop_assert_eq!(renamed.len(), daily.len());

        let mut unique = renamed.senders().to_vec();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), renamed.senders().len());
    }

    #[test]
    fn frames_respect_top_n(entries in arb_entries(60), top_n in 0usize..8) {
        let cumulative = CountTable::from_entries(&entries).unwrap().cumulative();
        let frames = build_frames(&cumulative, top_n);

        prop_assert_eq!(frames.len(), cumulative.len());
        for frame in &frames {
            prop_assert!(frame.bars.len() <= top_n.max(1));
            prop_assert!(frame.bars.windows(2).all(|w| w[0].value <= w[1].value));
            prop_assert_eq!(frame.leader().map(|b| b.value).unwrap_or(0), frame.max_value());
        }
    }

    #[test]
    fn frame_leader_never_loses_ground(entries in arb_entries(60)) {
        let cumulative = CountTable::from_entries(&entries).unwrap().cumulative();
        let frames = build_frames(&cumulative, 3);
        let maxima: Vec<u64> = frames.iter().map(|f| f.max_value()).collect();
        prop_assert!(maxima.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn filter_never_increases_count(entries in arb_entries(40), offset in 0i64..120) {
        let filter = FilterConfig::new().with_after(base_date() + Duration::days(offset));
        let original = entries.len();
        let filtered = apply_filters(entries, &filter);
        prop_assert!(filtered.len() <= original);
    }

    #[test]
    fn formatted_lines_parse_back(entries in arb_entries(40)) {
        let log: String = entries
            .iter()
            .map(|e| format!("{}, 12:00 - {}: text: with colons\n", e.date.format("%-m/%-d/%y"), e.sender))
            .collect();

        let (parsed, stats) = LogParser::new().parse_str(&log);
        prop_assert_eq!(stats.skipped, 0);
        prop_assert_eq!(parsed.len(), entries.len());
        for (got, want) in parsed.iter().zip(&entries) {
            prop_assert_eq!(got.date, want.date);
            prop_assert_eq!(&got.sender, &want.sender);
        }
    }

    #[test]
    fn parser_never_panics(line in "\\PC{0,80}") {
        let _ = LogParser::new().parse_line(&line);
    }
}

//! Synthetic chat log generator for stress testing chatrace.
//!
//! Usage: cargo run --features gen-test --bin gen_log -- [messages] [output] [days]
//! Example: cargo run --features gen-test --bin gen_log -- 200000 big/data.txt 730
//!
//! Lines use the default `M/D/YY, H:MM - Sender: text` format. Some
//! messages span several lines and a few lines are noise, so the parser's
//! skip path gets exercised too.

use chrono::{Duration, NaiveDate};
use rand::Rng;
use rand::distributions::WeightedIndex;
use rand::prelude::Distribution;
use rand::seq::SliceRandom;
use std::env;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

const SENDERS: &[(&str, u32)] = &[
    ("Alice", 30),
    ("Bob", 22),
    ("Carol", 15),
    ("Dave", 10),
    ("Иван", 8),
    ("村上", 6),
    ("+1 555 0100", 5),
    ("Eve 🔥", 4),
    ("Frank", 3),
    ("Grace", 2),
    ("Heidi", 2),
    ("Mallory", 1),
];

const TEXTS: &[&str] = &[
    "ok",
    "haha",
    "see you at 8: bring snacks",
    "did anyone read chapter 4?",
    "<Media omitted>",
    "Кто идёт?",
    "👍",
    "https://example.com/a:b:c",
];

const NOISE: &[&str] = &[
    "Messages and calls are end-to-end encrypted.",
    "-------------------------------------------",
    "",
    "13/45/99, 99:99 - Nobody: impossible date",
];

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map(String::as_str).unwrap_or("data.txt");
    let days: i64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(365).max(1);

    println!("🧪 Chat Log Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!("   Days:     {}", days);
    println!();

    if let Some(parent) = Path::new(output).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);
    let mut rng = rand::thread_rng();

    let weights = WeightedIndex::new(SENDERS.iter().map(|(_, w)| *w))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let start_day = NaiveDate::from_ymd_opt(2021, 1, 1)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "bad start date"))?;

    let start = std::time::Instant::now();
    let mut bytes_written: usize = 0;
    let mut noise_lines: usize = 0;

    for i in 0..count {
        // spread evenly over the range so dates stay sorted
        let offset = (i as i64 * days) / count.max(1) as i64;
        let date = start_day + Duration::days(offset);
        let sender = SENDERS[weights.sample(&mut rng)].0;
        let text = TEXTS.choose(&mut rng).copied().unwrap_or("hi");

        let mut line = format!(
            "{}, {}:{:02} - {}: {}\n",
            date.format("%-m/%-d/%y"),
            rng.gen_range(0..24),
            rng.gen_range(0..60),
            sender,
            text
        );

        if i % 50 == 7 {
            line.push_str("and a continuation line\n");
        }
        if i % 1000 == 500 {
            line.push_str(NOISE.choose(&mut rng).copied().unwrap_or(""));
            line.push('\n');
            noise_lines += 1;
        }

        bytes_written += line.len();
        writer.write_all(line.as_bytes())?;

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                bytes_written as f64 / 1_000_000.0,
                (i + 1) as f64 / elapsed
            );
        }
    }

    writer.flush()?;

    let elapsed = start.elapsed();
    println!("\n\n✅ Done!");
    println!("   Size:  {:.2} MB", bytes_written as f64 / 1_000_000.0);
    println!("   Noise: {} lines", noise_lines);
    println!("   Time:  {:.2}s", elapsed.as_secs_f64());
    Ok(())
}

//! Bar colours.
//!
//! Each sender keeps one colour for the whole animation, picked from a fixed
//! pastel palette by column index.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The ten pastel colours bars are drawn with.
pub const PALETTE: [Rgb; 10] = [
    Rgb(0xc3, 0xe0, 0xc9),
    Rgb(0xd6, 0xf6, 0xdd),
    Rgb(0xd8, 0xdd, 0xea),
    Rgb(0xda, 0xc4, 0xf7),
    Rgb(0xe7, 0xae, 0xca),
    Rgb(0xf4, 0x98, 0x9c),
    Rgb(0xf0, 0xb5, 0xa8),
    Rgb(0xeb, 0xd2, 0xb4),
    Rgb(0xcc, 0xdf, 0xd6),
    Rgb(0xac, 0xec, 0xf7),
];

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Colour for the sender in column `index`.
    ///
    /// Uses `index² mod 10`, which spreads neighbouring columns apart but
    /// only ever lands on six of the ten entries.
    pub fn for_column(index: usize) -> Self {
        let i = index % 10;
        PALETTE[(i * i) % 10]
    }

    /// Formats as `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("Invalid colour '{}'. Expected #rrggbb", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| format!("Invalid colour '{}'. Expected #rrggbb", s))
        };
        Ok(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hex()
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

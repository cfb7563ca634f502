//! Journals and their display colors

use crate::error::{ChroniclesError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A named collection of entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<HexColor>,
}

impl Journal {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Journal {
            id: id.into(),
            title: title.into(),
            color: None,
        }
    }
}

/// ARGB color parsed from `#RGB`, `#RRGGBB` or `#AARRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl HexColor {
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        HexColor {
            alpha: 0xFF,
            red,
            green,
            blue,
        }
    }

    /// Parse a hex color string
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ChroniclesError::InvalidColor(input.to_string()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ChroniclesError::InvalidColor(input.to_string()))?;

        let channel = |shift: u32| ((value >> shift) & 0xFF) as u8;

        match digits.len() {
            3 => {
                // Each nibble is doubled: #F80 == #FF8800
                let nibble = |shift: u32| (((value >> shift) & 0xF) as u8) * 17;
                Ok(HexColor::rgb(nibble(8), nibble(4), nibble(0)))
            }
            6 => Ok(HexColor::rgb(channel(16), channel(8), channel(0))),
            8 => Ok(HexColor {
                alpha: channel(24),
                red: channel(16),
                green: channel(8),
                blue: channel(0),
            }),
            _ => Err(ChroniclesError::InvalidColor(input.to_string())),
        }
    }
}

impl FromStr for HexColor {
    type Err = ChroniclesError;

    fn from_str(s: &str) -> Result<Self> {
        HexColor::parse(s)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha == 0xFF {
            write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
        } else {
            write!(
                f,
                "#{:02X}{:02X}{:02X}{:02X}",
                self.alpha, self.red, self.green, self.blue
            )
        }
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        HexColor::parse(&raw).map_err(serde::de::Error::custom)
    }
}

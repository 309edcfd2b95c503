//! 24-bit RGB color. Canonical text form is lowercase `#rrggbb`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MalformedColorError;

/// RGB triplet. Serializes as its `#rrggbb` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0);
    pub const WHITE: Color = Color(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b)
    }

    pub fn r(self) -> u8 {
        self.0
    }
    pub fn g(self) -> u8 {
        self.1
    }
    pub fn b(self) -> u8 {
        self.2
    }

    /// Tuple form: `(r, g, b)`.
    pub fn tuple(self) -> (u8, u8, u8) {
        (self.0, self.1, self.2)
    }

    /// Big-endian 24-bit view: red in bits 16–23, green 8–15, blue 0–7.
    pub fn to_u32(self) -> u32 {
        (u32::from(self.0) << 16) | (u32::from(self.1) << 8) | u32::from(self.2)
    }

    /// Inverse of [`Color::to_u32`]. Bits above 23 are ignored.
    pub fn from_u32(value: u32) -> Self {
        Color(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )
    }

    /// Decode `#rrggbb` (leading `#` optional, case-insensitive, surrounding
    /// whitespace ignored).
    pub fn parse_hex(input: &str) -> Result<Self, MalformedColorError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(MalformedColorError::Empty);
        }
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if let Some(found) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(MalformedColorError::Digit {
                input: input.to_string(),
                found,
            });
        }
        // All ASCII from here, so byte length == digit count.
        if digits.len() != 6 {
            return Err(MalformedColorError::Length {
                input: input.to_string(),
                len: digits.len(),
            });
        }
        u32::from_str_radix(digits, 16)
            .map(Color::from_u32)
            .map_err(|_| MalformedColorError::Length {
                input: input.to_string(),
                len: digits.len(),
            })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = MalformedColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse_hex(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = MalformedColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::parse_hex(value)
    }
}

impl TryFrom<String> for Color {
    type Error = MalformedColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse_hex(&value)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color(r, g, b)
    }
}

impl From<Color> for (u8, u8, u8) {
    fn from(c: Color) -> Self {
        c.tuple()
    }
}

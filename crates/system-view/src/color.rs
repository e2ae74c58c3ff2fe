use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color length: {0}")]
    Length(String),
    #[error("invalid {channel} component: {value}")]
    Component { channel: &'static str, value: String },
}

/// RGB display color, serialized as a `#RRGGBB` string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct DisplayColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl DisplayColor {
    /// Host star
    pub const GOLD: Self = Self::new(0xFF, 0xD7, 0x00);
    /// Analyzed exoplanet and its orbit highlight
    pub const CYAN: Self = Self::new(0x22, 0xD3, 0xEE);
    pub const SAND: Self = Self::new(0xE3, 0xA8, 0x69);
    pub const ICE: Self = Self::new(0xA4, 0xC6, 0xDE);
    pub const RUST: Self = Self::new(0xD8, 0x8A, 0x58);
    /// Asteroid belt rock
    pub const UMBER: Self = Self::new(0x5C, 0x40, 0x33);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the color as a hex string (e.g., "#FFD700")
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse a hex color string (e.g., "#22d3ee" or "22D3EE")
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let hex = s.strip_prefix('#').unwrap_or(s);

        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorError::Length(s.to_string()));
        }

        let channel = |name: &'static str, range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range.clone()], 16).map_err(|_| ColorError::Component {
                channel: name,
                value: hex[range].to_string(),
            })
        };

        Ok(Self {
            r: channel("red", 0..2)?,
            g: channel("green", 2..4)?,
            b: channel("blue", 4..6)?,
        })
    }
}

impl std::fmt::Display for DisplayColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<DisplayColor> for String {
    fn from(color: DisplayColor) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for DisplayColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

// Display colors
// Background and text colors applied to the external screen

use serde::{Deserialize, Serialize};

pub const DEFAULT_BACKGROUND_HEX: &str = "#2f4154";
pub const DEFAULT_TEXT_HEX: &str = "#d0ddea";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex_str(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 && hex.len() != 8 {
            return None;
        }
        if !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        let a = if hex.len() == 8 {
            u8::from_str_radix(&hex[6..8], 16).ok()?
        } else {
            255
        };

        Some(RgbaColor::new(r, g, b, a))
    }

    /// `#rrggbb`, dropping alpha when the color is opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for RgbaColor {
    fn default() -> Self {
        RgbaColor::new(0, 0, 0, 255)
    }
}

/// The pair of colors the external screen is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayColors {
    pub background: RgbaColor,
    pub text: RgbaColor,
}

impl DisplayColors {
    pub fn new(background: RgbaColor, text: RgbaColor) -> Self {
        Self { background, text }
    }

    /// Render the pair into the style declarations applied to the external screen.
    pub fn style_string(&self) -> String {
        format!(
            "background-color: {}; color: {};",
            self.background.to_hex(),
            self.text.to_hex()
        )
    }
}

impl Default for DisplayColors {
    fn default() -> Self {
        Self {
            background: RgbaColor::new(0x2f, 0x41, 0x54, 255),
            text: RgbaColor::new(0xd0, 0xdd, 0xea, 255),
        }
    }
}

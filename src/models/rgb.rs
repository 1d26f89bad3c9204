//! RGB color handling with hex parsing, HSL conversion and perceived luma.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Allow float comparisons in HSL conversion (standard algorithm)
#![allow(clippy::float_cmp)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// Perceived luma weights in basis points (0.2126, 0.7152, 0.0722).
// Summed as integers so pure white lands on exactly 100.
const LUMA_WEIGHT_R: u32 = 2126;
const LUMA_WEIGHT_G: u32 = 7152;
const LUMA_WEIGHT_B: u32 = 722;
const LUMA_WEIGHT_SCALE: f64 = 10_000.0;

/// Label color used on light swatches.
pub const DARK_LABEL: &str = "#102029";
/// Label color used on dark swatches.
pub const LIGHT_LABEL: &str = "#F6FBFF";

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Supports parsing from hex strings (#RRGGBB or #RGB) and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

/// Hue, saturation and lightness rounded to whole numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees (0-359)
    pub h: u16,
    /// Saturation percentage (0-100)
    pub s: u8,
    /// Lightness percentage (0-100)
    pub l: u8,
}

impl RgbColor {
    /// Black, the value every unparseable hex string resolves to.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB" in either case.
    /// Shorthand digits are duplicated, so "#abc" reads as "#AABBCC".
    ///
    /// # Examples
    ///
    /// ```
    /// use moodbot::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("0f0").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid hex color '{hex}'. Only 0-9 and A-F are allowed");
        }

        let expanded = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => hex.to_string(),
            _ => anyhow::bail!(
                "Invalid hex color format '{hex}'. Expected 3 or 6 hex digits (RGB or RRGGBB)"
            ),
        };

        let r = u8::from_str_radix(&expanded[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&expanded[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&expanded[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Parses a hex string, resolving anything unparseable to black.
    ///
    /// Catalog data goes through this path: a bad hex code is a data
    /// quality issue, not a reason to reject the entry.
    ///
    /// ```
    /// use moodbot::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::from_hex_or_black("#B55A3A"), RgbColor::new(181, 90, 58));
    /// assert_eq!(RgbColor::from_hex_or_black("not a color"), RgbColor::BLACK);
    /// ```
    #[must_use]
    pub fn from_hex_or_black(hex: &str) -> Self {
        Self::from_hex(hex).unwrap_or(Self::BLACK)
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use moodbot::models::RgbColor;
    ///
    /// let color = RgbColor::new(0, 128, 255);
    /// assert_eq!(color.to_hex(), "#0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the color to HSL with whole-number components.
    ///
    /// Hue is in degrees and wrapped into 0-359, saturation and lightness are
    /// percentages. Grey values (r = g = b) have hue 0 and saturation 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use moodbot::models::{Hsl, RgbColor};
    ///
    /// let red = RgbColor::new(255, 0, 0);
    /// assert_eq!(red.to_hsl(), Hsl { h: 0, s: 100, l: 50 });
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn to_hsl(&self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if max == min {
            (0.0, 0.0)
        } else {
            let d = max - min;
            let s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };
            let h = if max == r {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            (h / 6.0, s)
        };

        Hsl {
            h: (round_half_up(h * 360.0) as u16) % 360,
            s: round_half_up(s * 100.0).clamp(0.0, 100.0) as u8,
            l: round_half_up(l * 100.0).clamp(0.0, 100.0) as u8,
        }
    }

    /// Perceived brightness on a 0-100 scale.
    ///
    /// A weighted linear blend of the raw channels, not gamma-corrected
    /// luminance. The weights are fixed so that scores stay comparable
    /// across catalogs.
    ///
    /// ```
    /// use moodbot::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(255, 255, 255).perceived_luma(), 100.0);
    /// assert_eq!(RgbColor::new(0, 0, 0).perceived_luma(), 0.0);
    /// ```
    #[must_use]
    pub fn perceived_luma(&self) -> f64 {
        let weighted = LUMA_WEIGHT_R * u32::from(self.r)
            + LUMA_WEIGHT_G * u32::from(self.g)
            + LUMA_WEIGHT_B * u32::from(self.b);
        f64::from(weighted) / LUMA_WEIGHT_SCALE / 255.0 * 100.0
    }
}

impl Hsl {
    /// Label color that stays readable on a swatch of this color.
    #[must_use]
    pub const fn label_text_color(&self) -> &'static str {
        if self.l > 60 {
            DARK_LABEL
        } else {
            LIGHT_LABEL
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl Default for RgbColor {
    /// Default color is black (#000000), matching the hex fallback.
    fn default() -> Self {
        Self::BLACK
    }
}

/// Rounds to the nearest integer with halves going up, as the scoring
/// constants were tuned against.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Converts a hex string to RGB; unparseable input yields black.
pub fn hex_to_rgb(hex: &str) -> RgbColor {
    RgbColor::from_hex_or_black(hex)
}

/// Converts RGB channels to rounded HSL.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    RgbColor::new(r, g, b).to_hsl()
}

/// Perceived luma (0-100) of RGB channels.
pub fn perceived_luma(r: u8, g: u8, b: u8) -> f64 {
    RgbColor::new(r, g, b).perceived_luma()
}

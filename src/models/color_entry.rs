//! Paint color entries and their classification.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::rgb::round_half_up;
use super::{Hsl, RgbColor};

/// Coarse color category used for grouping and household matching.
///
/// Families outside the known set are kept verbatim (lowercased) so a
/// catalog can introduce new ones without breaking the loader.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Family {
    /// Whites and off-whites
    White,
    /// Beiges and sands
    Beige,
    /// Greys
    Grey,
    /// Greens
    Green,
    /// Blues
    Blue,
    /// Teals
    Teal,
    /// Terracottas and clay tones
    Terracotta,
    /// Pinks and blushes
    Pink,
    /// Yellows
    Yellow,
    /// Blacks and near-blacks
    Black,
    /// Any family not listed above
    Other(String),
}

impl Family {
    /// Lowercase family name as it appears in catalog data.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::White => "white",
            Self::Beige => "beige",
            Self::Grey => "grey",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Teal => "teal",
            Self::Terracotta => "terracotta",
            Self::Pink => "pink",
            Self::Yellow => "yellow",
            Self::Black => "black",
            Self::Other(name) => name,
        }
    }

    /// True for the common neutrals: white, grey and beige.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        matches!(self, Self::White | Self::Grey | Self::Beige)
    }

    /// True for families that read as accent colors.
    #[must_use]
    pub fn is_accent(&self) -> bool {
        matches!(
            self,
            Self::Blue | Self::Teal | Self::Terracotta | Self::Green | Self::Pink | Self::Yellow
        )
    }

    /// Case-insensitive comparison against a free-form family name.
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name.trim())
    }
}

impl From<String> for Family {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "white" => Self::White,
            "beige" => Self::Beige,
            "grey" => Self::Grey,
            "green" => Self::Green,
            "blue" => Self::Blue,
            "teal" => Self::Teal,
            "terracotta" => Self::Terracotta,
            "pink" => Self::Pink,
            "yellow" => Self::Yellow,
            "black" => Self::Black,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<&str> for Family {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Family> for String {
    fn from(value: Family) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Secondary color bias perceived within a color.
///
/// Catalog values are matched case-insensitively; anything other than
/// warm, neutral or cool is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Undertone {
    /// Yellow/red leaning
    Warm,
    /// No noticeable lean
    Neutral,
    /// Blue/green leaning
    Cool,
}

impl Undertone {
    /// Lowercase name as written in catalogs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Warm => "warm",
            Self::Neutral => "neutral",
            Self::Cool => "cool",
        }
    }
}

impl TryFrom<String> for Undertone {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "warm" => Ok(Self::Warm),
            "neutral" => Ok(Self::Neutral),
            "cool" => Ok(Self::Cool),
            _ => Err(format!(
                "unknown undertone '{value}', expected warm, neutral or cool"
            )),
        }
    }
}

impl fmt::Display for Undertone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A catalog record as it appears in catalog JSON.
///
/// `lrv` is optional; entries without one get an LRV derived from luma.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// Unique identifier (e.g., "POW-01")
    pub id: String,
    /// Display name
    pub name: String,
    /// Hex color code
    pub hex: String,
    /// Light Reflectance Value (0-100), when the manufacturer publishes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lrv: Option<f64>,
    /// Undertone
    pub undertone: Undertone,
    /// Color family
    pub family: Family,
}

/// A catalog color with its derived HSL, luma and LRV.
///
/// Built only through [`ColorEntry::from_record`], so every entry that
/// reaches the scorer carries a valid `hsl` and `lrv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorEntry {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Hex color code as supplied by the catalog
    pub hex: String,
    /// Color family
    pub family: Family,
    /// Undertone
    pub undertone: Undertone,
    /// Light Reflectance Value (0-100)
    pub lrv: f64,
    /// Derived HSL
    pub hsl: Hsl,
    /// Derived perceived luma (0-100)
    pub luma: f64,
}

impl ColorEntry {
    /// Augments a catalog record with derived color data.
    ///
    /// # Examples
    ///
    /// ```
    /// use moodbot::models::{CatalogRecord, ColorEntry, Family, Undertone};
    ///
    /// let record = CatalogRecord {
    ///     id: "W-1".to_string(),
    ///     name: "Paper".to_string(),
    ///     hex: "#FFFFFF".to_string(),
    ///     lrv: None,
    ///     undertone: Undertone::Neutral,
    ///     family: Family::White,
    /// };
    /// let entry = ColorEntry::from_record(record);
    /// assert_eq!(entry.lrv, 100.0);
    /// assert_eq!(entry.hsl.l, 100);
    /// ```
    #[must_use]
    pub fn from_record(record: CatalogRecord) -> Self {
        let rgb = RgbColor::from_hex_or_black(&record.hex);
        let hsl = rgb.to_hsl();
        let luma = rgb.perceived_luma();
        let lrv = record
            .lrv
            .filter(|lrv| lrv.is_finite())
            .unwrap_or_else(|| round_half_up(luma));

        Self {
            id: record.id,
            name: record.name,
            hex: record.hex,
            family: record.family,
            undertone: record.undertone,
            lrv,
            hsl,
            luma,
        }
    }
}

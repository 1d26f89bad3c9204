//! JSON export of a recommendation.
//!
//! The export record captures the typed answers, the three chosen colors
//! with their scores, the paint estimate and a UTC timestamp. Keys are
//! camelCase (`generatedAt`, `wallLitres`, ...).

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::engine::{PaintEstimate, ScoredEntry, SelectedPalette};
use crate::models::{Answers, ColorEntry};

/// One exported palette color: the full entry plus its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedShade {
    /// Catalog entry with derived HSL, luma and LRV
    #[serde(flatten)]
    pub entry: ColorEntry,
    /// Score from the recommendation run
    pub score: i32,
}

impl From<&ScoredEntry<'_>> for ExportedShade {
    fn from(scored: &ScoredEntry<'_>) -> Self {
        Self {
            entry: scored.entry.clone(),
            score: scored.score,
        }
    }
}

/// The three exported palette colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportPalette {
    /// Main wall color
    pub base: ExportedShade,
    /// Accent color
    pub accent: ExportedShade,
    /// Trim and ceiling color
    pub trim: ExportedShade,
}

impl From<&SelectedPalette<'_>> for ExportPalette {
    fn from(palette: &SelectedPalette<'_>) -> Self {
        Self {
            base: ExportedShade::from(&palette.base),
            accent: ExportedShade::from(&palette.accent),
            trim: ExportedShade::from(&palette.trim),
        }
    }
}

/// A complete, self-contained recommendation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecord {
    /// Answers the recommendation was computed from
    pub inputs: Answers,
    /// Chosen colors
    pub palette: ExportPalette,
    /// Paint quantities for the room
    pub estimates: PaintEstimate,
    /// When the record was produced
    pub generated_at: DateTime<Utc>,
}

impl ExportRecord {
    /// Builds an export record. The timestamp is supplied by the caller so
    /// the result is reproducible.
    #[must_use]
    pub fn new(
        answers: &Answers,
        palette: &SelectedPalette<'_>,
        estimates: PaintEstimate,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            inputs: answers.clone(),
            palette: ExportPalette::from(palette),
            estimates,
            generated_at,
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize export record")
    }

    /// Parses an export record previously written by [`ExportRecord::write_to`].
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe an export record.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse export record")
    }

    /// Writes the record as pretty JSON, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }

        let mut content = self.to_json_pretty()?;
        content.push('\n');
        fs::write(path, content)
            .context(format!("Failed to write export file: {}", path.display()))?;

        tracing::info!("Wrote export to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::engine::{estimate_litres, recommend};
    use crate::models::{Household, RoomDimensions};
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn sample(answers: &Answers) -> ExportRecord {
        let catalog = Catalog::builtin();
        let rec = recommend(&catalog, answers).unwrap();
        let estimate = estimate_litres(&answers.room, 2, 120.0);
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        ExportRecord::new(answers, &rec.palette, estimate, at)
    }

    #[test]
    fn test_export_json_shape() {
        let record = sample(&Answers::default());
        let value: serde_json::Value =
            serde_json::from_str(&record.to_json_pretty().unwrap()).unwrap();

        assert_eq!(value["generatedAt"], "2024-05-01T12:00:00Z");
        assert_eq!(value["estimates"]["wallLitres"], 7.2);
        assert_eq!(value["estimates"]["ceilingLitres"], 3.0);
        assert_eq!(value["estimates"]["totalLitres"], 11.0);
        assert_eq!(value["palette"]["base"]["id"], "SMOKE-06");
        assert_eq!(value["palette"]["base"]["score"], 40);
        assert_eq!(value["palette"]["base"]["hsl"]["l"], 64);
        assert_eq!(value["palette"]["trim"]["family"], "white");
        assert_eq!(value["inputs"]["persona"], "ISFJ");
    }

    #[test]
    fn test_export_round_trip() {
        let answers = Answers {
            room: RoomDimensions::new(10.0, 14.0, 9.0),
            household: Household {
                pets: true,
                preferred_accent: Some("green".to_string()),
                ..Household::default()
            },
            ..Answers::default()
        };
        let record = sample(&answers);
        let parsed = ExportRecord::from_json(&record.to_json_pretty().unwrap()).unwrap();

        assert_eq!(parsed.palette.base.entry.id, record.palette.base.entry.id);
        assert_eq!(parsed.palette.accent.entry.id, record.palette.accent.entry.id);
        assert_eq!(parsed.palette.trim.entry.id, record.palette.trim.entry.id);
        assert_eq!(parsed.estimates, record.estimates);
        assert_eq!(parsed.inputs.household, answers.household);
        assert_eq!(parsed.generated_at, record.generated_at);
    }

    #[test]
    fn test_write_to_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("moodbot-result.json");
        let record = sample(&Answers::default());

        record.write_to(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.ends_with('\n'));
        let parsed = ExportRecord::from_json(&content).unwrap();
        assert_eq!(parsed.palette.trim.entry.id, "POW-01");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(ExportRecord::from_json("{\"inputs\": 3}").is_err());
    }
}

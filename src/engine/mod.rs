//! Recommendation engine.
//!
//! This module turns typed answers into a ranked catalog, a three-color
//! palette and its explanation. Everything here is pure: the catalog is
//! borrowed, nothing is cached, and the same inputs always give the same
//! recommendation.

pub mod assembler;
pub mod estimator;
pub mod explain;
pub mod preferences;
pub mod scorer;

use serde::Serialize;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::models::Answers;

// Re-export commonly used types and functions
pub use assembler::{assemble_palette, Role, SelectedPalette};
pub use estimator::{
    compute_room_areas, estimate_litres, estimate_with, EstimateOptions, PaintEstimate, RoomAreas,
};
pub use explain::explain_choice;
pub use preferences::PreferenceModel;
pub use scorer::{score_entries, score_entry, ScoreBreakdown, ScoredEntry};

/// Errors raised by the recommendation engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// There are no catalog entries to choose from.
    #[error("No catalog colors are available to recommend from")]
    CatalogUnavailable,
}

/// Output of one recommendation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation<'a> {
    /// Preference model the scores were computed against
    pub model: PreferenceModel,
    /// Every catalog entry, best first
    pub ranked: Vec<ScoredEntry<'a>>,
    /// Chosen base, accent and trim
    pub palette: SelectedPalette<'a>,
    /// Plain-language rationale
    pub explanation: String,
}

impl Recommendation<'_> {
    /// Per-term score breakdown for every ranked entry, in ranking order.
    #[must_use]
    pub fn breakdowns(&self) -> Vec<(&str, ScoreBreakdown)> {
        self.ranked
            .iter()
            .map(|s| (s.entry.id.as_str(), ScoreBreakdown::compute(s.entry, &self.model)))
            .collect()
    }
}

/// Runs the full pipeline: preferences, scoring, assembly and explanation.
///
/// # Errors
///
/// Returns [`EngineError::CatalogUnavailable`] for an empty catalog.
///
/// # Examples
///
/// ```
/// use moodbot::catalog::Catalog;
/// use moodbot::engine::recommend;
/// use moodbot::models::Answers;
///
/// let catalog = Catalog::builtin();
/// let rec = recommend(&catalog, &Answers::default()).unwrap();
/// assert_eq!(rec.ranked.len(), 10);
/// assert_eq!(rec.palette.trim.entry.id, "POW-01");
/// ```
pub fn recommend<'a>(catalog: &'a Catalog, answers: &Answers) -> Result<Recommendation<'a>, EngineError> {
    if catalog.is_empty() {
        return Err(EngineError::CatalogUnavailable);
    }

    let model = PreferenceModel::from_answers(answers);
    let ranked = score_entries(catalog.entries(), &model);
    let palette = assemble_palette(&ranked)?;
    let explanation = explain_choice(&palette, answers);

    if palette.has_reused_roles() {
        tracing::warn!(
            "Catalog has only {} color(s); some palette roles share a color",
            catalog.len()
        );
    }

    tracing::debug!(
        "Recommended base={} accent={} trim={}",
        palette.base.entry.id,
        palette.accent.entry.id,
        palette.trim.entry.id
    );

    Ok(Recommendation {
        model,
        ranked,
        palette,
        explanation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Daylight, DaylightTone, Household, Objective, PersonaCode};

    #[test]
    fn test_empty_catalog_is_unavailable() {
        let catalog = Catalog::new(Vec::new());
        assert_eq!(
            recommend(&catalog, &Answers::default()).unwrap_err(),
            EngineError::CatalogUnavailable
        );
    }

    #[test]
    fn test_recommend_is_idempotent() {
        let catalog = Catalog::builtin();
        let answers = Answers {
            daylight: Daylight::Weak,
            daylight_tone: DaylightTone::Warm,
            objective: Objective::Cozier,
            persona: PersonaCode::new("ENFP"),
            household: Household {
                kids: true,
                ..Household::default()
            },
            ..Answers::default()
        };
        let first = recommend(&catalog, &answers).unwrap();
        let second = recommend(&catalog, &answers).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_breakdowns_match_scores() {
        let catalog = Catalog::builtin();
        let rec = recommend(&catalog, &Answers::default()).unwrap();
        let breakdowns = rec.breakdowns();
        assert_eq!(breakdowns.len(), rec.ranked.len());
        for (scored, (id, breakdown)) in rec.ranked.iter().zip(&breakdowns) {
            assert_eq!(scored.entry.id, *id);
            assert_eq!(scored.score, breakdown.score());
        }
    }

    #[test]
    fn test_default_recommendation() {
        let catalog = Catalog::builtin();
        let rec = recommend(&catalog, &Answers::default()).unwrap();
        assert_eq!(rec.palette.base.entry.id, "SMOKE-06");
        assert_eq!(rec.palette.base.score, 40);
        assert_eq!(rec.palette.accent.entry.id, "INK-07");
        assert_eq!(rec.palette.trim.entry.id, "POW-01");
        assert!(rec.explanation.starts_with("Base (Smoky Grey, #9AA3AB)"));
    }
}

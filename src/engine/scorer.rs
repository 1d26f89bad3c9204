//! Heuristic suitability scoring of catalog entries.
//!
//! A score is the plain sum of ten independent terms. There is no
//! normalisation and no floor, so household penalties can push a score
//! below zero. The sum is rounded once, at the end.

use serde::Serialize;

use super::preferences::PreferenceModel;
use crate::models::rgb::round_half_up;
use crate::models::{ColorEntry, Family, Flooring, Undertone};

/// Maximum LRV-fit contribution, reached on an exact match.
pub const LRV_FIT_MAX: f64 = 40.0;
/// Bonus for warm undertones when the objective asks for warmth.
pub const WARM_BIAS_BONUS: f64 = 6.0;
/// Bonus for cool undertones under cool daylight.
pub const COOL_BOOST_BONUS: f64 = 4.0;
/// Undertone multiplier above which the cool bonus applies.
pub const COOL_BOOST_THRESHOLD: f64 = 1.1;
/// Neutral-family bonus before the persona multiplier.
pub const NEUTRAL_FAMILY_BONUS: f64 = 6.0;
/// Accent-family bonus before the persona multiplier.
pub const ACCENT_FAMILY_BONUS: f64 = 4.0;
/// LRV above which a color counts as too pale for a room with kids.
pub const KIDS_PALE_LRV: f64 = 90.0;
/// Penalty for very pale colors when kids use the room.
pub const KIDS_PENALTY: f64 = -12.0;
/// Penalty for whites when pets use the room.
pub const PETS_PENALTY: f64 = -8.0;
/// Bonus for warm undertones over warm flooring.
pub const WARM_FLOORING_BONUS: f64 = 4.0;
/// Bonus for the user's preferred accent family.
pub const PREFERRED_ACCENT_BONUS: f64 = 10.0;
/// Small nudge toward the common neutrals.
pub const COMMON_NEUTRAL_BONUS: f64 = 2.0;

/// A catalog entry paired with its score for one recommendation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredEntry<'a> {
    /// The scored entry
    pub entry: &'a ColorEntry,
    /// Rounded score
    pub score: i32,
}

/// Per-term contributions to one entry's score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Closeness to the effective LRV target (0 to 40)
    pub lrv_fit: f64,
    /// Warm undertone under a warm-biased objective
    pub warm_bias: f64,
    /// Cool undertone under cool daylight
    pub cool_boost: f64,
    /// Neutral family, scaled by the persona's neutral bias
    pub neutral_family: f64,
    /// Accent family, scaled by the persona's accent freedom
    pub accent_family: f64,
    /// Pale-color penalty for rooms with kids
    pub kids: f64,
    /// White penalty for rooms with pets
    pub pets: f64,
    /// Warm undertone over warm flooring
    pub flooring: f64,
    /// Matches the preferred accent family
    pub preferred_accent: f64,
    /// Common-neutral nudge
    pub common_neutral: f64,
}

impl ScoreBreakdown {
    /// Computes every term for one entry.
    #[must_use]
    pub fn compute(entry: &ColorEntry, model: &PreferenceModel) -> Self {
        let household = &model.household;
        let warm = entry.undertone == Undertone::Warm;

        Self {
            lrv_fit: lrv_fit(entry.lrv, model.effective_target_lrv()),
            warm_bias: bonus(model.warm_bias && warm, WARM_BIAS_BONUS),
            cool_boost: bonus(
                entry.undertone == Undertone::Cool && model.undertone_boost > COOL_BOOST_THRESHOLD,
                COOL_BOOST_BONUS,
            ),
            neutral_family: bonus(
                entry.family.is_neutral(),
                NEUTRAL_FAMILY_BONUS * model.neutral_bias,
            ),
            accent_family: bonus(
                entry.family.is_accent() && model.accent_freedom > 1.0,
                ACCENT_FAMILY_BONUS * model.accent_freedom,
            ),
            kids: bonus(household.kids && entry.lrv > KIDS_PALE_LRV, KIDS_PENALTY),
            pets: bonus(household.pets && entry.family == Family::White, PETS_PENALTY),
            flooring: bonus(
                household.flooring == Flooring::Warm && warm,
                WARM_FLOORING_BONUS,
            ),
            preferred_accent: bonus(
                household
                    .preferred_accent
                    .as_deref()
                    .is_some_and(|name| !name.trim().is_empty() && entry.family.matches_name(name)),
                PREFERRED_ACCENT_BONUS,
            ),
            common_neutral: bonus(entry.family.is_neutral(), COMMON_NEUTRAL_BONUS),
        }
    }

    /// Unrounded sum of all terms, added in a fixed order.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.lrv_fit
            + self.warm_bias
            + self.cool_boost
            + self.neutral_family
            + self.accent_family
            + self.kids
            + self.pets
            + self.flooring
            + self.preferred_accent
            + self.common_neutral
    }

    /// Total rounded to the nearest integer, halves rounding up.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn score(&self) -> i32 {
        round_half_up(self.total()) as i32
    }
}

fn bonus(applies: bool, amount: f64) -> f64 {
    if applies {
        amount
    } else {
        0.0
    }
}

/// LRV-fit term: 40 on an exact match, falling by one per LRV point of
/// distance and never below zero.
///
/// ```
/// use moodbot::engine::scorer::lrv_fit;
///
/// assert_eq!(lrv_fit(57.0, 57), 40.0);
/// assert_eq!(lrv_fit(47.0, 57), 30.0);
/// assert_eq!(lrv_fit(17.0, 57), 0.0);
/// assert_eq!(lrv_fit(97.0, 57), 0.0);
/// ```
#[must_use]
pub fn lrv_fit(lrv: f64, effective_target: i32) -> f64 {
    (LRV_FIT_MAX - (lrv - f64::from(effective_target)).abs()).max(0.0)
}

/// Scores a single entry.
#[must_use]
pub fn score_entry(entry: &ColorEntry, model: &PreferenceModel) -> i32 {
    ScoreBreakdown::compute(entry, model).score()
}

/// Scores every entry and sorts by descending score.
///
/// The sort is stable: entries with equal scores stay in catalog order,
/// which the assembler's tie-breaking relies on.
#[must_use]
pub fn score_entries<'a>(entries: &'a [ColorEntry], model: &PreferenceModel) -> Vec<ScoredEntry<'a>> {
    let mut scored: Vec<ScoredEntry<'a>> = entries
        .iter()
        .map(|entry| ScoredEntry {
            entry,
            score: score_entry(entry, model),
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

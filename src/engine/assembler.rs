//! Greedy base / accent / trim selection from a ranked list.
//!
//! Each role is picked in turn with its own criterion, excluding the roles
//! already chosen. The result is deterministic for a given ranking, and each
//! pick can be explained on its own.

use serde::Serialize;
use std::fmt;

use super::scorer::ScoredEntry;
use super::EngineError;
use crate::models::ColorEntry;

/// LRV above which a non-neutral color may still serve as the base.
pub const BASE_MIN_LRV: f64 = 45.0;
/// Extra accent contrast for a family different from the base.
pub const ACCENT_FAMILY_CONTRAST: i32 = 12;
/// Reflectance the trim color should be closest to.
pub const TRIM_TARGET_LRV: f64 = 92.0;

/// The role a color plays in the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Main wall color
    Base,
    /// Feature wall or detail color
    Accent,
    /// Trim and ceiling color
    Trim,
}

impl Role {
    /// All roles in presentation order.
    pub const ALL: [Self; 3] = [Self::Base, Self::Accent, Self::Trim];

    /// Capitalized label for human-readable output.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::Accent => "Accent",
            Self::Trim => "Trim",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Base => "base",
            Self::Accent => "accent",
            Self::Trim => "trim",
        })
    }
}

/// The three chosen colors, with their scores from the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SelectedPalette<'a> {
    /// Main wall color
    pub base: ScoredEntry<'a>,
    /// Contrasting accent color
    pub accent: ScoredEntry<'a>,
    /// Trim and ceiling color
    pub trim: ScoredEntry<'a>,
}

impl<'a> SelectedPalette<'a> {
    /// The entry chosen for a role.
    #[must_use]
    pub const fn get(&self, role: Role) -> &ScoredEntry<'a> {
        match role {
            Role::Base => &self.base,
            Role::Accent => &self.accent,
            Role::Trim => &self.trim,
        }
    }

    /// True when a role had to reuse another role's color because the
    /// catalog was too small.
    #[must_use]
    pub fn has_reused_roles(&self) -> bool {
        self.base.entry.id == self.accent.entry.id
            || self.base.entry.id == self.trim.entry.id
            || self.accent.entry.id == self.trim.entry.id
    }
}

/// Whether an entry may serve as the base: a common neutral or light enough.
#[must_use]
pub fn is_base_candidate(entry: &ColorEntry) -> bool {
    entry.family.is_neutral() || entry.lrv > BASE_MIN_LRV
}

/// Contrast of a candidate accent against the base.
///
/// Lightness distance in HSL percentage points, plus a bonus when the
/// families differ.
#[must_use]
pub fn accent_contrast(entry: &ColorEntry, base: &ColorEntry) -> i32 {
    let lightness = (i32::from(entry.hsl.l) - i32::from(base.hsl.l)).abs();
    let family = if entry.family == base.family {
        0
    } else {
        ACCENT_FAMILY_CONTRAST
    };
    lightness + family
}

/// Distance of a candidate trim from the near-white trim target.
#[must_use]
pub fn trim_distance(entry: &ColorEntry) -> f64 {
    (entry.lrv - TRIM_TARGET_LRV).abs()
}

/// Picks base, accent and trim from a score-sorted list.
///
/// # Errors
///
/// Returns [`EngineError::CatalogUnavailable`] when `ranked` is empty.
///
/// # Examples
///
/// ```
/// use moodbot::catalog::Catalog;
/// use moodbot::engine::{assemble_palette, score_entries, PreferenceModel};
/// use moodbot::models::Answers;
///
/// let catalog = Catalog::builtin();
/// let model = PreferenceModel::from_answers(&Answers::default());
/// let ranked = score_entries(catalog.entries(), &model);
/// let palette = assemble_palette(&ranked).unwrap();
/// assert_eq!(palette.base.entry.id, "SMOKE-06");
/// ```
pub fn assemble_palette<'a>(ranked: &[ScoredEntry<'a>]) -> Result<SelectedPalette<'a>, EngineError> {
    let first = ranked.first().ok_or(EngineError::CatalogUnavailable)?;

    let base = *ranked
        .iter()
        .find(|s| is_base_candidate(s.entry))
        .unwrap_or(first);

    let mut accent_pool: Vec<ScoredEntry<'a>> = ranked
        .iter()
        .filter(|s| s.entry.id != base.entry.id)
        .copied()
        .collect();
    accent_pool.sort_by(|a, b| {
        accent_contrast(b.entry, base.entry).cmp(&accent_contrast(a.entry, base.entry))
    });
    let accent = accent_pool.first().copied().unwrap_or(base);

    let mut trim_pool: Vec<ScoredEntry<'a>> = ranked
        .iter()
        .filter(|s| s.entry.id != base.entry.id && s.entry.id != accent.entry.id)
        .copied()
        .collect();
    trim_pool.sort_by(|a, b| trim_distance(a.entry).total_cmp(&trim_distance(b.entry)));
    let trim = trim_pool.first().copied().unwrap_or(base);

    Ok(SelectedPalette { base, accent, trim })
}

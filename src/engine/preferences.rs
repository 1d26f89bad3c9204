//! Numeric preference targets derived from wizard answers.
//!
//! Every constant here feeds straight into the scorer and is part of the
//! recommendation behaviour; changing one changes which colors win.

use serde::Serialize;

use crate::models::{Answers, Daylight, DaylightTone, Household, Objective, PersonaCode};

/// Base LRV target for strongly lit rooms.
pub const TARGET_LRV_STRONG: i32 = 45;
/// Base LRV target for rooms with medium daylight.
pub const TARGET_LRV_MEDIUM: i32 = 55;
/// Base LRV target for weakly lit (or unknown) rooms.
pub const TARGET_LRV_WEAK: i32 = 70;

/// LRV shift and biases that follow from the room objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectiveProfile {
    /// Signed adjustment applied to the base LRV target
    pub lrv_shift: i32,
    /// Favour warm undertones
    pub warm_bias: bool,
    /// Favour muted colors (recorded, not scored)
    pub desaturate: bool,
}

impl ObjectiveProfile {
    /// Looks up the fixed profile for an objective.
    ///
    /// ```
    /// use moodbot::engine::preferences::ObjectiveProfile;
    /// use moodbot::models::Objective;
    ///
    /// let cozier = ObjectiveProfile::for_objective(Objective::Cozier);
    /// assert_eq!(cozier.lrv_shift, -10);
    /// assert!(cozier.warm_bias);
    /// ```
    #[must_use]
    pub const fn for_objective(objective: Objective) -> Self {
        match objective {
            Objective::Bigger => Self {
                lrv_shift: 12,
                warm_bias: false,
                desaturate: false,
            },
            Objective::Cozier => Self {
                lrv_shift: -10,
                warm_bias: true,
                desaturate: false,
            },
            Objective::Brighter => Self {
                lrv_shift: 18,
                warm_bias: false,
                desaturate: false,
            },
            Objective::Softer => Self {
                lrv_shift: 6,
                warm_bias: false,
                desaturate: true,
            },
            Objective::Other => Self {
                lrv_shift: 0,
                warm_bias: false,
                desaturate: false,
            },
        }
    }
}

/// Base LRV target for the amount of daylight.
///
/// Dim rooms need reflective bases; bright rooms tolerate deeper color.
#[must_use]
pub const fn target_lrv(daylight: Daylight) -> i32 {
    match daylight {
        Daylight::Strong => TARGET_LRV_STRONG,
        Daylight::Medium => TARGET_LRV_MEDIUM,
        Daylight::Weak | Daylight::Other => TARGET_LRV_WEAK,
    }
}

/// Undertone multiplier for the daylight tone.
#[must_use]
pub const fn undertone_boost(tone: DaylightTone) -> f64 {
    match tone {
        DaylightTone::Warm => 0.8,
        DaylightTone::Cool => 1.2,
        DaylightTone::Neutral | DaylightTone::Other => 1.0,
    }
}

/// Accent freedom multiplier: 1.2 when the code contains `E` or `N`.
///
/// Letters are checked anywhere in the code, not per axis.
#[must_use]
pub fn accent_freedom(persona: &PersonaCode) -> f64 {
    if persona.contains('E') || persona.contains('N') {
        1.2
    } else {
        0.8
    }
}

/// Neutral bias multiplier: 1.2 when the code contains `I` or `S`.
#[must_use]
pub fn neutral_bias(persona: &PersonaCode) -> f64 {
    if persona.contains('I') || persona.contains('S') {
        1.2
    } else {
        0.9
    }
}

/// Everything the scorer needs to know about the user, as numbers and flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceModel {
    /// Base LRV target before the objective shift
    pub target_lrv: i32,
    /// 0.8 (warm light), 1.0 (neutral) or 1.2 (cool light)
    pub undertone_boost: f64,
    /// Signed LRV adjustment from the objective
    pub objective_shift: i32,
    /// Favour warm undertones
    pub warm_bias: bool,
    /// Favour muted colors
    pub desaturate: bool,
    /// Persona multiplier for accent families
    pub accent_freedom: f64,
    /// Persona multiplier for neutral families
    pub neutral_bias: f64,
    /// Household constraints
    pub household: Household,
}

impl PreferenceModel {
    /// Derives the model from typed answers.
    ///
    /// # Examples
    ///
    /// ```
    /// use moodbot::engine::PreferenceModel;
    /// use moodbot::models::{Answers, Daylight};
    ///
    /// let answers = Answers {
    ///     daylight: Daylight::Strong,
    ///     ..Answers::default()
    /// };
    /// let model = PreferenceModel::from_answers(&answers);
    /// assert_eq!(model.effective_target_lrv(), 57);
    /// ```
    #[must_use]
    pub fn from_answers(answers: &Answers) -> Self {
        let objective = ObjectiveProfile::for_objective(answers.objective);

        Self {
            target_lrv: target_lrv(answers.daylight),
            undertone_boost: undertone_boost(answers.daylight_tone),
            objective_shift: objective.lrv_shift,
            warm_bias: objective.warm_bias,
            desaturate: objective.desaturate,
            accent_freedom: accent_freedom(&answers.persona),
            neutral_bias: neutral_bias(&answers.persona),
            household: answers.household.clone(),
        }
    }

    /// The LRV the scorer aims for: base target plus objective shift.
    #[must_use]
    pub const fn effective_target_lrv(&self) -> i32 {
        self.target_lrv + self.objective_shift
    }
}

//! Wizard answers: the raw form and its typed, defaulted view.
//!
//! [`FormInput`] mirrors what the wizard collects, with every field optional.
//! [`Answers::from_form`] applies the documented defaults and turns free-form
//! strings into the enums the preference model consumes. Values it does not
//! recognise are kept as an `Other` variant rather than rejected, so the
//! engine can apply its neutral fallbacks.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    DEFAULT_CEILING_HEIGHT, DEFAULT_PERSONA, DEFAULT_ROOM_LENGTH, DEFAULT_ROOM_WIDTH,
};

/// Raw wizard form values. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormInput {
    /// Free-form room type (e.g., "bedroom")
    pub room_type: Option<String>,
    /// Room width
    pub width: Option<f64>,
    /// Room length
    pub length: Option<f64>,
    /// Ceiling height
    pub ceiling_height: Option<f64>,
    /// Natural light amount: weak, medium or strong
    pub daylight: Option<String>,
    /// Natural light color: warm, neutral or cool
    pub daylight_tone: Option<String>,
    /// Artificial light color (recorded, not scored)
    pub artificial_tone: Option<String>,
    /// Room objective: bigger, cozier, brighter or softer
    pub objective: Option<String>,
    /// Full persona code (e.g., "ENFP"); takes precedence over the traits
    pub persona: Option<String>,
    /// First persona trait (E/I)
    pub trait1: Option<String>,
    /// Second persona trait (S/N)
    pub trait2: Option<String>,
    /// Third persona trait (T/F)
    pub trait3: Option<String>,
    /// Fourth persona trait (J/P)
    pub trait4: Option<String>,
    /// "yes" when children use the room
    pub kids: Option<String>,
    /// "yes" when pets use the room
    pub pets: Option<String>,
    /// Flooring tone: warm, neutral or cool
    pub flooring: Option<String>,
    /// Family name the user would like as an accent
    pub preferred_accent: Option<String>,
}

impl FormInput {
    /// Returns a form where every field set in `top` replaces the one in `self`.
    #[must_use]
    pub fn overlay(self, top: Self) -> Self {
        Self {
            room_type: top.room_type.or(self.room_type),
            width: top.width.or(self.width),
            length: top.length.or(self.length),
            ceiling_height: top.ceiling_height.or(self.ceiling_height),
            daylight: top.daylight.or(self.daylight),
            daylight_tone: top.daylight_tone.or(self.daylight_tone),
            artificial_tone: top.artificial_tone.or(self.artificial_tone),
            objective: top.objective.or(self.objective),
            persona: top.persona.or(self.persona),
            trait1: top.trait1.or(self.trait1),
            trait2: top.trait2.or(self.trait2),
            trait3: top.trait3.or(self.trait3),
            trait4: top.trait4.or(self.trait4),
            kids: top.kids.or(self.kids),
            pets: top.pets.or(self.pets),
            flooring: top.flooring.or(self.flooring),
            preferred_accent: top.preferred_accent.or(self.preferred_accent),
        }
    }
}

/// Amount of natural light the room gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Daylight {
    /// Little natural light
    Weak,
    /// Some natural light
    #[default]
    Medium,
    /// Plenty of natural light
    Strong,
    /// Any unrecognised value
    #[serde(other)]
    Other,
}

/// Color temperature of the natural light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DaylightTone {
    /// Warm light
    Warm,
    /// Neutral light
    #[default]
    Neutral,
    /// Cool light
    Cool,
    /// Any unrecognised value
    #[serde(other)]
    Other,
}

/// What the user wants the room to feel like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    /// Make the room feel bigger
    #[default]
    Bigger,
    /// Make the room feel cozier
    Cozier,
    /// Make the room feel brighter
    Brighter,
    /// Make the room feel softer
    Softer,
    /// Any unrecognised value
    #[serde(other)]
    Other,
}

/// Flooring tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flooring {
    /// Warm wood or terracotta floors
    Warm,
    /// Neutral floors
    #[default]
    Neutral,
    /// Cool-ish floors (grey, blue-grey)
    Cool,
    /// Any unrecognised value
    #[serde(other)]
    Other,
}

impl Daylight {
    /// Parses a form value; unknown values become [`Daylight::Other`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "weak" => Self::Weak,
            "medium" => Self::Medium,
            "strong" => Self::Strong,
            _ => Self::Other,
        }
    }
}

impl DaylightTone {
    /// Parses a form value; unknown values become [`DaylightTone::Other`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "warm" => Self::Warm,
            "neutral" => Self::Neutral,
            "cool" => Self::Cool,
            _ => Self::Other,
        }
    }
}

impl Objective {
    /// Parses a form value; unknown values become [`Objective::Other`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "bigger" => Self::Bigger,
            "cozier" => Self::Cozier,
            "brighter" => Self::Brighter,
            "softer" => Self::Softer,
            _ => Self::Other,
        }
    }
}

impl Flooring {
    /// Parses a form value; unknown values become [`Flooring::Other`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "warm" => Self::Warm,
            "neutral" => Self::Neutral,
            "cool" | "cool-ish" => Self::Cool,
            _ => Self::Other,
        }
    }
}

/// Four-letter personality code built from one letter per trait axis.
///
/// Only used for letter membership checks, so it is stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonaCode(String);

impl PersonaCode {
    /// Wraps a code as given.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Joins the trait letters that are present, in axis order.
    #[must_use]
    pub fn from_traits<S: AsRef<str>>(traits: &[Option<S>]) -> Self {
        Self(
            traits
                .iter()
                .flatten()
                .map(|t| t.as_ref().trim())
                .collect::<String>(),
        )
    }

    /// True if the code contains the given letter anywhere.
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(letter)
    }

    /// The code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PersonaCode {
    fn default() -> Self {
        Self::new(DEFAULT_PERSONA)
    }
}

impl fmt::Display for PersonaCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Room dimensions, in any consistent length unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDimensions {
    /// Free-form room type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    /// Width
    pub width: f64,
    /// Length
    pub length: f64,
    /// Ceiling height
    pub ceiling_height: f64,
}

impl RoomDimensions {
    /// Creates dimensions without a room type.
    #[must_use]
    pub const fn new(width: f64, length: f64, ceiling_height: f64) -> Self {
        Self {
            room_type: None,
            width,
            length,
            ceiling_height,
        }
    }
}

impl Default for RoomDimensions {
    fn default() -> Self {
        Self::new(DEFAULT_ROOM_WIDTH, DEFAULT_ROOM_LENGTH, DEFAULT_CEILING_HEIGHT)
    }
}

/// Practical constraints from the people and floors in the room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Household {
    /// Children use the room
    pub kids: bool,
    /// Pets use the room
    pub pets: bool,
    /// Flooring tone
    pub flooring: Flooring,
    /// Accent family the user asked for, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_accent: Option<String>,
}

/// Typed, defaulted wizard answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answers {
    /// Room dimensions and type
    pub room: RoomDimensions,
    /// Natural light amount
    pub daylight: Daylight,
    /// Natural light tone
    pub daylight_tone: DaylightTone,
    /// Artificial light tone, recorded for the export only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artificial_tone: Option<String>,
    /// Room objective
    pub objective: Objective,
    /// Persona code
    pub persona: PersonaCode,
    /// Household constraints
    pub household: Household,
}

impl Answers {
    /// Builds answers from a raw form, applying defaults for absent fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use moodbot::models::{Answers, Daylight, FormInput, Objective};
    ///
    /// let answers = Answers::from_form(&FormInput::default());
    /// assert_eq!(answers.daylight, Daylight::Medium);
    /// assert_eq!(answers.objective, Objective::Bigger);
    /// assert_eq!(answers.persona.as_str(), "ISFJ");
    /// assert_eq!(answers.room.width, 12.0);
    /// ```
    #[must_use]
    pub fn from_form(form: &FormInput) -> Self {
        let room = RoomDimensions {
            room_type: non_empty(form.room_type.as_deref()),
            width: positive_or(form.width, DEFAULT_ROOM_WIDTH),
            length: positive_or(form.length, DEFAULT_ROOM_LENGTH),
            ceiling_height: positive_or(form.ceiling_height, DEFAULT_CEILING_HEIGHT),
        };

        let persona = match non_empty(form.persona.as_deref()) {
            Some(code) => PersonaCode::new(code.to_ascii_uppercase()),
            None => {
                let traits = [&form.trait1, &form.trait2, &form.trait3, &form.trait4]
                    .map(|t| non_empty(t.as_deref()).map(|t| t.to_ascii_uppercase()));
                if traits.iter().all(Option::is_none) {
                    PersonaCode::default()
                } else {
                    PersonaCode::from_traits(&traits)
                }
            }
        };

        let household = Household {
            kids: is_yes(form.kids.as_deref()),
            pets: is_yes(form.pets.as_deref()),
            flooring: form
                .flooring
                .as_deref()
                .map_or_else(Flooring::default, Flooring::parse),
            preferred_accent: non_empty(form.preferred_accent.as_deref()),
        };

        Self {
            room,
            daylight: form
                .daylight
                .as_deref()
                .map_or_else(Daylight::default, Daylight::parse),
            daylight_tone: form
                .daylight_tone
                .as_deref()
                .map_or_else(DaylightTone::default, DaylightTone::parse),
            artificial_tone: non_empty(form.artificial_tone.as_deref()),
            objective: form
                .objective
                .as_deref()
                .map_or_else(Objective::default, Objective::parse),
            persona,
            household,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn positive_or(value: Option<f64>, default: f64) -> f64 {
    value
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(default)
}

fn is_yes(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.trim().eq_ignore_ascii_case("yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_empty_form() {
        let answers = Answers::from_form(&FormInput::default());
        assert_eq!(answers.room, RoomDimensions::new(12.0, 15.0, 8.0));
        assert_eq!(answers.daylight, Daylight::Medium);
        assert_eq!(answers.daylight_tone, DaylightTone::Neutral);
        assert_eq!(answers.objective, Objective::Bigger);
        assert_eq!(answers.persona, PersonaCode::new("ISFJ"));
        assert!(!answers.household.kids);
        assert!(!answers.household.pets);
        assert_eq!(answers.household.flooring, Flooring::Neutral);
        assert_eq!(answers.household.preferred_accent, None);
    }

    #[test]
    fn test_unrecognised_values_are_kept_as_other() {
        let form = FormInput {
            daylight: Some("blinding".to_string()),
            daylight_tone: Some("purple".to_string()),
            objective: Some("louder".to_string()),
            flooring: Some("carpet".to_string()),
            ..FormInput::default()
        };
        let answers = Answers::from_form(&form);
        assert_eq!(answers.daylight, Daylight::Other);
        assert_eq!(answers.daylight_tone, DaylightTone::Other);
        assert_eq!(answers.objective, Objective::Other);
        assert_eq!(answers.household.flooring, Flooring::Other);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Daylight::parse("Strong"), Daylight::Strong);
        assert_eq!(DaylightTone::parse(" COOL "), DaylightTone::Cool);
        assert_eq!(Objective::parse("Cozier"), Objective::Cozier);
        assert_eq!(Flooring::parse("cool-ish"), Flooring::Cool);
    }

    #[test]
    fn test_invalid_dimensions_fall_back() {
        let form = FormInput {
            width: Some(0.0),
            length: Some(-3.0),
            ceiling_height: Some(f64::NAN),
            ..FormInput::default()
        };
        let answers = Answers::from_form(&form);
        assert_eq!(answers.room, RoomDimensions::new(12.0, 15.0, 8.0));
    }

    #[test]
    fn test_persona_from_traits() {
        let form = FormInput {
            trait1: Some("e".to_string()),
            trait2: Some("N".to_string()),
            trait3: None,
            trait4: Some("P".to_string()),
            ..FormInput::default()
        };
        let answers = Answers::from_form(&form);
        assert_eq!(answers.persona.as_str(), "ENP");
    }

    #[test]
    fn test_persona_code_wins_over_traits() {
        let form = FormInput {
            persona: Some("entj".to_string()),
            trait1: Some("I".to_string()),
            ..FormInput::default()
        };
        assert_eq!(Answers::from_form(&form).persona.as_str(), "ENTJ");
    }

    #[test]
    fn test_household_flags() {
        let form = FormInput {
            kids: Some("Yes".to_string()),
            pets: Some("no".to_string()),
            flooring: Some("warm".to_string()),
            preferred_accent: Some("  ".to_string()),
            ..FormInput::default()
        };
        let household = Answers::from_form(&form).household;
        assert!(household.kids);
        assert!(!household.pets);
        assert_eq!(household.flooring, Flooring::Warm);
        assert_eq!(household.preferred_accent, None);
    }

    #[test]
    fn test_overlay_prefers_top_values() {
        let file = FormInput {
            width: Some(10.0),
            objective: Some("cozier".to_string()),
            ..FormInput::default()
        };
        let flags = FormInput {
            objective: Some("softer".to_string()),
            ..FormInput::default()
        };
        let merged = file.overlay(flags);
        assert_eq!(merged.width, Some(10.0));
        assert_eq!(merged.objective.as_deref(), Some("softer"));
    }

    #[test]
    fn test_form_input_reads_camel_case_json() {
        let json = r#"{"ceilingHeight": 9.5, "daylightTone": "cool", "preferredAccent": "Teal"}"#;
        let form: FormInput = serde_json::from_str(json).unwrap();
        assert_eq!(form.ceiling_height, Some(9.5));
        assert_eq!(form.daylight_tone.as_deref(), Some("cool"));
        assert_eq!(form.preferred_accent.as_deref(), Some("Teal"));
    }

    #[test]
    fn test_answers_serialize_unknown_as_other() {
        let answers = Answers {
            objective: Objective::Other,
            ..Answers::default()
        };
        let value = serde_json::to_value(&answers).unwrap();
        assert_eq!(value["objective"], "other");
        assert_eq!(value["persona"], "ISFJ");
        assert_eq!(value["room"]["ceilingHeight"], 8.0);
    }
}

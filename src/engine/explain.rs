//! Plain-language explanation of a palette choice.

use super::assembler::SelectedPalette;
use crate::models::{Answers, ColorEntry};

fn label(entry: &ColorEntry) -> String {
    format!("{}, {}", entry.name, entry.hex)
}

/// Sentences describing each role, one per line of reasoning.
#[must_use]
pub fn explanation_sentences(palette: &SelectedPalette<'_>, answers: &Answers) -> Vec<String> {
    let base = palette.base.entry;
    let accent = palette.accent.entry;
    let trim = palette.trim.entry;

    let mut sentences = vec![
        format!(
            "Base ({}): chosen for balanced LRV ({}) relative to room light and objective.",
            label(base),
            base.lrv
        ),
        format!(
            "Accent ({}): chosen to provide contrast and personality-forward colour (family: {}).",
            label(accent),
            accent.family
        ),
        format!(
            "Trim/Ceiling ({}): chosen to balance perceived height and crisp edges.",
            label(trim)
        ),
    ];

    let household = &answers.household;
    if household.kids {
        sentences.push("Adjusted for kids: avoiding ultra-faint whites for durability.".to_string());
    }
    if household.pets {
        sentences.push("Adjusted for pets: avoiding high-showing fur colours.".to_string());
    }
    if let Some(preferred) = household
        .preferred_accent
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
    {
        sentences.push(format!("Preferred accent ({preferred}) was considered."));
    }

    sentences
}

/// Explanation paragraph for a palette, sentences joined by single spaces.
#[must_use]
pub fn explain_choice(palette: &SelectedPalette<'_>, answers: &Answers) -> String {
    explanation_sentences(palette, answers).join(" ")
}

//! Data models for colors, catalog entries and wizard answers.
//!
//! This module contains the core data structures used throughout the application.
//! Models are independent of scoring logic and of the command-line surface.

pub mod answers;
pub mod color_entry;
pub mod rgb;

// Re-export all model types
pub use answers::{
    Answers, Daylight, DaylightTone, Flooring, FormInput, Household, Objective, PersonaCode,
    RoomDimensions,
};
pub use color_entry::{CatalogRecord, ColorEntry, Family, Undertone};
pub use rgb::{hex_to_rgb, perceived_luma, rgb_to_hsl, Hsl, RgbColor};

//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the defaults the form falls back to.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "MoodBot";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "moodbot";

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "MOODBOT_CONFIG_DIR";

/// File name used when an export path is not given.
pub const DEFAULT_EXPORT_FILE: &str = "moodbot-result.json";

/// Default room width when the form leaves it blank.
pub const DEFAULT_ROOM_WIDTH: f64 = 12.0;

/// Default room length when the form leaves it blank.
pub const DEFAULT_ROOM_LENGTH: f64 = 15.0;

/// Default ceiling height when the form leaves it blank.
pub const DEFAULT_CEILING_HEIGHT: f64 = 8.0;

/// Default persona code.
pub const DEFAULT_PERSONA: &str = "ISFJ";

/// Number of coats assumed by the paint estimate.
pub const DEFAULT_COATS: u32 = 2;

/// Area one litre of paint covers, in the same square units as the room.
pub const DEFAULT_COVERAGE_PER_LITRE: f64 = 120.0;

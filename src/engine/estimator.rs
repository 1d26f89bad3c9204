//! Paint quantity estimation from room dimensions.
//!
//! Areas are in square feet; coverage is in square feet per litre. The
//! wall area is a full perimeter rectangle with no deduction for doors or
//! windows.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{DEFAULT_COATS, DEFAULT_COVERAGE_PER_LITRE};
use crate::models::RoomDimensions;

/// Derived room areas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAreas {
    /// Floor area (width x length)
    pub floor_area: f64,
    /// Total wall area (perimeter x ceiling height)
    pub wall_area: f64,
    /// Ceiling area, equal to the floor area
    pub ceiling_area: f64,
    /// Room footprint, equal to the floor area
    pub room_area: f64,
}

/// Computes floor, wall and ceiling area.
///
/// ```
/// use moodbot::engine::compute_room_areas;
/// use moodbot::models::RoomDimensions;
///
/// let areas = compute_room_areas(&RoomDimensions::new(12.0, 15.0, 8.0));
/// assert_eq!(areas.wall_area, 432.0);
/// assert_eq!(areas.room_area, 180.0);
/// ```
#[must_use]
pub fn compute_room_areas(room: &RoomDimensions) -> RoomAreas {
    let floor_area = room.width * room.length;
    let wall_area = 2.0 * (room.width + room.length) * room.ceiling_height;

    RoomAreas {
        floor_area,
        wall_area,
        ceiling_area: floor_area,
        room_area: floor_area,
    }
}

/// Coats and coverage used for an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateOptions {
    /// Number of coats applied to walls and ceiling
    pub coats: u32,
    /// Square feet covered by one litre of paint
    pub coverage_per_litre: f64,
}

impl Default for EstimateOptions {
    fn default() -> Self {
        Self {
            coats: DEFAULT_COATS,
            coverage_per_litre: DEFAULT_COVERAGE_PER_LITRE,
        }
    }
}

/// Litres needed for walls and ceiling, and the whole litres to buy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintEstimate {
    /// Wall litres, rounded up to one decimal
    pub wall_litres: f64,
    /// Ceiling litres, rounded up to one decimal
    pub ceiling_litres: f64,
    /// Whole litres to purchase
    pub total_litres: f64,
}

impl fmt::Display for PaintEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Walls: {:.1} L (estimated), Ceiling: {:.1} L → Purchase recommendation: {} L (round up).",
            self.wall_litres, self.ceiling_litres, self.total_litres
        )
    }
}

/// Rounds up to one decimal place.
fn ceil_tenth(value: f64) -> f64 {
    (value * 10.0).ceil() / 10.0
}

/// Estimates litres for the given room with explicit coats and coverage.
///
/// Both surfaces receive the same number of coats. Non-positive coverage
/// yields a zero estimate rather than an infinite one.
///
/// # Examples
///
/// ```
/// use moodbot::engine::estimate_litres;
/// use moodbot::models::RoomDimensions;
///
/// let estimate = estimate_litres(&RoomDimensions::default(), 2, 120.0);
/// assert_eq!(estimate.wall_litres, 7.2);
/// assert_eq!(estimate.ceiling_litres, 3.0);
/// assert_eq!(estimate.total_litres, 11.0);
/// ```
#[must_use]
pub fn estimate_litres(room: &RoomDimensions, coats: u32, coverage_per_litre: f64) -> PaintEstimate {
    if coverage_per_litre <= 0.0 || !coverage_per_litre.is_finite() {
        return PaintEstimate {
            wall_litres: 0.0,
            ceiling_litres: 0.0,
            total_litres: 0.0,
        };
    }

    let areas = compute_room_areas(room);
    let coats = f64::from(coats);
    let wall_litres = ceil_tenth(areas.wall_area * coats / coverage_per_litre);
    let ceiling_litres = ceil_tenth(areas.ceiling_area * coats / coverage_per_litre);

    PaintEstimate {
        wall_litres,
        ceiling_litres,
        total_litres: (wall_litres + ceiling_litres).ceil(),
    }
}

/// Estimates litres using the options' coats and coverage.
#[must_use]
pub fn estimate_with(room: &RoomDimensions, options: EstimateOptions) -> PaintEstimate {
    estimate_litres(room, options.coats, options.coverage_per_litre)
}

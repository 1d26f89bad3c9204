//! Estimate command: paint litres for a room.

use crate::cli::common::{load_config, resolve_estimate_options, CliError, CliResult, RoomArgs};
use crate::engine::{compute_room_areas, estimate_with, EstimateOptions, PaintEstimate, RoomAreas};
use crate::models::RoomDimensions;
use clap::Args;
use serde::Serialize;

/// Estimate how much paint a room needs
#[derive(Debug, Clone, Args)]
pub struct EstimateArgs {
    #[command(flatten)]
    room: RoomArgs,

    /// Number of coats (defaults to the configured value)
    #[arg(long, value_name = "N")]
    pub coats: Option<u32>,

    /// Square feet covered per litre (defaults to the configured value)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub coverage: Option<f64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct EstimateOutput {
    room: RoomDimensions,
    areas: RoomAreas,
    options: EstimateOptions,
    estimate: PaintEstimate,
}

impl EstimateArgs {
    /// Execute the estimate command
    pub fn execute(&self) -> CliResult<()> {
        let room = self.room.to_dimensions()?;
        let options =
            resolve_estimate_options(load_config().estimate_options(), self.coats, self.coverage)?;
        let estimate = estimate_with(&room, options);

        if self.json {
            let output = EstimateOutput {
                areas: compute_room_areas(&room),
                room,
                options,
                estimate,
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            let areas = compute_room_areas(&room);
            println!(
                "Room: {} x {} x {}",
                room.width, room.length, room.ceiling_height
            );
            println!(
                "Wall area: {} sq ft, ceiling area: {} sq ft",
                areas.wall_area, areas.ceiling_area
            );
            println!(
                "{} coat(s) at {} sq ft per litre",
                options.coats, options.coverage_per_litre
            );
            println!("{estimate}");
        }

        Ok(())
    }
}

//! Command-line argument definitions for the auditorium CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the parameter file, override individual
//! layout parameters, and control output, configuration and logging.

use clap::{Parser, ValueEnum};

use auditorium_core::params::LayoutParameters;

/// Output format written by the CLI
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Top-down SVG plan of the room, risers and seats
    #[default]
    Svg,
    /// Placement records as TOML
    Toml,
}

/// Command-line arguments for the auditorium layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a layout parameter file (TOML); defaults are used when omitted
    #[arg(help = "Path to the layout parameter file")]
    pub input: Option<String>,

    /// Path to the output file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Room width, overriding the parameter file
    #[arg(long)]
    pub room_width: Option<f32>,

    /// Room depth, overriding the parameter file
    #[arg(long)]
    pub room_depth: Option<f32>,

    /// Room height, overriding the parameter file
    #[arg(long)]
    pub room_height: Option<f32>,

    /// Number of seat rows
    #[arg(long)]
    pub rows: Option<usize>,

    /// Number of seats in every row
    #[arg(long)]
    pub seats_per_row: Option<usize>,

    /// Lateral distance between seats
    #[arg(long)]
    pub seat_spacing: Option<f32>,

    /// Depth distance between rows
    #[arg(long)]
    pub row_spacing: Option<f32>,

    /// Elevation step between rows (may be negative)
    #[arg(long, allow_negative_numbers = true)]
    pub row_elevation: Option<f32>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Applies the per-field overrides given on the command line.
    pub fn apply_overrides(&self, params: LayoutParameters) -> LayoutParameters {
        let mut params = params.with_room(
            self.room_width.unwrap_or(params.room_width()),
            self.room_depth.unwrap_or(params.room_depth()),
            self.room_height.unwrap_or(params.room_height()),
        );
        if let Some(rows) = self.rows {
            params = params.with_rows(rows);
        }
        if let Some(seats_per_row) = self.seats_per_row {
            params = params.with_seats_per_row(seats_per_row);
        }
        if let Some(seat_spacing) = self.seat_spacing {
            params = params.with_seat_spacing(seat_spacing);
        }
        if let Some(row_spacing) = self.row_spacing {
            params = params.with_row_spacing(row_spacing);
        }
        if let Some(row_elevation) = self.row_elevation {
            params = params.with_row_elevation(row_elevation);
        }
        params
    }
}

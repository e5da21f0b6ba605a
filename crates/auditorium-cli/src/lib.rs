//! CLI logic for the auditorium layout tool.
//!
//! Loads configuration and layout parameters, generates the layout and writes
//! it either as an SVG plan or as TOML placement records.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, OutputFormat};
pub use config::ConfigError;

use std::{fs, io};

use log::info;
use serde::Serialize;
use thiserror::Error;

use auditorium::{AuditoriumBuilder, AuditoriumError, Layout};
use auditorium_core::{
    params::LayoutParameters,
    placement::{RiserSpec, SeatSlot},
};

/// Errors produced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Auditorium(#[from] AuditoriumError),
}

impl From<io::Error> for CliError {
    fn from(error: io::Error) -> Self {
        Self::Auditorium(AuditoriumError::Io(error))
    }
}

/// Placement records written by [`OutputFormat::Toml`].
#[derive(Serialize)]
struct LayoutDocument<'a> {
    parameters: &'a LayoutParameters,
    risers: &'a [RiserSpec],
    seats: &'a [SeatSlot],
}

/// Run the auditorium CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - Configuration or parameter file errors
/// - Invalid layout parameters
/// - Rendering errors
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path:? = args.input,
        output_path = args.output;
        "Generating layout"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Load parameters and apply command-line overrides
    let params = args.apply_overrides(config::load_parameters(args.input.as_ref())?);

    let builder = AuditoriumBuilder::new(app_config);
    let layout = builder.generate(&params)?;

    info!(
        risers = layout.risers().len(),
        seats = layout.seats().len();
        "Layout generated"
    );

    let output = match args.format {
        OutputFormat::Svg => builder.render_svg(&params, &layout)?,
        OutputFormat::Toml => render_toml(&params, &layout)?,
    };

    // Write output file
    fs::write(&args.output, output)?;

    info!(output_file = args.output, format:? = args.format; "Layout exported successfully");

    Ok(())
}

fn render_toml(params: &LayoutParameters, layout: &Layout) -> Result<String, AuditoriumError> {
    let document = LayoutDocument {
        parameters: params,
        risers: layout.risers(),
        seats: layout.seats(),
    };
    toml::to_string(&document).map_err(|err| AuditoriumError::Export(Box::new(err)))
}

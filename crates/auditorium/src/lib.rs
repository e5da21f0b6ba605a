//! Auditorium - procedural stadium seating for rectangular rooms.
//!
//! Computes the placement of every riser and seat in a stepped seating
//! arrangement from a handful of numeric parameters. Output is plain value
//! data that any renderer can instance; an SVG plan exporter is included for
//! inspecting layouts without one.

pub mod config;
pub mod export;
pub mod layout;
pub mod room;
pub mod scene;

mod error;

pub use auditorium_core::{color, geometry, params, placement};

pub use error::AuditoriumError;
pub use layout::{Layout, Placements, generate_layout};

use log::{debug, info, trace};

use auditorium_core::params::LayoutParameters;

use config::AppConfig;
use export::Exporter;
use room::RoomEnvelope;

/// Builder for generating and rendering auditorium layouts.
///
/// Holds the configuration; every call is independent and the builder can be
/// reused for any number of parameter sets.
///
/// # Examples
///
/// ```rust
/// use auditorium::{AuditoriumBuilder, config::AppConfig, params::LayoutParameters};
///
/// let builder = AuditoriumBuilder::new(AppConfig::default());
/// let params = LayoutParameters::default();
///
/// let layout = builder.generate(&params).expect("Failed to generate");
/// assert_eq!(layout.seats().len(), 40);
///
/// let svg = builder.render_svg(&params, &layout).expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Default)]
pub struct AuditoriumBuilder {
    config: AppConfig,
}

impl AuditoriumBuilder {
    /// Create a new builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Layout constants and plan style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration the builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Generate the complete layout for `params`.
    ///
    /// # Errors
    ///
    /// Returns [`AuditoriumError::InvalidParameters`] for zero rows or
    /// seats, non-positive spacings, or non-finite lengths.
    pub fn generate(&self, params: &LayoutParameters) -> Result<Layout, AuditoriumError> {
        let layout = generate_layout(params, self.config.layout())?;
        trace!(layout:?; "Generated layout");
        Ok(layout)
    }

    /// Prepare a placement stream for `params`.
    ///
    /// Parameters are validated here; the returned iterator cannot fail.
    ///
    /// # Errors
    ///
    /// Same as [`AuditoriumBuilder::generate`].
    pub fn placements(&self, params: &LayoutParameters) -> Result<Placements, AuditoriumError> {
        Placements::new(params, self.config.layout())
    }

    /// Describe the room surfaces for `params`.
    pub fn room(&self, params: &LayoutParameters) -> RoomEnvelope {
        RoomEnvelope::new(params)
    }

    /// Render a generated layout to an SVG plan.
    ///
    /// # Arguments
    ///
    /// * `params` - The parameters `layout` was generated from (for the room outline)
    /// * `layout` - A layout from [`AuditoriumBuilder::generate`]
    ///
    /// # Errors
    ///
    /// Returns [`AuditoriumError::Export`] if the style configuration is invalid.
    pub fn render_svg(
        &self,
        params: &LayoutParameters,
        layout: &Layout,
    ) -> Result<String, AuditoriumError> {
        info!(seats = layout.seats().len(); "Rendering SVG plan");

        let room = self.room(params);
        let mut svg_exporter = export::svg::SvgBuilder::new(Vec::new())
            .with_style(self.config.style())
            .build()?;

        svg_exporter.export_layout(&room, layout)?;

        let svg_string = String::from_utf8(svg_exporter.into_inner())
            .map_err(|err| AuditoriumError::Export(Box::new(err)))?;

        debug!(bytes = svg_string.len(); "SVG rendered successfully");
        Ok(svg_string)
    }
}

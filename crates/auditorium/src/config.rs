//! Configuration types for auditorium layout generation and plan rendering.
//!
//! This module provides configuration structures that control the fixed
//! constants of the layout and the styling of exported plans. All types
//! implement [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConstants`] - Fixed offsets and margins used by the generator.
//! - [`StyleConfig`] - Colors and scale of SVG plan views.
//!
//! # Example
//!
//! ```
//! # use auditorium::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.layout().riser_margin(), 2.0);
//! assert!(config.style().seat_color().is_ok());
//! ```

use std::f32::consts::FRAC_PI_2;

use serde::Deserialize;

use auditorium_core::color::Color;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout constants section.
    #[serde(default)]
    layout: LayoutConstants,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConstants, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout constants.
    pub fn layout(&self) -> &LayoutConstants {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Fixed constants of the riser and seat geometry.
///
/// With the defaults, a seat on a riser rests at `row * row_elevation + 1.0`
/// and the floor-level row rests at `1.0`, so every seat sits one unit above
/// its row's elevation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConstants {
    /// Inset subtracted from the room width to get the riser width.
    riser_margin: f32,

    /// Height of a row's riser top above the row elevation.
    seat_height_offset: f32,

    /// Offset from a riser top to the seat prototype's rest position.
    seat_vertical_offset: f32,

    /// Seat height of the last row, which stands on the floor.
    floor_seat_height: f32,

    /// Yaw in radians about +Y that turns a seat towards the screen wall.
    seat_yaw: f32,
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            riser_margin: 2.0,
            seat_height_offset: 0.5,
            seat_vertical_offset: 0.5,
            floor_seat_height: 1.0,
            seat_yaw: FRAC_PI_2,
        }
    }
}

impl LayoutConstants {
    pub fn riser_margin(&self) -> f32 {
        self.riser_margin
    }

    pub fn seat_height_offset(&self) -> f32 {
        self.seat_height_offset
    }

    pub fn seat_vertical_offset(&self) -> f32 {
        self.seat_vertical_offset
    }

    pub fn floor_seat_height(&self) -> f32 {
        self.floor_seat_height
    }

    pub fn seat_yaw(&self) -> f32 {
        self.seat_yaw
    }

    pub fn with_riser_margin(mut self, riser_margin: f32) -> Self {
        self.riser_margin = riser_margin;
        self
    }

    pub fn with_seat_offsets(mut self, seat_height_offset: f32, seat_vertical_offset: f32) -> Self {
        self.seat_height_offset = seat_height_offset;
        self.seat_vertical_offset = seat_vertical_offset;
        self
    }

    pub fn with_floor_seat_height(mut self, floor_seat_height: f32) -> Self {
        self.floor_seat_height = floor_seat_height;
        self
    }

    pub fn with_seat_yaw(mut self, seat_yaw: f32) -> Self {
        self.seat_yaw = seat_yaw;
        self
    }
}

/// Visual styling configuration for SVG plan views.
///
/// Colors are CSS color strings. Fields that are not set fall back to the
/// palette of the reference cinema scene.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Background color behind the room, transparent when unset.
    background_color: Option<String>,

    /// Floor fill color.
    floor_color: Option<String>,

    /// Wall outline color.
    wall_color: Option<String>,

    /// Screen color.
    screen_color: Option<String>,

    /// Riser fill color.
    riser_color: Option<String>,

    /// Seat fill color.
    seat_color: Option<String>,

    /// Pixels per world unit.
    scale: f32,

    /// Empty margin around the room, in world units.
    padding: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            floor_color: None,
            wall_color: None,
            screen_color: None,
            riser_color: None,
            seat_color: None,
            scale: 24.0,
            padding: 1.0,
        }
    }
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    pub fn floor_color(&self) -> Result<Color, String> {
        parse_or("floor", self.floor_color.as_deref(), "#4a4a4a")
    }

    pub fn wall_color(&self) -> Result<Color, String> {
        parse_or("wall", self.wall_color.as_deref(), "#8b4513")
    }

    pub fn screen_color(&self) -> Result<Color, String> {
        parse_or("screen", self.screen_color.as_deref(), "#ffffff")
    }

    pub fn riser_color(&self) -> Result<Color, String> {
        parse_or("riser", self.riser_color.as_deref(), "#6e6e6e")
    }

    pub fn seat_color(&self) -> Result<Color, String> {
        parse_or("seat", self.seat_color.as_deref(), "#b22222")
    }

    /// Returns the number of pixels per world unit.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Returns the margin around the room in world units.
    pub fn padding(&self) -> f32 {
        self.padding
    }
}

fn parse_or(name: &str, configured: Option<&str>, fallback: &str) -> Result<Color, String> {
    Color::new(configured.unwrap_or(fallback))
        .map_err(|err| format!("Invalid {name} color in config: {err}"))
}

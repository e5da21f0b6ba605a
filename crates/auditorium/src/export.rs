//! Export functionality for generated layouts.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! turning a generated layout into an output format. Exporters only read
//! placement data; they are a diagnostic view of the layout, not a renderer.
//!
//! # Pipeline Position
//!
//! ```text
//! LayoutParameters
//!     ↓ layout
//! Layout + RoomEnvelope
//!     ↓ export (this module)
//! Output
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] — top-down SVG plan via [`svg::SvgBuilder`] and [`svg::Svg`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`AuditoriumError::Export`] at the crate
//! boundary.
//!
//! [`AuditoriumError::Export`]: crate::AuditoriumError::Export

/// SVG export backend.
pub mod svg;

use crate::{layout::Layout, room::RoomEnvelope};

/// Abstraction for layout export backends.
pub trait Exporter {
    /// Exports a generated layout together with the room it was generated for.
    ///
    /// # Arguments
    ///
    /// * `room` - The room surfaces around the seating.
    /// * `layout` - The generated risers and seats.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the layout cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_layout(&mut self, room: &RoomEnvelope, layout: &Layout) -> Result<(), Error>;
}

/// Errors that can occur during layout export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

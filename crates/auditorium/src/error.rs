//! Error types for auditorium operations.
//!
//! This module provides the main error type [`AuditoriumError`] which wraps
//! the error conditions that can occur while generating and exporting a
//! layout.

use std::io;

use thiserror::Error;

use auditorium_core::params::InvalidParameters;

/// The main error type for auditorium operations.
///
/// Layout generation itself can only fail with
/// [`AuditoriumError::InvalidParameters`], raised before any geometry is
/// computed. The remaining variants belong to the surfaces around it.
#[derive(Debug, Error)]
pub enum AuditoriumError {
    #[error(transparent)]
    InvalidParameters(#[from] InvalidParameters),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for AuditoriumError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

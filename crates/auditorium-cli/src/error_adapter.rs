//! Error adapter for converting CLI errors to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! TOML parse failures carry their source text and the offending span, and
//! are rendered as a [`TomlDiagnostic`] with a labelled snippet. Every other
//! failure is rendered through [`ErrorAdapter`] with a stable code.

use std::{fmt, ops::Range, path::Path};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use auditorium::AuditoriumError;
use auditorium_core::params::ParameterIssue;

use crate::{CliError, config::ConfigError};

/// Adapter for a TOML parse failure.
///
/// Wraps the parser message together with the file contents so miette can
/// point at the offending key or value.
pub struct TomlDiagnostic<'a> {
    path: &'a Path,
    message: &'a str,
    src: &'a str,
    span: Option<Range<usize>>,
}

impl<'a> TomlDiagnostic<'a> {
    /// Create a new TOML diagnostic.
    pub fn new(path: &'a Path, message: &'a str, src: &'a str, span: Option<Range<usize>>) -> Self {
        Self {
            path,
            message,
            src,
            span,
        }
    }
}

impl fmt::Debug for TomlDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TomlDiagnostic")
            .field("path", &self.path)
            .field("message", &self.message)
            .field("span", &self.span)
            .finish()
    }
}

impl fmt::Display for TomlDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid TOML in {}", self.path.display())
    }
}

impl std::error::Error for TomlDiagnostic<'_> {}

impl MietteDiagnostic for TomlDiagnostic<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("auditorium::toml"))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span.clone()?;
        let span = SourceSpan::new(span.start.into(), span.len());
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some(self.message.to_string()), span),
        )))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.span.is_some() {
            return None;
        }
        Some(Box::new(self.message))
    }
}

/// Adapter for errors without a source location.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            CliError::Config(ConfigError::Parse { .. }) => "auditorium::toml",
            CliError::Config(ConfigError::MissingFile(_)) => "auditorium::missing_file",
            CliError::Config(ConfigError::Read { .. }) => "auditorium::io",
            CliError::Auditorium(AuditoriumError::InvalidParameters(_)) => {
                "auditorium::invalid_parameters"
            }
            CliError::Auditorium(AuditoriumError::Io(_)) => "auditorium::io",
            CliError::Auditorium(AuditoriumError::Export(_)) => "auditorium::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            CliError::Auditorium(AuditoriumError::InvalidParameters(err)) => {
                match err.issue() {
                    ParameterIssue::NoRows => "set `rows` to 1 or more",
                    ParameterIssue::NoSeats => "set `seats_per_row` to 1 or more",
                    ParameterIssue::TooManyPlacements { .. } => {
                        "reduce `rows` or `seats_per_row`"
                    }
                    ParameterIssue::NonPositiveSeatSpacing(_) => {
                        "`seat_spacing` is the lateral distance between seat centers"
                    }
                    ParameterIssue::NonPositiveRowSpacing(_) => {
                        "`row_spacing` is the depth of one row and its riser"
                    }
                    ParameterIssue::NonFinite { .. } => "lengths must be ordinary numbers",
                }
            }
            CliError::Config(ConfigError::MissingFile(_)) => "check the path passed on the command line",
            _ => return None,
        };
        Some(Box::new(help))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A TOML parse failure with source location information.
    Diagnostic(TomlDiagnostic<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`CliError`] into a reportable error.
pub fn to_reportable(err: &CliError) -> Reportable<'_> {
    match err {
        CliError::Config(ConfigError::Parse {
            path,
            src,
            message,
            span,
        }) => Reportable::Diagnostic(TomlDiagnostic::new(path, message, src, span.clone())),
        _ => Reportable::Error(ErrorAdapter(err)),
    }
}

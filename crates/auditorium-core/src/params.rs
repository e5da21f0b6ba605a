//! Input parameters for layout generation.
//!
//! [`LayoutParameters`] is the complete, immutable input to the generator. It
//! is deserializable so parameter sets can live in TOML files; any field left
//! out falls back to the reference cinema room.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The room envelope and seating grid to lay out.
///
/// Lengths are world units. `row_elevation` is signed: a negative step makes
/// successive rows descend, which may produce degenerate risers (see
/// [`RiserSpec`](crate::placement::RiserSpec)). That is accepted rather than
/// rejected.
///
/// # Examples
///
/// ```
/// # use auditorium_core::params::LayoutParameters;
/// let params = LayoutParameters::default().with_rows(3).with_seats_per_row(10);
/// assert_eq!(params.rows(), 3);
/// assert!(params.validate().is_ok());
///
/// let empty = params.with_rows(0);
/// assert!(empty.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutParameters {
    room_width: f32,
    room_depth: f32,
    room_height: f32,
    rows: usize,
    seats_per_row: usize,
    seat_spacing: f32,
    row_spacing: f32,
    row_elevation: f32,
}

impl Default for LayoutParameters {
    fn default() -> Self {
        Self {
            room_width: 20.0,
            room_depth: 25.0,
            room_height: 10.0,
            rows: 5,
            seats_per_row: 8,
            seat_spacing: 2.0,
            row_spacing: 2.5,
            row_elevation: 0.5,
        }
    }
}

impl LayoutParameters {
    /// Returns the room extent along X
    pub fn room_width(&self) -> f32 {
        self.room_width
    }

    /// Returns the room extent along Z
    pub fn room_depth(&self) -> f32 {
        self.room_depth
    }

    /// Returns the room extent along Y
    pub fn room_height(&self) -> f32 {
        self.room_height
    }

    /// Returns the number of seat rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of seats in every row
    pub fn seats_per_row(&self) -> usize {
        self.seats_per_row
    }

    /// Returns the lateral distance between neighbouring seats
    pub fn seat_spacing(&self) -> f32 {
        self.seat_spacing
    }

    /// Returns the depth distance between neighbouring rows
    pub fn row_spacing(&self) -> f32 {
        self.row_spacing
    }

    /// Returns the signed elevation step between neighbouring rows
    pub fn row_elevation(&self) -> f32 {
        self.row_elevation
    }

    pub fn with_room(mut self, width: f32, depth: f32, height: f32) -> Self {
        self.room_width = width;
        self.room_depth = depth;
        self.room_height = height;
        self
    }

    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_seats_per_row(mut self, seats_per_row: usize) -> Self {
        self.seats_per_row = seats_per_row;
        self
    }

    pub fn with_seat_spacing(mut self, seat_spacing: f32) -> Self {
        self.seat_spacing = seat_spacing;
        self
    }

    pub fn with_row_spacing(mut self, row_spacing: f32) -> Self {
        self.row_spacing = row_spacing;
        self
    }

    pub fn with_row_elevation(mut self, row_elevation: f32) -> Self {
        self.row_elevation = row_elevation;
        self
    }

    /// Total number of seats the grid holds, saturating at `usize::MAX`.
    ///
    /// Exact for any parameters that pass [`LayoutParameters::validate`].
    pub fn seat_count(&self) -> usize {
        self.rows.saturating_mul(self.seats_per_row)
    }

    /// Total number of risers; every row but the last stands on one.
    pub fn riser_count(&self) -> usize {
        self.rows.saturating_sub(1)
    }

    /// Total number of placement records (risers plus seats), or `None` if
    /// it does not fit in a `usize`.
    pub fn placement_count(&self) -> Option<usize> {
        self.rows
            .checked_mul(self.seats_per_row)?
            .checked_add(self.riser_count())
    }

    /// Checks that the parameters describe a computable layout.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameters`] when there are no rows or no seats, when
    /// the placement count overflows `usize`, when either spacing is zero or negative, or when any length is NaN or
    /// infinite. A negative `row_elevation` is not an error.
    pub fn validate(&self) -> Result<(), InvalidParameters> {
        if self.rows < 1 {
            return Err(ParameterIssue::NoRows.into());
        }
        if self.seats_per_row < 1 {
            return Err(ParameterIssue::NoSeats.into());
        }
        if self.placement_count().is_none() {
            return Err(ParameterIssue::TooManyPlacements {
                rows: self.rows,
                seats_per_row: self.seats_per_row,
            }
            .into());
        }

        let lengths = [
            ("room_width", self.room_width),
            ("room_depth", self.room_depth),
            ("room_height", self.room_height),
            ("seat_spacing", self.seat_spacing),
            ("row_spacing", self.row_spacing),
            ("row_elevation", self.row_elevation),
        ];
        if let Some(&(field, value)) = lengths.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ParameterIssue::NonFinite { field, value }.into());
        }

        if self.seat_spacing <= 0.0 {
            return Err(ParameterIssue::NonPositiveSeatSpacing(self.seat_spacing).into());
        }
        if self.row_spacing <= 0.0 {
            return Err(ParameterIssue::NonPositiveRowSpacing(self.row_spacing).into());
        }

        Ok(())
    }
}

/// The specific reason a [`LayoutParameters`] value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParameterIssue {
    #[error("row count must be at least 1")]
    NoRows,

    #[error("seats per row must be at least 1")]
    NoSeats,

    #[error("{rows} rows of {seats_per_row} seats is more placements than can be counted")]
    TooManyPlacements { rows: usize, seats_per_row: usize },

    #[error("seat spacing must be positive, got {0}")]
    NonPositiveSeatSpacing(f32),

    #[error("row spacing must be positive, got {0}")]
    NonPositiveRowSpacing(f32),

    #[error("`{field}` must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },
}

/// Error returned when layout parameters cannot produce a layout.
///
/// Raised before any geometry is computed; the same parameters always fail
/// the same way.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid layout parameters: {issue}")]
pub struct InvalidParameters {
    issue: ParameterIssue,
}

impl InvalidParameters {
    /// Returns the reason the parameters were rejected
    pub fn issue(&self) -> ParameterIssue {
        self.issue
    }
}

impl From<ParameterIssue> for InvalidParameters {
    fn from(issue: ParameterIssue) -> Self {
        Self { issue }
    }
}

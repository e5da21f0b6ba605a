//! Riser elevation model.
//!
//! Computes the vertical extent of the platform under a row. A riser is a
//! solid block from the floor (`y = 0`) up to the row's top height, so its
//! thickness is not an independent parameter: it is exactly the top height.

use crate::config::LayoutConstants;

/// Vertical geometry of one row's riser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiserElevation {
    top_height: f32,
    thickness: f32,
    center_y: f32,
}

impl RiserElevation {
    /// Computes the riser geometry for `row` given the per-row elevation step.
    ///
    /// - `row_y = row * row_elevation`
    /// - `top_height = row_y + seat_height_offset`
    /// - `thickness = top_height`
    /// - `center_y = top_height / 2`
    ///
    /// A negative `row_elevation` is not special-cased: the top height may
    /// reach zero or go negative, giving a degenerate block. The caller is
    /// responsible for never asking about the floor-level (last) row.
    pub fn for_row(row: usize, row_elevation: f32, constants: &LayoutConstants) -> Self {
        let row_y = row as f32 * row_elevation;
        let top_height = row_y + constants.seat_height_offset();
        Self {
            top_height,
            thickness: top_height,
            center_y: top_height / 2.0,
        }
    }

    /// Returns the height of the riser's top face
    pub fn top_height(&self) -> f32 {
        self.top_height
    }

    /// Returns the floor-to-top thickness of the block
    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// Returns the vertical center of the block
    pub fn center_y(&self) -> f32 {
        self.center_y
    }

    /// Returns true when the block has zero or negative thickness
    pub fn is_degenerate(&self) -> bool {
        self.thickness <= 0.0
    }
}

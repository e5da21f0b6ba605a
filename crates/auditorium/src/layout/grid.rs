//! Placement grid generator.
//!
//! Maps a (row, seat) pair to a seat transform, and a row to its riser
//! transform. Rows are laid out along Z starting at a quarter of the room
//! depth in front of the center and receding toward the screen wall; seats
//! are centered on the room's X axis.

use glam::Vec3;

use auditorium_core::{
    geometry::Extent3,
    params::LayoutParameters,
    placement::{RiserSpec, SeatSlot},
};

use super::elevation::RiserElevation;
use crate::config::LayoutConstants;

/// Closed-form placement calculator for one parameter set.
#[derive(Debug, Clone, Copy)]
pub struct PlacementGrid {
    params: LayoutParameters,
    constants: LayoutConstants,
}

impl PlacementGrid {
    /// Creates a grid over `params` using the fixed offsets in `constants`.
    pub fn new(params: &LayoutParameters, constants: &LayoutConstants) -> Self {
        Self {
            params: *params,
            constants: *constants,
        }
    }

    /// Returns true for the last row, which stands on the floor without a riser.
    pub fn is_floor_row(&self, row: usize) -> bool {
        row + 1 == self.params.rows()
    }

    /// X coordinate of seat `index`, symmetric about 0 for any seat count.
    ///
    /// `(index - (seats_per_row - 1) / 2) * seat_spacing`
    pub fn seat_x(&self, index: usize) -> f32 {
        let middle = (self.params.seats_per_row() as f32 - 1.0) / 2.0;
        (index as f32 - middle) * self.params.seat_spacing()
    }

    /// Z coordinate of `row`.
    ///
    /// Row 0 is anchored at `room_depth / 4`; each following row moves one
    /// `row_spacing` toward the screen wall.
    pub fn row_z(&self, row: usize) -> f32 {
        self.params.room_depth() / 4.0 - row as f32 * self.params.row_spacing()
    }

    /// Seat height of a row: on top of its riser, or at the fixed floor height
    /// when the row has no riser.
    pub fn seat_y(&self, elevation: Option<&RiserElevation>) -> f32 {
        match elevation {
            Some(elevation) => elevation.top_height() + self.constants.seat_vertical_offset(),
            None => self.constants.floor_seat_height(),
        }
    }

    /// Builds the transform of seat `index` in `row`.
    ///
    /// `elevation` is the row's riser geometry, `None` for the floor row.
    pub fn seat(&self, row: usize, index: usize, elevation: Option<&RiserElevation>) -> SeatSlot {
        let position = Vec3::new(self.seat_x(index), self.seat_y(elevation), self.row_z(row));
        SeatSlot::new(row, index, position, self.constants.seat_yaw())
    }

    /// Builds the riser under `row`.
    ///
    /// The block is `room_width - riser_margin` wide and exactly one
    /// `row_spacing` deep, so neighbouring risers share a face.
    pub fn riser(&self, row: usize, elevation: &RiserElevation) -> RiserSpec {
        let center = Vec3::new(0.0, elevation.center_y(), self.row_z(row));
        let size = Extent3::new(
            self.params.room_width() - self.constants.riser_margin(),
            elevation.thickness(),
            self.params.row_spacing(),
        );
        RiserSpec::new(row, center, size)
    }
}

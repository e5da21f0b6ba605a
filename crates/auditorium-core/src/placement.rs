//! Placement records produced by the layout generator.
//!
//! These are plain values: a host reads them and instantiates whatever it
//! uses to draw a riser or a seat. Nothing here references renderer state.

use glam::{Quat, Vec3};
use serde::Serialize;

use crate::geometry::{Extent3, PlanBounds};

/// A solid platform block beneath one row of seats.
///
/// `center` is the center of the block and `size` its full extents, so the
/// block spans `center.y ± size.thickness() / 2` vertically. Risers built by
/// the generator have their base on the floor (`y = 0`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiserSpec {
    row: usize,
    center: Vec3,
    size: Extent3,
}

impl RiserSpec {
    pub fn new(row: usize, center: Vec3, size: Extent3) -> Self {
        Self { row, center, size }
    }

    /// Returns the index of the row standing on this riser
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the center of the block in room space
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Returns the full extents of the block
    pub fn size(&self) -> Extent3 {
        self.size
    }

    /// Returns the y-coordinate of the top face
    pub fn top(&self) -> f32 {
        self.center.y + self.size.thickness() / 2.0
    }

    /// Returns the y-coordinate of the bottom face
    pub fn base(&self) -> f32 {
        self.center.y - self.size.thickness() / 2.0
    }

    /// Returns true for a riser with zero or negative thickness (or width).
    ///
    /// Such risers come from a descending `row_elevation`; they are emitted
    /// as computed so callers can decide what to do with them.
    pub fn is_degenerate(&self) -> bool {
        self.size.is_degenerate()
    }

    /// Returns the floor-plane footprint of the block
    pub fn footprint(&self) -> PlanBounds {
        PlanBounds::new_from_center(self.center, self.size.width(), self.size.depth())
    }
}

/// The placement of one seat instance.
///
/// `yaw` is a rotation in radians about the +Y axis. The seat prototype is
/// expected to be authored at the origin in its rest pose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeatSlot {
    row: usize,
    index: usize,
    position: Vec3,
    yaw: f32,
}

impl SeatSlot {
    pub fn new(row: usize, index: usize, position: Vec3, yaw: f32) -> Self {
        Self {
            row,
            index,
            position,
            yaw,
        }
    }

    /// Returns the row this seat belongs to
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the seat's index within its row
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the seat position in room space
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Returns the yaw in radians about +Y
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Returns the yaw as a quaternion, ready for a renderer transform
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }
}

/// One flat placement record, as yielded by the streaming assembler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Placement {
    Riser(RiserSpec),
    Seat(SeatSlot),
}

impl Placement {
    /// Returns the row the record belongs to
    pub fn row(&self) -> usize {
        match self {
            Self::Riser(riser) => riser.row(),
            Self::Seat(seat) => seat.row(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use float_cmp::approx_eq;

    use super::*;

    #[test]
    fn test_riser_faces() {
        let riser = RiserSpec::new(2, Vec3::new(0.0, 0.75, 1.25), Extent3::new(18.0, 1.5, 2.5));
        assert_eq!(riser.row(), 2);
        assert_eq!(riser.top(), 1.5);
        assert_eq!(riser.base(), 0.0);
        assert!(!riser.is_degenerate());
    }

    #[test]
    fn test_riser_degenerate() {
        let riser = RiserSpec::new(3, Vec3::new(0.0, -0.25, 0.0), Extent3::new(18.0, -0.5, 2.5));
        assert!(riser.is_degenerate());
        assert_eq!(riser.base(), 0.0);
    }

    #[test]
    fn test_riser_footprint() {
        let riser = RiserSpec::new(0, Vec3::new(0.0, 0.25, 6.25), Extent3::new(18.0, 0.5, 2.5));
        let footprint = riser.footprint();
        assert_eq!(footprint.min_x(), -9.0);
        assert_eq!(footprint.max_x(), 9.0);
        assert_eq!(footprint.min_z(), 5.0);
        assert_eq!(footprint.max_z(), 7.5);
    }

    #[test]
    fn test_seat_rotation_turns_forward_axis() {
        let seat = SeatSlot::new(0, 0, Vec3::ZERO, FRAC_PI_2);
        let turned = seat.rotation() * Vec3::X;
        assert!(approx_eq!(f32, turned.x, 0.0, epsilon = 1e-6));
        assert!(approx_eq!(f32, turned.z, -1.0, epsilon = 1e-6));
    }

    #[test]
    fn test_placement_row() {
        let seat = Placement::Seat(SeatSlot::new(4, 1, Vec3::ZERO, 0.0));
        assert_eq!(seat.row(), 4);
    }
}

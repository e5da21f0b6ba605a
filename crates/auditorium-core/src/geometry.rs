//! Geometric primitives for auditorium layout.
//!
//! Placement positions are [`glam::Vec3`] values in room space. This module
//! adds the few value types the layout needs on top of that:
//!
//! - [`Extent3`] - Width, thickness and depth of an axis-aligned box
//! - [`PlanBounds`] - A rectangle on the floor plane, used for plan views
//!
//! # Coordinate System
//!
//! Room space is right-handed with Y up, matching common 3D renderers:
//!
//! ```text
//!         +Y
//!          │
//!          │
//!          └──────► +X
//!         ╱
//!        ╱
//!      +Z (towards the viewer)
//! ```
//!
//! - **Origin**: Center of the room floor
//! - **Screen wall**: The `-Z` wall, at `z = -depth / 2`
//! - **Floor**: The `y = 0` plane

use glam::Vec3;
use serde::Serialize;

/// The dimensions of an axis-aligned box.
///
/// `width` runs along X, `thickness` along Y and `depth` along Z. Values are
/// stored as given; a negative thickness is representable so that degenerate
/// risers can be reported instead of silently corrected.
///
/// # Examples
///
/// ```
/// # use auditorium_core::geometry::Extent3;
/// let riser = Extent3::new(18.0, 0.5, 2.5);
/// assert_eq!(riser.width(), 18.0);
/// assert_eq!(riser.volume(), 22.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Extent3 {
    width: f32,
    thickness: f32,
    depth: f32,
}

impl Extent3 {
    pub fn new(width: f32, thickness: f32, depth: f32) -> Self {
        Self {
            width,
            thickness,
            depth,
        }
    }

    /// Returns the extent along X
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the extent along Y
    pub fn thickness(self) -> f32 {
        self.thickness
    }

    /// Returns the extent along Z
    pub fn depth(self) -> f32 {
        self.depth
    }

    /// Returns the extents as a vector, e.g. for a renderer's scale component
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.width, self.thickness, self.depth)
    }

    /// Returns the signed volume of the box
    pub fn volume(self) -> f32 {
        self.width * self.thickness * self.depth
    }

    /// Returns true if any dimension is zero or negative
    pub fn is_degenerate(self) -> bool {
        self.width <= 0.0 || self.thickness <= 0.0 || self.depth <= 0.0
    }
}

/// A rectangle on the floor plane (X/Z), defined by minimum and maximum coordinates.
///
/// Plan views look down the Y axis, so the vertical component of room space
/// is dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlanBounds {
    min_x: f32,
    min_z: f32,
    max_x: f32,
    max_z: f32,
}

impl PlanBounds {
    /// Creates plan bounds centered on `center` (Y is ignored) with the given
    /// width along X and depth along Z.
    ///
    /// Negative extents are normalized so that `min <= max` always holds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use auditorium_core::geometry::PlanBounds;
    /// # use glam::Vec3;
    /// let bounds = PlanBounds::new_from_center(Vec3::new(1.0, 7.0, -2.0), 4.0, 2.0);
    /// assert_eq!(bounds.min_x(), -1.0);
    /// assert_eq!(bounds.max_z(), -1.0);
    /// ```
    pub fn new_from_center(center: Vec3, width: f32, depth: f32) -> Self {
        let half_width = width.abs() / 2.0;
        let half_depth = depth.abs() / 2.0;
        Self {
            min_x: center.x - half_width,
            min_z: center.z - half_depth,
            max_x: center.x + half_width,
            max_z: center.z + half_depth,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum z-coordinate of the bounds
    pub fn min_z(self) -> f32 {
        self.min_z
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum z-coordinate of the bounds
    pub fn max_z(self) -> f32 {
        self.max_z
    }

    /// Returns the extent along X
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the extent along Z
    pub fn depth(self) -> f32 {
        self.max_z - self.min_z
    }

    /// Merges two bounds into the smallest bounds containing both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use auditorium_core::geometry::PlanBounds;
    /// # use glam::Vec3;
    /// let front = PlanBounds::new_from_center(Vec3::new(0.0, 0.0, 5.0), 10.0, 2.0);
    /// let back = PlanBounds::new_from_center(Vec3::new(0.0, 0.0, -5.0), 12.0, 2.0);
    ///
    /// let combined = front.merge(&back);
    /// assert_eq!(combined.width(), 12.0);
    /// assert_eq!(combined.depth(), 12.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_z: self.min_z.min(other.min_z),
            max_x: self.max_x.max(other.max_x),
            max_z: self.max_z.max(other.max_z),
        }
    }

    /// Expands the bounds by `padding` on every side
    pub fn add_padding(&self, padding: f32) -> Self {
        Self {
            min_x: self.min_x - padding,
            min_z: self.min_z - padding,
            max_x: self.max_x + padding,
            max_z: self.max_z + padding,
        }
    }
}

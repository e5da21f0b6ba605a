//! Room envelope surrounding the seating.
//!
//! Describes the flat surfaces of the room as placement data: the floor, the
//! screen wall behind the screen, both side walls, and the screen itself.
//! Surfaces are planes; `width` and `height` are measured in the plane's own
//! axes before `rotation` is applied.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};
use serde::Serialize;

use auditorium_core::params::LayoutParameters;

/// Fraction of the room width covered by the screen.
const SCREEN_WIDTH_RATIO: f32 = 0.8;
/// Fraction of the room height covered by the screen.
const SCREEN_HEIGHT_RATIO: f32 = 0.6;
/// Screen center height as a fraction of the room height.
const SCREEN_ELEVATION_RATIO: f32 = 0.5;
/// Distance between the screen and the wall behind it.
const SCREEN_STANDOFF: f32 = 0.1;

/// Which part of the room a [`Surface`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceKind {
    Floor,
    ScreenWall,
    LeftWall,
    RightWall,
    Screen,
}

/// A rectangular plane placed in room space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Surface {
    kind: SurfaceKind,
    center: Vec3,
    width: f32,
    height: f32,
    rotation: Quat,
}

impl Surface {
    fn new(kind: SurfaceKind, center: Vec3, width: f32, height: f32, rotation: Quat) -> Self {
        Self {
            kind,
            center,
            width,
            height,
            rotation,
        }
    }

    pub fn kind(&self) -> SurfaceKind {
        self.kind
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Rotation taking a plane in the XY plane facing +Z into place
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Returns the direction the visible side of the surface faces
    pub fn normal(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}

/// All surfaces of the room, derived from the room dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomEnvelope {
    floor: Surface,
    screen_wall: Surface,
    left_wall: Surface,
    right_wall: Surface,
    screen: Surface,
}

impl RoomEnvelope {
    pub fn new(params: &LayoutParameters) -> Self {
        let width = params.room_width();
        let depth = params.room_depth();
        let height = params.room_height();

        let floor = Surface::new(
            SurfaceKind::Floor,
            Vec3::ZERO,
            width,
            depth,
            Quat::from_rotation_x(-FRAC_PI_2),
        );
        let screen_wall = Surface::new(
            SurfaceKind::ScreenWall,
            Vec3::new(0.0, height / 2.0, -depth / 2.0),
            width,
            height,
            Quat::IDENTITY,
        );
        let left_wall = Surface::new(
            SurfaceKind::LeftWall,
            Vec3::new(-width / 2.0, height / 2.0, 0.0),
            depth,
            height,
            Quat::from_rotation_y(FRAC_PI_2),
        );
        let right_wall = Surface::new(
            SurfaceKind::RightWall,
            Vec3::new(width / 2.0, height / 2.0, 0.0),
            depth,
            height,
            Quat::from_rotation_y(-FRAC_PI_2),
        );
        let screen = Surface::new(
            SurfaceKind::Screen,
            Vec3::new(
                0.0,
                height * SCREEN_ELEVATION_RATIO,
                -depth / 2.0 + SCREEN_STANDOFF,
            ),
            width * SCREEN_WIDTH_RATIO,
            height * SCREEN_HEIGHT_RATIO,
            Quat::IDENTITY,
        );

        Self {
            floor,
            screen_wall,
            left_wall,
            right_wall,
            screen,
        }
    }

    pub fn floor(&self) -> &Surface {
        &self.floor
    }

    pub fn screen_wall(&self) -> &Surface {
        &self.screen_wall
    }

    pub fn left_wall(&self) -> &Surface {
        &self.left_wall
    }

    pub fn right_wall(&self) -> &Surface {
        &self.right_wall
    }

    pub fn screen(&self) -> &Surface {
        &self.screen
    }

    /// Iterates over every surface, floor first
    pub fn surfaces(&self) -> impl Iterator<Item = &Surface> {
        [
            &self.floor,
            &self.screen_wall,
            &self.left_wall,
            &self.right_wall,
            &self.screen,
        ]
        .into_iter()
    }
}

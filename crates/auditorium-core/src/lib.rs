//! Auditorium Core Types and Definitions
//!
//! This crate provides the value types shared by the auditorium layout
//! generator and its hosts. It includes:
//!
//! - **Parameters**: The layout input and its validation ([`params`] module)
//! - **Placements**: Riser and seat placement records ([`placement`] module)
//! - **Geometry**: Box extents and plan-view bounds ([`geometry`] module)
//! - **Colors**: CSS color handling for plan views ([`color::Color`])

pub mod color;
pub mod geometry;
pub mod params;
pub mod placement;

//! Layout generation for auditorium seating.
//!
//! This module turns [`LayoutParameters`](auditorium_core::params::LayoutParameters)
//! into riser and seat placements. Everything here is a pure function of its
//! inputs; no state survives between calls.
//!
//! # Pipeline
//!
//! ```text
//! LayoutParameters + LayoutConstants
//!     ↓ validate
//! per row:   elevation (risered rows only)
//!     ↓
//! per seat:  grid
//!     ↓
//! Placement stream / Layout
//! ```
//!
//! # Submodules
//!
//! - [`elevation`] - Vertical extent of a row's riser
//! - [`grid`] - Seat and riser transforms
//! - `assembler` - Row-by-seat iteration, re-exported below

mod assembler;
pub mod elevation;
pub mod grid;

pub use assembler::{Layout, Placements, generate_layout};

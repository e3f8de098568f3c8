//! # Greencrate Features
//!
//! Per-point greenness features for colored point clouds.
//!
//! Every function here takes a [`PointBatch`](greencrate_core::PointBatch)
//! whose rows are `[x, y, z, r, g, b, ...]` and returns one value (or one
//! feature row) per point, in the same order. Zero denominators show up as
//! NaN or infinity in the output rather than as errors.

pub mod bytescale;
pub mod color;
pub mod indices;
pub mod lab;

// Re-export commonly used items
pub use bytescale::*;
pub use color::*;
pub use indices::*;
pub use lab::*;

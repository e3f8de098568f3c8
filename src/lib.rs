//! # Greencrate
//!
//! Per-point greenness features for colored point clouds.
//!
//! This is the umbrella crate that re-exports the point batch types from
//! `greencrate-core` and the calculators from `greencrate-features`.
//!
//! ## Features computed
//!
//! - **NGRDVI**: `(g - r) / (g + r)`
//! - **VDVI**: `(2g - r - b) / (2g + r + b)`
//! - **Color features**: CIE-Lab `a` and `b` of the byte-scaled colors, plus NGRDVI
//!
//! ## Quick Start
//!
//! ```rust
//! use greencrate::prelude::*;
//!
//! let batch = PointBatch::from_rows(&[
//!     [0.0, 0.0, 0.0, 60.0, 140.0, 50.0],
//!     [1.0, 0.0, 0.0, 150.0, 120.0, 90.0],
//! ])?;
//!
//! let features = calculate_color_features(&batch)?;
//! assert_eq!(features.dim(), (2, 3));
//! # Ok::<(), greencrate::Error>(())
//! ```
//!
//! Rows whose index denominator is zero produce NaN or infinity in the
//! output. Filter with `f64::is_finite` if downstream code cannot cope.

// Re-export core functionality
pub use greencrate_core::*;

pub use greencrate_features as features;

/// Convenient imports for common use cases
pub mod prelude {
    pub use greencrate_core::*;
    pub use greencrate_features::*;
}

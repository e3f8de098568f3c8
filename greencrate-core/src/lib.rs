//! Core data structures for greencrate
//!
//! This crate provides the point batch type that the feature calculators
//! operate on, together with the shared error type.

pub mod batch;
pub mod error;
pub mod point;

pub use batch::*;
pub use error::*;
pub use point::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::Point3;

/// Per-point scalar output, one value per batch row
pub type FeatureColumn = ndarray::Array1<f64>;

/// Per-point feature matrix, one row per batch row
pub type FeatureMatrix = ndarray::Array2<f64>;

//! Point types and related functionality

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// A point with 8-bit color information
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColoredPoint3f {
    pub position: Point3f,
    pub color: [u8; 3],
}

impl ColoredPoint3f {
    pub fn new(position: Point3f, color: [u8; 3]) -> Self {
        Self { position, color }
    }

    /// Row layout used by [`crate::PointBatch`]: `[x, y, z, r, g, b]`
    pub fn to_row(&self) -> [f64; 6] {
        [
            self.position.x as f64,
            self.position.y as f64,
            self.position.z as f64,
            self.color[0] as f64,
            self.color[1] as f64,
            self.color[2] as f64,
        ]
    }
}

impl Default for ColoredPoint3f {
    fn default() -> Self {
        Self {
            position: Point3f::origin(),
            color: [255, 255, 255],
        }
    }
}

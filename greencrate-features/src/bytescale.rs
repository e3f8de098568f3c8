//! Byte-scaling of color channels
//!
//! The three color channels are rescaled *jointly*: a single affine map is
//! fitted from the global minimum and maximum of the whole r,g,b block and
//! applied to every channel. Rescaling each channel on its own would change
//! the hue of every point.

use greencrate_core::{Error, Result};
use log::{debug, warn};
use ndarray::{Array2, ArrayView2};

/// Lowest value of the default output range
pub const BYTE_LOW: i16 = 0;

/// Highest value of the default output range
pub const BYTE_HIGH: i16 = 255;

/// A fitted affine map from the source value range onto `[low, high]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ByteScale {
    min: f64,
    max: f64,
    low: i16,
    high: i16,
}

impl ByteScale {
    /// Fit onto the default `[0, 255]` range
    pub fn fit(values: ArrayView2<f64>) -> Result<Self> {
        Self::fit_with_range(values, BYTE_LOW, BYTE_HIGH)
    }

    /// Fit onto a custom output range, `0 <= low < high <= 255`
    pub fn fit_with_range(values: ArrayView2<f64>, low: i16, high: i16) -> Result<Self> {
        validate_range(low, high)?;

        if values.is_empty() {
            return Err(Error::EmptyBatch("byte scaling"));
        }

        // NaN anywhere poisons the fit, like an ordinary min/max reduction would
        let (min, max) = values.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(min, max), &v| {
                if v.is_nan() || min.is_nan() {
                    (f64::NAN, f64::NAN)
                } else {
                    (min.min(v), max.max(v))
                }
            },
        );

        let scale = Self { min, max, low, high };
        debug!("Byte scale fitted: [{}, {}] -> [{}, {}]", min, max, low, high);
        Ok(scale)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Output range as `(low, high)`
    pub fn range(&self) -> (i16, i16) {
        (self.low, self.high)
    }

    /// True when the source range is empty or non-finite, so no affine map exists
    pub fn is_degenerate(&self) -> bool {
        !(self.min.is_finite() && self.max.is_finite()) || self.max <= self.min
    }

    /// Rescale a single value, rounding half up after clamping
    ///
    /// Returns `None` when the fit is degenerate.
    pub fn scale(&self, value: f64) -> Option<i16> {
        if self.is_degenerate() || value.is_nan() {
            return None;
        }

        let low = self.low as f64;
        let high = self.high as f64;

        // A span wider than f64::MAX overflows; halving both terms keeps the ratio
        let span = self.max - self.min;
        let ratio = if span.is_finite() {
            (value - self.min) / span
        } else {
            (value / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0)
        };
        let scaled = ratio * (high - low) + low;

        // i16 holds every value of [0, 255] without wrapping
        Some((scaled.clamp(low, high) + 0.5).floor() as i16)
    }

    /// Rescale a whole block, or `None` when the fit is degenerate
    pub fn apply(&self, values: ArrayView2<f64>) -> Option<Array2<i16>> {
        if self.is_degenerate() {
            warn!(
                "Color channels span [{}, {}]; byte scaling is undefined for this batch",
                self.min, self.max
            );
            return None;
        }

        // Not degenerate, so no element is NaN and `scale` always succeeds
        Some(values.mapv(|v| self.scale(v).unwrap_or(self.low)))
    }
}

/// Fit and apply a byte scale over `values` in one step
///
/// # Example
/// ```rust
/// use greencrate_features::bytescale;
/// use ndarray::array;
///
/// let rgb = array![[0.0, 500.0, 1000.0], [250.0, 750.0, 1000.0]];
/// let scaled = bytescale(rgb.view()).unwrap().unwrap();
/// assert_eq!(scaled.row(0).to_vec(), vec![0, 128, 255]);
/// ```
pub fn bytescale(values: ArrayView2<f64>) -> Result<Option<Array2<i16>>> {
    let scale = ByteScale::fit(values)?;
    Ok(scale.apply(values))
}

pub(crate) fn validate_range(low: i16, high: i16) -> Result<()> {
    if low < BYTE_LOW || low >= high {
        return Err(Error::InvalidParameter {
            name: "low",
            value: low.to_string(),
        });
    }
    if high > BYTE_HIGH {
        return Err(Error::InvalidParameter {
            name: "high",
            value: high.to_string(),
        });
    }
    Ok(())
}

//! Vegetation indices computed from the color channels of a point batch
//!
//! Both indices follow plain floating point semantics: a row whose
//! denominator is zero yields NaN (0/0) or an infinity, never an error.
//! Callers that cannot handle non-finite values should filter with
//! [`f64::is_finite`].

use greencrate_core::{FeatureColumn, PointBatch};
use log::debug;
use ndarray::{ArrayView1, Zip};

/// Normalized green-red difference for a single point
#[inline]
pub fn ngrdvi(red: f64, green: f64) -> f64 {
    (green - red) / (green + red)
}

/// Visual difference vegetation index for a single point
#[inline]
pub fn vdvi(red: f64, green: f64, blue: f64) -> f64 {
    (2.0 * green - red - blue) / (2.0 * green + red + blue)
}

/// Calculates the normalized green-red difference index (NGRDVI)
///
/// `(green - red) / (green + red)` for every row, in row order.
///
/// # Example
/// ```rust
/// use greencrate_core::PointBatch;
/// use greencrate_features::calculate_ngrdvi;
///
/// let batch = PointBatch::from_rows(&[[0.0, 0.0, 0.0, 100.0, 200.0, 0.0]]).unwrap();
/// let index = calculate_ngrdvi(&batch);
/// assert!((index[0] - 1.0 / 3.0).abs() < 1e-12);
/// ```
pub fn calculate_ngrdvi(batch: &PointBatch) -> FeatureColumn {
    let values = Zip::from(batch.red())
        .and(batch.green())
        .map_collect(|&red, &green| ngrdvi(red, green));

    log_non_finite("NGRDVI", values.view());
    values
}

/// Calculates the visual difference vegetation index (VDVI)
///
/// `(2 * green - red - blue) / (2 * green + red + blue)` for every row.
pub fn calculate_vdvi(batch: &PointBatch) -> FeatureColumn {
    let values = Zip::from(batch.red())
        .and(batch.green())
        .and(batch.blue())
        .map_collect(|&red, &green, &blue| vdvi(red, green, blue));

    log_non_finite("VDVI", values.view());
    values
}

/// Number of NaN or infinite entries
pub fn count_non_finite(values: ArrayView1<f64>) -> usize {
    values.iter().filter(|v| !v.is_finite()).count()
}

fn log_non_finite(index: &str, values: ArrayView1<f64>) {
    let non_finite = count_non_finite(values);
    if non_finite > 0 {
        debug!(
            "{}: {} of {} points have a zero denominator",
            index,
            non_finite,
            values.len()
        );
    }
}

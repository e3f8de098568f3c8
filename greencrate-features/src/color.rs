//! Greenness color features
//!
//! The default feature set is `[a, b, NGRDVI]`, where `a` and `b` are the
//! green-red and blue-yellow axes of CIE-Lab. Lab is computed from the
//! byte-scaled colors while the indices always use the raw channel values.

use crate::bytescale::{validate_range, ByteScale, BYTE_HIGH, BYTE_LOW};
use crate::indices::{calculate_ngrdvi, calculate_vdvi};
use crate::lab::{rgb_block_to_lab, undefined_lab};
use greencrate_core::{Error, FeatureMatrix, PointBatch, Result};
use log::debug;
use ndarray::{Array2, Axis};
use serde::{Deserialize, Serialize};

/// A single per-point color feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFeature {
    /// Lab lightness
    L,
    /// Lab green-red axis
    A,
    /// Lab blue-yellow axis
    B,
    Ngrdvi,
    Vdvi,
}

impl ColorFeature {
    pub fn name(&self) -> &'static str {
        match self {
            ColorFeature::L => "L",
            ColorFeature::A => "a",
            ColorFeature::B => "b",
            ColorFeature::Ngrdvi => "NGRDVI",
            ColorFeature::Vdvi => "VDVI",
        }
    }

    fn needs_lab(&self) -> bool {
        matches!(self, ColorFeature::L | ColorFeature::A | ColorFeature::B)
    }
}

/// Parameters for [`ColorFeatureCalculator`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorFeatureConfig {
    /// Output columns, in order
    pub features: Vec<ColorFeature>,
    /// Lower end of the byte-scaling range
    pub low: i16,
    /// Upper end of the byte-scaling range
    pub high: i16,
    /// Batches with at least this many rows convert colors in parallel
    pub parallel_threshold: usize,
}

impl Default for ColorFeatureConfig {
    fn default() -> Self {
        Self {
            features: vec![ColorFeature::A, ColorFeature::B, ColorFeature::Ngrdvi],
            low: BYTE_LOW,
            high: BYTE_HIGH,
            parallel_threshold: 10_000,
        }
    }
}

impl ColorFeatureConfig {
    /// `[L, a, b, NGRDVI, VDVI]`
    pub fn full() -> Self {
        Self {
            features: vec![
                ColorFeature::L,
                ColorFeature::A,
                ColorFeature::B,
                ColorFeature::Ngrdvi,
                ColorFeature::Vdvi,
            ],
            ..Self::default()
        }
    }

    pub fn with_features(mut self, features: Vec<ColorFeature>) -> Self {
        self.features = features;
        self
    }

    pub fn with_range(mut self, low: i16, high: i16) -> Self {
        self.low = low;
        self.high = high;
        self
    }

    pub fn with_parallel_threshold(mut self, rows: usize) -> Self {
        self.parallel_threshold = rows;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.features.is_empty() {
            return Err(Error::InvalidParameter {
                name: "features",
                value: "[]".to_string(),
            });
        }
        validate_range(self.low, self.high)
    }
}

/// Computes a configurable set of color features for each point of a batch
#[derive(Debug, Clone, Default)]
pub struct ColorFeatureCalculator {
    config: ColorFeatureConfig,
}

impl ColorFeatureCalculator {
    pub fn new(config: ColorFeatureConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ColorFeatureConfig {
        &self.config
    }

    /// Column names of the matrix returned by [`Self::calculate`]
    pub fn feature_names(&self) -> Vec<&'static str> {
        self.config.features.iter().map(ColorFeature::name).collect()
    }

    /// Compute an n x k matrix, one row per point and one column per configured feature
    pub fn calculate(&self, batch: &PointBatch) -> Result<FeatureMatrix> {
        if batch.is_empty() {
            return Err(Error::EmptyBatch("color features"));
        }

        let rows = batch.len();
        debug!(
            "Computing {:?} for {} points",
            self.feature_names(),
            rows
        );

        let lab = if self.config.features.iter().any(ColorFeature::needs_lab) {
            let scale = ByteScale::fit_with_range(batch.rgb(), self.config.low, self.config.high)?;
            let parallel = rows >= self.config.parallel_threshold;
            Some(match scale.apply(batch.rgb()) {
                Some(scaled) => rgb_block_to_lab(scaled.view(), parallel),
                None => undefined_lab(rows),
            })
        } else {
            None
        };

        let mut ngrdvi = None;
        let mut vdvi = None;
        let mut features = Array2::<f64>::zeros((rows, self.config.features.len()));

        for (feature, mut column) in self
            .config
            .features
            .iter()
            .zip(features.axis_iter_mut(Axis(1)))
        {
            match (feature, lab.as_ref()) {
                (ColorFeature::L, Some(lab)) => column.assign(&lab.column(0)),
                (ColorFeature::A, Some(lab)) => column.assign(&lab.column(1)),
                (ColorFeature::B, Some(lab)) => column.assign(&lab.column(2)),
                (ColorFeature::Ngrdvi, _) => {
                    column.assign(ngrdvi.get_or_insert_with(|| calculate_ngrdvi(batch)))
                }
                (ColorFeature::Vdvi, _) => {
                    column.assign(vdvi.get_or_insert_with(|| calculate_vdvi(batch)))
                }
                (_, None) => {
                    return Err(Error::InvalidData(format!(
                        "Lab values missing for feature {}",
                        feature.name()
                    )))
                }
            }
        }

        Ok(features)
    }
}

/// Calculates `[a, b, NGRDVI]` for each point
///
/// Colors are byte-scaled jointly to `[0, 255]` before the Lab conversion;
/// NGRDVI is computed on the unscaled channels. When every color value in
/// the batch is the same, the `a` and `b` columns are NaN.
///
/// # Example
/// ```rust
/// use greencrate_core::PointBatch;
/// use greencrate_features::calculate_color_features;
///
/// let batch = PointBatch::from_rows(&[
///     [0.0, 0.0, 0.0, 30.0, 180.0, 40.0],
///     [1.0, 0.0, 0.0, 200.0, 90.0, 60.0],
/// ]).unwrap();
/// let features = calculate_color_features(&batch).unwrap();
/// assert_eq!(features.dim(), (2, 3));
/// assert!(features[[0, 0]] < 0.0); // green point, negative a
/// ```
pub fn calculate_color_features(batch: &PointBatch) -> Result<FeatureMatrix> {
    ColorFeatureCalculator::default().calculate(batch)
}

/// Calculates `[L, a, b, NGRDVI, VDVI]` for each point
pub fn calculate_full_color_features(batch: &PointBatch) -> Result<FeatureMatrix> {
    ColorFeatureCalculator::new(ColorFeatureConfig::full())?.calculate(batch)
}

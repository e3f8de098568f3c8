//! CIE-Lab conversion of byte-scaled colors
//!
//! Channels are read as 8-bit sRGB and converted through linear RGB and
//! XYZ to Lab under the D65 white point, using `palette`.

use greencrate_core::FeatureMatrix;
use ndarray::{Array2, ArrayView2};
use palette::{white_point::D65, FromColor, Lab, Srgb};
use rayon::prelude::*;

/// Convert an 8-bit sRGB triple to Lab (D65)
pub fn rgb_to_lab(r: i16, g: i16, b: i16) -> Lab<D65, f64> {
    let srgb = Srgb::new(
        r as f64 / 255.0,
        g as f64 / 255.0,
        b as f64 / 255.0,
    );
    Lab::from_color(srgb)
}

/// Convert an n x 3 block of byte-scaled colors to an n x 3 `[L, a, b]` matrix
///
/// With `parallel` set, rows are converted on the rayon thread pool. The
/// result is the same either way.
pub fn rgb_block_to_lab(block: ArrayView2<i16>, parallel: bool) -> FeatureMatrix {
    let convert = |i: usize| {
        let lab = rgb_to_lab(block[[i, 0]], block[[i, 1]], block[[i, 2]]);
        [lab.l, lab.a, lab.b]
    };

    let rows: Vec<[f64; 3]> = if parallel {
        (0..block.nrows()).into_par_iter().map(convert).collect()
    } else {
        (0..block.nrows()).map(convert).collect()
    };

    let mut lab = Array2::<f64>::zeros((rows.len(), 3));
    for (mut dst, src) in lab.rows_mut().into_iter().zip(rows) {
        dst[0] = src[0];
        dst[1] = src[1];
        dst[2] = src[2];
    }
    lab
}

/// An n x 3 matrix of NaN, used when the colors of a batch cannot be byte-scaled
pub fn undefined_lab(rows: usize) -> FeatureMatrix {
    Array2::from_elem((rows, 3), f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_black_and_white_are_achromatic() {
        let black = rgb_to_lab(0, 0, 0);
        assert_abs_diff_eq!(black.l, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(black.a, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(black.b, 0.0, epsilon = 1e-6);

        let white = rgb_to_lab(255, 255, 255);
        assert_abs_diff_eq!(white.l, 100.0, epsilon = 1e-2);
        assert_abs_diff_eq!(white.a, 0.0, epsilon = 1e-2);
        assert_abs_diff_eq!(white.b, 0.0, epsilon = 1e-2);
    }

    #[test]
    fn test_primary_reference_values() {
        let red = rgb_to_lab(255, 0, 0);
        assert_abs_diff_eq!(red.l, 53.24, epsilon = 0.1);
        assert_abs_diff_eq!(red.a, 80.09, epsilon = 0.1);
        assert_abs_diff_eq!(red.b, 67.20, epsilon = 0.1);

        let green = rgb_to_lab(0, 255, 0);
        assert_abs_diff_eq!(green.l, 87.73, epsilon = 0.1);
        assert_abs_diff_eq!(green.a, -86.18, epsilon = 0.1);
        assert_abs_diff_eq!(green.b, 83.18, epsilon = 0.1);
    }

    #[test]
    fn test_chroma_axes_signs() {
        // Green sits on the negative a axis, blue on the negative b axis
        assert!(rgb_to_lab(40, 200, 40).a < 0.0);
        assert!(rgb_to_lab(200, 40, 40).a > 0.0);
        assert!(rgb_to_lab(40, 40, 200).b < 0.0);
        assert!(rgb_to_lab(200, 200, 40).b > 0.0);
    }

    #[test]
    fn test_block_parallel_matches_sequential() {
        let block = array![[0, 0, 0], [255, 0, 0], [12, 200, 77], [255, 255, 255]];
        let sequential = rgb_block_to_lab(block.view(), false);
        let parallel = rgb_block_to_lab(block.view(), true);
        assert_eq!(sequential.dim(), (4, 3));
        assert_eq!(sequential, parallel);
        assert_abs_diff_eq!(sequential[[1, 1]], 80.09, epsilon = 0.1);
    }

    #[test]
    fn test_undefined_lab() {
        let lab = undefined_lab(2);
        assert_eq!(lab.dim(), (2, 3));
        assert!(lab.iter().all(|v| v.is_nan()));
    }
}

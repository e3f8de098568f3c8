//! Point batch data structure
//!
//! A [`PointBatch`] is an n x d row-major matrix whose rows are
//! `[x, y, z, r, g, b, ...]`. Columns past the blue channel are carried
//! along untouched.

use crate::error::{Error, Result};
use crate::point::ColoredPoint3f;
use ndarray::{s, Array2, ArrayView1, ArrayView2};
use num_traits::AsPrimitive;

/// Column holding the red channel
pub const COLUMN_RED: usize = 3;

/// Column holding the green channel
pub const COLUMN_GREEN: usize = 4;

/// Column holding the blue channel
pub const COLUMN_BLUE: usize = 5;

/// Minimum number of columns a batch must have
pub const MIN_COLUMNS: usize = 6;

/// Check that a raw array has room for position and color columns
pub fn check_shape(data: ArrayView2<f64>) -> Result<()> {
    let (rows, columns) = data.dim();
    if columns < MIN_COLUMNS {
        return Err(Error::Shape {
            rows,
            columns,
            required: MIN_COLUMNS,
        });
    }
    Ok(())
}

/// An immutable batch of colored points
#[derive(Debug, Clone, PartialEq)]
pub struct PointBatch {
    data: Array2<f64>,
}

impl PointBatch {
    /// Wrap an existing array, validating the column count
    pub fn new(data: Array2<f64>) -> Result<Self> {
        check_shape(data.view())?;
        Ok(Self { data })
    }

    /// Build a batch from an array of any primitive numeric element type
    ///
    /// Elements are converted with `as f64` semantics, so 64-bit integers
    /// beyond 2^53 round to the nearest representable value.
    ///
    /// # Example
    /// ```rust
    /// use greencrate_core::PointBatch;
    /// use ndarray::array;
    ///
    /// let raw = array![[0u16, 0, 0, 120, 340, 90]];
    /// let batch = PointBatch::from_array(raw.view()).unwrap();
    /// assert_eq!(batch.green()[0], 340.0);
    /// ```
    pub fn from_array<T>(data: ArrayView2<T>) -> Result<Self>
    where
        T: AsPrimitive<f64>,
    {
        Self::new(data.mapv(|v| v.as_()))
    }

    /// Build a batch from a flat row-major buffer
    pub fn from_slice(rows: usize, columns: usize, values: &[f64]) -> Result<Self> {
        if columns < MIN_COLUMNS {
            return Err(Error::Shape {
                rows,
                columns,
                required: MIN_COLUMNS,
            });
        }
        let data = Array2::from_shape_vec((rows, columns), values.to_vec()).map_err(|e| {
            Error::InvalidData(format!(
                "{} values cannot form a {}x{} batch: {}",
                values.len(),
                rows,
                columns,
                e
            ))
        })?;
        Ok(Self { data })
    }

    /// Build a batch from individual rows; every row must have the same length
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let columns = rows.first().map(|r| r.as_ref().len()).unwrap_or(MIN_COLUMNS);

        let mut values = Vec::with_capacity(rows.len() * columns);
        for (idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(Error::InvalidData(format!(
                    "row {} has {} columns, expected {}",
                    idx,
                    row.len(),
                    columns
                )));
            }
            values.extend_from_slice(row);
        }

        Self::from_slice(rows.len(), columns, &values)
    }

    /// Build a six-column batch from colored points
    pub fn from_colored_points(points: &[ColoredPoint3f]) -> Self {
        let mut data = Array2::<f64>::zeros((points.len(), MIN_COLUMNS));
        for (mut row, point) in data.rows_mut().into_iter().zip(points) {
            for (dst, src) in row.iter_mut().zip(point.to_row()) {
                *dst = src;
            }
        }
        Self { data }
    }

    /// Number of points in the batch
    pub fn len(&self) -> usize {
        self.data.nrows()
    }

    /// Check if the batch has no points
    pub fn is_empty(&self) -> bool {
        self.data.nrows() == 0
    }

    /// Number of columns per row
    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    /// Read-only view of the whole batch
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// `[x, y, z]` columns
    pub fn positions(&self) -> ArrayView2<'_, f64> {
        self.data.slice(s![.., 0..COLUMN_RED])
    }

    /// `[r, g, b]` columns
    pub fn rgb(&self) -> ArrayView2<'_, f64> {
        self.data.slice(s![.., COLUMN_RED..=COLUMN_BLUE])
    }

    pub fn red(&self) -> ArrayView1<'_, f64> {
        self.data.column(COLUMN_RED)
    }

    pub fn green(&self) -> ArrayView1<'_, f64> {
        self.data.column(COLUMN_GREEN)
    }

    pub fn blue(&self) -> ArrayView1<'_, f64> {
        self.data.column(COLUMN_BLUE)
    }

    /// Give back the underlying array
    pub fn into_inner(self) -> Array2<f64> {
        self.data
    }
}

impl TryFrom<Array2<f64>> for PointBatch {
    type Error = Error;

    fn try_from(data: Array2<f64>) -> Result<Self> {
        Self::new(data)
    }
}

impl From<&[ColoredPoint3f]> for PointBatch {
    fn from(points: &[ColoredPoint3f]) -> Self {
        Self::from_colored_points(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point3f;
    use ndarray::array;

    #[test]
    fn test_channel_views() {
        let batch = PointBatch::new(array![
            [0.0, 1.0, 2.0, 10.0, 20.0, 30.0, 99.0],
            [3.0, 4.0, 5.0, 11.0, 21.0, 31.0, 98.0],
        ])
        .unwrap();

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.ncols(), 7);
        assert_eq!(batch.red().to_vec(), vec![10.0, 11.0]);
        assert_eq!(batch.green().to_vec(), vec![20.0, 21.0]);
        assert_eq!(batch.blue().to_vec(), vec![30.0, 31.0]);
        assert_eq!(batch.rgb().dim(), (2, 3));
        assert_eq!(batch.positions().row(1).to_vec(), vec![3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_too_few_columns() {
        let err = PointBatch::new(Array2::zeros((3, 5))).unwrap_err();
        assert_eq!(err, Error::Shape { rows: 3, columns: 5, required: 6 });
    }

    #[test]
    fn test_empty_batch_is_allowed() {
        let batch = PointBatch::new(Array2::zeros((0, 6))).unwrap();
        assert!(batch.is_empty());
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows = vec![vec![0.0; 6], vec![0.0; 7]];
        assert!(matches!(
            PointBatch::from_rows(&rows),
            Err(Error::InvalidData(msg)) if msg.contains("row 1 has 7 columns")
        ));
    }

    #[test]
    fn test_from_rows_rejects_narrow() {
        let rows = vec![[0.0; 4]];
        assert!(matches!(
            PointBatch::from_rows(&rows),
            Err(Error::Shape { columns: 4, .. })
        ));
    }

    #[test]
    fn test_from_slice_length_mismatch() {
        assert!(matches!(
            PointBatch::from_slice(2, 6, &[0.0; 11]),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_from_array_widens_integers() {
        let raw = array![[1u8, 2, 3, 200, 100, 50]];
        let batch = PointBatch::from_array(raw.view()).unwrap();
        assert_eq!(batch.rgb().row(0).to_vec(), vec![200.0, 100.0, 50.0]);
    }

    #[test]
    fn test_from_array_wide_integer_types() {
        let signed = array![[-1i64, 0, 1, 1 << 40, 7, 9]];
        let batch = PointBatch::from_array(signed.view()).unwrap();
        assert_eq!(batch.red()[0], (1u64 << 40) as f64);
        assert_eq!(batch.positions().row(0).to_vec(), vec![-1.0, 0.0, 1.0]);

        let unsigned = array![[0u64, 0, 0, 65535, 0, 12]];
        assert_eq!(PointBatch::from_array(unsigned.view()).unwrap().blue()[0], 12.0);

        let sizes = array![[0usize, 0, 0, 3, 4, 5]];
        assert_eq!(PointBatch::from_array(sizes.view()).unwrap().green()[0], 4.0);

        let single = array![[0.5f32, 0.0, 0.0, 0.25, 0.75, 1.0]];
        assert_eq!(PointBatch::from_array(single.view()).unwrap().green()[0], 0.75);
    }

    #[test]
    fn test_from_colored_points() {
        let points = vec![
            ColoredPoint3f::new(Point3f::new(1.0, 2.0, 3.0), [4, 5, 6]),
            ColoredPoint3f::default(),
        ];
        let batch = PointBatch::from(points.as_slice());
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.view().row(0).to_vec(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(batch.rgb().row(1).to_vec(), vec![255.0, 255.0, 255.0]);
    }
}

use ndarray::{Array2, ArrayView1};

use crate::interpolate::Method;

/// Result of evaluating an interpolation method over a sampling grid.
/// NaN marks samples where the method is undefined.
#[derive(Clone, Debug)]
pub struct InterpolatedField {
    /// Row-major values, shape = (rows, cols) of the sampling grid.
    pub data: Array2<f64>,
    pub method: Method,
}

/// NaN-aware extent of a field's values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataRange {
    pub max: f64,
    pub min: f64,
    pub delta: f64,
}

impl InterpolatedField {
    pub fn new(data: Array2<f64>, method: Method) -> Self {
        Self { data, method }
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// (rows, cols).
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get([row, col]).copied()
    }

    /// Horizontal cross-section (parallel to x) at grid row `row`.
    pub fn row_section(&self, row: usize) -> Option<ArrayView1<'_, f64>> {
        (row < self.rows()).then(|| self.data.row(row))
    }

    /// Vertical cross-section (parallel to y) at grid column `col`.
    pub fn column_section(&self, col: usize) -> Option<ArrayView1<'_, f64>> {
        (col < self.cols()).then(|| self.data.column(col))
    }

    pub fn nan_count(&self) -> usize {
        self.data.iter().filter(|v| v.is_nan()).count()
    }

    /// Max, min and spread of the finite values, or `None` when every
    /// sample is NaN.
    pub fn data_range(&self) -> Option<DataRange> {
        let (min, max) = self
            .data
            .iter()
            .filter(|v| !v.is_nan())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        (min <= max).then_some(DataRange {
            max,
            min,
            delta: max - min,
        })
    }
}

use ndarray::{Array1, Array2};
use tracing::debug;

use crate::points::{Axis, PointSet};

/// Regular sampling locations, stored as a meshgrid pair.
///
/// Both arrays have shape (rows, cols) = (distinct_y * resolution,
/// distinct_x * resolution). `x_grid` is constant down each column,
/// `y_grid` constant along each row.
#[derive(Clone, Debug)]
pub struct SamplingGrid {
    pub x_grid: Array2<f64>,
    pub y_grid: Array2<f64>,
}

impl SamplingGrid {
    /// Build the grid spanning the data extent of `points`.
    pub fn from_points(points: &PointSet, resolution: usize) -> Self {
        let (x_min, x_max) = points.range(Axis::X);
        let (y_min, y_max) = points.range(Axis::Y);

        let cols = points.distinct_count(Axis::X) * resolution;
        let rows = points.distinct_count(Axis::Y) * resolution;

        let xs = linspace(x_min, x_max, cols);
        let ys = linspace(y_min, y_max, rows);
        debug!(rows, cols, resolution, "Sampling grid built");

        let (x_grid, y_grid) = meshgrid(&xs, &ys);
        Self { x_grid, y_grid }
    }

    /// (rows, cols).
    pub fn shape(&self) -> (usize, usize) {
        self.x_grid.dim()
    }

    /// Sample x coordinates, one per column.
    pub fn x_coords(&self) -> Vec<f64> {
        self.x_grid.row(0).to_vec()
    }

    /// Sample y coordinates, one per row.
    pub fn y_coords(&self) -> Vec<f64> {
        self.y_grid.column(0).to_vec()
    }
}

/// `n` evenly spaced values over `[start, stop]`, endpoints included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Array1<f64> {
    match n {
        0 => Array1::zeros(0),
        1 => Array1::from_elem(1, start),
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut out = Array1::from_shape_fn(n, |i| start + step * i as f64);
            // Pin the endpoint so the last sample sits exactly on the data edge.
            out[n - 1] = stop;
            out
        }
    }
}

fn meshgrid(xs: &Array1<f64>, ys: &Array1<f64>) -> (Array2<f64>, Array2<f64>) {
    let shape = (ys.len(), xs.len());
    let x_grid = Array2::from_shape_fn(shape, |(_, c)| xs[c]);
    let y_grid = Array2::from_shape_fn(shape, |(r, _)| ys[r]);
    (x_grid, y_grid)
}

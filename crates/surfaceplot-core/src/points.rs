use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SurfaceError};

/// A single scattered measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Coordinate axis of the input data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

impl FromStr for Axis {
    type Err = SurfaceError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            other => Err(SurfaceError::InvalidAxis(other.to_string())),
        }
    }
}

/// The scattered input data, in file order.
///
/// Never empty: the loader rejects files without data rows.
#[derive(Clone, Debug)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.is_empty() {
            return Err(SurfaceError::EmptyPointSet);
        }
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn coords(&self, axis: Axis) -> Vec<f64> {
        self.points.iter().map(|p| axis_value(p, axis)).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.z).collect()
    }

    /// (min, max) of the data along `axis`.
    pub fn range(&self, axis: Axis) -> (f64, f64) {
        self.points
            .iter()
            .map(|p| axis_value(p, axis))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Number of distinct coordinate values along `axis` (exact equality).
    pub fn distinct_count(&self, axis: Axis) -> usize {
        let mut coords = self.coords(axis);
        coords.sort_by(|a, b| a.total_cmp(b));
        coords.dedup();
        coords.len()
    }
}

fn axis_value(p: &Point, axis: Axis) -> f64 {
    match axis {
        Axis::X => p.x,
        Axis::Y => p.y,
    }
}

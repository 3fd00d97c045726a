pub mod mesh;

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use ndarray::Array2;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::consts::{DEFAULT_RESOLUTION, MAX_RESOLUTION, MIN_RESOLUTION, PARALLEL_SAMPLE_THRESHOLD};
use crate::error::{Result, SurfaceError};
use crate::field::InterpolatedField;
use crate::grid::SamplingGrid;
use crate::io::load_points;
use crate::points::{Axis, PointSet};

use self::mesh::Mesh;

/// Scattered-data interpolation method.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Nearest,
    #[default]
    Linear,
    Cubic,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Linear, Method::Cubic, Method::Nearest];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Linear => "linear",
            Self::Cubic => "cubic",
        }
    }

    /// Whether the method needs a triangulation (and so can fail on
    /// degenerate geometry).
    pub fn is_triangulated(&self) -> bool {
        !matches!(self, Self::Nearest)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = SurfaceError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "nearest" => Ok(Self::Nearest),
            "linear" => Ok(Self::Linear),
            "cubic" => Ok(Self::Cubic),
            other => Err(SurfaceError::InvalidMethod(other.to_string())),
        }
    }
}

/// Interpolate scattered `values` at `points` onto the sample locations
/// given by the meshgrid pair `(x_grid, y_grid)`.
///
/// Linear and cubic return NaN outside the convex hull of `points` and fail
/// with [`SurfaceError::Interpolation`] when the points span no area.
pub fn griddata(
    points: &[[f64; 2]],
    values: &[f64],
    x_grid: &Array2<f64>,
    y_grid: &Array2<f64>,
    method: Method,
) -> Result<Array2<f64>> {
    if points.is_empty() || points.len() != values.len() {
        return Err(SurfaceError::Interpolation(format!(
            "{} points for {} values",
            points.len(),
            values.len()
        )));
    }
    let mesh = Mesh::new(points, values)?;
    evaluate(&mesh, x_grid, y_grid, method)
}

/// Evaluate `method` over a prebuilt mesh at every meshgrid location.
pub fn evaluate(
    mesh: &Mesh,
    x_grid: &Array2<f64>,
    y_grid: &Array2<f64>,
    method: Method,
) -> Result<Array2<f64>> {
    if method.is_triangulated() && !mesh.has_area() {
        return Err(SurfaceError::Interpolation(
            "points are collinear or fewer than 3 are distinct".into(),
        ));
    }

    let (h, w) = x_grid.dim();
    let row = |r: usize| mesh.sample(method, (0..w).map(|c| (x_grid[[r, c]], y_grid[[r, c]])));
    let rows: Vec<Vec<f64>> = if h * w < PARALLEL_SAMPLE_THRESHOLD {
        (0..h).map(row).collect()
    } else {
        (0..h).into_par_iter().map(row).collect()
    };

    Array2::from_shape_vec((h, w), rows.into_iter().flatten().collect())
        .map_err(|e| SurfaceError::Interpolation(e.to_string()))
}

/// Owns the loaded point set and its sampling grid, and evaluates fields
/// over them.
///
/// Grid construction depends on resolution and data extent only, and the
/// mesh on the points only, so a method change reuses both and a resolution
/// change reuses the mesh.
#[derive(Clone, Debug)]
pub struct GridInterpolator {
    points: Option<PointSet>,
    mesh: Option<Arc<Mesh>>,
    grid: Option<SamplingGrid>,
    resolution: usize,
}

impl Default for GridInterpolator {
    fn default() -> Self {
        Self {
            points: None,
            mesh: None,
            grid: None,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl GridInterpolator {
    pub fn new(resolution: usize) -> Result<Self> {
        validate_resolution(resolution)?;
        Ok(Self {
            resolution,
            ..Self::default()
        })
    }

    /// Load a CSV file, replacing the point set and rebuilding the grid.
    /// On failure the current state is left untouched.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let points = load_points(path)?;
        self.set_points(points)
    }

    /// Replace the point set, triangulating it once for all methods.
    pub fn set_points(&mut self, points: PointSet) -> Result<()> {
        let xy: Vec<[f64; 2]> = points.points().iter().map(|p| [p.x, p.y]).collect();
        let mesh = Mesh::new(&xy, &points.values())?;

        self.mesh = Some(Arc::new(mesh));
        self.grid = Some(SamplingGrid::from_points(&points, self.resolution));
        self.points = Some(points);
        Ok(())
    }

    pub fn set_resolution(&mut self, resolution: usize) -> Result<()> {
        validate_resolution(resolution)?;
        self.resolution = resolution;
        if let Some(points) = &self.points {
            self.grid = Some(SamplingGrid::from_points(points, resolution));
        }
        Ok(())
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn points(&self) -> Option<&PointSet> {
        self.points.as_ref()
    }

    pub fn mesh(&self) -> Option<&Mesh> {
        self.mesh.as_deref()
    }

    pub fn grid(&self) -> Option<&SamplingGrid> {
        self.grid.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.points.is_some()
    }

    /// Evaluate `method` over the current grid.
    pub fn interpolate(&self, method: Method) -> Result<InterpolatedField> {
        let (mesh, grid) = match (&self.mesh, &self.grid) {
            (Some(m), Some(g)) => (m, g),
            _ => return Err(SurfaceError::NoData),
        };
        debug!(vertices = mesh.num_vertices(), shape = ?grid.shape(), %method, "Interpolating");

        let data = evaluate(mesh, &grid.x_grid, &grid.y_grid, method)?;
        let field = InterpolatedField::new(data, method);
        info!(
            %method,
            rows = field.rows(),
            cols = field.cols(),
            nan = field.nan_count(),
            "Interpolated field ready"
        );
        Ok(field)
    }

    /// (min, max) of the original data along `axis`.
    pub fn coordinate_range(&self, axis: Axis) -> Result<(f64, f64)> {
        self.points
            .as_ref()
            .map(|p| p.range(axis))
            .ok_or(SurfaceError::NoData)
    }

    /// Sample x coordinates of the current grid, one per column.
    pub fn interpolated_x_coords(&self) -> Vec<f64> {
        self.grid.as_ref().map(|g| g.x_coords()).unwrap_or_default()
    }

    /// Sample y coordinates of the current grid, one per row.
    pub fn interpolated_y_coords(&self) -> Vec<f64> {
        self.grid.as_ref().map(|g| g.y_coords()).unwrap_or_default()
    }

    /// Original sample coordinates along `axis`, in file order.
    pub fn original_coords(&self, axis: Axis) -> Vec<f64> {
        self.points
            .as_ref()
            .map(|p| p.coords(axis))
            .unwrap_or_default()
    }
}

pub fn validate_resolution(resolution: usize) -> Result<()> {
    if (MIN_RESOLUTION..=MAX_RESOLUTION).contains(&resolution) {
        Ok(())
    } else {
        Err(SurfaceError::InvalidResolution {
            value: resolution,
            min: MIN_RESOLUTION,
            max: MAX_RESOLUTION,
        })
    }
}

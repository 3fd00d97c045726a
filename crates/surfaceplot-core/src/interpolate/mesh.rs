//! Delaunay mesh over the scattered sample locations.
//!
//! Triangulation, point location and the barycentric / natural-neighbor
//! evaluation are done by `spade`. The mesh adds per-vertex gradients for
//! the C1 method and the first-occurrence rule for duplicate locations.

use std::collections::HashSet;
use std::fmt;

use spade::handles::VertexHandle;
use spade::{DelaunayTriangulation, FloatTriangulation, HasPosition, Point2, Triangulation};
use tracing::debug;

use super::Method;
use crate::consts::{CUBIC_FLATNESS, GRADIENT_DET_TOLERANCE};
use crate::error::{Result, SurfaceError};

/// Vertex payload: the sample value and its estimated gradient.
#[derive(Clone, Copy, Debug)]
pub struct Sample {
    position: Point2<f64>,
    value: f64,
    gradient: [f64; 2],
}

impl HasPosition for Sample {
    type Scalar = f64;

    fn position(&self) -> Point2<f64> {
        self.position
    }
}

/// Triangulated sample set, built once per point set and shared by every
/// method evaluated over it.
pub struct Mesh {
    triangulation: DelaunayTriangulation<Sample>,
}

impl Mesh {
    /// Triangulate `points` carrying `values`. Exact duplicate locations keep
    /// their first occurrence.
    ///
    /// Collinear input is accepted here (nearest still works on it); see
    /// [`Mesh::has_area`].
    pub fn new(points: &[[f64; 2]], values: &[f64]) -> Result<Self> {
        // `+ 0.0` folds -0.0 into 0.0 so both hash as the same location.
        let mut seen = HashSet::with_capacity(points.len());
        let samples: Vec<Sample> = points
            .iter()
            .zip(values)
            .filter(|(p, _)| seen.insert(((p[0] + 0.0).to_bits(), (p[1] + 0.0).to_bits())))
            .map(|(p, &value)| Sample {
                position: Point2::new(p[0], p[1]),
                value,
                gradient: [0.0; 2],
            })
            .collect();

        let mut triangulation = DelaunayTriangulation::<Sample>::bulk_load(samples)
            .map_err(|e| SurfaceError::Interpolation(format!("cannot triangulate points: {e:?}")))?;

        let gradients: Vec<_> = triangulation
            .vertices()
            .map(|v| (v.fix(), estimate_gradient(v)))
            .collect();
        for (handle, gradient) in gradients {
            triangulation.vertex_data_mut(handle).gradient = gradient;
        }

        debug!(
            vertices = triangulation.num_vertices(),
            triangles = triangulation.num_inner_faces(),
            "Mesh built"
        );
        Ok(Self { triangulation })
    }

    pub fn num_vertices(&self) -> usize {
        self.triangulation.num_vertices()
    }

    /// False when fewer than three distinct points exist or all of them are
    /// collinear: no triangle, so no linear or cubic surface.
    pub fn has_area(&self) -> bool {
        self.triangulation.num_inner_faces() > 0
    }

    /// Evaluate `method` at each location. Linear and cubic give NaN outside
    /// the convex hull.
    pub fn sample<I>(&self, method: Method, locations: I) -> Vec<f64>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let locations = locations.into_iter().map(|(x, y)| Point2::new(x, y));
        match method {
            Method::Nearest => locations
                .map(|p| {
                    self.triangulation
                        .nearest_neighbor(p)
                        .map_or(f64::NAN, |v| v.data().value)
                })
                .collect(),
            Method::Linear => {
                let barycentric = self.triangulation.barycentric();
                locations
                    .map(|p| {
                        barycentric
                            .interpolate(|v| v.data().value, p)
                            .unwrap_or(f64::NAN)
                    })
                    .collect()
            }
            Method::Cubic => {
                let natural = self.triangulation.natural_neighbor();
                locations
                    .map(|p| {
                        natural
                            .interpolate_gradient(
                                |v| v.data().value,
                                |v| v.data().gradient,
                                CUBIC_FLATNESS,
                                p,
                            )
                            .unwrap_or(f64::NAN)
                    })
                    .collect()
            }
        }
    }
}

impl fmt::Debug for Mesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mesh")
            .field("vertices", &self.triangulation.num_vertices())
            .field("triangles", &self.triangulation.num_inner_faces())
            .finish()
    }
}

/// Least-squares plane through a vertex and its Delaunay neighbors, in data
/// units. Exact for linear data whatever the axis scales.
fn estimate_gradient(vertex: VertexHandle<'_, Sample, (), (), ()>) -> [f64; 2] {
    let p = vertex.position();
    let z = vertex.data().value;

    let (mut sxx, mut sxy, mut syy, mut sxz, mut syz) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for edge in vertex.out_edges() {
        let neighbor = edge.to();
        let q = neighbor.position();
        let (dx, dy, dz) = (q.x - p.x, q.y - p.y, neighbor.data().value - z);
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
        sxz += dx * dz;
        syz += dy * dz;
    }

    let det = sxx * syy - sxy * sxy;
    if !(det > GRADIENT_DET_TOLERANCE * sxx * syy) {
        return [0.0; 2];
    }
    [(syy * sxz - sxy * syz) / det, (sxx * syz - sxy * sxz) / det]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane(x: f64, y: f64) -> f64 {
        2.0 * x + 3.0 * y + 1.0
    }

    #[test]
    fn duplicates_keep_first_value() {
        let mesh = Mesh::new(
            &[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [-0.0, 0.0]],
            &[1.0, 2.0, 3.0, 99.0],
        )
        .unwrap();
        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.sample(Method::Nearest, [(0.0, 0.0)]), vec![1.0]);
    }

    #[test]
    fn collinear_has_no_area() {
        let mesh = Mesh::new(&[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]], &[0.0, 1.0, 2.0]).unwrap();
        assert!(!mesh.has_area());
    }

    #[test]
    fn gradients_exact_on_anisotropic_plane() {
        let mut pts = Vec::new();
        let mut vals = Vec::new();
        for j in 0..5 {
            for i in 0..20 {
                let (x, y) = (1000.0 * i as f64 / 19.0, j as f64 / 4.0);
                pts.push([x, y]);
                vals.push(plane(x, y));
            }
        }
        let mesh = Mesh::new(&pts, &vals).unwrap();
        for v in mesh.triangulation.vertices() {
            let [gx, gy] = v.data().gradient;
            assert!((gx - 2.0).abs() < 1e-9, "gx = {gx}");
            assert!((gy - 3.0).abs() < 1e-6, "gy = {gy}");
        }
    }

    #[test]
    fn nan_coordinate_rejected() {
        let err = Mesh::new(&[[0.0, 0.0], [f64::NAN, 1.0], [1.0, 0.0]], &[0.0; 3]).unwrap_err();
        assert!(matches!(err, SurfaceError::Interpolation(_)));
    }
}

#[allow(dead_code)]
mod common;

use approx::assert_relative_eq;
use ndarray::Array2;

use surfaceplot_core::error::SurfaceError;
use surfaceplot_core::interpolate::{griddata, GridInterpolator, Method};
use surfaceplot_core::points::Axis;

fn plane(x: f64, y: f64) -> f64 {
    2.0 * x + 3.0 * y + 1.0
}

fn plane_points() -> (Vec<[f64; 2]>, Vec<f64>) {
    let mut pts = Vec::new();
    let mut vals = Vec::new();
    for j in 0..4 {
        for i in 0..4 {
            let (x, y) = (i as f64, j as f64);
            pts.push([x, y]);
            vals.push(plane(x, y));
        }
    }
    (pts, vals)
}

fn sample_grid(xs: &[f64], ys: &[f64]) -> (Array2<f64>, Array2<f64>) {
    let shape = (ys.len(), xs.len());
    (
        Array2::from_shape_fn(shape, |(_, c)| xs[c]),
        Array2::from_shape_fn(shape, |(r, _)| ys[r]),
    )
}

#[test]
fn test_linear_reproduces_plane() {
    let (pts, vals) = plane_points();
    let (gx, gy) = sample_grid(&[0.0, 0.4, 1.3, 2.9, 3.0], &[0.0, 0.7, 2.2, 3.0]);
    let out = griddata(&pts, &vals, &gx, &gy, Method::Linear).unwrap();

    for ((r, c), v) in out.indexed_iter() {
        assert_relative_eq!(*v, plane(gx[[r, c]], gy[[r, c]]), epsilon = 1e-9);
    }
}

#[test]
fn test_cubic_reproduces_plane() {
    let (pts, vals) = plane_points();
    let (gx, gy) = sample_grid(&[0.1, 0.4, 1.3, 2.9], &[0.2, 0.7, 2.2, 2.95]);
    let out = griddata(&pts, &vals, &gx, &gy, Method::Cubic).unwrap();

    for ((r, c), v) in out.indexed_iter() {
        assert_relative_eq!(*v, plane(gx[[r, c]], gy[[r, c]]), epsilon = 1e-9);
    }
}

#[test]
fn test_cubic_hits_data_points() {
    let pts = vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [0.4, 0.6]];
    let vals = vec![0.0, 3.0, -1.0, 5.0, 2.0];
    let (gx, gy) = sample_grid(&[0.4], &[0.6]);
    let out = griddata(&pts, &vals, &gx, &gy, Method::Cubic).unwrap();
    assert_relative_eq!(out[[0, 0]], 2.0, epsilon = 1e-9);
}

#[test]
fn test_linear_nan_outside_hull() {
    let pts = vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
    let vals = vec![1.0, 2.0, 3.0];
    let (gx, gy) = sample_grid(&[0.25, 1.0], &[0.25, 1.0]);

    for method in [Method::Linear, Method::Cubic] {
        let out = griddata(&pts, &vals, &gx, &gy, method).unwrap();
        assert!(out[[0, 0]].is_finite());
        assert!(out[[1, 1]].is_nan(), "{method} should be NaN outside hull");
    }
}

#[test]
fn test_nearest_never_nan_and_uses_input_values() {
    let pts = vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
    let vals = vec![1.0, 2.0, 3.0];
    let (gx, gy) = sample_grid(&[-2.0, 0.1, 0.9, 5.0], &[-1.0, 0.2, 4.0]);
    let out = griddata(&pts, &vals, &gx, &gy, Method::Nearest).unwrap();

    assert!(out.iter().all(|v| vals.contains(v)));
    assert_eq!(out[[0, 0]], 1.0);
    assert_eq!(out[[2, 0]], 3.0);
}

#[test]
fn test_collinear_points_fail_triangulated_methods_only() {
    let pts = vec![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]];
    let vals = vec![0.0, 1.0, 2.0];
    let (gx, gy) = sample_grid(&[0.0, 1.5, 3.0], &[0.0, 1.5, 3.0]);

    for method in [Method::Linear, Method::Cubic] {
        let err = griddata(&pts, &vals, &gx, &gy, method).unwrap_err();
        assert!(matches!(err, SurfaceError::Interpolation(_)));
    }
    let out = griddata(&pts, &vals, &gx, &gy, Method::Nearest).unwrap();
    assert!(out.iter().all(|v| v.is_finite()));
}

#[test]
fn test_flat_hull_triangle_keeps_edge_samples() {
    // The fifth point sits just above the bottom edge, so the hull triangle
    // below it is nearly flat.
    let pts = vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [0.5, 0.001]];
    let vals: Vec<f64> = pts.iter().map(|p| plane(p[0], p[1])).collect();
    let (gx, gy) = sample_grid(&[0.25, 0.5, 0.75], &[0.0, 0.0004]);

    for method in [Method::Linear, Method::Cubic] {
        let out = griddata(&pts, &vals, &gx, &gy, method).unwrap();
        for ((r, c), v) in out.indexed_iter() {
            assert_relative_eq!(*v, plane(gx[[r, c]], gy[[r, c]]), epsilon = 1e-9);
        }
    }
}

#[test]
fn test_irregular_scatter_has_no_nan_inside_hull() {
    let mut pts = vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
    pts.extend(common::scattered_unit_points(500, 7));
    let vals: Vec<f64> = pts.iter().map(|p| plane(p[0], p[1])).collect();

    // Hull is the unit square; the grid covers it edge to edge.
    let axis: Vec<f64> = (0..200).map(|i| i as f64 / 199.0).collect();
    let (gx, gy) = sample_grid(&axis, &axis);

    for method in [Method::Linear, Method::Cubic] {
        let out = griddata(&pts, &vals, &gx, &gy, method).unwrap();
        assert_eq!(out.iter().filter(|v| v.is_nan()).count(), 0, "{method}");
        for ((r, c), v) in out.indexed_iter() {
            assert_relative_eq!(*v, plane(gx[[r, c]], gy[[r, c]]), epsilon = 1e-8);
        }
    }
}

#[test]
fn test_cubic_reproduces_plane_on_anisotropic_lattice() {
    let mut pts = Vec::new();
    let mut vals = Vec::new();
    for j in 0..5 {
        for i in 0..20 {
            let (x, y) = (1000.0 * i as f64 / 19.0, j as f64 / 4.0);
            pts.push([x, y]);
            vals.push(plane(x, y));
        }
    }
    let xs: Vec<f64> = (0..200).map(|i| 1000.0 * i as f64 / 199.0).collect();
    let ys: Vec<f64> = (0..50).map(|i| i as f64 / 49.0).collect();
    let (gx, gy) = sample_grid(&xs, &ys);
    let out = griddata(&pts, &vals, &gx, &gy, Method::Cubic).unwrap();

    for ((r, c), v) in out.indexed_iter() {
        assert_relative_eq!(*v, plane(gx[[r, c]], gy[[r, c]]), epsilon = 1e-6);
    }
}

#[test]
fn test_large_lattice_interpolates() {
    let n = 150;
    let mut csv = String::from("x,y,z\n");
    for j in 0..n {
        for i in 0..n {
            let (x, y) = (i as f64, j as f64);
            csv.push_str(&format!("{x},{y},{}\n", plane(x, y)));
        }
    }
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_csv(dir.path(), "lattice.csv", &csv);

    let mut interp = GridInterpolator::new(1).unwrap();
    interp.load(&path).unwrap();
    let field = interp.interpolate(Method::Linear).unwrap();
    assert_eq!(field.shape(), (n, n));
    assert_eq!(field.nan_count(), 0);
}

#[test]
fn test_mesh_reused_across_method_and_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_csv(dir.path(), "plane.csv", &common::plane_csv());

    let mut interp = GridInterpolator::new(2).unwrap();
    interp.load(&path).unwrap();
    let before: *const _ = interp.mesh().unwrap();

    interp.interpolate(Method::Cubic).unwrap();
    let mut resized = interp.clone();
    resized.set_resolution(4).unwrap();
    assert!(std::ptr::eq(before, resized.mesh().unwrap()));

    interp.load(&path).unwrap();
    assert!(!std::ptr::eq(before, interp.mesh().unwrap()));
}

#[test]
fn test_large_grid_matches_serial_path() {
    // Above the parallel threshold: rows are evaluated with rayon.
    let (pts, vals) = plane_points();
    let xs: Vec<f64> = (0..200).map(|i| 3.0 * i as f64 / 199.0).collect();
    let ys: Vec<f64> = (0..100).map(|i| 3.0 * i as f64 / 99.0).collect();
    let (gx, gy) = sample_grid(&xs, &ys);
    let out = griddata(&pts, &vals, &gx, &gy, Method::Linear).unwrap();

    assert_eq!(out.dim(), (100, 200));
    assert_relative_eq!(out[[57, 133]], plane(xs[133], ys[57]), epsilon = 1e-9);
}

#[test]
fn test_mismatched_values_rejected() {
    let (gx, gy) = sample_grid(&[0.0], &[0.0]);
    let err = griddata(&[[0.0, 0.0]], &[], &gx, &gy, Method::Nearest).unwrap_err();
    assert!(matches!(err, SurfaceError::Interpolation(_)));
}

#[test]
fn test_method_names_round_trip() {
    for m in Method::ALL {
        assert_eq!(m.as_str().parse::<Method>().unwrap(), m);
    }
    assert_eq!(Method::default(), Method::Linear);
    assert!(matches!(
        "bilinear".parse::<Method>(),
        Err(SurfaceError::InvalidMethod(_))
    ));
}

#[test]
fn test_axis_parse() {
    assert_eq!("x".parse::<Axis>().unwrap(), Axis::X);
    assert!(matches!("z".parse::<Axis>(), Err(SurfaceError::InvalidAxis(_))));
}

#[test]
fn test_interpolator_without_data() {
    let interp = GridInterpolator::default();
    assert!(!interp.is_loaded());
    assert!(matches!(
        interp.interpolate(Method::Linear),
        Err(SurfaceError::NoData)
    ));
    assert!(matches!(
        interp.coordinate_range(Axis::X),
        Err(SurfaceError::NoData)
    ));
    assert!(interp.interpolated_x_coords().is_empty());
}

#[test]
fn test_interpolator_resolution_bounds() {
    assert!(GridInterpolator::new(0).is_err());
    assert!(GridInterpolator::new(101).is_err());

    let mut interp = GridInterpolator::new(100).unwrap();
    assert!(matches!(
        interp.set_resolution(0),
        Err(SurfaceError::InvalidResolution { value: 0, .. })
    ));
    assert_eq!(interp.resolution(), 100);
}

#[test]
fn test_interpolator_field_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_csv(dir.path(), "plane.csv", &common::plane_csv());

    let mut interp = GridInterpolator::new(3).unwrap();
    interp.load(&path).unwrap();
    let field = interp.interpolate(Method::Linear).unwrap();
    assert_eq!(field.shape(), (12, 12));
    assert_eq!(field.nan_count(), 0);

    interp.set_resolution(5).unwrap();
    assert_eq!(interp.interpolate(Method::Nearest).unwrap().shape(), (20, 20));
}

#[test]
fn test_failed_load_keeps_previous_points() {
    let dir = tempfile::tempdir().unwrap();
    let good = common::write_csv(dir.path(), "plane.csv", &common::plane_csv());
    let bad = common::write_csv(dir.path(), "bad.csv", "x,y\n1,2\n");

    let mut interp = GridInterpolator::default();
    interp.load(&good).unwrap();
    assert!(interp.load(&bad).is_err());
    assert_eq!(interp.points().map(|p| p.len()), Some(16));
}

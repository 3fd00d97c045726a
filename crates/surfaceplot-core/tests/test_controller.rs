#[allow(dead_code)]
mod common;

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use approx::assert_relative_eq;

use surfaceplot_core::config::SessionConfig;
use surfaceplot_core::controller::{InteractionController, ViewEvent};
use surfaceplot_core::error::SurfaceError;
use surfaceplot_core::export::ExportSelection;
use surfaceplot_core::interpolate::Method;
use surfaceplot_core::view::{ColorLevels, Orientation};

fn controller(out: &Path) -> InteractionController {
    let config = SessionConfig {
        output_root: out.to_path_buf(),
        ..Default::default()
    };
    InteractionController::new(&config).unwrap()
}

fn recorder(ctl: &mut InteractionController) -> Rc<RefCell<Vec<ViewEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    ctl.subscribe(move |e| sink.borrow_mut().push(e.clone()));
    events
}

fn event_kind(e: &ViewEvent) -> &'static str {
    match e {
        ViewEvent::Loaded { .. } => "loaded",
        ViewEvent::FieldReplaced { .. } => "field",
        ViewEvent::ColorLevels(_) => "levels",
        ViewEvent::CrossSection {
            orientation: Orientation::Horizontal,
            ..
        } => "hcs",
        ViewEvent::CrossSection { .. } => "vcs",
        ViewEvent::Cursor(_) => "cursor",
        ViewEvent::PointsOverlay(_) => "overlay",
        ViewEvent::OverlayCleared => "overlay-cleared",
    }
}

#[test]
fn test_end_to_end_five_points_linear() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let path = common::write_csv(data.path(), "five.csv", common::FIVE_POINTS);

    let mut ctl = controller(out.path());
    ctl.load_file(&path).unwrap();

    let field = ctl.field().unwrap();
    // 3 distinct x and 3 distinct y values at resolution 10.
    assert_eq!(field.shape(), (30, 30));
    assert_eq!(field.method, Method::Linear);
    assert_eq!(field.nan_count(), 0);

    // The samples lie on z = x + y, which linear interpolation reproduces.
    let xs = ctl.interpolator().interpolated_x_coords();
    let ys = ctl.interpolator().interpolated_y_coords();
    assert_relative_eq!(field.data[[17, 4]], xs[4] + ys[17], epsilon = 1e-9);

    let range = ctl.data_range().unwrap();
    assert_relative_eq!(range.min, 0.0, epsilon = 1e-9);
    assert_relative_eq!(range.max, 2.0, epsilon = 1e-9);
    assert_relative_eq!(range.delta, 2.0, epsilon = 1e-9);

    let written = ctl.export(ExportSelection::all()).unwrap();
    assert_eq!(written.len(), 4);

    let files = common::list_files(out.path());
    let suffixes = [
        "_five_image_linear.csv",
        "_five_image_coord_linear.csv",
        "_five_hcs_0.000_linear.csv",
        "_five_vcs_0.000_linear.csv",
    ];
    for suffix in suffixes {
        assert!(
            files.iter().any(|f| f.ends_with(suffix)),
            "missing {suffix} in {files:?}"
        );
    }

    let image = written
        .iter()
        .find(|p| p.to_string_lossy().ends_with("_image_linear.csv"))
        .unwrap();
    let text = std::fs::read_to_string(image).unwrap();
    assert_eq!(text.lines().count(), 30);
    assert!(text.lines().all(|l| l.split(',').count() == 30));
}

#[test]
fn test_load_emits_events_in_order() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let path = common::write_csv(data.path(), "five.csv", common::FIVE_POINTS);

    let mut ctl = controller(out.path());
    let events = recorder(&mut ctl);
    ctl.load_file(&path).unwrap();

    let kinds: Vec<&str> = events.borrow().iter().map(event_kind).collect();
    assert_eq!(
        kinds,
        vec!["loaded", "field", "levels", "hcs", "vcs", "overlay-cleared"]
    );

    match &events.borrow()[0] {
        ViewEvent::Loaded { title, .. } => assert_eq!(title, "five"),
        other => panic!("unexpected event {other:?}"),
    }
    match &events.borrow()[3] {
        ViewEvent::CrossSection {
            index,
            values,
            label,
            ..
        } => {
            assert_eq!(*index, 0);
            assert_eq!(values.len(), 30);
            assert_eq!(label, "0.000");
        }
        other => panic!("unexpected event {other:?}"),
    };
}

#[test]
fn test_failed_load_keeps_current_display() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let good = common::write_csv(data.path(), "five.csv", common::FIVE_POINTS);
    let bad = common::write_csv(data.path(), "bad.csv", "x,y\n1,2\n");

    let mut ctl = controller(out.path());
    ctl.load_file(&good).unwrap();
    let events = recorder(&mut ctl);

    let err = ctl.load_file(&bad).unwrap_err();
    assert!(err.is_input_format());
    assert!(events.borrow().is_empty());
    assert_eq!(ctl.title(), Some("five"));
    assert_eq!(ctl.field().unwrap().shape(), (30, 30));
}

#[test]
fn test_collinear_data_fails_linear_but_not_nearest() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let path = common::write_csv(data.path(), "line.csv", "x,y,z\n0,0,1\n1,1,2\n2,2,3\n");

    let mut ctl = controller(out.path());
    let err = ctl.load_file(&path).unwrap_err();
    assert!(matches!(err, SurfaceError::Interpolation(_)));
    assert!(!ctl.is_loaded());

    ctl.set_method(Method::Nearest).unwrap();
    ctl.load_file(&path).unwrap();
    assert_eq!(ctl.field().unwrap().nan_count(), 0);

    // Switching to a triangulated method fails and leaves nearest in place.
    assert!(ctl.set_method(Method::Cubic).is_err());
    assert_eq!(ctl.method(), Method::Nearest);
    assert_eq!(ctl.field().unwrap().method, Method::Nearest);
}

#[test]
fn test_markers_reset_on_load_and_rescale_on_resolution() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let path = common::write_csv(data.path(), "five.csv", common::FIVE_POINTS);

    let mut ctl = controller(out.path());
    ctl.load_file(&path).unwrap();

    ctl.move_marker(Orientation::Horizontal, 15.7).unwrap();
    ctl.move_marker(Orientation::Vertical, 9.0).unwrap();
    assert_eq!(ctl.section(Orientation::Horizontal).index(), 15);

    ctl.set_resolution(20).unwrap();
    assert_eq!(ctl.field().unwrap().shape(), (60, 60));
    assert_eq!(ctl.section(Orientation::Horizontal).index(), 30);
    assert_eq!(ctl.section(Orientation::Vertical).index(), 18);
    assert_eq!(ctl.section(Orientation::Vertical).samples().len(), 60);

    ctl.load_file(&path).unwrap();
    assert_eq!(ctl.section(Orientation::Horizontal).index(), 0);
    assert_eq!(ctl.section(Orientation::Vertical).index(), 0);
}

#[test]
fn test_marker_outside_field_is_ignored() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let path = common::write_csv(data.path(), "five.csv", common::FIVE_POINTS);

    let mut ctl = controller(out.path());
    assert!(ctl.move_marker(Orientation::Horizontal, 3.0).is_none());

    ctl.load_file(&path).unwrap();
    ctl.move_marker(Orientation::Horizontal, 5.0).unwrap();
    assert!(ctl.move_marker(Orientation::Horizontal, 30.0).is_none());
    assert!(ctl.move_marker(Orientation::Horizontal, -1.0).is_none());
    assert_eq!(ctl.section(Orientation::Horizontal).index(), 5);
}

#[test]
fn test_marker_coordinate_uses_axis_mapping() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let path = common::write_csv(data.path(), "five.csv", common::FIVE_POINTS);

    let mut ctl = controller(out.path());
    ctl.load_file(&path).unwrap();
    let y = ctl.move_marker(Orientation::Horizontal, 15.0).unwrap();
    // y range is [0, 1] over 30 rows.
    assert_relative_eq!(y, 0.5, epsilon = 1e-12);
}

#[test]
fn test_cursor_readout() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let path = common::write_csv(data.path(), "five.csv", common::FIVE_POINTS);

    let mut ctl = controller(out.path());
    assert!(ctl.cursor_moved(1.0, 1.0).is_none());

    ctl.load_file(&path).unwrap();
    let readout = ctl.cursor_moved(29.5, 0.2).unwrap();
    assert_eq!((readout.row, readout.col), (0, 29));
    assert_relative_eq!(readout.value, 1.0, epsilon = 1e-9);
    assert_eq!(
        ctl.section(Orientation::Horizontal).cursor(),
        Some((29.5, readout.value))
    );

    assert!(ctl.cursor_moved(30.0, 0.0).is_none());
    assert!(ctl.cursor_moved(-0.5, 0.0).is_none());
}

#[test]
fn test_overlay_toggle() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let path = common::write_csv(data.path(), "five.csv", common::FIVE_POINTS);

    let mut ctl = controller(out.path());
    ctl.load_file(&path).unwrap();
    let events = recorder(&mut ctl);

    ctl.set_show_points(true);
    match events.borrow().last() {
        Some(ViewEvent::PointsOverlay(pixels)) => {
            assert_eq!(pixels.len(), 5);
            assert_eq!(pixels[0], [0.0, 0.0]);
            assert_eq!(pixels[3], [30.0, 30.0]);
            assert_eq!(pixels[4], [15.0, 15.0]);
        }
        other => panic!("unexpected event {other:?}"),
    }

    ctl.set_show_points(false);
    assert_eq!(events.borrow().last(), Some(&ViewEvent::OverlayCleared));
}

#[test]
fn test_color_levels_and_reset_view() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let path = common::write_csv(data.path(), "five.csv", common::FIVE_POINTS);

    let mut ctl = controller(out.path());
    ctl.load_file(&path).unwrap();

    ctl.set_color_levels(ColorLevels { min: 0.5, max: 1.0 });
    assert_eq!(ctl.color_levels().map(|l| l.min), Some(0.5));
    ctl.reset_color_levels();
    let levels = ctl.color_levels().unwrap();
    assert_relative_eq!(levels.max, 2.0, epsilon = 1e-9);

    let h = ctl.reset_view(Orientation::Horizontal);
    assert_relative_eq!(h.x.0, 0.0);
    assert_relative_eq!(h.x.1, 29.0 / 30.0, epsilon = 1e-12);
    assert_relative_eq!(h.y.1, 2.0, epsilon = 1e-9);

    // Vertical sections plot value on x and coordinate on y.
    let v = ctl.reset_view(Orientation::Vertical);
    assert_relative_eq!(v.x.0, 0.0, epsilon = 1e-9);
    assert_relative_eq!(v.y.1, 29.0 / 30.0, epsilon = 1e-12);
}

#[test]
fn test_export_without_data_fails() {
    let out = tempfile::tempdir().unwrap();
    let ctl = controller(out.path());
    assert!(matches!(
        ctl.export(ExportSelection::all()),
        Err(SurfaceError::NoData)
    ));
}

#[test]
fn test_cross_section_export_contents() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let path = common::write_csv(data.path(), "five.csv", common::FIVE_POINTS);

    let mut ctl = controller(out.path());
    ctl.load_file(&path).unwrap();
    ctl.move_marker(Orientation::Vertical, 29.0).unwrap();

    let written = ctl
        .export(ExportSelection {
            vertical: true,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(written.len(), 1);
    let name = written[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.ends_with("_five_vcs_1.000_linear.csv"), "{name}");

    let text = std::fs::read_to_string(&written[0]).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("y,value"));
    assert_eq!(lines.count(), 30);
}

#[test]
fn test_controller_without_output_leaves_filesystem_alone() {
    let data = tempfile::tempdir().unwrap();
    let parent = tempfile::tempdir().unwrap();
    let out = parent.path().join("export");
    let path = common::write_csv(data.path(), "five.csv", common::FIVE_POINTS);

    let config = SessionConfig {
        output_root: out.clone(),
        ..Default::default()
    };
    let mut ctl = InteractionController::without_output(&config).unwrap();
    ctl.load_file(&path).unwrap();
    assert!(ctl.cross_section_table(Orientation::Horizontal).is_some());
    assert!(ctl.export(ExportSelection::all()).unwrap().is_empty());
    assert!(!out.exists());

    InteractionController::new(&config).unwrap();
    assert!(out.is_dir());
}

#[test]
fn test_resolution_validated_without_data() {
    let out = tempfile::tempdir().unwrap();
    let mut ctl = controller(out.path());
    assert!(ctl.set_resolution(0).is_err());
    ctl.set_resolution(4).unwrap();
    assert_eq!(ctl.resolution(), 4);
}

#[test]
fn test_grid_axis_spans_data_evenly() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let csv = "x,y,z\n0,0,1\n10,0,2\n0,5,3\n10,5,4\n4,2,2.5\n";
    let path = common::write_csv(data.path(), "span.csv", csv);

    let mut ctl = controller(out.path());
    ctl.load_file(&path).unwrap();

    // 3 distinct x values at resolution 10.
    let xs = ctl.interpolator().interpolated_x_coords();
    assert_eq!(xs.len(), 30);
    assert_eq!(xs[0], 0.0);
    assert_eq!(xs[29], 10.0);
    let step = 10.0 / 29.0;
    for w in xs.windows(2) {
        assert_relative_eq!(w[1] - w[0], step, epsilon = 1e-9);
    }
    assert_eq!(ctl.interpolator().interpolated_y_coords().len(), 30);
}

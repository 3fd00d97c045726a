//! Turns user actions into recomputation and view updates.
//!
//! All work happens synchronously inside the calling method. Observers
//! registered with [`InteractionController::subscribe`] receive
//! [`ViewEvent`]s in emission order before that method returns.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::axis::AxisMapping;
use crate::config::SessionConfig;
use crate::error::{Result, SurfaceError};
use crate::export::{ExportSelection, Exporter};
use crate::field::{DataRange, InterpolatedField};
use crate::interpolate::{validate_resolution, GridInterpolator, Method};
use crate::points::Axis;
use crate::table::{format_coord, DataTable};
use crate::view::{project_points, ColorLevels, CrossSectionView, Orientation, ViewBounds};

/// Payloads delivered to observers.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewEvent {
    /// A file was loaded; `title` is its stem.
    Loaded { title: String, path: PathBuf },
    /// The displayed field was replaced.
    FieldReplaced {
        rows: usize,
        cols: usize,
        method: Method,
        data_range: Option<DataRange>,
    },
    /// The heatmap color range changed.
    ColorLevels(ColorLevels),
    /// A cross-section was (re)sampled at marker `index`. `label` is the
    /// marker's real coordinate, formatted.
    CrossSection {
        orientation: Orientation,
        index: usize,
        values: Vec<f64>,
        label: String,
    },
    /// Sample under the cursor.
    Cursor(CursorReadout),
    /// Original sample locations in field pixel space.
    PointsOverlay(Vec<[f64; 2]>),
    OverlayCleared,
}

/// The field sample under the cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorReadout {
    pub row: usize,
    pub col: usize,
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

type Observer = Box<dyn FnMut(&ViewEvent)>;

pub struct InteractionController {
    interpolator: GridInterpolator,
    method: Method,
    field: Option<InterpolatedField>,
    x_axis: AxisMapping,
    y_axis: AxisMapping,
    horizontal: CrossSectionView,
    vertical: CrossSectionView,
    show_points: bool,
    color_levels: Option<ColorLevels>,
    title: Option<String>,
    source: Option<PathBuf>,
    exporter: Exporter,
    observers: Vec<Observer>,
}

impl InteractionController {
    /// Create a controller with no file loaded. The output root is created
    /// immediately.
    pub fn new(config: &SessionConfig) -> Result<Self> {
        let mut controller = Self::without_output(config)?;
        controller.set_output_root(&config.output_root)?;
        Ok(controller)
    }

    /// Create a controller that never touches the filesystem for output:
    /// no output root, so every export is skipped.
    pub fn without_output(config: &SessionConfig) -> Result<Self> {
        let interpolator = GridInterpolator::new(config.resolution)?;
        let exporter = Exporter::new();

        Ok(Self {
            interpolator,
            method: config.method,
            field: None,
            x_axis: AxisMapping::default(),
            y_axis: AxisMapping::default(),
            horizontal: CrossSectionView::new(Orientation::Horizontal),
            vertical: CrossSectionView::new(Orientation::Vertical),
            show_points: config.show_points,
            color_levels: None,
            title: None,
            source: None,
            exporter,
            observers: Vec::new(),
        })
    }

    /// Register an observer. Events are delivered synchronously, in order.
    pub fn subscribe(&mut self, observer: impl FnMut(&ViewEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn emit(&mut self, event: ViewEvent) {
        for observer in &mut self.observers {
            observer(&event);
        }
    }

    // -- accessors ---------------------------------------------------------

    pub fn is_loaded(&self) -> bool {
        self.field.is_some()
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn resolution(&self) -> usize {
        self.interpolator.resolution()
    }

    pub fn field(&self) -> Option<&InterpolatedField> {
        self.field.as_ref()
    }

    pub fn interpolator(&self) -> &GridInterpolator {
        &self.interpolator
    }

    pub fn axis(&self, axis: Axis) -> &AxisMapping {
        match axis {
            Axis::X => &self.x_axis,
            Axis::Y => &self.y_axis,
        }
    }

    pub fn x_axis(&self) -> &AxisMapping {
        &self.x_axis
    }

    pub fn y_axis(&self) -> &AxisMapping {
        &self.y_axis
    }

    pub fn section(&self, orientation: Orientation) -> &CrossSectionView {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    pub fn show_points(&self) -> bool {
        self.show_points
    }

    pub fn color_levels(&self) -> Option<ColorLevels> {
        self.color_levels
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn exporter(&self) -> &Exporter {
        &self.exporter
    }

    pub fn data_range(&self) -> Option<DataRange> {
        self.field.as_ref().and_then(|f| f.data_range())
    }

    // -- state transitions -------------------------------------------------

    /// Load a file and display its field with the current method.
    ///
    /// Load and interpolation run on a copy; on any failure the previous
    /// data and display stay as they were.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let mut next = self.interpolator.clone();
        next.load(path)?;
        let field = next.interpolate(self.method)?;

        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        info!(path = %path.display(), %title, "File loaded");

        self.x_axis.set_range(next.coordinate_range(Axis::X)?);
        self.y_axis.set_range(next.coordinate_range(Axis::Y)?);
        self.interpolator = next;
        self.exporter.set_current_name(&title);
        self.title = Some(title.clone());
        self.source = Some(path.to_path_buf());

        // Markers return to the origin on every load.
        self.horizontal.set_index(0);
        self.vertical.set_index(0);

        self.emit(ViewEvent::Loaded {
            title,
            path: path.to_path_buf(),
        });
        self.install_field(field);
        Ok(())
    }

    /// Change the resolution factor. With data loaded the grid and field are
    /// rebuilt and markers keep their relative position.
    pub fn set_resolution(&mut self, resolution: usize) -> Result<()> {
        validate_resolution(resolution)?;
        if !self.is_loaded() {
            return self.interpolator.set_resolution(resolution);
        }

        let mut next = self.interpolator.clone();
        next.set_resolution(resolution)?;
        let field = next.interpolate(self.method)?;
        self.interpolator = next;

        if let Some(old) = &self.field {
            let (old_rows, old_cols) = old.shape();
            let (rows, cols) = field.shape();
            let h = rescale_index(self.horizontal.index(), old_rows, rows);
            let v = rescale_index(self.vertical.index(), old_cols, cols);
            self.horizontal.set_index(h);
            self.vertical.set_index(v);
        }
        debug!(resolution, "Resolution changed");
        self.install_field(field);
        Ok(())
    }

    /// Change the interpolation method. The grid is reused.
    pub fn set_method(&mut self, method: Method) -> Result<()> {
        if !self.is_loaded() {
            self.method = method;
            return Ok(());
        }
        let field = self.interpolator.interpolate(method)?;
        self.method = method;
        self.install_field(field);
        Ok(())
    }

    fn install_field(&mut self, field: InterpolatedField) {
        let (rows, cols) = field.shape();
        self.x_axis.set_extent(cols);
        self.y_axis.set_extent(rows);

        let data_range = field.data_range();
        let method = field.method;
        self.field = Some(field);
        self.emit(ViewEvent::FieldReplaced {
            rows,
            cols,
            method,
            data_range,
        });

        self.reset_color_levels();

        let h = self.horizontal.index().min(rows.saturating_sub(1));
        let v = self.vertical.index().min(cols.saturating_sub(1));
        self.horizontal.clear();
        self.vertical.clear();
        self.move_marker(Orientation::Horizontal, h as f64);
        self.move_marker(Orientation::Vertical, v as f64);

        self.refresh_overlay();
    }

    /// Look up the sample under the cursor, given in field pixel
    /// coordinates. Returns `None` (and changes nothing) outside the field.
    pub fn cursor_moved(&mut self, col: f64, row: f64) -> Option<CursorReadout> {
        let field = self.field.as_ref()?;
        let (rows, cols) = field.shape();
        if !(col >= 0.0 && col < cols as f64 && row >= 0.0 && row < rows as f64) {
            return None;
        }

        let (r, c) = (row as usize, col as usize);
        let value = field.value(r, c)?;
        let readout = CursorReadout {
            row: r,
            col: c,
            x: self.x_axis.to_real(col),
            y: self.y_axis.to_real(row),
            value,
        };

        self.horizontal.set_cursor(col, value);
        self.vertical.set_cursor(row, value);
        self.emit(ViewEvent::Cursor(readout));
        Some(readout)
    }

    /// Move a cross-section marker to `position` (grid pixels). The section
    /// is resampled and its real coordinate returned; positions outside the
    /// field are ignored.
    pub fn move_marker(&mut self, orientation: Orientation, position: f64) -> Option<f64> {
        let field = self.field.as_ref()?;
        let index = position.trunc();
        let (section, mapping) = match orientation {
            Orientation::Horizontal => (
                (index >= 0.0).then(|| field.row_section(index as usize)).flatten(),
                &self.y_axis,
            ),
            Orientation::Vertical => (
                (index >= 0.0).then(|| field.column_section(index as usize)).flatten(),
                &self.x_axis,
            ),
        };
        let values = section?.to_vec();
        let index = index as usize;
        let coordinate = mapping.to_real(index as f64);
        let label = format_coord(coordinate);

        match orientation {
            Orientation::Horizontal => self.horizontal.set_section(index, values.clone()),
            Orientation::Vertical => self.vertical.set_section(index, values.clone()),
        }
        self.emit(ViewEvent::CrossSection {
            orientation,
            index,
            values,
            label,
        });
        Some(coordinate)
    }

    /// Toggle the original-sample overlay.
    pub fn set_show_points(&mut self, show: bool) {
        self.show_points = show;
        self.refresh_overlay();
    }

    fn refresh_overlay(&mut self) {
        if !self.is_loaded() {
            return;
        }
        match self.overlay_pixels() {
            Some(pixels) if self.show_points => self.emit(ViewEvent::PointsOverlay(pixels)),
            _ => self.emit(ViewEvent::OverlayCleared),
        }
    }

    /// Original sample locations in pixel space of the current field.
    pub fn overlay_pixels(&self) -> Option<Vec<[f64; 2]>> {
        let field = self.field.as_ref()?;
        let xs = self.interpolator.original_coords(Axis::X);
        let ys = self.interpolator.original_coords(Axis::Y);
        Some(project_points(&xs, &ys, field.shape()))
    }

    /// Restore the color range to the field's data range.
    pub fn reset_color_levels(&mut self) {
        let Some(range) = self.data_range() else {
            return;
        };
        self.set_color_levels(range.into());
    }

    pub fn set_color_levels(&mut self, levels: ColorLevels) {
        self.color_levels = Some(levels);
        self.emit(ViewEvent::ColorLevels(levels));
    }

    /// Bounds a cross-section plot returns to on reset.
    pub fn reset_view(&self, orientation: Orientation) -> ViewBounds {
        let view = self.section(orientation);
        view.reset_view(self.axis(orientation.along()), self.data_range())
    }

    // -- export ------------------------------------------------------------

    /// Table for the current cross-section: sampling-grid coordinates along
    /// the section, and values.
    pub fn cross_section_table(&self, orientation: Orientation) -> Option<DataTable> {
        let field = self.field.as_ref()?;
        let index = self.section(orientation).index();
        let (coords, values, label) = match orientation {
            Orientation::Horizontal => (
                self.interpolator.interpolated_x_coords(),
                field.row_section(index)?,
                "x",
            ),
            Orientation::Vertical => (
                self.interpolator.interpolated_y_coords(),
                field.column_section(index)?,
                "y",
            ),
        };
        Some(DataTable::cross_section(label, &coords, values))
    }

    /// Sampling-grid coordinate of a marker.
    pub fn marker_coordinate(&self, orientation: Orientation) -> Option<f64> {
        let index = self.section(orientation).index();
        let coords = match orientation {
            Orientation::Horizontal => self.interpolator.interpolated_y_coords(),
            Orientation::Vertical => self.interpolator.interpolated_x_coords(),
        };
        coords.get(index).copied()
    }

    /// Write the selected artifacts. Returns the files written; skipped
    /// exports (no output root or name) contribute nothing.
    pub fn export(&self, selection: ExportSelection) -> Result<Vec<PathBuf>> {
        let field = self.field.as_ref().ok_or(SurfaceError::NoData)?;
        let method = self.method;
        let mut written = Vec::new();

        if selection.image {
            written.extend(
                self.exporter
                    .export_field(&field.data, &format!("_image_{method}"))?,
            );
        }

        if selection.image_coord {
            let table = DataTable::coordinate_tagged(
                &field.data,
                &self.interpolator.interpolated_x_coords(),
                &self.interpolator.interpolated_y_coords(),
            );
            written.extend(
                self.exporter
                    .export_table(&table, &format!("_image_coord_{method}"))?,
            );
        }

        for (enabled, orientation) in [
            (selection.horizontal, Orientation::Horizontal),
            (selection.vertical, Orientation::Vertical),
        ] {
            if !enabled {
                continue;
            }
            let (Some(table), Some(coord)) = (
                self.cross_section_table(orientation),
                self.marker_coordinate(orientation),
            ) else {
                continue;
            };
            let suffix = format!("_{}_{}_{method}", orientation.tag(), format_coord(coord));
            written.extend(self.exporter.export_table(&table, &suffix)?);
        }

        info!(files = written.len(), "Export finished");
        Ok(written)
    }

    /// Change the export directory for the rest of the session.
    pub fn set_output_root(&mut self, path: &Path) -> Result<()> {
        self.exporter.set_output_root(path)
    }
}

fn rescale_index(index: usize, old_extent: usize, new_extent: usize) -> usize {
    if old_extent == 0 || new_extent == 0 {
        return 0;
    }
    let ratio = new_extent as f64 / old_extent as f64;
    ((ratio * index as f64).floor() as usize).min(new_extent - 1)
}

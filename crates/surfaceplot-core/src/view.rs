use std::fmt;

use crate::axis::AxisMapping;
use crate::field::DataRange;
use crate::points::Axis;

/// Direction of a cross-section through the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Parallel to x: one grid row, positioned by a y marker.
    Horizontal,
    /// Parallel to y: one grid column, positioned by an x marker.
    Vertical,
}

impl Orientation {
    /// Axis the section runs along.
    pub fn along(&self) -> Axis {
        match self {
            Self::Horizontal => Axis::X,
            Self::Vertical => Axis::Y,
        }
    }

    /// Axis the marker position is measured on.
    pub fn across(&self) -> Axis {
        match self {
            Self::Horizontal => Axis::Y,
            Self::Vertical => Axis::X,
        }
    }

    /// Short tag used in export suffixes (`hcs` / `vcs`).
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Horizontal => "hcs",
            Self::Vertical => "vcs",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "Horizontal"),
            Self::Vertical => write!(f, "Vertical"),
        }
    }
}

/// Plot-space bounds of a cross-section view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBounds {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

/// Displayed color range of the heatmap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorLevels {
    pub min: f64,
    pub max: f64,
}

impl From<DataRange> for ColorLevels {
    fn from(range: DataRange) -> Self {
        Self {
            min: range.min,
            max: range.max,
        }
    }
}

impl ColorLevels {
    /// Position of `value` within the levels, clamped to [0, 1]. NaN stays NaN.
    pub fn normalize(&self, value: f64) -> f64 {
        if value.is_nan() {
            return f64::NAN;
        }
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.5;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

/// State of one cross-section plot: marker position, sampled values and
/// the cursor sample.
#[derive(Clone, Debug)]
pub struct CrossSectionView {
    orientation: Orientation,
    index: usize,
    samples: Vec<f64>,
    /// (pixel position along the section, value).
    cursor: Option<(f64, f64)>,
}

impl CrossSectionView {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            index: 0,
            samples: Vec::new(),
            cursor: None,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Marker position in grid pixels.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn cursor(&self) -> Option<(f64, f64)> {
        self.cursor
    }

    pub(crate) fn set_section(&mut self, index: usize, samples: Vec<f64>) {
        self.index = index;
        self.samples = samples;
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub(crate) fn set_cursor(&mut self, position: f64, value: f64) {
        self.cursor = Some((position, value));
    }

    pub(crate) fn clear(&mut self) {
        self.samples.clear();
        self.cursor = None;
    }

    /// Plot-space curve. `along` maps sample indices to real coordinates.
    /// NaN samples are left out.
    pub fn curve(&self, along: &AxisMapping) -> Vec<[f64; 2]> {
        self.samples
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_nan())
            .map(|(i, &v)| self.plot_point(along.to_real(i as f64), v))
            .collect()
    }

    /// Plot-space position of the cursor sample.
    pub fn cursor_point(&self, along: &AxisMapping) -> Option<[f64; 2]> {
        self.cursor
            .map(|(pos, v)| self.plot_point(along.to_real(pos), v))
    }

    /// Bounds to restore when the user resets the view: the coordinate axis
    /// fits the section, the value axis spans the whole image's data range.
    pub fn reset_view(&self, along: &AxisMapping, image_range: Option<DataRange>) -> ViewBounds {
        let last = self.samples.len().saturating_sub(1) as f64;
        let coord = (along.to_real(0.0), along.to_real(last));
        let value = image_range.map(|r| (r.min, r.max)).unwrap_or((0.0, 1.0));
        match self.orientation {
            Orientation::Horizontal => ViewBounds { x: coord, y: value },
            Orientation::Vertical => ViewBounds { x: value, y: coord },
        }
    }

    fn plot_point(&self, coord: f64, value: f64) -> [f64; 2] {
        match self.orientation {
            Orientation::Horizontal => [coord, value],
            Orientation::Vertical => [value, coord],
        }
    }
}

/// Project original sample coordinates into pixel space of a field with
/// shape (rows, cols). A zero-width coordinate range maps to pixel 0.
pub fn project_points(xs: &[f64], ys: &[f64], shape: (usize, usize)) -> Vec<[f64; 2]> {
    let span = |v: &[f64]| {
        v.iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            })
    };
    let (x_min, x_max) = span(xs);
    let (y_min, y_max) = span(ys);
    let scale = |v: f64, lo: f64, hi: f64, extent: usize| {
        if hi > lo {
            (v - lo) / (hi - lo) * extent as f64
        } else {
            0.0
        }
    };

    xs.iter()
        .zip(ys)
        .map(|(&x, &y)| {
            [
                scale(x, x_min, x_max, shape.1),
                scale(y, y_min, y_max, shape.0),
            ]
        })
        .collect()
}

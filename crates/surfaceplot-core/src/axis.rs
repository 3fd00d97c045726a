use crate::table::format_coord;

/// Maps integer pixel positions of a displayed field to real coordinates
/// along one axis.
///
/// `real = range_min + index * (range_max - range_min) / extent`.
/// The extent never drops below 1, so the extent and the range can be
/// updated in either order.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisMapping {
    extent: usize,
    range: (f64, f64),
}

impl Default for AxisMapping {
    fn default() -> Self {
        Self {
            extent: 1,
            range: (0.0, 1.0),
        }
    }
}

impl AxisMapping {
    pub fn new(extent: usize, range: (f64, f64)) -> Self {
        Self {
            extent: extent.max(1),
            range,
        }
    }

    pub fn extent(&self) -> usize {
        self.extent
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Image size changed along this axis. Zero is clamped to 1.
    pub fn set_extent(&mut self, extent: usize) {
        self.extent = extent.max(1);
    }

    /// Data range changed along this axis.
    pub fn set_range(&mut self, range: (f64, f64)) {
        self.range = range;
    }

    /// Real units per pixel.
    pub fn scale(&self) -> f64 {
        (self.range.1 - self.range.0) / self.extent as f64
    }

    pub fn to_real(&self, index: f64) -> f64 {
        self.range.0 + index * self.scale()
    }

    /// Inverse of [`to_real`](Self::to_real). A zero-width range maps
    /// everything to pixel 0.
    pub fn to_index(&self, value: f64) -> f64 {
        let scale = self.scale();
        if scale == 0.0 {
            return 0.0;
        }
        (value - self.range.0) / scale
    }

    /// Tick label for a pixel position.
    pub fn tick_label(&self, index: f64) -> String {
        format_coord(self.to_real(index))
    }
}

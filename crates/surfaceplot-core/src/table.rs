use ndarray::{Array2, ArrayView1};

use crate::consts::COORD_DECIMALS;

/// A labelled 2-D table: an index column followed by value columns.
///
/// Written with a header row: `index_label, columns...`, then one row per
/// index entry.
#[derive(Clone, Debug)]
pub struct DataTable {
    pub index_label: String,
    pub columns: Vec<String>,
    pub index: Vec<f64>,
    /// Shape = (index.len(), columns.len()).
    pub values: Array2<f64>,
}

impl DataTable {
    /// Interpolated field tagged with its real coordinates: x values as
    /// column labels, y values as the index.
    pub fn coordinate_tagged(values: &Array2<f64>, x: &[f64], y: &[f64]) -> Self {
        debug_assert_eq!(values.dim(), (y.len(), x.len()));
        Self {
            index_label: String::new(),
            columns: x.iter().map(|v| v.to_string()).collect(),
            index: y.to_vec(),
            values: values.clone(),
        }
    }

    /// Two-column cross-section table: `<coord_label>,value`.
    pub fn cross_section(coord_label: &str, coords: &[f64], section: ArrayView1<f64>) -> Self {
        let n = coords.len().min(section.len());
        let values = Array2::from_shape_fn((n, 1), |(i, _)| section[i]);
        Self {
            index_label: coord_label.to_string(),
            columns: vec!["value".to_string()],
            index: coords[..n].to_vec(),
            values,
        }
    }

    pub fn nrows(&self) -> usize {
        self.index.len()
    }
}

/// Format a real coordinate for labels and file name suffixes.
pub fn format_coord(value: f64) -> String {
    format!("{value:.prec$}", prec = COORD_DECIMALS)
}

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Not a csv file: {}", .0.display())]
    NotCsv(PathBuf),

    #[error("Expected at least 3 columns (x, y, z), found {found}")]
    TooFewColumns { found: usize },

    #[error("Invalid number {value:?} at row {row}, column {column}")]
    InvalidValue {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("File contains no data rows")]
    EmptyPointSet,

    #[error("Cannot build interpolated image: {0}")]
    Interpolation(String),

    #[error("Unknown axis: {0:?} (expected 'x' or 'y')")]
    InvalidAxis(String),

    #[error("Unknown interpolation method: {0:?} (expected nearest, linear or cubic)")]
    InvalidMethod(String),

    #[error("Resolution {value} out of range ({min}..={max})")]
    InvalidResolution { value: usize, min: usize, max: usize },

    #[error("No data loaded")]
    NoData,
}

impl SurfaceError {
    /// True for failures caused by the contents or name of the input file.
    pub fn is_input_format(&self) -> bool {
        matches!(
            self,
            Self::Csv(_)
                | Self::NotCsv(_)
                | Self::TooFewColumns { .. }
                | Self::InvalidValue { .. }
                | Self::EmptyPointSet
        )
    }
}

pub type Result<T> = std::result::Result<T, SurfaceError>;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use ndarray::Array2;
use tracing::{info, warn};

use crate::consts::{
    EXPORT_EXTENSION, EXPORT_TIMESTAMP_FORMAT, FILENAME_REPLACEMENT, ILLEGAL_FILENAME_CHARS,
};
use crate::error::Result;
use crate::io::{write_grid, write_table};
use crate::table::DataTable;

/// Replace every character that is illegal in file names with `-`.
/// Runs of illegal characters are not collapsed.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if ILLEGAL_FILENAME_CHARS.contains(&c) {
                FILENAME_REPLACEMENT
            } else {
                c
            }
        })
        .collect()
}

/// Which derived artifacts an export request should write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExportSelection {
    /// Raw interpolated grid.
    pub image: bool,
    /// Grid with real x/y coordinates as labels.
    pub image_coord: bool,
    /// Horizontal cross-section at the current marker.
    pub horizontal: bool,
    /// Vertical cross-section at the current marker.
    pub vertical: bool,
}

impl ExportSelection {
    pub fn all() -> Self {
        Self {
            image: true,
            image_coord: true,
            horizontal: true,
            vertical: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.image || self.image_coord || self.horizontal || self.vertical)
    }
}

/// Writes timestamped CSV files under an output root.
///
/// Exports are skipped (not failed) while either the root directory or the
/// current name is unset.
#[derive(Clone, Debug, Default)]
pub struct Exporter {
    root: Option<PathBuf>,
    name: Option<String>,
}

impl Exporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory, creating it when missing.
    pub fn set_output_root(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        std::fs::create_dir_all(&path)?;
        self.root = Some(path);
        Ok(())
    }

    pub fn output_root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Set the file name stem used by subsequent exports, sanitized.
    pub fn set_current_name(&mut self, name: &str) {
        self.name = Some(sanitize_filename(name));
    }

    pub fn current_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// `<yymmddHHMMSS>_<name><suffix>.csv`, or `None` while no name is set.
    pub fn file_name(&self, suffix: &str, now: DateTime<Local>) -> Option<String> {
        let name = self.name.as_ref()?;
        Some(format!(
            "{}_{}{}.{}",
            now.format(EXPORT_TIMESTAMP_FORMAT),
            name,
            suffix,
            EXPORT_EXTENSION
        ))
    }

    /// Write a bare grid. Returns the written path, or `None` when skipped.
    pub fn export_field(&self, field: &Array2<f64>, suffix: &str) -> Result<Option<PathBuf>> {
        let Some(path) = self.target_path(suffix)? else {
            return Ok(None);
        };
        write_grid(&path, field)?;
        info!(path = %path.display(), "Exported grid");
        Ok(Some(path))
    }

    /// Write a labelled table. Returns the written path, or `None` when skipped.
    pub fn export_table(&self, table: &DataTable, suffix: &str) -> Result<Option<PathBuf>> {
        let Some(path) = self.target_path(suffix)? else {
            return Ok(None);
        };
        write_table(&path, table)?;
        info!(path = %path.display(), rows = table.nrows(), "Exported table");
        Ok(Some(path))
    }

    fn target_path(&self, suffix: &str) -> Result<Option<PathBuf>> {
        let (Some(root), Some(file_name)) = (&self.root, self.file_name(suffix, Local::now()))
        else {
            warn!(suffix, "Export skipped: output directory or file name not set");
            return Ok(None);
        };
        // The directory may have been removed since it was configured.
        std::fs::create_dir_all(root)?;
        Ok(Some(root.join(file_name)))
    }
}

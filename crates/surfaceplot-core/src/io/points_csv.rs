use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::consts::INPUT_EXTENSION;
use crate::error::{Result, SurfaceError};
use crate::points::{Point, PointSet};

/// Whether `path` carries the accepted input extension.
pub fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(INPUT_EXTENSION))
}

/// Load a point set from a CSV file with a header row.
///
/// The extension is checked before the file is opened. The last three
/// columns of every record are read as (x, y, z); earlier columns are ignored.
pub fn load_points(path: &Path) -> Result<PointSet> {
    if !has_csv_extension(path) {
        return Err(SurfaceError::NotCsv(path.to_path_buf()));
    }

    let file = std::fs::File::open(path)?;
    let points = read_points(file)?;
    info!(
        path = %path.display(),
        count = points.len(),
        "Point set loaded"
    );
    Ok(points)
}

/// Parse CSV text (header row first) into a point set.
pub fn read_points<R: Read>(reader: R) -> Result<PointSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = rdr.headers()?.len();
    if columns < 3 {
        return Err(SurfaceError::TooFewColumns { found: columns });
    }
    debug!(columns, "CSV header parsed");

    let mut points = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        // Row numbers are 1-based and count the header line.
        let row = i + 2;
        let n = record.len();
        if n < 3 {
            return Err(SurfaceError::TooFewColumns { found: n });
        }

        let field = |column: usize| -> Result<f64> {
            let raw = &record[column];
            raw.parse::<f64>().map_err(|_| SurfaceError::InvalidValue {
                row,
                column: column + 1,
                value: raw.to_string(),
            })
        };

        points.push(Point::new(field(n - 3)?, field(n - 2)?, field(n - 1)?));
    }

    PointSet::new(points)
}

use std::io::Write;
use std::path::Path;

use ndarray::Array2;

use crate::error::Result;
use crate::table::DataTable;

/// Write a bare grid: one CSV row per grid row, no header. NaN is written as `nan`.
pub fn write_grid(path: &Path, grid: &Array2<f64>) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_grid_to(file, grid)
}

pub fn write_grid_to<W: Write>(writer: W, grid: &Array2<f64>) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    for row in grid.rows() {
        wtr.write_record(row.iter().map(|v| grid_cell(*v)))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write a labelled table with a header row. NaN is written as an empty cell.
pub fn write_table(path: &Path, table: &DataTable) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_table_to(file, table)
}

pub fn write_table_to<W: Write>(writer: W, table: &DataTable) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    let header = std::iter::once(table.index_label.clone()).chain(table.columns.iter().cloned());
    wtr.write_record(header)?;

    for (label, row) in table.index.iter().zip(table.values.rows()) {
        let record =
            std::iter::once(label.to_string()).chain(row.iter().map(|v| table_cell(*v)));
        wtr.write_record(record)?;
    }
    wtr.flush()?;
    Ok(())
}

fn grid_cell(v: f64) -> String {
    if v.is_nan() {
        "nan".to_string()
    } else {
        v.to_string()
    }
}

fn table_cell(v: f64) -> String {
    if v.is_nan() {
        String::new()
    } else {
        v.to_string()
    }
}

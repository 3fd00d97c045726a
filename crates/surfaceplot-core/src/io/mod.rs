pub mod points_csv;
pub mod table_csv;

pub use points_csv::{has_csv_extension, load_points, read_points};
pub use table_csv::{write_grid, write_table};

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Args};
use surfaceplot_core::controller::InteractionController;
use surfaceplot_core::io::table_csv::write_table_to;
use surfaceplot_core::view::Orientation;

use super::{apply_overrides, load_session_config, MethodArg};

#[derive(Args)]
#[command(group(ArgGroup::new("position").required(true).args(["row", "col"])))]
pub struct SectionArgs {
    /// Input CSV file
    pub file: PathBuf,

    /// Horizontal cross-section at this grid row
    #[arg(long)]
    pub row: Option<usize>,

    /// Vertical cross-section at this grid column
    #[arg(long)]
    pub col: Option<usize>,

    /// Session config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Grid samples per distinct input coordinate (1-100)
    #[arg(short, long)]
    pub resolution: Option<usize>,

    /// Interpolation method
    #[arg(short, long, value_enum)]
    pub method: Option<MethodArg>,
}

pub fn run(args: &SectionArgs) -> Result<()> {
    let mut config = load_session_config(args.config.as_deref())?;
    apply_overrides(&mut config, args.resolution, args.method, None);

    // Output goes to stdout; the export root is left alone.
    let mut controller = InteractionController::without_output(&config)?;
    controller
        .load_file(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let (orientation, position) = match (args.row, args.col) {
        (Some(row), _) => (Orientation::Horizontal, row),
        (None, Some(col)) => (Orientation::Vertical, col),
        (None, None) => anyhow::bail!("Either --row or --col is required"),
    };

    controller
        .move_marker(orientation, position as f64)
        .with_context(|| format!("{orientation} cross-section position {position} is outside the grid"))?;
    let table = controller
        .cross_section_table(orientation)
        .context("No cross-section available")?;

    let stdout = std::io::stdout();
    write_table_to(stdout.lock(), &table)?;
    Ok(())
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use surfaceplot_core::controller::InteractionController;
use surfaceplot_core::export::ExportSelection;
use surfaceplot_core::view::Orientation;

use super::{apply_overrides, load_session_config, MethodArg};
use crate::summary::{print_export_summary, print_field_summary};

#[derive(Args)]
pub struct ExportArgs {
    /// Input CSV file
    pub file: PathBuf,

    /// Session config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Grid samples per distinct input coordinate (1-100)
    #[arg(short, long)]
    pub resolution: Option<usize>,

    /// Interpolation method
    #[arg(short, long, value_enum)]
    pub method: Option<MethodArg>,

    /// Directory that receives the exported files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Export the raw interpolated grid
    #[arg(long)]
    pub image: bool,

    /// Export the grid labelled with real coordinates
    #[arg(long)]
    pub image_coord: bool,

    /// Export the horizontal cross-section at this grid row
    #[arg(long, value_name = "ROW")]
    pub hcs: Option<usize>,

    /// Export the vertical cross-section at this grid column
    #[arg(long, value_name = "COL")]
    pub vcs: Option<usize>,
}

pub fn run(args: &ExportArgs) -> Result<()> {
    let mut config = load_session_config(args.config.as_deref())?;
    apply_overrides(
        &mut config,
        args.resolution,
        args.method,
        args.output_dir.as_ref(),
    );

    let mut controller = InteractionController::new(&config).with_context(|| {
        format!(
            "Failed to prepare output directory {}",
            config.output_root.display()
        )
    })?;
    controller
        .load_file(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    print_field_summary(&controller);

    let mut selection = ExportSelection {
        image: args.image,
        image_coord: args.image_coord,
        horizontal: args.hcs.is_some(),
        vertical: args.vcs.is_some(),
    };
    if selection.is_empty() {
        selection = ExportSelection::all();
    }

    for (position, orientation) in [
        (args.hcs, Orientation::Horizontal),
        (args.vcs, Orientation::Vertical),
    ] {
        if let Some(position) = position {
            controller
                .move_marker(orientation, position as f64)
                .with_context(|| {
                    format!("{orientation} cross-section position {position} is outside the grid")
                })?;
        }
    }

    let written = controller.export(selection)?;
    print_export_summary(&written);
    Ok(())
}

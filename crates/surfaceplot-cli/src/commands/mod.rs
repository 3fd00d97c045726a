pub mod config;
pub mod export;
pub mod info;
pub mod section;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use surfaceplot_core::config::SessionConfig;
use surfaceplot_core::interpolate::Method;

#[derive(Clone, Copy, ValueEnum)]
pub enum MethodArg {
    Linear,
    Cubic,
    Nearest,
}

impl From<MethodArg> for Method {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Linear => Method::Linear,
            MethodArg::Cubic => Method::Cubic,
            MethodArg::Nearest => Method::Nearest,
        }
    }
}

/// Load a session config from TOML, or the defaults when no file is given.
pub fn load_session_config(path: Option<&Path>) -> Result<SessionConfig> {
    let Some(path) = path else {
        return Ok(SessionConfig::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&contents).context("Invalid session config")
}

/// Apply command-line overrides on top of a loaded config.
pub fn apply_overrides(
    config: &mut SessionConfig,
    resolution: Option<usize>,
    method: Option<MethodArg>,
    output_dir: Option<&PathBuf>,
) {
    if let Some(resolution) = resolution {
        config.resolution = resolution;
    }
    if let Some(method) = method {
        config.method = method.into();
    }
    if let Some(dir) = output_dir {
        config.output_root = dir.clone();
    }
}

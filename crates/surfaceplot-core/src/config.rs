use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_OUTPUT_ROOT, DEFAULT_RESOLUTION};
use crate::interpolate::Method;

/// Startup settings for a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Directory that receives exported files.
    pub output_root: PathBuf,
    /// Grid samples per distinct input coordinate (1..=100).
    pub resolution: usize,
    pub method: Method,
    /// Overlay the original sample locations on the heatmap.
    pub show_points: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            resolution: DEFAULT_RESOLUTION,
            method: Method::default(),
            show_points: false,
        }
    }
}

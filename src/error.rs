use std::path::PathBuf;

use thiserror::Error;

use crate::viewport::Units;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration rejected at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cell size must be positive")]
    ZeroCellSize,
    #[error("{name} must be positive on both axes, got {units}")]
    ZeroUnits { name: &'static str, units: Units },
    #[error("{name} must be even on both axes so the origin falls on a grid line, got {units}")]
    OddUnits { name: &'static str, units: Units },
    #[error("max_units {max} is smaller than base_units {base}")]
    MaxBelowBase { base: Units, max: Units },
    #[error("max_canvas must be positive on both axes, got {width}x{height}")]
    ZeroCanvas { width: u32, height: u32 },
    #[error("failed to read config `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

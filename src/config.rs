//! Grid configuration.
//!
//! Every option has a default, so a config file only needs the keys it wants
//! to change. The whole configuration is validated once at startup; the
//! rasterizer and viewport code assume a valid configuration and never check
//! it again.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::raster::Point;
use crate::viewport::{required_extent, DisplaySize, Units, Viewport};

/// Largest on-screen canvas, in pixels. Bigger grids scroll.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn to_display(self) -> DisplaySize {
        DisplaySize {
            width: f64::from(self.width),
            height: f64::from(self.height),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Pixel size of one grid unit.
    pub cell_size: u32,
    /// Grid size used until a segment needs more room, and the minimum the
    /// grid ever shrinks back to.
    pub base_units: Units,
    /// Hard cap on grid growth.
    pub max_units: Units,
    /// Spare units kept around the largest coordinate.
    pub padding: u32,
    pub max_canvas: CanvasSize,
    /// Coordinates beyond this magnitude need confirmation before drawing.
    pub large_coordinate_threshold: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            cell_size: 22,
            base_units: Units::new(16, 10),
            max_units: Units::new(30, 20),
            padding: 3,
            max_canvas: CanvasSize {
                width: 600,
                height: 400,
            },
            large_coordinate_threshold: 15,
        }
    }
}

impl GridConfig {
    /// Reads a JSON config file and validates it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: GridConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        for &(name, units) in &[("base_units", self.base_units), ("max_units", self.max_units)] {
            if units.x == 0 || units.y == 0 {
                return Err(ConfigError::ZeroUnits { name, units });
            }
            if units.x % 2 != 0 || units.y % 2 != 0 {
                return Err(ConfigError::OddUnits { name, units });
            }
        }

        if self.max_units.x < self.base_units.x || self.max_units.y < self.base_units.y {
            return Err(ConfigError::MaxBelowBase {
                base: self.base_units,
                max: self.max_units,
            });
        }

        if self.max_canvas.width == 0 || self.max_canvas.height == 0 {
            return Err(ConfigError::ZeroCanvas {
                width: self.max_canvas.width,
                height: self.max_canvas.height,
            });
        }

        Ok(())
    }

    pub fn initial_viewport(&self) -> Viewport {
        Viewport::new(self.base_units, self.cell_size)
    }

    pub fn required_extent<I>(&self, points: I) -> Units
    where
        I: IntoIterator<Item = Point>,
    {
        required_extent(points, self.base_units, self.max_units, self.padding)
    }

    /// A fresh viewport large enough for `points`.
    pub fn viewport_for<I>(&self, points: I) -> Viewport
    where
        I: IntoIterator<Item = Point>,
    {
        Viewport::new(self.required_extent(points), self.cell_size)
    }
}

//! Integer line rasterization and the viewport mapping that puts the
//! resulting cells on a bounded display grid.

pub mod config;
pub mod error;
pub mod raster;
pub mod viewport;

pub use config::GridConfig;
pub use error::ConfigError;
pub use raster::{rasterize, Point, Segment};
pub use viewport::{required_extent, Units, Viewport};

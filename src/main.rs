use std::path::PathBuf;

use anyhow::Context;
use druid::{AppLauncher, WindowDesc};
use linegrid::GridConfig;
use log::info;

use crate::state::AppData;

mod actions;
mod grid_image;
mod grid_view;
mod input;
mod state;
mod theme;
mod ui;

/// Reads the config file named by the first argument, if any.
fn load_config() -> anyhow::Result<GridConfig> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => GridConfig::load(&path)
            .with_context(|| format!("could not load config from {}", path.display())),
        None => {
            info!("no config file given, using defaults");
            let config = GridConfig::default();
            config.validate()?;
            Ok(config)
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    info!(
        "cell size {}px, grid {} up to {}, padding {}",
        config.cell_size, config.base_units, config.max_units, config.padding
    );

    let main_window = WindowDesc::new(ui::make_root())
        .title("Bresenham Visualizer")
        .window_size((720.0, 760.0));

    AppLauncher::with_window(main_window)
        .launch(AppData::new(config))
        .map_err(|err| anyhow::anyhow!("launch failed: {:?}", err))
}

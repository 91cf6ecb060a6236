mod border;
mod config;
mod event_loop;
mod food;
mod game;
mod render;
mod snake;
mod utils;

use std::fs::File;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use simplelog::{ColorChoice, CombinedLogger, Config as LogConfig, TermLogger, TerminalMode, WriteLogger};

fn main() -> Result<()> {
    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            LogConfig::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(
            LevelFilter::Info,
            LogConfig::default(),
            File::create("snake.log").context("could not create snake.log")?,
        ),
    ])
    .context("could not initialize logger")?;

    let config = config::Config::load()?;
    info!(
        "starting snake: {}x{} cells, {} px/cell, tick {} ms",
        config.grid_width, config.grid_height, config.cell_size, config.tick_ms
    );

    event_loop::run(config)
}

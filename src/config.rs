use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Optional override file; defaults apply when it does not exist.
pub const CONFIG_PATH: &str = "snake.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Playfield size in cells.
    pub grid_width: u32,
    pub grid_height: u32,
    /// Cell edge in pixels; window size is grid * cell_size.
    pub cell_size: u32,
    /// Fixed delay between simulation steps.
    pub tick_ms: u64,
    /// Trailing segments at index < grace are exempt from self-collision,
    /// so a segment grown this tick never kills the snake immediately.
    pub self_collision_grace: usize,
    /// Background fill, RGB.
    pub background: [u8; 3],
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_width: 25,
            grid_height: 20,
            cell_size: 40,
            tick_ms: 200,
            self_collision_grace: 3,
            background: [110, 110, 5],
        }
    }
}

impl Config {
    pub fn window_width(&self) -> u32 {
        self.grid_width * self.cell_size
    }

    pub fn window_height(&self) -> u32 {
        self.grid_height * self.cell_size
    }

    /// Defaults, overridden by `snake.json` when present. A malformed file is
    /// an error rather than a silent fallback.
    pub fn load() -> Result<Self> {
        if !Path::new(CONFIG_PATH).exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(CONFIG_PATH)
            .with_context(|| format!("could not read {CONFIG_PATH}"))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("could not parse {CONFIG_PATH}"))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_board() {
        let config = Config::default();
        assert_eq!(config.window_width(), 1000);
        assert_eq!(config.window_height(), 800);
        assert_eq!(config.tick_ms, 200);
        assert_eq!(config.self_collision_grace, 3);
    }

    #[test]
    fn partial_json_keeps_defaults_for_missing_fields() {
        let config: Config = serde_json::from_str(r#"{ "tick_ms": 120 }"#).unwrap();
        assert_eq!(config.tick_ms, 120);
        assert_eq!(config.grid_width, 25);
        assert_eq!(config.background, [110, 110, 5]);
    }
}

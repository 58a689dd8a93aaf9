//! Caller-supplied game configuration
//!
//! Defaults reproduce the classic arena. A JSON file can override any
//! field; loading is forgiving and falls back to the defaults with a
//! logged warning on any read or parse failure.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::platform::Color;

/// Arena, layout and entity configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub arena_width: f64,
    pub arena_height: f64,
    /// Thickness of the enclosing walls; also the height of the HUD strip
    pub wall_thickness: f64,

    pub paddle_x: f64,
    pub paddle_y: f64,
    pub paddle_width: f64,
    pub paddle_height: f64,
    /// Horizontal units the paddle moves per held-key tick
    pub paddle_speed: f64,

    pub ball_count: u32,
    pub ball_radius: f64,
    pub ball_spawn_x: f64,
    pub ball_spawn_y: f64,
    pub ball_dx: f64,
    pub ball_dy: f64,

    pub block_width: f64,
    pub block_height: f64,
    /// Rows in the brick field; each row holds one brick fewer than the
    /// row above
    pub block_rows: u32,
    pub blocks_in_first_row: u32,
    pub first_row_y: f64,
    /// Upper-left x of the rightmost brick in every row
    pub first_block_x: f64,

    pub row_colors: Vec<Color>,
    pub ball_color: Color,
    pub wall_color: Color,
    pub paddle_color: Color,
    pub background_color: Color,
    pub hud_color: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: 800.0,
            arena_height: 600.0,
            wall_thickness: 30.0,

            paddle_x: 350.0,
            paddle_y: 560.0,
            paddle_width: 150.0,
            paddle_height: 10.0,
            paddle_speed: 9.0,

            ball_count: 3,
            ball_radius: 5.0,
            ball_spawn_x: 400.0,
            ball_spawn_y: 100.0,
            ball_dx: 6.0,
            ball_dy: 5.0,

            block_width: 50.0,
            block_height: 30.0,
            block_rows: 6,
            blocks_in_first_row: 12,
            first_row_y: 150.0,
            first_block_x: 720.0,

            row_colors: vec![
                Color::new(232, 8, 94),
                Color::new(195, 156, 22),
                Color::new(152, 43, 152),
                Color::new(56, 122, 56),
                Color::new(91, 195, 106),
                Color::new(227, 154, 227),
            ],
            ball_color: Color::new(255, 230, 200),
            wall_color: Color::new(173, 216, 230),
            paddle_color: Color::new(64, 64, 64),
            background_color: Color::new(240, 255, 255),
            hud_color: Color::new(255, 255, 0),
        }
    }
}

impl GameConfig {
    /// Load from a JSON file, falling back to the defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("loaded config from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!("invalid config {}: {err}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("cannot read config {}: {err}; using defaults", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_totals() {
        let config = GameConfig::default();
        // Triangular field: 12 + 11 + ... + 7
        let bricks: u32 = (0..config.block_rows)
            .map(|row| config.blocks_in_first_row - row)
            .sum();
        assert_eq!(bricks, 57);
        assert_eq!(config.row_colors.len() as u32, config.block_rows);
    }

    #[test]
    fn test_partial_json_overrides_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"ball_count": 1, "block_rows": 2}"#).unwrap();
        assert_eq!(config.ball_count, 1);
        assert_eq!(config.block_rows, 2);
        assert_eq!(config.arena_width, 800.0);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = GameConfig::load_or_default(Path::new("/nonexistent/config.json"));
        assert_eq!(config.ball_count, 3);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.row_colors, config.row_colors);
        assert_eq!(back.paddle_speed, config.paddle_speed);
    }
}

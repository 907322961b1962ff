//! Game configuration resource.
//!
//! Settings loaded from an INI file, with safe defaults when the file is
//! missing or malformed. The music flag is the only setting written back at
//! runtime (the Toggle Music menu action persists it).
//!
//! # Configuration File Format
//!
//! ```ini
//! [arena]
//! width = 800
//! height = 600
//!
//! [game]
//! target_fps = 60
//! music = true
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::math::Rect;

const DEFAULT_ARENA_WIDTH: u32 = 800;
const DEFAULT_ARENA_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_MUSIC_ON: bool = true;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Arena dimensions, frame pacing, and the persisted music flag.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Arena width in world units.
    pub arena_width: u32,
    /// Arena height in world units.
    pub arena_height: u32,
    /// Target simulation ticks per second.
    pub target_fps: u32,
    /// Whether music should play; persisted across runs.
    pub music_on: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self {
            arena_width: DEFAULT_ARENA_WIDTH,
            arena_height: DEFAULT_ARENA_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            music_on: DEFAULT_MUSIC_ON,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// The whole playable region; the hero's movement area.
    pub fn arena_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.arena_width as f32, self.arena_height as f32)
    }

    /// Load configuration from the INI file. Missing values retain their
    /// current (default) values.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        if let Some(width) = config.getuint("arena", "width").ok().flatten() {
            self.arena_width = width as u32;
        }
        if let Some(height) = config.getuint("arena", "height").ok().flatten() {
            self.arena_height = height as u32;
        }
        if let Some(fps) = config.getuint("game", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(music) = config.getbool("game", "music").ok().flatten() {
            self.music_on = music;
        }

        info!(
            "Config loaded from {}: arena {}x{}, {} fps, music {}",
            self.config_path.display(),
            self.arena_width,
            self.arena_height,
            self.target_fps,
            self.music_on
        );
        Ok(())
    }

    /// Write the current configuration back to the INI file.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();
        config.set("arena", "width", Some(self.arena_width.to_string()));
        config.set("arena", "height", Some(self.arena_height.to_string()));
        config.set("game", "target_fps", Some(self.target_fps.to_string()));
        config.set("game", "music", Some(self.music_on.to_string()));
        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.arena_width, 800);
        assert_eq!(config.arena_height, 600);
        assert_eq!(config.target_fps, 60);
        assert!(config.music_on);
    }

    #[test]
    fn test_arena_rect() {
        let config = GameConfig::new();
        let rect = config.arena_rect();
        assert_eq!(rect.w, 800.0);
        assert_eq!(rect.h, 600.0);
        assert_eq!((rect.x, rect.y), (0.0, 0.0));
    }

    #[test]
    fn test_load_missing_file_keeps_defaults() {
        let mut config = GameConfig::with_path("/nonexistent/config.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.arena_width, 800);
        assert!(config.music_on);
    }
}

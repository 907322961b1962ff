//! Frame-name catalog resource.
//!
//! Maps an actor kind ("hero", "enemy") to the lists of frame names for each
//! (state, direction) pair, plus the image shown after death. The render sink
//! resolves these names to real textures; the simulation only cycles indices
//! within them. A built-in default catalog covers both actor kinds, and a
//! JSON file with the same shape can replace it.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::path::Path;

use crate::components::actor::{ActorState, Direction};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectionFrames {
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub left: Vec<String>,
    pub right: Vec<String>,
}

impl DirectionFrames {
    pub fn get(&self, direction: Direction) -> &[String] {
        match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }
}

/// Frame lists for one actor kind.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrameSet {
    pub idle: DirectionFrames,
    pub walk: DirectionFrames,
    pub attack: DirectionFrames,
    #[serde(default)]
    pub dead: Option<String>,
}

impl FrameSet {
    pub fn frames(&self, state: ActorState, direction: Direction) -> &[String] {
        match state {
            ActorState::Idle => self.idle.get(direction),
            ActorState::Walk => self.walk.get(direction),
            ActorState::Attack => self.attack.get(direction),
        }
    }
}

#[derive(Debug, Clone, Resource, Deserialize)]
pub struct FrameCatalog {
    pub sets: FxHashMap<String, FrameSet>,
}

impl FrameCatalog {
    /// Frame names for `(key, state, direction)`. Unknown keys yield an empty
    /// slice; callers treat that as a skipped (missing) asset.
    pub fn frames(&self, key: &str, state: ActorState, direction: Direction) -> &[String] {
        self.sets
            .get(key)
            .map(|set| set.frames(state, direction))
            .unwrap_or(&[])
    }

    pub fn dead_image(&self, key: &str) -> Option<&str> {
        self.sets.get(key).and_then(|set| set.dead.as_deref())
    }

    /// Load a catalog from a JSON file. The caller decides the fallback;
    /// `main` logs the error and keeps the default catalog.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let text = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("failed to read frame catalog: {}", e))?;
        serde_json::from_str(&text).map_err(|e| format!("failed to parse frame catalog: {}", e))
    }
}

fn numbered(kind: &str, state: &str, dir: &str, count: usize) -> Vec<String> {
    (1..=count)
        .map(|i| format!("{kind}/{state}/{dir}/{kind}_{state}_{dir}{i}"))
        .collect()
}

fn direction_frames(kind: &str, state: &str, count: usize) -> DirectionFrames {
    DirectionFrames {
        up: numbered(kind, state, "up", count),
        down: numbered(kind, state, "down", count),
        left: numbered(kind, state, "left", count),
        right: numbered(kind, state, "right", count),
    }
}

fn default_set(kind: &str) -> FrameSet {
    FrameSet {
        idle: direction_frames(kind, "idle", 4),
        walk: direction_frames(kind, "walk", 4),
        attack: direction_frames(kind, "attack", 2),
        dead: Some(format!("{kind}/{kind}_dead")),
    }
}

impl Default for FrameCatalog {
    fn default() -> Self {
        let mut sets = FxHashMap::default();
        sets.insert("hero".to_string(), default_set("hero"));
        sets.insert("enemy".to_string(), default_set("enemy"));
        FrameCatalog { sets }
    }
}

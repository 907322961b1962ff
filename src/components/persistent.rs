//! Persistent entity marker.

use bevy_ecs::prelude::Component;

/// Tag for entities that survive session resets (observers, hooks).
///
/// The session reset despawns every entity without this marker before
/// respawning the hero and enemies.
#[derive(Component, Clone, Debug)]
pub struct Persistent;

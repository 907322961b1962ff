//! Enemy behavior component.
//!
//! An enemy is exactly one of: wandering inside its territory, winding up a
//! committed attack, or dead and draining toward removal. The transitions are
//! driven by [`crate::systems::enemy::enemy_update`].

use bevy_ecs::prelude::Component;

use crate::math::Rect;

/// Seconds between committing to an attack and it landing.
pub const ATTACK_DELAY: f32 = 0.5;
/// Distance to the hero at which an enemy commits to attack, world units.
pub const ATTACK_RANGE: f32 = 50.0;
/// Seconds a dead enemy stays in the arena before removal and replacement.
pub const DEATH_DRAIN: f32 = 1.0;
/// Enemy movement speed in units per step.
pub const ENEMY_SPEED: f32 = 1.5;
/// Side length of an enemy territory.
pub const TERRITORY_SIZE: f32 = 100.0;
/// Bounds of the wander-interval redraw, seconds.
pub const WANDER_INTERVAL_MIN: f32 = 1.0;
pub const WANDER_INTERVAL_MAX: f32 = 3.0;

/// Direction an enemy wanders in until the next redraw. `None` stands still.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WanderDirection {
    Up,
    Down,
    Left,
    Right,
    None,
}

impl WanderDirection {
    /// Unit step deltas for this wander direction.
    pub fn deltas(self) -> (i32, i32) {
        match self {
            WanderDirection::Up => (0, -1),
            WanderDirection::Down => (0, 1),
            WanderDirection::Left => (-1, 0),
            WanderDirection::Right => (1, 0),
            WanderDirection::None => (0, 0),
        }
    }

    pub fn from_index(index: usize) -> Self {
        match index % 5 {
            0 => WanderDirection::Left,
            1 => WanderDirection::Right,
            2 => WanderDirection::Up,
            3 => WanderDirection::Down,
            _ => WanderDirection::None,
        }
    }
}

#[derive(Debug, Clone, Component)]
pub struct Enemy {
    /// Region this enemy's wandering is confined to; mirrors the actor's
    /// move area.
    pub territory: Rect,
    pub wander_direction: WanderDirection,
    pub wander_timer: f32,
    /// Seconds until the next direction redraw, drawn from
    /// [`WANDER_INTERVAL_MIN`, `WANDER_INTERVAL_MAX`).
    pub wander_interval: f32,
    pub attacking: bool,
    pub attack_timer: f32,
    pub death_timer: f32,
}

impl Enemy {
    pub fn new(territory: Rect, wander_direction: WanderDirection, wander_interval: f32) -> Self {
        Self {
            territory,
            wander_direction,
            wander_timer: 0.0,
            wander_interval,
            attacking: false,
            attack_timer: 0.0,
            death_timer: 0.0,
        }
    }
}

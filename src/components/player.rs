//! Hero behavior component.

use bevy_ecs::prelude::Component;

use crate::components::actor::{Actor, ActorState, Direction};
use crate::math::{Rect, Vec2};

/// Seconds an attack swing lasts before the hero returns to idle.
pub const ATTACK_DURATION: f32 = 0.6;
/// Extra reach of the attack rectangle in the facing direction, world units.
pub const ATTACK_REACH: f32 = 40.0;
/// Hero movement speed in units per step.
pub const PLAYER_SPEED: f32 = 3.0;
/// Spawn/reset position, top-left corner of the arena.
pub const PLAYER_START: Vec2 = Vec2::new(50.0, 50.0);

#[derive(Debug, Clone, Copy, Default, Component)]
pub struct Player {
    pub attacking: bool,
    pub attack_timer: f32,
}

impl Player {
    /// Start an attack swing. No-op while dead or mid-swing.
    pub fn begin_attack(&mut self, actor: &mut Actor) {
        if !actor.alive || self.attacking {
            return;
        }
        self.attacking = true;
        self.attack_timer = 0.0;
        actor.state = ActorState::Attack;
        actor.frame_index = 0;
        actor.animation_timer = 0.0;
    }

    /// The hero's hit rect grown by [`ATTACK_REACH`] toward the facing
    /// direction. Meaningful while attacking but queryable at any time.
    pub fn attack_rect(&self, actor: &Actor) -> Rect {
        let rect = actor.hit_rect();
        match actor.direction {
            Direction::Up => Rect::new(rect.x, rect.y - ATTACK_REACH, rect.w, rect.h + ATTACK_REACH),
            Direction::Down => Rect::new(rect.x, rect.y, rect.w, rect.h + ATTACK_REACH),
            Direction::Left => Rect::new(rect.x - ATTACK_REACH, rect.y, rect.w + ATTACK_REACH, rect.h),
            Direction::Right => Rect::new(rect.x, rect.y, rect.w + ATTACK_REACH, rect.h),
        }
    }
}

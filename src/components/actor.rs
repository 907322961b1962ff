//! Shared animated-actor capability.
//!
//! Both the hero and the enemies are built from an [`Actor`] component plus a
//! behavior component ([`Player`](crate::components::player::Player) or
//! [`Enemy`](crate::components::enemy::Enemy)). The actor owns direction,
//! animation state, frame bookkeeping, bounded movement, and the hit
//! rectangle; the behavior components decide when to move, attack, and die.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::math::{Rect, Vec2};
use crate::resources::framecatalog::FrameCatalog;

/// Facing direction of an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

/// Animation state of an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActorState {
    #[default]
    Idle,
    Walk,
    Attack,
}

impl ActorState {
    /// Seconds each frame of this state stays on screen.
    pub fn frame_period(self) -> f32 {
        match self {
            ActorState::Idle => 0.40,
            ActorState::Walk => 0.15,
            ActorState::Attack => 0.30,
        }
    }
}

/// Animated entity with a position, facing, and bounded movement.
#[derive(Debug, Clone, Component, Serialize, Deserialize)]
pub struct Actor {
    /// Key into the [`FrameCatalog`] ("hero", "enemy").
    pub catalog_key: String,
    pub pos: Vec2,
    pub direction: Direction,
    pub state: ActorState,
    pub frame_index: usize,
    /// Seconds accumulated since the last frame advance.
    pub animation_timer: f32,
    pub moving: bool,
    pub alive: bool,
    /// Distance covered per unit step, in world units per tick.
    pub speed: f32,
    /// Region the actor's position is confined to.
    pub move_area: Rect,
    /// Fixed sprite dimensions, centered on `pos` for the hit rect.
    pub sprite_size: Vec2,
}

impl Actor {
    pub fn new(catalog_key: impl Into<String>, pos: Vec2, move_area: Rect) -> Self {
        Self {
            catalog_key: catalog_key.into(),
            pos,
            direction: Direction::default(),
            state: ActorState::default(),
            frame_index: 0,
            animation_timer: 0.0,
            moving: false,
            alive: true,
            speed: 2.0,
            move_area,
            sprite_size: Vec2::new(32.0, 32.0),
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Advance the animation clock and cycle the frame when the per-state
    /// period elapses. Dead actors never animate.
    pub fn advance_animation(&mut self, dt: f32, catalog: &FrameCatalog) {
        if !self.alive {
            return;
        }
        self.animation_timer += dt;
        let period = self.state.frame_period();
        if self.animation_timer >= period {
            self.animation_timer = 0.0;
            let frames = catalog.frames(&self.catalog_key, self.state, self.direction);
            if !frames.is_empty() {
                self.frame_index = (self.frame_index + 1) % frames.len();
            }
        }
    }

    /// Move one step of `(dx, dy) * speed`, clamped per axis to `move_area`.
    ///
    /// Each axis is accepted independently, so an actor pressed against a
    /// boundary can still slide along it. No-op while dead or attacking.
    pub fn step(&mut self, dx: i32, dy: i32) {
        if !self.alive || self.state == ActorState::Attack {
            return;
        }
        let new_x = self.pos.x + dx as f32 * self.speed;
        let new_y = self.pos.y + dy as f32 * self.speed;
        if new_x >= self.move_area.left() && new_x <= self.move_area.right() {
            self.pos.x = new_x;
        }
        if new_y >= self.move_area.top() && new_y <= self.move_area.bottom() {
            self.pos.y = new_y;
        }

        self.moving = dx != 0 || dy != 0;
        if self.moving {
            self.state = ActorState::Walk;
            // Horizontal movement dominates; ties favor vertical.
            if dx.abs() > dy.abs() {
                self.direction = if dx < 0 {
                    Direction::Left
                } else {
                    Direction::Right
                };
            } else {
                self.direction = if dy < 0 {
                    Direction::Up
                } else {
                    Direction::Down
                };
            }
        } else if self.state != ActorState::Attack {
            self.state = ActorState::Idle;
            self.frame_index = 0;
        }
    }

    /// Kill the actor. Idempotent; a dead actor keeps its final state,
    /// direction, and frame forever.
    pub fn die(&mut self) {
        if !self.alive {
            return;
        }
        self.alive = false;
        self.moving = false;
    }

    /// Axis-aligned bounding rectangle, sprite-sized and centered on `pos`.
    pub fn hit_rect(&self) -> Rect {
        Rect::new(
            self.pos.x - self.sprite_size.x * 0.5,
            self.pos.y - self.sprite_size.y * 0.5,
            self.sprite_size.x,
            self.sprite_size.y,
        )
    }

    /// Name of the frame currently displayed.
    ///
    /// Dead actors resolve to the catalog's dead image, falling back to the
    /// first idle frame of the current facing when none is defined.
    pub fn current_image<'a>(&self, catalog: &'a FrameCatalog) -> Option<&'a str> {
        if !self.alive {
            if let Some(dead) = catalog.dead_image(&self.catalog_key) {
                return Some(dead);
            }
            return catalog
                .frames(&self.catalog_key, ActorState::Idle, self.direction)
                .first()
                .map(String::as_str);
        }
        catalog
            .frames(&self.catalog_key, self.state, self.direction)
            .get(self.frame_index)
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena_actor() -> Actor {
        Actor::new("hero", Vec2::new(100.0, 100.0), Rect::new(0.0, 0.0, 800.0, 600.0))
    }

    #[test]
    fn test_frame_index_stays_in_bounds() {
        let catalog = FrameCatalog::default();
        let mut actor = arena_actor();
        actor.state = ActorState::Walk;
        for _ in 0..100 {
            actor.advance_animation(0.15, &catalog);
            let count = catalog
                .frames(&actor.catalog_key, actor.state, actor.direction)
                .len();
            assert!(actor.frame_index < count);
        }
    }

    #[test]
    fn test_animation_timer_resets_on_frame_advance() {
        let catalog = FrameCatalog::default();
        let mut actor = arena_actor();
        actor.state = ActorState::Walk;
        actor.advance_animation(0.10, &catalog);
        assert_eq!(actor.frame_index, 0);
        actor.advance_animation(0.10, &catalog);
        assert_eq!(actor.frame_index, 1);
        assert_eq!(actor.animation_timer, 0.0);
    }

    #[test]
    fn test_step_clamps_each_axis_independently() {
        let mut actor = Actor::new("hero", Vec2::new(0.0, 100.0), Rect::new(0.0, 0.0, 800.0, 600.0));
        actor.speed = 3.0;
        // x would leave the region, y stays inside: slide along the edge.
        actor.step(-1, 1);
        assert_eq!(actor.pos.x, 0.0);
        assert_eq!(actor.pos.y, 103.0);
    }

    #[test]
    fn test_step_never_leaves_move_area() {
        let mut actor = Actor::new(
            "enemy",
            Vec2::new(250.0, 250.0),
            Rect::new(200.0, 200.0, 100.0, 100.0),
        );
        actor.speed = 7.0;
        for (dx, dy) in [(-1, 0), (-1, -1), (0, -1), (1, 1), (1, 0), (0, 1)] {
            for _ in 0..50 {
                actor.step(dx, dy);
                assert!(actor.pos.x >= 200.0 && actor.pos.x <= 300.0);
                assert!(actor.pos.y >= 200.0 && actor.pos.y <= 300.0);
            }
        }
    }

    #[test]
    fn test_direction_horizontal_dominates() {
        let mut actor = arena_actor();
        actor.step(1, 0);
        assert_eq!(actor.direction, Direction::Right);
        actor.step(-1, 0);
        assert_eq!(actor.direction, Direction::Left);
    }

    #[test]
    fn test_direction_tie_favors_vertical() {
        let mut actor = arena_actor();
        actor.step(1, 1);
        assert_eq!(actor.direction, Direction::Down);
        actor.step(-1, -1);
        assert_eq!(actor.direction, Direction::Up);
    }

    #[test]
    fn test_step_idle_reset_when_stopped() {
        let mut actor = arena_actor();
        actor.step(1, 0);
        assert_eq!(actor.state, ActorState::Walk);
        actor.frame_index = 2;
        actor.step(0, 0);
        assert_eq!(actor.state, ActorState::Idle);
        assert_eq!(actor.frame_index, 0);
        assert!(!actor.moving);
    }

    #[test]
    fn test_step_noop_while_attacking() {
        let mut actor = arena_actor();
        actor.state = ActorState::Attack;
        let before = actor.pos;
        actor.step(1, 1);
        assert_eq!(actor.pos, before);
        assert_eq!(actor.state, ActorState::Attack);
    }

    #[test]
    fn test_die_is_idempotent() {
        let mut actor = arena_actor();
        actor.step(1, 0);
        actor.die();
        let once = actor.clone();
        actor.die();
        assert_eq!(actor.alive, once.alive);
        assert_eq!(actor.state, once.state);
        assert_eq!(actor.direction, once.direction);
        assert_eq!(actor.frame_index, once.frame_index);
        assert_eq!(actor.moving, once.moving);
    }

    #[test]
    fn test_dead_actor_never_changes() {
        let catalog = FrameCatalog::default();
        let mut actor = arena_actor();
        actor.die();
        let frozen = actor.clone();
        actor.step(1, 0);
        actor.advance_animation(1.0, &catalog);
        assert_eq!(actor.pos, frozen.pos);
        assert_eq!(actor.frame_index, frozen.frame_index);
        assert_eq!(actor.state, frozen.state);
    }

    #[test]
    fn test_hit_rect_centered_on_position() {
        let actor = arena_actor();
        let rect = actor.hit_rect();
        assert_eq!(rect.x, 100.0 - 16.0);
        assert_eq!(rect.y, 100.0 - 16.0);
        assert_eq!(rect.w, 32.0);
        assert_eq!(rect.h, 32.0);
    }

    #[test]
    fn test_dead_actor_shows_dead_image() {
        let catalog = FrameCatalog::default();
        let mut actor = arena_actor();
        actor.die();
        assert_eq!(actor.current_image(&catalog), Some("hero/hero_dead"));
    }
}

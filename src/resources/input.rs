//! Per-tick input state resource.
//!
//! The platform's [`InputSource`](crate::platform::InputSource) fills this
//! resource once per tick; simulation systems only ever read it. Input never
//! mutates actors directly — the attack edge-trigger and direction levels are
//! consumed by [`crate::systems::player::player_update`] on the next tick.

use bevy_ecs::prelude::Resource;

use crate::math::Vec2;

/// Boolean key state for one action.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolState {
    /// Whether the key is held this tick.
    pub active: bool,
    /// Whether the key went down this tick (edge trigger).
    pub just_pressed: bool,
}

/// Instantaneous input relevant to the simulation.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    pub up: BoolState,
    pub down: BoolState,
    pub left: BoolState,
    pub right: BoolState,
    /// Attack key; only the edge trigger is consumed.
    pub attack: BoolState,
    /// Pointer click position this tick, if any (menu interaction).
    pub pointer_click: Option<Vec2>,
}

impl InputState {
    /// Clear per-tick edges before the platform writes the new state.
    pub fn clear_edges(&mut self) {
        self.up.just_pressed = false;
        self.down.just_pressed = false;
        self.left.just_pressed = false;
        self.right.just_pressed = false;
        self.attack.just_pressed = false;
        self.pointer_click = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_all_inactive() {
        let input = InputState::default();
        assert!(!input.up.active);
        assert!(!input.down.active);
        assert!(!input.left.active);
        assert!(!input.right.active);
        assert!(!input.attack.active);
        assert!(!input.attack.just_pressed);
        assert!(input.pointer_click.is_none());
    }

    #[test]
    fn test_clear_edges_keeps_levels() {
        let mut input = InputState::default();
        input.left.active = true;
        input.attack.just_pressed = true;
        input.pointer_click = Some(Vec2::new(1.0, 2.0));
        input.clear_edges();
        assert!(input.left.active);
        assert!(!input.attack.just_pressed);
        assert!(input.pointer_click.is_none());
    }
}

//! Hero update system.
//!
//! Runs once per tick while playing. Consumes the attack edge-trigger, maps
//! held direction keys to a bounded step, drives the attack timer, and
//! advances the animation last — the order the actor contract expects.

use bevy_ecs::prelude::*;

use crate::components::actor::{Actor, ActorState};
use crate::components::player::{ATTACK_DURATION, Player};
use crate::resources::framecatalog::FrameCatalog;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Advance the hero one tick.
///
/// Movement input is ignored while attacking. Opposite keys held together
/// resolve left-over-right and up-over-down.
pub fn player_update(
    mut query: Query<(&mut Player, &mut Actor)>,
    input: Res<InputState>,
    catalog: Res<FrameCatalog>,
    time: Res<WorldTime>,
) {
    let dt = time.delta;
    for (mut player, mut actor) in query.iter_mut() {
        if !actor.alive {
            continue;
        }

        if input.attack.just_pressed {
            player.begin_attack(&mut actor);
        }

        let (mut dx, mut dy) = (0, 0);
        if !player.attacking {
            if input.left.active {
                dx = -1;
            } else if input.right.active {
                dx = 1;
            }
            if input.up.active {
                dy = -1;
            } else if input.down.active {
                dy = 1;
            }
        }
        actor.step(dx, dy);

        if player.attacking {
            player.attack_timer += dt;
            if player.attack_timer >= ATTACK_DURATION {
                player.attacking = false;
                actor.state = ActorState::Idle;
                actor.frame_index = 0;
            }
        }
        actor.advance_animation(dt, &catalog);
    }
}

/// Run condition: true while the hero is alive.
pub fn player_is_alive(query: Query<&Actor, With<Player>>) -> bool {
    query.iter().any(|actor| actor.alive)
}

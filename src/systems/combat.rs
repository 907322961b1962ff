//! Melee combat resolution.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::actor::Actor;
use crate::components::enemy::Enemy;
use crate::components::player::Player;
use crate::events::audio::AudioCmd;
use crate::resources::session::Session;

/// Sound-effect id played when an enemy is struck.
pub const FX_ENEMY_HURT: &str = "enemy_hurt";
/// Sound-effect id played when the hero dies.
pub const FX_HERO_HURT: &str = "hero_hurt";

/// Test the hero's attack rectangle against every living enemy.
///
/// Runs after the per-actor updates. A hit kills the enemy, starting its
/// death drain, and fires the hit effect.
pub fn resolve_melee_hits(
    players: Query<(&Player, &Actor), Without<Enemy>>,
    mut enemies: Query<&mut Actor, With<Enemy>>,
    mut audio: MessageWriter<AudioCmd>,
) {
    let Ok((player, player_actor)) = players.single() else {
        return;
    };
    if !player.attacking || !player_actor.alive {
        return;
    }
    let reach = player.attack_rect(player_actor);

    for mut actor in enemies.iter_mut() {
        if actor.alive && reach.intersects(&actor.hit_rect()) {
            actor.die();
            info!("enemy slain at ({:.0}, {:.0})", actor.pos.x, actor.pos.y);
            audio.write(AudioCmd::PlayFx {
                id: FX_ENEMY_HURT.to_string(),
            });
        }
    }
}

/// Kill the hero: reset the session death timer, drop the actor, and fire
/// the hurt effect. Called from the enemy windup resolution path.
pub fn slay_player(actor: &mut Actor, session: &mut Session, audio: &mut MessageWriter<AudioCmd>) {
    session.death_timer = 0.0;
    actor.die();
    info!("hero slain");
    audio.write(AudioCmd::PlayFx {
        id: FX_HERO_HURT.to_string(),
    });
}

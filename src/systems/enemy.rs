//! Enemy update system and spawning.
//!
//! Each enemy is in exactly one of three modes per tick:
//! 1. dead and draining — after 1 s the entity is despawned and a fresh enemy
//!    is spawned into a new random territory, keeping the population constant;
//! 2. attacking — a committed windup that lands unconditionally after 0.5 s
//!    if the hero is still alive, with no distance re-check;
//! 3. wandering — random direction redraws on a randomized interval, steps
//!    confined to the enemy's own territory.
//!
//! Despawns and replacement spawns go through [`Commands`], so the query
//! iteration of a tick always sees a stable snapshot.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::actor::{Actor, ActorState};
use crate::components::enemy::{
    ATTACK_DELAY, ATTACK_RANGE, DEATH_DRAIN, ENEMY_SPEED, Enemy, TERRITORY_SIZE,
    WANDER_INTERVAL_MAX, WANDER_INTERVAL_MIN, WanderDirection,
};
use crate::components::player::Player;
use crate::events::audio::AudioCmd;
use crate::math::Rect;
use crate::resources::framecatalog::FrameCatalog;
use crate::resources::gameconfig::GameConfig;
use crate::resources::rng::WanderRng;
use crate::resources::session::Session;
use crate::resources::worldtime::WorldTime;
use crate::systems::combat::slay_player;

/// Advance every enemy one tick.
pub fn enemy_update(
    mut commands: Commands,
    time: Res<WorldTime>,
    catalog: Res<FrameCatalog>,
    config: Res<GameConfig>,
    mut rng: ResMut<WanderRng>,
    mut session: ResMut<Session>,
    mut audio: MessageWriter<AudioCmd>,
    mut enemies: Query<(Entity, &mut Enemy, &mut Actor), Without<Player>>,
    mut players: Query<&mut Actor, With<Player>>,
) {
    let dt = time.delta;
    let Ok(mut player_actor) = players.single_mut() else {
        return;
    };
    let hero_pos = player_actor.pos;

    for (entity, mut enemy, mut actor) in enemies.iter_mut() {
        if !actor.alive {
            enemy.death_timer += dt;
            if enemy.death_timer >= DEATH_DRAIN {
                debug!("enemy drained, respawning");
                commands.entity(entity).despawn();
                spawn_enemy(&mut commands, &mut rng, &config);
            }
            continue;
        }

        if enemy.attacking {
            enemy.attack_timer += dt;
            if enemy.attack_timer >= ATTACK_DELAY {
                // Committed windup: lands regardless of current distance.
                if player_actor.alive {
                    slay_player(&mut player_actor, &mut session, &mut audio);
                }
                enemy.attacking = false;
                enemy.attack_timer = 0.0;
                actor.state = ActorState::Idle;
                actor.frame_index = 0;
            }
            actor.advance_animation(dt, &catalog);
            continue;
        }

        let distance = actor.pos.distance(hero_pos);
        if distance <= ATTACK_RANGE && player_actor.alive {
            enemy.attacking = true;
            enemy.attack_timer = 0.0;
            actor.state = ActorState::Attack;
            actor.frame_index = 0;
            actor.animation_timer = 0.0;
            actor.moving = false;
            actor.advance_animation(dt, &catalog);
            continue;
        }

        enemy.wander_timer += dt;
        if enemy.wander_timer >= enemy.wander_interval {
            enemy.wander_timer = 0.0;
            enemy.wander_interval = rng.range_f32(WANDER_INTERVAL_MIN, WANDER_INTERVAL_MAX);
            enemy.wander_direction = WanderDirection::from_index(rng.0.usize(0..5));
        }
        let (dx, dy) = enemy.wander_direction.deltas();
        actor.step(dx, dy);
        actor.advance_animation(dt, &catalog);
    }
}

/// Spawn one enemy into a fresh random 100x100 territory.
///
/// Territories are drawn uniformly with a 150-unit margin from the arena
/// edges, centered spawn position, exactly like session setup does.
pub fn spawn_enemy(commands: &mut Commands, rng: &mut WanderRng, config: &GameConfig) {
    let max_left = (config.arena_width as i32 - 150).max(150);
    let max_top = (config.arena_height as i32 - 150).max(150);
    let left = rng.0.i32(150..=max_left) as f32;
    let top = rng.0.i32(150..=max_top) as f32;
    let territory = Rect::new(left, top, TERRITORY_SIZE, TERRITORY_SIZE);

    let actor = Actor::new("enemy", territory.center(), territory).with_speed(ENEMY_SPEED);
    let enemy = Enemy::new(
        territory,
        WanderDirection::from_index(rng.0.usize(0..5)),
        rng.range_f32(WANDER_INTERVAL_MIN, WANDER_INTERVAL_MAX),
    );
    commands.spawn((enemy, actor));
}

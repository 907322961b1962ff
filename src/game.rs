//! World bootstrap, the tick schedule, and the state enter hooks.
//!
//! [`bootstrap_world`] builds a fully wired [`World`]: resources, the audio
//! bridge, the game-state and menu observers, and the enter hooks registered
//! in the [`SystemsStore`]. [`build_schedule`] assembles the per-tick system
//! graph. The main loop (and the integration tests) drive the pair directly.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::actor::Actor;
use crate::components::persistent::Persistent;
use crate::components::player::{PLAYER_SPEED, PLAYER_START, Player};
use crate::events::audio::AudioCmd;
use crate::events::gamestate::observe_gamestate_change_event;
use crate::resources::audio::setup_audio;
use crate::resources::framecatalog::FrameCatalog;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::menu::MenuScreen;
use crate::resources::rng::WanderRng;
use crate::resources::session::{ENEMY_POPULATION, Session};
use crate::resources::systemsstore::SystemsStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::audio::{
    forward_audio_cmds, poll_audio_messages, update_bevy_audio_cmds, update_bevy_audio_messages,
};
use crate::systems::combat::{FX_ENEMY_HURT, FX_HERO_HURT, resolve_melee_hits};
use crate::systems::enemy::{enemy_update, spawn_enemy};
use crate::systems::gamestate::{check_pending_state, state_is_menu, state_is_playing};
use crate::systems::menu::{menu_action_observer, menu_pointer_system};
use crate::systems::player::{player_is_alive, player_update};
use crate::systems::render::render_system;
use crate::systems::session::{session_tick, update_music};

/// Id of the looping background track.
pub const MUSIC_THEME: &str = "theme";
/// Asset paths handed to the audio backend during setup.
pub const MUSIC_THEME_PATH: &str = "assets/music/theme.ogg";
pub const FX_ENEMY_HURT_PATH: &str = "assets/fx/enemy_hurt.wav";
pub const FX_HERO_HURT_PATH: &str = "assets/fx/hero_hurt.wav";

/// Enter hook for [`GameStates::Setup`]: queue the audio loads, then move on
/// to the menu.
pub fn setup(mut audio: MessageWriter<AudioCmd>, mut next_state: ResMut<NextGameState>) {
    info!("session setup");
    audio.write(AudioCmd::LoadMusic {
        id: MUSIC_THEME.to_string(),
        path: MUSIC_THEME_PATH.to_string(),
    });
    audio.write(AudioCmd::LoadFx {
        id: FX_ENEMY_HURT.to_string(),
        path: FX_ENEMY_HURT_PATH.to_string(),
    });
    audio.write(AudioCmd::LoadFx {
        id: FX_HERO_HURT.to_string(),
        path: FX_HERO_HURT_PATH.to_string(),
    });
    next_state.set(GameStates::Menu);
}

/// Enter hook for both [`GameStates::Menu`] and [`GameStates::Playing`].
///
/// Despawns every non-persistent actor, clears the run flags, and repopulates
/// the arena: the hero back at its start corner, five enemies in fresh random
/// territories. Running it on both transitions keeps the menu and a new run
/// starting from the same arena.
pub fn reset_session(
    mut commands: Commands,
    mut session: ResMut<Session>,
    mut rng: ResMut<WanderRng>,
    config: Res<GameConfig>,
    actors: Query<Entity, (With<Actor>, Without<Persistent>)>,
) {
    for entity in actors.iter() {
        commands.entity(entity).despawn();
    }
    session.reset();

    let hero = Actor::new("hero", PLAYER_START, config.arena_rect()).with_speed(PLAYER_SPEED);
    commands.spawn((Player::default(), hero));
    for _ in 0..ENEMY_POPULATION {
        spawn_enemy(&mut commands, &mut rng, &config);
    }
    info!("session reset: hero + {} enemies", ENEMY_POPULATION);
}

/// Enter hook for [`GameStates::Quitting`]: flag the main loop to stop.
pub fn quit_game(mut session: ResMut<Session>) {
    info!("quit requested");
    session.quit_requested = true;
}

/// Build a fully wired world from a config, a frame catalog, and an optional
/// RNG seed (seeded runs are deterministic; tests rely on that).
pub fn bootstrap_world(config: GameConfig, catalog: FrameCatalog, seed: Option<u64>) -> World {
    let mut world = World::new();

    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(Session::default());
    world.insert_resource(MenuScreen::new());
    world.insert_resource(match seed {
        Some(seed) => WanderRng::with_seed(seed),
        None => WanderRng::default(),
    });
    world.insert_resource(catalog);
    world.insert_resource(config);

    setup_audio(&mut world);

    let mut store = SystemsStore::new();
    let setup_id = world.register_system(setup);
    let reset_id = world.register_system(reset_session);
    let quit_id = world.register_system(quit_game);
    store.insert("setup", setup_id);
    store.insert("enter_menu", reset_id);
    store.insert("enter_play", reset_id);
    store.insert("quit_game", quit_id);
    world.insert_resource(store);

    // Registered systems hold entities; mark them so resets leave them alone.
    world.entity_mut(setup_id.entity()).insert(Persistent);
    world.entity_mut(reset_id.entity()).insert(Persistent);
    world.entity_mut(quit_id.entity()).insert(Persistent);

    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));
    world.spawn((Observer::new(menu_action_observer), Persistent));

    world.flush();
    world
}

/// Assemble the per-tick schedule.
///
/// Order of a tick: audio bridge exchange, pending state application, input
/// handling, per-actor updates, combat resolution, session bookkeeping,
/// rendering last.
pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    // Audio systems must run together: advance and forward the command
    // queue, then pull and advance the responses.
    schedule.add_systems(
        (
            update_bevy_audio_cmds,
            forward_audio_cmds,
            poll_audio_messages,
            update_bevy_audio_messages,
        )
            .chain(),
    );
    schedule.add_systems(check_pending_state);
    schedule.add_systems(menu_pointer_system.run_if(state_is_menu));
    schedule.add_systems(update_music.after(check_pending_state));
    schedule.add_systems(player_update.run_if(state_is_playing));
    // Enemies only tick while the hero lives; the whole arena freezes under
    // the game-over overlay.
    schedule.add_systems(
        enemy_update
            .run_if(state_is_playing)
            .run_if(player_is_alive)
            .after(player_update),
    );
    schedule.add_systems(
        resolve_melee_hits
            .run_if(state_is_playing)
            .run_if(player_is_alive)
            .after(enemy_update)
            .before(forward_audio_cmds),
    );
    schedule.add_systems(
        session_tick
            .run_if(state_is_playing)
            .after(resolve_melee_hits),
    );
    schedule.add_systems(
        render_system
            .after(session_tick)
            .after(menu_pointer_system),
    );
    schedule
}

//! Full-session integration tests: boot, menu flow, combat, game over.

use bevy_ecs::prelude::*;

use arenafray::components::actor::{Actor, ActorState};
use arenafray::components::enemy::{ENEMY_SPEED, Enemy, WanderDirection};
use arenafray::components::player::{PLAYER_SPEED, PLAYER_START, Player};
use arenafray::events::audio::AudioCmd;
use arenafray::events::gamestate::GameStateChangedEvent;
use arenafray::game::{bootstrap_world, build_schedule};
use arenafray::math::{Rect, Vec2};
use arenafray::platform::{HeadlessRender, RenderHost};
use arenafray::resources::audio::shutdown_audio;
use arenafray::resources::framecatalog::FrameCatalog;
use arenafray::resources::gameconfig::GameConfig;
use arenafray::resources::gamestate::{GameState, GameStates, NextGameState};
use arenafray::resources::input::InputState;
use arenafray::resources::rng::WanderRng;
use arenafray::resources::session::{ENEMY_POPULATION, Session};
use arenafray::resources::worldtime::WorldTime;
use arenafray::systems::combat::resolve_melee_hits;
use arenafray::systems::enemy::enemy_update;
use arenafray::systems::time::update_world_time;

fn tick(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
    world.clear_trackers();
}

/// Boot a full world with a seeded RNG and drive it into the menu.
fn boot(config: GameConfig) -> (World, Schedule) {
    let mut world = bootstrap_world(config, FrameCatalog::default(), Some(7));
    world.insert_non_send_resource(RenderHost(Box::new(HeadlessRender)));
    let mut schedule = build_schedule();
    schedule.initialize(&mut world).unwrap();

    world.resource_mut::<NextGameState>().set(GameStates::Setup);
    world.trigger(GameStateChangedEvent {});
    world.flush();
    // First tick applies the Setup -> Menu transition and runs the reset hook.
    tick(&mut world, &mut schedule, 0.1);
    (world, schedule)
}

fn enter_playing(world: &mut World, schedule: &mut Schedule) {
    world.resource_mut::<NextGameState>().set(GameStates::Playing);
    tick(world, schedule, 0.1);
    assert_eq!(world.resource::<GameState>().get(), &GameStates::Playing);
}

fn click(world: &mut World, x: f32, y: f32) {
    world.resource_mut::<InputState>().pointer_click = Some(Vec2::new(x, y));
}

fn clear_input(world: &mut World) {
    let mut input = world.resource_mut::<InputState>();
    *input = InputState::default();
}

fn hero_actor(world: &mut World) -> Actor {
    let mut query = world.query_filtered::<&Actor, With<Player>>();
    query.single(world).unwrap().clone()
}

fn enemy_count(world: &mut World) -> usize {
    let mut query = world.query::<(&Enemy, &Actor)>();
    query.iter(world).count()
}

// --------------- Boot and menu flow ---------------

#[test]
fn boot_reaches_menu_with_fresh_arena() {
    let (mut world, _schedule) = boot(GameConfig::new());

    assert_eq!(world.resource::<GameState>().get(), &GameStates::Menu);
    let hero = hero_actor(&mut world);
    assert!(hero.alive);
    assert_eq!(hero.pos, PLAYER_START);
    assert_eq!(hero.speed, PLAYER_SPEED);
    assert_eq!(enemy_count(&mut world), ENEMY_POPULATION);

    let mut query = world.query::<(&Enemy, &Actor)>();
    for (enemy, actor) in query.iter(&world) {
        assert!(enemy.territory.contains_point(actor.pos));
        assert_eq!(actor.move_area, enemy.territory);
        assert!(enemy.territory.x >= 150.0);
        assert!(enemy.territory.y >= 150.0);
        assert_eq!(actor.speed, ENEMY_SPEED);
    }
    shutdown_audio(&mut world);
}

#[test]
fn start_button_switches_to_playing() {
    let (mut world, mut schedule) = boot(GameConfig::new());

    click(&mut world, 400.0, 225.0);
    tick(&mut world, &mut schedule, 0.1);
    clear_input(&mut world);
    tick(&mut world, &mut schedule, 0.1);

    assert_eq!(world.resource::<GameState>().get(), &GameStates::Playing);
    assert!(hero_actor(&mut world).alive);
    assert_eq!(enemy_count(&mut world), ENEMY_POPULATION);
    shutdown_audio(&mut world);
}

#[test]
fn exit_button_requests_quit() {
    let (mut world, mut schedule) = boot(GameConfig::new());

    click(&mut world, 400.0, 425.0);
    tick(&mut world, &mut schedule, 0.1);
    clear_input(&mut world);
    tick(&mut world, &mut schedule, 0.1);

    assert_eq!(world.resource::<GameState>().get(), &GameStates::Quitting);
    assert!(world.resource::<Session>().quit_requested);
    shutdown_audio(&mut world);
}

#[test]
fn music_toggle_leaves_simulation_untouched() {
    let config_path = std::env::temp_dir().join("arenafray_music_toggle_test.ini");
    let (mut world, mut schedule) = boot(GameConfig::with_path(&config_path));

    // One settled tick so the music bookkeeping reflects the menu state.
    tick(&mut world, &mut schedule, 0.1);
    assert!(world.resource::<Session>().music_playing);

    let hero_before = hero_actor(&mut world);
    let enemies_before = enemy_count(&mut world);

    click(&mut world, 400.0, 325.0);
    tick(&mut world, &mut schedule, 0.1);
    clear_input(&mut world);

    assert!(!world.resource::<GameConfig>().music_on);
    assert!(!world.resource::<Session>().music_playing);
    assert!(config_path.exists());

    // Simulation state is untouched by the toggle.
    assert_eq!(world.resource::<GameState>().get(), &GameStates::Menu);
    let hero_after = hero_actor(&mut world);
    assert_eq!(hero_after.pos, hero_before.pos);
    assert_eq!(hero_after.alive, hero_before.alive);
    assert_eq!(enemy_count(&mut world), enemies_before);

    // Toggling back on restarts the music on the next tick.
    click(&mut world, 400.0, 325.0);
    tick(&mut world, &mut schedule, 0.1);
    clear_input(&mut world);
    tick(&mut world, &mut schedule, 0.1);
    assert!(world.resource::<GameConfig>().music_on);
    assert!(world.resource::<Session>().music_playing);

    shutdown_audio(&mut world);
    let _ = std::fs::remove_file(&config_path);
}

// --------------- Gameplay ---------------

#[test]
fn attack_swing_locks_movement_then_returns_to_idle() {
    let (mut world, mut schedule) = boot(GameConfig::new());
    enter_playing(&mut world, &mut schedule);

    {
        let mut input = world.resource_mut::<InputState>();
        input.attack.just_pressed = true;
    }
    tick(&mut world, &mut schedule, 0.1);
    {
        let mut input = world.resource_mut::<InputState>();
        input.attack.just_pressed = false;
        input.right.active = true;
    }
    let pos_at_swing = hero_actor(&mut world).pos;
    assert_eq!(hero_actor(&mut world).state, ActorState::Attack);

    // Held movement is ignored until the 0.6 s swing resolves.
    for _ in 0..4 {
        tick(&mut world, &mut schedule, 0.1);
        assert_eq!(hero_actor(&mut world).pos, pos_at_swing);
    }
    tick(&mut world, &mut schedule, 0.1);
    let hero = hero_actor(&mut world);
    assert_eq!(hero.state, ActorState::Idle);
    assert_eq!(hero.frame_index, 0);
    assert_eq!(hero.pos, pos_at_swing);

    // Movement resumes on the next tick.
    tick(&mut world, &mut schedule, 0.1);
    assert!(hero_actor(&mut world).pos.x > pos_at_swing.x);
    shutdown_audio(&mut world);
}

#[test]
fn hero_slides_along_arena_bounds() {
    let (mut world, mut schedule) = boot(GameConfig::new());
    enter_playing(&mut world, &mut schedule);

    {
        let mut input = world.resource_mut::<InputState>();
        input.left.active = true;
        input.up.active = true;
    }
    for _ in 0..30 {
        tick(&mut world, &mut schedule, 0.1);
        let hero = hero_actor(&mut world);
        assert!(hero.pos.x >= 0.0 && hero.pos.y >= 0.0);
    }
    let hero = hero_actor(&mut world);
    assert!(hero.pos.x < PLAYER_START.x);
    shutdown_audio(&mut world);
}

#[test]
fn game_over_countdown_resets_to_menu() {
    let (mut world, mut schedule) = boot(GameConfig::new());
    enter_playing(&mut world, &mut schedule);

    {
        let mut query = world.query_filtered::<&mut Actor, With<Player>>();
        query.single_mut(&mut world).unwrap().die();
    }

    tick(&mut world, &mut schedule, 0.5);
    assert!(world.resource::<Session>().game_over);
    assert_eq!(world.resource::<GameState>().get(), &GameStates::Playing);

    // 3 seconds of overlay, then the transition lands on the following tick.
    for _ in 0..6 {
        tick(&mut world, &mut schedule, 0.5);
    }
    assert_eq!(world.resource::<GameState>().get(), &GameStates::Menu);

    let session = world.resource::<Session>();
    assert!(!session.game_over);
    assert_eq!(session.death_timer, 0.0);
    let hero = hero_actor(&mut world);
    assert!(hero.alive);
    assert_eq!(hero.pos, PLAYER_START);
    assert_eq!(enemy_count(&mut world), ENEMY_POPULATION);
    shutdown_audio(&mut world);
}

#[test]
fn arena_freezes_during_game_over_overlay() {
    let (mut world, mut schedule) = boot(GameConfig::new());
    enter_playing(&mut world, &mut schedule);

    // Leave one corpse mid-drain, then kill the hero.
    {
        let mut query = world.query_filtered::<&mut Actor, With<Enemy>>();
        query.iter_mut(&mut world).next().unwrap().die();
    }
    {
        let mut query = world.query_filtered::<&mut Actor, With<Player>>();
        query.single_mut(&mut world).unwrap().die();
    }

    let before: Vec<(Entity, Vec2, bool, f32)> = {
        let mut query = world.query::<(Entity, &Enemy, &Actor)>();
        query
            .iter(&world)
            .map(|(entity, enemy, actor)| (entity, actor.pos, actor.alive, enemy.death_timer))
            .collect()
    };
    assert_eq!(before.len(), ENEMY_POPULATION);

    // Two seconds of overlay: still playing, nothing in the arena moves.
    for _ in 0..4 {
        tick(&mut world, &mut schedule, 0.5);
    }
    assert_eq!(world.resource::<GameState>().get(), &GameStates::Playing);
    assert!(world.resource::<Session>().game_over);

    let mut query = world.query::<(Entity, &Enemy, &Actor)>();
    let after: Vec<(Entity, Vec2, bool, f32)> = query
        .iter(&world)
        .map(|(entity, enemy, actor)| (entity, actor.pos, actor.alive, enemy.death_timer))
        .collect();
    assert_eq!(after.len(), ENEMY_POPULATION);
    for snapshot in &before {
        assert!(after.contains(snapshot), "enemy changed during game over");
    }
    shutdown_audio(&mut world);
}

// --------------- Focused combat worlds ---------------

fn make_combat_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(FrameCatalog::default());
    world.insert_resource(GameConfig::new());
    world.insert_resource(WanderRng::with_seed(11));
    world.insert_resource(Session::default());
    world.init_resource::<Messages<AudioCmd>>();
    world
}

fn spawn_hero_at(world: &mut World, pos: Vec2) -> Entity {
    let actor =
        Actor::new("hero", pos, Rect::new(0.0, 0.0, 800.0, 600.0)).with_speed(PLAYER_SPEED);
    world.spawn((Player::default(), actor)).id()
}

fn spawn_enemy_at(world: &mut World, pos: Vec2, territory: Rect) -> Entity {
    let actor = Actor::new("enemy", pos, territory).with_speed(ENEMY_SPEED);
    world
        .spawn((Enemy::new(territory, WanderDirection::None, 2.0), actor))
        .id()
}

#[test]
fn enemy_windup_lands_even_after_hero_retreats() {
    let mut world = make_combat_world();
    let hero = spawn_hero_at(&mut world, Vec2::new(100.0, 100.0));
    let enemy = spawn_enemy_at(
        &mut world,
        Vec2::new(120.0, 100.0),
        Rect::new(70.0, 50.0, 100.0, 100.0),
    );

    let mut schedule = Schedule::default();
    schedule.add_systems(enemy_update);
    schedule.initialize(&mut world).unwrap();

    // In range: the enemy commits to the windup and stops moving.
    tick(&mut world, &mut schedule, 0.1);
    assert!(world.get::<Enemy>(enemy).unwrap().attacking);
    assert_eq!(world.get::<Actor>(enemy).unwrap().state, ActorState::Attack);

    // Teleport the hero across the arena; the windup is committed.
    world.get_mut::<Actor>(hero).unwrap().pos = Vec2::new(700.0, 500.0);

    for _ in 0..4 {
        tick(&mut world, &mut schedule, 0.1);
        assert!(world.get::<Actor>(hero).unwrap().alive);
    }
    tick(&mut world, &mut schedule, 0.1);

    assert!(!world.get::<Actor>(hero).unwrap().alive);
    assert_eq!(world.resource::<Session>().death_timer, 0.0);
    let enemy_state = world.get::<Enemy>(enemy).unwrap();
    assert!(!enemy_state.attacking);
    assert_eq!(world.get::<Actor>(enemy).unwrap().state, ActorState::Idle);
}

#[test]
fn slain_enemy_drains_and_is_replaced() {
    let mut world = make_combat_world();
    let hero = spawn_hero_at(&mut world, Vec2::new(100.0, 100.0));
    let enemy = spawn_enemy_at(
        &mut world,
        Vec2::new(140.0, 100.0),
        Rect::new(90.0, 50.0, 100.0, 100.0),
    );
    {
        let mut hero_ref = world.entity_mut(hero);
        hero_ref.get_mut::<Player>().unwrap().attacking = true;
        hero_ref.get_mut::<Actor>().unwrap().direction =
            arenafray::components::actor::Direction::Right;
    }

    let mut schedule = Schedule::default();
    schedule.add_systems((enemy_update, resolve_melee_hits).chain());
    schedule.initialize(&mut world).unwrap();

    tick(&mut world, &mut schedule, 0.25);
    assert!(!world.get::<Actor>(enemy).unwrap().alive);
    world.get_mut::<Player>(hero).unwrap().attacking = false;

    // The corpse drains for a second, then a replacement spawns in a fresh
    // territory; the population never changes.
    let mut replacement = None;
    for _ in 0..8 {
        tick(&mut world, &mut schedule, 0.25);
        assert_eq!(enemy_count(&mut world), 1);
        let mut query = world.query::<(Entity, &Enemy, &Actor)>();
        let (entity, _, actor) = query.single(&world).unwrap();
        if entity != enemy && actor.alive {
            replacement = Some(entity);
            break;
        }
    }
    let replacement = replacement.expect("slain enemy was never replaced");

    let mut query = world.query::<(Entity, &Enemy, &Actor)>();
    let (entity, new_enemy, actor) = query.single(&world).unwrap();
    assert_eq!(entity, replacement);
    assert!(new_enemy.territory.x >= 150.0);
    assert!(new_enemy.territory.contains_point(actor.pos));
    assert!(actor.alive);
}

//! Arena Fray main entry point.
//!
//! A single-screen 2D melee arena built on:
//! - **bevy_ecs** for entity-component-system architecture
//! - a background audio thread behind a channel bridge
//! - platform traits for rendering and input, so the simulation runs the same
//!   headless or under a real backend
//!
//! # Main Loop
//!
//! 1. Load the INI config and build the ECS world with all resources,
//!    observers, and state enter hooks
//! 2. Kick the state machine into Setup (audio loads, then the menu)
//! 3. Run fixed-rate ticks: poll input, advance world time, run the schedule
//! 4. Stop on the Exit menu action (or after `--ticks`), then join the audio
//!    thread
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use log::warn;

use arenafray::events::gamestate::GameStateChangedEvent;
use arenafray::game::{bootstrap_world, build_schedule};
use arenafray::platform::{HeadlessRender, IdleInput, InputSource, RenderHost};
use arenafray::resources::audio::shutdown_audio;
use arenafray::resources::framecatalog::FrameCatalog;
use arenafray::resources::gameconfig::GameConfig;
use arenafray::resources::gamestate::{GameStates, NextGameState};
use arenafray::resources::input::InputState;
use arenafray::resources::session::Session;
use arenafray::systems::time::update_world_time;

/// Arena Fray
#[derive(Parser)]
#[command(version, about = "Single-screen 2D melee arena")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Seed for the enemy RNG (deterministic runs).
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks (headless/soak runs).
    #[arg(long)]
    ticks: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("using default config: {}", e);
    }
    let target_fps = config.target_fps.max(1);

    let mut world = bootstrap_world(config, FrameCatalog::default(), cli.seed);
    world.insert_non_send_resource(RenderHost(Box::new(HeadlessRender)));
    let mut input_source: Box<dyn InputSource> = Box::new(IdleInput);

    let mut schedule = build_schedule();
    schedule
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // Kick the state machine; Setup queues audio loads and falls through to
    // the menu on the next tick.
    {
        let mut next_state = world.resource_mut::<NextGameState>();
        next_state.set(GameStates::Setup);
    }
    world.trigger(GameStateChangedEvent {});
    world.flush();

    // --------------- Main loop ---------------
    let dt = 1.0 / target_fps as f32;
    let tick_duration = Duration::from_secs_f32(dt);
    let mut ticks: u64 = 0;

    loop {
        let tick_start = Instant::now();

        {
            let mut input = world.resource_mut::<InputState>();
            let input = &mut *input;
            input.clear_edges();
            input_source.poll(input);
        }

        update_world_time(&mut world, dt);
        schedule.run(&mut world);
        world.clear_trackers();

        if world.resource::<Session>().quit_requested {
            break;
        }
        ticks += 1;
        if let Some(limit) = cli.ticks {
            if ticks >= limit {
                break;
            }
        }

        if let Some(remaining) = tick_duration.checked_sub(tick_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }
    shutdown_audio(&mut world);
}

//! ECS systems.
//!
//! Submodules overview:
//! - [`audio`] – bridge systems and the background audio thread
//! - [`combat`] – melee hit resolution
//! - [`enemy`] – enemy wander/attack/death update and spawning
//! - [`gamestate`] – pending-state emission and state run conditions
//! - [`menu`] – pointer hit testing and menu action handling
//! - [`player`] – hero movement, attack timing, animation
//! - [`render`] – draw-call emission to the platform sink
//! - [`session`] – game-over countdown and music bookkeeping
//! - [`time`] – world time update

pub mod audio;
pub mod combat;
pub mod enemy;
pub mod gamestate;
pub mod menu;
pub mod player;
pub mod render;
pub mod session;
pub mod time;

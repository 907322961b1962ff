//! ECS resources shared across systems.
//!
//! Submodules overview:
//! - [`audio`] – channel bridge to the background audio thread
//! - [`framecatalog`] – animation frame lookup per actor kind, state, direction
//! - [`gameconfig`] – INI-backed settings: arena size, fps, music flag
//! - [`gamestate`] – current and pending high-level session state
//! - [`input`] – per-tick input snapshot filled by the platform
//! - [`menu`] – menu screen layout and hit testing
//! - [`rng`] – seedable random source for enemy behavior
//! - [`session`] – game-over countdown, music and quit bookkeeping
//! - [`systemsstore`] – registry of state enter hooks by name
//! - [`worldtime`] – elapsed/delta seconds with a time scale

pub mod audio;
pub mod framecatalog;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod menu;
pub mod rng;
pub mod session;
pub mod systemsstore;
pub mod worldtime;

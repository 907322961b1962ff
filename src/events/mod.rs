//! Event and message types exchanged across systems.
//!
//! Submodules:
//! - [`audio`] – commands and responses for the background audio thread
//! - [`gamestate`] – state transition event and the observer that applies it
//! - [`menu`] – actions triggered from the menu screen

pub mod audio;
pub mod gamestate;
pub mod menu;

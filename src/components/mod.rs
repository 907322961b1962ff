//! ECS components for entities.
//!
//! Submodules overview:
//! - [`actor`] – shared animated-actor capability: direction, animation
//!   state, bounded movement, hit rectangle
//! - [`player`] – hero behavior: attack initiation, timing, attack reach
//! - [`enemy`] – enemy behavior: wandering, attack windup, death drain
//! - [`persistent`] – marker for entities that survive session resets

pub mod actor;
pub mod enemy;
pub mod persistent;
pub mod player;

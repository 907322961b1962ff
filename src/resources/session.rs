//! Session bookkeeping resource.
//!
//! Owns the flags and timers that outlive any single actor: the game-over
//! countdown, music playback bookkeeping, and the quit request checked by the
//! main loop.

use bevy_ecs::prelude::Resource;

/// Number of enemies kept alive in the arena while playing.
pub const ENEMY_POPULATION: usize = 5;
/// Seconds the game-over overlay stays up before falling back to the menu.
pub const GAME_OVER_DELAY: f32 = 3.0;

#[derive(Resource, Debug, Clone, Default)]
pub struct Session {
    /// Set on the first tick after the hero dies.
    pub game_over: bool,
    /// Seconds since the hero died.
    pub death_timer: f32,
    /// Whether the music track is currently playing.
    pub music_playing: bool,
    /// Set by the Exit menu action; the main loop stops when it sees this.
    pub quit_requested: bool,
}

impl Session {
    /// Clear the per-run flags. Music and quit bookkeeping are left alone —
    /// toggling or quitting is orthogonal to the arena state.
    pub fn reset(&mut self) {
        self.game_over = false;
        self.death_timer = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_clears_run_flags_only() {
        let mut session = Session {
            game_over: true,
            death_timer: 2.5,
            music_playing: true,
            quit_requested: false,
        };
        session.reset();
        assert!(!session.game_over);
        assert_eq!(session.death_timer, 0.0);
        assert!(session.music_playing);
    }
}

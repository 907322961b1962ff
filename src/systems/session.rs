//! Session-level systems: the game-over countdown and music bookkeeping.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::actor::Actor;
use crate::components::player::Player;
use crate::events::audio::AudioCmd;
use crate::game::MUSIC_THEME;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::session::{GAME_OVER_DELAY, Session};
use crate::resources::worldtime::WorldTime;

/// Watch the hero while playing. On death, raise the game-over flag, stop
/// music, and after the countdown fall back to the menu (which resets the
/// session through the enter hook).
pub fn session_tick(
    time: Res<WorldTime>,
    mut session: ResMut<Session>,
    mut next_state: ResMut<NextGameState>,
    mut audio: MessageWriter<AudioCmd>,
    players: Query<&Actor, With<Player>>,
) {
    let Ok(actor) = players.single() else {
        return;
    };
    if actor.alive {
        return;
    }

    if !session.game_over {
        session.game_over = true;
        session.death_timer = 0.0;
        info!("game over");
        if session.music_playing {
            audio.write(AudioCmd::StopMusic {
                id: MUSIC_THEME.to_string(),
            });
            session.music_playing = false;
        }
    }

    session.death_timer += time.delta;
    if session.death_timer >= GAME_OVER_DELAY {
        next_state.set(GameStates::Menu);
    }
}

/// Keep music playback in line with the persisted flag.
///
/// Starts the looped theme in the menu and while playing; stops it when the
/// flag is off. The game-over path stops music itself.
pub fn update_music(
    state: Res<GameState>,
    config: Res<GameConfig>,
    mut session: ResMut<Session>,
    mut audio: MessageWriter<AudioCmd>,
) {
    if !matches!(state.get(), GameStates::Menu | GameStates::Playing) {
        return;
    }
    if config.music_on && !session.music_playing && !session.game_over {
        audio.write(AudioCmd::PlayMusic {
            id: MUSIC_THEME.to_string(),
            looped: true,
        });
        session.music_playing = true;
    } else if !config.music_on && session.music_playing {
        audio.write(AudioCmd::StopMusic {
            id: MUSIC_THEME.to_string(),
        });
        session.music_playing = false;
    }
}

//! Menu systems.
//!
//! [`menu_pointer_system`] hit-tests pointer clicks against the menu buttons
//! and triggers a [`MenuActionEvent`]; [`menu_action_observer`] performs the
//! selected action. Toggling music only touches the config flag and audio
//! commands — never simulation state.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::events::audio::AudioCmd;
use crate::events::menu::{MenuAction, MenuActionEvent};
use crate::game::MUSIC_THEME;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::menu::MenuScreen;
use crate::resources::session::Session;

/// Translate a pointer click on a button into a menu action. Runs only in
/// the menu state.
pub fn menu_pointer_system(
    mut commands: Commands,
    input: Res<InputState>,
    menu: Res<MenuScreen>,
) {
    let Some(click) = input.pointer_click else {
        return;
    };
    if let Some(action) = menu.action_at(click) {
        commands.trigger(MenuActionEvent { action });
    }
}

/// Apply a selected menu action.
pub fn menu_action_observer(
    trigger: On<MenuActionEvent>,
    mut next_state: ResMut<NextGameState>,
    mut config: ResMut<GameConfig>,
    mut session: ResMut<Session>,
    mut audio: MessageWriter<AudioCmd>,
) {
    let event = trigger.event();
    match event.action {
        MenuAction::Start => {
            info!("menu: start game");
            next_state.set(GameStates::Playing);
        }
        MenuAction::ToggleMusic => {
            config.music_on = !config.music_on;
            info!("menu: music {}", if config.music_on { "on" } else { "off" });
            if let Err(e) = config.save_to_file() {
                warn!("could not persist music flag: {}", e);
            }
            if !config.music_on && session.music_playing {
                audio.write(AudioCmd::StopMusic {
                    id: MUSIC_THEME.to_string(),
                });
                session.music_playing = false;
            }
        }
        MenuAction::Exit => {
            info!("menu: exit");
            next_state.set(GameStates::Quitting);
        }
    }
}

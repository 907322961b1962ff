//! Render system.
//!
//! Walks the visible state once per tick and forwards it to the active
//! [`RenderSink`](crate::platform::RenderSink). Actors whose current frame
//! cannot be resolved from the catalog are skipped silently.

use bevy_ecs::prelude::*;
use smallvec::SmallVec;

use crate::components::actor::Actor;
use crate::math::Vec2;
use crate::platform::RenderHost;
use crate::resources::framecatalog::FrameCatalog;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::menu::MenuScreen;
use crate::resources::session::Session;

pub fn render_system(
    mut host: NonSendMut<RenderHost>,
    state: Res<GameState>,
    session: Res<Session>,
    menu: Res<MenuScreen>,
    catalog: Res<FrameCatalog>,
    actors: Query<&Actor>,
) {
    let sink = host.0.as_mut();
    match state.get() {
        GameStates::Playing => {
            sink.clear();
            // One hero and a handful of enemies; stays inline.
            let mut draws: SmallVec<[(&str, Vec2); 8]> = SmallVec::new();
            for actor in actors.iter() {
                if let Some(image) = actor.current_image(&catalog) {
                    draws.push((image, actor.pos));
                }
            }
            for (image, pos) in draws {
                sink.draw_actor(image, pos);
            }
            if session.game_over {
                sink.draw_game_over();
            }
            sink.present();
        }
        GameStates::Menu => {
            sink.clear();
            sink.draw_menu(&menu.buttons);
            sink.present();
        }
        _ => {}
    }
}

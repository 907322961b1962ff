//! Menu action event.

use bevy_ecs::prelude::*;

/// The three things the menu can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start,
    ToggleMusic,
    Exit,
}

/// Triggered when a pointer click lands on a menu button.
#[derive(Event, Debug, Clone, Copy)]
pub struct MenuActionEvent {
    pub action: MenuAction,
}

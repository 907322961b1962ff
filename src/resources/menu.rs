//! Menu screen resource.
//!
//! Three fixed buttons; the pointer system hit-tests clicks against their
//! rects and triggers the matching [`MenuActionEvent`](crate::events::menu::MenuActionEvent).

use bevy_ecs::prelude::Resource;

use crate::events::menu::MenuAction;
use crate::math::Rect;

#[derive(Debug, Clone)]
pub struct MenuButton {
    pub label: String,
    pub rect: Rect,
    pub action: MenuAction,
}

#[derive(Resource, Debug, Clone)]
pub struct MenuScreen {
    pub buttons: Vec<MenuButton>,
}

impl MenuScreen {
    pub fn new() -> Self {
        let button = |label: &str, y: f32, action: MenuAction| MenuButton {
            label: label.to_string(),
            rect: Rect::new(300.0, y, 200.0, 50.0),
            action,
        };
        MenuScreen {
            buttons: vec![
                button("Start Game", 200.0, MenuAction::Start),
                button("Toggle Music", 300.0, MenuAction::ToggleMusic),
                button("Exit", 400.0, MenuAction::Exit),
            ],
        }
    }

    /// Action of the button under `point`, if any.
    pub fn action_at(&self, point: crate::math::Vec2) -> Option<MenuAction> {
        self.buttons
            .iter()
            .find(|button| button.rect.contains_point(point))
            .map(|button| button.action)
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;

    #[test]
    fn test_click_inside_buttons() {
        let menu = MenuScreen::new();
        assert_eq!(menu.action_at(Vec2::new(400.0, 225.0)), Some(MenuAction::Start));
        assert_eq!(
            menu.action_at(Vec2::new(400.0, 325.0)),
            Some(MenuAction::ToggleMusic)
        );
        assert_eq!(menu.action_at(Vec2::new(400.0, 425.0)), Some(MenuAction::Exit));
    }

    #[test]
    fn test_click_outside_any_button() {
        let menu = MenuScreen::new();
        assert_eq!(menu.action_at(Vec2::new(10.0, 10.0)), None);
        assert_eq!(menu.action_at(Vec2::new(400.0, 280.0)), None);
    }
}

//! Seams to the platform collaborators.
//!
//! Rendering, audio playback, and raw input live outside the simulation. The
//! audio side already goes through the channel bridge in
//! [`crate::resources::audio`]; this module holds the remaining two seams:
//! - [`RenderSink`] — consumes draw calls emitted by
//!   [`crate::systems::render::render_system`];
//! - [`InputSource`] — fills the [`InputState`] resource at the top of every
//!   tick.
//!
//! The headless implementations ship with the crate so the binary and the
//! integration tests run without a window; a real backend implements the
//! same traits.

use crate::math::Vec2;
use crate::resources::input::InputState;
use crate::resources::menu::MenuButton;

/// Draw-call consumer. Lookup failures (unknown image names) are the sink's
/// problem to swallow; the simulation never hears about them.
pub trait RenderSink {
    fn clear(&mut self);
    /// Draw one actor frame centered at `pos`.
    fn draw_actor(&mut self, image: &str, pos: Vec2);
    fn draw_menu(&mut self, buttons: &[MenuButton]);
    fn draw_game_over(&mut self);
    fn present(&mut self);
}

/// Fills [`InputState`] once per tick. Implementations only set intent —
/// levels and edge triggers — and never touch simulation state.
pub trait InputSource {
    fn poll(&mut self, input: &mut InputState);
}

/// Non-send host for the active render sink.
pub struct RenderHost(pub Box<dyn RenderSink>);

/// Render sink that draws nothing.
pub struct HeadlessRender;

impl RenderSink for HeadlessRender {
    fn clear(&mut self) {}
    fn draw_actor(&mut self, _image: &str, _pos: Vec2) {}
    fn draw_menu(&mut self, _buttons: &[MenuButton]) {}
    fn draw_game_over(&mut self) {}
    fn present(&mut self) {}
}

/// Input source with no keys ever pressed.
pub struct IdleInput;

impl InputSource for IdleInput {
    fn poll(&mut self, _input: &mut InputState) {}
}

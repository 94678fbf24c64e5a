//! Click-to-rebind key field.

use tracing::debug;

use crate::context::{Context, SoundId};
use crate::input::{Key, MouseButton};
use crate::layout::{Rect, Vec2};
use crate::render::UIRenderer;
use crate::style::{Color, TextStyle};

use super::core::{Control, Widget};

/// Appearance of a keybind field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeybindStyle {
    /// Field fill.
    pub background: Color,
    /// Key name color.
    pub text: Color,
    /// Key name color while hovered or listening.
    pub text_hover: Color,
}

impl Default for KeybindStyle {
    fn default() -> Self {
        Self {
            background: Color::LIGHTGRAY,
            text: Color::DARKGRAY,
            text_hover: Color::BLACK,
        }
    }
}

/// Shows a key binding; click it, then press a key to rebind.
#[derive(Debug, Clone, PartialEq)]
pub struct KeybindInput {
    rect: Rect,
    key: Key,
    listening: bool,
    control: Control,
}

impl KeybindInput {
    /// Creates a silent field bound to `initial`.
    #[must_use]
    pub fn new(rect: Rect, initial: Key) -> Self {
        Self {
            rect,
            key: initial,
            listening: false,
            control: Control::new(),
        }
    }

    /// Adds hover and click sounds.
    #[must_use]
    pub fn with_sounds(mut self, hover: SoundId, click: SoundId) -> Self {
        self.control.set_sounds(Some(hover), Some(click));
        self
    }

    /// Returns the bound key.
    #[must_use]
    pub const fn value(&self) -> Key {
        self.key
    }

    /// Binds a key directly.
    pub fn set_value(&mut self, key: Key) {
        self.key = key;
    }

    /// Returns true while waiting for a key press.
    #[must_use]
    pub const fn is_listening(&self) -> bool {
        self.listening
    }

    /// Updates at the context's pointer. Returns true when a key was captured.
    pub fn update(&mut self, ctx: &mut Context) -> bool {
        let pointer = ctx.pointer();
        self.update_at(ctx, pointer)
    }

    /// Updates at an explicit pointer. Returns true when a key was captured.
    ///
    /// Escape or a right click cancels listening and is never captured.
    pub fn update_at(&mut self, ctx: &mut Context, pointer: Vec2) -> bool {
        let response = self.control.interact_rect(ctx, pointer, self.rect);
        if response.clicked {
            self.control.play_click(ctx);
            self.listening = true;
            return false;
        }
        if !self.listening {
            return false;
        }

        let input = ctx.input();
        if input.key_pressed(Key::Escape) || input.mouse_clicked(MouseButton::Right) {
            self.listening = false;
            return false;
        }
        if let Some(key) = input.first_key_pressed() {
            self.key = key;
            self.listening = false;
            debug!(key = key.name(), "keybind captured");
            return true;
        }
        false
    }

    /// Text drawn for the current state.
    #[must_use]
    pub fn label(&self) -> String {
        if self.listening {
            format!("| {} |", self.key.name())
        } else {
            self.key.name().to_owned()
        }
    }

    /// Draws the field with the key name centered.
    pub fn draw(&self, renderer: &mut UIRenderer, text: TextStyle, style: KeybindStyle) {
        let col = if self.is_hovered() || self.listening {
            style.text_hover
        } else {
            style.text
        };
        renderer.rect(self.rect, style.background);
        renderer.text_centered(&self.label(), self.rect, text, 1.0, col);
    }
}

impl Widget for KeybindInput {
    fn control(&self) -> &Control {
        &self.control
    }

    fn control_mut(&mut self) -> &mut Control {
        &mut self.control
    }

    fn bounds(&self) -> Rect {
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INSIDE: Vec2 = Vec2::new(5.0, 5.0);

    fn listening() -> (Context, KeybindInput) {
        let mut ctx = Context::default();
        let mut kb = KeybindInput::new(Rect::new(0.0, 0.0, 120.0, 30.0), Key::E);
        ctx.input_mut().mouse_button_down(MouseButton::Left);
        assert!(!kb.update_at(&mut ctx, INSIDE));
        assert!(kb.is_listening());
        (ctx, kb)
    }

    #[test]
    fn test_capture_first_key() {
        let (mut ctx, mut kb) = listening();
        assert_eq!(kb.label(), "| E |");

        ctx.begin_frame();
        ctx.input_mut().key_down(Key::F5);
        ctx.input_mut().key_down(Key::G);
        assert!(kb.update_at(&mut ctx, Vec2::new(500.0, 500.0)));
        assert_eq!(kb.value(), Key::F5);
        assert!(!kb.is_listening());
        assert_eq!(kb.label(), "F5");
    }

    #[test]
    fn test_escape_cancels() {
        let (mut ctx, mut kb) = listening();

        ctx.begin_frame();
        ctx.input_mut().key_down(Key::Escape);
        assert!(!kb.update_at(&mut ctx, INSIDE));
        assert!(!kb.is_listening());
        assert_eq!(kb.value(), Key::E);
    }

    #[test]
    fn test_right_click_cancels() {
        let (mut ctx, mut kb) = listening();

        ctx.begin_frame();
        ctx.input_mut().mouse_button_down(MouseButton::Right);
        ctx.input_mut().key_down(Key::Q);
        assert!(!kb.update_at(&mut ctx, INSIDE));
        assert_eq!(kb.value(), Key::E);
    }

    #[test]
    fn test_keys_ignored_when_idle() {
        let mut ctx = Context::default();
        let mut kb = KeybindInput::new(Rect::new(0.0, 0.0, 120.0, 30.0), Key::E);
        ctx.input_mut().key_down(Key::Q);
        assert!(!kb.update_at(&mut ctx, INSIDE));
        assert_eq!(kb.value(), Key::E);
    }
}

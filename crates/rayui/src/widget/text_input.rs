//! Single-line text field.

use crate::config::TEXT_CAPACITY;
use crate::context::{Context, SoundId};
use crate::input::{Key, MouseButton};
use crate::layout::{Rect, Vec2};
use crate::render::UIRenderer;
use crate::style::{Color, TextStyle};

use super::core::{Control, Widget};

/// Which characters a text input accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputType {
    /// Anything.
    #[default]
    Text,
    /// Digits only.
    Int,
    /// Digits and '.'.
    Float,
    /// Anything, drawn masked.
    Password,
}

impl InputType {
    /// Returns true if `c` may be typed into this kind of field.
    #[must_use]
    pub fn accepts(self, c: char) -> bool {
        match self {
            Self::Text | Self::Password => true,
            Self::Int => c.is_ascii_digit(),
            Self::Float => c.is_ascii_digit() || c == '.',
        }
    }
}

/// Appearance of a text input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextInputStyle {
    /// Field fill.
    pub background: Color,
    /// Text color.
    pub text: Color,
    /// Text color while hovered or focused.
    pub text_hover: Color,
}

impl Default for TextInputStyle {
    fn default() -> Self {
        Self {
            background: Color::LIGHTGRAY,
            text: Color::DARKGRAY,
            text_hover: Color::BLACK,
        }
    }
}

/// Auto-repeat state of a held backspace.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct BackspaceRepeat {
    /// When the key went down, while it is held.
    held_since: Option<f64>,
    /// Time of the most recent deletion.
    last_delete: f64,
}

/// A focusable single-line text field.
#[derive(Debug, Clone, PartialEq)]
pub struct TextInput {
    rect: Rect,
    text: String,
    input_type: InputType,
    focused: bool,
    /// Initial text already cleared by the first keystroke since focus.
    cleared: bool,
    backspace: BackspaceRepeat,
    control: Control,
}

impl TextInput {
    /// Creates an unfocused input. `initial` is truncated to capacity.
    #[must_use]
    pub fn new(rect: Rect, initial: &str, input_type: InputType) -> Self {
        Self {
            rect,
            text: truncated(initial),
            input_type,
            focused: false,
            cleared: false,
            backspace: BackspaceRepeat::default(),
            control: Control::new(),
        }
    }

    /// Adds hover and click sounds.
    #[must_use]
    pub fn with_sounds(mut self, hover: SoundId, click: SoundId) -> Self {
        self.control.set_sounds(Some(hover), Some(click));
        self
    }

    /// Returns the text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.text
    }

    /// Replaces the text, truncated to capacity. The next keystroke clears it.
    pub fn set_value(&mut self, value: &str) {
        self.text = truncated(value);
        self.cleared = false;
    }

    /// Returns the accepted character class.
    #[must_use]
    pub const fn input_type(&self) -> InputType {
        self.input_type
    }

    /// Returns true while the field has keyboard focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Updates at the context's pointer. Returns true when the text changed.
    pub fn update(&mut self, ctx: &mut Context) -> bool {
        let pointer = ctx.pointer();
        self.update_at(ctx, pointer)
    }

    /// Updates at an explicit pointer. Returns true when the text changed.
    ///
    /// A left press anywhere moves focus to or away from the field.
    pub fn update_at(&mut self, ctx: &mut Context, pointer: Vec2) -> bool {
        let response = self.control.interact_rect(ctx, pointer, self.rect);
        if ctx.input().mouse_clicked(MouseButton::Left) {
            self.focused = response.hovered;
            if self.focused {
                self.cleared = false;
                self.control.play_click(ctx);
            }
        }
        if !self.focused {
            self.backspace = BackspaceRepeat::default();
            return false;
        }

        let before_len = self.text.len();
        let mut changed = false;
        for c in ctx.input().typed_chars() {
            if !self.cleared {
                changed |= !self.text.is_empty();
                self.text.clear();
                self.cleared = true;
            }
            if !self.input_type.accepts(c) {
                continue;
            }
            if self.text.chars().count() < TEXT_CAPACITY {
                self.text.push(c);
            }
        }
        changed |= self.text.len() != before_len;

        changed | self.handle_backspace(ctx)
    }

    fn handle_backspace(&mut self, ctx: &Context) -> bool {
        let now = ctx.now();
        let config = ctx.config();
        if !ctx.input().key_held(Key::Backspace) {
            self.backspace = BackspaceRepeat::default();
            return false;
        }

        match self.backspace.held_since {
            None => {
                self.backspace = BackspaceRepeat {
                    held_since: Some(now),
                    last_delete: now,
                };
                self.text.pop().is_some()
            }
            Some(since) => {
                let repeating = now - since > config.backspace_initial_delay;
                if repeating && now - self.backspace.last_delete >= config.backspace_repeat {
                    self.backspace.last_delete = now;
                    self.text.pop().is_some()
                } else {
                    false
                }
            }
        }
    }

    /// Draws the field. `caret_visible` is the blink phase for this frame,
    /// usually [`Context::caret_visible`].
    pub fn draw(&self, renderer: &mut UIRenderer, text: TextStyle, style: TextInputStyle, caret_visible: bool) {
        let col = if self.is_hovered() || self.focused {
            style.text_hover
        } else {
            style.text
        };
        renderer.rect(self.rect, style.background);

        let mut shown = match self.input_type {
            InputType::Password => "*".repeat(self.text.chars().count()),
            _ => self.text.clone(),
        };
        if self.focused && caret_visible {
            shown.push('_');
        }

        let position = Vec2::new(self.rect.x + 8.0, self.rect.y + (self.rect.height - text.size) / 2.0);
        renderer.text(shown, position, text, 1.0, col);
    }
}

impl Widget for TextInput {
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

fn truncated(s: &str) -> String {
    s.chars().take(TEXT_CAPACITY).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderCommand;

    const INSIDE: Vec2 = Vec2::new(10.0, 10.0);

    fn focused(initial: &str, input_type: InputType) -> (Context, TextInput) {
        let mut ctx = Context::default();
        let mut input = TextInput::new(Rect::new(0.0, 0.0, 200.0, 30.0), initial, input_type);
        ctx.input_mut().mouse_button_down(MouseButton::Left);
        input.update_at(&mut ctx, INSIDE);
        ctx.begin_frame();
        ctx.input_mut().mouse_button_up(MouseButton::Left);
        assert!(input.is_focused());
        (ctx, input)
    }

    fn type_text(ctx: &mut Context, input: &mut TextInput, text: &str) -> bool {
        ctx.begin_frame();
        ctx.input_mut().text(text);
        input.update_at(ctx, INSIDE)
    }

    fn drawn(input: &TextInput, caret: bool) -> String {
        let mut renderer = UIRenderer::default();
        input.draw(&mut renderer, TextStyle::default(), TextInputStyle::default(), caret);
        match &renderer.commands()[1] {
            RenderCommand::Text { text, .. } => text.clone(),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_first_keystroke_clears_initial_text() {
        let (mut ctx, mut input) = focused("hello", InputType::Text);
        assert!(type_text(&mut ctx, &mut input, "ab"));
        assert_eq!(input.value(), "ab");

        type_text(&mut ctx, &mut input, "c");
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_rejected_char_still_clears() {
        let (mut ctx, mut input) = focused("42", InputType::Int);
        assert!(type_text(&mut ctx, &mut input, "x"));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_filters() {
        let (mut ctx, mut input) = focused("", InputType::Float);
        type_text(&mut ctx, &mut input, "1a.5-");
        assert_eq!(input.value(), "1.5");

        let (mut ctx, mut input) = focused("", InputType::Int);
        type_text(&mut ctx, &mut input, "1.5");
        assert_eq!(input.value(), "15");
    }

    #[test]
    fn test_unfocused_ignores_typing() {
        let mut ctx = Context::default();
        let mut input = TextInput::new(Rect::new(0.0, 0.0, 200.0, 30.0), "keep", InputType::Text);
        ctx.input_mut().text("zz");
        assert!(!input.update_at(&mut ctx, INSIDE));
        assert_eq!(input.value(), "keep");
    }

    #[test]
    fn test_press_outside_blurs() {
        let (mut ctx, mut input) = focused("", InputType::Text);
        ctx.input_mut().mouse_button_down(MouseButton::Left);
        input.update_at(&mut ctx, Vec2::new(500.0, 500.0));
        assert!(!input.is_focused());
    }

    #[test]
    fn test_capacity() {
        let (mut ctx, mut input) = focused("", InputType::Text);
        type_text(&mut ctx, &mut input, &"x".repeat(TEXT_CAPACITY));
        assert_eq!(input.value().len(), TEXT_CAPACITY);

        assert!(!type_text(&mut ctx, &mut input, "y"));
        assert_eq!(input.value().len(), TEXT_CAPACITY);
        assert!(!input.value().contains('y'));
    }

    #[test]
    fn test_backspace_repeat() {
        let (mut ctx, mut input) = focused("", InputType::Text);
        type_text(&mut ctx, &mut input, "abcdef");

        ctx.begin_frame();
        ctx.input_mut().set_time(1.0);
        ctx.input_mut().key_down(Key::Backspace);
        assert!(input.update_at(&mut ctx, INSIDE));
        assert_eq!(input.value(), "abcde");

        // Held, but inside the initial delay.
        ctx.begin_frame();
        ctx.input_mut().set_time(1.2);
        assert!(!input.update_at(&mut ctx, INSIDE));
        assert_eq!(input.value(), "abcde");

        ctx.begin_frame();
        ctx.input_mut().set_time(1.35);
        assert!(input.update_at(&mut ctx, INSIDE));
        assert_eq!(input.value(), "abcd");

        // Too soon after the last repeat.
        ctx.begin_frame();
        ctx.input_mut().set_time(1.36);
        input.update_at(&mut ctx, INSIDE);
        assert_eq!(input.value(), "abcd");

        ctx.begin_frame();
        ctx.input_mut().set_time(1.4);
        input.update_at(&mut ctx, INSIDE);
        assert_eq!(input.value(), "abc");

        ctx.begin_frame();
        ctx.input_mut().key_up(Key::Backspace);
        ctx.input_mut().set_time(1.5);
        input.update_at(&mut ctx, INSIDE);

        ctx.begin_frame();
        ctx.input_mut().key_down(Key::Backspace);
        ctx.input_mut().set_time(1.51);
        input.update_at(&mut ctx, INSIDE);
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_refocus_restarts_backspace_delay() {
        let (mut ctx, mut input) = focused("", InputType::Text);
        type_text(&mut ctx, &mut input, "abcdef");

        ctx.begin_frame();
        ctx.input_mut().set_time(1.0);
        ctx.input_mut().key_down(Key::Backspace);
        input.update_at(&mut ctx, INSIDE);
        assert_eq!(input.value(), "abcde");

        // Blur and refocus while backspace stays held.
        ctx.begin_frame();
        ctx.input_mut().set_time(1.1);
        ctx.input_mut().mouse_button_down(MouseButton::Left);
        input.update_at(&mut ctx, Vec2::new(500.0, 500.0));
        assert!(!input.is_focused());

        ctx.begin_frame();
        ctx.input_mut().set_time(1.2);
        ctx.input_mut().mouse_button_up(MouseButton::Left);
        input.update_at(&mut ctx, Vec2::new(500.0, 500.0));

        ctx.begin_frame();
        ctx.input_mut().set_time(2.0);
        ctx.input_mut().mouse_button_down(MouseButton::Left);
        input.update_at(&mut ctx, INSIDE);
        assert!(input.is_focused());
        assert_eq!(input.value(), "abcd");

        ctx.begin_frame();
        ctx.input_mut().set_time(2.05);
        ctx.input_mut().mouse_button_up(MouseButton::Left);
        assert!(!input.update_at(&mut ctx, INSIDE));
        assert_eq!(input.value(), "abcd");
    }

    #[test]
    fn test_set_value_rearms_clear() {
        let (mut ctx, mut input) = focused("", InputType::Text);
        type_text(&mut ctx, &mut input, "abc");
        input.set_value("preset");
        type_text(&mut ctx, &mut input, "z");
        assert_eq!(input.value(), "z");
    }

    #[test]
    fn test_password_mask_and_caret() {
        let (_, input) = focused("secret", InputType::Password);
        assert_eq!(drawn(&input, false), "******");
        assert_eq!(drawn(&input, true), "******_");

        let unfocused = TextInput::new(Rect::new(0.0, 0.0, 10.0, 10.0), "ab", InputType::Text);
        assert_eq!(drawn(&unfocused, true), "ab");
    }
}

//! Two-state label that flips on click.

use crate::context::{Context, SoundId};
use crate::layout::{Rect, Vec2};
use crate::render::UIRenderer;
use crate::style::{Color, TextStyle};

use super::core::{Control, Widget};

const SPACING: f32 = 2.0;

/// Appearance of an outlined toggle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToggleStyle {
    /// Label color.
    pub text: Color,
    /// Label color while hovered.
    pub text_hover: Color,
    /// Background fill.
    pub background: Color,
    /// Outline stroke; zero disables it.
    pub outline_width: f32,
    /// Outline color.
    pub outline: Color,
}

impl Default for ToggleStyle {
    fn default() -> Self {
        Self {
            text: Color::BLACK,
            text_hover: Color::DARKGRAY,
            background: Color::LIGHTGRAY,
            outline_width: 2.0,
            outline: Color::BLACK,
        }
    }
}

/// A label showing one of two captions and flipping a boolean on click.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleLabel {
    rect: Rect,
    value: bool,
    on_label: String,
    off_label: String,
    control: Control,
}

impl ToggleLabel {
    /// Creates a silent toggle.
    #[must_use]
    pub fn new(
        rect: Rect,
        initial: bool,
        on_label: impl Into<String>,
        off_label: impl Into<String>,
    ) -> Self {
        Self {
            rect,
            value: initial,
            on_label: on_label.into(),
            off_label: off_label.into(),
            control: Control::new(),
        }
    }

    /// Adds hover and click sounds.
    #[must_use]
    pub fn with_sounds(mut self, hover: SoundId, click: SoundId) -> Self {
        self.control.set_sounds(Some(hover), Some(click));
        self
    }

    /// Returns the current value.
    #[must_use]
    pub const fn value(&self) -> bool {
        self.value
    }

    /// Sets the value.
    pub fn set_value(&mut self, value: bool) {
        self.value = value;
    }

    /// Returns the caption for the current value.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.value {
            &self.on_label
        } else {
            &self.off_label
        }
    }

    /// Updates at the context's pointer. Returns true when the value flipped.
    pub fn update(&mut self, ctx: &mut Context) -> bool {
        let pointer = ctx.pointer();
        self.update_at(ctx, pointer)
    }

    /// Updates at an explicit pointer. Returns true when the value flipped.
    pub fn update_at(&mut self, ctx: &mut Context, pointer: Vec2) -> bool {
        let response = self.control.interact_rect(ctx, pointer, self.rect);
        if response.clicked {
            self.control.play_click(ctx);
            self.value = !self.value;
        }
        response.clicked
    }

    /// Draws background and the caption at the top-left.
    pub fn draw(&self, renderer: &mut UIRenderer, text: TextStyle, color: Color, hover_color: Color, background: Color) {
        let col = if self.is_hovered() { hover_color } else { color };
        renderer.rect(self.rect, background);
        renderer.text(
            self.label(),
            Vec2::new(self.rect.x + 5.0, self.rect.y + 5.0),
            text,
            SPACING,
            col,
        );
    }

    /// Draws background, outline and the centered caption.
    pub fn draw_ex(&self, renderer: &mut UIRenderer, text: TextStyle, style: ToggleStyle) {
        let col = if self.is_hovered() { style.text_hover } else { style.text };
        renderer.rect(self.rect, style.background);
        renderer.rect_outline(self.rect, style.outline_width, style.outline);
        renderer.text_centered(self.label(), self.rect, text, SPACING, col);
    }
}

impl Widget for ToggleLabel {
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
    use crate::input::MouseButton;
    use crate::render::RenderCommand;

    #[test]
    fn test_click_flips_value() {
        let mut ctx = Context::default();
        let mut toggle = ToggleLabel::new(Rect::new(0.0, 0.0, 80.0, 30.0), false, "ON", "OFF");
        let inside = Vec2::new(10.0, 10.0);

        assert_eq!(toggle.label(), "OFF");
        ctx.input_mut().mouse_button_down(MouseButton::Left);
        assert!(toggle.update_at(&mut ctx, inside));
        assert!(toggle.value());
        assert_eq!(toggle.label(), "ON");

        // Held button is not a new click.
        ctx.begin_frame();
        assert!(!toggle.update_at(&mut ctx, inside));
        assert!(toggle.value());
    }

    #[test]
    fn test_draw_uses_current_label() {
        let mut toggle = ToggleLabel::new(Rect::new(0.0, 0.0, 80.0, 30.0), false, "ON", "OFF");
        toggle.set_value(true);
        let mut renderer = UIRenderer::default();

        toggle.draw(&mut renderer, TextStyle::default(), Color::BLACK, Color::GRAY, Color::WHITE);
        match &renderer.commands()[1] {
            RenderCommand::Text { text, position, .. } => {
                assert_eq!(text, "ON");
                assert_eq!(*position, Vec2::new(5.0, 5.0));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}

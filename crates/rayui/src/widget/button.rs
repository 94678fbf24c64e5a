//! Push button.

use crate::context::{Context, SoundId};
use crate::layout::{Rect, Vec2};
use crate::render::{RenderCommand, UIRenderer};
use crate::style::{Color, TextStyle};

use super::core::{Control, Widget};

/// Corner roundness of the filled background.
const ROUNDNESS: f32 = 0.1;

/// Glyph spacing of button labels.
const SPACING: f32 = 2.0;

/// Appearance of a button drawn with a background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
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
    /// Label offset while the button is held.
    pub press_offset: Vec2,
    /// Label shadow, drawn at the press offset from the label.
    pub shadow: Option<Color>,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            text: Color::BLACK,
            text_hover: Color::DARKGRAY,
            background: Color::LIGHTGRAY,
            outline_width: 2.0,
            outline: Color::BLACK,
            press_offset: Vec2::new(2.0, 2.0),
            shadow: None,
        }
    }
}

/// A clickable button with a centered label.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    rect: Rect,
    text: String,
    /// Left button held over the button at the last update.
    down: bool,
    control: Control,
}

impl Button {
    /// Creates a silent button.
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            text: text.into(),
            down: false,
            control: Control::new(),
        }
    }

    /// Adds hover and click sounds.
    #[must_use]
    pub fn with_sounds(mut self, hover: SoundId, click: SoundId) -> Self {
        self.control.set_sounds(Some(hover), Some(click));
        self
    }

    /// Returns the label.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the label.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Returns true while the button is pressed and held.
    #[must_use]
    pub const fn is_down(&self) -> bool {
        self.down
    }

    /// Updates at the context's pointer. Returns true on the click edge.
    pub fn update(&mut self, ctx: &mut Context) -> bool {
        let pointer = ctx.pointer();
        self.update_at(ctx, pointer)
    }

    /// Updates at an explicit pointer. Returns true on the click edge.
    pub fn update_at(&mut self, ctx: &mut Context, pointer: Vec2) -> bool {
        let response = self.control.interact_rect(ctx, pointer, self.rect);
        self.down = response.down;
        if response.clicked {
            self.control.play_click(ctx);
        }
        response.clicked
    }

    /// Draws only the label.
    pub fn draw(&self, renderer: &mut UIRenderer, text: TextStyle, color: Color, hover_color: Color) {
        let col = if self.is_hovered() { hover_color } else { color };
        renderer.text_centered(&self.text, self.rect, text, SPACING, col);
    }

    /// Draws background, outline and label; the label shifts by (2, 2)
    /// while held. `press_offset` and `shadow` of the style are ignored.
    pub fn draw_ex(&self, renderer: &mut UIRenderer, text: TextStyle, style: ButtonStyle) {
        self.draw_pro(
            renderer,
            text,
            ButtonStyle {
                press_offset: Vec2::new(2.0, 2.0),
                shadow: None,
                ..style
            },
        );
    }

    /// Draws background, outline, optional shadow and label.
    pub fn draw_pro(&self, renderer: &mut UIRenderer, text: TextStyle, style: ButtonStyle) {
        let col = if self.is_hovered() { style.text_hover } else { style.text };

        renderer.push(RenderCommand::RoundedRect {
            bounds: self.rect,
            roundness: ROUNDNESS,
            color: style.background,
        });
        if style.outline_width > 0.0 {
            renderer.push(RenderCommand::RoundedRectOutline {
                bounds: self.rect.expand(style.outline_width / 2.0),
                roundness: ROUNDNESS,
                color: style.outline,
            });
        }

        let size = renderer.measure_text(text, &self.text, SPACING);
        let mut position = Vec2::new(
            self.rect.x + self.rect.width / 2.0 - size.x / 2.0,
            self.rect.y + self.rect.height / 2.0 - size.y / 2.0,
        );
        if self.down {
            position = position + style.press_offset;
        }

        if let Some(shadow) = style.shadow {
            renderer.text(self.text.as_str(), position + style.press_offset, text, SPACING, shadow);
        }
        renderer.text(self.text.as_str(), position, text, SPACING, col);
    }
}

impl Widget for Button {
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

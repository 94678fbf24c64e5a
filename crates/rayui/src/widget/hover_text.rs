//! Plain text label that only exists to carry a tooltip.

use crate::context::Context;
use crate::layout::{Rect, Vec2};
use crate::render::UIRenderer;
use crate::style::{Color, TextStyle};

use super::core::{Control, Hoverable, Widget};

/// A text label whose tooltip repeats its own text.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverText {
    text: String,
    position: Vec2,
    /// Used for the hit rectangle; should match what `draw` is given.
    text_style: TextStyle,
    /// Hit rectangle from the last update.
    hit: Rect,
    control: Control,
}

impl HoverText {
    /// Creates a label at `position`. The tooltip is anchored at the top-left
    /// corner and must still be enabled.
    #[must_use]
    pub fn new(text: impl Into<String>, position: Vec2, delay: f32) -> Self {
        let text = text.into();
        let hover = Hoverable::new().with_info(text.clone(), true).with_delay(delay);
        Self {
            text,
            position,
            text_style: TextStyle::default(),
            hit: Rect::from_pos_size(position, Vec2::ZERO),
            control: Control::with_hover(hover),
        }
    }

    /// Sets the text style used to measure the hit rectangle.
    #[must_use]
    pub fn with_text_style(mut self, style: TextStyle) -> Self {
        self.text_style = style;
        self
    }

    /// Returns the label text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Tracks hover at the context's pointer.
    pub fn update(&mut self, ctx: &mut Context) {
        let pointer = ctx.pointer();
        self.update_at(ctx, pointer);
    }

    /// Tracks hover at an explicit pointer position.
    pub fn update_at(&mut self, ctx: &mut Context, pointer: Vec2) {
        let size = ctx.renderer().measure_text(self.text_style, &self.text, 1.0);
        self.hit = Rect::from_pos_size(self.position, size);
        self.control.interact_rect(ctx, pointer, self.hit);
    }

    /// Draws the label in off-white.
    pub fn draw(&self, renderer: &mut UIRenderer, text: TextStyle) {
        self.draw_ex(renderer, text, Color::RAYWHITE);
    }

    /// Draws the label in a custom color.
    pub fn draw_ex(&self, renderer: &mut UIRenderer, text: TextStyle, color: Color) {
        renderer.text(self.text.as_str(), self.position, text, 1.0, color);
    }
}

impl Widget for HoverText {
    fn control(&self) -> &Control {
        &self.control
    }

    fn control_mut(&mut self) -> &mut Control {
        &mut self.control
    }

    fn bounds(&self) -> Rect {
        self.hit
    }
}

//! Number display with increment and decrement arrows.

use crate::context::{Context, SoundId};
use crate::layout::{Rect, Triangle, Vec2};
use crate::render::{RenderCommand, UIRenderer};
use crate::style::{Color, TextStyle};

use super::core::{Control, Widget};

/// One of the two arrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arrow {
    /// Left arrow, subtracts `step`.
    Decrement,
    /// Right arrow, adds `step`.
    Increment,
}

/// Appearance of a numeric input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericInputStyle {
    /// Number color.
    pub text: Color,
    /// Display fill.
    pub background: Color,
    /// Arrow fill.
    pub arrow: Color,
    /// Arrow fill under the pointer.
    pub arrow_hover: Color,
    /// Display outline; zero disables it.
    pub outline_width: f32,
    /// Outline color.
    pub outline: Color,
}

impl Default for NumericInputStyle {
    fn default() -> Self {
        Self {
            text: Color::RAYWHITE,
            background: Color::DARKGRAY,
            arrow: Color::DARKGRAY,
            arrow_hover: Color::BLACK,
            outline_width: 2.0,
            outline: Color::BLACK,
        }
    }
}

/// A clamped number stepped by clicking flanking triangles.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericInput {
    rect: Rect,
    value: f32,
    min: f32,
    max: f32,
    step: f32,
    decimals: usize,
    /// Arrow under the pointer at the last update.
    hovered_arrow: Option<Arrow>,
    control: Control,
}

impl NumericInput {
    /// Creates a numeric input; `initial` is clamped to `[min, max]`.
    /// Reversed bounds are swapped. A NaN bound leaves that side open, and a
    /// NaN `initial` starts at `min`.
    #[must_use]
    pub fn new(rect: Rect, initial: f32, min: f32, max: f32, step: f32, decimals: usize) -> Self {
        let min = if min.is_nan() { f32::MIN } else { min };
        let max = if max.is_nan() { f32::MAX } else { max };
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let initial = if initial.is_nan() { min } else { initial };
        Self {
            rect,
            value: initial.clamp(min, max),
            min,
            max,
            step,
            decimals,
            hovered_arrow: None,
            control: Control::new(),
        }
    }

    /// Adds hover and click sounds.
    #[must_use]
    pub fn with_sounds(mut self, hover: SoundId, click: SoundId) -> Self {
        self.control.set_sounds(Some(hover), Some(click));
        self
    }

    /// Returns the value.
    #[must_use]
    pub const fn value(&self) -> f32 {
        self.value
    }

    /// Sets the value, clamped. NaN is ignored.
    pub fn set_value(&mut self, value: f32) {
        if !value.is_nan() {
            self.value = value.clamp(self.min, self.max);
        }
    }

    /// Returns the value as displayed.
    #[must_use]
    pub fn formatted(&self) -> String {
        format!("{:.*}", self.decimals, self.value)
    }

    /// Triangle of an arrow, half the display height wide, outside the display.
    #[must_use]
    pub fn arrow(&self, arrow: Arrow) -> Triangle {
        let r = self.rect;
        let half = r.height / 2.0;
        let mid = r.y + half;
        match arrow {
            Arrow::Decrement => Triangle::new(
                Vec2::new(r.x - half, mid),
                Vec2::new(r.x, r.y),
                Vec2::new(r.x, r.bottom()),
            ),
            Arrow::Increment => Triangle::new(
                Vec2::new(r.right(), r.y),
                Vec2::new(r.right() + half, mid),
                Vec2::new(r.right(), r.bottom()),
            ),
        }
    }

    fn arrow_at(&self, pointer: Vec2) -> Option<Arrow> {
        [Arrow::Decrement, Arrow::Increment]
            .into_iter()
            .find(|&a| self.arrow(a).contains(pointer))
    }

    /// Updates at the context's pointer. Returns true when the value changed.
    pub fn update(&mut self, ctx: &mut Context) -> bool {
        let pointer = ctx.pointer();
        self.update_at(ctx, pointer)
    }

    /// Updates at an explicit pointer. Returns true when the value changed.
    pub fn update_at(&mut self, ctx: &mut Context, pointer: Vec2) -> bool {
        self.hovered_arrow = self.arrow_at(pointer);
        let hit = self.rect.contains(pointer) || self.hovered_arrow.is_some();
        let response = self.control.interact(ctx, hit);

        let Some(arrow) = self.hovered_arrow.filter(|_| response.clicked) else {
            return false;
        };
        self.control.play_click(ctx);

        let before = self.value;
        let delta = match arrow {
            Arrow::Decrement => -self.step,
            Arrow::Increment => self.step,
        };
        self.value = (self.value + delta).clamp(self.min, self.max);
        self.value != before
    }

    /// Draws display, arrows and the number.
    pub fn draw(&self, renderer: &mut UIRenderer, text: TextStyle, style: NumericInputStyle) {
        self.draw_ex(
            renderer,
            text,
            NumericInputStyle {
                outline_width: 0.0,
                ..style
            },
        );
    }

    /// Draws display, outline, arrows and the number.
    pub fn draw_ex(&self, renderer: &mut UIRenderer, text: TextStyle, style: NumericInputStyle) {
        renderer.rect(self.rect, style.background);
        renderer.rect_outline(self.rect, style.outline_width, style.outline);

        for arrow in [Arrow::Decrement, Arrow::Increment] {
            let tri = self.arrow(arrow);
            let color = if self.hovered_arrow == Some(arrow) {
                style.arrow_hover
            } else {
                style.arrow
            };
            renderer.push(RenderCommand::Triangle {
                points: [tri.a, tri.b, tri.c],
                color,
            });
        }

        renderer.text_centered(&self.formatted(), self.rect, text, 1.0, style.text);
    }
}

impl Widget for NumericInput {
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

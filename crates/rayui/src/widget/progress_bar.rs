//! Horizontal progress bar.

use crate::context::Context;
use crate::layout::{Rect, Vec2};
use crate::render::UIRenderer;
use crate::style::Color;

use super::core::{Control, Widget};

fn clamp_progress(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Progress in `[0, 1]`, drawn as a left-to-right fill.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    bar: Rect,
    progress: f32,
    control: Control,
}

impl ProgressBar {
    /// Creates a bar; `initial` is clamped.
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32, initial: f32) -> Self {
        Self {
            bar: Rect::new(x, y, width, height),
            progress: clamp_progress(initial),
            control: Control::new(),
        }
    }

    /// Returns the progress.
    #[must_use]
    pub const fn value(&self) -> f32 {
        self.progress
    }

    /// Sets the progress, clamped. NaN counts as empty.
    pub fn set_value(&mut self, value: f32) {
        self.progress = clamp_progress(value);
    }

    /// Adds `delta` to the progress, clamped.
    pub fn increment(&mut self, delta: f32) {
        self.set_value(self.progress + delta);
    }

    /// Returns true at 100%.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.progress >= 1.0
    }

    /// Returns true at 0%.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.progress <= 0.0
    }

    /// Tracks hover at the context's pointer.
    pub fn update(&mut self, ctx: &mut Context) {
        let pointer = ctx.pointer();
        self.update_at(ctx, pointer);
    }

    /// Tracks hover at an explicit pointer. Progress only changes through
    /// the setters.
    pub fn update_at(&mut self, ctx: &mut Context, pointer: Vec2) {
        self.control.interact_rect(ctx, pointer, self.bar);
    }

    fn fill(&self) -> Rect {
        Rect::new(self.bar.x, self.bar.y, self.bar.width * self.progress, self.bar.height)
    }

    /// Draws the track and the filled part.
    pub fn draw(&self, renderer: &mut UIRenderer, back: Color, fill: Color) {
        renderer.rect(self.bar, back);
        renderer.rect(self.fill(), fill);
    }

    /// Draws the track, the filled part and an outline.
    pub fn draw_ex(&self, renderer: &mut UIRenderer, back: Color, fill: Color, outline_width: f32, outline: Color) {
        self.draw(renderer, back, fill);
        renderer.rect_outline(self.bar, outline_width, outline);
    }
}

impl Widget for ProgressBar {
    fn control(&self) -> &Control {
        &self.control
    }

    fn control_mut(&mut self) -> &mut Control {
        &mut self.control
    }

    fn bounds(&self) -> Rect {
        self.bar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderCommand;

    #[test]
    fn test_clamping() {
        let mut bar = ProgressBar::new(0.0, 0.0, 100.0, 10.0, 3.0);
        assert!(bar.is_full());

        bar.set_value(-0.5);
        assert!(bar.is_empty());
        assert_eq!(bar.value(), 0.0);

        bar.set_value(f32::NAN);
        assert_eq!(bar.value(), 0.0);
    }

    #[test]
    fn test_increment_saturates() {
        let mut bar = ProgressBar::new(0.0, 0.0, 100.0, 10.0, 0.0);
        for _ in 0..6 {
            bar.increment(0.25);
        }
        assert_eq!(bar.value(), 1.0);
        bar.increment(-0.25);
        assert!(!bar.is_full());
        assert!(!bar.is_empty());
    }

    #[test]
    fn test_update_tracks_hover_only() {
        let mut ctx = Context::default();
        let mut bar = ProgressBar::new(0.0, 0.0, 100.0, 10.0, 0.4);
        ctx.input_mut().mouse_button_down(crate::input::MouseButton::Left);
        bar.update_at(&mut ctx, Vec2::new(50.0, 5.0));
        assert!(bar.is_hovered());
        assert!((bar.value() - 0.4).abs() < f32::EPSILON);
    }

    #[test]
    fn test_fill_width() {
        let bar = ProgressBar::new(10.0, 20.0, 200.0, 10.0, 0.25);
        let mut renderer = UIRenderer::default();
        bar.draw_ex(&mut renderer, Color::DARKGRAY, Color::GREEN, 2.0, Color::BLACK);

        let commands = renderer.commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(
            commands[1],
            RenderCommand::Rect {
                bounds: Rect::new(10.0, 20.0, 50.0, 10.0),
                color: Color::GREEN,
            }
        );
    }
}

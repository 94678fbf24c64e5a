//! Horizontal sliders: integer range and discrete options.
//!
//! Both kinds share the knob geometry and drag rules: a drag starts only on
//! a left press inside the knob, follows the pointer while the button is
//! held (wherever the pointer goes), and ends on release.

use crate::context::Context;
use crate::input::MouseButton;
use crate::layout::{Rect, Vec2};
use crate::render::UIRenderer;
use crate::style::Color;

use super::core::{Control, Widget};

/// Thickness of the slider bar.
pub const BAR_HEIGHT: f32 = 5.0;

/// Knob rectangle for a knob centered horizontally at `knob_x`.
fn knob_rect(bar: Rect, knob_x: f32) -> Rect {
    Rect::new(knob_x - 8.0, bar.y - 5.0, 16.0, 15.0)
}

/// Pointer position along the bar, clamped to [0, 1].
fn pointer_ratio(bar: Rect, pointer: Vec2) -> f32 {
    if bar.width <= 0.0 {
        return 0.0;
    }
    ((pointer.x - bar.x) / bar.width).clamp(0.0, 1.0)
}

/// Drag state shared by both slider kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct KnobDrag {
    dragging: bool,
}

impl KnobDrag {
    /// Advances the drag. Returns the new ratio while dragging.
    fn step(&mut self, ctx: &Context, pointer: Vec2, bar: Rect, knob: Rect) -> Option<f32> {
        let input = ctx.input();
        if input.mouse_clicked(MouseButton::Left) && knob.contains(pointer) {
            self.dragging = true;
        }
        if input.mouse_released(MouseButton::Left) {
            self.dragging = false;
        }
        self.dragging.then(|| pointer_ratio(bar, pointer))
    }
}

/// Slider over an integer range.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    bar: Rect,
    /// Knob position in [0, 1].
    ratio: f32,
    min: i32,
    max: i32,
    drag: KnobDrag,
    control: Control,
}

impl Slider {
    /// Creates a slider; `initial` is the knob position in [0, 1].
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, min: i32, max: i32, initial: f32) -> Self {
        Self {
            bar: Rect::new(x, y, width, BAR_HEIGHT),
            ratio: initial.clamp(0.0, 1.0),
            min,
            max,
            drag: KnobDrag::default(),
            control: Control::new(),
        }
    }

    /// Returns the knob position in [0, 1].
    #[must_use]
    pub const fn ratio(&self) -> f32 {
        self.ratio
    }

    /// Moves the knob; clamped to [0, 1].
    pub fn set_ratio(&mut self, ratio: f32) {
        self.ratio = ratio.clamp(0.0, 1.0);
    }

    /// Returns the integer value, truncated toward `min`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn value(&self) -> i32 {
        let span = f64::from(self.max) - f64::from(self.min);
        (f64::from(self.min) + f64::from(self.ratio) * span) as i32
    }

    /// Returns true while the knob is being dragged.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.dragging
    }

    /// Returns the knob rectangle.
    #[must_use]
    pub fn knob(&self) -> Rect {
        knob_rect(self.bar, self.bar.x + self.ratio * self.bar.width)
    }

    /// Updates at the context's pointer. Returns true when the knob moved.
    pub fn update(&mut self, ctx: &mut Context) -> bool {
        let pointer = ctx.pointer();
        self.update_at(ctx, pointer)
    }

    /// Updates at an explicit pointer. Returns true when the knob moved.
    pub fn update_at(&mut self, ctx: &mut Context, pointer: Vec2) -> bool {
        let knob = self.knob();
        self.control
            .interact(ctx, self.bar.contains(pointer) || knob.contains(pointer));

        match self.drag.step(ctx, pointer, self.bar, knob) {
            Some(ratio) if ratio != self.ratio => {
                self.ratio = ratio;
                true
            }
            _ => false,
        }
    }

    /// Draws bar and knob.
    pub fn draw(&self, renderer: &mut UIRenderer, color: Color, knob_color: Color) {
        renderer.rect(self.bar, color);
        renderer.rect(self.knob(), knob_color);
    }
}

impl Widget for Slider {
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

/// Slider snapping to one of a list of options.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSlider {
    bar: Rect,
    options: Vec<String>,
    index: usize,
    drag: KnobDrag,
    control: Control,
}

impl OptionSlider {
    /// Creates an option slider. An out-of-range `initial` reads back as
    /// the first option.
    #[must_use]
    pub fn new<S: Into<String>>(
        x: f32,
        y: f32,
        width: f32,
        options: impl IntoIterator<Item = S>,
        initial: usize,
    ) -> Self {
        Self {
            bar: Rect::new(x, y, width, BAR_HEIGHT),
            options: options.into_iter().map(Into::into).collect(),
            index: initial,
            drag: KnobDrag::default(),
            control: Control::new(),
        }
    }

    /// Returns the selected index as stored.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Selects an option; out-of-range indices are ignored.
    pub fn set_index(&mut self, index: usize) {
        if index < self.options.len() {
            self.index = index;
        }
    }

    /// Returns the selected option, or the first one for an invalid index.
    /// Empty when there are no options.
    #[must_use]
    pub fn value(&self) -> &str {
        self.options
            .get(self.index)
            .or_else(|| self.options.first())
            .map_or("", String::as_str)
    }

    /// Returns the options.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Returns true while the knob is being dragged.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.dragging
    }

    /// Knob position in [0, 1] for the stored index.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self) -> f32 {
        let steps = self.options.len().saturating_sub(1);
        if steps == 0 {
            return 0.0;
        }
        (self.index as f32 / steps as f32).clamp(0.0, 1.0)
    }

    /// Returns the knob rectangle.
    #[must_use]
    pub fn knob(&self) -> Rect {
        knob_rect(self.bar, self.bar.x + self.ratio() * self.bar.width)
    }

    /// Updates at the context's pointer. Returns true when the selection changed.
    pub fn update(&mut self, ctx: &mut Context) -> bool {
        let pointer = ctx.pointer();
        self.update_at(ctx, pointer)
    }

    /// Updates at an explicit pointer. Returns true when the selection changed.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn update_at(&mut self, ctx: &mut Context, pointer: Vec2) -> bool {
        let knob = self.knob();
        self.control
            .interact(ctx, self.bar.contains(pointer) || knob.contains(pointer));

        let Some(ratio) = self.drag.step(ctx, pointer, self.bar, knob) else {
            return false;
        };
        let steps = self.options.len().saturating_sub(1);
        let index = (ratio * steps as f32 + 0.5) as usize;
        if index == self.index {
            return false;
        }
        self.index = index;
        true
    }

    /// Draws bar and knob.
    pub fn draw(&self, renderer: &mut UIRenderer, color: Color, knob_color: Color) {
        renderer.rect(self.bar, color);
        renderer.rect(self.knob(), knob_color);
    }
}

impl Widget for OptionSlider {
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

    fn press(ctx: &mut Context) {
        ctx.begin_frame();
        ctx.input_mut().mouse_button_down(MouseButton::Left);
    }

    fn hold(ctx: &mut Context) {
        ctx.begin_frame();
    }

    fn release(ctx: &mut Context) {
        ctx.begin_frame();
        ctx.input_mut().mouse_button_up(MouseButton::Left);
    }

    #[test]
    fn test_knob_geometry() {
        let slider = Slider::new(100.0, 50.0, 200.0, 0, 10, 0.5);
        assert_eq!(slider.knob(), Rect::new(192.0, 45.0, 16.0, 15.0));
    }

    #[test]
    fn test_drag_starts_on_knob_only() {
        let mut ctx = Context::default();
        let mut slider = Slider::new(0.0, 0.0, 100.0, 0, 100, 0.0);

        press(&mut ctx);
        assert!(!slider.update_at(&mut ctx, Vec2::new(50.0, 2.0)));
        assert!(!slider.is_dragging());
        assert_eq!(slider.value(), 0);
    }

    #[test]
    fn test_drag_follows_pointer_outside_bar() {
        let mut ctx = Context::default();
        let mut slider = Slider::new(0.0, 0.0, 100.0, 0, 100, 0.0);

        press(&mut ctx);
        slider.update_at(&mut ctx, Vec2::new(0.0, 2.0));
        assert!(slider.is_dragging());

        hold(&mut ctx);
        assert!(slider.update_at(&mut ctx, Vec2::new(75.0, 300.0)));
        assert_eq!(slider.value(), 75);

        hold(&mut ctx);
        slider.update_at(&mut ctx, Vec2::new(500.0, -40.0));
        assert!((slider.ratio() - 1.0).abs() < f32::EPSILON);
        assert_eq!(slider.value(), 100);

        release(&mut ctx);
        slider.update_at(&mut ctx, Vec2::new(20.0, 2.0));
        assert!(!slider.is_dragging());
        assert_eq!(slider.value(), 100);
    }

    #[test]
    fn test_value_truncates() {
        let slider = Slider::new(0.0, 0.0, 100.0, 0, 10, 0.99);
        assert_eq!(slider.value(), 9);

        let negative = Slider::new(0.0, 0.0, 100.0, -10, 10, 0.0);
        assert_eq!(negative.value(), -10);
    }

    #[test]
    fn test_full_i32_range() {
        let mut slider = Slider::new(0.0, 0.0, 100.0, i32::MIN, i32::MAX, 0.0);
        assert_eq!(slider.value(), i32::MIN);

        slider.set_ratio(0.5);
        assert!(slider.value().abs() <= 1);

        slider.set_ratio(1.0);
        assert_eq!(slider.value(), i32::MAX);
    }

    #[test]
    fn test_option_slider_rounds_to_nearest() {
        let mut ctx = Context::default();
        let mut slider = OptionSlider::new(0.0, 0.0, 100.0, ["low", "mid", "high"], 0);

        press(&mut ctx);
        slider.update_at(&mut ctx, Vec2::new(0.0, 2.0));

        hold(&mut ctx);
        assert!(!slider.update_at(&mut ctx, Vec2::new(24.0, 2.0)));
        assert_eq!(slider.value(), "low");

        hold(&mut ctx);
        assert!(slider.update_at(&mut ctx, Vec2::new(26.0, 2.0)));
        assert_eq!(slider.value(), "mid");

        hold(&mut ctx);
        slider.update_at(&mut ctx, Vec2::new(90.0, 2.0));
        assert_eq!(slider.value(), "high");
        assert_eq!(slider.index(), 2);
    }

    #[test]
    fn test_option_slider_invalid_index_reads_first() {
        let mut slider = OptionSlider::new(0.0, 0.0, 100.0, ["a", "b"], 7);
        assert_eq!(slider.value(), "a");

        slider.set_index(9);
        assert_eq!(slider.index(), 7);
        slider.set_index(1);
        assert_eq!(slider.value(), "b");
    }

    #[test]
    fn test_hover_covers_knob_overhang() {
        let mut ctx = Context::default();
        let mut slider = Slider::new(0.0, 10.0, 100.0, 0, 1, 0.0);

        // Above the bar but inside the knob.
        slider.update_at(&mut ctx, Vec2::new(2.0, 6.0));
        assert!(slider.is_hovered());
        slider.update_at(&mut ctx, Vec2::new(50.0, 6.0));
        assert!(!slider.is_hovered());
    }
}

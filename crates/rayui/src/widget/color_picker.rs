//! Color swatch with an expandable editing panel.
//!
//! Right-clicking the swatch opens a panel below it. HSV modes edit through
//! a hue x saturation field (value stays at full brightness); RGB modes edit
//! through three vertical channel sliders. Alpha modes add a vertical alpha
//! slider on the right. A left press picks the region under the pointer and
//! that region keeps the pointer until release.

use crate::context::Context;
use crate::input::MouseButton;
use crate::layout::{Rect, Vec2};
use crate::render::{RenderCommand, UIRenderer};
use crate::style::{Color, Hsv};

use super::core::{Control, Widget};

const SWATCH_HEIGHT: f32 = 24.0;
const PANEL_GAP: f32 = 4.0;
const PADDING: f32 = 6.0;
const BAR_WIDTH: f32 = 16.0;
const FIELD_COLUMNS: usize = 12;
const FIELD_ROWS: usize = 6;
const ALPHA_SEGMENTS: usize = 8;

/// Editing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorPickerMode {
    /// Three channel sliders.
    #[default]
    Rgb,
    /// Channel sliders plus alpha.
    Rgba,
    /// Hue x saturation field.
    Hsv,
    /// Field plus alpha.
    Hsva,
}

impl ColorPickerMode {
    /// Returns true if the mode edits alpha.
    #[must_use]
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba | Self::Hsva)
    }

    /// Returns true if the mode uses the hue x saturation field.
    #[must_use]
    pub const fn is_hsv(self) -> bool {
        matches!(self, Self::Hsv | Self::Hsva)
    }
}

/// Appearance of the picker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPickerStyle {
    /// Outline thickness; zero disables outlines.
    pub outline_width: f32,
    /// Outline color.
    pub outline: Color,
    /// Panel fill.
    pub background: Color,
}

impl Default for ColorPickerStyle {
    fn default() -> Self {
        Self {
            outline_width: 1.0,
            outline: Color::BLACK,
            background: Color::GRAY,
        }
    }
}

/// Region that owns the pointer during a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DragTarget {
    #[default]
    None,
    Field,
    Channel(usize),
    Alpha,
}

/// Sub-rectangles of the expanded panel.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PanelLayout {
    panel: Rect,
    field: Option<Rect>,
    channels: Option<[Rect; 3]>,
    alpha: Option<Rect>,
}

impl PanelLayout {
    fn target_at(&self, pointer: Vec2) -> DragTarget {
        if self.field.is_some_and(|r| r.contains(pointer)) {
            return DragTarget::Field;
        }
        if let Some(channels) = self.channels {
            if let Some(i) = channels.iter().position(|r| r.contains(pointer)) {
                return DragTarget::Channel(i);
            }
        }
        if self.alpha.is_some_and(|r| r.contains(pointer)) {
            return DragTarget::Alpha;
        }
        DragTarget::None
    }
}

/// Fraction of a vertical bar at the pointer, 1.0 at the top.
fn vertical_ratio(bar: Rect, pointer: Vec2) -> f32 {
    if bar.height <= 0.0 {
        return 0.0;
    }
    (1.0 - (pointer.y - bar.y) / bar.height).clamp(0.0, 1.0)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(ratio: f32) -> u8 {
    (ratio * 255.0).round().clamp(0.0, 255.0) as u8
}

/// An editable color.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPicker {
    position: Vec2,
    size: f32,
    color: Color,
    /// Kept separately so the field thumb survives gray colors.
    hue: f32,
    saturation: f32,
    mode: ColorPickerMode,
    expanded: bool,
    drag: DragTarget,
    control: Control,
}

impl ColorPicker {
    /// Creates a collapsed picker `size` pixels wide.
    #[must_use]
    pub fn new(x: f32, y: f32, size: f32, color: Color, mode: ColorPickerMode) -> Self {
        let hsv = color.to_hsv();
        Self {
            position: Vec2::new(x, y),
            size,
            color,
            hue: hsv.hue,
            saturation: hsv.saturation,
            mode,
            expanded: false,
            drag: DragTarget::None,
            control: Control::new(),
        }
    }

    /// Returns the color.
    #[must_use]
    pub const fn value(&self) -> Color {
        self.color
    }

    /// Replaces the color.
    pub fn set_value(&mut self, color: Color) {
        self.color = color;
        let hsv = color.to_hsv();
        self.hue = hsv.hue;
        self.saturation = hsv.saturation;
    }

    /// Returns the editing mode.
    #[must_use]
    pub const fn mode(&self) -> ColorPickerMode {
        self.mode
    }

    /// Returns true while the panel is open.
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Opens or closes the panel.
    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
        if !expanded {
            self.drag = DragTarget::None;
        }
    }

    /// Returns the swatch rectangle.
    #[must_use]
    pub fn swatch(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size, SWATCH_HEIGHT)
    }

    /// Returns the panel rectangle (meaningful while expanded).
    #[must_use]
    pub fn panel(&self) -> Rect {
        self.layout().panel
    }

    /// Returns the hue x saturation field, in HSV modes.
    #[must_use]
    pub fn field(&self) -> Option<Rect> {
        self.layout().field
    }

    /// Returns the channel sliders, in RGB modes.
    #[must_use]
    pub fn channel_bars(&self) -> Option<[Rect; 3]> {
        self.layout().channels
    }

    /// Returns the alpha slider, in alpha modes.
    #[must_use]
    pub fn alpha_bar(&self) -> Option<Rect> {
        self.layout().alpha
    }

    fn layout(&self) -> PanelLayout {
        let swatch = self.swatch();
        let panel = Rect::new(swatch.x, swatch.bottom() + PANEL_GAP, self.size, self.size);
        let content = panel.expand(-PADDING);

        let alpha = self.mode.has_alpha().then(|| {
            Rect::new(content.right() - BAR_WIDTH, content.y, BAR_WIDTH, content.height)
        });
        let main_width = if alpha.is_some() {
            content.width - BAR_WIDTH - PADDING
        } else {
            content.width
        };

        let (field, channels) = if self.mode.is_hsv() {
            (Some(Rect::new(content.x, content.y, main_width, content.height)), None)
        } else {
            let w = (main_width - 2.0 * PADDING) / 3.0;
            let bar = |i: f32| Rect::new(content.x + i * (w + PADDING), content.y, w, content.height);
            (None, Some([bar(0.0), bar(1.0), bar(2.0)]))
        };

        PanelLayout {
            panel,
            field,
            channels,
            alpha,
        }
    }

    /// Updates at the context's pointer. Returns true when the color changed.
    pub fn update(&mut self, ctx: &mut Context) -> bool {
        let pointer = ctx.pointer();
        self.update_at(ctx, pointer)
    }

    /// Updates at an explicit pointer. Returns true when the color changed.
    pub fn update_at(&mut self, ctx: &mut Context, pointer: Vec2) -> bool {
        let layout = self.layout();
        let over_swatch = self.swatch().contains(pointer);
        let hit = over_swatch || (self.expanded && layout.panel.contains(pointer));
        self.control.interact(ctx, hit);

        let input = ctx.input();
        if over_swatch && input.mouse_clicked(MouseButton::Right) {
            self.set_expanded(!self.expanded);
        }
        if !self.expanded {
            return false;
        }

        if input.mouse_clicked(MouseButton::Left) {
            self.drag = layout.target_at(pointer);
        }
        if !input.mouse_down(MouseButton::Left) {
            self.drag = DragTarget::None;
        }

        let before = self.color;
        match self.drag {
            DragTarget::None => {}
            DragTarget::Field => {
                if let Some(field) = layout.field {
                    self.apply_field(field, pointer);
                }
            }
            DragTarget::Channel(i) => {
                if let Some(channels) = layout.channels {
                    self.apply_channel(i, channels[i], pointer);
                }
            }
            DragTarget::Alpha => {
                if let Some(bar) = layout.alpha {
                    self.color.a = to_channel(vertical_ratio(bar, pointer));
                }
            }
        }
        self.color != before
    }

    fn apply_field(&mut self, field: Rect, pointer: Vec2) {
        let fx = if field.width > 0.0 {
            ((pointer.x - field.x) / field.width).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let fy = if field.height > 0.0 {
            ((pointer.y - field.y) / field.height).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.hue = fx * 360.0;
        self.saturation = fy;
        self.color = Color::from_hsv(Hsv::new(self.hue, self.saturation, 1.0)).with_alpha(self.color.a);
    }

    fn apply_channel(&mut self, index: usize, bar: Rect, pointer: Vec2) {
        let v = to_channel(vertical_ratio(bar, pointer));
        match index {
            0 => self.color.r = v,
            1 => self.color.g = v,
            _ => self.color.b = v,
        }
        let hsv = self.color.to_hsv();
        if hsv.saturation > 0.0 {
            self.hue = hsv.hue;
        }
        self.saturation = hsv.saturation;
    }

    /// Draws with the default style.
    pub fn draw(&self, renderer: &mut UIRenderer) {
        self.draw_ex(renderer, ColorPickerStyle::default());
    }

    /// Draws swatch and, while expanded, the panel.
    pub fn draw_ex(&self, renderer: &mut UIRenderer, style: ColorPickerStyle) {
        let swatch = self.swatch();
        if self.color.a < u8::MAX {
            renderer.rect(swatch, Color::LIGHTGRAY);
        }
        renderer.rect(swatch, self.color);
        renderer.rect_outline(swatch, style.outline_width, style.outline);

        if !self.expanded {
            return;
        }

        let layout = self.layout();
        renderer.rect(layout.panel, style.background);
        renderer.rect_outline(layout.panel, style.outline_width, style.outline);

        if let Some(field) = layout.field {
            self.draw_field(renderer, field);
            renderer.rect_outline(field, style.outline_width, style.outline);
        }
        if let Some(channels) = layout.channels {
            let values = [self.color.r, self.color.g, self.color.b];
            let tints = [Color::rgb(255, 0, 0), Color::rgb(0, 255, 0), Color::rgb(0, 0, 255)];
            for ((bar, value), tint) in channels.into_iter().zip(values).zip(tints) {
                Self::draw_vertical_bar(renderer, bar, value, tint);
                renderer.rect_outline(bar, style.outline_width, style.outline);
            }
        }
        if let Some(bar) = layout.alpha {
            self.draw_alpha(renderer, bar);
            renderer.rect_outline(bar, style.outline_width, style.outline);
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn draw_field(&self, renderer: &mut UIRenderer, field: Rect) {
        let cw = field.width / FIELD_COLUMNS as f32;
        let ch = field.height / FIELD_ROWS as f32;
        for row in 0..FIELD_ROWS {
            for col in 0..FIELD_COLUMNS {
                let hue = (col as f32 + 0.5) / FIELD_COLUMNS as f32 * 360.0;
                let sat = (row as f32 + 0.5) / FIELD_ROWS as f32;
                renderer.rect(
                    Rect::new(field.x + col as f32 * cw, field.y + row as f32 * ch, cw, ch),
                    Color::from_hsv(Hsv::new(hue, sat, 1.0)),
                );
            }
        }

        let thumb = Vec2::new(
            field.x + self.hue / 360.0 * field.width,
            field.y + self.saturation * field.height,
        );
        renderer.push(RenderCommand::CircleOutline {
            center: thumb,
            radius: 5.0,
            color: Color::BLACK,
        });
        renderer.push(RenderCommand::Circle {
            center: thumb,
            radius: 3.0,
            color: self.color.with_alpha(u8::MAX),
        });
    }

    fn draw_vertical_bar(renderer: &mut UIRenderer, bar: Rect, value: u8, tint: Color) {
        let filled = bar.height * f32::from(value) / 255.0;
        renderer.rect(bar, Color::DARKGRAY);
        renderer.rect(Rect::new(bar.x, bar.bottom() - filled, bar.width, filled), tint);
        Self::draw_handle(renderer, bar, value);
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn draw_alpha(&self, renderer: &mut UIRenderer, bar: Rect) {
        renderer.rect(bar, Color::LIGHTGRAY);
        let seg = bar.height / ALPHA_SEGMENTS as f32;
        for i in 0..ALPHA_SEGMENTS {
            // Top segment is opaque.
            let alpha = 1.0 - (i as f32 + 0.5) / ALPHA_SEGMENTS as f32;
            renderer.rect(
                Rect::new(bar.x, bar.y + i as f32 * seg, bar.width, seg),
                self.color.with_alpha(to_channel(alpha)),
            );
        }
        Self::draw_handle(renderer, bar, self.color.a);
    }

    fn draw_handle(renderer: &mut UIRenderer, bar: Rect, value: u8) {
        let y = bar.bottom() - bar.height * f32::from(value) / 255.0;
        renderer.push(RenderCommand::Line {
            from: Vec2::new(bar.x - 2.0, y),
            to: Vec2::new(bar.right() + 2.0, y),
            width: 2.0,
            color: Color::WHITE,
        });
    }
}

impl Widget for ColorPicker {
    fn control(&self) -> &Control {
        &self.control
    }

    fn control_mut(&mut self) -> &mut Control {
        &mut self.control
    }

    fn bounds(&self) -> Rect {
        self.swatch()
    }
}

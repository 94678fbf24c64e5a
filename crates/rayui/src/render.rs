//! UI rendering system.
//!
//! Widgets never talk to the GPU. `draw` pushes [`RenderCommand`]s into a
//! [`UIRenderer`] and the host replays them with its own primitives at the
//! end of the frame. Text measurement and texture upload go the other way,
//! through the [`TextMetrics`] and [`TextureHost`] traits.

use crate::layout::{Rect, Vec2};
use crate::style::{Color, FontId, TextStyle};

/// Handle to a texture owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// A render command for the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Filled rectangle.
    Rect {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
    },
    /// Filled rectangle with rounded corners.
    RoundedRect {
        /// Bounds.
        bounds: Rect,
        /// Corner roundness (0-1, relative to the shorter side).
        roundness: f32,
        /// Fill color.
        color: Color,
    },
    /// Rectangle outline drawn inside the bounds.
    RectOutline {
        /// Bounds.
        bounds: Rect,
        /// Line width.
        width: f32,
        /// Stroke color.
        color: Color,
    },
    /// Rounded rectangle outline.
    RoundedRectOutline {
        /// Bounds.
        bounds: Rect,
        /// Corner roundness (0-1).
        roundness: f32,
        /// Stroke color.
        color: Color,
    },
    /// Straight line.
    Line {
        /// Start point.
        from: Vec2,
        /// End point.
        to: Vec2,
        /// Line width.
        width: f32,
        /// Stroke color.
        color: Color,
    },
    /// Filled circle.
    Circle {
        /// Center.
        center: Vec2,
        /// Radius.
        radius: f32,
        /// Fill color.
        color: Color,
    },
    /// Circle outline.
    CircleOutline {
        /// Center.
        center: Vec2,
        /// Radius.
        radius: f32,
        /// Stroke color.
        color: Color,
    },
    /// Filled triangle.
    Triangle {
        /// Vertices.
        points: [Vec2; 3],
        /// Fill color.
        color: Color,
    },
    /// Textured quad.
    Texture {
        /// Destination bounds.
        bounds: Rect,
        /// Texture handle.
        texture: TextureId,
        /// Tint color.
        tint: Color,
    },
    /// Text.
    Text {
        /// Text content.
        text: String,
        /// Top-left position.
        position: Vec2,
        /// Font handle.
        font: FontId,
        /// Font size.
        size: f32,
        /// Extra spacing between glyphs.
        spacing: f32,
        /// Text color.
        color: Color,
    },
}

/// Text measurement supplied by the host.
pub trait TextMetrics {
    /// Returns the bounding size of `text` drawn with the given parameters.
    fn measure(&self, font: FontId, text: &str, size: f32, spacing: f32) -> Vec2;
}

/// Fixed-advance estimate for hosts without real font metrics.
///
/// Each glyph advances `size * advance` pixels plus `spacing`; the height is
/// the font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    /// Glyph advance as a fraction of the font size.
    pub advance: f32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self { advance: 0.5 }
    }
}

impl TextMetrics for MonospaceMetrics {
    fn measure(&self, _font: FontId, text: &str, size: f32, spacing: f32) -> Vec2 {
        let glyphs = text.chars().count();
        if glyphs == 0 {
            return Vec2::new(0.0, size);
        }
        #[allow(clippy::cast_precision_loss)]
        let n = glyphs as f32;
        Vec2::new(n * size * self.advance + (n - 1.0) * spacing, size)
    }
}

/// An RGBA8 image produced by the toolkit for the host to upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major pixels.
    pub pixels: Vec<Color>,
}

impl Image {
    /// Creates an image filled with one color.
    #[must_use]
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; (width as usize) * (height as usize)],
        }
    }

    /// Sets a pixel; out-of-bounds writes are ignored.
    pub fn put(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width && y < self.height {
            self.pixels[(y as usize) * (self.width as usize) + x as usize] = color;
        }
    }

    /// Returns a pixel, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y as usize) * (self.width as usize) + x as usize])
        } else {
            None
        }
    }

    /// Raw RGBA bytes, ready for upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

/// Texture management supplied by the host.
pub trait TextureHost {
    /// Uploads an RGBA8 image and returns its handle.
    fn load_texture(&mut self, width: u32, height: u32, rgba: &[u8]) -> TextureId;

    /// Releases a texture previously returned by `load_texture`.
    fn unload_texture(&mut self, texture: TextureId);
}

/// Collects the render commands of a frame.
pub struct UIRenderer {
    /// All commands from the frame.
    commands: Vec<RenderCommand>,
    /// Host text metrics.
    metrics: Box<dyn TextMetrics>,
}

impl UIRenderer {
    /// Creates a renderer measuring text with the host's metrics.
    #[must_use]
    pub fn new(metrics: Box<dyn TextMetrics>) -> Self {
        Self {
            commands: Vec::with_capacity(1024),
            metrics,
        }
    }

    /// Begins a new frame.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
    }

    /// Adds a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Returns the commands pushed so far this frame.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Takes the frame's commands, leaving the renderer empty.
    pub fn take_commands(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Returns the total command count.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Measures text with the host's metrics.
    #[must_use]
    pub fn measure_text(&self, style: TextStyle, text: &str, spacing: f32) -> Vec2 {
        self.metrics.measure(style.font, text, style.size, spacing)
    }

    /// Returns the host's text metrics.
    #[must_use]
    pub fn metrics(&self) -> &dyn TextMetrics {
        self.metrics.as_ref()
    }

    /// Filled rectangle.
    pub fn rect(&mut self, bounds: Rect, color: Color) {
        self.push(RenderCommand::Rect { bounds, color });
    }

    /// Rectangle outline. Zero or negative widths draw nothing.
    pub fn rect_outline(&mut self, bounds: Rect, width: f32, color: Color) {
        if width > 0.0 {
            self.push(RenderCommand::RectOutline { bounds, width, color });
        }
    }

    /// Text at a position.
    pub fn text(&mut self, text: impl Into<String>, position: Vec2, style: TextStyle, spacing: f32, color: Color) {
        self.push(RenderCommand::Text {
            text: text.into(),
            position,
            font: style.font,
            size: style.size,
            spacing,
            color,
        });
    }

    /// Text centered inside a rectangle.
    pub fn text_centered(&mut self, text: &str, bounds: Rect, style: TextStyle, spacing: f32, color: Color) {
        let size = self.measure_text(style, text, spacing);
        let position = Vec2::new(
            bounds.x + bounds.width / 2.0 - size.x / 2.0,
            bounds.y + bounds.height / 2.0 - size.y / 2.0,
        );
        self.text(text, position, style, spacing, color);
    }
}

impl Default for UIRenderer {
    fn default() -> Self {
        Self::new(Box::<MonospaceMetrics>::default())
    }
}

impl std::fmt::Debug for UIRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UIRenderer")
            .field("commands", &self.commands.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_frame() {
        let mut renderer = UIRenderer::default();

        renderer.begin_frame();
        renderer.rect(Rect::new(0.0, 0.0, 100.0, 50.0), Color::WHITE);
        renderer.rect_outline(Rect::new(0.0, 0.0, 100.0, 50.0), 0.0, Color::BLACK);

        assert_eq!(renderer.command_count(), 1);
        let commands = renderer.take_commands();
        assert_eq!(commands.len(), 1);
        assert_eq!(renderer.command_count(), 0);
    }

    #[test]
    fn test_monospace_measure() {
        let metrics = MonospaceMetrics::default();
        let size = metrics.measure(FontId(0), "abcd", 20.0, 1.0);
        assert!((size.x - 43.0).abs() < f32::EPSILON);
        assert!((size.y - 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_text_centered() {
        let mut renderer = UIRenderer::default();
        renderer.text_centered("ab", Rect::new(0.0, 0.0, 100.0, 40.0), TextStyle::default(), 0.0, Color::WHITE);

        match &renderer.commands()[0] {
            RenderCommand::Text { position, .. } => {
                assert!((position.x - 40.0).abs() < f32::EPSILON);
                assert!((position.y - 10.0).abs() < f32::EPSILON);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_image_bytes() {
        let mut image = Image::filled(2, 2, Color::BLACK);
        image.put(1, 0, Color::rgba(1, 2, 3, 4));
        image.put(5, 5, Color::WHITE);

        assert_eq!(image.as_bytes().len(), 16);
        assert_eq!(&image.as_bytes()[4..8], &[1, 2, 3, 4]);
        assert_eq!(image.get(1, 0), Some(Color::rgba(1, 2, 3, 4)));
        assert_eq!(image.get(2, 0), None);
    }
}

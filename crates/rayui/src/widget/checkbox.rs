//! Checkbox and its default textures.

use tracing::debug;

use crate::context::{Context, SoundId};
use crate::layout::{Rect, Vec2};
use crate::render::{Image, RenderCommand, TextureHost, TextureId, UIRenderer};
use crate::style::Color;

use super::core::{Control, Widget};

/// Default checkbox edge length in pixels.
pub const DEFAULT_CHECKBOX_SIZE: u32 = 32;

/// Pair of textures for the two checkbox states.
///
/// Created once by the caller and shared by every checkbox. Releasing
/// consumes the value.
#[derive(Debug, PartialEq, Eq)]
pub struct CheckboxTextures {
    checked: TextureId,
    unchecked: TextureId,
    size: u32,
}

impl CheckboxTextures {
    /// Generates the default images and uploads them through the host.
    pub fn generate(host: &mut impl TextureHost, size: u32) -> Self {
        let unchecked_image = Self::unchecked_image(size);
        let checked_image = Self::checked_image(size);
        let unchecked = host.load_texture(size, size, unchecked_image.as_bytes());
        let checked = host.load_texture(size, size, checked_image.as_bytes());
        debug!(size, ?checked, ?unchecked, "checkbox textures created");
        Self {
            checked,
            unchecked,
            size,
        }
    }

    /// Wraps textures the host already owns.
    #[must_use]
    pub const fn from_ids(checked: TextureId, unchecked: TextureId, size: u32) -> Self {
        Self {
            checked,
            unchecked,
            size,
        }
    }

    /// Returns the texture for a state.
    #[must_use]
    pub const fn texture(&self, checked: bool) -> TextureId {
        if checked {
            self.checked
        } else {
            self.unchecked
        }
    }

    /// Returns the edge length the textures were generated at.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Unloads both textures.
    pub fn release(self, host: &mut impl TextureHost) {
        host.unload_texture(self.checked);
        host.unload_texture(self.unchecked);
        debug!(checked = ?self.checked, unchecked = ?self.unchecked, "checkbox textures released");
    }

    /// Light box with a dark border.
    #[must_use]
    pub fn unchecked_image(size: u32) -> Image {
        let mut image = Image::filled(size, size, Color::LIGHTGRAY);
        let border = (size / 16).max(1);
        for y in 0..size {
            for x in 0..size {
                let edge = x < border || y < border || x >= size - border || y >= size - border;
                if edge {
                    image.put(x, y, Color::DARKGRAY);
                }
            }
        }
        image
    }

    /// The unchecked box with a filled inner square.
    #[must_use]
    pub fn checked_image(size: u32) -> Image {
        let mut image = Self::unchecked_image(size);
        let inset = size / 4;
        for y in inset..size.saturating_sub(inset) {
            for x in inset..size.saturating_sub(inset) {
                image.put(x, y, Color::DARKGRAY);
            }
        }
        image
    }
}

/// A square box toggling a boolean.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkbox {
    rect: Rect,
    checked: bool,
    control: Control,
}

impl Checkbox {
    /// Creates a silent checkbox of `size` pixels.
    #[must_use]
    pub fn new(x: f32, y: f32, size: f32, initial: bool) -> Self {
        Self {
            rect: Rect::new(x, y, size, size),
            checked: initial,
            control: Control::new(),
        }
    }

    /// Adds hover and click sounds.
    #[must_use]
    pub fn with_sounds(mut self, hover: SoundId, click: SoundId) -> Self {
        self.control.set_sounds(Some(hover), Some(click));
        self
    }

    /// Returns the current state.
    #[must_use]
    pub const fn value(&self) -> bool {
        self.checked
    }

    /// Sets the state.
    pub fn set_value(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Updates at the context's pointer. Returns true when toggled.
    pub fn update(&mut self, ctx: &mut Context) -> bool {
        let pointer = ctx.pointer();
        self.update_at(ctx, pointer)
    }

    /// Updates at an explicit pointer. Returns true when toggled.
    pub fn update_at(&mut self, ctx: &mut Context, pointer: Vec2) -> bool {
        let response = self.control.interact_rect(ctx, pointer, self.rect);
        if response.clicked {
            self.control.play_click(ctx);
            self.checked = !self.checked;
        }
        response.clicked
    }

    /// Draws the texture for the current state.
    pub fn draw(&self, renderer: &mut UIRenderer, textures: &CheckboxTextures) {
        renderer.push(RenderCommand::Texture {
            bounds: self.rect,
            texture: textures.texture(self.checked),
            tint: Color::WHITE,
        });
    }

    /// Draws a flat block in the color of the current state.
    pub fn draw_colors(&self, renderer: &mut UIRenderer, checked: Color, unchecked: Color) {
        renderer.rect(self.rect, if self.checked { checked } else { unchecked });
    }

    /// Draws a flat block with an outline.
    pub fn draw_colors_ex(
        &self,
        renderer: &mut UIRenderer,
        checked: Color,
        unchecked: Color,
        outline_width: f32,
        outline: Color,
    ) {
        self.draw_colors(renderer, checked, unchecked);
        renderer.rect_outline(self.rect, outline_width, outline);
    }
}

impl Widget for Checkbox {
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

    #[derive(Default)]
    struct RecordingHost {
        next: u32,
        loaded: Vec<(TextureId, usize)>,
        unloaded: Vec<TextureId>,
    }

    impl TextureHost for RecordingHost {
        fn load_texture(&mut self, width: u32, height: u32, rgba: &[u8]) -> TextureId {
            assert_eq!(rgba.len(), (width * height * 4) as usize);
            self.next += 1;
            let id = TextureId(self.next);
            self.loaded.push((id, rgba.len()));
            id
        }

        fn unload_texture(&mut self, texture: TextureId) {
            self.unloaded.push(texture);
        }
    }

    #[test]
    fn test_generate_and_release() {
        let mut host = RecordingHost::default();
        let textures = CheckboxTextures::generate(&mut host, DEFAULT_CHECKBOX_SIZE);

        assert_eq!(host.loaded.len(), 2);
        assert_ne!(textures.texture(true), textures.texture(false));

        let (checked, unchecked) = (textures.texture(true), textures.texture(false));
        textures.release(&mut host);
        assert_eq!(host.unloaded, vec![checked, unchecked]);
    }

    #[test]
    fn test_images_differ_in_center_only() {
        let checked = CheckboxTextures::checked_image(16);
        let unchecked = CheckboxTextures::unchecked_image(16);

        assert_eq!(checked.get(0, 0), unchecked.get(0, 0));
        assert_eq!(unchecked.get(8, 8), Some(Color::LIGHTGRAY));
        assert_eq!(checked.get(8, 8), Some(Color::DARKGRAY));
    }

    #[test]
    fn test_draw_picks_state_texture() {
        let textures = CheckboxTextures::from_ids(TextureId(1), TextureId(2), 32);
        let mut checkbox = Checkbox::new(0.0, 0.0, 32.0, true);
        let mut renderer = UIRenderer::default();

        checkbox.draw(&mut renderer, &textures);
        checkbox.set_value(false);
        checkbox.draw(&mut renderer, &textures);

        let ids: Vec<_> = renderer
            .commands()
            .iter()
            .filter_map(|c| match c {
                RenderCommand::Texture { texture, .. } => Some(*texture),
                _ => None,
            })
            .collect();
        assert_eq!(ids, vec![TextureId(1), TextureId(2)]);
    }
}

//! The per-application UI context.
//!
//! Everything the widgets share lives here and is owned by the caller: the
//! frame's input snapshot, the tooltip registry, the render command sink, the
//! sound cues raised during `update`, and the tuning configuration. Two
//! contexts never interfere, which keeps tests and multi-surface hosts
//! independent.

use crate::config::UiConfig;
use crate::error::UiResult;
use crate::input::InputState;
use crate::layout::Vec2;
use crate::render::{TextMetrics, UIRenderer};
use crate::style::TextStyle;
use crate::widget::{HoverRegistry, TooltipHandle};

/// Handle to a sound owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundId(pub u32);

/// Shared state for one UI surface.
#[derive(Debug)]
pub struct Context {
    input: InputState,
    tooltips: HoverRegistry,
    renderer: UIRenderer,
    sounds: Vec<SoundId>,
    config: UiConfig,
}

impl Context {
    /// Creates a context with the default configuration.
    #[must_use]
    pub fn new(metrics: Box<dyn TextMetrics>) -> Self {
        let config = UiConfig::default();
        Self {
            input: InputState::new(),
            tooltips: HoverRegistry::new(config.max_hoverables),
            renderer: UIRenderer::new(metrics),
            sounds: Vec::with_capacity(8),
            config,
        }
    }

    /// Creates a context with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::UiError::InvalidConfig`] if the configuration does
    /// not validate.
    pub fn with_config(config: UiConfig, metrics: Box<dyn TextMetrics>) -> UiResult<Self> {
        config.validate()?;
        Ok(Self {
            input: InputState::new(),
            tooltips: HoverRegistry::new(config.max_hoverables),
            renderer: UIRenderer::new(metrics),
            sounds: Vec::with_capacity(8),
            config,
        })
    }

    /// Starts a frame: clears input edges, render commands, sound cues and
    /// last frame's tooltip hover flags.
    ///
    /// Call before feeding the frame's input.
    pub fn begin_frame(&mut self) {
        self.input.begin_frame();
        self.renderer.begin_frame();
        self.sounds.clear();
        self.tooltips.begin_frame();
    }

    /// Returns the input snapshot.
    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Returns the input snapshot for the host to fill.
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// Returns the tooltip registry.
    #[must_use]
    pub fn tooltips(&self) -> &HoverRegistry {
        &self.tooltips
    }

    /// Returns the tooltip registry mutably.
    pub fn tooltips_mut(&mut self) -> &mut HoverRegistry {
        &mut self.tooltips
    }

    /// Returns the render command sink.
    #[must_use]
    pub fn renderer(&self) -> &UIRenderer {
        &self.renderer
    }

    /// Returns the render command sink mutably.
    pub fn renderer_mut(&mut self) -> &mut UIRenderer {
        &mut self.renderer
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Returns the frame clock (seconds).
    #[must_use]
    pub fn now(&self) -> f64 {
        self.input.time()
    }

    /// Returns the pointer position reported by the host.
    #[must_use]
    pub fn pointer(&self) -> Vec2 {
        self.input.mouse_pos()
    }

    /// Queues a sound for the host to play after the frame.
    pub fn play(&mut self, sound: SoundId) {
        self.sounds.push(sound);
    }

    /// Returns the sounds queued this frame.
    #[must_use]
    pub fn sounds(&self) -> &[SoundId] {
        &self.sounds
    }

    /// Takes the sounds queued this frame.
    pub fn take_sounds(&mut self) -> Vec<SoundId> {
        std::mem::take(&mut self.sounds)
    }

    /// Caret phase for text inputs drawn this frame.
    ///
    /// Visible during the first half of every blink cycle.
    #[must_use]
    pub fn caret_visible(&self) -> bool {
        caret_phase(self.now(), self.config.caret_blink_period)
    }

    /// Draws at most one tooltip for this frame.
    ///
    /// Call after every widget has been updated. Returns the entry whose
    /// tooltip was drawn.
    pub fn draw_tooltips(&mut self, style: TextStyle) -> Option<TooltipHandle> {
        self.tooltips
            .draw_all(&self.input, &mut self.renderer, style, &self.config.tooltip)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(Box::<crate::render::MonospaceMetrics>::default())
    }
}

/// Blink phase: on for `period` seconds, off for the next `period`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn caret_phase(time: f64, period: f64) -> bool {
    if time <= 0.0 {
        return true;
    }
    ((time / period).floor() as u64) % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;

    #[test]
    fn test_caret_blinks_every_half_second() {
        assert!(caret_phase(0.0, 0.5));
        assert!(caret_phase(0.49, 0.5));
        assert!(!caret_phase(0.5, 0.5));
        assert!(!caret_phase(0.99, 0.5));
        assert!(caret_phase(1.0, 0.5));
    }

    #[test]
    fn test_begin_frame_clears_sounds() {
        let mut ctx = Context::default();
        ctx.play(SoundId(3));
        assert_eq!(ctx.sounds(), &[SoundId(3)]);

        ctx.begin_frame();
        assert!(ctx.sounds().is_empty());
    }

    #[test]
    fn test_with_config_validates() {
        let config = UiConfig {
            caret_blink_period: 0.0,
            ..UiConfig::default()
        };
        assert!(Context::with_config(config, Box::<crate::render::MonospaceMetrics>::default()).is_err());
    }

    #[test]
    fn test_contexts_are_independent() {
        let mut a = Context::default();
        let b = Context::default();
        a.input_mut().set_mouse_pos(5.0, 5.0);
        assert_eq!(a.pointer(), Vec2::new(5.0, 5.0));
        assert_eq!(b.pointer(), Vec2::ZERO);
    }
}

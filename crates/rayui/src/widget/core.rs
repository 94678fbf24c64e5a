//! Core widget types and traits.

use crate::context::{Context, SoundId};
use crate::error::UiResult;
use crate::input::MouseButton;
use crate::layout::{Rect, Vec2};

use super::tooltip::TooltipHandle;

/// Hover and tooltip state embedded in every widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Hoverable {
    /// Tooltip text.
    info: Option<String>,
    /// Seconds of stillness before the tooltip shows. `None` defers to
    /// [`crate::UiConfig::hover_delay`].
    delay: Option<f32>,
    /// Anchor the tooltip at the top-left corner instead of the pointer.
    draw_at_top: bool,
    hovered: bool,
    /// Set exactly while hovered.
    hover_start: Option<f64>,
    /// Registry entry while the tooltip is enabled.
    handle: Option<TooltipHandle>,
}

impl Hoverable {
    /// Creates hover state with no tooltip.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            info: None,
            delay: None,
            draw_at_top: false,
            hovered: false,
            hover_start: None,
            handle: None,
        }
    }

    /// Sets the tooltip text without registering it.
    #[must_use]
    pub fn with_info(mut self, info: impl Into<String>, draw_at_top: bool) -> Self {
        self.info = Some(info.into());
        self.draw_at_top = draw_at_top;
        self
    }

    /// Sets an explicit tooltip delay.
    #[must_use]
    pub const fn with_delay(mut self, delay: f32) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Returns the tooltip text.
    #[must_use]
    pub fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }

    /// Returns the explicit tooltip delay (seconds), if one was set.
    #[must_use]
    pub const fn delay(&self) -> Option<f32> {
        self.delay
    }

    /// Returns true if the tooltip is anchored at the top-left corner.
    #[must_use]
    pub const fn draw_at_top(&self) -> bool {
        self.draw_at_top
    }

    /// Returns true if the pointer was over the widget at the last update.
    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Returns the frame time at which the current hover began.
    #[must_use]
    pub const fn hover_start(&self) -> Option<f64> {
        self.hover_start
    }

    /// Returns the registry entry, if the tooltip is enabled.
    #[must_use]
    pub const fn handle(&self) -> Option<TooltipHandle> {
        self.handle
    }

    /// Returns true if the tooltip is enabled.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Records this frame's hover flag. Returns true on the hover edge.
    fn track(&mut self, hovered: bool, now: f64) -> bool {
        let entered = hovered && !self.hovered;
        self.hovered = hovered;
        if entered {
            self.hover_start = Some(now);
        } else if !hovered {
            self.hover_start = None;
        }
        entered
    }
}

impl Default for Hoverable {
    fn default() -> Self {
        Self::new()
    }
}

/// What happened to a control during one update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Response {
    /// Pointer is over the control.
    pub hovered: bool,
    /// Pointer entered the control this frame.
    pub entered: bool,
    /// Left button pressed this frame while hovered.
    pub clicked: bool,
    /// Right button pressed this frame while hovered.
    pub right_clicked: bool,
    /// Left button held while hovered.
    pub down: bool,
}

/// Shared interactive component: hover state plus sound cues.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    /// Hover and tooltip state.
    pub hover: Hoverable,
    hover_sound: Option<SoundId>,
    click_sound: Option<SoundId>,
}

impl Control {
    /// Creates a silent control.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_hover(Hoverable::new())
    }

    /// Creates a silent control around existing hover state.
    #[must_use]
    pub const fn with_hover(hover: Hoverable) -> Self {
        Self {
            hover,
            hover_sound: None,
            click_sound: None,
        }
    }

    /// Sets the sounds queued on hover and click.
    pub fn set_sounds(&mut self, hover: Option<SoundId>, click: Option<SoundId>) {
        self.hover_sound = hover;
        self.click_sound = click;
    }

    /// Returns the hover sound.
    #[must_use]
    pub const fn hover_sound(&self) -> Option<SoundId> {
        self.hover_sound
    }

    /// Returns the click sound.
    #[must_use]
    pub const fn click_sound(&self) -> Option<SoundId> {
        self.click_sound
    }

    /// Runs the per-frame hover bookkeeping for a hit-test result.
    ///
    /// Queues the hover sound on the hover edge and reports the hover flag
    /// to the tooltip registry. Click sounds are left to the widget, which
    /// knows whether the click did anything.
    pub fn interact(&mut self, ctx: &mut Context, hit: bool) -> Response {
        let entered = self.hover.track(hit, ctx.now());
        if entered {
            if let Some(sound) = self.hover_sound {
                ctx.play(sound);
            }
        }
        if let Some(handle) = self.hover.handle {
            ctx.tooltips_mut().mark_hovered(handle, hit);
        }

        let input = ctx.input();
        Response {
            hovered: hit,
            entered,
            clicked: hit && input.mouse_clicked(MouseButton::Left),
            right_clicked: hit && input.mouse_clicked(MouseButton::Right),
            down: hit && input.mouse_down(MouseButton::Left),
        }
    }

    /// [`Control::interact`] against a rectangle.
    pub fn interact_rect(&mut self, ctx: &mut Context, pointer: Vec2, bounds: Rect) -> Response {
        self.interact(ctx, bounds.contains(pointer))
    }

    /// Queues the click sound, if any.
    pub fn play_click(&self, ctx: &mut Context) {
        if let Some(sound) = self.click_sound {
            ctx.play(sound);
        }
    }

    /// Sets the tooltip text and enables it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::UiError::RegistryFull`] if the tooltip could not be
    /// registered. The text is kept either way.
    pub fn set_hover_info(&mut self, ctx: &mut Context, info: &str, draw_at_top: bool) -> UiResult<TooltipHandle> {
        self.hover.info = Some(info.to_owned());
        self.hover.draw_at_top = draw_at_top;
        if let Some(handle) = self.hover.handle {
            if ctx.tooltips_mut().set_info(handle, info, draw_at_top).is_ok() {
                return Ok(handle);
            }
            self.hover.handle = None;
        }
        self.enable_hover_info(ctx)
    }

    /// Registers the tooltip, keeping it if already registered.
    ///
    /// # Errors
    ///
    /// Returns [`crate::UiError::RegistryFull`] when the registry is full.
    pub fn enable_hover_info(&mut self, ctx: &mut Context) -> UiResult<TooltipHandle> {
        if let Some(handle) = self.hover.handle {
            if ctx.tooltips_mut().reset_pointer(handle).is_ok() {
                return Ok(handle);
            }
        }
        let info = self.hover.info.clone().unwrap_or_default();
        let delay = self.hover.delay.unwrap_or(ctx.config().hover_delay);
        let handle = ctx.tooltips_mut().insert(info, delay, self.hover.draw_at_top)?;
        self.hover.handle = Some(handle);
        Ok(handle)
    }

    /// Unregisters the tooltip.
    pub fn disable_hover_info(&mut self, ctx: &mut Context) {
        if let Some(handle) = self.hover.handle.take() {
            ctx.tooltips_mut().remove(handle);
        }
    }

    /// Changes the tooltip delay.
    pub fn set_hover_delay(&mut self, ctx: &mut Context, delay: f32) {
        self.hover.delay = Some(delay);
        if let Some(handle) = self.hover.handle {
            if ctx.tooltips_mut().set_delay(handle, delay).is_err() {
                self.hover.handle = None;
            }
        }
    }
}

impl Default for Control {
    fn default() -> Self {
        Self::new()
    }
}

/// Base trait for all widgets.
///
/// Tooltip management comes for free once a widget exposes its [`Control`].
pub trait Widget {
    /// Returns the shared control.
    fn control(&self) -> &Control;

    /// Returns mutable access to the shared control.
    fn control_mut(&mut self) -> &mut Control;

    /// Returns the widget's placement rectangle.
    fn bounds(&self) -> Rect;

    /// Returns true if the pointer was over the widget at the last update.
    fn is_hovered(&self) -> bool {
        self.control().hover.is_hovered()
    }

    /// Sets the tooltip text and enables it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::UiError::RegistryFull`] when the registry is full.
    fn set_hover_info(&mut self, ctx: &mut Context, info: &str, draw_at_top: bool) -> UiResult<TooltipHandle> {
        self.control_mut().set_hover_info(ctx, info, draw_at_top)
    }

    /// Enables the tooltip.
    ///
    /// # Errors
    ///
    /// Returns [`crate::UiError::RegistryFull`] when the registry is full.
    fn enable_hover_info(&mut self, ctx: &mut Context) -> UiResult<TooltipHandle> {
        self.control_mut().enable_hover_info(ctx)
    }

    /// Disables the tooltip.
    fn disable_hover_info(&mut self, ctx: &mut Context) {
        self.control_mut().disable_hover_info(ctx);
    }

    /// Changes the tooltip delay.
    fn set_hover_delay(&mut self, ctx: &mut Context, delay: f32) {
        self.control_mut().set_hover_delay(ctx, delay);
    }
}

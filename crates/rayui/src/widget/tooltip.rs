//! Delayed hover tooltips.
//!
//! Widgets register a tooltip with the [`HoverRegistry`] owned by the
//! [`crate::Context`]. Every frame the registry walks its entries in the
//! order they were enabled and draws the info box of the first one that has
//! been hovered, still, for longer than its delay. At most one box per frame.
//!
//! Storage is a fixed pool of slots with a free list. Entries are threaded
//! on a doubly linked list through the slots so enable order survives O(1)
//! removal.

use tracing::{debug, warn};

use crate::config::TooltipPlacement;
use crate::error::{UiError, UiResult};
use crate::input::{InputState, MouseButton};
use crate::layout::{Rect, Vec2};
use crate::render::UIRenderer;
use crate::style::{Color, TextStyle};

/// Stable reference to a registry entry.
///
/// The generation guards against a slot being reused after removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TooltipHandle {
    slot: usize,
    generation: u32,
}

impl TooltipHandle {
    /// Returns the slot index.
    #[must_use]
    pub const fn slot(self) -> usize {
        self.slot
    }
}

/// Appearance of the info box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipConfig {
    /// Box fill.
    pub background: Color,
    /// Text color.
    pub text: Color,
    /// Horizontal and vertical padding around the text.
    pub padding: Vec2,
    /// Glyph spacing.
    pub spacing: f32,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            text: Color::RAYWHITE,
            padding: Vec2::new(5.0, 3.0),
            spacing: 1.0,
        }
    }
}

#[derive(Debug, Clone)]
struct TooltipEntry {
    info: String,
    delay: f32,
    draw_at_top: bool,
    /// Reported by the owning widget this frame.
    hovered: bool,
    /// When the pointer came to rest over the widget.
    timer_start: Option<f64>,
    /// Pointer position seen by the previous `draw_all`.
    last_pointer: Option<Vec2>,
}

#[derive(Debug, Clone, Default)]
struct Slot {
    generation: u32,
    entry: Option<TooltipEntry>,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Ordered, fixed-capacity set of tooltip registrations.
#[derive(Debug, Clone)]
pub struct HoverRegistry {
    slots: Box<[Slot]>,
    free_list: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    style: TooltipConfig,
}

impl HoverRegistry {
    /// Creates a registry with room for `capacity` tooltips.
    ///
    /// All slots are allocated upfront.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let slots: Vec<Slot> = (0..capacity).map(|_| Slot::default()).collect();
        Self {
            slots: slots.into_boxed_slice(),
            free_list: (0..capacity).rev().collect(),
            head: None,
            tail: None,
            len: 0,
            style: TooltipConfig::default(),
        }
    }

    /// Returns the capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of registered tooltips.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sets the info box appearance.
    pub fn set_style(&mut self, style: TooltipConfig) {
        self.style = style;
    }

    /// Returns the info box appearance.
    #[must_use]
    pub fn style(&self) -> TooltipConfig {
        self.style
    }

    /// Registers a tooltip at the end of the draw order.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::RegistryFull`] when every slot is taken; the
    /// registration is dropped.
    pub fn insert(&mut self, info: impl Into<String>, delay: f32, draw_at_top: bool) -> UiResult<TooltipHandle> {
        let Some(slot) = self.free_list.pop() else {
            warn!(capacity = self.capacity(), "tooltip registry full, registration dropped");
            return Err(UiError::RegistryFull {
                capacity: self.capacity(),
            });
        };

        let entry = TooltipEntry {
            info: info.into(),
            delay,
            draw_at_top,
            hovered: false,
            timer_start: None,
            last_pointer: None,
        };

        let prev = self.tail;
        {
            let s = &mut self.slots[slot];
            s.entry = Some(entry);
            s.prev = prev;
            s.next = None;
        }
        match prev {
            Some(p) => self.slots[p].next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;

        let handle = TooltipHandle {
            slot,
            generation: self.slots[slot].generation,
        };
        debug!(slot, "tooltip enabled");
        Ok(handle)
    }

    /// Removes a tooltip. Returns false for a stale handle.
    pub fn remove(&mut self, handle: TooltipHandle) -> bool {
        if !self.contains(handle) {
            return false;
        }

        let (prev, next) = {
            let s = &mut self.slots[handle.slot];
            s.entry = None;
            s.generation = s.generation.wrapping_add(1);
            (s.prev.take(), s.next.take())
        };
        match prev {
            Some(p) => self.slots[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.slots[n].prev = prev,
            None => self.tail = prev,
        }
        self.free_list.push(handle.slot);
        self.len -= 1;

        debug!(slot = handle.slot, "tooltip disabled");
        true
    }

    /// Returns true if the handle refers to a live entry.
    #[must_use]
    pub fn contains(&self, handle: TooltipHandle) -> bool {
        self.slots
            .get(handle.slot)
            .is_some_and(|s| s.generation == handle.generation && s.entry.is_some())
    }

    /// Iterates live handles in draw order.
    pub fn handles(&self) -> impl Iterator<Item = TooltipHandle> + '_ {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let slot = cursor?;
            cursor = self.slots[slot].next;
            Some(TooltipHandle {
                slot,
                generation: self.slots[slot].generation,
            })
        })
    }

    /// Returns the info text of an entry.
    #[must_use]
    pub fn info(&self, handle: TooltipHandle) -> Option<&str> {
        self.entry(handle).map(|e| e.info.as_str())
    }

    /// Returns when the entry's hover timer started, if it is running.
    #[must_use]
    pub fn timer_start(&self, handle: TooltipHandle) -> Option<f64> {
        self.entry(handle).and_then(|e| e.timer_start)
    }

    /// Replaces the info text and anchor of an entry.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::UnknownHandle`] for a stale handle.
    pub fn set_info(&mut self, handle: TooltipHandle, info: impl Into<String>, draw_at_top: bool) -> UiResult<()> {
        let entry = self.entry_mut(handle)?;
        entry.info = info.into();
        entry.draw_at_top = draw_at_top;
        entry.last_pointer = None;
        Ok(())
    }

    /// Changes the delay of an entry.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::UnknownHandle`] for a stale handle.
    pub fn set_delay(&mut self, handle: TooltipHandle, delay: f32) -> UiResult<()> {
        self.entry_mut(handle)?.delay = delay;
        Ok(())
    }

    /// Forgets the last pointer position seen for an entry.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::UnknownHandle`] for a stale handle.
    pub fn reset_pointer(&mut self, handle: TooltipHandle) -> UiResult<()> {
        self.entry_mut(handle)?.last_pointer = None;
        Ok(())
    }

    /// Records whether the owning widget is hovered this frame.
    ///
    /// Stale handles are ignored.
    pub fn mark_hovered(&mut self, handle: TooltipHandle, hovered: bool) {
        if let Ok(entry) = self.entry_mut(handle) {
            entry.hovered = hovered;
        }
    }

    /// Clears every hover flag. Widgets re-report during `update`.
    pub fn begin_frame(&mut self) {
        for slot in self.slots.iter_mut() {
            if let Some(entry) = slot.entry.as_mut() {
                entry.hovered = false;
            }
        }
    }

    /// Runs the hover timers and draws the first tooltip that is due.
    ///
    /// Walks entries in enable order. A running timer stops when its widget
    /// is not hovered, and restarts when the pointer moved since the previous
    /// call or either main button is held.
    /// Returns the entry that was drawn.
    pub fn draw_all(
        &mut self,
        input: &InputState,
        renderer: &mut UIRenderer,
        text: TextStyle,
        placement: &TooltipPlacement,
    ) -> Option<TooltipHandle> {
        let pointer = input.mouse_pos();
        let now = input.time();
        let buttons_held = input.mouse_down(MouseButton::Left) || input.mouse_down(MouseButton::Right);

        let mut cursor = self.head;
        while let Some(slot) = cursor {
            cursor = self.slots[slot].next;
            let generation = self.slots[slot].generation;
            let Some(entry) = self.slots[slot].entry.as_mut() else {
                continue;
            };
            if entry.info.is_empty() {
                continue;
            }

            if !entry.hovered
                || (entry.timer_start.is_some() && (entry.last_pointer != Some(pointer) || buttons_held))
            {
                entry.timer_start = None;
            }
            if entry.hovered && entry.timer_start.is_none() {
                entry.timer_start = Some(now);
            }
            entry.last_pointer = Some(pointer);

            let due = entry
                .timer_start
                .is_some_and(|start| now - start >= f64::from(entry.delay));
            if entry.hovered && due {
                let origin = if entry.draw_at_top {
                    Vec2::from(placement.anchor)
                } else {
                    pointer + Vec2::from(placement.cursor_offset)
                };
                let info = entry.info.clone();
                self.draw_box(renderer, &info, origin, text);
                return Some(TooltipHandle { slot, generation });
            }
        }
        None
    }

    fn draw_box(&self, renderer: &mut UIRenderer, info: &str, origin: Vec2, text: TextStyle) {
        let style = self.style;
        let size = renderer.measure_text(text, info, style.spacing);
        renderer.rect(
            Rect::new(
                origin.x,
                origin.y,
                size.x + style.padding.x * 2.0,
                size.y + style.padding.y * 2.0,
            ),
            style.background,
        );
        renderer.text(info, origin + style.padding, text, style.spacing, style.text);
    }

    fn entry(&self, handle: TooltipHandle) -> Option<&TooltipEntry> {
        let slot = self.slots.get(handle.slot)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.entry.as_ref()
    }

    fn entry_mut(&mut self, handle: TooltipHandle) -> UiResult<&mut TooltipEntry> {
        let unknown = UiError::UnknownHandle {
            slot: handle.slot,
            generation: handle.generation,
        };
        let slot = self.slots.get_mut(handle.slot).ok_or_else(|| unknown.clone())?;
        if slot.generation != handle.generation {
            return Err(unknown);
        }
        slot.entry.as_mut().ok_or(unknown)
    }
}

impl Default for HoverRegistry {
    fn default() -> Self {
        Self::new(crate::config::MAX_HOVERABLES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderCommand;

    fn frame(input: &mut InputState, time: f64, x: f32, y: f32) {
        input.begin_frame();
        input.set_time(time);
        input.set_mouse_pos(x, y);
    }

    fn drawn_text(renderer: &UIRenderer) -> Option<String> {
        renderer.commands().iter().find_map(|c| match c {
            RenderCommand::Text { text, .. } => Some(text.clone()),
            _ => None,
        })
    }

    #[test]
    fn test_insert_preserves_order_across_removal() {
        let mut registry = HoverRegistry::new(8);
        let a = registry.insert("a", 0.0, false).unwrap();
        let b = registry.insert("b", 0.0, false).unwrap();
        let c = registry.insert("c", 0.0, false).unwrap();

        assert!(registry.remove(b));
        let d = registry.insert("d", 0.0, false).unwrap();

        let order: Vec<_> = registry.handles().collect();
        assert_eq!(order, vec![a, c, d]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_stale_handle_rejected() {
        let mut registry = HoverRegistry::new(1);
        let a = registry.insert("a", 0.0, false).unwrap();
        assert!(registry.remove(a));
        let b = registry.insert("b", 0.0, false).unwrap();

        assert_eq!(a.slot(), b.slot());
        assert!(!registry.contains(a));
        assert!(!registry.remove(a));
        assert!(matches!(registry.set_delay(a, 1.0), Err(UiError::UnknownHandle { .. })));
        assert_eq!(registry.info(b), Some("b"));
    }

    #[test]
    fn test_capacity_exceeded() {
        let mut registry = HoverRegistry::new(2);
        registry.insert("a", 0.0, false).unwrap();
        registry.insert("b", 0.0, false).unwrap();

        let err = registry.insert("c", 0.0, false).unwrap_err();
        assert_eq!(err, UiError::RegistryFull { capacity: 2 });
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_tooltip_after_delay() {
        let mut registry = HoverRegistry::new(4);
        let mut renderer = UIRenderer::default();
        let mut input = InputState::new();
        let placement = TooltipPlacement::default();
        let h = registry.insert("info", 0.5, false).unwrap();

        frame(&mut input, 1.0, 20.0, 20.0);
        registry.mark_hovered(h, true);
        assert_eq!(registry.draw_all(&input, &mut renderer, TextStyle::default(), &placement), None);
        assert_eq!(registry.timer_start(h), Some(1.0));

        frame(&mut input, 1.6, 20.0, 20.0);
        registry.mark_hovered(h, true);
        assert_eq!(registry.draw_all(&input, &mut renderer, TextStyle::default(), &placement), Some(h));
        assert_eq!(drawn_text(&renderer).as_deref(), Some("info"));

        match renderer.commands()[0] {
            RenderCommand::Rect { bounds, .. } => {
                assert!((bounds.x - 36.0).abs() < f32::EPSILON);
                assert!((bounds.y - 36.0).abs() < f32::EPSILON);
            }
            ref other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_pointer_motion_restarts_timer() {
        let mut registry = HoverRegistry::new(4);
        let mut renderer = UIRenderer::default();
        let mut input = InputState::new();
        let placement = TooltipPlacement::default();
        let h = registry.insert("info", 0.5, true).unwrap();

        frame(&mut input, 1.0, 20.0, 20.0);
        registry.mark_hovered(h, true);
        registry.draw_all(&input, &mut renderer, TextStyle::default(), &placement);

        frame(&mut input, 1.6, 21.0, 20.0);
        registry.mark_hovered(h, true);
        assert_eq!(registry.draw_all(&input, &mut renderer, TextStyle::default(), &placement), None);
        assert_eq!(registry.timer_start(h), Some(1.6));
    }

    #[test]
    fn test_held_button_blocks_tooltip() {
        let mut registry = HoverRegistry::new(4);
        let mut renderer = UIRenderer::default();
        let mut input = InputState::new();
        let placement = TooltipPlacement::default();
        let h = registry.insert("info", 0.1, true).unwrap();

        input.mouse_button_down(MouseButton::Right);
        for step in 0..10 {
            frame(&mut input, f64::from(step), 20.0, 20.0);
            registry.mark_hovered(h, true);
            assert_eq!(registry.draw_all(&input, &mut renderer, TextStyle::default(), &placement), None);
        }
    }

    #[test]
    fn test_first_registered_wins() {
        let mut registry = HoverRegistry::new(4);
        let mut renderer = UIRenderer::default();
        let mut input = InputState::new();
        let placement = TooltipPlacement::default();
        let first = registry.insert("first", 0.0, true).unwrap();
        let second = registry.insert("second", 0.0, true).unwrap();

        frame(&mut input, 2.0, 5.0, 5.0);
        registry.mark_hovered(second, true);
        registry.mark_hovered(first, true);
        assert_eq!(registry.draw_all(&input, &mut renderer, TextStyle::default(), &placement), Some(first));

        let texts: Vec<_> = renderer
            .commands()
            .iter()
            .filter(|c| matches!(c, RenderCommand::Text { .. }))
            .collect();
        assert_eq!(texts.len(), 1);
    }

    #[test]
    fn test_begin_frame_clears_hover() {
        let mut registry = HoverRegistry::new(4);
        let mut renderer = UIRenderer::default();
        let mut input = InputState::new();
        let placement = TooltipPlacement::default();
        let h = registry.insert("info", 0.0, true).unwrap();

        registry.mark_hovered(h, true);
        registry.begin_frame();
        frame(&mut input, 1.0, 0.0, 0.0);
        assert_eq!(registry.draw_all(&input, &mut renderer, TextStyle::default(), &placement), None);
    }
}

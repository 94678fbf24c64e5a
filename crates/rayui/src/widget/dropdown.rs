//! Dropdown selector.

use tracing::debug;

use crate::context::{Context, SoundId};
use crate::input::MouseButton;
use crate::layout::{Rect, Vec2};
use crate::render::UIRenderer;
use crate::style::{Color, TextStyle};

use super::core::{Control, Widget};

const SPACING: f32 = 1.0;
const TEXT_INSET: f32 = 8.0;

/// Appearance of a dropdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropdownStyle {
    /// Header fill.
    pub background: Color,
    /// Text color.
    pub text: Color,
    /// Header text color while hovered.
    pub text_hover: Color,
    /// Option row fill.
    pub option_background: Color,
    /// Option row fill under the pointer.
    pub option_hover: Color,
    /// Outline and divider thickness for `draw_ex`; zero disables them.
    pub outline_width: f32,
    /// Outline and divider color for `draw_ex`.
    pub outline: Color,
}

impl Default for DropdownStyle {
    fn default() -> Self {
        Self {
            background: Color::LIGHTGRAY,
            text: Color::BLACK,
            text_hover: Color::DARKGRAY,
            option_background: Color::RAYWHITE,
            option_hover: Color::SKYBLUE,
            outline_width: 1.0,
            outline: Color::BLACK,
        }
    }
}

/// A header that expands into a list of selectable rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Dropdown {
    rect: Rect,
    options: Vec<String>,
    selected: Option<usize>,
    expanded: bool,
    /// Option row under the pointer at the last update, while expanded.
    hovered_option: Option<usize>,
    control: Control,
}

impl Dropdown {
    /// Creates a collapsed dropdown. An out-of-range `initial` means no
    /// selection.
    #[must_use]
    pub fn new<S: Into<String>>(rect: Rect, options: impl IntoIterator<Item = S>, initial: Option<usize>) -> Self {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        let selected = initial.filter(|&i| i < options.len());
        Self {
            rect,
            options,
            selected,
            expanded: false,
            hovered_option: None,
            control: Control::new(),
        }
    }

    /// Adds hover and click sounds.
    #[must_use]
    pub fn with_sounds(mut self, hover: SoundId, click: SoundId) -> Self {
        self.control.set_sounds(Some(hover), Some(click));
        self
    }

    /// Returns the selected option.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.selected.map(|i| self.options[i].as_str())
    }

    /// Returns the selected index.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        self.selected
    }

    /// Selects an option; out-of-range indices are ignored.
    pub fn set_index(&mut self, index: usize) {
        if index < self.options.len() {
            self.selected = Some(index);
        }
    }

    /// Returns the options.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Returns true while the option list is open.
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Rectangle of option row `index`.
    #[must_use]
    pub fn option_rect(&self, index: usize) -> Rect {
        self.rect.stacked(index + 1)
    }

    fn option_at(&self, pointer: Vec2) -> Option<usize> {
        (0..self.options.len()).find(|&i| self.option_rect(i).contains(pointer))
    }

    /// Updates at the context's pointer. Returns true when an option was picked.
    pub fn update(&mut self, ctx: &mut Context) -> bool {
        let pointer = ctx.pointer();
        self.update_at(ctx, pointer)
    }

    /// Updates at an explicit pointer. Returns true when an option was picked.
    ///
    /// A header click toggles the list. While open, a click on a row selects
    /// it and closes the list; clicks elsewhere leave it open.
    pub fn update_at(&mut self, ctx: &mut Context, pointer: Vec2) -> bool {
        let response = self.control.interact_rect(ctx, pointer, self.rect);
        if response.clicked {
            self.control.play_click(ctx);
            self.expanded = !self.expanded;
            self.hovered_option = None;
            return false;
        }

        if !self.expanded {
            self.hovered_option = None;
            return false;
        }

        self.hovered_option = self.option_at(pointer);
        if let Some(index) = self.hovered_option {
            if ctx.input().mouse_clicked(MouseButton::Left) {
                self.selected = Some(index);
                self.expanded = false;
                self.hovered_option = None;
                self.control.play_click(ctx);
                debug!(index, option = %self.options[index], "dropdown selection");
                return true;
            }
        }
        false
    }

    /// Draws with the "Select" placeholder and no outline.
    pub fn draw(&self, renderer: &mut UIRenderer, text: TextStyle, style: DropdownStyle) {
        self.draw_header(renderer, text, style, "Select");
        if self.expanded {
            for i in 0..self.options.len() {
                self.draw_option(renderer, text, style, i);
            }
        }
    }

    /// Draws with outline, row dividers and a custom placeholder.
    #[allow(clippy::cast_precision_loss)]
    pub fn draw_ex(&self, renderer: &mut UIRenderer, text: TextStyle, style: DropdownStyle, placeholder: &str) {
        self.draw_header(renderer, text, style, placeholder);
        let outline = style.outline_width > 0.0;

        if self.expanded {
            for i in 0..self.options.len() {
                self.draw_option(renderer, text, style, i);
                if outline {
                    let row = self.option_rect(i);
                    renderer.rect(Rect::new(row.x, row.y, row.width, style.outline_width), style.outline);
                }
            }
        }

        if outline {
            let rows = if self.expanded { self.options.len() as f32 } else { 0.0 };
            let total = Rect::new(self.rect.x, self.rect.y, self.rect.width, self.rect.height * (rows + 1.0));
            renderer.rect_outline(total, style.outline_width, style.outline);
        }
    }

    fn draw_header(&self, renderer: &mut UIRenderer, text: TextStyle, style: DropdownStyle, placeholder: &str) {
        let col = if self.is_hovered() { style.text_hover } else { style.text };
        renderer.rect(self.rect, style.background);
        let label = self.value().unwrap_or(placeholder);
        Self::draw_row_text(renderer, text, self.rect, label, col);
    }

    fn draw_option(&self, renderer: &mut UIRenderer, text: TextStyle, style: DropdownStyle, index: usize) {
        let row = self.option_rect(index);
        let fill = if self.hovered_option == Some(index) {
            style.option_hover
        } else {
            style.option_background
        };
        renderer.rect(row, fill);
        Self::draw_row_text(renderer, text, row, &self.options[index], style.text);
    }

    fn draw_row_text(renderer: &mut UIRenderer, text: TextStyle, row: Rect, label: &str, color: Color) {
        let size = renderer.measure_text(text, label, SPACING);
        let position = Vec2::new(row.x + TEXT_INSET, row.y + (row.height - size.y) / 2.0);
        renderer.text(label, position, text, SPACING, color);
    }
}

impl Widget for Dropdown {
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
    use crate::render::RenderCommand;

    fn click(ctx: &mut Context) {
        ctx.begin_frame();
        ctx.input_mut().mouse_button_down(MouseButton::Left);
    }

    fn dropdown() -> Dropdown {
        Dropdown::new(Rect::new(0.0, 0.0, 100.0, 20.0), ["red", "green", "blue"], None)
    }

    #[test]
    fn test_header_click_toggles() {
        let mut ctx = Context::default();
        let mut dd = dropdown();
        let header = Vec2::new(10.0, 10.0);

        click(&mut ctx);
        assert!(!dd.update_at(&mut ctx, header));
        assert!(dd.is_expanded());

        click(&mut ctx);
        assert!(!dd.update_at(&mut ctx, header));
        assert!(!dd.is_expanded());
        assert_eq!(dd.value(), None);
    }

    #[test]
    fn test_select_row() {
        let mut ctx = Context::default();
        let mut dd = dropdown();

        click(&mut ctx);
        dd.update_at(&mut ctx, Vec2::new(10.0, 10.0));

        click(&mut ctx);
        assert!(dd.update_at(&mut ctx, Vec2::new(10.0, 50.0)));
        assert_eq!(dd.index(), Some(1));
        assert_eq!(dd.value(), Some("green"));
        assert!(!dd.is_expanded());
    }

    #[test]
    fn test_click_outside_keeps_open() {
        let mut ctx = Context::default();
        let mut dd = dropdown();

        click(&mut ctx);
        dd.update_at(&mut ctx, Vec2::new(10.0, 10.0));

        click(&mut ctx);
        assert!(!dd.update_at(&mut ctx, Vec2::new(300.0, 300.0)));
        assert!(dd.is_expanded());
    }

    #[test]
    fn test_rows_ignored_while_closed() {
        let mut ctx = Context::default();
        let mut dd = dropdown();

        click(&mut ctx);
        assert!(!dd.update_at(&mut ctx, Vec2::new(10.0, 30.0)));
        assert_eq!(dd.value(), None);
    }

    #[test]
    fn test_set_index_ignores_out_of_range() {
        let mut dd = Dropdown::new(Rect::new(0.0, 0.0, 100.0, 20.0), ["a"], Some(5));
        assert_eq!(dd.index(), None);
        dd.set_index(3);
        assert_eq!(dd.index(), None);
        dd.set_index(0);
        assert_eq!(dd.value(), Some("a"));
    }

    #[test]
    fn test_draw_highlights_hovered_row() {
        let mut ctx = Context::default();
        let mut dd = dropdown();
        let style = DropdownStyle::default();

        click(&mut ctx);
        dd.update_at(&mut ctx, Vec2::new(10.0, 10.0));
        ctx.begin_frame();
        dd.update_at(&mut ctx, Vec2::new(10.0, 70.0));

        let mut renderer = UIRenderer::default();
        dd.draw(&mut renderer, TextStyle::default(), style);

        let fills: Vec<_> = renderer
            .commands()
            .iter()
            .filter_map(|c| match c {
                RenderCommand::Rect { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(
            fills,
            vec![
                style.background,
                style.option_background,
                style.option_background,
                style.option_hover,
            ]
        );
    }

    #[test]
    fn test_draw_ex_placeholder() {
        let dd = dropdown();
        let mut renderer = UIRenderer::default();
        dd.draw_ex(&mut renderer, TextStyle::default(), DropdownStyle::default(), "Pick one");

        assert!(renderer
            .commands()
            .iter()
            .any(|c| matches!(c, RenderCommand::Text { text, .. } if text == "Pick one")));
    }
}

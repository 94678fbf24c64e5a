//! # RAYUI
//!
//! Immediate-mode widgets for a host 2D renderer:
//! - Buttons, toggle labels, checkboxes, hover text
//! - Sliders and option sliders
//! - Dropdowns, text inputs, keybind inputs, numeric inputs
//! - Color pickers and progress bars
//! - Delayed hover tooltips for any of them
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      FRAME PIPELINE                       │
//! ├──────────────────────────────────────────────────────────┤
//! │  Host input → InputState → widget.update() → draw()      │
//! │       ↓             ↓              ↓            ↓        │
//! │   set_time     Context      Control/Hover   RenderCommand│
//! │                                 ↓               ↓        │
//! │                          HoverRegistry →  draw_tooltips  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The caller owns every widget and one [`Context`]. Each frame it fills the
//! context's [`InputState`], calls `update` on its widgets, then `draw`, then
//! [`Context::draw_tooltips`], and finally replays the queued
//! [`RenderCommand`]s and sound cues with its own backend.
//!
//! ```
//! use rayui::{Button, Context};
//!
//! let mut ctx = Context::default();
//! let mut button = Button::new(10.0, 10.0, 120.0, 40.0, "Play");
//!
//! ctx.begin_frame();
//! ctx.input_mut().set_mouse_pos(20.0, 20.0);
//! let clicked = button.update(&mut ctx);
//! assert!(!clicked);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod context;
pub mod error;
pub mod input;
pub mod layout;
pub mod render;
pub mod style;
pub mod widget;

pub use config::{TooltipPlacement, UiConfig};
pub use context::{Context, SoundId};
pub use error::{UiError, UiResult};
pub use input::{InputState, Key, MouseButton};
pub use layout::{Rect, Triangle, Vec2};
pub use render::{Image, MonospaceMetrics, RenderCommand, TextMetrics, TextureHost, TextureId, UIRenderer};
pub use style::{Color, FontId, Hsv, TextStyle};
pub use widget::{
    Arrow, Button, ButtonStyle, Checkbox, CheckboxTextures, ColorPicker, ColorPickerMode, ColorPickerStyle,
    Control, Dropdown, DropdownStyle, HoverRegistry, HoverText, Hoverable, InputType, KeybindInput, KeybindStyle,
    NumericInput, NumericInputStyle, OptionSlider, ProgressBar, Response, Slider, TextInput, TextInputStyle,
    ToggleLabel, ToggleStyle, TooltipConfig, TooltipHandle, Widget,
};

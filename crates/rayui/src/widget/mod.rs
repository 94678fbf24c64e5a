//! Widget kinds.
//!
//! Every widget owns its state and a [`Control`]. The caller drives it with
//! `update` once per frame and `draw` when rendering; no widget depends on
//! another.

mod button;
mod checkbox;
mod color_picker;
mod core;
mod dropdown;
mod hover_text;
mod keybind;
mod numeric_input;
mod progress_bar;
mod slider;
mod text_input;
mod toggle;
mod tooltip;

pub use button::{Button, ButtonStyle};
pub use checkbox::{Checkbox, CheckboxTextures, DEFAULT_CHECKBOX_SIZE};
pub use color_picker::{ColorPicker, ColorPickerMode, ColorPickerStyle};
pub use self::core::{Control, Hoverable, Response, Widget};
pub use dropdown::{Dropdown, DropdownStyle};
pub use hover_text::HoverText;
pub use keybind::{KeybindInput, KeybindStyle};
pub use numeric_input::{Arrow, NumericInput, NumericInputStyle};
pub use progress_bar::ProgressBar;
pub use slider::{OptionSlider, Slider, BAR_HEIGHT};
pub use text_input::{InputType, TextInput, TextInputStyle};
pub use toggle::{ToggleLabel, ToggleStyle};
pub use tooltip::{HoverRegistry, TooltipConfig, TooltipHandle};

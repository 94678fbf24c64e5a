//! Input handling for UI.
//!
//! The host fills an [`InputState`] once per frame (pointer, buttons, keys,
//! typed characters, clock) and every widget reads it during `update`.

use crate::layout::Vec2;

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button (scroll wheel click).
    Middle,
}

macro_rules! keys {
    ($($(#[$doc:meta])* $key:ident => $name:literal,)*) => {
        /// Keyboard key.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Key {
            $($(#[$doc])* $key,)*
        }

        impl Key {
            /// Every key, in declaration order.
            pub const ALL: &'static [Key] = &[$(Key::$key,)*];

            /// Display name used by the keybind widget.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Key::$key => $name,)*
                }
            }
        }
    };
}

keys! {
    /// Apostrophe.
    Apostrophe => "'",
    /// Comma.
    Comma => ",",
    /// Minus.
    Minus => "-",
    /// Period.
    Period => ".",
    /// Slash.
    Slash => "/",
    /// Semicolon.
    Semicolon => ";",
    /// Equal sign.
    Equal => "=",
    /// Left bracket.
    LeftBracket => "[",
    /// Backslash.
    Backslash => "\\",
    /// Right bracket.
    RightBracket => "]",
    /// Grave accent.
    Grave => "`",
    /// Number keys.
    Num0 => "0", Num1 => "1", Num2 => "2", Num3 => "3", Num4 => "4",
    /// More number keys.
    Num5 => "5", Num6 => "6", Num7 => "7", Num8 => "8", Num9 => "9",
    /// Alphabetic keys.
    A => "A", B => "B", C => "C", D => "D", E => "E", F => "F", G => "G",
    /// More alphabetic keys.
    H => "H", I => "I", J => "J", K => "K", L => "L", M => "M", N => "N",
    /// More alphabetic keys.
    O => "O", P => "P", Q => "Q", R => "R", S => "S", T => "T", U => "U",
    /// More alphabetic keys.
    V => "V", W => "W", X => "X", Y => "Y", Z => "Z",
    /// Function keys.
    F1 => "F1", F2 => "F2", F3 => "F3", F4 => "F4", F5 => "F5", F6 => "F6",
    /// More function keys.
    F7 => "F7", F8 => "F8", F9 => "F9", F10 => "F10", F11 => "F11", F12 => "F12",
    /// Space bar.
    Space => "SPACE",
    /// Escape key.
    Escape => "ESC",
    /// Enter/Return key.
    Enter => "ENTER",
    /// Tab key.
    Tab => "TAB",
    /// Backspace key.
    Backspace => "BACKSPACE",
    /// Insert key.
    Insert => "INSERT",
    /// Delete key.
    Delete => "DELETE",
    /// Home key.
    Home => "HOME",
    /// End key.
    End => "END",
    /// Page up.
    PageUp => "PAGE UP",
    /// Page down.
    PageDown => "PAGE DOWN",
    /// Arrow up.
    Up => "UP",
    /// Arrow down.
    Down => "DOWN",
    /// Arrow left.
    Left => "LEFT",
    /// Arrow right.
    Right => "RIGHT",
    /// Caps lock.
    CapsLock => "CAPS LOCK",
    /// Scroll lock.
    ScrollLock => "SCROLL LOCK",
    /// Num lock.
    NumLock => "NUM LOCK",
    /// Print screen.
    PrintScreen => "PRINT SCREEN",
    /// Pause.
    Pause => "PAUSE",
    /// Modifiers.
    LeftShift => "LEFT SHIFT", RightShift => "RIGHT SHIFT",
    /// Control modifiers.
    LeftControl => "LEFT CTRL", RightControl => "RIGHT CTRL",
    /// Alt modifiers.
    LeftAlt => "LEFT ALT", RightAlt => "RIGHT ALT",
    /// Super modifiers.
    LeftSuper => "LEFT SUPER", RightSuper => "RIGHT SUPER",
    /// Context menu key.
    KbMenu => "KB MENU",
    /// Numpad digits.
    Kp0 => "NUMPAD 0", Kp1 => "NUMPAD 1", Kp2 => "NUMPAD 2", Kp3 => "NUMPAD 3", Kp4 => "NUMPAD 4",
    /// More numpad digits.
    Kp5 => "NUMPAD 5", Kp6 => "NUMPAD 6", Kp7 => "NUMPAD 7", Kp8 => "NUMPAD 8", Kp9 => "NUMPAD 9",
    /// Numpad operators.
    KpDecimal => "NUMPAD .", KpDivide => "NUMPAD /", KpMultiply => "NUMPAD *",
    /// More numpad operators.
    KpSubtract => "NUMPAD -", KpAdd => "NUMPAD +", KpEnter => "NUMPAD ENTER", KpEqual => "NUMPAD =",
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of mouse buttons, one bit each.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Buttons(u8);

impl Buttons {
    const fn bit(button: MouseButton) -> u8 {
        match button {
            MouseButton::Left => 0b001,
            MouseButton::Right => 0b010,
            MouseButton::Middle => 0b100,
        }
    }

    fn insert(&mut self, button: MouseButton) {
        self.0 |= Self::bit(button);
    }

    fn remove(&mut self, button: MouseButton) {
        self.0 &= !Self::bit(button);
    }

    const fn contains(self, button: MouseButton) -> bool {
        self.0 & Self::bit(button) != 0
    }
}

/// Snapshot of host input for one frame.
///
/// Edges (`pressed`, `released`, typed text) last one frame; held state
/// and the pointer carry over until the host changes them.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pointer: Vec2,
    prev_pointer: Vec2,
    pressed: Buttons,
    released: Buttons,
    held: Buttons,
    /// Keys that went down this frame, in press order.
    keys_pressed: Vec<Key>,
    keys_held: Vec<Key>,
    typed: String,
    /// Host clock, seconds.
    time: f64,
}

impl InputState {
    /// Creates a new empty input state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new frame, dropping last frame's edges and typed text.
    pub fn begin_frame(&mut self) {
        self.prev_pointer = self.pointer;
        self.pressed = Buttons::default();
        self.released = Buttons::default();
        self.keys_pressed.clear();
        self.typed.clear();
    }

    /// Sets the frame clock.
    pub fn set_time(&mut self, seconds: f64) {
        self.time = seconds;
    }

    /// Returns the frame clock (seconds).
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Moves the pointer.
    pub fn set_mouse_pos(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    /// Returns the pointer position.
    #[must_use]
    pub fn mouse_pos(&self) -> Vec2 {
        self.pointer
    }

    /// Pointer movement since the previous frame.
    #[must_use]
    pub fn mouse_delta(&self) -> Vec2 {
        self.pointer - self.prev_pointer
    }

    /// Records a mouse button going down.
    pub fn mouse_button_down(&mut self, button: MouseButton) {
        self.pressed.insert(button);
        self.held.insert(button);
    }

    /// Records a mouse button going up.
    pub fn mouse_button_up(&mut self, button: MouseButton) {
        self.released.insert(button);
        self.held.remove(button);
    }

    /// Returns true if `button` went down this frame.
    #[must_use]
    pub fn mouse_clicked(&self, button: MouseButton) -> bool {
        self.pressed.contains(button)
    }

    /// Returns true if `button` went up this frame.
    #[must_use]
    pub fn mouse_released(&self, button: MouseButton) -> bool {
        self.released.contains(button)
    }

    /// Returns true while `button` is held.
    #[must_use]
    pub fn mouse_down(&self, button: MouseButton) -> bool {
        self.held.contains(button)
    }

    /// Records a key going down. Repeats while held are ignored.
    pub fn key_down(&mut self, key: Key) {
        if !self.keys_held.contains(&key) {
            self.keys_held.push(key);
            self.keys_pressed.push(key);
        }
    }

    /// Records a key going up.
    pub fn key_up(&mut self, key: Key) {
        self.keys_held.retain(|&k| k != key);
    }

    /// Returns true if `key` went down this frame.
    #[must_use]
    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Returns true while `key` is held.
    #[must_use]
    pub fn key_held(&self, key: Key) -> bool {
        self.keys_held.contains(&key)
    }

    /// Earliest key that went down this frame.
    #[must_use]
    pub fn first_key_pressed(&self) -> Option<Key> {
        self.keys_pressed.first().copied()
    }

    /// Appends characters typed this frame.
    pub fn text(&mut self, text: &str) {
        self.typed.push_str(text);
    }

    /// Characters typed this frame.
    pub fn typed_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.typed.chars()
    }
}

//! Physical input sources.
//!
//! A binding points at exactly one physical control. The four identifier
//! enums below name the controls; [`InputSource`] is the tagged union over
//! them (plus [`InputSource::None`] for bindings whose identifier was not
//! recognized).
//!
//! ## Identifier names
//! Every identifier prints as its variant name and parses from exactly that
//! name (case-sensitive): `"Space"`, `"Axis2"`, `"Button7"`, `"Hat0"`. A few
//! keys also accept an alternate spelling (`"LShift"` for `ShiftLeft`).
//! Numeric codes and padded names are not identifiers.
//!
//! ## Parse priority
//! The same string could in principle be valid for more than one kind. When an
//! identifier is resolved by name, kinds are tried in [`PARSE_ORDER`]
//! (key, axis, button, hat) and the first match wins.

use strum::{Display, EnumIter, EnumString};

/// Keyboard key identifiers.
///
/// Variant names are the canonical names. Alternate spellings found in older
/// profiles (`LShift`, `Back`, `Grave`, ...) parse to the same variant but
/// always print the canonical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Key {
    #[strum(to_string = "ShiftLeft", serialize = "LShift")]
    ShiftLeft,
    #[strum(to_string = "ShiftRight", serialize = "RShift")]
    ShiftRight,
    #[strum(to_string = "ControlLeft", serialize = "LControl")]
    ControlLeft,
    #[strum(to_string = "ControlRight", serialize = "RControl")]
    ControlRight,
    #[strum(to_string = "AltLeft", serialize = "LAlt")]
    AltLeft,
    #[strum(to_string = "AltRight", serialize = "RAlt")]
    AltRight,
    #[strum(to_string = "WinLeft", serialize = "LWin", serialize = "Command")]
    WinLeft,
    #[strum(to_string = "WinRight", serialize = "RWin")]
    WinRight,
    Menu,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    F13,
    F14,
    F15,
    F16,
    F17,
    F18,
    F19,
    F20,
    F21,
    F22,
    F23,
    F24,
    F25,
    F26,
    F27,
    F28,
    F29,
    F30,
    F31,
    F32,
    F33,
    F34,
    F35,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Space,
    Tab,
    #[strum(to_string = "BackSpace", serialize = "Back")]
    BackSpace,
    Insert,
    Delete,
    PageUp,
    PageDown,
    Home,
    End,
    CapsLock,
    ScrollLock,
    PrintScreen,
    Pause,
    NumLock,
    Clear,
    Sleep,
    Keypad0,
    Keypad1,
    Keypad2,
    Keypad3,
    Keypad4,
    Keypad5,
    Keypad6,
    Keypad7,
    Keypad8,
    Keypad9,
    KeypadDivide,
    KeypadMultiply,
    #[strum(to_string = "KeypadSubtract", serialize = "KeypadMinus")]
    KeypadSubtract,
    #[strum(to_string = "KeypadAdd", serialize = "KeypadPlus")]
    KeypadAdd,
    #[strum(to_string = "KeypadDecimal", serialize = "KeypadPeriod")]
    KeypadDecimal,
    KeypadEnter,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Number0,
    Number1,
    Number2,
    Number3,
    Number4,
    Number5,
    Number6,
    Number7,
    Number8,
    Number9,
    #[strum(to_string = "Tilde", serialize = "Grave")]
    Tilde,
    Minus,
    Plus,
    #[strum(to_string = "BracketLeft", serialize = "LBracket")]
    BracketLeft,
    #[strum(to_string = "BracketRight", serialize = "RBracket")]
    BracketRight,
    Semicolon,
    Quote,
    Comma,
    Period,
    Slash,
    BackSlash,
    NonUSBackSlash,
}

/// Joystick axis identifiers (device-local axis slots).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum JoystickAxis {
    Axis0,
    Axis1,
    Axis2,
    Axis3,
    Axis4,
    Axis5,
    Axis6,
    Axis7,
    Axis8,
    Axis9,
    Axis10,
}

/// Joystick button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum JoystickButton {
    Button0,
    Button1,
    Button2,
    Button3,
    Button4,
    Button5,
    Button6,
    Button7,
    Button8,
    Button9,
    Button10,
    Button11,
    Button12,
    Button13,
    Button14,
    Button15,
    Button16,
    Button17,
    Button18,
    Button19,
    Button20,
    Button21,
    Button22,
    Button23,
    Button24,
    Button25,
    Button26,
    Button27,
    Button28,
    Button29,
    Button30,
    Button31,
}

/// Joystick hat (POV / D-pad) identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum JoystickHat {
    Hat0,
    Hat1,
    Hat2,
    Hat3,
}

/// Category of a physical source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SourceKind {
    #[strum(to_string = "keyboard key")]
    Key,
    #[strum(to_string = "joystick axis")]
    JoystickAxis,
    #[strum(to_string = "joystick button")]
    JoystickButton,
    #[strum(to_string = "joystick hat")]
    JoystickHat,
}

/// Order in which source kinds are tried when resolving an identifier by name.
pub const PARSE_ORDER: [SourceKind; 4] = [
    SourceKind::Key,
    SourceKind::JoystickAxis,
    SourceKind::JoystickButton,
    SourceKind::JoystickHat,
];

impl SourceKind {
    /// Parse `name` as an identifier of this kind only.
    pub fn parse(self, name: &str) -> Option<InputSource> {
        match self {
            SourceKind::Key => name.parse().ok().map(InputSource::Key),
            SourceKind::JoystickAxis => name.parse().ok().map(InputSource::JoystickAxis),
            SourceKind::JoystickButton => name.parse().ok().map(InputSource::JoystickButton),
            SourceKind::JoystickHat => name.parse().ok().map(InputSource::JoystickHat),
        }
    }
}

/// The physical control a binding reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputSource {
    Key(Key),
    JoystickAxis(JoystickAxis),
    JoystickButton(JoystickButton),
    JoystickHat(JoystickHat),
    /// No recognized control. Never active.
    #[default]
    None,
}

impl InputSource {
    /// Resolve an identifier by trying each kind in [`PARSE_ORDER`].
    ///
    /// Returns [`InputSource::None`] when no kind recognizes `name`. `name` is
    /// not trimmed, and numeric codes such as `"57"` are rejected.
    pub fn parse(name: &str) -> InputSource {
        PARSE_ORDER
            .iter()
            .find_map(|kind| kind.parse(name))
            .unwrap_or(InputSource::None)
    }

    pub fn kind(&self) -> Option<SourceKind> {
        match self {
            InputSource::Key(_) => Some(SourceKind::Key),
            InputSource::JoystickAxis(_) => Some(SourceKind::JoystickAxis),
            InputSource::JoystickButton(_) => Some(SourceKind::JoystickButton),
            InputSource::JoystickHat(_) => Some(SourceKind::JoystickHat),
            InputSource::None => None,
        }
    }

    /// Identifier name of the control, or `None` for a sourceless value.
    pub fn identifier(&self) -> Option<String> {
        match self {
            InputSource::Key(k) => Some(k.to_string()),
            InputSource::JoystickAxis(a) => Some(a.to_string()),
            InputSource::JoystickButton(b) => Some(b.to_string()),
            InputSource::JoystickHat(h) => Some(h.to_string()),
            InputSource::None => None,
        }
    }
}

impl From<Key> for InputSource {
    fn from(key: Key) -> Self {
        InputSource::Key(key)
    }
}

impl From<JoystickAxis> for InputSource {
    fn from(axis: JoystickAxis) -> Self {
        InputSource::JoystickAxis(axis)
    }
}

impl From<JoystickButton> for InputSource {
    fn from(button: JoystickButton) -> Self {
        InputSource::JoystickButton(button)
    }
}

impl From<JoystickHat> for InputSource {
    fn from(hat: JoystickHat) -> Self {
        InputSource::JoystickHat(hat)
    }
}

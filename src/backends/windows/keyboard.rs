//! System keyboard via `GetAsyncKeyState`.
//!
//! Win32 exposes one merged keyboard, so only device index `0` reports keys.
//! Left/right modifier variants map to their sided virtual-key codes
//! (`VK_LSHIFT` etc.), which `GetAsyncKeyState` distinguishes. `KeypadEnter`
//! shares `VK_RETURN` with `Enter`; `F25`..`F35` have no virtual-key code and
//! never read as down.

use crate::device::InputBackend;
use crate::source::Key;
use windows_sys::Win32::UI::Input::KeyboardAndMouse::*;

/// Reads the live Win32 keyboard state.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsKeyboard;

impl WindowsKeyboard {
    pub fn new() -> Self {
        WindowsKeyboard
    }
}

impl InputBackend for WindowsKeyboard {
    fn is_key_down(&self, index: i32, key: Key) -> bool {
        if index != 0 {
            return false;
        }
        let Some(vk) = virtual_key(key) else {
            return false;
        };
        // High bit set means the key is down right now.
        let state = unsafe { GetAsyncKeyState(vk as i32) };
        state < 0
    }
}

#[inline]
const fn ascii(c: u8) -> VIRTUAL_KEY {
    c as VIRTUAL_KEY
}

/// Win32 virtual-key code for `key`, if Win32 has one.
pub(crate) fn virtual_key(key: Key) -> Option<VIRTUAL_KEY> {
    let vk = match key {
        Key::ShiftLeft => VK_LSHIFT,
        Key::ShiftRight => VK_RSHIFT,
        Key::ControlLeft => VK_LCONTROL,
        Key::ControlRight => VK_RCONTROL,
        Key::AltLeft => VK_LMENU,
        Key::AltRight => VK_RMENU,
        Key::WinLeft => VK_LWIN,
        Key::WinRight => VK_RWIN,
        Key::Menu => VK_APPS,
        Key::F1 => VK_F1,
        Key::F2 => VK_F2,
        Key::F3 => VK_F3,
        Key::F4 => VK_F4,
        Key::F5 => VK_F5,
        Key::F6 => VK_F6,
        Key::F7 => VK_F7,
        Key::F8 => VK_F8,
        Key::F9 => VK_F9,
        Key::F10 => VK_F10,
        Key::F11 => VK_F11,
        Key::F12 => VK_F12,
        Key::F13 => VK_F13,
        Key::F14 => VK_F14,
        Key::F15 => VK_F15,
        Key::F16 => VK_F16,
        Key::F17 => VK_F17,
        Key::F18 => VK_F18,
        Key::F19 => VK_F19,
        Key::F20 => VK_F20,
        Key::F21 => VK_F21,
        Key::F22 => VK_F22,
        Key::F23 => VK_F23,
        Key::F24 => VK_F24,
        Key::F25
        | Key::F26
        | Key::F27
        | Key::F28
        | Key::F29
        | Key::F30
        | Key::F31
        | Key::F32
        | Key::F33
        | Key::F34
        | Key::F35 => return None,
        Key::Up => VK_UP,
        Key::Down => VK_DOWN,
        Key::Left => VK_LEFT,
        Key::Right => VK_RIGHT,
        Key::Enter => VK_RETURN,
        Key::Escape => VK_ESCAPE,
        Key::Space => VK_SPACE,
        Key::Tab => VK_TAB,
        Key::BackSpace => VK_BACK,
        Key::Insert => VK_INSERT,
        Key::Delete => VK_DELETE,
        Key::PageUp => VK_PRIOR,
        Key::PageDown => VK_NEXT,
        Key::Home => VK_HOME,
        Key::End => VK_END,
        Key::CapsLock => VK_CAPITAL,
        Key::ScrollLock => VK_SCROLL,
        Key::PrintScreen => VK_SNAPSHOT,
        Key::Pause => VK_PAUSE,
        Key::NumLock => VK_NUMLOCK,
        Key::Clear => VK_CLEAR,
        Key::Sleep => VK_SLEEP,
        Key::Keypad0 => VK_NUMPAD0,
        Key::Keypad1 => VK_NUMPAD1,
        Key::Keypad2 => VK_NUMPAD2,
        Key::Keypad3 => VK_NUMPAD3,
        Key::Keypad4 => VK_NUMPAD4,
        Key::Keypad5 => VK_NUMPAD5,
        Key::Keypad6 => VK_NUMPAD6,
        Key::Keypad7 => VK_NUMPAD7,
        Key::Keypad8 => VK_NUMPAD8,
        Key::Keypad9 => VK_NUMPAD9,
        Key::KeypadDivide => VK_DIVIDE,
        Key::KeypadMultiply => VK_MULTIPLY,
        Key::KeypadSubtract => VK_SUBTRACT,
        Key::KeypadAdd => VK_ADD,
        Key::KeypadDecimal => VK_DECIMAL,
        Key::KeypadEnter => VK_RETURN,
        Key::A => ascii(b'A'),
        Key::B => ascii(b'B'),
        Key::C => ascii(b'C'),
        Key::D => ascii(b'D'),
        Key::E => ascii(b'E'),
        Key::F => ascii(b'F'),
        Key::G => ascii(b'G'),
        Key::H => ascii(b'H'),
        Key::I => ascii(b'I'),
        Key::J => ascii(b'J'),
        Key::K => ascii(b'K'),
        Key::L => ascii(b'L'),
        Key::M => ascii(b'M'),
        Key::N => ascii(b'N'),
        Key::O => ascii(b'O'),
        Key::P => ascii(b'P'),
        Key::Q => ascii(b'Q'),
        Key::R => ascii(b'R'),
        Key::S => ascii(b'S'),
        Key::T => ascii(b'T'),
        Key::U => ascii(b'U'),
        Key::V => ascii(b'V'),
        Key::W => ascii(b'W'),
        Key::X => ascii(b'X'),
        Key::Y => ascii(b'Y'),
        Key::Z => ascii(b'Z'),
        Key::Number0 => ascii(b'0'),
        Key::Number1 => ascii(b'1'),
        Key::Number2 => ascii(b'2'),
        Key::Number3 => ascii(b'3'),
        Key::Number4 => ascii(b'4'),
        Key::Number5 => ascii(b'5'),
        Key::Number6 => ascii(b'6'),
        Key::Number7 => ascii(b'7'),
        Key::Number8 => ascii(b'8'),
        Key::Number9 => ascii(b'9'),
        // OEM codes are for the US layout.
        Key::Tilde => VK_OEM_3,
        Key::Minus => VK_OEM_MINUS,
        Key::Plus => VK_OEM_PLUS,
        Key::BracketLeft => VK_OEM_4,
        Key::BracketRight => VK_OEM_6,
        Key::Semicolon => VK_OEM_1,
        Key::Quote => VK_OEM_7,
        Key::Comma => VK_OEM_COMMA,
        Key::Period => VK_OEM_PERIOD,
        Key::Slash => VK_OEM_2,
        Key::BackSlash => VK_OEM_5,
        Key::NonUSBackSlash => VK_OEM_102,
    };
    Some(vk)
}

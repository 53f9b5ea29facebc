//! Input backends for `inputprofile`.
//!
//! Implementations of [`InputBackend`](crate::device::InputBackend) that bindings
//! read key state from.
//!
//! - [`virtual_input::VirtualKeyboard`]: in-memory, available everywhere.
//! - `windows::WindowsKeyboard`: the Win32 system keyboard (Windows only).

pub mod virtual_input;

#[cfg(target_os = "windows")]
#[cfg_attr(docsrs, doc(cfg(target_os = "windows")))]
pub mod windows;

use crate::device::InputBackend;

/// The keyboard backend for the current platform.
///
/// Windows reads the system keyboard; elsewhere this is an empty
/// [`VirtualKeyboard`](virtual_input::VirtualKeyboard), so every key reads as up.
pub fn system_keyboard() -> Box<dyn InputBackend> {
    #[cfg(target_os = "windows")]
    {
        Box::new(windows::WindowsKeyboard::new())
    }

    #[cfg(not(target_os = "windows"))]
    {
        log::debug!("no system keyboard backend on this platform, using a virtual keyboard");
        Box::new(virtual_input::VirtualKeyboard::new())
    }
}

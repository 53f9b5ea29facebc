#![cfg(target_os = "windows")]

//! Windows input backends.
//!
//! Only the keyboard is implemented. Most users construct a
//! [`WindowsKeyboard`] once and pass it to
//! [`InputProfile::get_state`](crate::InputProfile::get_state) every frame.

pub mod keyboard;

pub use keyboard::WindowsKeyboard;

//! inputprofile — named input actions for games and tools.
//!
//! Bind action names (`"Jump"`) to keys or joystick controls, group the
//! bindings into an [`InputProfile`], and poll each action once per frame to get
//! an [`InputState`] of `Up`, `Down`, or `Pressed` (the release edge).
//!
//! ```
//! use inputprofile::backends::virtual_input::VirtualKeyboard;
//! use inputprofile::{InputBinding, InputProfile, InputState, Key};
//!
//! let mut profile = InputProfile::new("player", vec![InputBinding::key("Jump", Key::Space)]);
//! let mut kb = VirtualKeyboard::new();
//!
//! kb.press(0, Key::Space);
//! assert_eq!(profile.get_state(&kb, "Jump").unwrap(), InputState::Down);
//! kb.release(0, Key::Space);
//! assert_eq!(profile.get_state(&kb, "Jump").unwrap(), InputState::Pressed);
//! assert_eq!(profile.get_state(&kb, "Jump").unwrap(), InputState::Up);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod backends;
pub mod binding;
pub mod device;
pub mod error;
pub mod profile;
pub mod source;

pub use binding::*;
pub use device::*;
pub use error::{Error, Result};
pub use profile::*;
pub use source::*;

//! Input profiles and per-action state tracking.
//!
//! An [`InputProfile`] is a named, ordered list of [`InputBinding`]s read from
//! one device index. Polling an action with [`InputProfile::get_state`] yields
//! an [`InputState`]:
//!
//! ```text
//!            active                       inactive
//!   Up ───────────────▶ Down ───────────────────────▶ Pressed
//!    ▲                  │  ▲ active                      │
//!    │                  └──┘                             │ inactive
//!    └───────────────────────────────────────────────────┘
//! ```
//!
//! `Pressed` is reported on the **release** edge: the first poll after the
//! control goes from active to inactive, and only that one poll.
//!
//! # Profile files
//! JSON (default) or TOML, chosen by file extension:
//! ```json
//! {
//!   "name": "Player 1",
//!   "index": 0,
//!   "inputs": [
//!     { "actionName": "Jump", "inputName": "Space" },
//!     { "actionName": "Fire", "inputName": "ControlLeft" }
//!   ]
//! }
//! ```

use crate::binding::{BindingKey, InputBinding};
use crate::device::InputBackend;
use crate::error::{Error, Result};
use crate::source::InputSource;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// State of an action as seen by one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputState {
    /// Inactive, and was not active on the previous poll.
    #[default]
    Up,
    /// Active.
    Down,
    /// Inactive, but active on the previous poll (release edge).
    Pressed,
}

/// Named set of bindings plus edge-detection state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputProfile {
    #[serde(alias = "Name")]
    name: String,
    #[serde(default, alias = "Index")]
    index: i32,
    #[serde(alias = "Inputs")]
    inputs: Vec<InputBinding>,
    /// Bindings seen active on their previous poll.
    #[serde(skip)]
    just_down: HashSet<BindingKey>,
}

/// On-disk profile format, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProfileFormat {
    Json,
    Toml,
}

impl ProfileFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ProfileFormat::Toml,
            _ => ProfileFormat::Json,
        }
    }
}

impl InputProfile {
    /// Profile reading device index 0.
    pub fn new(name: impl Into<String>, inputs: Vec<InputBinding>) -> Self {
        Self::with_index(name, inputs, 0)
    }

    pub fn with_index(name: impl Into<String>, inputs: Vec<InputBinding>, index: i32) -> Self {
        Self {
            name: name.into(),
            index,
            inputs,
            just_down: HashSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inputs(&self) -> &[InputBinding] {
        &self.inputs
    }

    pub fn index(&self) -> i32 {
        self.index
    }

    /// The binding consulted for `action_name`: the first one in order.
    pub fn binding(&self, action_name: &str) -> Option<&InputBinding> {
        self.inputs.iter().find(|b| b.action_name() == action_name)
    }

    /// Poll `action_name` against `backend` and advance its edge state.
    ///
    /// - No binding for the action: [`InputState::Up`], nothing recorded.
    /// - Active: [`InputState::Down`] on every poll while held.
    /// - Inactive after an active poll: [`InputState::Pressed`], once.
    /// - Otherwise: [`InputState::Up`].
    ///
    /// If several bindings share the action name only the first is read.
    /// Errors from the binding (unsupported joystick sources) are returned
    /// without touching the edge state.
    pub fn get_state(
        &mut self,
        backend: &dyn InputBackend,
        action_name: &str,
    ) -> Result<InputState> {
        let Some(binding) = self.inputs.iter().find(|b| b.action_name() == action_name) else {
            return Ok(InputState::Up);
        };

        let key = binding.binding_key();
        if binding.is_active(backend, self.index)? {
            if self.just_down.insert(key) {
                trace!("{}: `{action_name}` down ({binding})", self.name);
            }
            Ok(InputState::Down)
        } else if self.just_down.remove(&key) {
            trace!("{}: `{action_name}` released ({binding})", self.name);
            Ok(InputState::Pressed)
        } else {
            Ok(InputState::Up)
        }
    }

    /// Forget all held bindings; the next poll of a released control is `Up`.
    pub fn reset(&mut self) {
        self.just_down.clear();
    }

    /// Fail on the first binding whose identifier was not recognized.
    pub fn validate(&self) -> Result<()> {
        match self.inputs.iter().find(|b| b.source() == InputSource::None) {
            Some(b) => Err(Error::SourcelessBinding {
                action: b.action_name().to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Load a profile from `path`.
    ///
    /// Returns `Ok(None)` when no file exists at `path`. Files ending in
    /// `.toml` are read as TOML, everything else as JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        if !path.is_file() {
            debug!("no input profile at {}", path.display());
            return Ok(None);
        }

        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let profile = match ProfileFormat::from_path(path) {
            ProfileFormat::Json => Self::from_json_str(&text)?,
            ProfileFormat::Toml => Self::from_toml_str(&text)?,
        };

        debug!(
            "loaded input profile `{}` from {} ({} bindings, device {})",
            profile.name,
            path.display(),
            profile.inputs.len(),
            profile.index
        );
        Ok(Some(profile))
    }

    /// Write the profile to `path`, as TOML for `.toml` files and JSON otherwise.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = match ProfileFormat::from_path(path) {
            ProfileFormat::Json => self.to_json_string()?,
            ProfileFormat::Toml => self.to_toml_string()?,
        };
        fs::write(path, text).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("saved input profile `{}` to {}", self.name, path.display());
        Ok(())
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

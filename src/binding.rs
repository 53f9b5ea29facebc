//! Action bindings.
//!
//! An [`InputBinding`] ties one logical action name to one physical
//! [`InputSource`]. Bindings are plain values: they are compared and hashed
//! over the action name and the full source (kind + identifier).
//!
//! On disk a binding is `{ "actionName": "Jump", "inputName": "Space" }`.
//! Reading one goes through [`InputBinding::from_names`], so unknown
//! identifiers load as sourceless bindings instead of failing the profile.

use crate::device::InputBackend;
use crate::error::{Error, Result};
use crate::source::{InputSource, JoystickAxis, JoystickButton, JoystickHat, Key, SourceKind};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name reported by a binding with no source.
pub const DEFAULT_INPUT_NAME: &str = "InputBinding";

/// Maps an action name to a physical control.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "BindingRepr", into = "BindingRepr")]
pub struct InputBinding {
    action_name: String,
    source: InputSource,
}

/// Stable identity of a binding, used for edge tracking.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BindingKey {
    pub action_name: String,
    pub source: InputSource,
}

impl InputBinding {
    pub fn new(action_name: impl Into<String>, source: impl Into<InputSource>) -> Self {
        Self {
            action_name: action_name.into(),
            source: source.into(),
        }
    }

    pub fn key(action_name: impl Into<String>, key: Key) -> Self {
        Self::new(action_name, key)
    }

    pub fn joystick_axis(action_name: impl Into<String>, axis: JoystickAxis) -> Self {
        Self::new(action_name, axis)
    }

    pub fn joystick_button(action_name: impl Into<String>, button: JoystickButton) -> Self {
        Self::new(action_name, button)
    }

    pub fn joystick_hat(action_name: impl Into<String>, hat: JoystickHat) -> Self {
        Self::new(action_name, hat)
    }

    /// Build a binding from an identifier name.
    ///
    /// `input_name` is tried as a key, then a joystick axis, then a button,
    /// then a hat ([`PARSE_ORDER`](crate::source::PARSE_ORDER)); the first
    /// match wins. If nothing matches the binding has no source: it is never
    /// active and its [`name`](Self::name) is [`DEFAULT_INPUT_NAME`].
    pub fn from_names(action_name: impl Into<String>, input_name: &str) -> Self {
        let action_name = action_name.into();
        let source = InputSource::parse(input_name);
        if source == InputSource::None {
            warn!(
                "action `{action_name}`: unknown input `{input_name}`, binding will never activate"
            );
        }
        Self {
            action_name,
            source,
        }
    }

    /// Like [`from_names`](Self::from_names), but rejects unknown identifiers.
    pub fn try_from_names(action_name: impl Into<String>, input_name: &str) -> Result<Self> {
        let action_name = action_name.into();
        match InputSource::parse(input_name) {
            InputSource::None => Err(Error::UnknownInput {
                action: action_name,
                input: input_name.to_string(),
            }),
            source => Ok(Self {
                action_name,
                source,
            }),
        }
    }

    pub fn action_name(&self) -> &str {
        &self.action_name
    }

    pub fn source(&self) -> InputSource {
        self.source
    }

    /// Display name of the bound control.
    pub fn name(&self) -> String {
        self.source
            .identifier()
            .unwrap_or_else(|| DEFAULT_INPUT_NAME.to_string())
    }

    pub fn binding_key(&self) -> BindingKey {
        BindingKey {
            action_name: self.action_name.clone(),
            source: self.source,
        }
    }

    /// Whether the bound control is currently active on device `index`.
    ///
    /// Keys are read from `backend`. A sourceless binding is never active.
    /// Joystick sources return [`Error::UnsupportedSource`].
    pub fn is_active(&self, backend: &dyn InputBackend, index: i32) -> Result<bool> {
        match self.source {
            InputSource::Key(key) => Ok(backend.is_key_down(index, key)),
            InputSource::None => Ok(false),
            InputSource::JoystickAxis(_) => Err(Error::UnsupportedSource(SourceKind::JoystickAxis)),
            InputSource::JoystickButton(_) => {
                Err(Error::UnsupportedSource(SourceKind::JoystickButton))
            }
            InputSource::JoystickHat(_) => Err(Error::UnsupportedSource(SourceKind::JoystickHat)),
        }
    }
}

impl fmt::Display for InputBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Serialized form of a binding.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BindingRepr {
    #[serde(alias = "ActionName")]
    action_name: String,
    #[serde(alias = "InputName")]
    input_name: String,
}

impl From<BindingRepr> for InputBinding {
    fn from(repr: BindingRepr) -> Self {
        InputBinding::from_names(repr.action_name, &repr.input_name)
    }
}

impl From<InputBinding> for BindingRepr {
    fn from(binding: InputBinding) -> Self {
        BindingRepr {
            input_name: binding.name(),
            action_name: binding.action_name,
        }
    }
}

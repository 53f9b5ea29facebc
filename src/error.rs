//! Error type shared by the whole crate.
//!
//! Two situations are deliberately *not* errors:
//! - a profile file that does not exist ([`InputProfile::load`](crate::InputProfile::load)
//!   returns `Ok(None)`), and
//! - an input identifier no source kind recognizes
//!   ([`InputBinding::from_names`](crate::InputBinding::from_names) degrades to a
//!   sourceless binding). Use the strict variants if you want those surfaced.

use crate::source::SourceKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to access profile file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON profile: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML profile: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("failed to write TOML profile: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Raised only by [`InputBinding::try_from_names`](crate::InputBinding::try_from_names).
    #[error("action `{action}`: `{input}` is not a key, joystick axis, button or hat")]
    UnknownInput { action: String, input: String },

    #[error("action `{action}` is not bound to any input")]
    SourcelessBinding { action: String },

    /// Polling for this source kind is not implemented.
    #[error("polling {0} inputs is not implemented")]
    UnsupportedSource(SourceKind),
}

pub type Result<T> = std::result::Result<T, Error>;

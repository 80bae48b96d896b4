//! Error types.
//!
//! - [`ConfigError`] – the INI file could not be read or holds an invalid value
//! - [`AssetError`] – an animation or sound name is not registered; fatal for the frame
//! - [`LevelLineError`] – one bad line in a level file; logged and skipped by the loader

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config file {path:?}: {reason}")]
    Load { path: PathBuf, reason: String },
    #[error("failed to parse config: {0}")]
    Parse(String),
    #[error("invalid value for [{section}] {key}: {reason}")]
    InvalidValue {
        section: String,
        key: String,
        reason: String,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("animation '{0}' is not registered")]
    MissingAnimation(String),
    #[error("sound '{0}' is not registered")]
    MissingSound(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum LevelLineError {
    #[error("expected 4 tokens, found {0}")]
    TokenCount(usize),
    #[error("unknown element type '{0}'")]
    UnknownElement(String),
    #[error("coordinate '{0}' is not a number")]
    BadCoordinate(String),
}

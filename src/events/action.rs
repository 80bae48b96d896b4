//! Named actions and the key bindings that produce them.
//!
//! Input polling lives outside the simulation. Whatever drives the game turns
//! a key press into an [`Action`] with [`ActionKind::Start`] and the release
//! into [`ActionKind::End`], using the active scene's [`ActionMap`].

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

pub const JUMP: &str = "JUMP";
pub const LEFT: &str = "LEFT";
pub const RIGHT: &str = "RIGHT";
pub const SHOOT: &str = "SHOOT";
pub const PAUSE: &str = "PAUSE";
pub const QUIT: &str = "QUIT";
pub const TOGGLE_TEXTURE: &str = "TOGGLE_TEXTURE";
pub const TOGGLE_COLLISION: &str = "TOGGLE_COLLISION";
pub const TOGGLE_GRID: &str = "TOGGLE_GRID";
pub const UP: &str = "UP";
pub const DOWN: &str = "DOWN";
pub const PLAY: &str = "PLAY";
pub const REFRESH: &str = "REFRESH";

/// Edge of an action: key went down or came back up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Start,
    End,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Start => f.write_str("START"),
            ActionKind::End => f.write_str("END"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    pub kind: ActionKind,
}

impl Action {
    pub fn new(name: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn start(name: impl Into<String>) -> Self {
        Self::new(name, ActionKind::Start)
    }

    pub fn end(name: impl Into<String>) -> Self {
        Self::new(name, ActionKind::End)
    }

    pub fn is_start(&self) -> bool {
        self.kind == ActionKind::Start
    }
}

/// Key name to action name bindings for one scene.
#[derive(Debug, Clone, Default)]
pub struct ActionMap {
    bindings: FxHashMap<String, String>,
}

impl ActionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `key` to `action`, replacing any previous binding of that key.
    pub fn register(&mut self, key: &str, action: &str) {
        self.bindings.insert(key.to_owned(), action.to_owned());
    }

    pub fn action_for(&self, key: &str) -> Option<&str> {
        self.bindings.get(key).map(String::as_str)
    }

    /// Every key bound to `action`, sorted.
    pub fn keys_for(&self, action: &str) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .bindings
            .iter()
            .filter(|(_, a)| a.as_str() == action)
            .map(|(k, _)| k.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

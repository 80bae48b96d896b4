//! Pending scene transition.
//!
//! Scenes never swap themselves out. They record a request here and the
//! [`GameEngine`](crate::game::GameEngine) applies it at the start of its next
//! update, so a transition can never happen halfway through a frame.

use std::path::PathBuf;

/// Scene a request can lead to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneRequest {
    /// Rebuild the menu and drop the current scene.
    Menu,
    /// Start the level stored at the given path, keeping the menu around.
    Play(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NextScenes {
    #[default]
    Unchanged,
    Pending(SceneRequest),
}

/// Intent to change the active scene.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NextScene {
    next: NextScenes,
}

impl NextScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> &NextScenes {
        &self.next
    }

    /// Request a transition. A later request in the same frame wins.
    pub fn set(&mut self, request: SceneRequest) {
        self.next = NextScenes::Pending(request);
    }

    /// Take the pending request, leaving [`NextScenes::Unchanged`].
    pub fn take(&mut self) -> Option<SceneRequest> {
        match std::mem::take(&mut self.next) {
            NextScenes::Pending(request) => Some(request),
            NextScenes::Unchanged => None,
        }
    }
}

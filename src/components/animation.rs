//! Per-entity animation playback.
//!
//! Holds a copy of the [`AnimationResource`](crate::resources::assetstore::AnimationResource)
//! parameters looked up by name, plus the tick counter advanced by the
//! animation system. Rendering is done elsewhere; this only tracks which frame
//! would be visible.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::resources::assetstore::AnimationResource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub name: String,
    /// Size of a single frame in pixels.
    pub size: Vec2,
    pub frame_count: u32,
    /// Game frames per animation frame.
    pub speed: u32,
    pub current_tick: u32,
    /// Restart after the last frame instead of ending.
    pub repeat: bool,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            name: String::new(),
            size: Vec2::ZERO,
            frame_count: 1,
            speed: 1,
            current_tick: 0,
            repeat: false,
        }
    }
}

impl Animation {
    pub fn new(name: impl Into<String>, resource: &AnimationResource, repeat: bool) -> Self {
        Self {
            name: name.into(),
            size: resource.frame_size,
            frame_count: resource.frame_count.max(1),
            speed: resource.speed.max(1),
            current_tick: 0,
            repeat,
        }
    }

    /// Advance one game frame.
    pub fn update(&mut self) {
        self.current_tick = self.current_tick.saturating_add(1);
    }

    /// Index of the visible frame.
    pub fn frame_index(&self) -> u32 {
        (self.current_tick / self.speed) % self.frame_count
    }

    /// True once every frame has been shown for its full duration.
    pub fn has_ended(&self) -> bool {
        self.current_tick >= self.frame_count.saturating_mul(self.speed)
    }
}

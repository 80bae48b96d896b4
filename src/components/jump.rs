//! Two-phase jump parameters and progress.
//!
//! A jump starts with an initial impulse and, while the jump input stays
//! held, keeps adding `frame_strength` for up to `max_duration` frames.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Jump {
    pub jumping: bool,
    pub start_frame: u64,
    pub max_duration: u64,
    pub initial_strength: f32,
    pub frame_strength: f32,
}

impl Jump {
    pub fn new(initial_strength: f32, max_duration: u64, frame_strength: f32) -> Self {
        Self {
            jumping: false,
            start_frame: 0,
            max_duration,
            initial_strength,
            frame_strength,
        }
    }
}

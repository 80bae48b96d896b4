//! Frame-counted lifetime.
//!
//! An entity created at frame `F` with a lifespan of `L` frames is alive for
//! frames `F..F+L-1`; the lifespan system destroys it at frame `F+L`.
//!
//! # Related
//!
//! - [`crate::systems::lifespan::lifespan_system`] – destroys expired entities

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LifeSpan {
    /// Total duration in frames.
    pub lifespan: u64,
    /// Frame index at which the component was added.
    pub frame_created: u64,
}

impl LifeSpan {
    pub fn new(lifespan: u64, frame_created: u64) -> Self {
        Self {
            lifespan,
            frame_created,
        }
    }

    /// Frames elapsed since creation.
    pub fn age(&self, current_frame: u64) -> u64 {
        current_frame.saturating_sub(self.frame_created)
    }

    pub fn is_expired(&self, current_frame: u64) -> bool {
        self.age(current_frame) >= self.lifespan
    }
}

//! Pending sound effect attached to an entity.
//!
//! The sound system forwards it once to the audio bridge and drops
//! non-looping sounds afterwards.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Sound {
    /// Key in the [`AssetStore`](crate::resources::assetstore::AssetStore).
    pub name: String,
    pub looped: bool,
    pub played: bool,
    pub volume: f32,
}

impl Sound {
    pub fn new(name: impl Into<String>, looped: bool, volume: f32) -> Self {
        Self {
            name: name.into(),
            looped,
            played: false,
            volume,
        }
    }
}

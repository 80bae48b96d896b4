//! Asset registry.
//!
//! Animations and sounds are registered by name from the configuration and
//! looked up by the systems that spawn or re-skin entities. Lookups return an
//! [`AssetError`] on a miss; callers propagate it because a missing asset is a
//! broken install, not a recoverable game condition.

use std::path::PathBuf;

use glam::Vec2;
use log::info;
use rustc_hash::FxHashMap;

use crate::error::AssetError;
use crate::resources::gameconfig::GameConfig;

/// Immutable description of a sprite-sheet animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationResource {
    /// Number of frames in the sheet.
    pub frame_count: u32,
    /// Game frames each animation frame stays visible.
    pub speed: u32,
    /// Size of one frame in pixels.
    pub frame_size: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SoundResource {
    pub path: PathBuf,
}

/// Central registry of animations and sounds keyed by name.
#[derive(Debug, Default)]
pub struct AssetStore {
    animations: FxHashMap<String, AnimationResource>,
    sounds: FxHashMap<String, SoundResource>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every animation and sound declared in `config`.
    pub fn from_config(config: &GameConfig) -> Self {
        let mut store = Self::new();
        for anim in &config.animations {
            store.add_animation(
                &anim.name,
                AnimationResource {
                    frame_count: anim.frames,
                    speed: anim.speed,
                    frame_size: Vec2::new(anim.width, anim.height),
                },
            );
        }
        for sound in &config.sounds {
            store.add_sound(
                &sound.name,
                SoundResource {
                    path: sound.path.clone(),
                },
            );
        }
        info!(
            "Asset store ready: {} animations, {} sounds",
            store.animations.len(),
            store.sounds.len()
        );
        store
    }

    pub fn add_animation(&mut self, name: &str, resource: AnimationResource) {
        self.animations.insert(name.to_owned(), resource);
    }

    pub fn add_sound(&mut self, name: &str, resource: SoundResource) {
        self.sounds.insert(name.to_owned(), resource);
    }

    pub fn animation(&self, name: &str) -> Result<&AnimationResource, AssetError> {
        self.animations
            .get(name)
            .ok_or_else(|| AssetError::MissingAnimation(name.to_owned()))
    }

    pub fn sound(&self, name: &str) -> Result<&SoundResource, AssetError> {
        self.sounds
            .get(name)
            .ok_or_else(|| AssetError::MissingSound(name.to_owned()))
    }

    /// Sound names with their paths, sorted by name.
    pub fn sounds(&self) -> Vec<(&str, &SoundResource)> {
        let mut sounds: Vec<_> = self.sounds.iter().map(|(k, v)| (k.as_str(), v)).collect();
        sounds.sort_by(|a, b| a.0.cmp(b.0));
        sounds
    }
}

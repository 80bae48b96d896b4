//! Sound system.
//!
//! Entities carry a [`Sound`] when something audible happened to them. The
//! first time the system sees one it sends a `PlayFx` to the audio bridge;
//! a non-looping sound is then dropped from the entity. Sends never block.

use crate::components::sound::Sound;
use crate::resources::audio::AudioBridge;
use crate::world::PlayWorld;

pub fn sound_system(world: &mut PlayWorld, audio: &AudioBridge) {
    for i in 0..world.entities.len() {
        let handle = world.entities.entities()[i];
        let Some(entity) = world.entities.get_mut(handle) else {
            continue;
        };
        if !entity.has::<Sound>() {
            continue;
        }
        let sound = entity.get_mut::<Sound>();
        if !sound.played {
            audio.play_fx(&sound.name, sound.volume);
            sound.played = true;
        }
        if !sound.looped {
            entity.remove::<Sound>();
        }
    }
}

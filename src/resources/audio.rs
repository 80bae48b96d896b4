//! Bridge between the simulation and an audio sink.
//!
//! [`AudioBridge::new`] returns the bridge plus the receiving end of an
//! unbounded `crossbeam-channel`. Whoever owns the receiver (the binary's sink
//! thread, or a test) drains [`AudioCmd`]s. Sends never block and a dropped
//! receiver is ignored, so playing a sound can never stall a frame.

use crossbeam_channel::{Receiver, Sender, TrySendError, unbounded};
use log::{debug, trace};

use crate::events::audio::AudioCmd;
use crate::resources::assetstore::AssetStore;

#[derive(Debug, Clone)]
pub struct AudioBridge {
    /// Sender for [`AudioCmd`] messages (simulation -> audio sink).
    pub tx_cmd: Sender<AudioCmd>,
}

impl AudioBridge {
    pub fn new() -> (Self, Receiver<AudioCmd>) {
        let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
        (Self { tx_cmd }, rx_cmd)
    }

    /// A bridge whose receiver is already gone. Every command is dropped.
    pub fn disconnected() -> Self {
        let (bridge, _) = Self::new();
        bridge
    }

    /// Fire-and-forget send.
    pub fn send(&self, cmd: AudioCmd) {
        match self.tx_cmd.try_send(cmd) {
            Ok(()) => {}
            Err(TrySendError::Disconnected(cmd)) => trace!("audio sink gone, dropped {cmd:?}"),
            Err(TrySendError::Full(cmd)) => debug!("audio queue full, dropped {cmd:?}"),
        }
    }

    pub fn play_fx(&self, id: &str, volume: f32) {
        self.send(AudioCmd::PlayFx {
            id: id.to_owned(),
            volume,
        });
    }

    /// Ask the sink to preload every registered sound.
    pub fn load_all(&self, assets: &AssetStore) {
        for (id, sound) in assets.sounds() {
            self.send(AudioCmd::LoadFx {
                id: id.to_owned(),
                path: sound.path.clone(),
            });
        }
    }

    pub fn shutdown(&self) {
        self.send(AudioCmd::Shutdown);
    }
}

//! Commands sent to the audio sink.

use std::path::PathBuf;

/// Commands sent *to* the audio thread.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioCmd {
    LoadFx { id: String, path: PathBuf },
    PlayFx { id: String, volume: f32 },
    Shutdown,
}

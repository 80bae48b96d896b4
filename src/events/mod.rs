//! Messages that cross the simulation boundary.
//!
//! - `action` – named input actions with a start/end edge, plus key bindings
//! - `audio` – commands sent to the audio sink
pub mod action;
pub mod audio;

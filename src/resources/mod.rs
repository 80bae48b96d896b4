//! Long-lived data shared by scenes and systems.
//!
//! Overview
//! - `assetstore` – animation and sound definitions looked up by name
//! - `audio` – fire-and-forget bridge to the audio sink
//! - `context` – bundle of the resources below handed to every scene
//! - `gameconfig` – INI-backed configuration with safe defaults
//! - `scenestate` – pending scene transition request
//! - `screensize` – playfield dimensions in pixels
pub mod assetstore;
pub mod audio;
pub mod context;
pub mod gameconfig;
pub mod scenestate;
pub mod screensize;

//! MegaMario simulation library.
//!
//! The per-frame core of a 2D platformer: a closed per-entity component
//! table, an entity arena with deferred commit, AABB and separating-axis
//! collision geometry, and the play scene's system pipeline. Rendering,
//! audio output and input polling stay outside; the library describes what
//! to draw ([`scenes::Frame`]), sends audio commands over a channel
//! ([`resources::audio::AudioBridge`]) and accepts named actions.
//!
//! # Project Structure
//!
//! - [`components`] – component kinds and the per-entity storage table
//! - [`entities`] – entities and the entity manager arena
//! - [`physics`] – stateless overlap functions
//! - [`systems`] – movement, sound, lifespan, collision, animation, debug tables
//! - [`world`] – play-scene world and entity spawn helpers
//! - [`scenes`] – menu and play scenes behind the [`scenes::Scene`] trait
//! - [`game`] – [`game::GameEngine`], scene registry and action dispatch
//! - [`resources`] – configuration, assets, audio bridge, screen size
//! - [`events`] – actions and audio commands
//! - [`level`] – level file parser

pub mod components;
pub mod entities;
pub mod error;
pub mod events;
pub mod game;
pub mod level;
pub mod physics;
pub mod resources;
pub mod scenes;
pub mod systems;
pub mod world;

#[cfg(test)]
mod testutil;

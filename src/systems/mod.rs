//! Per-frame systems of the play scene.
//!
//! Each system is a plain function over the [`PlayWorld`](crate::world::PlayWorld).
//! The play scene runs them in a fixed order every unpaused frame, right
//! after the entity manager commit:
//!
//! movement → sound → lifespan → collision → animation
//!
//! Submodules overview
//! - [`movement`] – player control, gravity and position integration
//! - [`sound`] – forward pending sounds to the audio bridge
//! - [`lifespan`] – fire gate and timed destruction
//! - [`collision`] – bullet/tile and player/tile resolution, screen bounds
//! - [`animation`] – player state machine and animation playback
//! - [`debug`] – serializable entity tables for tooling

pub mod animation;
pub mod collision;
pub mod debug;
pub mod lifespan;
pub mod movement;
pub mod sound;

//! Component kinds attached to entities.
//!
//! The set of kinds is closed: every entity carries one slot for each of them
//! in its [`ComponentStorage`](storage::ComponentStorage), and systems skip
//! entities lacking a capability with a single `has::<T>()` check.
//!
//! Submodules overview:
//! - [`animation`] – animation playback state and repeat flag
//! - [`boundingbox`] – axis-aligned collision box
//! - [`boundingconvex`] – convex polygon collider
//! - [`gravity`] – downward acceleration
//! - [`input`] – player intent flags and edge gates
//! - [`jump`] – two-phase jump parameters
//! - [`lifespan`] – frame-counted lifetime
//! - [`sound`] – pending sound effect
//! - [`state`] – player animation state machine
//! - [`storage`] – the per-entity slot table
//! - [`transform`] – position, velocity, scale, rotation

pub mod animation;
pub mod boundingbox;
pub mod boundingconvex;
pub mod gravity;
pub mod input;
pub mod jump;
pub mod lifespan;
pub mod sound;
pub mod state;
pub mod storage;
pub mod transform;

//! Entity records and their owning manager.
//!
//! - [`entity`] – identity, alive flag and component storage of one entity
//! - [`manager`] – arena that owns every entity, with a deferred commit point

pub mod entity;
pub mod manager;

pub use entity::{Entity, EntityHandle};
pub use manager::EntityManager;

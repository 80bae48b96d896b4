//! A single entity: immutable id and tag, alive flag, and one slot per
//! component kind.
//!
//! Entities are owned by the [`EntityManager`](super::EntityManager). Systems
//! hold [`EntityHandle`]s, which are index + generation pairs and never keep
//! the entity alive; a handle whose slot was pruned simply resolves to `None`.

use serde::Serialize;

use crate::components::storage::{Component, ComponentStorage};

/// Non-owning reference to an entity slot in the manager arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EntityHandle {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl EntityHandle {
    /// A handle that never resolves.
    pub const DANGLING: EntityHandle = EntityHandle {
        index: u32::MAX,
        generation: u32::MAX,
    };

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

#[derive(Debug, Clone)]
pub struct Entity {
    id: u64,
    tag: String,
    handle: EntityHandle,
    alive: bool,
    components: ComponentStorage,
}

impl Entity {
    pub(crate) fn new(id: u64, tag: impl Into<String>, handle: EntityHandle) -> Self {
        Self {
            id,
            tag: tag.into(),
            handle,
            alive: true,
            components: ComponentStorage::default(),
        }
    }

    /// Unique, monotonically assigned id. Never reused.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn handle(&self) -> EntityHandle {
        self.handle
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Flag the entity as dead. It stays visible until the next commit.
    pub fn destroy(&mut self) {
        self.alive = false;
    }

    /// Attach or overwrite a component.
    pub fn add<T: Component>(&mut self, value: T) -> &mut T {
        self.components.add(value)
    }

    #[inline]
    pub fn get<T: Component>(&self) -> &T {
        self.components.get::<T>()
    }

    #[inline]
    pub fn get_mut<T: Component>(&mut self) -> &mut T {
        self.components.get_mut::<T>()
    }

    #[inline]
    pub fn has<T: Component>(&self) -> bool {
        self.components.has::<T>()
    }

    pub fn remove<T: Component>(&mut self) {
        self.components.remove::<T>();
    }

    pub fn components(&self) -> &ComponentStorage {
        &self.components
    }
}

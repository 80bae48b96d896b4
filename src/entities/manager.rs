//! Entity lifecycle owner.
//!
//! The [`EntityManager`] stores entities in an arena addressed by
//! [`EntityHandle`] (index + generation). Structural changes are deferred:
//!
//! 1. [`EntityManager::add_entity`] allocates the entity right away so callers
//!    can attach components, but only queues its handle.
//! 2. [`Entity::destroy`] only flips the alive flag.
//! 3. [`EntityManager::commit`], called once per frame, appends queued
//!    entities to the flat list and their tag bucket, then prunes every dead
//!    entity from the flat list and from every bucket, keeping survivor order.
//!
//! Between two commits the flat list and the buckets never change, so systems
//! can walk them while creating and destroying entities.

use log::trace;
use rustc_hash::FxHashMap;

use super::entity::{Entity, EntityHandle};

#[derive(Debug, Default)]
struct ArenaSlot {
    generation: u32,
    entity: Option<Entity>,
}

#[derive(Debug, Default)]
pub struct EntityManager {
    slots: Vec<ArenaSlot>,
    free: Vec<u32>,
    entities: Vec<EntityHandle>,
    pending: Vec<EntityHandle>,
    by_tag: FxHashMap<String, Vec<EntityHandle>>,
    next_id: u64,
}

fn resolve(slots: &[ArenaSlot], handle: EntityHandle) -> Option<&Entity> {
    let slot = slots.get(handle.index as usize)?;
    if slot.generation != handle.generation {
        return None;
    }
    slot.entity.as_ref()
}

fn is_live(slots: &[ArenaSlot], handle: EntityHandle) -> bool {
    resolve(slots, handle).is_some_and(Entity::is_alive)
}

impl EntityManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entity with `tag`. It is queryable only after the next [`commit`](Self::commit).
    pub fn add_entity(&mut self, tag: &str) -> EntityHandle {
        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                self.slots.push(ArenaSlot::default());
                (self.slots.len() - 1) as u32
            }
        };
        let slot = &mut self.slots[index as usize];
        let handle = EntityHandle {
            index,
            generation: slot.generation,
        };
        slot.entity = Some(Entity::new(self.next_id, tag, handle));
        self.next_id += 1;
        self.pending.push(handle);
        handle
    }

    /// Create an entity and return it for immediate component setup.
    pub fn spawn(&mut self, tag: &str) -> &mut Entity {
        let handle = self.add_entity(tag);
        let slot = &mut self.slots[handle.index as usize];
        match slot.entity.as_mut() {
            Some(entity) => entity,
            None => unreachable!("freshly allocated slot holds an entity"),
        }
    }

    /// Frame-boundary commit: materialize queued entities, then prune dead ones.
    pub fn commit(&mut self) {
        let added = self.pending.len();
        for handle in std::mem::take(&mut self.pending) {
            let Some(entity) = resolve(&self.slots, handle) else {
                continue;
            };
            let tag = entity.tag().to_owned();
            self.entities.push(handle);
            self.by_tag.entry(tag).or_default().push(handle);
        }

        let dead: Vec<EntityHandle> = self
            .entities
            .iter()
            .copied()
            .filter(|h| !is_live(&self.slots, *h))
            .collect();
        if dead.is_empty() {
            if added > 0 {
                trace!("commit: {added} added, 0 pruned");
            }
            return;
        }

        let slots = &self.slots;
        self.entities.retain(|h| is_live(slots, *h));
        for bucket in self.by_tag.values_mut() {
            bucket.retain(|h| is_live(slots, *h));
        }

        for handle in &dead {
            let slot = &mut self.slots[handle.index as usize];
            slot.entity = None;
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(handle.index);
        }
        trace!("commit: {added} added, {} pruned", dead.len());
    }

    /// Every committed entity, in insertion order.
    pub fn entities(&self) -> &[EntityHandle] {
        &self.entities
    }

    /// Committed entities with `tag`. Unknown tags yield an empty slice.
    pub fn entities_by_tag(&self, tag: &str) -> &[EntityHandle] {
        self.by_tag.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Tag buckets sorted by tag name.
    pub fn tag_buckets(&self) -> Vec<(&str, &[EntityHandle])> {
        let mut buckets: Vec<(&str, &[EntityHandle])> = self
            .by_tag
            .iter()
            .map(|(tag, handles)| (tag.as_str(), handles.as_slice()))
            .collect();
        buckets.sort_by(|a, b| a.0.cmp(b.0));
        buckets
    }

    pub fn get(&self, handle: EntityHandle) -> Option<&Entity> {
        resolve(&self.slots, handle)
    }

    pub fn get_mut(&mut self, handle: EntityHandle) -> Option<&mut Entity> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.entity.as_mut()
    }

    /// Mutable access to two distinct entities at once.
    pub fn get_pair_mut(
        &mut self,
        a: EntityHandle,
        b: EntityHandle,
    ) -> Option<(&mut Entity, &mut Entity)> {
        if a.index == b.index {
            return None;
        }
        let (low, high, swapped) = if a.index < b.index {
            (a, b, false)
        } else {
            (b, a, true)
        };
        if high.index as usize >= self.slots.len() {
            return None;
        }
        let (head, tail) = self.slots.split_at_mut(high.index as usize);
        let low_slot = &mut head[low.index as usize];
        let high_slot = &mut tail[0];
        if low_slot.generation != low.generation || high_slot.generation != high.generation {
            return None;
        }
        let low_entity = low_slot.entity.as_mut()?;
        let high_entity = high_slot.entity.as_mut()?;
        if swapped {
            Some((high_entity, low_entity))
        } else {
            Some((low_entity, high_entity))
        }
    }

    /// Flag an entity as dead. Returns `true` only when it was alive before.
    pub fn destroy(&mut self, handle: EntityHandle) -> bool {
        match self.get_mut(handle) {
            Some(entity) if entity.is_alive() => {
                entity.destroy();
                true
            }
            _ => false,
        }
    }

    /// Committed entities resolved, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities
            .iter()
            .filter_map(|h| resolve(&self.slots, *h))
    }

    /// Number of committed entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Number of entities waiting for the next commit.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

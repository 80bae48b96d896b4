//! Entity tables for debug tooling.
//!
//! Produces serializable snapshots of the flat entity list and of every tag
//! bucket. Positions are reported in grid cells, the same coordinates level
//! files use.

use serde::Serialize;

use crate::components::transform::Transform;
use crate::entities::{Entity, EntityHandle};
use crate::world::PlayWorld;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityRow {
    pub id: u64,
    pub tag: String,
    pub grid_x: i32,
    pub grid_y: i32,
    pub alive: bool,
    pub components: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagTable {
    pub tag: String,
    pub rows: Vec<EntityRow>,
}

fn row(world: &PlayWorld, entity: &Entity) -> EntityRow {
    let grid = world.pixel_to_grid(entity.get::<Transform>().pos);
    EntityRow {
        id: entity.id(),
        tag: entity.tag().to_owned(),
        grid_x: grid.x,
        grid_y: grid.y,
        alive: entity.is_alive(),
        components: entity.components().present_kinds(),
    }
}

fn rows(world: &PlayWorld, handles: &[EntityHandle]) -> Vec<EntityRow> {
    handles
        .iter()
        .filter_map(|h| world.entities.get(*h))
        .map(|e| row(world, e))
        .collect()
}

/// Every committed entity in list order.
pub fn entity_table(world: &PlayWorld) -> Vec<EntityRow> {
    rows(world, world.entities.entities())
}

/// One table per tag, sorted by tag.
pub fn tag_tables(world: &PlayWorld) -> Vec<TagTable> {
    world
        .entities
        .tag_buckets()
        .into_iter()
        .map(|(tag, handles)| TagTable {
            tag: tag.to_owned(),
            rows: rows(world, handles),
        })
        .collect()
}

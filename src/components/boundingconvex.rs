//! Convex polygon collider.
//!
//! Points are stored in local space, counter-clockwise or clockwise, around
//! the entity origin. World-space vertices are `point * scale + position`;
//! see [`crate::physics::convex`] for the separating-axis test that consumes
//! them.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Inline capacity for polygon vertices; larger polygons spill to the heap.
pub const INLINE_VERTICES: usize = 8;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingConvex {
    pub points: SmallVec<[Vec2; INLINE_VERTICES]>,
    pub scale: f32,
    pub vertex_count: usize,
}

impl BoundingConvex {
    pub fn new(points: impl IntoIterator<Item = Vec2>, scale: f32) -> Self {
        let points: SmallVec<[Vec2; INLINE_VERTICES]> = points.into_iter().collect();
        let vertex_count = points.len();
        Self {
            points,
            scale,
            vertex_count,
        }
    }

    /// Vertices translated to `position` after scaling.
    pub fn world_points(&self, position: Vec2) -> SmallVec<[Vec2; INLINE_VERTICES]> {
        self.points
            .iter()
            .map(|p| *p * self.scale + position)
            .collect()
    }
}

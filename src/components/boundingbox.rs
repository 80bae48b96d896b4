//! Axis-aligned collision box centered on the entity position.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub size: Vec2,
    pub half_size: Vec2,
}

impl BoundingBox {
    /// Create a box of the given full size.
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            half_size: size * 0.5,
        }
    }
}

//! World-space placement and motion of an entity.
//!
//! Positions are entity centers in pixels with y growing downward. The
//! previous position is written by the movement system before integrating,
//! which lets the collision system compare this frame against the last one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub pos: Vec2,
    pub previous_pos: Vec2,
    pub velocity: Vec2,
    /// Sprite scale. A negative `x` faces the entity left.
    pub scale: Vec2,
    /// Rotation in radians.
    pub angle: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            previous_pos: Vec2::ZERO,
            velocity: Vec2::ZERO,
            scale: Vec2::ONE,
            angle: 0.0,
        }
    }
}

impl Transform {
    /// Create a resting transform at `pos`.
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            previous_pos: pos,
            ..Self::default()
        }
    }

    /// Create a transform with every field given.
    pub fn with_motion(pos: Vec2, velocity: Vec2, scale: Vec2, angle: f32) -> Self {
        Self {
            pos,
            previous_pos: pos,
            velocity,
            scale,
            angle,
        }
    }

    /// Horizontal facing derived from the sign of `scale.x`.
    pub fn facing(&self) -> f32 {
        if self.scale.x < 0.0 { -1.0 } else { 1.0 }
    }
}

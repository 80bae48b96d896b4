//! Axis-aligned box overlap.
//!
//! For boxes centered at `pa`, `pb` with half sizes `ha`, `hb`:
//!
//! ```text
//! delta = |pa - pb|
//! ox    = ha.x + hb.x - delta.x
//! oy    = ha.y + hb.y - delta.y
//! ```
//!
//! The boxes collide iff `ox > 0 && oy > 0`. The `*_axis_overlap` functions
//! return the signed per-axis values; [`current_overlap`] and
//! [`previous_overlap`] collapse a non-collision to `(0, 0)`.

use glam::Vec2;

use crate::components::boundingbox::BoundingBox;
use crate::components::transform::Transform;
use crate::entities::Entity;

/// Signed per-axis overlap of two centered boxes.
#[inline]
pub fn box_overlap(pos_a: Vec2, half_a: Vec2, pos_b: Vec2, half_b: Vec2) -> Vec2 {
    let delta = (pos_a - pos_b).abs();
    half_a + half_b - delta
}

#[inline]
pub fn is_colliding(overlap: Vec2) -> bool {
    overlap.x > 0.0 && overlap.y > 0.0
}

fn collision_or_zero(overlap: Vec2) -> Vec2 {
    if is_colliding(overlap) {
        overlap
    } else {
        Vec2::ZERO
    }
}

/// Signed per-axis overlap at the current positions.
pub fn current_axis_overlap(a: &Entity, b: &Entity) -> Vec2 {
    box_overlap(
        a.get::<Transform>().pos,
        a.get::<BoundingBox>().half_size,
        b.get::<Transform>().pos,
        b.get::<BoundingBox>().half_size,
    )
}

/// Signed per-axis overlap at the previous-frame positions.
pub fn previous_axis_overlap(a: &Entity, b: &Entity) -> Vec2 {
    box_overlap(
        a.get::<Transform>().previous_pos,
        a.get::<BoundingBox>().half_size,
        b.get::<Transform>().previous_pos,
        b.get::<BoundingBox>().half_size,
    )
}

/// Overlap at the current positions, or `(0, 0)` when the boxes do not collide.
pub fn current_overlap(a: &Entity, b: &Entity) -> Vec2 {
    collision_or_zero(current_axis_overlap(a, b))
}

/// Overlap at the previous-frame positions, or `(0, 0)` when the boxes did not collide.
pub fn previous_overlap(a: &Entity, b: &Entity) -> Vec2 {
    collision_or_zero(previous_axis_overlap(a, b))
}

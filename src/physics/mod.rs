//! Stateless collision geometry.
//!
//! Two shape families are supported:
//! - [`aabb`] – axis-aligned boxes from [`BoundingBox`], current and previous frame
//! - [`convex`] – convex polygons from [`BoundingConvex`] via the separating-axis test
//!
//! Every function takes entities (or raw shapes) by shared reference and
//! returns an overlap vector; nothing here mutates state.

pub mod aabb;
pub mod convex;

pub use aabb::{current_overlap, is_colliding, previous_overlap};
pub use convex::{convex_box_overlap, convex_overlap, polygon_overlap};

use glam::Vec2;

use crate::components::boundingbox::BoundingBox;
use crate::components::boundingconvex::BoundingConvex;
use crate::entities::Entity;

/// Whether two entities currently touch, picking the test from the colliders
/// they carry. A convex collider takes precedence over a box on the same entity.
pub fn shapes_collide(a: &Entity, b: &Entity) -> bool {
    let a_convex = a.has::<BoundingConvex>();
    let b_convex = b.has::<BoundingConvex>();
    match (a_convex, b_convex) {
        (true, true) => convex_overlap(a, b) != Vec2::ZERO,
        (true, false) if b.has::<BoundingBox>() => convex_box_overlap(a, b) != Vec2::ZERO,
        (false, true) if a.has::<BoundingBox>() => convex_box_overlap(b, a) != Vec2::ZERO,
        (false, false) if a.has::<BoundingBox>() && b.has::<BoundingBox>() => {
            is_colliding(current_overlap(a, b))
        }
        _ => false,
    }
}

//! Separating-axis test for convex polygons.
//!
//! Candidate axes are the unit edge normals of both polygons. Zero-length
//! edges contribute no axis. Each polygon is projected onto every axis; a gap
//! on any axis means no collision and the result is `(0, 0)`. Otherwise the
//! axis with the smallest overlap wins (first found on ties, polygon A's edges
//! first) and the returned minimum translation vector is `axis * overlap`,
//! oriented from A's centroid toward B's centroid.
//!
//! Translating A by the negated result separates the two polygons.

use arrayvec::ArrayVec;
use glam::Vec2;
use smallvec::SmallVec;

use crate::components::boundingbox::BoundingBox;
use crate::components::boundingconvex::BoundingConvex;
use crate::components::transform::Transform;
use crate::entities::Entity;

const DEGENERATE_EDGE_SQ: f32 = 1e-12;

type Axes = SmallVec<[Vec2; 16]>;

fn edge_normals(polygon: &[Vec2], axes: &mut Axes) {
    let n = polygon.len();
    if n < 2 {
        return;
    }
    for i in 0..n {
        let edge = polygon[(i + 1) % n] - polygon[i];
        if edge.length_squared() <= DEGENERATE_EDGE_SQ {
            continue;
        }
        axes.push(edge.perp().normalize());
    }
}

fn project(polygon: &[Vec2], axis: Vec2) -> (f32, f32) {
    polygon
        .iter()
        .map(|p| p.dot(axis))
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), d| {
            (lo.min(d), hi.max(d))
        })
}

fn centroid(polygon: &[Vec2]) -> Vec2 {
    if polygon.is_empty() {
        return Vec2::ZERO;
    }
    polygon.iter().copied().sum::<Vec2>() / polygon.len() as f32
}

/// Overlap of `[min_a, max_a]` and `[min_b, max_b]`. When one interval
/// contains the other, the distance needed to push it out is included.
fn interval_overlap((min_a, max_a): (f32, f32), (min_b, max_b): (f32, f32)) -> f32 {
    let overlap = max_a.min(max_b) - min_a.max(min_b);
    if overlap <= 0.0 {
        return overlap;
    }
    let a_in_b = min_a >= min_b && max_a <= max_b;
    let b_in_a = min_b >= min_a && max_b <= max_a;
    if a_in_b || b_in_a {
        overlap + (min_a - min_b).abs().min((max_a - max_b).abs())
    } else {
        overlap
    }
}

/// Minimum translation vector between two world-space convex polygons,
/// or `(0, 0)` when they are separated or touching.
pub fn polygon_overlap(a: &[Vec2], b: &[Vec2]) -> Vec2 {
    let mut axes = Axes::new();
    edge_normals(a, &mut axes);
    edge_normals(b, &mut axes);
    if axes.is_empty() {
        return Vec2::ZERO;
    }

    let mut best: Option<(Vec2, f32)> = None;
    for axis in axes {
        let overlap = interval_overlap(project(a, axis), project(b, axis));
        if overlap <= 0.0 {
            return Vec2::ZERO;
        }
        if best.is_none_or(|(_, smallest)| overlap < smallest) {
            best = Some((axis, overlap));
        }
    }

    let Some((mut axis, overlap)) = best else {
        return Vec2::ZERO;
    };
    if axis.dot(centroid(b) - centroid(a)) < 0.0 {
        axis = -axis;
    }
    axis * overlap
}

/// SAT between two entities carrying [`BoundingConvex`] and [`Transform`].
pub fn convex_overlap(a: &Entity, b: &Entity) -> Vec2 {
    let poly_a = a.get::<BoundingConvex>().world_points(a.get::<Transform>().pos);
    let poly_b = b.get::<BoundingConvex>().world_points(b.get::<Transform>().pos);
    polygon_overlap(&poly_a, &poly_b)
}

/// Corners of a centered box, counter-clockwise in y-down screen space.
pub fn box_corners(center: Vec2, size: Vec2) -> ArrayVec<Vec2, 4> {
    let half = size * 0.5;
    let mut corners = ArrayVec::new();
    corners.push(center + Vec2::new(-half.x, -half.y));
    corners.push(center + Vec2::new(half.x, -half.y));
    corners.push(center + Vec2::new(half.x, half.y));
    corners.push(center + Vec2::new(-half.x, half.y));
    corners
}

/// SAT between a convex entity and a box entity. The box is turned into a
/// temporary four-corner polygon and never stored.
pub fn convex_box_overlap(convex: &Entity, boxed: &Entity) -> Vec2 {
    let poly = convex
        .get::<BoundingConvex>()
        .world_points(convex.get::<Transform>().pos);
    let corners = box_corners(boxed.get::<Transform>().pos, boxed.get::<BoundingBox>().size);
    polygon_overlap(&poly, &corners)
}

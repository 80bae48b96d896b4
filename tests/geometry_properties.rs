//! Property checks for box overlap and the separating-axis test.
//!
//! Coordinates are small integers with even sizes so box corners are exact
//! in `f32` and touching shapes compare equal.

use glam::Vec2;
use megamario::physics::aabb::{box_overlap, is_colliding};
use megamario::physics::convex::{box_corners, polygon_overlap};
use proptest::prelude::*;

fn point() -> impl Strategy<Value = Vec2> {
    (-200i32..200, -200i32..200).prop_map(|(x, y)| Vec2::new(x as f32, y as f32))
}

fn size() -> impl Strategy<Value = Vec2> {
    (1i32..40, 1i32..40).prop_map(|(w, h)| Vec2::new((2 * w) as f32, (2 * h) as f32))
}

/// Offset of B's center from A's, within `reach` on each axis.
fn offset(reach: i32) -> impl Strategy<Value = Vec2> {
    (-reach..=reach, -reach..=reach).prop_map(|(x, y)| Vec2::new(x as f32, y as f32))
}

/// Two boxes whose centers are at most 30 apart on each axis, with sides
/// of at least 62, so they always overlap.
fn overlapping() -> impl Strategy<Value = (Vec2, Vec2, Vec2, Vec2)> {
    let big = (31i32..40, 31i32..40).prop_map(|(w, h)| Vec2::new((2 * w) as f32, (2 * h) as f32));
    (point(), big.clone(), offset(30), big).prop_map(|(pa, sa, d, sb)| (pa, sa, pa + d, sb))
}

proptest! {
    #[test]
    fn box_overlap_is_symmetric(pa in point(), sa in size(), pb in point(), sb in size()) {
        let ab = box_overlap(pa, sa * 0.5, pb, sb * 0.5);
        let ba = box_overlap(pb, sb * 0.5, pa, sa * 0.5);
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn boxes_apart_on_x_never_collide(
        pa in point(),
        sa in size(),
        sb in size(),
        gap in 0i32..50,
        dy in -100i32..100,
    ) {
        let dx = 0.5 * (sa.x + sb.x) + gap as f32;
        let pb = pa + Vec2::new(dx, dy as f32);
        prop_assert!(!is_colliding(box_overlap(pa, sa * 0.5, pb, sb * 0.5)));
    }

    #[test]
    fn sat_agrees_with_aabb_on_rectangles(pa in point(), sa in size(), d in offset(80), sb in size()) {
        let pb = pa + d;
        let colliding = is_colliding(box_overlap(pa, sa * 0.5, pb, sb * 0.5));
        let mtv = polygon_overlap(&box_corners(pa, sa), &box_corners(pb, sb));
        prop_assert_eq!(colliding, mtv != Vec2::ZERO);
    }

    #[test]
    fn sat_depth_does_not_depend_on_order(pa in point(), sa in size(), d in offset(80), sb in size()) {
        let pb = pa + d;
        let a = box_corners(pa, sa);
        let b = box_corners(pb, sb);
        let ab = polygon_overlap(&a, &b);
        let ba = polygon_overlap(&b, &a);
        prop_assert!((ab.length() - ba.length()).abs() < 1e-3, "{} vs {}", ab.length(), ba.length());
    }

    #[test]
    fn pushing_back_by_mtv_separates((pa, sa, pb, sb) in overlapping()) {
        let b = box_corners(pb, sb);
        let mtv = polygon_overlap(&box_corners(pa, sa), &b);
        prop_assert_ne!(mtv, Vec2::ZERO);
        // axes come from normalized edges, so snap the push back to the grid
        let moved = box_corners(pa - mtv.round(), sa);
        prop_assert_eq!(polygon_overlap(&moved, &b), Vec2::ZERO);
    }

    #[test]
    fn mtv_points_from_a_toward_b((pa, sa, pb, sb) in overlapping()) {
        let mtv = polygon_overlap(&box_corners(pa, sa), &box_corners(pb, sb));
        prop_assert_ne!(mtv, Vec2::ZERO);
        prop_assert!(mtv.dot(pb - pa) >= 0.0);
    }
}

#[test]
fn triangle_resting_in_square_pushes_out_the_short_way() {
    let square = box_corners(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
    let triangle = [
        Vec2::new(-1.0, 4.0),
        Vec2::new(1.0, 4.0),
        Vec2::new(0.0, 2.0),
    ];
    let mtv = polygon_overlap(&triangle, &square);
    assert!(mtv.y < 0.0, "{mtv:?}");
    let moved: Vec<Vec2> = triangle.iter().map(|p| *p - mtv).collect();
    let again = polygon_overlap(&moved, &square);
    assert!(again.length() < 1e-4, "{again:?}");
}

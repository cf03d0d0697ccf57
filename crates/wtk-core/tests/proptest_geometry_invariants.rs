//! Property-based invariant tests for geometry primitives (Rect, Size, Margins).
//!
//! 1. `Rect::from_axes` agrees with the axis accessors for both orientations.
//! 2. Axis replacement touches only the requested axis.
//! 3. Right/bottom edges are consistent with x+width, y+height.
//! 4. Inset by valid margins never grows a rectangle.
//! 5. Margins validity matches component signs.
//! 6. Contains agrees with the edge definitions.

use proptest::prelude::*;
use wtk_core::geometry::{Margins, Orientation, Point, Rect, Size};

// ── Helpers ─────────────────────────────────────────────────────────────

fn coord() -> impl Strategy<Value = i32> {
    -5_000i32..=5_000
}

fn extent() -> impl Strategy<Value = i32> {
    0i32..=5_000
}

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (coord(), coord(), extent(), extent()).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn orientation_strategy() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

fn margins_strategy() -> impl Strategy<Value = Margins> {
    (0i32..=50, 0i32..=50, 0i32..=50, 0i32..=50)
        .prop_map(|(l, t, r, b)| Margins::new(l, t, r, b))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. from_axes round-trips through the axis accessors
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn from_axes_matches_accessors(
        o in orientation_strategy(),
        pa in coord(), pc in coord(), la in extent(), lc in extent(),
    ) {
        let r = Rect::from_axes(o, pa, pc, la, lc);
        prop_assert_eq!(r.position_along(o), pa);
        prop_assert_eq!(r.position_along(o.cross()), pc);
        prop_assert_eq!(r.extent_along(o), la);
        prop_assert_eq!(r.extent_along(o.cross()), lc);
        prop_assert_eq!(r.size(), Size::from_axes(o, la, lc));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Axis replacement is local
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn axis_replacement_is_local(r in rect_strategy(), o in orientation_strategy(), v in coord()) {
        let moved = r.with_position_along(o, v);
        prop_assert_eq!(moved.position_along(o), v);
        prop_assert_eq!(moved.position_along(o.cross()), r.position_along(o.cross()));
        prop_assert_eq!(moved.size(), r.size());

        let resized = r.with_extent_along(o, v);
        prop_assert_eq!(resized.extent_along(o), v);
        prop_assert_eq!(resized.extent_along(o.cross()), r.extent_along(o.cross()));
        prop_assert_eq!(resized.origin(), r.origin());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Edges are consistent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn edges_consistent(r in rect_strategy()) {
        prop_assert_eq!(r.right(), r.x + r.width);
        prop_assert_eq!(r.bottom(), r.y + r.height);
        prop_assert_eq!(r.end_along(Orientation::Horizontal), r.right());
        prop_assert_eq!(r.end_along(Orientation::Vertical), r.bottom());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Inset never grows
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn inset_never_grows(r in rect_strategy(), m in margins_strategy()) {
        let inner = r.inset(m);
        prop_assert!(inner.width <= r.width);
        prop_assert!(inner.height <= r.height);
        prop_assert_eq!(inner.x - r.x, m.left);
        prop_assert_eq!(r.bottom() - inner.bottom(), m.bottom);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Margins validity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn margins_validity_matches_signs(l in -5i32..5, t in -5i32..5, r in -5i32..5, b in -5i32..5) {
        let m = Margins::new(l, t, r, b);
        prop_assert_eq!(m.is_valid(), l >= 0 && t >= 0 && r >= 0 && b >= 0);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Contains agrees with edges
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn contains_agrees_with_edges(r in rect_strategy(), px in coord(), py in coord()) {
        let expected = px >= r.x && px < r.right() && py >= r.y && py < r.bottom();
        prop_assert_eq!(r.contains(Point::new(px, py)), expected);
    }
}

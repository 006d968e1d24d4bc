//! Axis-aligned collision testing
//!
//! Overlap is decided by comparing center distance against combined
//! half-extents on each axis; touching edges do not count as overlap.

use super::state::Sprite;

/// Do the two sprites' bounding boxes overlap?
#[inline]
pub fn rects_overlap(a: &Sprite, b: &Sprite) -> bool {
    let delta = a.center() - b.center();
    let reach = a.half_extents() + b.half_extents();

    delta.x.abs() < reach.x && delta.y.abs() < reach.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn sprite_at(x: f32, y: f32, w: f32, h: f32) -> Sprite {
        let mut sprite = Sprite::new(Vec2::new(w, h));
        sprite.pos = Vec2::new(x, y);
        sprite
    }

    #[test]
    fn test_overlap_at_close_quarters() {
        let bird = sprite_at(0.0, 0.0, 10.0, 10.0);
        let can = sprite_at(5.0, 5.0, 10.0, 10.0);
        assert!(rects_overlap(&bird, &can));
    }

    #[test]
    fn test_no_overlap_at_distance() {
        let bird = sprite_at(0.0, 0.0, 10.0, 10.0);
        let can = sprite_at(100.0, 100.0, 10.0, 10.0);
        assert!(!rects_overlap(&bird, &can));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = sprite_at(0.0, 0.0, 10.0, 10.0);
        let b = sprite_at(10.0, 0.0, 10.0, 10.0);
        assert!(!rects_overlap(&a, &b));

        let below = sprite_at(0.0, 10.0, 10.0, 10.0);
        assert!(!rects_overlap(&a, &below));
    }

    #[test]
    fn test_containment_counts_as_overlap() {
        let big = sprite_at(0.0, 0.0, 100.0, 100.0);
        let small = sprite_at(40.0, 40.0, 10.0, 10.0);
        assert!(rects_overlap(&big, &small));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            aw in 1.0f32..120.0, ah in 1.0f32..120.0,
            bw in 1.0f32..120.0, bh in 1.0f32..120.0,
        ) {
            let a = sprite_at(ax, ay, aw, ah);
            let b = sprite_at(bx, by, bw, bh);
            prop_assert_eq!(rects_overlap(&a, &b), rects_overlap(&b, &a));
        }

        #[test]
        fn sprite_always_overlaps_itself(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 1.0f32..120.0, h in 1.0f32..120.0,
        ) {
            let a = sprite_at(x, y, w, h);
            prop_assert!(rects_overlap(&a, &a));
        }
    }
}

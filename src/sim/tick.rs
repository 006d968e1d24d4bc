//! Per-frame update
//!
//! The host calls [`tick`] exactly once per displayed frame. Velocities are
//! pixels per frame, so a frame is the unit timestep; the host's frame delta
//! is deliberately ignored.

use super::collision::rects_overlap;
use super::state::{Facing, SimEvent, World};
use crate::tuning::Tuning;

/// Advance the world by one displayed frame.
///
/// Order matters and matches the stage behavior: boundary reflection first,
/// then the catch check, then position integration.
pub fn tick(world: &mut World, tuning: &Tuning) -> Vec<SimEvent> {
    let mut events = Vec::new();

    world.time_ticks += 1;

    // Boundary reflection. The four checks are independent; a frame in a
    // corner can flip both axes.
    let bounds = world.bounds;
    let bird = &mut world.bird;
    if bird.pos.x > bounds.x - bird.size.x {
        bird.vel.x = -tuning.flight_speed;
        bird.facing = Facing::Leftwards;
    }
    if bird.pos.x < 0.0 {
        bird.vel.x = tuning.flight_speed;
        bird.facing = Facing::Rightwards;
    }
    if bird.pos.y > bounds.y - bird.size.y {
        bird.vel.y = -tuning.climb_speed;
    }
    if bird.pos.y < 0.0 {
        bird.vel.y = tuning.climb_speed;
    }

    // Catch check: rescatter the can and bump the score
    if rects_overlap(&world.bird, &world.can) {
        world.scatter_can();
        world.score += 1;
        events.push(SimEvent::Scored { total: world.score });
    }

    // Integrate. Only the bird moves; the can sits still until caught.
    world.bird.pos += world.bird.vel;

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    fn test_world() -> (World, Tuning) {
        let tuning = Tuning::default();
        let world = World::new(12345, BOUNDS, &tuning);
        (world, tuning)
    }

    /// Park the can where the bird can't reach it this frame
    fn separate(world: &mut World) {
        world.can.pos = Vec2::new(BOUNDS.x - 1.0, 1.0);
        world.bird.pos = Vec2::new(100.0, 300.0);
    }

    #[test]
    fn test_right_edge_turns_bird_leftwards() {
        let (mut world, tuning) = test_world();
        separate(&mut world);
        world.bird.pos.x = BOUNDS.x - world.bird.size.x + 0.5;
        world.bird.vel.x = tuning.flight_speed;

        tick(&mut world, &tuning);

        assert_eq!(world.bird.vel.x, -tuning.flight_speed);
        assert_eq!(world.bird.facing, Facing::Leftwards);
    }

    #[test]
    fn test_left_edge_turns_bird_rightwards() {
        let (mut world, tuning) = test_world();
        separate(&mut world);
        world.bird.pos.x = -0.5;
        world.bird.vel.x = -tuning.flight_speed;

        tick(&mut world, &tuning);

        assert_eq!(world.bird.vel.x, tuning.flight_speed);
        assert_eq!(world.bird.facing, Facing::Rightwards);
    }

    #[test]
    fn test_floor_contact_sends_bird_up() {
        let (mut world, tuning) = test_world();
        separate(&mut world);
        world.bird.pos.y = BOUNDS.y - world.bird.size.y + 0.5;
        world.bird.vel.y = tuning.climb_speed;

        tick(&mut world, &tuning);

        assert_eq!(world.bird.vel.y, -tuning.climb_speed);
    }

    #[test]
    fn test_ceiling_contact_sends_bird_down() {
        let (mut world, tuning) = test_world();
        separate(&mut world);
        world.bird.pos.y = -0.5;
        world.bird.vel.y = -tuning.climb_speed;

        tick(&mut world, &tuning);

        assert_eq!(world.bird.vel.y, tuning.climb_speed);
    }

    #[test]
    fn test_corner_contact_flips_both_axes() {
        let (mut world, tuning) = test_world();
        separate(&mut world);
        world.bird.pos = Vec2::new(-0.5, -0.5);
        world.bird.vel = Vec2::new(-tuning.flight_speed, -tuning.climb_speed);

        tick(&mut world, &tuning);

        assert_eq!(
            world.bird.vel,
            Vec2::new(tuning.flight_speed, tuning.climb_speed)
        );
        assert_eq!(world.bird.facing, Facing::Rightwards);
    }

    #[test]
    fn test_catch_scores_once_and_rescatters_can() {
        let (mut world, tuning) = test_world();
        world.bird.pos = Vec2::new(400.0, 300.0);
        world.can.pos = world.bird.pos;

        let events = tick(&mut world, &tuning);

        assert_eq!(world.score, 1);
        assert_eq!(events, vec![SimEvent::Scored { total: 1 }]);
        assert!(world.can.pos.x >= 1.0 && world.can.pos.x <= BOUNDS.x);
        assert!(world.can.pos.y >= 1.0 && world.can.pos.y <= BOUNDS.y);
    }

    #[test]
    fn test_free_flight_is_pure_translation() {
        let (mut world, tuning) = test_world();
        separate(&mut world);
        let vel = world.bird.vel;
        let facing = world.bird.facing;
        let mut expected = world.bird.pos;

        for _ in 0..10 {
            let events = tick(&mut world, &tuning);
            expected += vel;

            assert!(events.is_empty());
            assert_eq!(world.bird.pos, expected);
            assert_eq!(world.bird.vel, vel);
            assert_eq!(world.bird.facing, facing);
        }
        assert_eq!(world.score, 0);
    }

    #[test]
    fn test_velocity_magnitudes_never_change() {
        let (mut world, tuning) = test_world();

        for _ in 0..10_000 {
            tick(&mut world, &tuning);
            assert_eq!(world.bird.vel.x.abs(), tuning.flight_speed);
            assert_eq!(world.bird.vel.y.abs(), tuning.climb_speed);
            assert_eq!(world.can.vel, Vec2::ZERO);
        }
    }

    #[test]
    fn test_determinism() {
        // Two sessions with the same seed follow the same trajectory
        let tuning = Tuning::default();
        let mut a = World::new(99999, BOUNDS, &tuning);
        let mut b = World::new(99999, BOUNDS, &tuning);

        for _ in 0..5_000 {
            tick(&mut a, &tuning);
            tick(&mut b, &tuning);
        }

        assert_eq!(a.bird.pos, b.bird.pos);
        assert_eq!(a.can.pos, b.can.pos);
        assert_eq!(a.score, b.score);
        assert_eq!(a.time_ticks, b.time_ticks);
    }

    proptest! {
        #[test]
        fn right_edge_contact_always_turns_leftwards(
            overshoot in 0.001f32..300.0,
            y in 50.0f32..500.0,
        ) {
            let (mut world, tuning) = test_world();
            separate(&mut world);
            world.bird.pos = Vec2::new(BOUNDS.x - world.bird.size.x + overshoot, y);

            tick(&mut world, &tuning);

            prop_assert_eq!(world.bird.vel.x, -tuning.flight_speed);
            prop_assert_eq!(world.bird.facing, Facing::Leftwards);
        }

        #[test]
        fn left_edge_contact_always_turns_rightwards(
            undershoot in 0.001f32..300.0,
            y in 50.0f32..500.0,
        ) {
            let (mut world, tuning) = test_world();
            separate(&mut world);
            world.bird.pos = Vec2::new(-undershoot, y);

            tick(&mut world, &tuning);

            prop_assert_eq!(world.bird.vel.x, tuning.flight_speed);
            prop_assert_eq!(world.bird.facing, Facing::Rightwards);
        }
    }
}

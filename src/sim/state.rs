//! Entity state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::tuning::Tuning;

/// Which way a sprite's artwork faces
///
/// Declarative: the renderer reads this each frame and picks the matching
/// texture; the simulation never touches textures itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Default,
    Leftwards,
    Rightwards,
}

/// A positioned, textured rectangle moving across the stage
///
/// `pos` is the top-left corner in stage pixels, matching how the stage
/// positions its display objects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub facing: Facing,
}

impl Sprite {
    pub fn new(size: Vec2) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size,
            facing: Facing::default(),
        }
    }

    /// Center point of the sprite's bounding box
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Half-extents of the bounding box
    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size / 2.0
    }
}

/// Side effects a tick asks the host to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    /// The bird caught the can; `total` is the session score after the catch
    Scored { total: u32 },
}

/// Complete session state (deterministic)
#[derive(Debug, Clone)]
pub struct World {
    /// The bird doing the collecting
    pub bird: Sprite,
    /// The collectible can
    pub can: Sprite,
    /// Cans caught this session
    pub score: u32,
    /// Viewport size in stage pixels
    pub bounds: Vec2,
    /// Frame counter
    pub time_ticks: u64,
    rng: Pcg32,
}

impl World {
    /// Create a session: both sprites land on random stage points and the
    /// bird sets off toward the lower left.
    pub fn new(seed: u64, bounds: Vec2, tuning: &Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let mut bird = Sprite::new(tuning.bird_size);
        bird.pos = random_stage_point(&mut rng, bounds);
        bird.vel = Vec2::new(-tuning.flight_speed, tuning.climb_speed);

        let mut can = Sprite::new(tuning.can_size);
        can.pos = random_stage_point(&mut rng, bounds);

        Self {
            bird,
            can,
            score: 0,
            bounds,
            time_ticks: 0,
            rng,
        }
    }

    /// Drop the can on a fresh random stage point
    pub fn scatter_can(&mut self) {
        self.can.pos = random_stage_point(&mut self.rng, self.bounds);
    }
}

/// Uniformly random integer point in [1, bounds.x] x [1, bounds.y]
fn random_stage_point(rng: &mut Pcg32, bounds: Vec2) -> Vec2 {
    let max_x = (bounds.x as u32).max(1);
    let max_y = (bounds.y as u32).max(1);
    Vec2::new(
        rng.random_range(1..=max_x) as f32,
        rng.random_range(1..=max_y) as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_places_sprites_on_stage() {
        let tuning = Tuning::default();
        let bounds = Vec2::new(800.0, 600.0);
        let world = World::new(12345, bounds, &tuning);

        for sprite in [&world.bird, &world.can] {
            assert!(sprite.pos.x >= 1.0 && sprite.pos.x <= bounds.x);
            assert!(sprite.pos.y >= 1.0 && sprite.pos.y <= bounds.y);
        }
        assert_eq!(world.score, 0);
        assert_eq!(world.bird.vel, Vec2::new(-4.8, 1.0));
        assert_eq!(world.can.vel, Vec2::ZERO);
        assert_eq!(world.bird.facing, Facing::Default);
    }

    #[test]
    fn test_scatter_can_stays_within_bounds() {
        let tuning = Tuning::default();
        let bounds = Vec2::new(320.0, 240.0);
        let mut world = World::new(7, bounds, &tuning);

        for _ in 0..200 {
            world.scatter_can();
            assert!(world.can.pos.x >= 1.0 && world.can.pos.x <= bounds.x);
            assert!(world.can.pos.y >= 1.0 && world.can.pos.y <= bounds.y);
            assert_eq!(world.can.pos.x, world.can.pos.x.floor());
            assert_eq!(world.can.pos.y, world.can.pos.y.floor());
        }
    }

    #[test]
    fn test_sprite_center_and_half_extents() {
        let mut sprite = Sprite::new(Vec2::new(10.0, 20.0));
        sprite.pos = Vec2::new(100.0, 50.0);
        assert_eq!(sprite.center(), Vec2::new(105.0, 60.0));
        assert_eq!(sprite.half_extents(), Vec2::new(5.0, 10.0));
    }
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - One update per displayed frame (velocities are pixels per frame)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::rects_overlap;
pub use state::{Facing, SimEvent, Sprite, World};
pub use tick::tick;

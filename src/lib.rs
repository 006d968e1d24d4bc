//! drift-bird - a zero-input browser toy
//!
//! A bird drifts around the screen on a fixed-speed bounce path, scooping up
//! a soda can that rescatters on every catch. Nobody touches anything; the
//! score just goes up.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collision, scoring)
//! - `renderer`: WebGPU sprite rendering
//! - `assets`: Embedded artwork decoding and texture caching
//! - `tuning`: Data-driven balance values

pub mod assets;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Horizontal cruise speed (stage pixels per displayed frame)
    pub const FLIGHT_SPEED: f32 = 4.8;
    /// Vertical drift speed (stage pixels per displayed frame)
    pub const CLIMB_SPEED: f32 = 1.0;

    /// Sprite footprints for headless runs; live builds use texture dimensions
    pub const BIRD_SIZE: [f32; 2] = [48.0, 36.0];
    pub const CAN_SIZE: [f32; 2] = [24.0, 36.0];
}

//! Sprite rendering over WebGPU

pub mod pipeline;
pub mod sprite;
pub mod vertex;

pub use pipeline::{RenderState, SpriteDraw, SpriteTexture};

//! Quad generation for staged sprites

use glam::Vec2;

use super::vertex::Vertex;

/// Two triangles covering a sprite's rectangle, in stage pixels.
///
/// `pos` is the top-left corner; UVs map the full texture onto the quad.
pub fn sprite_quad(pos: Vec2, size: Vec2) -> [Vertex; 6] {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);

    [
        Vertex::new([x0, y0], [0.0, 0.0]),
        Vertex::new([x1, y0], [1.0, 0.0]),
        Vertex::new([x0, y1], [0.0, 1.0]),
        Vertex::new([x0, y1], [0.0, 1.0]),
        Vertex::new([x1, y0], [1.0, 0.0]),
        Vertex::new([x1, y1], [1.0, 1.0]),
    ]
}

use crate::paint::Color;

/// Draws only the edges of a mesh's triangles, lit per vertex.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WireframeMaterial {
    pub color: Color,
}

impl WireframeMaterial {
    #[inline]
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

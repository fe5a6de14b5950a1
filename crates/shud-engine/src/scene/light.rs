use glam::Vec3;

use crate::paint::Color;

/// Omnidirectional light at a point in world space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointLight {
    pub color: Color,
    pub intensity: f32,
    pub position: Vec3,
}

/// Non-directional fill light applied uniformly.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

impl PointLight {
    /// Color already multiplied by intensity.
    #[inline]
    pub fn radiance(&self) -> Color {
        self.color.scaled(self.intensity)
    }
}

impl AmbientLight {
    #[inline]
    pub fn radiance(&self) -> Color {
        self.color.scaled(self.intensity)
    }
}

use glam::Vec3;

use crate::paint::Color;

/// Parameters used to build the hero scene.
///
/// Defaults reproduce the landing page: a blue wireframe torus rotating in
/// front of a camera 8 units back.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Torus major radius (center of tube to center of torus).
    pub torus_radius: f32,
    /// Torus minor radius (tube thickness).
    pub torus_tube: f32,
    pub torus_radial_segments: u32,
    pub torus_tubular_segments: u32,

    /// Wireframe color, linear.
    pub mesh_color: Color,

    /// Radians added to rotation x and y on every frame.
    pub rotation_step: f64,

    /// Vertical field of view in degrees.
    pub camera_fov_y_degrees: f32,
    pub camera_near: f32,
    pub camera_far: f32,
    pub camera_position: Vec3,

    pub point_light_color: Color,
    pub point_light_intensity: f32,
    pub point_light_position: Vec3,

    pub ambient_color: Color,
    pub ambient_intensity: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            torus_radius: 3.0,
            torus_tube: 1.0,
            torus_radial_segments: 16,
            torus_tubular_segments: 100,

            mesh_color: Color::from_hex_srgb(0x4299e1),

            rotation_step: 0.01,

            camera_fov_y_degrees: 75.0,
            camera_near: 0.1,
            camera_far: 1000.0,
            camera_position: Vec3::new(0.0, 0.0, 8.0),

            point_light_color: Color::white(),
            point_light_intensity: 1.0,
            point_light_position: Vec3::new(0.0, 0.0, 5.0),

            ambient_color: Color::from_hex_srgb(0x404040),
            ambient_intensity: 1.0,
        }
    }
}

use super::{
    AmbientLight, GeometryId, MaterialId, Mesh, PerspectiveCamera, PointLight, SceneConfig,
    TorusGeometry, WireframeMaterial,
};
use crate::coords::SurfaceSize;

/// Scene graph for the hero: camera, one mesh, two lights.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub camera: PerspectiveCamera,
    pub mesh: Mesh,
    pub point_light: PointLight,
    pub ambient_light: AmbientLight,
}

impl Scene {
    /// Assembles the scene around already-uploaded resources.
    ///
    /// A zero-area `viewport` falls back to a square aspect until the first
    /// real resize arrives.
    pub fn new(
        config: &SceneConfig,
        geometry: GeometryId,
        material: MaterialId,
        viewport: SurfaceSize,
    ) -> Self {
        let camera = PerspectiveCamera::new(
            config.camera_fov_y_degrees,
            viewport.aspect().unwrap_or(1.0),
            config.camera_near,
            config.camera_far,
        )
        .with_position(config.camera_position);

        Self {
            camera,
            mesh: Mesh::new(geometry, material),
            point_light: PointLight {
                color: config.point_light_color,
                intensity: config.point_light_intensity,
                position: config.point_light_position,
            },
            ambient_light: AmbientLight {
                color: config.ambient_color,
                intensity: config.ambient_intensity,
            },
        }
    }
}

impl SceneConfig {
    pub fn torus(&self) -> TorusGeometry {
        TorusGeometry::new(
            self.torus_radius,
            self.torus_tube,
            self.torus_radial_segments,
            self.torus_tubular_segments,
        )
    }

    pub fn material(&self) -> WireframeMaterial {
        WireframeMaterial::new(self.mesh_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn default_scene_matches_hero_layout() {
        let config = SceneConfig::default();
        let scene = Scene::new(
            &config,
            GeometryId::from_raw(0),
            MaterialId::from_raw(0),
            SurfaceSize::new(1024, 768),
        );

        assert_eq!(scene.camera.fov_y_degrees(), 75.0);
        assert_eq!(scene.camera.aspect(), 1024.0 / 768.0);
        assert_eq!(scene.camera.near(), 0.1);
        assert_eq!(scene.camera.far(), 1000.0);
        assert_eq!(scene.camera.position(), Vec3::new(0.0, 0.0, 8.0));

        // Point light sits between the camera and the mesh.
        assert_eq!(scene.point_light.position, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(scene.point_light.intensity, 1.0);
        assert_eq!(scene.mesh.rotation, glam::DVec3::ZERO);
    }

    #[test]
    fn empty_viewport_uses_square_aspect() {
        let scene = Scene::new(
            &SceneConfig::default(),
            GeometryId::from_raw(0),
            MaterialId::from_raw(0),
            SurfaceSize::new(0, 0),
        );
        assert_eq!(scene.camera.aspect(), 1.0);
    }

    #[test]
    fn default_torus_dimensions() {
        let torus = SceneConfig::default().torus();
        assert_eq!((torus.radius, torus.tube), (3.0, 1.0));
        assert_eq!((torus.radial_segments, torus.tubular_segments), (16, 100));
    }
}

use glam::{Mat4, Vec3, Vec4};

/// Perspective camera looking down -Z from its position.
///
/// The projection matrix is cached; it is recommitted whenever the aspect
/// ratio changes, which is the only parameter mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    fov_y_degrees: f32,
    aspect: f32,
    near: f32,
    far: f32,
    position: Vec3,
    projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            fov_y_degrees,
            aspect,
            near,
            far,
            position: Vec3::ZERO,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection();
        camera
    }

    #[inline]
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    #[inline]
    pub fn fov_y_degrees(&self) -> f32 {
        self.fov_y_degrees
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    #[inline]
    pub fn near(&self) -> f32 {
        self.near
    }

    #[inline]
    pub fn far(&self) -> f32 {
        self.far
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Sets the aspect ratio and recommits the projection.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.update_projection();
    }

    /// Recomputes the cached projection (wgpu clip space, depth 0..1).
    pub fn update_projection(&mut self) {
        self.projection = Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        );
    }

    #[inline]
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + Vec3::NEG_Z, Vec3::Y)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view()
    }

    /// Projects a world-space point to normalized device coordinates.
    pub fn project(&self, point: Vec3) -> Vec3 {
        let clip: Vec4 = self.view_projection() * point.extend(1.0);
        clip.truncate() / clip.w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool { (a - b).abs() < 1e-4 }

    fn hero_camera(aspect: f32) -> PerspectiveCamera {
        PerspectiveCamera::new(75.0, aspect, 0.1, 1000.0).with_position(Vec3::new(0.0, 0.0, 8.0))
    }

    #[test]
    fn set_aspect_recommits_projection() {
        let mut camera = hero_camera(1024.0 / 768.0);
        let before = camera.projection();

        camera.set_aspect(2.0);

        assert_eq!(camera.aspect(), 2.0);
        assert_ne!(camera.projection(), before);
        assert_eq!(
            camera.projection(),
            Mat4::perspective_rh(75f32.to_radians(), 2.0, 0.1, 1000.0)
        );
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let ndc = hero_camera(1.5).project(Vec3::ZERO);
        assert!(close(ndc.x, 0.0) && close(ndc.y, 0.0));
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn horizontal_extent_shrinks_with_wider_aspect() {
        // x_ndc = x / (distance * tan(fov/2) * aspect)
        let half = (75f32.to_radians() * 0.5).tan();
        for aspect in [1.0, 4.0 / 3.0, 16.0 / 9.0] {
            let ndc = hero_camera(aspect).project(Vec3::new(3.0, 0.0, 0.0));
            assert!(close(ndc.x, 3.0 / (8.0 * half * aspect)), "aspect {aspect}: {}", ndc.x);
        }
    }

    #[test]
    fn vertical_extent_ignores_aspect() {
        let half = (75f32.to_radians() * 0.5).tan();
        let ndc = hero_camera(3.0).project(Vec3::new(0.0, 4.0, 0.0));
        assert!(close(ndc.y, 4.0 / (8.0 * half)));
    }
}

use std::f64::consts::TAU;

use glam::{DVec3, EulerRot, Mat4, Vec3};

use super::{GeometryId, MaterialId};

/// A geometry/material pair with a mutable orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub geometry: GeometryId,
    pub material: MaterialId,
    pub position: Vec3,
    /// Euler angles in radians, applied in XYZ order, each kept in `[0, TAU)`.
    ///
    /// Accumulated in f64 so a per-frame step does not drift over long
    /// sessions; narrowed to f32 only when building the model matrix.
    pub rotation: DVec3,
}

impl Mesh {
    pub fn new(geometry: GeometryId, material: MaterialId) -> Self {
        Self {
            geometry,
            material,
            position: Vec3::ZERO,
            rotation: DVec3::ZERO,
        }
    }

    /// Adds `dx`/`dy` radians about the x/y axes, wrapping to one turn.
    pub fn rotate(&mut self, dx: f64, dy: f64) {
        self.rotation.x = (self.rotation.x + dx).rem_euclid(TAU);
        self.rotation.y = (self.rotation.y + dy).rem_euclid(TAU);
    }

    pub fn model_matrix(&self) -> Mat4 {
        let r = self.rotation.as_vec3();
        Mat4::from_translation(self.position) * Mat4::from_euler(EulerRot::XYZ, r.x, r.y, r.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh() -> Mesh {
        Mesh::new(GeometryId::from_raw(1), MaterialId::from_raw(2))
    }

    #[test]
    fn rotate_accumulates_both_axes() {
        let mut m = mesh();
        m.rotate(0.25, 0.5);
        m.rotate(0.25, 0.5);
        assert_eq!(m.rotation, DVec3::new(0.5, 1.0, 0.0));
    }

    #[test]
    fn rotate_wraps_at_full_turn() {
        let mut m = mesh();
        m.rotate(TAU - 0.5, TAU - 0.5);
        m.rotate(1.0, 1.0);
        assert!((m.rotation.x - 0.5).abs() < 1e-12);
        assert!(m.rotation.y < TAU);
    }

    #[test]
    fn million_small_steps_stay_on_the_exact_angle() {
        let mut m = mesh();
        let n = 1_000_000u32;
        for _ in 0..n {
            m.rotate(0.01, 0.01);
        }
        let expected = (n as f64 * 0.01).rem_euclid(TAU);
        assert!((m.rotation.x - expected).abs() < 1e-6, "x = {}", m.rotation.x);
        assert!((m.rotation.y - expected).abs() < 1e-6, "y = {}", m.rotation.y);
        assert!(m.rotation.x >= 0.0 && m.rotation.x < TAU);
    }

    #[test]
    fn model_matrix_is_identity_at_rest() {
        assert!(mesh().model_matrix().abs_diff_eq(Mat4::IDENTITY, 1e-7));
    }

    #[test]
    fn model_matrix_applies_x_then_y() {
        let mut m = mesh();
        m.rotate(0.3, 0.7);
        let expected = Mat4::from_rotation_x(0.3) * Mat4::from_rotation_y(0.7);
        assert!(m.model_matrix().abs_diff_eq(expected, 1e-6));
    }
}

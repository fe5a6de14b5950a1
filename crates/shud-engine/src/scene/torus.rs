use std::collections::HashSet;
use std::f32::consts::TAU;

use glam::Vec3;

/// Parametric torus lying in the XY plane, centered at the origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TorusGeometry {
    pub radius: f32,
    pub tube: f32,
    pub radial_segments: u32,
    pub tubular_segments: u32,
    /// Sweep of the ring in radians (`TAU` for a closed torus).
    pub arc: f32,
}

/// CPU-side line geometry ready for upload.
///
/// `line_indices` is a line list: every pair is one edge, each triangle edge
/// appears once.
#[derive(Debug, Clone, Default)]
pub struct WireframeGeometry {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub line_indices: Vec<u32>,
}

impl TorusGeometry {
    pub fn new(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Self {
        Self {
            radius,
            tube,
            radial_segments: radial_segments.max(3),
            tubular_segments: tubular_segments.max(3),
            arc: TAU,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        ((self.radial_segments + 1) * (self.tubular_segments + 1)) as usize
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        (2 * self.radial_segments * self.tubular_segments) as usize
    }

    /// Builds the vertex grid and its deduplicated edge list.
    ///
    /// The grid is `(radial + 1) x (tubular + 1)`; the seam rows/columns are
    /// duplicated vertices so normals stay continuous per column.
    pub fn build(&self) -> WireframeGeometry {
        let radial = self.radial_segments;
        let tubular = self.tubular_segments;

        let mut positions = Vec::with_capacity(self.vertex_count());
        let mut normals = Vec::with_capacity(self.vertex_count());

        for j in 0..=radial {
            let v = j as f32 / radial as f32 * TAU;
            for i in 0..=tubular {
                let u = i as f32 / tubular as f32 * self.arc;

                let ring = self.radius + self.tube * v.cos();
                let vertex = Vec3::new(ring * u.cos(), ring * u.sin(), self.tube * v.sin());
                let center = Vec3::new(self.radius * u.cos(), self.radius * u.sin(), 0.0);

                positions.push(vertex.to_array());
                normals.push((vertex - center).normalize_or_zero().to_array());
            }
        }

        let stride = tubular + 1;
        let mut edges: HashSet<(u32, u32)> = HashSet::with_capacity(self.triangle_count() * 3 / 2);
        let mut line_indices = Vec::with_capacity(self.triangle_count() * 3);

        let mut push_edge = |a: u32, b: u32| {
            let key = (a.min(b), a.max(b));
            if edges.insert(key) {
                line_indices.extend_from_slice(&[key.0, key.1]);
            }
        };

        for j in 1..=radial {
            for i in 1..=tubular {
                let a = stride * j + i - 1;
                let b = stride * (j - 1) + i - 1;
                let c = stride * (j - 1) + i;
                let d = stride * j + i;

                // Triangles (a, b, d) and (b, c, d).
                for (p, q) in [(a, b), (b, d), (d, a), (b, c), (c, d)] {
                    push_edge(p, q);
                }
            }
        }

        WireframeGeometry {
            positions,
            normals,
            line_indices,
        }
    }
}

impl WireframeGeometry {
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.line_indices.len() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero_torus() -> TorusGeometry {
        TorusGeometry::new(3.0, 1.0, 16, 100)
    }

    #[test]
    fn vertex_grid_matches_segment_counts() {
        let torus = hero_torus();
        let geo = torus.build();
        assert_eq!(torus.vertex_count(), 17 * 101);
        assert_eq!(geo.positions.len(), torus.vertex_count());
        assert_eq!(geo.normals.len(), torus.vertex_count());
    }

    #[test]
    fn every_triangle_edge_is_drawn_once() {
        let geo = hero_torus().build();
        // rows * tubular + columns * radial + one diagonal per cell
        assert_eq!(geo.edge_count(), 17 * 100 + 101 * 16 + 16 * 100);

        let unique: HashSet<(u32, u32)> = geo
            .line_indices
            .chunks_exact(2)
            .map(|e| (e[0], e[1]))
            .collect();
        assert_eq!(unique.len(), geo.edge_count());
    }

    #[test]
    fn indices_are_in_range() {
        let geo = hero_torus().build();
        let n = geo.positions.len() as u32;
        assert!(geo.line_indices.iter().all(|&i| i < n));
    }

    #[test]
    fn vertices_lie_on_the_tube_surface() {
        let torus = hero_torus();
        for p in torus.build().positions {
            let p = Vec3::from_array(p);
            let ring = (p.x * p.x + p.y * p.y).sqrt();
            let dist = ((ring - torus.radius).powi(2) + p.z * p.z).sqrt();
            assert!((dist - torus.tube).abs() < 1e-4, "{p:?}");
        }
    }

    #[test]
    fn normals_are_unit_and_point_outward() {
        let torus = hero_torus();
        let geo = torus.build();
        for (p, n) in geo.positions.iter().zip(&geo.normals) {
            let p = Vec3::from_array(*p);
            let n = Vec3::from_array(*n);
            assert!((n.length() - 1.0).abs() < 1e-4);

            let center = Vec3::new(p.x, p.y, 0.0).normalize() * torus.radius;
            assert!(n.dot(p - center) > 0.0);
        }
    }

    #[test]
    fn segment_counts_are_floored() {
        let torus = TorusGeometry::new(1.0, 0.5, 0, 1);
        assert_eq!((torus.radial_segments, torus.tubular_segments), (3, 3));
    }
}

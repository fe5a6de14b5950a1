use glam::Vec2;

use super::SurfaceSize;

/// Axis-aligned rectangle in physical pixels.
///
/// Semantics:
/// - `origin` is the top-left corner
/// - `size` is width/height (may be negative before `normalized()`)
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rect covering a whole surface.
    #[inline]
    pub fn from_surface(size: SurfaceSize) -> Self {
        Self::new(0.0, 0.0, size.width as f32, size.height as f32)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    /// Returns a rect with non-negative width/height.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut r = self;
        if r.size.x < 0.0 {
            r.origin.x += r.size.x;
            r.size.x = -r.size.x;
        }
        if r.size.y < 0.0 {
            r.origin.y += r.size.y;
            r.size.y = -r.size.y;
        }
        r
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn translated(self, offset: Vec2) -> Self {
        Self {
            origin: self.origin + offset,
            size: self.size,
        }
    }

    /// Scales the rect around its own center.
    #[inline]
    pub fn scaled_about_center(self, factor: f32) -> Self {
        let size = self.size * factor;
        Self {
            origin: self.center() - size * 0.5,
            size,
        }
    }

    /// Overlap of two rects, `None` when they do not overlap with positive area.
    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();

        let min = a.origin.max(b.origin);
        let max = (a.origin + a.size).min(b.origin + b.size);
        let size = max - min;

        if size.x <= 0.0 || size.y <= 0.0 {
            None
        } else {
            Some(Rect { origin: min, size })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_flips_negative_extent() {
        let n = r(10.0, 10.0, -4.0, -3.0).normalized();
        assert_eq!(n, r(6.0, 7.0, 4.0, 3.0));
    }

    // ── transforms ────────────────────────────────────────────────────────

    #[test]
    fn translated_moves_origin_only() {
        let t = r(5.0, 5.0, 10.0, 2.0).translated(Vec2::new(0.0, -20.0));
        assert_eq!(t, r(5.0, -15.0, 10.0, 2.0));
    }

    #[test]
    fn scaled_about_center_keeps_center() {
        let rect = r(0.0, 0.0, 200.0, 50.0);
        let s = rect.scaled_about_center(0.8);
        assert_eq!(s.center(), rect.center());
        assert_eq!(s.size, Vec2::new(160.0, 40.0));
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_clips_to_surface() {
        let surface = Rect::from_surface(SurfaceSize::new(100, 100));
        let clipped = r(90.0, -5.0, 20.0, 20.0).intersect(surface).unwrap();
        assert_eq!(clipped, r(90.0, 0.0, 10.0, 15.0));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(10.0, 0.0, 10.0, 10.0);
        assert!(a.intersect(b).is_none());
    }

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}

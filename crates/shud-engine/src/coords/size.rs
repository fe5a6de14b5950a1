use winit::dpi::PhysicalSize;

/// Drawable size in physical pixels.
///
/// A zero-area size is legal (minimized windows report it) and is treated as
/// "nothing to draw" by renderers.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width over height, or `None` for a zero-area size.
    #[inline]
    pub fn aspect(self) -> Option<f32> {
        if self.is_empty() {
            None
        } else {
            Some(self.width as f32 / self.height as f32)
        }
    }
}

impl From<PhysicalSize<u32>> for SurfaceSize {
    fn from(size: PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }
}

impl From<SurfaceSize> for PhysicalSize<u32> {
    fn from(size: SurfaceSize) -> Self {
        PhysicalSize::new(size.width, size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_is_width_over_height() {
        assert_eq!(SurfaceSize::new(1024, 768).aspect(), Some(1024.0 / 768.0));
        assert_eq!(SurfaceSize::new(800, 600).aspect(), Some(800.0 / 600.0));
    }

    #[test]
    fn zero_area_has_no_aspect() {
        assert!(SurfaceSize::new(0, 600).is_empty());
        assert!(SurfaceSize::new(800, 0).is_empty());
        assert_eq!(SurfaceSize::new(800, 0).aspect(), None);
    }

    #[test]
    fn converts_from_winit_physical_size() {
        let size: SurfaceSize = PhysicalSize::new(1920u32, 1080u32).into();
        assert_eq!(size, SurfaceSize::new(1920, 1080));
    }
}

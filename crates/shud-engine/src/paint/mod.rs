//! Paint model shared between the page overlay and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - paint sources (solid, two-stop horizontal gradient)

pub mod color;

pub use color::Color;

/// Paint source for filling overlay quads.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    /// Left edge `from`, right edge `to`, interpolated linearly in between.
    HorizontalGradient { from: Color, to: Color },
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    #[inline]
    pub fn horizontal(from: Color, to: Color) -> Self {
        Paint::HorizontalGradient { from, to }
    }

    /// Returns the `(left, right)` colors fed to the overlay shader.
    #[inline]
    pub fn endpoints(self) -> (Color, Color) {
        match self {
            Paint::Solid(c) => (c, c),
            Paint::HorizontalGradient { from, to } => (from, to),
        }
    }

    /// Multiplies every stop by `opacity` (premultiplied, so all channels scale).
    #[inline]
    pub fn with_opacity(self, opacity: f32) -> Self {
        match self {
            Paint::Solid(c) => Paint::Solid(c.with_opacity(opacity)),
            Paint::HorizontalGradient { from, to } => Paint::HorizontalGradient {
                from: from.with_opacity(opacity),
                to: to.with_opacity(opacity),
            },
        }
    }

    #[inline]
    pub fn is_invisible(self) -> bool {
        let (a, b) = self.endpoints();
        a.a <= 0.0 && b.a <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_endpoints_are_equal() {
        let c = Color::from_premul(0.1, 0.2, 0.3, 1.0);
        assert_eq!(Paint::solid(c).endpoints(), (c, c));
    }

    #[test]
    fn zero_opacity_gradient_is_invisible() {
        let p = Paint::horizontal(Color::from_premul(1.0, 0.0, 0.0, 1.0), Color::from_premul(0.0, 0.0, 1.0, 1.0));
        assert!(!p.is_invisible());
        assert!(p.with_opacity(0.0).is_invisible());
    }
}

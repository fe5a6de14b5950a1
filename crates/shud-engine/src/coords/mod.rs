//! Coordinate and size types.
//!
//! Conventions:
//! - Surface sizes are physical pixels.
//! - Overlay rects are physical pixels, top-left origin, +Y down.

mod rect;
mod size;

pub use rect::Rect;
pub use size::SurfaceSize;

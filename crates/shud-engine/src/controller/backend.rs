//! Seams between the controller, its renderer and the host environment.

use crate::coords::SurfaceSize;
use crate::paint::Color;
use crate::scene::{GeometryId, MaterialId, Scene, WireframeGeometry, WireframeMaterial};

/// Renderer construction options.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RendererOptions {
    /// Multisample the scene pass.
    pub antialias: bool,
    /// Clear color for every frame. Zero alpha lets the surface composite
    /// over whatever is behind it.
    pub clear_color: Color,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            antialias: true,
            clear_color: Color::transparent(),
        }
    }
}

/// Result of a single render call that did not fail fatally.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RenderStatus {
    /// A frame was presented.
    Presented,
    /// The frame was dropped (surface reconfigured, timeout, zero-area size).
    Skipped,
}

/// Identifies the frame loop generation that scheduled a frame.
///
/// Every `start` opens a new generation; frames carrying an older ticket are
/// ignored, so a loop from a torn-down binding can never touch the new one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FrameTicket(u64);

impl FrameTicket {
    #[inline]
    pub(crate) const fn new(generation: u64) -> Self {
        Self(generation)
    }

    #[inline]
    pub const fn generation(self) -> u64 {
        self.0
    }
}

/// Renderer bound to one surface. Owns all GPU-side resources it hands out.
///
/// Every resource returned by `upload_geometry` / `compile_material` must be
/// given back through the matching `release_*` call before `dispose`.
pub trait SceneRenderer {
    /// Current output size in physical pixels.
    fn size(&self) -> SurfaceSize;

    /// Resizes the output. Zero-area sizes are accepted and defer drawing.
    fn set_size(&mut self, size: SurfaceSize);

    fn upload_geometry(&mut self, geometry: &WireframeGeometry) -> anyhow::Result<GeometryId>;

    fn compile_material(&mut self, material: &WireframeMaterial) -> anyhow::Result<MaterialId>;

    /// Renders `scene` from `scene.camera`. An `Err` is fatal for the binding.
    fn render(&mut self, scene: &Scene) -> anyhow::Result<RenderStatus>;

    fn release_geometry(&mut self, id: GeometryId);

    fn release_material(&mut self, id: MaterialId);

    /// Releases the renderer itself and its surface binding.
    fn dispose(self);
}

/// A surface that can have a renderer bound to it.
///
/// Binding consumes the handle: one handle, at most one renderer.
pub trait SurfaceBinder {
    type Renderer: SceneRenderer;

    fn bind(self, options: &RendererOptions, size: SurfaceSize) -> anyhow::Result<Self::Renderer>;
}

/// Host primitive: "run this frame before the next display refresh".
pub trait FrameScheduler {
    fn request_frame(&mut self, ticket: FrameTicket);
}

/// Host primitive: current viewport size in physical pixels.
pub trait ViewportSource {
    fn viewport_size(&self) -> SurfaceSize;
}

//! GPU rendering subsystem.
//!
//! [`GpuSceneRenderer`] is the wgpu implementation of
//! [`SceneRenderer`](crate::controller::SceneRenderer). Each frame it runs:
//! - a scene pass: the wireframe mesh as a line list, multisampled and
//!   resolved into the surface texture, cleared to the transparent color
//! - an overlay pass: screen-space quads on top of the resolved image
//!
//! Renderers own their GPU resources (pipelines, buffers).

mod binding;
mod common;
mod ctx;
mod overlay;
mod scene_renderer;
mod wireframe;

pub use binding::WindowSurface;
pub use ctx::{RenderCtx, RenderTarget};
pub use overlay::{OverlayQuad, OverlayRenderer};
pub use scene_renderer::GpuSceneRenderer;

use std::sync::Arc;

use anyhow::{Context, Result};
use winit::window::Window;

use crate::controller::{RendererOptions, SurfaceBinder};
use crate::coords::SurfaceSize;
use crate::device::{Gpu, GpuInit};

use super::GpuSceneRenderer;

/// A window that has not yet been bound to a renderer.
///
/// Handed to the app on resume; binding consumes it, so one window surface
/// backs at most one live renderer at a time.
pub struct WindowSurface {
    window: Arc<Window>,
    init: GpuInit,
}

impl WindowSurface {
    pub fn new(window: Arc<Window>, init: GpuInit) -> Self {
        Self { window, init }
    }
}

impl SurfaceBinder for WindowSurface {
    type Renderer = GpuSceneRenderer;

    fn bind(self, options: &RendererOptions, size: SurfaceSize) -> Result<GpuSceneRenderer> {
        let gpu = pollster::block_on(Gpu::new(self.window.clone(), size, &self.init))
            .context("failed to bind renderer to window surface")?;

        let sample_count = if options.antialias {
            gpu.supported_sample_count(self.init.sample_count)
        } else {
            1
        };
        if options.antialias && sample_count < self.init.sample_count {
            log::warn!(
                "{}x msaa unsupported for {:?}, using {}x",
                self.init.sample_count,
                gpu.surface_format(),
                sample_count
            );
        }

        Ok(GpuSceneRenderer::new(
            self.window,
            gpu,
            sample_count,
            options.clear_color,
        ))
    }
}

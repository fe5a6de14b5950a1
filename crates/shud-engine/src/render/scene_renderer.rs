use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use winit::window::Window;

use crate::controller::{RenderStatus, SceneRenderer};
use crate::coords::SurfaceSize;
use crate::device::{Gpu, SurfaceErrorAction};
use crate::paint::Color;
use crate::render::{OverlayQuad, OverlayRenderer, RenderCtx, RenderTarget};
use crate::scene::{GeometryId, MaterialId, Scene, WireframeGeometry, WireframeMaterial};

use super::wireframe::{GpuGeometry, WireframePipeline};

/// wgpu-backed [`SceneRenderer`] for one window surface.
///
/// Frame structure:
/// - scene pass into the MSAA target (or straight into the surface when
///   `sample_count == 1`), cleared to `clear_color`, resolved into the surface
/// - overlay pass with `LoadOp::Load` on the resolved surface view
pub struct GpuSceneRenderer {
    window: Arc<Window>,
    gpu: Gpu,

    sample_count: u32,
    clear_color: Color,
    msaa: Option<MsaaTarget>,

    geometries: HashMap<GeometryId, GpuGeometry>,
    materials: HashMap<MaterialId, WireframePipeline>,
    next_handle: u64,

    overlay: OverlayRenderer,
    overlay_quads: Vec<OverlayQuad>,
}

struct MsaaTarget {
    size: SurfaceSize,
    texture: wgpu::Texture,
    view: wgpu::TextureView,
}

impl GpuSceneRenderer {
    pub(super) fn new(window: Arc<Window>, gpu: Gpu, sample_count: u32, clear_color: Color) -> Self {
        Self {
            window,
            gpu,
            sample_count,
            clear_color,
            msaa: None,
            geometries: HashMap::new(),
            materials: HashMap::new(),
            next_handle: 1,
            overlay: OverlayRenderer::new(),
            overlay_quads: Vec::new(),
        }
    }

    /// Replaces the quads drawn over the scene from the next frame on.
    pub fn set_overlay(&mut self, quads: impl IntoIterator<Item = OverlayQuad>) {
        self.overlay_quads.clear();
        self.overlay_quads.extend(quads);
    }

    fn next_raw_handle(&mut self) -> u64 {
        let raw = self.next_handle;
        self.next_handle += 1;
        raw
    }

    /// (Re)creates the multisampled color target when the size changed.
    fn ensure_msaa(&mut self, size: SurfaceSize) {
        if self.sample_count <= 1 {
            self.msaa = None;
            return;
        }
        if self.msaa.as_ref().is_some_and(|t| t.size == size) {
            return;
        }
        if let Some(old) = self.msaa.take() {
            old.texture.destroy();
        }

        let texture = self.gpu.device().create_texture(&wgpu::TextureDescriptor {
            label: Some("shud msaa color"),
            size: wgpu::Extent3d {
                width: size.width,
                height: size.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: self.sample_count,
            dimension: wgpu::TextureDimension::D2,
            format: self.gpu.surface_format(),
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        self.msaa = Some(MsaaTarget {
            size,
            texture,
            view,
        });
    }
}

impl SceneRenderer for GpuSceneRenderer {
    fn size(&self) -> SurfaceSize {
        self.gpu.size()
    }

    fn set_size(&mut self, size: SurfaceSize) {
        if size == self.gpu.size() {
            return;
        }
        log::debug!("renderer resize to {}x{}", size.width, size.height);
        self.gpu.resize(size);
    }

    fn upload_geometry(&mut self, geometry: &WireframeGeometry) -> Result<GeometryId> {
        let uploaded = GpuGeometry::upload(self.gpu.device(), geometry)
            .context("failed to upload wireframe geometry")?;
        let id = GeometryId::from_raw(self.next_raw_handle());
        self.geometries.insert(id, uploaded);
        Ok(id)
    }

    fn compile_material(&mut self, material: &WireframeMaterial) -> Result<MaterialId> {
        let pipeline = WireframePipeline::compile(
            self.gpu.device(),
            self.gpu.surface_format(),
            self.sample_count,
            material,
        );
        let id = MaterialId::from_raw(self.next_raw_handle());
        self.materials.insert(id, pipeline);
        Ok(id)
    }

    fn render(&mut self, scene: &Scene) -> Result<RenderStatus> {
        let size = self.gpu.size();
        if size.is_empty() {
            return Ok(RenderStatus::Skipped);
        }

        self.ensure_msaa(size);

        let geometry = self
            .geometries
            .get(&scene.mesh.geometry)
            .ok_or_else(|| anyhow!("unknown geometry {:?}", scene.mesh.geometry))?;
        let material = self
            .materials
            .get(&scene.mesh.material)
            .ok_or_else(|| anyhow!("unknown material {:?}", scene.mesh.material))?;

        let mut frame = match self.gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                let message = err.to_string();
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => Err(anyhow!("surface error: {message}")),
                    action => {
                        log::debug!("frame skipped ({action:?}): {message}");
                        Ok(RenderStatus::Skipped)
                    }
                };
            }
        };

        material.write_uniform(self.gpu.queue(), scene);

        {
            let (view, resolve_target, store) = match self.msaa.as_ref() {
                Some(msaa) => (&msaa.view, Some(&frame.view), wgpu::StoreOp::Discard),
                None => (&frame.view, None, wgpu::StoreOp::Store),
            };

            let mut rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("shud scene pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color.to_wgpu()),
                        store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            material.draw(&mut rpass, geometry);
        }

        if !self.overlay_quads.is_empty() {
            let ctx = RenderCtx::new(
                self.gpu.device(),
                self.gpu.queue(),
                self.gpu.surface_format(),
                size,
            );
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            self.overlay.render(&ctx, &mut target, &self.overlay_quads);
        }

        self.window.pre_present_notify();
        self.gpu.submit(frame);
        Ok(RenderStatus::Presented)
    }

    fn release_geometry(&mut self, id: GeometryId) {
        match self.geometries.remove(&id) {
            Some(geometry) => geometry.destroy(),
            None => log::warn!("release of unknown geometry {id:?}"),
        }
    }

    fn release_material(&mut self, id: MaterialId) {
        match self.materials.remove(&id) {
            Some(material) => material.destroy(),
            None => log::warn!("release of unknown material {id:?}"),
        }
    }

    fn dispose(mut self) {
        if !self.geometries.is_empty() || !self.materials.is_empty() {
            log::warn!(
                "renderer disposed with {} geometries and {} materials still live",
                self.geometries.len(),
                self.materials.len()
            );
        }
        for (_, geometry) in self.geometries.drain() {
            geometry.destroy();
        }
        for (_, material) in self.materials.drain() {
            material.destroy();
        }
        if let Some(msaa) = self.msaa.take() {
            msaa.texture.destroy();
        }
        log::debug!("renderer disposed");
    }
}

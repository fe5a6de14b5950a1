use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::{Rect, SurfaceSize};
use crate::paint::{Color, Paint};
use crate::render::{RenderCtx, RenderTarget};

use super::common::{
    premul_alpha_blend, uniform_binding_size, uniform_layout, QuadVertex, QUAD_INDICES,
    QUAD_VERTICES,
};

/// One screen-space quad drawn over the scene, in physical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OverlayQuad {
    pub rect: Rect,
    pub paint: Paint,
}

impl OverlayQuad {
    #[inline]
    pub fn new(rect: Rect, paint: Paint) -> Self {
        Self { rect, paint }
    }
}

/// Instanced quad renderer for the page chrome drawn over the scene.
///
/// Quads are given in physical pixels and converted to NDC in the vertex shader.
/// Paint is linear premultiplied; gradients interpolate left to right.
/// Draws into the resolved (single-sample) surface view with `LoadOp::Load`.
#[derive(Default)]
pub struct OverlayRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    quad_vbo: Option<wgpu::Buffer>,
    quad_ibo: Option<wgpu::Buffer>,

    instance_vbo: Option<wgpu::Buffer>,
    instance_capacity: usize,
}

impl OverlayRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws `quads` in order on top of whatever `target` already holds.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, quads: &[OverlayQuad]) {
        let instances = build_instances(quads, ctx.size);
        if instances.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_static_buffers(ctx);
        self.ensure_bindings(ctx);

        self.write_viewport_uniform(ctx);
        self.ensure_instance_capacity(ctx, instances.len());

        let Some(instance_vbo) = self.instance_vbo.as_ref() else { return };
        ctx.queue.write_buffer(instance_vbo, 0, bytemuck::cast_slice(&instances));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(quad_vbo) = self.quad_vbo.as_ref() else { return };
        let Some(quad_ibo) = self.quad_ibo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("shud overlay pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, quad_vbo.slice(..));
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.set_index_buffer(quad_ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..instances.len() as u32);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shud overlay shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/overlay.wgsl").into()),
        });

        let bind_group_layout = uniform_layout(
            ctx.device,
            "shud overlay bgl",
            wgpu::ShaderStages::VERTEX,
            uniform_binding_size::<ViewportUniform>(),
        );

        let pipeline_layout = ctx
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("shud overlay pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("shud overlay pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[QuadVertex::layout(), OverlayInstance::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),

            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        // Bindings belong to the old layout.
        self.bind_group = None;
        self.viewport_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.viewport_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("shud overlay viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("shud overlay bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.quad_vbo.is_some() && self.quad_ibo.is_some() {
            return;
        }

        self.quad_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("shud overlay quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        }));

        self.quad_ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("shud overlay quad ibo"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }

    fn write_viewport_uniform(&mut self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.viewport_ubo.as_ref() else { return };
        let u = ViewportUniform {
            size: [
                (ctx.size.width as f32).max(1.0),
                (ctx.size.height as f32).max(1.0),
            ],
            _pad: [0.0; 2],
        };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
    }

    fn ensure_instance_capacity(&mut self, ctx: &RenderCtx<'_>, required_instances: usize) {
        if required_instances <= self.instance_capacity && self.instance_vbo.is_some() {
            return;
        }

        let new_cap = required_instances.next_power_of_two().max(16);
        let new_size = (new_cap * std::mem::size_of::<OverlayInstance>()) as u64;

        self.instance_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("shud overlay instance vbo"),
            size: new_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.instance_capacity = new_cap;
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ViewportUniform {
    size: [f32; 2], // physical px
    _pad: [f32; 2],
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct OverlayInstance {
    origin: [f32; 2],
    size: [f32; 2],
    color_left: [f32; 4],
    color_right: [f32; 4],
}

impl OverlayInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x2, // origin
        2 => Float32x2, // size
        3 => Float32x4, // color_left
        4 => Float32x4  // color_right
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<OverlayInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

/// Clips quads to the surface and drops the ones that cannot contribute.
///
/// A gradient clipped on the left or right keeps its on-screen colors: the
/// endpoints are re-evaluated at the clipped edges.
fn build_instances(quads: &[OverlayQuad], surface: SurfaceSize) -> Vec<OverlayInstance> {
    let bounds = Rect::from_surface(surface);

    quads
        .iter()
        .filter(|q| !q.paint.is_invisible())
        .filter_map(|q| {
            let full = q.rect.normalized();
            let clipped = full.intersect(bounds)?;

            let (from, to) = q.paint.endpoints();
            let t0 = (clipped.origin.x - full.origin.x) / full.size.x;
            let t1 = (clipped.origin.x + clipped.size.x - full.origin.x) / full.size.x;

            Some(OverlayInstance {
                origin: clipped.origin.to_array(),
                size: clipped.size.to_array(),
                color_left: lerp(from, to, t0).to_array(),
                color_right: lerp(from, to, t1).to_array(),
            })
        })
        .collect()
}

fn lerp(a: Color, b: Color, t: f32) -> Color {
    Color::from_premul(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
        a.a + (b.a - a.a) * t,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::from_premul(1.0, 0.0, 0.0, 1.0);
    const BLUE: Color = Color::from_premul(0.0, 0.0, 1.0, 1.0);

    fn quad(x: f32, y: f32, w: f32, h: f32, paint: Paint) -> OverlayQuad {
        OverlayQuad::new(Rect::new(x, y, w, h), paint)
    }

    #[test]
    fn offscreen_and_transparent_quads_are_dropped() {
        let surface = SurfaceSize::new(100, 100);
        let quads = [
            quad(200.0, 0.0, 10.0, 10.0, Paint::solid(RED)),
            quad(0.0, 0.0, 10.0, 10.0, Paint::solid(Color::transparent())),
            quad(0.0, 0.0, 0.0, 10.0, Paint::solid(RED)),
            quad(10.0, 10.0, 20.0, 20.0, Paint::solid(BLUE)),
        ];

        let out = build_instances(&quads, surface);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].origin, [10.0, 10.0]);
        assert_eq!(out[0].color_left, BLUE.to_array());
    }

    #[test]
    fn clipped_gradient_keeps_visible_colors() {
        let surface = SurfaceSize::new(100, 50);
        // Half of the quad hangs off the right edge.
        let q = quad(50.0, 0.0, 100.0, 10.0, Paint::horizontal(RED, BLUE));

        let out = build_instances(&[q], surface);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].size, [50.0, 10.0]);
        assert_eq!(out[0].color_left, RED.to_array());
        assert_eq!(out[0].color_right, [0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn negative_size_is_normalized() {
        let surface = SurfaceSize::new(100, 100);
        let q = quad(30.0, 30.0, -20.0, -20.0, Paint::solid(RED));

        let out = build_instances(&[q], surface);
        assert_eq!(out[0].origin, [10.0, 10.0]);
        assert_eq!(out[0].size, [20.0, 20.0]);
    }

    #[test]
    fn instance_layout_is_packed() {
        assert_eq!(std::mem::size_of::<OverlayInstance>(), 48);
        assert_eq!(std::mem::size_of::<ViewportUniform>(), 16);
    }
}

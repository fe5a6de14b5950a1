use anyhow::Result;
use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::paint::Color;
use crate::scene::{Scene, WireframeGeometry, WireframeMaterial};

use super::common::{premul_alpha_blend, uniform_binding_size, uniform_layout};

/// Per-draw uniform block. Layout matches `SceneUniform` in `wireframe.wgsl`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct SceneUniform {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    base_color: [f32; 4],
    light_position: [f32; 4],
    light_color: [f32; 4],
    ambient_color: [f32; 4],
}

impl SceneUniform {
    pub(super) fn new(scene: &Scene, base_color: Color) -> Self {
        let light = scene.point_light.radiance();
        let ambient = scene.ambient_light.radiance();
        let p = scene.point_light.position;

        Self {
            view_proj: scene.camera.view_projection().to_cols_array_2d(),
            model: scene.mesh.model_matrix().to_cols_array_2d(),
            base_color: base_color.to_array(),
            light_position: [p.x, p.y, p.z, 1.0],
            light_color: light.to_array(),
            ambient_color: ambient.to_array(),
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct LineVertex {
    position: [f32; 3],
    normal: [f32; 3],
}

impl LineVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // normal
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Uploaded wireframe: interleaved position/normal vertices plus a line-list index buffer.
pub(super) struct GpuGeometry {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl GpuGeometry {
    pub(super) fn upload(device: &wgpu::Device, geometry: &WireframeGeometry) -> Result<Self> {
        anyhow::ensure!(
            geometry.positions.len() == geometry.normals.len(),
            "geometry has {} positions but {} normals",
            geometry.positions.len(),
            geometry.normals.len()
        );
        anyhow::ensure!(!geometry.line_indices.is_empty(), "geometry has no edges");

        let vertex_count = geometry.positions.len();
        if let Some(bad) = geometry
            .line_indices
            .iter()
            .find(|&&i| i as usize >= vertex_count)
        {
            anyhow::bail!("edge index {bad} out of range for {vertex_count} vertices");
        }

        let vertices: Vec<LineVertex> = geometry
            .positions
            .iter()
            .zip(&geometry.normals)
            .map(|(&position, &normal)| LineVertex { position, normal })
            .collect();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("shud wireframe vbo"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("shud wireframe ibo"),
            contents: bytemuck::cast_slice(&geometry.line_indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Ok(Self {
            vertex_buffer,
            index_buffer,
            index_count: u32::try_from(geometry.line_indices.len())?,
        })
    }

    pub(super) fn destroy(self) {
        self.vertex_buffer.destroy();
        self.index_buffer.destroy();
    }
}

/// Compiled wireframe material: pipeline plus its uniform binding.
pub(super) struct WireframePipeline {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    color: Color,
}

impl WireframePipeline {
    pub(super) fn compile(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        sample_count: u32,
        material: &WireframeMaterial,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shud wireframe shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/wireframe.wgsl").into()),
        });

        let bind_group_layout = uniform_layout(
            device,
            "shud wireframe bgl",
            wgpu::ShaderStages::VERTEX,
            uniform_binding_size::<SceneUniform>(),
        );

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("shud wireframe pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("shud wireframe pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[LineVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: sample_count,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },

            multiview_mask: None,
            cache: None,
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("shud wireframe ubo"),
            size: std::mem::size_of::<SceneUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("shud wireframe bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            color: material.color,
        }
    }

    pub(super) fn write_uniform(&self, queue: &wgpu::Queue, scene: &Scene) {
        let u = SceneUniform::new(scene, self.color);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub(super) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, geometry: &GpuGeometry) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, geometry.vertex_buffer.slice(..));
        rpass.set_index_buffer(geometry.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..geometry.index_count, 0, 0..1);
    }

    pub(super) fn destroy(self) {
        self.uniform_buffer.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::SurfaceSize;
    use crate::scene::{GeometryId, MaterialId, SceneConfig};

    #[test]
    fn uniform_matches_wgsl_layout() {
        // two mat4x4 + four vec4, all 16-byte aligned
        assert_eq!(std::mem::size_of::<SceneUniform>(), 192);
        assert_eq!(std::mem::size_of::<LineVertex>(), 24);
    }

    #[test]
    fn uniform_bakes_light_intensity_into_color() {
        let mut config = SceneConfig::default();
        config.point_light_intensity = 0.5;
        let scene = Scene::new(
            &config,
            GeometryId::from_raw(1),
            MaterialId::from_raw(1),
            SurfaceSize::new(800, 600),
        );

        let u = SceneUniform::new(&scene, config.mesh_color);
        assert_eq!(u.light_position, [0.0, 0.0, 5.0, 1.0]);
        assert_eq!(u.light_color[0], 0.5);
        assert_eq!(u.base_color, config.mesh_color.to_array());
        assert_eq!(u.model, glam::Mat4::IDENTITY.to_cols_array_2d());
    }
}

/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior). FIFO is vsync and universally supported.
    pub present_mode: wgpu::PresentMode,

    /// Composite alpha modes to try, in order.
    ///
    /// Premultiplied first so a transparent clear shows what is behind the
    /// window. Falls back to the first mode the surface supports.
    pub alpha_modes: Vec<wgpu::CompositeAlphaMode>,

    /// Multisample count for the scene pass when anti-aliasing is requested.
    ///
    /// Downgraded to 1 if the adapter cannot multisample the surface format.
    pub sample_count: u32,

    /// Required wgpu features.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface (hint).
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_modes: vec![
                wgpu::CompositeAlphaMode::PreMultiplied,
                wgpu::CompositeAlphaMode::PostMultiplied,
            ],
            sample_count: 4,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}

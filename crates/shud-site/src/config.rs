use shud_engine::controller::RendererOptions;
use shud_engine::device::GpuInit;
use shud_engine::logging::LoggingConfig;
use shud_engine::scene::SceneConfig;
use shud_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

use crate::page::{Entrance, PageContent};
use crate::page::layout::Palette;

/// Everything the site needs to start, in one place.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub logging: LoggingConfig,
    pub runtime: RuntimeConfig,
    pub gpu: GpuInit,
    pub scene: SceneConfig,
    pub renderer: RendererOptions,
    pub content: PageContent,
    pub entrance: Entrance,
    pub palette: Palette,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let content = PageContent::shud();
        Self {
            logging: LoggingConfig::default(),
            runtime: RuntimeConfig {
                title: content.window_title(),
                initial_size: LogicalSize::new(1280.0, 800.0),
                transparent: true,
            },
            gpu: GpuInit::default(),
            scene: SceneConfig::default(),
            renderer: RendererOptions::default(),
            content,
            entrance: Entrance::default(),
            palette: Palette::default(),
        }
    }
}

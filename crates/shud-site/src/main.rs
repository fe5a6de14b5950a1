//! SHUD landing page.
//!
//! Opens a transparent window and runs the hero: a rotating wireframe torus
//! behind the page chrome. Page copy goes to the window title and the log.

mod config;
mod hero;
mod page;

use anyhow::Result;
use shud_engine::logging::init_logging;
use shud_engine::window::Runtime;

use crate::config::SiteConfig;
use crate::hero::HeroApp;

fn main() -> Result<()> {
    let config = SiteConfig::default();
    init_logging(config.logging.clone());

    for line in config.content.log_summary() {
        log::info!("{line}");
    }

    let app: HeroApp = HeroApp::new(&config);
    Runtime::run(config.runtime, config.gpu, app)
}

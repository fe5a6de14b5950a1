use shud_engine::controller::{
    FrameOutcome, FrameScheduler, FrameTicket, RenderSurfaceController, SceneRenderer,
    StartOutcome, SurfaceBinder, ViewportSource,
};
use shud_engine::core::{App, AppControl, HostCtx};
use shud_engine::coords::SurfaceSize;
use shud_engine::render::{GpuSceneRenderer, OverlayQuad, WindowSurface};
use shud_engine::time::FrameClock;

use crate::config::SiteConfig;
use crate::page::layout::{self, Palette};
use crate::page::{Entrance, EntranceFrame};

/// Renderer that can draw the page chrome over the scene.
pub trait OverlaySink: SceneRenderer {
    fn set_overlay(&mut self, quads: Vec<OverlayQuad>);
}

impl OverlaySink for GpuSceneRenderer {
    fn set_overlay(&mut self, quads: Vec<OverlayQuad>) {
        GpuSceneRenderer::set_overlay(self, quads);
    }
}

/// What the hero needs from the window beyond frames and viewport size.
pub trait HeroHost: FrameScheduler + ViewportSource {
    /// Physical px per logical px.
    fn scale_factor(&self) -> f32;

    fn set_title(&self, title: &str);
}

impl HeroHost for HostCtx<'_> {
    fn scale_factor(&self) -> f32 {
        HostCtx::scale_factor(self)
    }

    fn set_title(&self, title: &str) {
        HostCtx::set_title(self, title);
    }
}

/// The landing page hero: the rotating torus behind the page chrome.
pub struct HeroApp<B: SurfaceBinder = WindowSurface> {
    controller: RenderSurfaceController<B>,
    title: String,
    entrance: Entrance,
    palette: Palette,
    clock: FrameClock,
    /// Seconds of entrance shown so far. Survives remounts.
    entrance_time: f32,
    /// Entrance has finished and the settled overlay is uploaded.
    settled: bool,
}

impl<B> HeroApp<B>
where
    B: SurfaceBinder,
    B::Renderer: OverlaySink,
{
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            controller: RenderSurfaceController::new(config.scene.clone(), config.renderer),
            title: config.content.window_title(),
            entrance: config.entrance.clone(),
            palette: config.palette.clone(),
            clock: FrameClock::new(),
            entrance_time: 0.0,
            settled: false,
        }
    }

    fn entrance_frame(&self) -> EntranceFrame {
        if self.settled {
            EntranceFrame::SETTLED
        } else {
            self.entrance.at(self.entrance_time)
        }
    }

    /// Recomposes the page chrome for the current size and entrance time.
    fn update_overlay(&mut self, scale: f32) {
        let frame = self.entrance_frame();
        let palette = &self.palette;
        if let Some(renderer) = self.controller.renderer_mut() {
            let quads = layout::compose(renderer.size(), scale, &frame, palette);
            renderer.set_overlay(quads);
        }
    }

    /// Binds `surface` and shows the entrance where it left off.
    fn attach<H: HeroHost>(&mut self, surface: B, host: &mut H) -> anyhow::Result<()> {
        host.set_title(&self.title);

        match self.controller.start(Some(surface), host)? {
            StartOutcome::Started(ticket) => {
                log::debug!(
                    "hero mounted (loop generation {}, entrance at {:.2}s)",
                    ticket.generation(),
                    self.entrance_time
                );
            }
            StartOutcome::Skipped => return Ok(()),
        }

        self.update_overlay(host.scale_factor());
        Ok(())
    }

    fn follow_resize(&mut self, size: SurfaceSize, scale: f32) {
        self.controller.resize(size);
        self.update_overlay(scale);
    }

    /// Advances the entrance by `dt` seconds and runs one controller frame.
    fn step<H: HeroHost>(&mut self, ticket: FrameTicket, dt: f32, host: &mut H) -> AppControl {
        if !self.settled && self.controller.ticket() == Some(ticket) {
            self.entrance_time += dt;
            if self.entrance.is_finished(self.entrance_time) {
                log::debug!("entrance finished at {:.2}s", self.entrance_time);
                self.settled = true;
            }
            self.update_overlay(host.scale_factor());
        }

        match self.controller.frame(ticket, host) {
            Ok(FrameOutcome::Stale) => {
                log::debug!("stale frame ticket {}", ticket.generation());
                AppControl::Continue
            }
            Ok(_) => AppControl::Continue,
            Err(e) => {
                log::error!("{e}");
                AppControl::Exit
            }
        }
    }

    fn detach(&mut self) {
        self.controller.stop();
    }
}

impl App for HeroApp<WindowSurface> {
    fn mount(&mut self, surface: WindowSurface, host: &mut HostCtx<'_>) -> anyhow::Result<()> {
        self.clock.reset();
        self.attach(surface, host)
    }

    fn resized(&mut self, size: SurfaceSize, host: &mut HostCtx<'_>) {
        self.follow_resize(size, host.scale_factor());
    }

    fn frame(&mut self, ticket: FrameTicket, host: &mut HostCtx<'_>) -> AppControl {
        let dt = self.clock.tick().dt;
        self.step(ticket, dt, host)
    }

    fn unmount(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use shud_engine::controller::{RenderStatus, RendererOptions};
    use shud_engine::scene::{GeometryId, MaterialId, Scene, WireframeGeometry, WireframeMaterial};

    use super::*;

    #[derive(Debug, Default)]
    struct Journal {
        overlays: Vec<Vec<OverlayQuad>>,
        renders: u32,
        disposed: u32,
        fail_render: bool,
    }

    type Shared = Rc<RefCell<Journal>>;

    struct FakeSurface(Shared);

    struct FakeRenderer {
        journal: Shared,
        size: SurfaceSize,
    }

    impl SurfaceBinder for FakeSurface {
        type Renderer = FakeRenderer;

        fn bind(self, _options: &RendererOptions, size: SurfaceSize) -> anyhow::Result<FakeRenderer> {
            Ok(FakeRenderer {
                journal: self.0,
                size,
            })
        }
    }

    impl SceneRenderer for FakeRenderer {
        fn size(&self) -> SurfaceSize {
            self.size
        }

        fn set_size(&mut self, size: SurfaceSize) {
            self.size = size;
        }

        fn upload_geometry(&mut self, _geometry: &WireframeGeometry) -> anyhow::Result<GeometryId> {
            Ok(GeometryId::from_raw(1))
        }

        fn compile_material(&mut self, _material: &WireframeMaterial) -> anyhow::Result<MaterialId> {
            Ok(MaterialId::from_raw(2))
        }

        fn render(&mut self, _scene: &Scene) -> anyhow::Result<RenderStatus> {
            let mut j = self.journal.borrow_mut();
            if j.fail_render {
                anyhow::bail!("device lost");
            }
            j.renders += 1;
            Ok(RenderStatus::Presented)
        }

        fn release_geometry(&mut self, _id: GeometryId) {}

        fn release_material(&mut self, _id: MaterialId) {}

        fn dispose(self) {
            self.journal.borrow_mut().disposed += 1;
        }
    }

    impl OverlaySink for FakeRenderer {
        fn set_overlay(&mut self, quads: Vec<OverlayQuad>) {
            self.journal.borrow_mut().overlays.push(quads);
        }
    }

    struct FakeHost {
        size: SurfaceSize,
        requested: Vec<FrameTicket>,
        title: RefCell<Option<String>>,
    }

    impl FakeHost {
        fn new(width: u32, height: u32) -> Self {
            Self {
                size: SurfaceSize::new(width, height),
                requested: Vec::new(),
                title: RefCell::new(None),
            }
        }
    }

    impl FrameScheduler for FakeHost {
        fn request_frame(&mut self, ticket: FrameTicket) {
            self.requested.push(ticket);
        }
    }

    impl ViewportSource for FakeHost {
        fn viewport_size(&self) -> SurfaceSize {
            self.size
        }
    }

    impl HeroHost for FakeHost {
        fn scale_factor(&self) -> f32 {
            1.0
        }

        fn set_title(&self, title: &str) {
            *self.title.borrow_mut() = Some(title.to_string());
        }
    }

    type Hero = HeroApp<FakeSurface>;

    fn mounted(journal: &Shared, host: &mut FakeHost) -> Hero {
        let mut hero = Hero::new(&SiteConfig::default());
        hero.attach(FakeSurface(journal.clone()), host).unwrap();
        hero
    }

    /// Runs the latest scheduled frame with a fixed time step.
    fn refresh(hero: &mut Hero, host: &mut FakeHost, dt: f32) -> AppControl {
        let ticket = host.requested.pop().expect("no frame scheduled");
        hero.step(ticket, dt, host)
    }

    fn chrome(size: SurfaceSize, frame: &EntranceFrame) -> Vec<OverlayQuad> {
        layout::compose(size, 1.0, frame, &Palette::default())
    }

    fn last_overlay(journal: &Shared) -> Vec<OverlayQuad> {
        journal.borrow().overlays.last().cloned().expect("no overlay uploaded")
    }

    #[test]
    fn mount_shows_chrome_with_hero_block_hidden() {
        let journal = Shared::default();
        let mut host = FakeHost::new(1024, 768);
        let _hero = mounted(&journal, &mut host);

        let size = host.size;
        let settled_len = chrome(size, &EntranceFrame::SETTLED).len();
        assert_eq!(last_overlay(&journal).len(), settled_len - 4);
        assert_eq!(host.requested.len(), 1);
        assert_eq!(host.title.borrow().as_deref(), Some("SHUD | Chief Tech"));
    }

    #[test]
    fn entrance_plays_once_then_hands_off_to_settled_layout() {
        let journal = Shared::default();
        let mut host = FakeHost::new(1024, 768);
        let mut hero = mounted(&journal, &mut host);
        let settled = chrome(host.size, &EntranceFrame::SETTLED);

        for _ in 0..6 {
            assert_eq!(refresh(&mut hero, &mut host, 0.25), AppControl::Continue);
        }
        assert!(hero.settled);
        assert_eq!(last_overlay(&journal), settled);

        let uploads = journal.borrow().overlays.len();
        for _ in 0..10 {
            refresh(&mut hero, &mut host, 0.25);
        }
        assert_eq!(journal.borrow().overlays.len(), uploads);
        assert_eq!(journal.borrow().renders, 16);
    }

    #[test]
    fn render_error_exits_and_releases() {
        let journal = Shared::default();
        let mut host = FakeHost::new(1024, 768);
        let mut hero = mounted(&journal, &mut host);

        journal.borrow_mut().fail_render = true;
        assert_eq!(refresh(&mut hero, &mut host, 0.016), AppControl::Exit);
        assert_eq!(journal.borrow().disposed, 1);
        assert!(host.requested.is_empty());
    }

    #[test]
    fn remount_resumes_a_partial_entrance() {
        let journal = Shared::default();
        let mut host = FakeHost::new(1024, 768);
        let mut hero = mounted(&journal, &mut host);

        for _ in 0..4 {
            refresh(&mut hero, &mut host, 0.25);
        }
        assert!(!hero.settled);

        hero.detach();
        host.requested.clear();
        hero.attach(FakeSurface(journal.clone()), &mut host).unwrap();

        let resumed = chrome(host.size, &Entrance::default().at(1.0));
        assert_eq!(last_overlay(&journal), resumed);
        assert_ne!(resumed, chrome(host.size, &Entrance::default().at(0.0)));
    }

    #[test]
    fn stale_ticket_does_not_advance_entrance() {
        let journal = Shared::default();
        let mut host = FakeHost::new(1024, 768);
        let mut hero = mounted(&journal, &mut host);
        let old = host.requested.pop().expect("no frame scheduled");

        hero.detach();
        hero.attach(FakeSurface(journal.clone()), &mut host).unwrap();

        assert_eq!(hero.step(old, 10.0, &mut host), AppControl::Continue);
        assert!(!hero.settled);
        assert_eq!(hero.entrance_time, 0.0);
    }

    #[test]
    fn resize_recomposes_for_the_new_viewport() {
        let journal = Shared::default();
        let mut host = FakeHost::new(1024, 768);
        let mut hero = mounted(&journal, &mut host);
        for _ in 0..6 {
            refresh(&mut hero, &mut host, 0.25);
        }

        let narrow = SurfaceSize::new(400, 800);
        host.size = narrow;
        hero.follow_resize(narrow, 1.0);
        assert_eq!(last_overlay(&journal), chrome(narrow, &EntranceFrame::SETTLED));
    }
}

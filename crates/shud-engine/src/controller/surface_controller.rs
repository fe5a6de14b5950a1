use super::backend::{
    FrameScheduler, FrameTicket, RenderStatus, RendererOptions, SceneRenderer, SurfaceBinder,
    ViewportSource,
};
use super::error::{InitError, RenderError};
use crate::coords::SurfaceSize;
use crate::scene::{Scene, SceneConfig};

/// Result of [`RenderSurfaceController::start`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StartOutcome {
    /// A renderer is bound and the first frame has been scheduled.
    Started(FrameTicket),
    /// No surface was available; nothing was created.
    Skipped,
}

/// Result of [`RenderSurfaceController::frame`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameOutcome {
    /// The scene advanced one step and the next frame is scheduled.
    Rendered(RenderStatus),
    /// The controller is not running; nothing happened.
    Inactive,
    /// The ticket belongs to an earlier loop generation; nothing happened.
    Stale,
}

/// Everything that exists only while a surface is bound.
struct Mounted<R> {
    renderer: R,
    scene: Scene,
    ticket: FrameTicket,
}

/// Owns the renderer/surface binding, the scene and the frame loop.
///
/// Lifecycle:
/// - `start` binds a renderer, uploads the torus, builds the scene and
///   schedules the first frame
/// - `frame` advances the mesh one fixed step and renders
/// - `resize` keeps camera aspect and renderer output in sync
/// - `stop` releases geometry, material and renderer exactly once
///
/// Dropping the controller runs `stop`.
pub struct RenderSurfaceController<B: SurfaceBinder> {
    config: SceneConfig,
    options: RendererOptions,
    mounted: Option<Mounted<B::Renderer>>,
    generation: u64,
}

impl<B: SurfaceBinder> RenderSurfaceController<B> {
    pub fn new(config: SceneConfig, options: RendererOptions) -> Self {
        Self {
            config,
            options,
            mounted: None,
            generation: 0,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.mounted.as_ref().map(|m| &m.scene)
    }

    pub fn renderer(&self) -> Option<&B::Renderer> {
        self.mounted.as_ref().map(|m| &m.renderer)
    }

    /// Mutable access for host-side additions (e.g. overlay content).
    pub fn renderer_mut(&mut self) -> Option<&mut B::Renderer> {
        self.mounted.as_mut().map(|m| &mut m.renderer)
    }

    /// Ticket of the running loop generation.
    pub fn ticket(&self) -> Option<FrameTicket> {
        self.mounted.as_ref().map(|m| m.ticket)
    }

    /// Binds a renderer to `surface` and starts the frame loop.
    ///
    /// A live binding is torn down first. A missing surface is not an error:
    /// nothing is created and `StartOutcome::Skipped` is returned.
    pub fn start<H>(&mut self, surface: Option<B>, host: &mut H) -> Result<StartOutcome, InitError>
    where
        H: ViewportSource + FrameScheduler + ?Sized,
    {
        self.stop();

        let Some(surface) = surface else {
            return Ok(StartOutcome::Skipped);
        };

        let size = host.viewport_size();
        let mut renderer = surface.bind(&self.options, size).map_err(InitError::new)?;

        let geometry = match renderer.upload_geometry(&self.config.torus().build()) {
            Ok(id) => id,
            Err(e) => {
                renderer.dispose();
                return Err(InitError::new(e));
            }
        };

        let material = match renderer.compile_material(&self.config.material()) {
            Ok(id) => id,
            Err(e) => {
                renderer.release_geometry(geometry);
                renderer.dispose();
                return Err(InitError::new(e));
            }
        };

        let scene = Scene::new(&self.config, geometry, material, size);

        self.generation = self.generation.wrapping_add(1);
        let ticket = FrameTicket::new(self.generation);

        log::info!(
            "render surface bound: {}x{} (aspect {:.4}), loop generation {}",
            size.width,
            size.height,
            scene.camera.aspect(),
            ticket.generation()
        );

        self.mounted = Some(Mounted {
            renderer,
            scene,
            ticket,
        });

        host.request_frame(ticket);
        Ok(StartOutcome::Started(ticket))
    }

    /// Runs one iteration of the frame loop.
    ///
    /// Does nothing unless the controller is running and `ticket` belongs to
    /// the current generation. On success the next frame is scheduled with the
    /// same ticket. A fatal render error tears the controller down.
    pub fn frame<S>(&mut self, ticket: FrameTicket, scheduler: &mut S) -> Result<FrameOutcome, RenderError>
    where
        S: FrameScheduler + ?Sized,
    {
        let Some(mounted) = self.mounted.as_mut() else {
            return Ok(FrameOutcome::Inactive);
        };

        if mounted.ticket != ticket {
            log::trace!(
                "dropping frame from generation {} (current {})",
                ticket.generation(),
                mounted.ticket.generation()
            );
            return Ok(FrameOutcome::Stale);
        }

        let step = self.config.rotation_step;
        mounted.scene.mesh.rotate(step, step);

        let status = match mounted.renderer.render(&mounted.scene) {
            Ok(status) => status,
            Err(e) => {
                self.stop();
                return Err(RenderError::new(e));
            }
        };

        if status == RenderStatus::Skipped {
            log::trace!("frame skipped");
        }

        scheduler.request_frame(ticket);
        Ok(FrameOutcome::Rendered(status))
    }

    /// Follows a viewport size change. Ignored while not running.
    ///
    /// A zero-area size keeps the previous camera aspect; the renderer still
    /// records it and defers drawing until a real size arrives.
    pub fn resize(&mut self, size: SurfaceSize) {
        let Some(mounted) = self.mounted.as_mut() else {
            return;
        };

        if let Some(aspect) = size.aspect() {
            mounted.scene.camera.set_aspect(aspect);
        }
        mounted.renderer.set_size(size);

        log::debug!("render surface resized to {}x{}", size.width, size.height);
    }

    /// Tears the binding down. Safe to call at any time, any number of times.
    pub fn stop(&mut self) {
        let Some(Mounted {
            mut renderer,
            scene,
            ticket,
        }) = self.mounted.take()
        else {
            return;
        };

        renderer.release_geometry(scene.mesh.geometry);
        renderer.release_material(scene.mesh.material);
        renderer.dispose();

        log::info!("render surface released (loop generation {})", ticket.generation());
    }
}

impl<B: SurfaceBinder> Drop for RenderSurfaceController<B> {
    fn drop(&mut self) {
        self.stop();
    }
}

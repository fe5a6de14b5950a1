use std::sync::Arc;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::controller::FrameTicket;
use crate::coords::SurfaceSize;
use crate::core::{redraw_due, App as CoreApp, AppControl, HostCtx};
use crate::device::GpuInit;
use crate::render::WindowSurface;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Request a transparent window so the clear color composites over the desktop.
    pub transparent: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "shud".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            transparent: true,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs `app` in a single window until it exits or the window closes.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        // Frames are driven by `request_redraw`, so the loop can sleep between them.
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    window: Option<Arc<Window>>,
    mounted: bool,
    pending_frame: Option<FrameTicket>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            window: None,
            mounted: false,
            pending_frame: None,
        }
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> Result<Arc<Window>> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_transparent(self.config.transparent);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        Ok(Arc::new(window))
    }

    fn mount(&mut self, window: Arc<Window>) -> Result<()> {
        let surface = WindowSurface::new(window.clone(), self.gpu_init.clone());
        let mut host = HostCtx::new(&window, &mut self.pending_frame);
        self.app.mount(surface, &mut host)?;
        self.mounted = true;
        Ok(())
    }

    fn unmount(&mut self) {
        self.pending_frame = None;
        if self.mounted {
            self.mounted = false;
            self.app.unmount();
        }
    }

    /// Forwards a size change and wakes a frame loop parked while minimized.
    fn resized(&mut self, window: &Window, size: SurfaceSize) {
        if !self.mounted {
            return;
        }
        let mut host = HostCtx::new(window, &mut self.pending_frame);
        self.app.resized(size, &mut host);

        if redraw_due(size, self.pending_frame) {
            window.request_redraw();
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.unmount();
        self.window = None;
        event_loop.exit();
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.mounted {
            return;
        }

        let window = match self.window.clone() {
            Some(window) => window,
            None => match self.create_window(event_loop) {
                Ok(window) => {
                    self.window = Some(window.clone());
                    window
                }
                Err(e) => {
                    log::error!("failed to create initial window: {e:#}");
                    event_loop.exit();
                    return;
                }
            },
        };

        if let Err(e) = self.mount(window) {
            log::error!("failed to mount app: {e:#}");
            self.shutdown(event_loop);
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        // Surfaces may not outlive a suspend on mobile platforms.
        log::debug!("suspended; unmounting");
        self.unmount();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };
        if window.id() != window_id {
            return;
        }

        if self.app.on_window_event(&event) == AppControl::Exit {
            self.shutdown(event_loop);
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                self.shutdown(event_loop);
            }

            WindowEvent::Resized(new_size) => {
                self.resized(&window, new_size.into());
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                self.resized(&window, window.inner_size().into());
            }

            WindowEvent::RedrawRequested => {
                let Some(ticket) = self.pending_frame.take() else {
                    return;
                };
                if !self.mounted {
                    return;
                }

                let mut host = HostCtx::new(&window, &mut self.pending_frame);
                if self.app.frame(ticket, &mut host) == AppControl::Exit {
                    self.shutdown(event_loop);
                }
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.unmount();
        self.window = None;
    }
}

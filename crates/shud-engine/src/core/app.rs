use winit::event::WindowEvent;

use crate::controller::FrameTicket;
use crate::coords::SurfaceSize;
use crate::render::WindowSurface;

use super::ctx::HostCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the hosted page.
///
/// Call order: `mount`, then any number of `resized` / `frame`, then
/// `unmount`. A suspended app may be mounted again with a fresh surface.
pub trait App {
    /// Called when a window surface becomes available.
    ///
    /// An `Err` is fatal: the runtime logs it and exits.
    fn mount(&mut self, surface: WindowSurface, host: &mut HostCtx<'_>) -> anyhow::Result<()>;

    /// Called with the new drawable size (physical px). May be zero-area.
    fn resized(&mut self, size: SurfaceSize, host: &mut HostCtx<'_>);

    /// Runs a frame previously requested through the host.
    fn frame(&mut self, ticket: FrameTicket, host: &mut HostCtx<'_>) -> AppControl;

    /// Called when the surface goes away (close, suspend, exit).
    fn unmount(&mut self);

    /// Called for every window event before the runtime handles it.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }
}

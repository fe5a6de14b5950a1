use winit::window::Window;

use crate::controller::{FrameScheduler, FrameTicket, ViewportSource};
use crate::coords::SurfaceSize;

/// Host environment handed to app callbacks.
///
/// Frame requests are buffered: the runtime keeps the latest ticket and
/// delivers it on the next `RedrawRequested`.
pub struct HostCtx<'a> {
    window: &'a Window,
    pending_frame: &'a mut Option<FrameTicket>,
}

impl<'a> HostCtx<'a> {
    pub(crate) fn new(window: &'a Window, pending_frame: &'a mut Option<FrameTicket>) -> Self {
        Self {
            window,
            pending_frame,
        }
    }

    pub fn scale_factor(&self) -> f32 {
        self.window.scale_factor() as f32
    }

    pub fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }
}

impl FrameScheduler for HostCtx<'_> {
    fn request_frame(&mut self, ticket: FrameTicket) {
        *self.pending_frame = Some(ticket);
        if redraw_due(self.viewport_size(), *self.pending_frame) {
            self.window.request_redraw();
        }
    }
}

impl ViewportSource for HostCtx<'_> {
    fn viewport_size(&self) -> SurfaceSize {
        self.window.inner_size().into()
    }
}

/// Whether a pending frame should be turned into a redraw request.
///
/// A minimized window reports a zero-area size. Its ticket stays pending
/// and the next non-empty `Resized` asks for the redraw.
pub(crate) fn redraw_due(size: SurfaceSize, pending: Option<FrameTicket>) -> bool {
    pending.is_some() && !size.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimized_window_holds_the_ticket() {
        let ticket = Some(FrameTicket::new(1));
        assert!(!redraw_due(SurfaceSize::new(0, 0), ticket));
        assert!(!redraw_due(SurfaceSize::new(800, 0), ticket));
        assert!(redraw_due(SurfaceSize::new(800, 600), ticket));
    }

    #[test]
    fn restore_without_pending_frame_stays_idle() {
        assert!(!redraw_due(SurfaceSize::new(800, 600), None));
    }
}

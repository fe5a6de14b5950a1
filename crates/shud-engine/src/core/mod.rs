//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop)
//! and the hosted page. The page never sees winit's event loop; it gets a
//! surface on mount, sizes on resize, and tickets for the frames it asked for.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::HostCtx;
pub(crate) use ctx::redraw_due;

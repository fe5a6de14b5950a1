//! Lifecycle of the hero's 3D rendering context.
//!
//! [`RenderSurfaceController`] binds a renderer to a surface, builds the
//! scene, drives the frame loop, follows viewport resizes and releases every
//! GPU resource on teardown. The host environment (window runtime, tests)
//! plugs in through the traits in [`backend`].

pub mod backend;
mod error;
mod surface_controller;

pub use backend::{
    FrameScheduler, FrameTicket, RenderStatus, RendererOptions, SceneRenderer, SurfaceBinder,
    ViewportSource,
};
pub use error::{InitError, RenderError};
pub use surface_controller::{FrameOutcome, RenderSurfaceController, StartOutcome};

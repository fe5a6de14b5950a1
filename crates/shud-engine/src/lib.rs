//! SHUD engine crate.
//!
//! This crate owns the platform + GPU runtime behind the landing page hero:
//! the [`controller::RenderSurfaceController`], the wgpu renderer it drives,
//! and the winit host that schedules its frames.

pub mod controller;
pub mod coords;
pub mod core;
pub mod device;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod time;
pub mod window;

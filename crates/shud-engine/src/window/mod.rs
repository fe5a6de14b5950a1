//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single page window, and hosts a
//! [`crate::core::App`] on it.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};

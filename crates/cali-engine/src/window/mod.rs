//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the overlay window, and binds a GPU surface
//! to it.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};

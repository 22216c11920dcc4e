//! Cali engine crate.
//!
//! Overlay drawing toolkit: vector math, colors and gradients, numeric
//! series, and an immediate-mode draw manager over `wgpu`, plus a small
//! `winit` runtime for hosting overlay windows.

pub mod coords;
pub mod paint;
pub mod series;

pub mod scene;
pub mod render;
pub mod device;
pub mod draw;

pub mod core;
pub mod window;

pub mod logging;

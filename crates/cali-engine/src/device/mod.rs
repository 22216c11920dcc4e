//! GPU device management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring a window Surface (swapchain)
//! - owning an offscreen color target for windowless drawing

mod adapter;
mod gpu;
mod headless;
mod init;

pub use gpu::{Gpu, GpuFrame, SurfaceErrorAction};
pub use headless::HeadlessGpu;
pub use init::{GpuInit, HeadlessInit};

pub use wgpu::{CompositeAlphaMode, PowerPreference, PresentMode, TextureFormat};

//! Immediate-mode drawing front end.
//!
//! [`DrawManager`] validates geometry and applies a [`DrawStyle`]; a
//! [`DrawBackend`] turns the calls into device work. Two backends ship:
//! - [`WgpuBackend`]: renders into an offscreen `wgpu` target
//! - [`RecordingBackend`]: keeps a [`DrawList`](crate::scene::DrawList)
//!   for the caller (e.g. to render into a window frame)

mod backend;
mod backends;
mod error;
mod manager;
mod style;

pub use backend::{BackendKind, DrawBackend};
pub use backends::{RecordingBackend, WgpuBackend};
pub use error::DrawError;
pub use manager::DrawManager;
pub use style::DrawStyle;

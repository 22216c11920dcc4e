//! Contracts between the window runtime and applications.
//!
//! The runtime drives the loop; applications implement [`App`] and draw
//! through the per-frame [`FrameCtx`].

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};

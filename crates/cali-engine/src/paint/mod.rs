//! Color model.
//!
//! Scope:
//! - color samples with several interchangeable encodings (`ColorKey`)
//! - named gradients built from keys and ratios (`Color`)
//! - the linear premultiplied format consumed by renderers (`LinearRgba`)

mod color;
mod error;
mod key;
mod linear;

pub use color::{Color, Ratio, SpreadMode};
pub use error::ColorKeyError;
pub use key::{ColorKey, Rgb, Rgba};
pub use linear::LinearRgba;

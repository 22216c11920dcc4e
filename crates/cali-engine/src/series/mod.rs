//! Eager numeric series.
//!
//! Each generator computes its whole output once, at construction, from a
//! small parameter set. There is no incremental or streaming mode.

mod gaussian;
mod linear;

pub use gaussian::Gaussian;
pub use linear::LinearGenerator;

use thiserror::Error;

/// Misuse of a [`DrawManager`](super::DrawManager).
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum DrawError {
    #[error("draw manager is not initialized")]
    NotInitialized,

    #[error("draw geometry has non-finite coordinates")]
    NonFiniteGeometry,

    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
}

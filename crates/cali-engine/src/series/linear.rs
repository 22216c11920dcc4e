use crate::coords::Scalar;

/// Linear ramp: element `i` equals `i * step`.
///
/// The output has `max - min` elements (truncated to an integer, at least
/// zero, at most [`MAX_LEN`](Self::MAX_LEN)). Only indices in
/// `[min, max - min)` are written; indices below `min` stay zero. Integer
/// products saturate at the type bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGenerator<T> {
    calculated: Vec<T>,
    min: T,
    max: T,
    step: T,
}

impl<T: Scalar> LinearGenerator<T> {
    /// Longest ramp produced; wider ranges are truncated to this length.
    pub const MAX_LEN: usize = 1 << 20;

    pub fn new(min: T, max: T, step: T) -> Self {
        let span = max.span_to_i64(min);
        let len = span.clamp(0, Self::MAX_LEN as i64);
        if span > len {
            log::warn!("LinearGenerator: range of {span} elements truncated to {len}");
        }
        let start = min.to_i64().clamp(0, len);

        let mut calculated = vec![T::zero(); len as usize];
        for i in start..len {
            calculated[i as usize] = T::from_i64(i).saturating_mul(step);
        }

        Self {
            calculated,
            min,
            max,
            step,
        }
    }

    #[inline]
    pub fn calculated(&self) -> &[T] {
        &self.calculated
    }

    #[inline]
    pub fn into_calculated(self) -> Vec<T> {
        self.calculated
    }

    #[inline]
    pub fn min(&self) -> T {
        self.min
    }

    #[inline]
    pub fn max(&self) -> T {
        self.max
    }

    #[inline]
    pub fn step(&self) -> T {
        self.step
    }
}

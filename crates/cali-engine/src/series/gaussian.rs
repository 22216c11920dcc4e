use crate::coords::Float;

/// Normal probability density evaluated over a data set.
///
/// `calculated()[i]` is `exp(-(x - mean)^2 / (2 std^2)) / (sqrt(2 pi) std)`
/// for `x = data()[i]`. A non-positive `std` is not rejected and yields
/// non-finite values; check [`is_well_formed`](Self::is_well_formed).
#[derive(Debug, Clone, PartialEq)]
pub struct Gaussian<T> {
    calculated: Vec<T>,
    data: Vec<T>,
    mean: T,
    std: T,
}

impl<T: Float> Gaussian<T> {
    pub fn new(mean: T, std: T, data: Vec<T>) -> Self {
        let two = T::one() + T::one();
        let variance2 = two * std * std;
        let norm = (two * T::pi()).sqrt() * std;

        let calculated = data
            .iter()
            .map(|&x| {
                let d = x - mean;
                (-(d * d) / variance2).exp() / norm
            })
            .collect();

        Self {
            calculated,
            data,
            mean,
            std,
        }
    }

    #[inline]
    pub fn calculated(&self) -> &[T] {
        &self.calculated
    }

    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn mean(&self) -> T {
        self.mean
    }

    #[inline]
    pub fn std(&self) -> T {
        self.std
    }

    /// True when `mean` is finite and `std` is finite and positive, so every
    /// output for finite data is finite.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.std.is_finite() && self.std > T::zero() && self.mean.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn standard_normal_values() {
        let g = Gaussian::new(0.0f64, 1.0, vec![0.0, 1.0, -1.0, 2.0]);
        let c = g.calculated();
        assert!((c[0] - 0.398_942_280_401_432_7).abs() < EPS);
        assert!((c[1] - 0.241_970_724_519_143_37).abs() < EPS);
        assert!((c[2] - c[1]).abs() < EPS);
        assert!((c[3] - 0.053_990_966_513_188_06).abs() < EPS);
    }

    #[test]
    fn shifted_and_scaled() {
        let g = Gaussian::new(10.0f64, 2.0, vec![10.0, 12.0]);
        // Peak halves when std doubles.
        assert!((g.calculated()[0] - 0.398_942_280_401_432_7 / 2.0).abs() < EPS);
        assert!((g.calculated()[1] - 0.241_970_724_519_143_37 / 2.0).abs() < EPS);
        assert_eq!(g.mean(), 10.0);
        assert_eq!(g.std(), 2.0);
        assert_eq!(g.data(), &[10.0, 12.0]);
    }

    #[test]
    fn empty_data_keeps_parameters() {
        let g = Gaussian::new(1.0f32, 0.5, Vec::new());
        assert!(g.calculated().is_empty());
        assert_eq!(g.mean(), 1.0);
        assert_eq!(g.std(), 0.5);
        assert!(g.is_well_formed());
    }

    #[test]
    fn zero_std_is_flagged() {
        let g = Gaussian::new(0.0f64, 0.0, vec![1.0]);
        assert!(!g.is_well_formed());
        assert!(g.calculated()[0].is_nan());
    }

    #[test]
    fn non_finite_mean_is_flagged() {
        let g = Gaussian::new(f64::NAN, 1.0, vec![0.0]);
        assert!(!g.is_well_formed());
        assert!(g.calculated()[0].is_nan());

        assert!(!Gaussian::new(f32::INFINITY, 1.0, vec![]).is_well_formed());
    }
}

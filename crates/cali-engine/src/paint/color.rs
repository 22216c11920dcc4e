use super::ColorKey;

/// Gradient position of a key, conceptually in `[0, 1]`.
pub type Ratio = f64;

/// Behavior of [`Color::sample`] for positions outside `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    #[default]
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
    /// Mirror-repeat the gradient pattern.
    Reflect,
}

impl SpreadMode {
    /// Maps any finite position into `[0, 1]`.
    fn resolve(self, t: Ratio) -> Ratio {
        if (0.0..=1.0).contains(&t) {
            return t;
        }
        match self {
            SpreadMode::Pad => t.clamp(0.0, 1.0),
            SpreadMode::Repeat => t.rem_euclid(1.0),
            SpreadMode::Reflect => {
                let m = t.rem_euclid(2.0);
                if m > 1.0 { 2.0 - m } else { m }
            }
        }
    }
}

/// Named gradient: color keys paired with ratios.
///
/// `keys` and `ratios` are parallel sequences. Construction does not check
/// them; [`is_consistent`](Self::is_consistent) does, and
/// [`sample`](Self::sample) refuses inconsistent gradients.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Color {
    name: String,
    keys: Vec<ColorKey>,
    ratios: Vec<Ratio>,
}

impl Color {
    pub fn new(name: impl Into<String>, keys: Vec<ColorKey>, ratios: Vec<Ratio>) -> Self {
        Self {
            name: name.into(),
            keys,
            ratios,
        }
    }

    /// Single-key color at ratio 0.
    pub fn solid(name: impl Into<String>, key: ColorKey) -> Self {
        Self::new(name, vec![key], vec![0.0])
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn keys(&self) -> &[ColorKey] {
        &self.keys
    }

    #[inline]
    pub fn ratios(&self) -> &[Ratio] {
        &self.ratios
    }

    /// First key, used wherever a gradient has to act as a flat color.
    #[inline]
    pub fn primary(&self) -> Option<ColorKey> {
        self.keys.first().copied()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_keys(&mut self, keys: Vec<ColorKey>) {
        self.keys = keys;
    }

    pub fn set_ratios(&mut self, ratios: Vec<Ratio>) {
        self.ratios = ratios;
    }

    /// Appends one key with its ratio, keeping both sequences parallel.
    pub fn push_stop(&mut self, key: ColorKey, ratio: Ratio) {
        self.keys.push(key);
        self.ratios.push(ratio);
    }

    /// True when there is at least one stop, every key has a ratio, and
    /// ratios are finite, within `[0, 1]` and non-decreasing.
    pub fn is_consistent(&self) -> bool {
        !self.keys.is_empty()
            && self.keys.len() == self.ratios.len()
            && self.ratios.iter().all(|r| r.is_finite() && (0.0..=1.0).contains(r))
            && self.ratios.windows(2).all(|w| w[0] <= w[1])
    }

    /// Interpolated key at gradient position `t`.
    ///
    /// Positions outside `[0, 1]` go through `spread`; positions before the
    /// first or after the last ratio return that edge key. Returns `None`
    /// for an inconsistent gradient or a non-finite `t`.
    pub fn sample(&self, t: Ratio, spread: SpreadMode) -> Option<ColorKey> {
        if !self.is_consistent() || !t.is_finite() {
            return None;
        }
        let t = spread.resolve(t);

        let first = self.ratios[0];
        let last = self.ratios[self.ratios.len() - 1];
        if t <= first {
            return Some(self.keys[0]);
        }
        if t >= last {
            return Some(self.keys[self.keys.len() - 1]);
        }

        // first < t < last, so some window brackets t.
        let i = self.ratios.windows(2).position(|w| w[0] <= t && t < w[1])?;
        let (r0, r1) = (self.ratios[i], self.ratios[i + 1]);
        let f = (t - r0) / (r1 - r0);
        Some(self.keys[i].lerp(self.keys[i + 1], f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> ColorKey { ColorKey::from_rgb([255, 0, 0]) }
    fn blue() -> ColorKey { ColorKey::from_rgb([0, 0, 255]) }

    fn red_to_blue() -> Color {
        Color::new("red-blue", vec![red(), blue()], vec![0.0, 1.0])
    }

    #[test]
    fn equality_requires_every_field() {
        let a = red_to_blue();
        assert_eq!(a, red_to_blue());

        let mut renamed = red_to_blue();
        renamed.set_name("other");
        assert_ne!(a, renamed);

        let mut rekeyed = red_to_blue();
        rekeyed.set_keys(vec![red(), red()]);
        assert_ne!(a, rekeyed);

        let mut reweighted = red_to_blue();
        reweighted.set_ratios(vec![0.0, 0.5]);
        assert_ne!(a, reweighted);
    }

    #[test]
    fn accessors_return_constructor_values() {
        let c = red_to_blue();
        assert_eq!(c.name(), "red-blue");
        assert_eq!(c.keys(), &[red(), blue()]);
        assert_eq!(c.ratios(), &[0.0, 1.0]);
        assert_eq!(c.primary(), Some(red()));
        assert_eq!(Color::default().primary(), None);
    }

    #[test]
    fn consistency_checks() {
        assert!(red_to_blue().is_consistent());
        assert!(Color::solid("red", red()).is_consistent());
        assert!(!Color::default().is_consistent());
        assert!(!Color::new("len", vec![red(), blue()], vec![0.0]).is_consistent());
        assert!(!Color::new("range", vec![red(), blue()], vec![0.0, 1.5]).is_consistent());
        assert!(!Color::new("order", vec![red(), blue()], vec![0.8, 0.2]).is_consistent());
        assert!(!Color::new("nan", vec![red()], vec![f64::NAN]).is_consistent());
    }

    #[test]
    fn push_stop_keeps_sequences_parallel() {
        let mut c = Color::default();
        c.push_stop(red(), 0.0);
        c.push_stop(blue(), 1.0);
        assert_eq!(c.keys().len(), c.ratios().len());
        assert!(c.is_consistent());
    }

    #[test]
    fn sample_interpolates_between_stops() {
        let c = red_to_blue();
        assert_eq!(c.sample(0.0, SpreadMode::Pad), Some(red()));
        assert_eq!(c.sample(1.0, SpreadMode::Pad), Some(blue()));
        assert_eq!(c.sample(0.5, SpreadMode::Pad).map(|k| k.rgba()), Some([128, 0, 128, 255]));
    }

    #[test]
    fn sample_uses_the_bracketing_pair() {
        let green = ColorKey::from_rgb([0, 255, 0]);
        let c = Color::new("rgb", vec![red(), green, blue()], vec![0.0, 0.5, 1.0]);
        assert_eq!(c.sample(0.5, SpreadMode::Pad), Some(green));
        assert_eq!(c.sample(0.75, SpreadMode::Pad).map(|k| k.rgba()), Some([0, 128, 128, 255]));
    }

    #[test]
    fn sample_outside_first_and_last_ratio_returns_edges() {
        let c = Color::new("inner", vec![red(), blue()], vec![0.25, 0.75]);
        assert_eq!(c.sample(0.1, SpreadMode::Pad), Some(red()));
        assert_eq!(c.sample(0.9, SpreadMode::Pad), Some(blue()));
    }

    #[test]
    fn sample_spread_modes() {
        let c = red_to_blue();
        assert_eq!(c.sample(-3.0, SpreadMode::Pad), Some(red()));
        assert_eq!(c.sample(4.0, SpreadMode::Pad), Some(blue()));
        // 1.25 repeats to 0.25, reflects to 0.75.
        assert_eq!(c.sample(1.25, SpreadMode::Repeat), c.sample(0.25, SpreadMode::Pad));
        assert_eq!(c.sample(1.25, SpreadMode::Reflect), c.sample(0.75, SpreadMode::Pad));
        assert_eq!(c.sample(-0.25, SpreadMode::Reflect), c.sample(0.25, SpreadMode::Pad));
    }

    #[test]
    fn sample_rejects_inconsistent_or_nan() {
        assert_eq!(Color::default().sample(0.5, SpreadMode::Pad), None);
        assert_eq!(red_to_blue().sample(f64::NAN, SpreadMode::Pad), None);
    }
}

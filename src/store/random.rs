//! Randomness sources for data generation
//!
//! The generator only ever asks for a uniform value in `[0, 1)`, so the
//! source is a one-method trait. `StdRandom` is used by the binaries and the
//! UI; `ScriptedRandom` replays fixed values so tests can pin exact output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform values in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// `floor(r * span) + low`
    fn next_int(&mut self, low: u32, span: u32) -> u32 {
        (self.next_unit() * span as f64).floor() as u32 + low
    }

    /// `r * span + low`, rounded to `decimals` places
    fn next_rounded(&mut self, low: f64, span: f64, decimals: i32) -> f64 {
        round_to(self.next_unit() * span + low, decimals)
    }
}

/// Round half away from zero to a fixed number of decimals
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// `rand`-backed source
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Seeded from the operating system (or `crypto.getRandomValues` in the browser)
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when a seed is configured, entropy otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for StdRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of values, wrapping around at the end
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Values are clamped into `[0, 1)`; an empty script always yields `0.0`
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values
            .into()
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { values, cursor: 0 }
    }

    /// Same value on every draw
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_random_in_unit_interval() {
        let mut rng = StdRandom::seeded(7);
        for _ in 0..1000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = StdRandom::seeded(42);
        let mut b = StdRandom::seeded(42);
        let xs: Vec<f64> = (0..8).map(|_| a.next_unit()).collect();
        let ys: Vec<f64> = (0..8).map(|_| b.next_unit()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_scripted_wraps() {
        let mut rng = ScriptedRandom::new(vec![0.1, 0.2]);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.next_unit(), 0.2);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_scripted_clamps_upper_bound() {
        let mut rng = ScriptedRandom::constant(1.0);
        assert!(rng.next_unit() < 1.0);
        assert_eq!(rng.next_int(500, 2000), 2499);
    }

    #[test]
    fn test_next_int_and_rounded() {
        let mut rng = ScriptedRandom::constant(0.5);
        assert_eq!(rng.next_int(50_000, 100_000), 100_000);
        assert_eq!(rng.next_rounded(-5.0, 20.0, 1), 5.0);
        assert_eq!(round_to(3.14159, 2), 3.14);
    }
}

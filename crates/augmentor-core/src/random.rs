//! Random sources for the stochastic stages.
//!
//! The cropper and the noise injector never reach for a global generator.
//! They draw from a [`RandomSource`] handed in by the caller, so a batch
//! runner can give every call its own generator and tests can pin the
//! exact values a stage sees.
//!
//! Every [`rand::Rng`] is a `RandomSource`, which covers `rand::rng()`,
//! `StdRng` and seeded `ChaCha8Rng` instances.

use rand::Rng;
use rand_distr::StandardNormal;

/// Source of the two kinds of draws the engine needs.
pub trait RandomSource {
    /// Uniform integer in `low..=high`. Callers guarantee `low <= high`.
    fn uniform_inclusive(&mut self, low: u32, high: u32) -> u32;

    /// Sample from the standard normal distribution N(0, 1).
    fn standard_normal(&mut self) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn uniform_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.random_range(low..=high)
    }

    #[inline]
    fn standard_normal(&mut self) -> f64 {
        self.sample(StandardNormal)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RandomSource;
    use std::collections::VecDeque;

    /// Replays scripted draws in order.
    ///
    /// Uniform draws are clamped into the requested range so a script
    /// can say "max" with `u32::MAX`.
    #[derive(Debug, Default)]
    pub struct ScriptedSource {
        uniforms: VecDeque<u32>,
        normals: VecDeque<f64>,
    }

    impl ScriptedSource {
        pub fn new(uniforms: &[u32], normals: &[f64]) -> Self {
            Self {
                uniforms: uniforms.iter().copied().collect(),
                normals: normals.iter().copied().collect(),
            }
        }

        pub fn uniforms(values: &[u32]) -> Self {
            Self::new(values, &[])
        }

        pub fn normals(values: &[f64]) -> Self {
            Self::new(&[], values)
        }
    }

    impl RandomSource for ScriptedSource {
        fn uniform_inclusive(&mut self, low: u32, high: u32) -> u32 {
            let v = self.uniforms.pop_front().expect("script ran out of uniform draws");
            v.clamp(low, high)
        }

        fn standard_normal(&mut self) -> f64 {
            // Cycle so a short script can cover a whole image
            let v = self.normals.pop_front().expect("script ran out of normal draws");
            self.normals.push_back(v);
            v
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_uniform_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = rng.uniform_inclusive(5, 9);
            assert!((5..=9).contains(&v));
        }
    }

    #[test]
    fn test_uniform_degenerate_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(rng.uniform_inclusive(3, 3), 3);
    }

    #[test]
    fn test_uniform_hits_both_ends() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let draws: Vec<u32> = (0..500).map(|_| rng.uniform_inclusive(0, 1)).collect();
        assert!(draws.contains(&0));
        assert!(draws.contains(&1));
    }

    #[test]
    fn test_standard_normal_moments() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let n = 20_000;
        let samples: Vec<f64> = (0..n).map(|_| rng.standard_normal()).collect();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.05, "mean was {}", mean);
        assert!((var - 1.0).abs() < 0.05, "variance was {}", var);
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..50 {
            assert_eq!(a.uniform_inclusive(0, 1000), b.uniform_inclusive(0, 1000));
            assert_eq!(a.standard_normal(), b.standard_normal());
        }
    }

    #[test]
    fn test_dyn_rng_is_a_source() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let dyn_rng: &mut dyn rand::RngCore = &mut rng;
        let v = dyn_rng.uniform_inclusive(10, 20);
        assert!((10..=20).contains(&v));
    }
}

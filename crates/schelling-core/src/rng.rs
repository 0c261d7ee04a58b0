//! Seeded pseudo-random source.
//!
//! [`SimRng`] wraps a ChaCha8 stream seeded via `seed_from_u64`, so every
//! draw sequence is bit-reproducible for a fixed seed. Draw order is part
//! of the simulation's observable behaviour: callers must consume the
//! stream in a fixed, deterministic order.
//!
//! Only [`uniform_int`](SimRng::uniform_int) and the without-replacement
//! samplers are on the grid engine's path. The remaining distributions are
//! general-purpose utilities.

use crate::error::SampleError;
use rand::distr::uniform::SampleUniform;
use rand::distr::Open01 as OpenOpen01;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic, seedable random stream.
#[derive(Clone, Debug)]
pub struct SimRng {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SimRng {
    /// Create a stream from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Re-initialise the stream. Subsequent draws repeat exactly what a
    /// fresh `SimRng::new(seed)` would produce.
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// The seed the stream was last initialised with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    // ── Uniform ─────────────────────────────────────────────────

    /// Uniform integer in `[min, max]`, inclusive on both ends.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn uniform_int<T>(&mut self, min: T, max: T) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        self.rng.random_range(min..=max)
    }

    /// Uniform real in `[min, max)`. Returns `min` when the interval is
    /// empty or degenerate.
    pub fn uniform_real(&mut self, min: f64, max: f64) -> f64 {
        if min < max {
            self.rng.random_range(min..max)
        } else {
            min
        }
    }

    // ── Derived distributions ───────────────────────────────────

    /// Normal draw with mean `mu` and standard deviation `sigma`.
    ///
    /// Box-Muller transform over two uniform draws; avoids the
    /// `rand_distr` dependency. Keeps no spare value between calls, so
    /// reseeding fully resets the distribution state.
    pub fn normal(&mut self, mu: f64, sigma: f64) -> f64 {
        let u1: f64 = self.rng.random::<f64>().max(1e-300); // avoid ln(0)
        let u2: f64 = self.rng.random();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mu + sigma * z
    }

    /// Normal draw on integer parameters, truncated toward zero.
    pub fn normal_int(&mut self, mu: i64, sigma: i64) -> i64 {
        self.normal(mu as f64, sigma as f64) as i64
    }

    /// Laplace draw with location `mu` and scale `scale`, by inverse CDF
    /// from `u ~ U(-0.5, 0.5)`: `mu - scale * sign(u) * ln(1 - 2|u|)`.
    ///
    /// Always finite for finite `mu` and `scale`.
    pub fn laplace(&mut self, mu: f64, scale: f64) -> f64 {
        let u = self.open_centred_unit();
        let sign = if u > 0.0 {
            1.0
        } else if u < 0.0 {
            -1.0
        } else {
            0.0
        };
        mu - scale * sign * (1.0 - 2.0 * u.abs()).ln()
    }

    /// Uniform draw from the open interval `(-0.5, 0.5)`.
    fn open_centred_unit(&mut self) -> f64 {
        let x: f64 = self.rng.sample(OpenOpen01);
        x - 0.5
    }

    /// Log-normal draw: `exp(N(log_mean, log_sd))`.
    pub fn log_normal(&mut self, log_mean: f64, log_sd: f64) -> f64 {
        self.normal(log_mean, log_sd).exp()
    }

    // ── Sampling ────────────────────────────────────────────────

    /// Draw `n` elements of `values`.
    ///
    /// With replacement every draw is uniform over the whole slice.
    /// Without replacement each draw picks a uniform index into the
    /// remaining pool and removes that element, so the result holds `n`
    /// distinct positions in draw order.
    ///
    /// # Errors
    ///
    /// [`SampleError::TooManySamples`] if `replace` is false and
    /// `n > values.len()`, or if `replace` is true, `n > 0`, and `values`
    /// is empty.
    pub fn sample<T: Clone>(
        &mut self,
        values: &[T],
        n: usize,
        replace: bool,
    ) -> Result<Vec<T>, SampleError> {
        let too_many = if replace {
            n > 0 && values.is_empty()
        } else {
            n > values.len()
        };
        if too_many {
            return Err(SampleError::TooManySamples {
                requested: n,
                population: values.len(),
            });
        }

        let mut out = Vec::with_capacity(n);
        if replace {
            for _ in 0..n {
                let idx = self.uniform_int(0u64, (values.len() - 1) as u64) as usize;
                out.push(values[idx].clone());
            }
        } else {
            let mut pool = values.to_vec();
            for _ in 0..n {
                let idx = self.uniform_int(0u64, (pool.len() - 1) as u64) as usize;
                out.push(pool.remove(idx));
            }
        }
        Ok(out)
    }

    /// `n` distinct integers drawn uniformly from `[0, k)`.
    ///
    /// # Errors
    ///
    /// [`SampleError::TooManySamples`] if `n > k`.
    pub fn sample_without_replacement(
        &mut self,
        k: usize,
        n: usize,
    ) -> Result<Vec<usize>, SampleError> {
        if n > k {
            return Err(SampleError::TooManySamples {
                requested: n,
                population: k,
            });
        }
        let population: Vec<usize> = (0..k).collect();
        self.sample(&population, n, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    // ── Determinism ─────────────────────────────────────────────

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(42);
        let mut b = SimRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.uniform_int(0u64, 1000), b.uniform_int(0u64, 1000));
        }
        assert_eq!(a.normal(0.0, 1.0).to_bits(), b.normal(0.0, 1.0).to_bits());
    }

    #[test]
    fn set_seed_restarts_stream() {
        let mut rng = SimRng::new(7);
        let first: Vec<u32> = (0..10).map(|_| rng.uniform_int(1u32, 6)).collect();
        let _ = rng.normal(3.0, 2.0);
        rng.set_seed(7);
        let again: Vec<u32> = (0..10).map(|_| rng.uniform_int(1u32, 6)).collect();
        assert_eq!(first, again);
        assert_eq!(rng.seed(), 7);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimRng::new(1);
        let mut b = SimRng::new(2);
        let xs: Vec<u64> = (0..20).map(|_| a.uniform_int(0u64, u64::MAX)).collect();
        let ys: Vec<u64> = (0..20).map(|_| b.uniform_int(0u64, u64::MAX)).collect();
        assert_ne!(xs, ys);
    }

    // ── Uniform ─────────────────────────────────────────────────

    #[test]
    fn uniform_int_single_value_range() {
        let mut rng = SimRng::new(0);
        for _ in 0..10 {
            assert_eq!(rng.uniform_int(5u32, 5), 5);
        }
    }

    #[test]
    fn uniform_int_hits_both_ends() {
        let mut rng = SimRng::new(3);
        let seen: HashSet<u32> = (0..500).map(|_| rng.uniform_int(1u32, 3)).collect();
        assert_eq!(seen, HashSet::from([1, 2, 3]));
    }

    #[test]
    fn uniform_real_degenerate_interval() {
        let mut rng = SimRng::new(0);
        assert_eq!(rng.uniform_real(2.5, 2.5), 2.5);
    }

    // ── Derived distributions ───────────────────────────────────

    #[test]
    fn normal_sample_mean_close_to_mu() {
        let mut rng = SimRng::new(11);
        let n = 20_000;
        let mean: f64 = (0..n).map(|_| rng.normal(5.0, 1.0)).sum::<f64>() / n as f64;
        assert!((mean - 5.0).abs() < 0.05, "mean = {mean}");
    }

    #[test]
    fn laplace_median_close_to_mu() {
        let mut rng = SimRng::new(12);
        let mut xs: Vec<f64> = (0..10_001).map(|_| rng.laplace(-2.0, 1.5)).collect();
        xs.sort_by(|a, b| a.total_cmp(b));
        let median = xs[xs.len() / 2];
        assert!((median + 2.0).abs() < 0.1, "median = {median}");
    }

    #[test]
    fn laplace_is_always_finite() {
        let mut rng = SimRng::new(14);
        assert!((0..100_000).all(|_| rng.laplace(0.0, 1.0).is_finite()));
    }

    #[test]
    fn log_normal_is_positive() {
        let mut rng = SimRng::new(13);
        assert!((0..1000).all(|_| rng.log_normal(0.0, 1.0) > 0.0));
    }

    #[test]
    fn normal_int_with_zero_sigma_is_mu() {
        let mut rng = SimRng::new(14);
        assert_eq!(rng.normal_int(9, 0), 9);
    }

    // ── Sampling ────────────────────────────────────────────────

    #[test]
    fn sample_too_many_is_an_error() {
        let mut rng = SimRng::new(0);
        assert_eq!(
            rng.sample_without_replacement(3, 4),
            Err(SampleError::TooManySamples {
                requested: 4,
                population: 3
            })
        );
    }

    #[test]
    fn sample_with_replacement_from_empty_is_an_error() {
        let mut rng = SimRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.sample(&empty, 1, true).is_err());
        assert_eq!(rng.sample(&empty, 0, true), Ok(vec![]));
    }

    #[test]
    fn sample_whole_population_is_a_permutation() {
        let mut rng = SimRng::new(5);
        let mut s = rng.sample_without_replacement(10, 10).unwrap();
        s.sort_unstable();
        assert_eq!(s, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn sample_with_replacement_stays_in_values() {
        let mut rng = SimRng::new(6);
        let values = ['a', 'b'];
        let s = rng.sample(&values, 50, true).unwrap();
        assert_eq!(s.len(), 50);
        assert!(s.iter().all(|c| values.contains(c)));
    }

    proptest! {
        #[test]
        fn open_centred_unit_excludes_endpoints(seed in any::<u64>()) {
            let mut rng = SimRng::new(seed);
            for _ in 0..256 {
                let u = rng.open_centred_unit();
                prop_assert!(u > -0.5 && u < 0.5, "u = {}", u);
            }
        }

        #[test]
        fn sample_without_replacement_is_distinct_and_in_range(
            seed in any::<u64>(),
            k in 0usize..64,
            frac in 0.0f64..=1.0,
        ) {
            let n = ((k as f64) * frac) as usize;
            let mut rng = SimRng::new(seed);
            let s = rng.sample_without_replacement(k, n).unwrap();
            prop_assert_eq!(s.len(), n);
            prop_assert!(s.iter().all(|&i| i < k));
            let distinct: HashSet<usize> = s.iter().copied().collect();
            prop_assert_eq!(distinct.len(), n);
        }
    }
}

#![deny(unsafe_code)]
//! Stateless statistical noise.
//!
//! These generators ignore their seed, coordinates and time: every call is a
//! fresh draw, so two calls with identical arguments differ. They are for
//! unstructured jitter, not coherent fields.
//!
//! Randomness comes from a [`UniformSource`]. The default, [`ThreadRandom`],
//! uses the thread-local generator from `rand`; tests substitute a fixed
//! sequence.

use std::f64::consts::TAU;

use finding_beauty_core::NoiseGenerator;
use rand::Rng;

/// Standard deviation of [`NormalDistributionNoise`] before clamping.
pub const NORMAL_STD_DEV: f64 = 0.3;
/// Mean of [`NormalDistributionNoise`].
pub const NORMAL_MEAN: f64 = 0.0;

/// A source of uniform draws over the closed interval `[0, 1]`.
///
/// Takes `&self` so generators can be sampled through a shared reference;
/// implementations that keep state must handle their own synchronization.
pub trait UniformSource: Send + Sync {
    /// Returns the next draw, in `[0, 1]` inclusive of both ends.
    fn next_unit(&self) -> f64;
}

/// Draws from `rand::thread_rng()`. Each calling thread gets its own
/// generator, so no locking is involved.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl UniformSource for ThreadRandom {
    fn next_unit(&self) -> f64 {
        rand::thread_rng().gen_range(0.0..=1.0)
    }
}

/// Maps a unit draw to `[-1, 1]`.
#[inline]
fn to_signed(unit: f64) -> f64 {
    unit * 2.0 - 1.0
}

/// Flat distribution over `[-1, 1]`.
#[derive(Debug, Clone, Default)]
pub struct UniformNoise<S = ThreadRandom> {
    source: S,
}

impl UniformNoise {
    /// Draws from the calling thread's [`ThreadRandom`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: UniformSource> UniformNoise<S> {
    /// Draws from `source` instead of the thread generator.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }
}

impl<S: UniformSource> NoiseGenerator for UniformNoise<S> {
    fn sample(&self, _x: f64, _y: f64, _time: f64) -> f64 {
        to_signed(self.source.next_unit())
    }
}

/// Smaller of two uniform draws, rescaled to `[-1, 1]`. Skews toward -1.
#[derive(Debug, Clone, Default)]
pub struct NonUniformNoise<S = ThreadRandom> {
    source: S,
}

impl NonUniformNoise {
    /// Draws from the calling thread's [`ThreadRandom`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: UniformSource> NonUniformNoise<S> {
    /// Draws from `source` instead of the thread generator.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }
}

impl<S: UniformSource> NoiseGenerator for NonUniformNoise<S> {
    fn sample(&self, _x: f64, _y: f64, _time: f64) -> f64 {
        let v1 = self.source.next_unit();
        let v2 = self.source.next_unit();
        to_signed(if v2 < v1 { v2 } else { v1 })
    }
}

/// Normal distribution via the Box-Muller transform, with standard deviation
/// [`NORMAL_STD_DEV`] and mean [`NORMAL_MEAN`], clamped to `[-1, 1]`.
#[derive(Debug, Clone, Default)]
pub struct NormalDistributionNoise<S = ThreadRandom> {
    source: S,
}

impl NormalDistributionNoise {
    /// Draws from the calling thread's [`ThreadRandom`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: UniformSource> NormalDistributionNoise<S> {
    /// Draws from `source` instead of the thread generator.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }
}

impl<S: UniformSource> NoiseGenerator for NormalDistributionNoise<S> {
    fn sample(&self, _x: f64, _y: f64, _time: f64) -> f64 {
        // Box-Muller wants u1 in (0, 1]; a draw of exactly 1 would give ln(0).
        let u1 = (1.0 - self.source.next_unit()).max(f64::MIN_POSITIVE);
        let u2 = 1.0 - self.source.next_unit();
        let z0 = (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos();
        (z0 * NORMAL_STD_DEV + NORMAL_MEAN).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Replays a fixed sequence, cycling when exhausted.
    struct Replay {
        values: Vec<f64>,
        cursor: AtomicUsize,
    }

    impl Replay {
        fn new(values: &[f64]) -> Self {
            Self {
                values: values.to_vec(),
                cursor: AtomicUsize::new(0),
            }
        }
    }

    impl UniformSource for Replay {
        fn next_unit(&self) -> f64 {
            let i = self.cursor.fetch_add(1, Ordering::Relaxed);
            self.values[i % self.values.len()]
        }
    }

    fn distinct_outputs(generator: &dyn NoiseGenerator, trials: usize) -> usize {
        (0..trials)
            .map(|_| generator.sample(1.0, 2.0, 3.0).to_bits())
            .collect::<HashSet<_>>()
            .len()
    }

    // -- Uniform --

    #[test]
    fn uniform_rescales_draw() {
        let noise = UniformNoise::with_source(Replay::new(&[0.0, 0.25, 0.5]));
        assert_eq!(noise.sample(0.0, 0.0, 0.0), -1.0);
        assert_eq!(noise.sample(0.0, 0.0, 0.0), -0.5);
        assert_eq!(noise.sample(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn uniform_is_not_deterministic() {
        assert!(distinct_outputs(&UniformNoise::new(), 1000) > 900);
    }

    // -- Non-uniform --

    #[test]
    fn non_uniform_keeps_smaller_draw() {
        let noise = NonUniformNoise::with_source(Replay::new(&[0.75, 0.25]));
        assert_eq!(noise.sample(0.0, 0.0, 0.0), -0.5);

        let noise = NonUniformNoise::with_source(Replay::new(&[0.25, 0.75]));
        assert_eq!(noise.sample(0.0, 0.0, 0.0), -0.5);
    }

    #[test]
    fn non_uniform_equal_draws_pass_through() {
        let noise = NonUniformNoise::with_source(Replay::new(&[0.5]));
        assert_eq!(noise.sample(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn non_uniform_consumes_two_draws_per_sample() {
        let source = Replay::new(&[0.9, 0.8, 0.1, 0.2]);
        let noise = NonUniformNoise::with_source(source);
        let first = noise.sample(0.0, 0.0, 0.0);
        let second = noise.sample(0.0, 0.0, 0.0);
        assert!((first - 0.6).abs() < 1e-12, "got {first}");
        assert!((second - -0.8).abs() < 1e-12, "got {second}");
    }

    #[test]
    fn non_uniform_is_not_deterministic() {
        assert!(distinct_outputs(&NonUniformNoise::new(), 1000) > 900);
    }

    #[test]
    fn non_uniform_skews_low() {
        let noise = NonUniformNoise::new();
        let n = 20_000;
        let mean = (0..n).map(|_| noise.sample(0.0, 0.0, 0.0)).sum::<f64>() / n as f64;
        // The minimum of two uniforms has mean 1/3, which maps to -1/3.
        assert!((mean - -1.0 / 3.0).abs() < 0.05, "mean {mean}");
    }

    // -- Normal --

    #[test]
    fn normal_zero_radius_gives_mean() {
        // A draw of 0 becomes u1 = 1, so ln(u1) = 0.
        let noise = NormalDistributionNoise::with_source(Replay::new(&[0.0, 0.3]));
        assert_eq!(noise.sample(0.0, 0.0, 0.0), NORMAL_MEAN);
    }

    #[test]
    fn normal_clamps_tails() {
        // u1 = 1e-6 gives a radius of about 5.26, or 1.58 after scaling.
        let high = NormalDistributionNoise::with_source(Replay::new(&[0.999_999, 0.0]));
        assert_eq!(high.sample(0.0, 0.0, 0.0), 1.0);

        let low = NormalDistributionNoise::with_source(Replay::new(&[0.999_999, 0.5]));
        assert_eq!(low.sample(0.0, 0.0, 0.0), -1.0);
    }

    #[test]
    fn normal_unit_draw_stays_finite() {
        // u1 bottoms out at the smallest positive f64; ln is about -708.
        let noise = NormalDistributionNoise::with_source(Replay::new(&[1.0, 0.0]));
        assert_eq!(noise.sample(0.0, 0.0, 0.0), 1.0);
    }

    #[test]
    fn thread_random_covers_closed_unit_interval() {
        let source = ThreadRandom;
        for _ in 0..10_000 {
            let u = source.next_unit();
            assert!((0.0..=1.0).contains(&u), "draw {u}");
        }
    }

    #[test]
    fn uniform_reaches_both_ends() {
        let noise = UniformNoise::with_source(Replay::new(&[0.0, 1.0]));
        assert_eq!(noise.sample(0.0, 0.0, 0.0), -1.0);
        assert_eq!(noise.sample(0.0, 0.0, 0.0), 1.0);
    }

    #[test]
    fn normal_unclamped_value_follows_box_muller() {
        let noise = NormalDistributionNoise::with_source(Replay::new(&[0.5, 0.0]));
        let expected = (-2.0 * 0.5_f64.ln()).sqrt() * NORMAL_STD_DEV;
        assert!((noise.sample(0.0, 0.0, 0.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn normal_is_not_deterministic() {
        assert!(distinct_outputs(&NormalDistributionNoise::new(), 1000) > 900);
    }

    #[test]
    fn normal_spread_matches_std_dev() {
        let noise = NormalDistributionNoise::new();
        let n = 20_000;
        let samples: Vec<f64> = (0..n).map(|_| noise.sample(0.0, 0.0, 0.0)).collect();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.02, "mean {mean}");
        // Clamping at about 3.3 sigma barely trims the variance.
        assert!((var.sqrt() - NORMAL_STD_DEV).abs() < 0.02, "std dev {}", var.sqrt());
    }

    #[test]
    fn generators_are_shareable_across_threads() {
        let noise = std::sync::Arc::new(NormalDistributionNoise::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let noise = std::sync::Arc::clone(&noise);
                std::thread::spawn(move || noise.sample(0.0, 0.0, 0.0))
            })
            .collect();
        for h in handles {
            let v = h.join().expect("sampling thread panicked");
            assert!((-1.0..=1.0).contains(&v));
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn outputs_bounded_for_any_draws(a in 0.0_f64..=1.0, b in 0.0_f64..=1.0) {
                let draws = [a, b];
                let u = UniformNoise::with_source(Replay::new(&draws)).sample(0.0, 0.0, 0.0);
                let nu = NonUniformNoise::with_source(Replay::new(&draws)).sample(0.0, 0.0, 0.0);
                let n = NormalDistributionNoise::with_source(Replay::new(&draws)).sample(0.0, 0.0, 0.0);
                prop_assert!((-1.0..=1.0).contains(&u));
                prop_assert!((-1.0..=1.0).contains(&nu));
                prop_assert!((-1.0..=1.0).contains(&n));
                prop_assert!(nu <= u);
            }
        }
    }
}

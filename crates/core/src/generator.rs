//! The `NoiseGenerator` trait every noise algorithm implements.
//!
//! The trait is object-safe so generators can be held as `dyn NoiseGenerator`
//! and swapped at runtime.

/// A scalar noise field sampled point by point.
///
/// Lattice generators (gradient, simplex, cellular) are pure functions of
/// their construction-time tables and the call arguments: same instance and
/// same `(x, y, time)` give bit-identical results. Statistical generators
/// draw fresh randomness on every call.
///
/// Non-finite coordinates are not trapped: NaN and infinities propagate
/// through the arithmetic per IEEE-754.
pub trait NoiseGenerator: Send + Sync {
    /// Samples the field at `(x, y)` and `time`.
    ///
    /// Returns a value approximately in `[-1, 1]`. Only the normal
    /// distribution hard-clamps; the lattice formulas are bounded by
    /// construction but not clamped.
    fn sample(&self, x: f64, y: f64, time: f64) -> f64;
}

impl<G: NoiseGenerator + ?Sized> NoiseGenerator for Box<G> {
    fn sample(&self, x: f64, y: f64, time: f64) -> f64 {
        (**self).sample(x, y, time)
    }
}

impl<G: NoiseGenerator + ?Sized> NoiseGenerator for &G {
    fn sample(&self, x: f64, y: f64, time: f64) -> f64 {
        (**self).sample(x, y, time)
    }
}

#![deny(unsafe_code)]
//! Seeded 2D gradient noise in the style of Ken Perlin's improved noise.
//!
//! The unit square containing the sample point is hashed through a shuffled
//! [`PermutationTable`] to pick one of four diagonal gradients at each corner.
//! Each gradient is dotted with the offset from its corner, and the four
//! results are blended bilinearly with the quintic fade curve
//! `6t^5 - 15t^4 + 10t^3`, whose first and second derivatives vanish at the
//! cell edges so no grid lines show.
//!
//! The field is spatial only: `time` is ignored, and callers animate by
//! moving `x`/`y`.

use finding_beauty_core::{NoiseGenerator, PermutationTable};

/// Seeded 2D gradient noise. Output stays within `[-1, 1]` but is not
/// clamped.
#[derive(Debug, Clone)]
pub struct GradientNoise {
    seed: i64,
    perm: PermutationTable,
}

impl GradientNoise {
    /// Builds the generator for `seed`. The permutation table is shuffled
    /// once here and frozen.
    pub fn new(seed: i64) -> Self {
        Self {
            seed,
            perm: PermutationTable::from_seed(seed),
        }
    }

    /// The seed this generator was built from.
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Read-only access to the permutation table.
    pub fn permutation(&self) -> &PermutationTable {
        &self.perm
    }

    /// Evaluates the noise at `(x, y)`.
    pub fn noise(&self, x: f64, y: f64) -> f64 {
        let x_floor = x.floor();
        let y_floor = y.floor();
        let xi = lattice_index(x_floor);
        let yi = lattice_index(y_floor);

        let xf = x - x_floor;
        let yf = y - y_floor;
        let u = fade(xf);
        let v = fade(yf);

        let p = &self.perm;
        let a = p.get(xi) + yi;
        let aa = p.get(a);
        let ab = p.get(a + 1);
        let b = p.get(xi + 1) + yi;
        let ba = p.get(b);
        let bb = p.get(b + 1);

        let grad_aa = grad(p.get(aa), xf, yf);
        let grad_ba = grad(p.get(ba), xf - 1.0, yf);
        let grad_ab = grad(p.get(ab), xf, yf - 1.0);
        let grad_bb = grad(p.get(bb), xf - 1.0, yf - 1.0);

        let lower = lerp(grad_aa, grad_ba, u);
        let upper = lerp(grad_ab, grad_bb, u);
        lerp(lower, upper, v)
    }
}

impl NoiseGenerator for GradientNoise {
    fn sample(&self, x: f64, y: f64, _time: f64) -> f64 {
        self.noise(x, y)
    }
}

/// Wraps a floored coordinate to a table index in `0..=255`.
///
/// The float-to-int cast saturates, so huge or NaN coordinates still give a
/// valid index; the fractional part carries the NaN through instead.
#[inline]
fn lattice_index(floored: f64) -> usize {
    ((floored as i64) & 255) as usize
}

/// Quintic smoothing curve `t^3 (t (6t - 15) + 10)`.
#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product of the corner offset `(x, y)` with one of four diagonal
/// gradients selected by the low two bits of `hash`.
#[inline]
fn grad(hash: usize, x: f64, y: f64) -> f64 {
    let h = hash & 3;
    let (u, v) = if h < 2 { (x, y) } else { (y, x) };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}

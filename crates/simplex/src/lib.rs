#![deny(unsafe_code)]
//! Seeded 2D simplex noise, after Stefan Gustavson's reference formulation.
//!
//! The plane is skewed so that the triangular simplex lattice lines up with
//! integer coordinates. Each sample touches only the three corners of the
//! triangle it falls in, and each corner's influence fades radially to zero,
//! which gives fewer directional artifacts than square-grid gradient noise.
//!
//! Like gradient noise the field is spatial only and `time` is ignored.

use finding_beauty_core::{NoiseGenerator, PermutationTable};
use glam::DVec2;

/// Skew factor `(sqrt(3) - 1) / 2`.
const F2: f64 = 0.366_025_403_784_438_6;
/// Unskew factor `(3 - sqrt(3)) / 6`.
const G2: f64 = 0.211_324_865_405_187_13;
/// Normalization so the summed corner contributions land in about `[-1, 1]`.
const SCALE: f64 = 70.0;

/// The twelve edge-midpoint gradients of a cube; the 2D lookup uses their
/// first two components, so four of them are axis-aligned and four repeat.
const GRAD3: [DVec2; 12] = [
    DVec2::new(1.0, 1.0),
    DVec2::new(-1.0, 1.0),
    DVec2::new(1.0, -1.0),
    DVec2::new(-1.0, -1.0),
    DVec2::new(1.0, 0.0),
    DVec2::new(-1.0, 0.0),
    DVec2::new(1.0, 0.0),
    DVec2::new(-1.0, 0.0),
    DVec2::new(0.0, 1.0),
    DVec2::new(0.0, -1.0),
    DVec2::new(0.0, 1.0),
    DVec2::new(0.0, -1.0),
];

/// Seeded 2D simplex noise. Output lands in about `[-1, 1]`; it is not
/// clamped.
#[derive(Debug, Clone)]
pub struct SimplexNoise {
    seed: i64,
    perm: PermutationTable,
    perm_mod12: Box<[u8]>,
}

impl SimplexNoise {
    /// Builds the generator for `seed`: the shared permutation shuffle plus
    /// a table of every entry reduced modulo 12.
    pub fn new(seed: i64) -> Self {
        let perm = PermutationTable::from_seed(seed);
        let perm_mod12 = perm.entries().iter().map(|&p| p % 12).collect();
        Self {
            seed,
            perm,
            perm_mod12,
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
        // Skew into lattice space to find the cell.
        let s = (x + y) * F2;
        let i = (x + s).floor() as i64;
        let j = (y + s).floor() as i64;

        // Unskew the cell origin back and measure from it. The sum is taken
        // in f64 because the casts above saturate for huge or infinite input.
        let t = (i as f64 + j as f64) * G2;
        let d0 = DVec2::new(x - (i as f64 - t), y - (j as f64 - t));

        // Lower triangle (0,0)->(1,0)->(1,1) or upper (0,0)->(0,1)->(1,1).
        let (i1, j1) = if d0.x > d0.y { (1, 0) } else { (0, 1) };

        let d1 = DVec2::new(d0.x - i1 as f64 + G2, d0.y - j1 as f64 + G2);
        let d2 = DVec2::new(d0.x - 1.0 + 2.0 * G2, d0.y - 1.0 + 2.0 * G2);

        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;
        let p = &self.perm;
        let gi0 = self.perm_mod12[ii + p.get(jj)];
        let gi1 = self.perm_mod12[ii + i1 + p.get(jj + j1)];
        let gi2 = self.perm_mod12[ii + 1 + p.get(jj + 1)];

        SCALE * (corner(gi0, d0) + corner(gi1, d1) + corner(gi2, d2))
    }
}

impl NoiseGenerator for SimplexNoise {
    fn sample(&self, x: f64, y: f64, _time: f64) -> f64 {
        self.noise(x, y)
    }
}

/// Contribution of one simplex corner at offset `d`: `(0.5 - |d|^2)^4`
/// times the gradient dot product, or zero outside the corner's radius.
#[inline]
fn corner(gradient: u8, d: DVec2) -> f64 {
    let t = 0.5 - d.x * d.x - d.y * d.y;
    if t < 0.0 {
        0.0
    } else {
        let t2 = t * t;
        t2 * t2 * GRAD3[usize::from(gradient)].dot(d)
    }
}

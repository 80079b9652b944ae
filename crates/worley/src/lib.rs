#![deny(unsafe_code)]
//! Seeded 2D cellular (Worley) noise.
//!
//! Every integer cell owns one feature point derived from a permutation-table
//! hash of its coordinates. A sample's value depends on the distance to the
//! nearest feature point, searched over the 3x3 block of cells around it:
//! cells glow brightest at their feature points and fall to -1 half a unit
//! away.

use finding_beauty_core::{NoiseGenerator, PermutationTable};
use glam::DVec2;

/// Distance multiplier before the result saturates at -1.
const DISTANCE_SCALE: f64 = 2.0;

/// Seeded 2D cellular noise. Output lies in `[-1, 1]`.
#[derive(Debug, Clone)]
pub struct CellularNoise {
    seed: i64,
    perm: PermutationTable,
}

impl CellularNoise {
    /// Builds the generator for `seed`.
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

    /// Chains three table lookups into a pseudo-random value for a cell.
    fn hash(&self, cell_x: i64, cell_y: i64) -> usize {
        let wx = (cell_x & 255) as usize;
        let wy = (cell_y & 255) as usize;
        let first = self.perm.get(wx);
        let second = self.perm.get((first + wy) & 255);
        self.perm.get(second)
    }

    /// The feature point of cell `(cell_x, cell_y)`.
    ///
    /// The low byte of the cell hash gives the x offset and the next byte the
    /// y offset, each scaled by 1/255. Table entries are single bytes, so the
    /// y offset is always 0 and feature points sit on their cell's lower edge.
    pub fn feature_point(&self, cell_x: i64, cell_y: i64) -> DVec2 {
        let h = self.hash(cell_x, cell_y);
        let rx = (h & 0xFF) as f64 / 255.0;
        let ry = ((h >> 8) & 0xFF) as f64 / 255.0;
        DVec2::new(cell_x as f64 + rx, cell_y as f64 + ry)
    }

    /// Distance from `p` to the nearest feature point in the 3x3 block of
    /// cells around it.
    ///
    /// Neighbors are required, not an optimization: close to a cell edge the
    /// adjacent cell's point can be nearer than the cell's own.
    pub fn nearest_distance(&self, p: DVec2) -> f64 {
        // Saturating casts; the cell hash only reads the low byte, so the
        // neighbor offsets wrap.
        let cell_x = p.x.floor() as i64;
        let cell_y = p.y.floor() as i64;
        let mut min_distance = f64::INFINITY;
        for dx in -1..=1 {
            for dy in -1..=1 {
                let feature =
                    self.feature_point(cell_x.wrapping_add(dx), cell_y.wrapping_add(dy));
                min_distance = min_distance.min(p.distance(feature));
            }
        }
        min_distance
    }

    /// Evaluates the noise at `(x, y)`.
    pub fn noise(&self, x: f64, y: f64) -> f64 {
        let distance = self.nearest_distance(DVec2::new(x, y));
        1.0 - (distance * DISTANCE_SCALE).min(1.0) * 2.0
    }
}

impl NoiseGenerator for CellularNoise {
    fn sample(&self, x: f64, y: f64, _time: f64) -> f64 {
        self.noise(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(n: usize) -> impl Iterator<Item = (f64, f64)> {
        (0..n).map(|i| {
            let i = i as f64;
            (
                (i * 0.618_033_988_7).rem_euclid(1.0) * 512.0 - 256.0,
                (i * 0.754_877_666_2).rem_euclid(1.0) * 512.0 - 256.0,
            )
        })
    }

    /// Reference output from an exhaustive 5x5 search.
    fn wide_search(noise: &CellularNoise, x: f64, y: f64) -> f64 {
        let p = DVec2::new(x, y);
        let cx = x.floor() as i64;
        let cy = y.floor() as i64;
        let mut best = f64::INFINITY;
        for dx in -2..=2 {
            for dy in -2..=2 {
                let fp = noise.feature_point(cx.wrapping_add(dx), cy.wrapping_add(dy));
                best = best.min(p.distance(fp));
            }
        }
        1.0 - (best * 2.0).min(1.0) * 2.0
    }

    #[test]
    fn golden_value_seed_42() {
        const GOLDEN_BITS: u64 = 0xbfc9_01b5_39fb_e080;
        let v = CellularNoise::new(42).sample(-2.25, 7.75, 0.0);
        assert_eq!(
            v.to_bits(),
            GOLDEN_BITS,
            "cellular golden value changed: got {v} (bits {:#018x})",
            v.to_bits()
        );
    }

    #[test]
    fn feature_point_lies_inside_its_cell() {
        let noise = CellularNoise::new(42);
        for cx in -20..20 {
            for cy in -20..20 {
                let fp = noise.feature_point(cx, cy);
                assert!(fp.x >= cx as f64 && fp.x <= cx as f64 + 1.0);
                assert!(fp.y >= cy as f64 && fp.y <= cy as f64 + 1.0);
            }
        }
    }

    #[test]
    fn cell_hash_repeats_every_256_cells() {
        let noise = CellularNoise::new(3);
        assert_eq!(noise.hash(5, 9), noise.hash(5 + 256, 9 - 256));
        assert_eq!(noise.hash(-1, -1), noise.hash(255, 255));
    }

    #[test]
    fn sample_at_feature_point_is_brightest() {
        let noise = CellularNoise::new(42);
        let fp = noise.feature_point(4, -7);
        assert_eq!(noise.sample(fp.x, fp.y, 0.0), 1.0);
    }

    #[test]
    fn neighbor_cell_feature_point_is_found() {
        // Query just below the top edge of cell (cx, cy), directly under the
        // feature point of cell (cx, cy + 1). Own-cell points sit on the
        // lower edge, almost a full unit away, so an own-cell-only search
        // would return -1.
        let noise = CellularNoise::new(42);
        let (cx, cy) = (12, 30);
        let above = noise.feature_point(cx, cy + 1);
        let query = DVec2::new(above.x.min(cx as f64 + 0.999), cy as f64 + 0.999);
        assert_eq!(query.y.floor() as i64, cy);

        let own = noise.feature_point(cx, cy);
        let own_only = 1.0 - (query.distance(own) * 2.0).min(1.0) * 2.0;
        assert_eq!(own_only, -1.0);

        let v = noise.sample(query.x, query.y, 0.0);
        assert!(v > 0.9, "neighbor feature point ignored: got {v}");
    }

    #[test]
    fn cell_boundary_points_match_wide_search() {
        let noise = CellularNoise::new(42);
        for k in -8..8 {
            for step in 0..16 {
                let t = step as f64 / 16.0;
                // Exactly on a vertical and on a horizontal cell edge.
                let (x, y) = (k as f64, 3.0 + t);
                assert_eq!(noise.sample(x, y, 0.0), wide_search(&noise, x, y));
                let (x, y) = (-5.0 + t, k as f64);
                assert_eq!(noise.sample(x, y, 0.0), wide_search(&noise, x, y));
            }
        }
    }

    #[test]
    fn output_bounded_over_10k_samples() {
        let noise = CellularNoise::new(42);
        for (x, y) in coords(10_000) {
            let v = noise.sample(x, y, 0.0);
            assert!((-1.0..=1.0).contains(&v), "value {v} at ({x}, {y})");
        }
    }

    #[test]
    fn same_seed_gives_bit_identical_samples() {
        let a = CellularNoise::new(42);
        let b = CellularNoise::new(42);
        for (x, y) in coords(1000) {
            assert_eq!(a.sample(x, y, 0.0).to_bits(), b.sample(x, y, 0.0).to_bits());
        }
    }

    #[test]
    fn different_seeds_give_different_samples() {
        let a = CellularNoise::new(1);
        let b = CellularNoise::new(2);
        let differing = coords(100)
            .filter(|&(x, y)| a.sample(x + 0.3, y + 0.7, 0.0) != b.sample(x + 0.3, y + 0.7, 0.0))
            .count();
        assert!(differing > 0, "seeds 1 and 2 sampled identically");
    }

    #[test]
    fn saturated_cells_wrap_instead_of_overflowing() {
        // Every feature point lies within i64 range, so nothing is in reach
        // of these samples.
        let noise = CellularNoise::new(42);
        for (x, y) in [
            (1e19, 0.5),
            (-1e19, 0.5),
            (0.5, 1e19),
            (f64::INFINITY, 0.5),
            (f64::NEG_INFINITY, f64::INFINITY),
        ] {
            assert_eq!(noise.sample(x, y, 0.0), -1.0, "at ({x}, {y})");
        }
    }

    #[test]
    fn extreme_cells_hash_like_their_low_byte() {
        let noise = CellularNoise::new(42);
        assert_eq!(noise.hash(i64::MAX, i64::MIN), noise.hash(255, 0));
        let wrapped = noise.feature_point(i64::MAX.wrapping_add(1), 0);
        assert_eq!(wrapped.x.floor(), i64::MIN as f64);
    }

    #[test]
    fn time_is_ignored() {
        let noise = CellularNoise::new(5);
        assert_eq!(noise.sample(1.3, 2.7, 0.0), noise.sample(1.3, 2.7, 8.0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn three_by_three_search_matches_wide_search(
                seed: i64,
                x in -1e3_f64..1e3,
                y in -1e3_f64..1e3,
            ) {
                let noise = CellularNoise::new(seed);
                prop_assert_eq!(noise.sample(x, y, 0.0), wide_search(&noise, x, y));
            }

            #[test]
            fn bounded_far_from_origin(
                seed: i64,
                x in -1e20_f64..1e20,
                y in -1e20_f64..1e20,
            ) {
                let v = CellularNoise::new(seed).sample(x, y, 0.0);
                prop_assert!((-1.0..=1.0).contains(&v), "value {v} at ({x}, {y})");
            }
        }
    }
}

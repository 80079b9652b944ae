//! Reproducible description of a sampled noise grid.
//!
//! A [`NoiseRecipe`] captures everything needed to recreate a noise image:
//! generator kind, grid dimensions, seed and sampling parameters.

use crate::error::NoiseError;
use crate::field::{checked_len, GridSampling};
use serde::{Deserialize, Serialize};

/// Reproducible description of a sampled noise grid.
///
/// Two identical recipes sampled with a deterministic generator kind produce
/// bit-identical grids. Statistical kinds ignore `seed`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoiseRecipe {
    pub kind: String,
    pub width: usize,
    pub height: usize,
    pub seed: i64,
    #[serde(default = "empty_params")]
    pub params: serde_json::Value,
}

fn empty_params() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl NoiseRecipe {
    /// Creates a new recipe with default params (`{}`).
    pub fn new(kind: &str, width: usize, height: usize, seed: i64) -> Self {
        Self {
            kind: kind.to_string(),
            width,
            height,
            seed,
            params: empty_params(),
        }
    }

    /// Validates that the recipe has non-zero dimensions, that
    /// `width * height` neither overflows nor exceeds
    /// [`MAX_GRID_CELLS`](crate::field::MAX_GRID_CELLS), and that its params
    /// are usable.
    pub fn validate(&self) -> Result<(), NoiseError> {
        checked_len(self.width, self.height)?;
        self.sampling().map(|_| ())
    }

    /// Sampling parameters extracted from `params`.
    pub fn sampling(&self) -> Result<GridSampling, NoiseError> {
        GridSampling::from_json(&self.params)
    }
}

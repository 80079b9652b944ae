#![deny(unsafe_code)]
//! Noise kind registry: maps names to generator implementations and writes
//! sampled grids to disk.
//!
//! This crate sits between `finding-beauty-core` (which defines the
//! `NoiseGenerator` trait) and the individual generator crates. The CLI
//! depends on it so name dispatch lives in one place.

pub mod snapshot;

use finding_beauty_core::{Field, NoiseError, NoiseGenerator, NoiseRecipe};
use finding_beauty_perlin::GradientNoise;
use finding_beauty_simplex::SimplexNoise;
use finding_beauty_statistical::{NonUniformNoise, NormalDistributionNoise, UniformNoise};
use finding_beauty_worley::CellularNoise;

/// Every available noise kind, in listing order.
const ALL_KINDS: [NoiseKind; 6] = [
    NoiseKind::Uniform,
    NoiseKind::NonUniform,
    NoiseKind::Normal,
    NoiseKind::Perlin,
    NoiseKind::Simplex,
    NoiseKind::Worley,
];

/// The noise generators this crate knows how to build.
///
/// Use [`NoiseKind::from_name`] for string-based lookup (CLI, recipes) and
/// [`NoiseKind::build`] to get a generator behind the shared trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoiseKind {
    /// Flat draw over `[-1, 1]`.
    Uniform,
    /// Smaller of two draws, skewed low.
    NonUniform,
    /// Clamped Box-Muller draw.
    Normal,
    /// Seeded gradient noise.
    Perlin,
    /// Seeded simplex noise.
    Simplex,
    /// Seeded cellular noise.
    Worley,
}

impl NoiseKind {
    /// Looks up a kind by its canonical name.
    ///
    /// Returns `NoiseError::UnknownNoise` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, NoiseError> {
        ALL_KINDS
            .into_iter()
            .find(|k| k.name() == name)
            .ok_or_else(|| NoiseError::UnknownNoise(name.to_string()))
    }

    /// All kinds, in listing order.
    pub fn all() -> &'static [NoiseKind] {
        &ALL_KINDS
    }

    /// Canonical names of all kinds.
    pub fn list_names() -> Vec<&'static str> {
        ALL_KINDS.iter().map(|k| k.name()).collect()
    }

    /// Canonical lowercase name used on the command line and in recipes.
    pub fn name(self) -> &'static str {
        match self {
            NoiseKind::Uniform => "uniform",
            NoiseKind::NonUniform => "non-uniform",
            NoiseKind::Normal => "normal",
            NoiseKind::Perlin => "perlin",
            NoiseKind::Simplex => "simplex",
            NoiseKind::Worley => "worley",
        }
    }

    /// Human-readable name.
    pub fn display_name(self) -> &'static str {
        match self {
            NoiseKind::Uniform => "Uniform Distribution",
            NoiseKind::NonUniform => "Non-Uniform Distribution",
            NoiseKind::Normal => "Normal Distribution",
            NoiseKind::Perlin => "Perlin Noise",
            NoiseKind::Simplex => "Simplex Noise",
            NoiseKind::Worley => "Worley Noise",
        }
    }

    /// Whether the same seed and coordinates always give the same sample.
    /// False for the statistical kinds.
    pub fn is_deterministic(self) -> bool {
        matches!(
            self,
            NoiseKind::Perlin | NoiseKind::Simplex | NoiseKind::Worley
        )
    }

    /// Builds a generator of this kind. Statistical kinds ignore `seed`.
    pub fn build(self, seed: i64) -> Box<dyn NoiseGenerator> {
        tracing::debug!(kind = self.name(), seed, "building generator");
        match self {
            NoiseKind::Uniform => Box::new(UniformNoise::new()),
            NoiseKind::NonUniform => Box::new(NonUniformNoise::new()),
            NoiseKind::Normal => Box::new(NormalDistributionNoise::new()),
            NoiseKind::Perlin => Box::new(GradientNoise::new(seed)),
            NoiseKind::Simplex => Box::new(SimplexNoise::new(seed)),
            NoiseKind::Worley => Box::new(CellularNoise::new(seed)),
        }
    }
}

impl std::fmt::Display for NoiseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for NoiseKind {
    type Err = NoiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Validates `recipe`, builds its generator and samples the grid it
/// describes.
pub fn render(recipe: &NoiseRecipe) -> Result<Field, NoiseError> {
    recipe.validate()?;
    let kind = NoiseKind::from_name(&recipe.kind)?;
    let sampling = recipe.sampling()?;
    let generator = kind.build(recipe.seed);
    Field::sample(generator.as_ref(), recipe.width, recipe.height, &sampling)
}

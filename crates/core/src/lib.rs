#![deny(unsafe_code)]
//! Core types and traits for the finding-beauty noise generators.
//!
//! Provides the `NoiseGenerator` trait, the `Lcg64` seeded engine and its
//! `RandomSource` seam, the shared `PermutationTable`, the `Field` sample
//! grid with its `GridSampling` parameters, the `NoiseRecipe` reproducible
//! description, and parameter helpers.

pub mod error;
pub mod field;
pub mod generator;
pub mod params;
pub mod permutation;
pub mod prng;
pub mod recipe;

pub use error::NoiseError;
pub use field::{Field, FieldStats, GridSampling, MAX_GRID_CELLS};
pub use generator::NoiseGenerator;
pub use permutation::PermutationTable;
pub use prng::{Lcg64, RandomSource};
pub use recipe::NoiseRecipe;

//! Two-dimensional grid of noise samples.
//!
//! A noise field is infinite and never stored; a [`Field`] is the finite
//! window of it that a consumer materializes when drawing a noise image.
//! Values use row-major layout and are kept exactly as sampled (roughly
//! `[-1, 1]`) unless normalization is requested.

use crate::error::NoiseError;
use crate::generator::NoiseGenerator;
use crate::params::{param_bool, param_f64};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default distance in noise space between adjacent grid cells.
pub const DEFAULT_FREQUENCY: f64 = 0.01;

/// Largest grid a [`Field`] will allocate: 8192 x 8192 cells, 512 MiB of
/// samples.
pub const MAX_GRID_CELLS: usize = 1 << 26;

/// How grid cells map to noise-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSampling {
    /// Noise-space step between adjacent cells. Lower is smoother.
    pub frequency: f64,
    /// Time passed to every sample.
    pub time: f64,
    /// Noise-space x coordinate of cell (0, 0).
    pub offset_x: f64,
    /// Noise-space y coordinate of cell (0, 0).
    pub offset_y: f64,
    /// Map samples from `[-1, 1]` to `[0, 1]` after sampling.
    pub normalize: bool,
}

impl Default for GridSampling {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
            time: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
            normalize: false,
        }
    }
}

impl GridSampling {
    /// Extracts sampling parameters from a JSON object, falling back to
    /// defaults for missing or mistyped keys.
    ///
    /// Returns `NoiseError::InvalidParam` if a supplied number is not finite
    /// or `frequency` is not positive.
    pub fn from_json(params: &Value) -> Result<Self, NoiseError> {
        let defaults = Self::default();
        let sampling = Self {
            frequency: param_f64(params, "frequency", defaults.frequency),
            time: param_f64(params, "time", defaults.time),
            offset_x: param_f64(params, "offset_x", defaults.offset_x),
            offset_y: param_f64(params, "offset_y", defaults.offset_y),
            normalize: param_bool(params, "normalize", defaults.normalize),
        };
        for (name, value) in [
            ("frequency", sampling.frequency),
            ("time", sampling.time),
            ("offset_x", sampling.offset_x),
            ("offset_y", sampling.offset_y),
        ] {
            if !value.is_finite() {
                return Err(NoiseError::InvalidParam {
                    name: name.to_owned(),
                    reason: format!("must be finite, got {value}"),
                });
            }
        }
        if sampling.frequency <= 0.0 {
            return Err(NoiseError::InvalidParam {
                name: "frequency".to_owned(),
                reason: format!("must be positive, got {}", sampling.frequency),
            });
        }
        Ok(sampling)
    }

    /// Noise-space coordinates of grid cell `(px, py)`.
    pub fn coords(&self, px: usize, py: usize) -> (f64, f64) {
        (
            self.offset_x + px as f64 * self.frequency,
            self.offset_y + py as f64 * self.frequency,
        )
    }
}

/// Summary statistics over a field's values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// A 2D grid of noise samples with toroidal coordinate access.
#[derive(Debug, Clone)]
pub struct Field {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

/// Checks that neither dimension is zero and that the grid fits under
/// [`MAX_GRID_CELLS`], and returns `width * height`.
pub(crate) fn checked_len(width: usize, height: usize) -> Result<usize, NoiseError> {
    if width == 0 || height == 0 {
        return Err(NoiseError::InvalidDimensions);
    }
    let len = width
        .checked_mul(height)
        .ok_or(NoiseError::InvalidDimensions)?;
    if len > MAX_GRID_CELLS {
        return Err(NoiseError::GridTooLarge {
            width,
            height,
            max: MAX_GRID_CELLS,
        });
    }
    Ok(len)
}

impl Field {
    /// Creates a zero-filled field of the given dimensions.
    ///
    /// Returns `NoiseError::InvalidDimensions` if either dimension is zero
    /// or if `width * height` overflows `usize`, and
    /// `NoiseError::GridTooLarge` past [`MAX_GRID_CELLS`].
    pub fn new(width: usize, height: usize) -> Result<Self, NoiseError> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0.0; len],
        })
    }

    /// Creates a field from a pre-built data vector, validating that
    /// `data.len() == width * height`.
    pub fn from_data(width: usize, height: usize, data: Vec<f64>) -> Result<Self, NoiseError> {
        let expected = checked_len(width, height)?;
        if data.len() != expected {
            return Err(NoiseError::DimensionMismatch {
                lhs_w: width,
                lhs_h: height,
                rhs_w: data.len(),
                rhs_h: 1,
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Samples `generator` over a `width x height` grid.
    ///
    /// Cell `(px, py)` is sampled at [`GridSampling::coords`] with
    /// `sampling.time`. When `sampling.normalize` is set the result is
    /// passed through [`Field::normalized`].
    pub fn sample(
        generator: &dyn NoiseGenerator,
        width: usize,
        height: usize,
        sampling: &GridSampling,
    ) -> Result<Self, NoiseError> {
        let len = checked_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for py in 0..height {
            for px in 0..width {
                let (x, y) = sampling.coords(px, py);
                data.push(generator.sample(x, y, sampling.time));
            }
        }
        tracing::debug!(width, height, frequency = sampling.frequency, "sampled field");
        let field = Self {
            width,
            height,
            data,
        };
        Ok(if sampling.normalize {
            field.normalized()
        } else {
            field
        })
    }

    /// Field width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Field height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the underlying row-major data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Converts signed coordinates to a flat index using toroidal wrapping.
    fn index(&self, x: isize, y: isize) -> usize {
        let w = self.width as isize;
        let h = self.height as isize;
        let xi = x.rem_euclid(w) as usize;
        let yi = y.rem_euclid(h) as usize;
        yi * self.width + xi
    }

    /// Gets the value at `(x, y)` with toroidal wrapping.
    pub fn get(&self, x: isize, y: isize) -> f64 {
        self.data[self.index(x, y)]
    }

    /// Minimum, maximum and mean of all values.
    pub fn stats(&self) -> FieldStats {
        let (min, max, sum) = self.data.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, sum), &v| (min.min(v), max.max(v), sum + v),
        );
        FieldStats {
            min,
            max,
            mean: sum / self.data.len() as f64,
        }
    }

    /// Maps every value from `[-1, 1]` to `[0, 1]`, clamping anything that
    /// falls outside.
    ///
    /// This is the opacity a consumer draws a noise pixel with.
    pub fn normalized(&self) -> Field {
        Field {
            width: self.width,
            height: self.height,
            data: self
                .data
                .iter()
                .map(|v| ((v + 1.0) * 0.5).clamp(0.0, 1.0))
                .collect(),
        }
    }
}

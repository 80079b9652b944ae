//! JSON snapshot of a sampled [`Field`].
//!
//! A snapshot stores the recipe that produced the grid next to its values,
//! so a saved image can be regenerated or diffed later.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use finding_beauty_core::{Field, FieldStats, NoiseError, NoiseRecipe};
use serde::Serialize;

#[derive(Serialize)]
struct Snapshot<'a> {
    recipe: &'a NoiseRecipe,
    stats: FieldStats,
    data: &'a [f64],
}

/// Writes `field` and the `recipe` that produced it as JSON.
///
/// Returns `NoiseError::DimensionMismatch` if the field does not have the
/// recipe's dimensions, or `NoiseError::Io` on write failure.
pub fn write_json(field: &Field, recipe: &NoiseRecipe, path: &Path) -> Result<(), NoiseError> {
    if field.width() != recipe.width || field.height() != recipe.height {
        return Err(NoiseError::DimensionMismatch {
            lhs_w: field.width(),
            lhs_h: field.height(),
            rhs_w: recipe.width,
            rhs_h: recipe.height,
        });
    }
    let snapshot = Snapshot {
        recipe,
        stats: field.stats(),
        data: field.data(),
    };
    let file = File::create(path).map_err(|e| NoiseError::Io(e.to_string()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &snapshot).map_err(|e| NoiseError::Io(e.to_string()))?;
    writer.flush().map_err(|e| NoiseError::Io(e.to_string()))?;
    tracing::info!(path = %path.display(), cells = field.data().len(), "wrote snapshot");
    Ok(())
}

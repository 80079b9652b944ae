//! Errors surfaced by the `finding-beauty` binary.
//!
//! Each category exits with its own code so scripts can tell a bad recipe
//! from a full disk without parsing stderr:
//!
//! | code | category |
//! |------|----------|
//! | 0    | success |
//! | 2    | argument parsing (reported by clap) |
//! | 10   | noise: unknown kind, bad grid size, unusable sampling params |
//! | 11   | I/O: recipe unreadable, snapshot not written |
//! | 12   | input: `--params` or recipe file is not valid JSON for its shape |
//! | 13   | serialization: stdout JSON could not be produced |

use finding_beauty_core::NoiseError;
use thiserror::Error;

/// A failed command, classified by exit code.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Noise(NoiseError),

    #[error("{0}")]
    Io(String),

    #[error("{0}")]
    Input(String),

    #[error("cannot serialize output: {0}")]
    Serialization(String),
}

impl CliError {
    /// Process exit code for this category; see the module table.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Noise(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

/// Snapshot write failures arrive as `NoiseError::Io` and keep the I/O code.
impl From<NoiseError> for CliError {
    fn from(e: NoiseError) -> Self {
        match e {
            NoiseError::Io(msg) => CliError::Io(msg),
            other => CliError::Noise(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

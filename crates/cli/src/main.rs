#![deny(unsafe_code)]
//! CLI binary for the finding-beauty noise generators.
//!
//! Subcommands:
//! - `list`: print available noise kinds
//! - `sample <kind>`: evaluate one point
//! - `grid <kind>` or `grid --recipe file.json`: sample a grid, print its
//!   stats and optionally write a JSON snapshot

mod error;
mod logging;

use clap::{Parser, Subcommand};
use error::CliError;
use finding_beauty_core::{NoiseGenerator, NoiseRecipe};
use finding_beauty_generators::NoiseKind;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "finding-beauty", about = "Seeded procedural noise generators")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log debug detail to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List available noise kinds.
    List,
    /// Evaluate a generator at a single point.
    Sample {
        /// Noise kind (e.g. "perlin").
        kind: String,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        x: f64,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        y: f64,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        time: f64,

        /// Seed for the lattice kinds. Ignored by statistical kinds.
        #[arg(long, default_value_t = 42, allow_negative_numbers = true)]
        seed: i64,
    },
    /// Sample a generator over a grid.
    Grid {
        /// Noise kind (e.g. "worley"). Required unless --recipe is given.
        #[arg(required_unless_present = "recipe")]
        kind: Option<String>,

        /// Grid width in cells.
        #[arg(short = 'W', long, default_value_t = 256)]
        width: usize,

        /// Grid height in cells.
        #[arg(short = 'H', long, default_value_t = 256)]
        height: usize,

        /// Seed for deterministic output.
        #[arg(long, default_value_t = 42, allow_negative_numbers = true)]
        seed: i64,

        /// Sampling parameters as a JSON string
        /// (frequency, time, offset_x, offset_y, normalize).
        #[arg(long, default_value = "{}")]
        params: String,

        /// Read the whole grid description from a recipe JSON file.
        #[arg(long, conflicts_with_all = ["kind", "params"])]
        recipe: Option<PathBuf>,

        /// Write a JSON snapshot (recipe, stats, data) to this path.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Reads and parses a recipe file.
fn load_recipe(path: &Path) -> Result<NoiseRecipe, CliError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("cannot read {}: {e}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|e| CliError::Input(format!("invalid recipe {}: {e}", path.display())))
}

/// Builds a recipe from command-line arguments.
fn recipe_from_args(
    kind: &str,
    width: usize,
    height: usize,
    seed: i64,
    params: &str,
) -> Result<NoiseRecipe, CliError> {
    let mut recipe = NoiseRecipe::new(kind, width, height, seed);
    recipe.params = serde_json::from_str(params)
        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
    Ok(recipe)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let kinds = NoiseKind::all();
            if cli.json {
                let info: Vec<_> = kinds
                    .iter()
                    .map(|k| {
                        serde_json::json!({
                            "name": k.name(),
                            "display_name": k.display_name(),
                            "deterministic": k.is_deterministic(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Noise kinds:");
                for k in kinds {
                    let seeded = if k.is_deterministic() { "seeded" } else { "random" };
                    println!("  {:<12} {:<26} {seeded}", k.name(), k.display_name());
                }
            }
        }
        Command::Sample {
            kind,
            x,
            y,
            time,
            seed,
        } => {
            let noise = NoiseKind::from_name(&kind)?;
            let value = noise.build(seed).sample(x, y, time);
            if cli.json {
                let info = serde_json::json!({
                    "kind": noise.name(),
                    "seed": seed,
                    "x": x,
                    "y": y,
                    "time": time,
                    "value": value,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{value}");
            }
        }
        Command::Grid {
            kind,
            width,
            height,
            seed,
            params,
            recipe,
            output,
        } => {
            let recipe = match (recipe, kind) {
                (Some(path), _) => load_recipe(&path)?,
                (None, Some(kind)) => recipe_from_args(&kind, width, height, seed, &params)?,
                (None, None) => {
                    return Err(CliError::Input("a noise kind or --recipe is required".into()))
                }
            };

            let field = finding_beauty_generators::render(&recipe)?;
            let stats = field.stats();

            if let Some(path) = &output {
                finding_beauty_generators::snapshot::write_json(&field, &recipe, path)?;
            }

            if cli.json {
                let info = serde_json::json!({
                    "recipe": recipe,
                    "stats": stats,
                    "output": output.as_ref().map(|p| p.display().to_string()),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!(
                    "{} {}x{} seed {}: min {:.4} max {:.4} mean {:.4}",
                    recipe.kind,
                    recipe.width,
                    recipe.height,
                    recipe.seed,
                    stats.min,
                    stats.max,
                    stats.mean
                );
                if let Some(path) = &output {
                    eprintln!("wrote {}", path.display());
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        tracing::debug!(exit_code = e.exit_code(), "command failed");
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

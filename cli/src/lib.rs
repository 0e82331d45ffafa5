//! Command-line driver for `generate-sequence`
//!
//! Parses `<GENERATOR> <SEED> <N> <OUTPUT>`, builds the generator and
//! writes the sequence to OUTPUT. All argument validation happens before
//! the output file is created.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use prng_sequence_core::{write_sequence, GeneratorKind, LcgParams, NumberFormat, SequenceConfig};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "generate-sequence")]
#[command(about = "Write a deterministic pseudo-random sequence as a one-column CSV")]
pub struct Args {
    /// Generator: lcg, randu, xorshift32 or mt19937
    pub generator: GeneratorKind,
    /// Seed (low 32 bits used by randu, xorshift32 and mt19937)
    pub seed: u64,
    /// Number of values to write
    pub count: u64,
    /// Output CSV path (created or truncated)
    pub output: PathBuf,
    /// Decimal rendering of each value
    #[arg(long, value_enum, default_value_t = CliFormat::Shortest)]
    pub format: CliFormat,
    /// JSON file overriding the LCG constants ({"multiplier", "increment", "modulus"})
    #[arg(long)]
    pub lcg_params: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CliFormat {
    /// Shortest round-trip representation
    Shortest,
    /// Six significant digits, like printf %g
    General,
}

impl From<CliFormat> for NumberFormat {
    fn from(value: CliFormat) -> Self {
        match value {
            CliFormat::Shortest => NumberFormat::Shortest,
            CliFormat::General => NumberFormat::General,
        }
    }
}

fn load_lcg_params(path: &Path) -> Result<LcgParams> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read LCG parameters: {}", path.display()))?;
    LcgParams::from_json(&json)
        .with_context(|| format!("Invalid LCG parameters in {}", path.display()))
}

/// Resolve the run configuration without touching the output path
pub fn resolve_config(args: &Args) -> Result<SequenceConfig> {
    let mut config = SequenceConfig::new(args.generator, args.seed, args.count);
    if let Some(path) = &args.lcg_params {
        config.lcg = load_lcg_params(path)?;
    }
    Ok(config)
}

/// Generate the sequence described by `args` and write it to `args.output`
pub fn run(args: &Args) -> Result<()> {
    let config = resolve_config(args)?;
    debug!(?config, "resolved configuration");

    let mut generator = config.build_generator();

    let file = File::create(&args.output)
        .with_context(|| format!("Cannot open output file: {}", args.output.display()))?;
    let mut out = BufWriter::new(file);

    write_sequence(&mut generator, config.count, args.format.into(), &mut out)
        .and_then(|()| out.flush())
        .with_context(|| format!("Failed writing to {}", args.output.display()))?;

    info!(
        generator = %config.generator,
        seed = config.seed,
        count = config.count,
        output = %args.output.display(),
        "sequence written"
    );
    Ok(())
}

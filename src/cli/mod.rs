//! # CLI Module
//!
//! Command-line interface for the fingerprint tool.
//!
//! ## Usage
//! ```bash
//! # Hash raw intensity dumps into .hash blobs
//! pixfp hash frames/*.raw --size 8 --mode grayscale
//!
//! # Compare two stored hashes
//! pixfp compare a.hash b.hash --metric detailed
//!
//! # Find matching pairs in a collection
//! pixfp pairs hashes/*.hash --min-score 95
//!
//! # Show what a stored blob contains
//! pixfp inspect a.hash --output json
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use pixel_fingerprint::core::comparator::{find_matching_pairs, MatchResult, ScoreThreshold};
use pixel_fingerprint::core::distance::DistanceMetric;
use pixel_fingerprint::core::hash::ImageHash;
use pixel_fingerprint::core::mode::ColorMode;
use pixel_fingerprint::core::pipeline::HashPipeline;
use pixel_fingerprint::core::source::{Base64Source, FileSource};
use pixel_fingerprint::error::{FingerprintError, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Pixel Fingerprint - perceptual hashes with a stable wire format
#[derive(Parser, Debug)]
#[command(name = "pixfp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Hash raw intensity dumps into stored hash blobs
    Hash {
        /// Input files (raw intensity dumps, or base64 text with --base64)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Grid edge length the dumps were decoded at
        #[arg(short, long, default_value = "8")]
        size: usize,

        /// Color mode the dumps were decoded in
        #[arg(short, long, default_value = "monochrome")]
        mode: Mode,

        /// Treat each input as base64 text instead of raw bytes
        #[arg(long)]
        base64: bool,

        /// Directory to write .hash blobs into (defaults to next to each input)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        output: OutputFormat,
    },

    /// Compare two stored hashes
    Compare {
        /// First hash blob
        a: PathBuf,

        /// Second hash blob
        b: PathBuf,

        /// Distance metric to use
        #[arg(short, long, default_value = "detailed")]
        metric: Metric,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        output: OutputFormat,
    },

    /// Find matching pairs among stored hashes
    Pairs {
        /// Hash blobs to compare pairwise
        #[arg(required = true)]
        hashes: Vec<PathBuf>,

        /// Distance metric to use
        #[arg(short, long, default_value = "detailed")]
        metric: Metric,

        /// Minimum similarity score to report (0-100)
        #[arg(long, default_value = "95.0")]
        min_score: f64,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        output: OutputFormat,
    },

    /// Show the contents of a stored hash blob
    Inspect {
        /// Hash blob to inspect
        hash_file: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        output: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Bilevel black-and-white, 1 channel
    Monochrome,
    /// Grayscale brightness, 1 channel
    Grayscale,
    /// Full color, 3 channels
    Color,
}

impl From<Mode> for ColorMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Monochrome => ColorMode::Monochrome,
            Mode::Grayscale => ColorMode::Grayscale,
            Mode::Color => ColorMode::Color,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Metric {
    /// Whole-byte equality scan, fast and coarse
    Coarse,
    /// Byte-magnitude grading (default)
    Detailed,
}

impl From<Metric> for DistanceMetric {
    fn from(metric: Metric) -> Self {
        match metric {
            Metric::Coarse => DistanceMetric::Coarse,
            Metric::Detailed => DistanceMetric::Detailed,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Pretty,
    /// JSON output for scripting
    Json,
    /// Minimal output (bare values)
    Minimal,
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Hash {
            inputs,
            size,
            mode,
            base64,
            out_dir,
            output,
        } => run_hash(inputs, size, mode.into(), base64, out_dir, output),
        Commands::Compare { a, b, metric, output } => run_compare(&a, &b, metric.into(), output),
        Commands::Pairs {
            hashes,
            metric,
            min_score,
            output,
        } => run_pairs(hashes, metric.into(), min_score, output),
        Commands::Inspect { hash_file, output } => run_inspect(&hash_file, output),
    }
}

fn run_hash(
    inputs: Vec<PathBuf>,
    size: usize,
    mode: ColorMode,
    base64: bool,
    out_dir: Option<PathBuf>,
    output: OutputFormat,
) -> Result<()> {
    let term = Term::stderr();

    if matches!(output, OutputFormat::Pretty) {
        term.write_line(&format!(
            "{} {} inputs, {}x{} {}",
            style("Hashing").bold().cyan(),
            inputs.len(),
            size,
            size,
            mode
        ))
        .ok();
    }

    let pipeline = HashPipeline::builder().edge(size).mode(mode).build();

    let progress = if matches!(output, OutputFormat::Pretty) && inputs.len() > 1 {
        let pb = ProgressBar::new(inputs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("█▓░"),
        );
        Some(pb)
    } else {
        None
    };

    // Independent inputs hash in parallel; each pipeline run is pure
    let results: Vec<(PathBuf, Result<PathBuf>)> = inputs
        .par_iter()
        .map(|input| {
            let outcome = hash_one(&pipeline, input, base64, out_dir.as_deref());
            if let Some(pb) = &progress {
                pb.inc(1);
            }
            (input.clone(), outcome)
        })
        .collect();

    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    let mut written = Vec::new();
    let mut failures = Vec::new();
    for (input, outcome) in results {
        match outcome {
            Ok(path) => written.push((input, path)),
            Err(e) => failures.push((input, e)),
        }
    }

    match output {
        OutputFormat::Pretty => {
            for (input, path) in &written {
                term.write_line(&format!(
                    "  {} {} -> {}",
                    style("✓").green(),
                    input.display(),
                    path.display()
                ))
                .ok();
            }
            for (input, error) in &failures {
                term.write_line(&format!(
                    "  {} {}: {}",
                    style("✗").red(),
                    input.display(),
                    error
                ))
                .ok();
            }
            term.write_line(&format!(
                "\n{} hashed, {} failed",
                style(written.len()).cyan(),
                style(failures.len()).yellow()
            ))
            .ok();
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "hashed": written.iter().map(|(input, path)| {
                    serde_json::json!({ "input": input, "hash_file": path })
                }).collect::<Vec<_>>(),
                "errors": failures.iter().map(|(input, error)| {
                    serde_json::json!({ "input": input, "message": error.to_string() })
                }).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&json).unwrap());
        }
        OutputFormat::Minimal => {
            for (_, path) in &written {
                println!("{}", path.display());
            }
        }
    }

    match failures.into_iter().next() {
        Some((_, first)) => Err(first),
        None => Ok(()),
    }
}

fn hash_one(
    pipeline: &HashPipeline,
    input: &Path,
    base64: bool,
    out_dir: Option<&Path>,
) -> Result<PathBuf> {
    let hash = if base64 {
        let text = std::fs::read_to_string(input).map_err(|source| FingerprintError::Io {
            path: input.to_path_buf(),
            source,
        })?;
        pipeline.hash_source(&Base64Source::new(text))?
    } else {
        pipeline.hash_source(&FileSource::new(input))?
    };

    let out_path = match out_dir {
        Some(dir) => {
            let stem = input.file_stem().unwrap_or_default();
            dir.join(stem).with_extension("hash")
        }
        None => input.with_extension("hash"),
    };

    std::fs::write(&out_path, hash.as_bytes()).map_err(|source| FingerprintError::Io {
        path: out_path.clone(),
        source,
    })?;

    Ok(out_path)
}

fn run_compare(a: &Path, b: &Path, metric: DistanceMetric, output: OutputFormat) -> Result<()> {
    let hash_a = load_hash(a)?;
    let hash_b = load_hash(b)?;

    let score = metric.compare(&hash_a, &hash_b).map_err(FingerprintError::from)?;

    match output {
        OutputFormat::Pretty => {
            let term = Term::stderr();
            term.write_line(&format!(
                "{} {} vs {}",
                style("Compared").bold().cyan(),
                a.display(),
                b.display()
            ))
            .ok();
            term.write_line(&format!(
                "  metric: {} | mode: {}",
                metric,
                hash_a.mode()
            ))
            .ok();
            println!("{}", style(format!("{} / 100", score)).green().bold());
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "a": a,
                "b": b,
                "metric": metric.to_string(),
                "mode": hash_a.mode().to_string(),
                "score": score.value(),
            });
            println!("{}", serde_json::to_string_pretty(&json).unwrap());
        }
        OutputFormat::Minimal => println!("{}", score),
    }

    Ok(())
}

fn run_pairs(
    hashes: Vec<PathBuf>,
    metric: DistanceMetric,
    min_score: f64,
    output: OutputFormat,
) -> Result<()> {
    let mut entries = Vec::with_capacity(hashes.len());
    for path in &hashes {
        let label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        entries.push((label, load_hash(path)?));
    }

    let strategy = ScoreThreshold::new(min_score);
    let matches =
        find_matching_pairs(&entries, metric, &strategy).map_err(FingerprintError::from)?;

    match output {
        OutputFormat::Pretty => print_pretty_pairs(&matches, entries.len(), metric),
        OutputFormat::Json => print_json_pairs(&matches, entries.len(), metric, min_score),
        OutputFormat::Minimal => {
            for result in &matches {
                println!("{}\t{}\t{}", result.left, result.right, result.score);
            }
        }
    }

    Ok(())
}

fn print_pretty_pairs(matches: &[MatchResult], total: usize, metric: DistanceMetric) {
    let term = Term::stderr();

    term.write_line(&format!(
        "{} {} hashes compared pairwise ({} metric)",
        style("✓").green().bold(),
        style(total).cyan(),
        metric
    ))
    .ok();
    term.write_line("").ok();

    if matches.is_empty() {
        term.write_line("  No matching pairs found").ok();
        return;
    }

    for result in matches {
        term.write_line(&format!(
            "  {} {} ↔ {} ({})",
            style(format!("{:>6}", result.score.to_string())).yellow(),
            result.left,
            result.right,
            style(result.match_type).dim()
        ))
        .ok();
    }

    term.write_line("").ok();
    term.write_line(&format!(
        "{} matching pairs",
        style(matches.len()).cyan()
    ))
    .ok();
}

fn print_json_pairs(matches: &[MatchResult], total: usize, metric: DistanceMetric, min_score: f64) {
    let json = serde_json::json!({
        "total_hashes": total,
        "metric": metric.to_string(),
        "min_score": min_score,
        "matches": matches,
    });
    println!("{}", serde_json::to_string_pretty(&json).unwrap());
}

fn run_inspect(hash_file: &Path, output: OutputFormat) -> Result<()> {
    let hash = load_hash(hash_file)?;
    let edge = inferred_edge(&hash);

    match output {
        OutputFormat::Pretty => {
            let term = Term::stderr();
            term.write_line(&format!(
                "{} {}",
                style("Hash").bold().cyan(),
                hash_file.display()
            ))
            .ok();
            term.write_line(&format!(
                "  mode:        {} (discriminator {:#06x})",
                hash.mode(),
                hash.discriminator()
            ))
            .ok();
            term.write_line(&format!("  description: {}", hash.mode().description()))
                .ok();
            term.write_line(&format!(
                "  payload:     {} bytes ({} bits)",
                hash.payload().len(),
                hash.bit_count()
            ))
            .ok();
            match edge {
                Some(edge) => {
                    term.write_line(&format!("  grid edge:   {} (inferred)", edge)).ok();
                }
                None => {
                    term.write_line("  grid edge:   not inferable from payload length").ok();
                }
            }
            println!("{}", hash.to_hex());
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "file": hash_file,
                "mode": hash.mode().to_string(),
                "discriminator": hash.discriminator(),
                "payload_bytes": hash.payload().len(),
                "payload_bits": hash.bit_count(),
                "inferred_edge": edge,
                "hex": hash.to_hex(),
            });
            println!("{}", serde_json::to_string_pretty(&json).unwrap());
        }
        OutputFormat::Minimal => println!("{}", hash.to_hex()),
    }

    Ok(())
}

/// Smallest grid edge whose bit count packs into exactly this payload.
///
/// Padding makes several edges share a payload length, so this is a
/// best-effort hint, not part of the wire format.
fn inferred_edge(hash: &ImageHash) -> Option<usize> {
    let channels = hash.mode().channels();
    (4..=1024).find(|edge| (edge * edge * channels).div_ceil(8) == hash.payload().len())
}

fn load_hash(path: &Path) -> Result<ImageHash> {
    let bytes = std::fs::read(path).map_err(|source| FingerprintError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ImageHash::from_bytes(bytes).map_err(FingerprintError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_arguments_map_onto_library_modes() {
        assert_eq!(ColorMode::from(Mode::Monochrome), ColorMode::Monochrome);
        assert_eq!(ColorMode::from(Mode::Grayscale), ColorMode::Grayscale);
        assert_eq!(ColorMode::from(Mode::Color), ColorMode::Color);
    }

    #[test]
    fn metric_arguments_map_onto_library_metrics() {
        assert_eq!(DistanceMetric::from(Metric::Coarse), DistanceMetric::Coarse);
        assert_eq!(DistanceMetric::from(Metric::Detailed), DistanceMetric::Detailed);
    }

    #[test]
    fn inferred_edge_finds_exact_geometries() {
        // 8x8 monochrome: 64 bits -> 8 bytes
        let hash = ImageHash::new(ColorMode::Monochrome, vec![0; 8]);
        assert_eq!(inferred_edge(&hash), Some(8));

        // 4x4 color: 48 bits -> 6 bytes
        let hash = ImageHash::new(ColorMode::Color, vec![0; 6]);
        assert_eq!(inferred_edge(&hash), Some(4));

        // 7 bytes fits no square monochrome grid
        let hash = ImageHash::new(ColorMode::Monochrome, vec![0; 7]);
        assert_eq!(inferred_edge(&hash), None);
    }
}

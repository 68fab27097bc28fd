use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;

/// Argus distance-based outlier detector.
#[derive(Parser)]
#[command(
    name = "argus",
    version,
    about = "Distance-based outlier detection for large fixed-schema datasets"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Rank the records of a binary record file by outlier score.
    Detect(DetectArgs),
    /// Print a record file's header and field descriptors.
    Inspect(InspectArgs),
}

/// Distance metric selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricArg {
    /// Weighted squared dissimilarity.
    #[default]
    Squared,
    /// Square root of the weighted squared dissimilarity.
    Rooted,
}

/// Score aggregation selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreArg {
    /// Arithmetic mean of the k neighbor distances.
    #[default]
    Average,
    /// Sum of the k neighbor distances.
    Sum,
    /// The k-th-nearest distance (the largest tracked one).
    Kth,
}

/// Arguments for the `detect` subcommand.
#[derive(clap::Args)]
pub struct DetectArgs {
    /// Path to the binary record file holding the case records.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Reference record file; defaults to the input file.
    #[arg(long)]
    pub references: Option<PathBuf>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of nearest neighbors per score.
    #[arg(short)]
    pub k: Option<usize>,

    /// Case records processed per reference scan.
    #[arg(long = "batch-size")]
    pub batch_size: Option<usize>,

    /// Number of top outliers to report.
    #[arg(short = 'n', long = "outliers")]
    pub n_outliers: Option<usize>,

    /// Initial score cutoff for pruning.
    #[arg(long)]
    pub cutoff: Option<f64>,

    /// Distance metric.
    #[arg(long, value_enum)]
    pub metric: Option<MetricArg>,

    /// Score aggregation.
    #[arg(long, value_enum)]
    pub score: Option<ScoreArg>,

    /// Report every scored record instead of the top N.
    #[arg(long = "return-all")]
    pub return_all: bool,

    /// Write the ranked "id, score" lines here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `inspect` subcommand.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the binary record file to inspect.
    #[arg(short, long)]
    pub input: PathBuf,
}

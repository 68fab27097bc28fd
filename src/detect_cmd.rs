use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use tracing::info;

use argus_engine::{
    Average, Detector, DetectorConfig, DistanceMetric, KthNeighbor, OutlierReport, RootedDistance,
    ScoreFunction, SquaredDistance, Sum,
};
use argus_record::FileSource;

use crate::cli::{DetectArgs, MetricArg, ScoreArg};
use crate::config::{ArgusConfig, DetectToml};

/// Run outlier detection over a record file.
pub fn run(args: DetectArgs) -> Result<()> {
    let file_config = match &args.config {
        Some(path) => crate::config::load(path)?,
        None => ArgusConfig::default(),
    };
    let defaults: DetectToml = file_config.detect;

    // CLI flags override the config file, which overrides built-ins.
    let k = args.k.unwrap_or(defaults.k);
    let batch_size = args.batch_size.unwrap_or(defaults.batch_size);
    let n_outliers = args.n_outliers.unwrap_or(defaults.n_outliers);
    let cutoff = args.cutoff.unwrap_or(defaults.cutoff);
    let metric = args.metric.unwrap_or(defaults.metric);
    let score = args.score.unwrap_or(defaults.score);
    let return_all = args.return_all || defaults.return_all;

    let config = DetectorConfig::new(k)
        .with_batch_size(batch_size)
        .with_n_outliers(n_outliers)
        .with_cutoff(cutoff)
        .with_return_all(return_all);

    let cases = FileSource::open(&args.input)
        .with_context(|| format!("failed to open case file: {}", args.input.display()))?;
    let reference_path = args.references.as_ref().unwrap_or(&args.input);
    let mut references = FileSource::open(reference_path)
        .with_context(|| format!("failed to open reference file: {}", reference_path.display()))?;

    info!(
        input = %args.input.display(),
        references = %reference_path.display(),
        k,
        batch_size,
        n_outliers,
        "running detection"
    );

    let report = match (metric, score) {
        (MetricArg::Squared, ScoreArg::Average) => {
            detect_with(config, SquaredDistance, Average, cases, &mut references)?
        }
        (MetricArg::Squared, ScoreArg::Sum) => {
            detect_with(config, SquaredDistance, Sum, cases, &mut references)?
        }
        (MetricArg::Squared, ScoreArg::Kth) => {
            detect_with(config, SquaredDistance, KthNeighbor, cases, &mut references)?
        }
        (MetricArg::Rooted, ScoreArg::Average) => {
            detect_with(config, RootedDistance, Average, cases, &mut references)?
        }
        (MetricArg::Rooted, ScoreArg::Sum) => {
            detect_with(config, RootedDistance, Sum, cases, &mut references)?
        }
        (MetricArg::Rooted, ScoreArg::Kth) => {
            detect_with(config, RootedDistance, KthNeighbor, cases, &mut references)?
        }
    };

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("failed to create output file: {}", path.display())
        })?)),
        None => Box::new(io::stdout().lock()),
    };
    for outlier in report.outliers() {
        writeln!(out, "{}, {}", outlier.id(), outlier.score())?;
    }
    out.flush()?;

    info!(
        outliers = report.outliers().len(),
        pruned = report.pruned(),
        cases = report.cases_seen(),
        "detection finished"
    );
    Ok(())
}

fn detect_with<D: DistanceMetric, S: ScoreFunction>(
    config: DetectorConfig,
    metric: D,
    score: S,
    cases: FileSource,
    references: &mut FileSource,
) -> Result<OutlierReport> {
    let detector = Detector::new(config, metric, score)?;
    Ok(detector.run(cases, references)?)
}

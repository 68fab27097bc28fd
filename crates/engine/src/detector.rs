//! The batch/pruning outlier detection loop.

use std::cmp::Ordering;

use tracing::{debug, info, trace};

use argus_record::{RecordSource, Schema, Weights, WindowedReader};

use crate::candidate::Candidate;
use crate::config::DetectorConfig;
use crate::distance::DistanceMetric;
use crate::error::EngineError;
use crate::result::{Outlier, OutlierReport};
use crate::score::ScoreFunction;

/// Distance-based outlier detector.
///
/// For each batch of case records the full reference collection is
/// re-scanned; every still-active candidate tracks its k smallest
/// reference distances in a bounded heap and is pruned permanently the
/// moment its provisional score falls to or below the global cutoff.
/// Survivors of a batch are merged into the global top-N list, whose Nth
/// score raises the cutoff for all later batches — the cutoff never
/// decreases within a run.
///
/// Memory is bounded by `O(batch_size × k)`; the reference source is
/// streamed, never buffered, and must therefore support a cheap
/// [`reset`](RecordSource::reset) (it is rewound once per batch).
#[derive(Debug)]
pub struct Detector<D, S> {
    config: DetectorConfig,
    metric: D,
    score: S,
}

impl<D: DistanceMetric, S: ScoreFunction> Detector<D, S> {
    /// Creates a detector, validating the configuration eagerly.
    ///
    /// # Errors
    ///
    /// Returns a configuration [`EngineError`] for out-of-range
    /// parameters; nothing is clamped.
    pub fn new(config: DetectorConfig, metric: D, score: S) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            config,
            metric,
            score,
        })
    }

    /// The validated configuration.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Scores every case record against the reference collection and
    /// returns the ranked outliers.
    ///
    /// Self-exclusion is positional: a candidate is never compared
    /// against the reference record at its own absolute position, so case
    /// and reference sources covering the same underlying dataset never
    /// score a record against itself.
    ///
    /// # Errors
    ///
    /// Weight/schema misalignment fails before any comparison; record
    /// source errors propagate unmodified and abort the run.
    pub fn run<C, R>(&self, cases: C, references: &mut R) -> Result<OutlierReport, EngineError>
    where
        C: RecordSource,
        R: RecordSource,
    {
        validate_alignment(cases.schema(), references.schema(), cases.weights())?;
        let weights = cases.weights().clone();

        info!(
            k = self.config.k(),
            batch_size = self.config.batch_size(),
            n_outliers = self.config.n_outliers(),
            cutoff = self.config.cutoff(),
            reference_len = references.len(),
            "starting detection run"
        );

        let mut cases = WindowedReader::new(cases);
        let mut outliers: Vec<Outlier> = Vec::new();
        let mut cutoff = self.config.cutoff();
        let mut cases_seen = 0usize;
        let mut pruned_total = 0usize;
        let mut batch_index = 0usize;

        loop {
            let batch = cases.next_batch(self.config.batch_size())?;
            if batch.is_empty() {
                break;
            }
            let offset = cases.offset();
            let batch_len = batch.len();
            cases_seen += batch_len;

            let mut active: Vec<Candidate> = batch
                .into_iter()
                .enumerate()
                .map(|(i, record)| Candidate::new(record, offset + i, self.config.k()))
                .collect::<Result<_, _>>()?;

            references.reset()?;
            let mut ref_pos = 0usize;
            while let Some(reference) = references.next_record()? {
                let p = ref_pos;
                ref_pos += 1;

                let mut i = 0;
                while i < active.len() {
                    if active[i].position() == p {
                        i += 1;
                        continue;
                    }
                    let d = self
                        .metric
                        .distance(active[i].record(), &reference, &weights);
                    if active[i].observe(d)? {
                        let provisional = self.score.score(active[i].distances());
                        if provisional <= cutoff {
                            trace!(
                                id = active[i].record().id(),
                                provisional,
                                cutoff,
                                "pruned candidate"
                            );
                            active.swap_remove(i);
                            pruned_total += 1;
                            continue;
                        }
                    }
                    i += 1;
                }
                // Nothing left to score: the rest of the reference scan
                // cannot change the outcome.
                if active.is_empty() {
                    break;
                }
            }

            let survivors = active.len();
            for candidate in active {
                let score = self.score.score(candidate.distances());
                outliers.push(Outlier::new(candidate.record().id(), score));
            }

            // Stable sort: ties keep encounter order.
            outliers.sort_by(|a, b| b.score().partial_cmp(&a.score()).unwrap_or(Ordering::Equal));
            if !self.config.return_all() && outliers.len() > self.config.n_outliers() {
                outliers.truncate(self.config.n_outliers());
                let nth = outliers[outliers.len() - 1].score();
                if nth > cutoff {
                    cutoff = nth;
                }
            }

            debug!(
                batch = batch_index,
                size = batch_len,
                survivors,
                pruned = batch_len - survivors,
                cutoff,
                "batch complete"
            );
            batch_index += 1;
        }

        info!(
            outliers = outliers.len(),
            cutoff,
            cases = cases_seen,
            pruned = pruned_total,
            "detection run complete"
        );
        Ok(OutlierReport::new(outliers, cutoff, cases_seen, pruned_total))
    }
}

/// Checks case/reference schema agreement and weight-vector lengths.
fn validate_alignment(
    case_schema: &Schema,
    reference_schema: &Schema,
    weights: &Weights,
) -> Result<(), EngineError> {
    if case_schema.real_count() != reference_schema.real_count() {
        return Err(EngineError::SchemaMismatch {
            which: "real",
            case: case_schema.real_count(),
            reference: reference_schema.real_count(),
        });
    }
    if case_schema.discrete_count() != reference_schema.discrete_count() {
        return Err(EngineError::SchemaMismatch {
            which: "discrete",
            case: case_schema.discrete_count(),
            reference: reference_schema.discrete_count(),
        });
    }
    if weights.real().len() != case_schema.real_count() {
        return Err(EngineError::WeightsMismatch {
            which: "real",
            weights: weights.real().len(),
            fields: case_schema.real_count(),
        });
    }
    if weights.discrete().len() != case_schema.discrete_count() {
        return Err(EngineError::WeightsMismatch {
            which: "discrete",
            weights: weights.discrete().len(),
            fields: case_schema.discrete_count(),
        });
    }
    Ok(())
}

//! Error types for the argus-engine crate.

use argus_record::RecordError;
use argus_topk::TopKError;

/// Error type for all fallible operations in the argus-engine crate.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Returned when the neighbor count k is zero.
    #[error("k must be >= 1, got {k}")]
    InvalidK {
        /// The invalid k value.
        k: usize,
    },

    /// Returned when the batch size is zero.
    #[error("batch size must be >= 1, got {batch_size}")]
    InvalidBatchSize {
        /// The invalid batch size.
        batch_size: usize,
    },

    /// Returned when the requested outlier count is zero.
    #[error("outlier count must be >= 1, got {n}")]
    InvalidOutlierCount {
        /// The invalid outlier count.
        n: usize,
    },

    /// Returned when the initial cutoff is negative or non-finite.
    #[error("cutoff must be finite and >= 0, got {cutoff}")]
    InvalidCutoff {
        /// The invalid cutoff value.
        cutoff: f64,
    },

    /// Returned when a weight vector length disagrees with the schema.
    #[error("{which} weights length {weights} does not match {fields} fields")]
    WeightsMismatch {
        /// Which field family mismatched ("real" or "discrete").
        which: &'static str,
        /// Length of the weight vector.
        weights: usize,
        /// Number of fields in the schema.
        fields: usize,
    },

    /// Returned when the case and reference schemas disagree.
    #[error("case/reference schema mismatch: {which} field counts {case} vs {reference}")]
    SchemaMismatch {
        /// Which field family mismatched ("real" or "discrete").
        which: &'static str,
        /// Field count on the case side.
        case: usize,
        /// Field count on the reference side.
        reference: usize,
    },

    /// A record source failed; the underlying error is propagated
    /// unmodified so the run aborts instead of scoring corrupt data.
    #[error(transparent)]
    Record(#[from] RecordError),

    /// The bounded heap reported an impossible state. Indicates a logic
    /// error in the engine, not a recoverable condition.
    #[error("internal state error: {source}")]
    Internal {
        /// The underlying container error.
        #[from]
        source: TopKError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_k() {
        let e = EngineError::InvalidK { k: 0 };
        assert_eq!(e.to_string(), "k must be >= 1, got 0");
    }

    #[test]
    fn display_invalid_batch_size() {
        let e = EngineError::InvalidBatchSize { batch_size: 0 };
        assert_eq!(e.to_string(), "batch size must be >= 1, got 0");
    }

    #[test]
    fn display_invalid_cutoff() {
        let e = EngineError::InvalidCutoff { cutoff: -1.0 };
        assert_eq!(e.to_string(), "cutoff must be finite and >= 0, got -1");
    }

    #[test]
    fn display_weights_mismatch() {
        let e = EngineError::WeightsMismatch {
            which: "real",
            weights: 2,
            fields: 3,
        };
        assert_eq!(e.to_string(), "real weights length 2 does not match 3 fields");
    }

    #[test]
    fn record_error_passes_through_unmodified() {
        let inner = RecordError::PositionOutOfRange { pos: 5, len: 2 };
        let expected = inner.to_string();
        let e: EngineError = inner.into();
        assert_eq!(e.to_string(), expected);
    }

    #[test]
    fn topk_error_maps_to_internal() {
        let e: EngineError = TopKError::Empty.into();
        assert!(matches!(e, EngineError::Internal { .. }));
        assert!(e.to_string().contains("internal state error"));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<EngineError>();
    }
}

//! Configuration for an outlier detection run.

use crate::error::EngineError;

/// Configuration for one detection run.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use argus_engine::DetectorConfig;
///
/// let config = DetectorConfig::new(5)
///     .with_batch_size(500)
///     .with_n_outliers(10);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Number of nearest neighbors aggregated into a score.
    k: usize,
    /// Number of case records processed per reference scan.
    batch_size: usize,
    /// Number of top outliers to return.
    n_outliers: usize,
    /// Initial score cutoff; candidates at or below it are pruned.
    cutoff: f64,
    /// When set, return every scored record instead of the top N.
    return_all: bool,
}

impl DetectorConfig {
    /// Creates a new configuration with the given k.
    ///
    /// Defaults: `batch_size = 1000`, `n_outliers = 30`, `cutoff = 0.0`,
    /// `return_all = false`.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            batch_size: 1000,
            n_outliers: 30,
            cutoff: 0.0,
            return_all: false,
        }
    }

    /// Sets the number of case records per batch.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Sets the number of top outliers to return.
    pub fn with_n_outliers(mut self, n: usize) -> Self {
        self.n_outliers = n;
        self
    }

    /// Sets the initial score cutoff.
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Enables or disables return-all mode.
    ///
    /// In return-all mode the result list is never truncated and the
    /// cutoff is never raised; pruning still applies at the initial
    /// cutoff.
    pub fn with_return_all(mut self, return_all: bool) -> Self {
        self.return_all = return_all;
        self
    }

    /// Returns the neighbor count.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the batch size.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Returns the requested outlier count.
    pub fn n_outliers(&self) -> usize {
        self.n_outliers
    }

    /// Returns the initial cutoff.
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Returns whether return-all mode is enabled.
    pub fn return_all(&self) -> bool {
        self.return_all
    }

    /// Validates this configuration.
    ///
    /// Nothing is ever clamped: an out-of-range parameter fails here,
    /// before any data is read.
    ///
    /// # Errors
    ///
    /// Returns the corresponding [`EngineError`] variant when `k`,
    /// `batch_size`, or `n_outliers` is zero, or when `cutoff` is negative
    /// or non-finite.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.k < 1 {
            return Err(EngineError::InvalidK { k: self.k });
        }
        if self.batch_size < 1 {
            return Err(EngineError::InvalidBatchSize {
                batch_size: self.batch_size,
            });
        }
        if self.n_outliers < 1 {
            return Err(EngineError::InvalidOutlierCount { n: self.n_outliers });
        }
        if !self.cutoff.is_finite() || self.cutoff < 0.0 {
            return Err(EngineError::InvalidCutoff {
                cutoff: self.cutoff,
            });
        }
        Ok(())
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self::new(5)
    }
}

//! The record source contract and the in-memory implementation.

use crate::error::RecordError;
use crate::record::Record;
use crate::schema::Schema;
use crate::weights::Weights;

/// A sequential, resettable cursor over a record collection.
///
/// Iteration order is stable and repeatable: two passes separated by a
/// [`reset`](RecordSource::reset) yield identical record sequences. The
/// engine re-scans a reference source once per case batch, so `reset` must
/// be cheap (backed by random-access storage, not a re-parse).
pub trait RecordSource {
    /// Pulls the next record, or `None` at end of data.
    fn next_record(&mut self) -> Result<Option<Record>, RecordError>;

    /// Rewinds the cursor to the first record.
    fn reset(&mut self) -> Result<(), RecordError>;

    /// The dataset schema.
    fn schema(&self) -> &Schema;

    /// Per-field distance weights for this dataset.
    fn weights(&self) -> &Weights;

    /// Total number of records in the collection.
    fn len(&self) -> usize;

    /// Zero-based position of the next record to be pulled.
    fn position(&self) -> usize;

    /// True once every record has been pulled since the last reset.
    fn end_of_data(&self) -> bool {
        self.position() >= self.len()
    }

    /// True when the collection holds no records at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Vec-backed record source for library callers and tests.
///
/// Weights are derived from the schema's field descriptors.
#[derive(Debug, Clone)]
pub struct MemorySource {
    schema: Schema,
    weights: Weights,
    records: Vec<Record>,
    pos: usize,
}

impl MemorySource {
    /// Creates a source over `records`, validating every record's shape
    /// against `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::RecordShapeMismatch`] for the first record
    /// whose field counts disagree with the schema.
    pub fn new(schema: Schema, records: Vec<Record>) -> Result<Self, RecordError> {
        for (index, record) in records.iter().enumerate() {
            if record.reals().len() != schema.real_count() {
                return Err(RecordError::RecordShapeMismatch {
                    index,
                    which: "real",
                    expected: schema.real_count(),
                    got: record.reals().len(),
                });
            }
            if record.discretes().len() != schema.discrete_count() {
                return Err(RecordError::RecordShapeMismatch {
                    index,
                    which: "discrete",
                    expected: schema.discrete_count(),
                    got: record.discretes().len(),
                });
            }
        }
        let weights = schema.weights();
        Ok(Self {
            schema,
            weights,
            records,
            pos: 0,
        })
    }
}

impl RecordSource for MemorySource {
    fn next_record(&mut self) -> Result<Option<Record>, RecordError> {
        match self.records.get(self.pos) {
            Some(record) => {
                self.pos += 1;
                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }

    fn reset(&mut self) -> Result<(), RecordError> {
        self.pos = 0;
        Ok(())
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn weights(&self) -> &Weights {
        &self.weights
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn position(&self) -> usize {
        self.pos
    }
}

//! Per-batch candidate bookkeeping.

use argus_record::Record;
use argus_topk::{NeighborHeap, TopKError};

/// One case record being scored against the reference scan.
///
/// Pairs the record with its bounded neighbor heap and its absolute
/// position in the underlying dataset (batch offset + index within the
/// batch), which the engine uses for self-exclusion. Candidates live in a
/// single owned collection; pruning removes the whole struct by
/// swap-remove.
#[derive(Debug)]
pub(crate) struct Candidate {
    record: Record,
    heap: NeighborHeap,
    position: usize,
}

impl Candidate {
    /// Creates a candidate with a sentinel-filled heap of capacity `k`.
    pub(crate) fn new(record: Record, position: usize, k: usize) -> Result<Self, TopKError> {
        Ok(Self {
            record,
            heap: NeighborHeap::new(k)?,
            position,
        })
    }

    /// The case record.
    pub(crate) fn record(&self) -> &Record {
        &self.record
    }

    /// Absolute position of this record in the underlying dataset.
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    /// Offers a new reference distance.
    ///
    /// Accepts it only when it beats the current k-th-nearest bound, in
    /// which case the bound's holder is evicted. Returns whether the heap
    /// changed; an accepted distance can only lower (or hold) the score.
    pub(crate) fn observe(&mut self, distance: f64) -> Result<bool, TopKError> {
        if distance < self.heap.peek()? {
            self.heap.push(distance);
            self.heap.pop()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// The tracked distances, heap order.
    pub(crate) fn distances(&self) -> &[f64] {
        self.heap.values()
    }
}

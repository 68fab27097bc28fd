//! Fixed-capacity max-heap over observed neighbor distances.

use crate::error::TopKError;

/// Placeholder distance a fresh heap is filled with before any real
/// distance is observed. Always larger than any genuine distance, so the
/// first k observations displace it.
pub const SENTINEL_DISTANCE: f64 = f64::MAX;

/// Binary max-heap tracking the k smallest distances seen for one candidate.
///
/// Constructed pre-filled with k [`SENTINEL_DISTANCE`] entries. The root
/// ([`peek`](NeighborHeap::peek)) is the current k-th-nearest upper bound.
/// Callers insert a better distance with `push` immediately followed by
/// `pop`, which evicts the current maximum and restores size k.
///
/// Heap arithmetic is 1-indexed: `parent(i) = i / 2`, children at `2i` and
/// `2i + 1`, mapped onto the backing `Vec` with an offset of one.
#[derive(Debug, Clone)]
pub struct NeighborHeap {
    items: Vec<f64>,
}

impl NeighborHeap {
    /// Creates a heap of capacity `k`, pre-filled with k sentinel distances.
    ///
    /// # Errors
    ///
    /// Returns [`TopKError::InvalidCapacity`] if `k` is zero.
    pub fn new(k: usize) -> Result<Self, TopKError> {
        if k == 0 {
            return Err(TopKError::InvalidCapacity { capacity: k });
        }
        Ok(Self {
            items: vec![SENTINEL_DISTANCE; k],
        })
    }

    /// Number of distances currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when the heap holds no distances.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the largest held distance without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`TopKError::Empty`] if the heap is empty.
    pub fn peek(&self) -> Result<f64, TopKError> {
        self.items.first().copied().ok_or(TopKError::Empty)
    }

    /// Inserts `value`, growing the heap by one (temporarily k + 1).
    ///
    /// O(log k). Pair with [`pop`](NeighborHeap::pop) to evict the current
    /// maximum and restore size k.
    pub fn push(&mut self, value: f64) {
        self.items.push(value);
        self.sift_up(self.items.len());
    }

    /// Removes and returns the largest held distance.
    ///
    /// O(log k).
    ///
    /// # Errors
    ///
    /// Returns [`TopKError::Empty`] if the heap is empty.
    pub fn pop(&mut self) -> Result<f64, TopKError> {
        if self.items.is_empty() {
            return Err(TopKError::Empty);
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let max = self.items.pop().ok_or(TopKError::Empty)?;
        if !self.items.is_empty() {
            self.sift_down(1);
        }
        Ok(max)
    }

    /// Held distances in heap/array order.
    ///
    /// NOT sorted: only the first element (the maximum) has a guaranteed
    /// position. Aggregate over the whole slice, never index into it.
    pub fn values(&self) -> &[f64] {
        &self.items
    }

    /// Restores the heap invariant upward from 1-indexed position `i`.
    fn sift_up(&mut self, mut i: usize) {
        while i > 1 {
            let parent = i / 2;
            if self.items[i - 1] > self.items[parent - 1] {
                self.items.swap(i - 1, parent - 1);
                i = parent;
            } else {
                break;
            }
        }
    }

    /// Restores the heap invariant downward from 1-indexed position `i`.
    fn sift_down(&mut self, mut i: usize) {
        let n = self.items.len();
        loop {
            let left = 2 * i;
            let right = 2 * i + 1;
            let mut largest = i;
            if left <= n && self.items[left - 1] > self.items[largest - 1] {
                largest = left;
            }
            if right <= n && self.items[right - 1] > self.items[largest - 1] {
                largest = right;
            }
            if largest == i {
                break;
            }
            self.items.swap(i - 1, largest - 1);
            i = largest;
        }
    }
}

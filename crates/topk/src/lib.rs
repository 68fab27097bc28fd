//! Bounded top-k distance tracking.
//!
//! This crate provides [`NeighborHeap`], a fixed-capacity binary max-heap
//! that tracks the k smallest distances observed for one candidate record.
//! The container is pre-filled with k sentinel maximum distances, so the
//! root is always an upper bound on the k-th-nearest distance seen so far:
//! a new distance only matters when it beats the root.
//!
//! # Quick start
//!
//! ```
//! use argus_topk::NeighborHeap;
//!
//! let mut heap = NeighborHeap::new(2).unwrap();
//! for d in [9.0, 4.0, 1.0] {
//!     if d < heap.peek().unwrap() {
//!         heap.push(d);
//!         heap.pop().unwrap();
//!     }
//! }
//! // The two smallest distances survive.
//! let mut held = heap.values().to_vec();
//! held.sort_by(f64::total_cmp);
//! assert_eq!(held, vec![1.0, 4.0]);
//! ```
//!
//! Enumeration via [`NeighborHeap::values`] is heap/array order, not sorted
//! order; callers aggregating the held distances must not rely on position.

pub mod error;
pub mod heap;

pub use error::TopKError;
pub use heap::{NeighborHeap, SENTINEL_DISTANCE};

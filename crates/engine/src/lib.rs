//! Batch/pruning distance-based outlier scoring.
//!
//! The engine ranks "case" records by how far they sit from a reference
//! population: each case's score aggregates the distances to its k nearest
//! reference records, approximated in bounded memory by streaming the
//! reference set once per case batch and discarding ("pruning") cases
//! whose provisional score already falls at or below the global cutoff.
//!
//! # Quick start
//!
//! ```
//! use argus_engine::{Average, Detector, DetectorConfig, SquaredDistance};
//! use argus_record::{FieldDescriptor, MemorySource, Record, Schema};
//!
//! let schema = Schema::new(vec![FieldDescriptor::continuous("x", 1.0)]);
//! let records: Vec<Record> = [1.0, 2.0, 3.0, 4.0, 100.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &v)| Record::new(i as i32, vec![v], vec![]))
//!     .collect();
//!
//! let cases = MemorySource::new(schema.clone(), records.clone()).unwrap();
//! let mut references = MemorySource::new(schema, records).unwrap();
//!
//! let config = DetectorConfig::new(2).with_n_outliers(1);
//! let detector = Detector::new(config, SquaredDistance, Average).unwrap();
//! let report = detector.run(cases, &mut references).unwrap();
//!
//! assert_eq!(report.outliers()[0].id(), 4); // the record with value 100
//! ```
//!
//! # Architecture
//!
//! ```text
//! Detector::run()
//!   ├─ validate weights against both schemas
//!   ├─ WindowedReader::next_batch()          (argus-record)
//!   ├─ per-batch Candidate bookkeeping        (candidate.rs)
//!   │    └─ NeighborHeap per candidate        (argus-topk)
//!   ├─ DistanceMetric over reference scan     (distance.rs)
//!   ├─ ScoreFunction per candidate            (score.rs)
//!   └─ top-N merge + cutoff raise             (detector.rs)
//! ```
//!
//! Memory stays `O(batch_size × k)` regardless of reference set size; the
//! reference source is only ever streamed, never buffered.

pub mod config;
pub mod detector;
pub mod distance;
pub mod error;
pub mod result;
pub mod score;

pub(crate) mod candidate;

pub use config::DetectorConfig;
pub use detector::Detector;
pub use distance::{DistanceMetric, RootedDistance, SquaredDistance};
pub use error::EngineError;
pub use result::{Outlier, OutlierReport};
pub use score::{Average, KthNeighbor, ScoreFunction, Sum};

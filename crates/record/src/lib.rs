//! Record data model and streaming record sources.
//!
//! This crate owns everything the outlier engine reads: the fixed-schema
//! [`Record`] type with its real and discrete fields, the [`Schema`] /
//! [`Weights`] pair describing a dataset, the binary record-file codec
//! ([`FileSource`] / [`write_records`]), and the [`WindowedReader`] batch
//! cursor the engine pulls case records through.
//!
//! # Sources
//!
//! A [`RecordSource`] iterates records in a stable, repeatable order and
//! can be [`reset`](RecordSource::reset) to the first record cheaply. Two
//! implementations are provided:
//!
//! - [`MemorySource`] — Vec-backed, for library callers and tests.
//! - [`FileSource`] — streams the on-disk binary record format with O(1)
//!   [`seek_to`](FileSource::seek_to) thanks to the fixed record size.
//!
//! # On-disk format
//!
//! Little-endian throughout. A header (`record_count`, `real_field_count`,
//! `discrete_field_count`, `field_descriptor_count`) is followed by the
//! field descriptors and then fixed-size records: `id: i32`, the real
//! fields as `f32`, the discrete fields as `i32`. Strings are an `i32`
//! byte-length prefix plus UTF-8 bytes. Reals widen to `f64` on read;
//! `NaN` is the missing sentinel for real fields, `-1` for discrete ones.

pub mod error;
pub mod file;
pub mod record;
pub mod schema;
pub mod source;
pub mod weights;
pub mod window;
pub mod writer;

pub(crate) mod codec;

pub use error::RecordError;
pub use file::FileSource;
pub use record::{MISSING_DISCRETE, Record, is_missing_real};
pub use schema::{FieldDescriptor, FieldKind, Schema};
pub use source::{MemorySource, RecordSource};
pub use weights::Weights;
pub use window::WindowedReader;
pub use writer::write_records;

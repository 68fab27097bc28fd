//! Fixed-size batch cursor over a record source.

use crate::error::RecordError;
use crate::record::Record;
use crate::schema::Schema;
use crate::source::RecordSource;
use crate::weights::Weights;

/// Pulls a [`RecordSource`] in fixed-size chunks while tracking the
/// absolute position of the current chunk.
///
/// [`offset`](WindowedReader::offset) is the zero-based position, in the
/// underlying collection, of the first record of the batch most recently
/// returned; it accumulates by the size of each batch pulled. The engine
/// uses it to translate a within-batch index into a global dataset
/// position.
#[derive(Debug)]
pub struct WindowedReader<S> {
    source: S,
    offset: usize,
    last_len: usize,
}

impl<S: RecordSource> WindowedReader<S> {
    /// Wraps a source, starting at offset zero.
    pub fn new(source: S) -> Self {
        Self {
            source,
            offset: 0,
            last_len: 0,
        }
    }

    /// Pulls up to `batch_size` records.
    ///
    /// Returns fewer at end of data and an empty vector once the source is
    /// exhausted.
    pub fn next_batch(&mut self, batch_size: usize) -> Result<Vec<Record>, RecordError> {
        debug_assert!(batch_size >= 1);
        self.offset += self.last_len;
        let mut batch = Vec::new();
        while batch.len() < batch_size {
            match self.source.next_record()? {
                Some(record) => batch.push(record),
                None => break,
            }
        }
        self.last_len = batch.len();
        Ok(batch)
    }

    /// Absolute position of the first record in the current batch.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The underlying dataset schema.
    pub fn schema(&self) -> &Schema {
        self.source.schema()
    }

    /// The underlying per-field weights.
    pub fn weights(&self) -> &Weights {
        self.source.weights()
    }

    /// Consumes the reader, returning the wrapped source.
    pub fn into_inner(self) -> S {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldDescriptor;
    use crate::source::MemorySource;

    fn source_of(n: usize) -> MemorySource {
        let schema = Schema::new(vec![FieldDescriptor::continuous("x", 1.0)]);
        let records = (0..n)
            .map(|i| Record::new(i as i32, vec![i as f64], vec![]))
            .collect();
        MemorySource::new(schema, records).unwrap()
    }

    #[test]
    fn batches_cover_source_in_order() {
        let mut reader = WindowedReader::new(source_of(7));
        let mut ids = Vec::new();
        loop {
            let batch = reader.next_batch(3).unwrap();
            if batch.is_empty() {
                break;
            }
            ids.extend(batch.iter().map(Record::id));
        }
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn offset_tracks_first_record_of_current_batch() {
        let mut reader = WindowedReader::new(source_of(7));
        assert_eq!(reader.offset(), 0);

        let b1 = reader.next_batch(3).unwrap();
        assert_eq!(b1.len(), 3);
        assert_eq!(reader.offset(), 0);

        let b2 = reader.next_batch(3).unwrap();
        assert_eq!(b2.len(), 3);
        assert_eq!(reader.offset(), 3);

        let b3 = reader.next_batch(3).unwrap();
        assert_eq!(b3.len(), 1);
        assert_eq!(reader.offset(), 6);

        let b4 = reader.next_batch(3).unwrap();
        assert!(b4.is_empty());
        assert_eq!(reader.offset(), 7);
    }

    #[test]
    fn short_final_batch_then_empty() {
        let mut reader = WindowedReader::new(source_of(5));
        assert_eq!(reader.next_batch(4).unwrap().len(), 4);
        assert_eq!(reader.next_batch(4).unwrap().len(), 1);
        assert!(reader.next_batch(4).unwrap().is_empty());
        // Exhausted stays exhausted.
        assert!(reader.next_batch(4).unwrap().is_empty());
    }

    #[test]
    fn batch_larger_than_source_returns_everything() {
        let mut reader = WindowedReader::new(source_of(3));
        let batch = reader.next_batch(100).unwrap();
        assert_eq!(batch.len(), 3);
        assert_eq!(reader.offset(), 0);
        assert!(reader.next_batch(100).unwrap().is_empty());
    }

    #[test]
    fn empty_source_yields_empty_batch() {
        let mut reader = WindowedReader::new(source_of(0));
        assert!(reader.next_batch(10).unwrap().is_empty());
        assert_eq!(reader.offset(), 0);
    }
}

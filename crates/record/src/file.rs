//! File-backed record source over the binary record format.

use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::codec::{read_bool, read_f32, read_i32, read_string};
use crate::error::RecordError;
use crate::record::Record;
use crate::schema::{FieldDescriptor, FieldKind, Schema};
use crate::source::RecordSource;
use crate::weights::Weights;

/// Streams records from a binary record file.
///
/// The header and field descriptors are parsed once at
/// [`open`](FileSource::open); records are then read sequentially through
/// a buffered reader. Because every record occupies the same number of
/// bytes, [`reset`](RecordSource::reset) and [`seek_to`](FileSource::seek_to)
/// are single seeks:
///
/// ```text
/// byte_offset(pos) = data_start + pos × (4 + 4 × real_count + 4 × discrete_count)
/// ```
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    reader: BufReader<File>,
    schema: Schema,
    weights: Weights,
    record_count: usize,
    data_start: u64,
    record_size: u64,
    pos: usize,
}

impl FileSource {
    /// Opens a record file and parses its header and field descriptors.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::FileNotFound`] for a missing path,
    /// [`RecordError::InvalidHeader`] when the header is internally
    /// inconsistent, and the usual I/O / string errors for a corrupt file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RecordError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RecordError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let mut reader = BufReader::new(File::open(path)?);

        let record_count = read_i32(&mut reader)?;
        let real_count = read_i32(&mut reader)?;
        let discrete_count = read_i32(&mut reader)?;
        let descriptor_count = read_i32(&mut reader)?;
        for (label, value) in [
            ("record_count", record_count),
            ("real_field_count", real_count),
            ("discrete_field_count", discrete_count),
            ("field_descriptor_count", descriptor_count),
        ] {
            if value < 0 {
                return Err(RecordError::InvalidHeader {
                    reason: format!("negative {label}: {value}"),
                });
            }
        }

        let mut fields = Vec::with_capacity(descriptor_count as usize);
        for _ in 0..descriptor_count {
            fields.push(read_descriptor(&mut reader)?);
        }
        let schema = Schema::new(fields);
        if schema.real_count() != real_count as usize {
            return Err(RecordError::InvalidHeader {
                reason: format!(
                    "real_field_count {} disagrees with descriptors ({})",
                    real_count,
                    schema.real_count()
                ),
            });
        }
        if schema.discrete_count() != discrete_count as usize {
            return Err(RecordError::InvalidHeader {
                reason: format!(
                    "discrete_field_count {} disagrees with descriptors ({})",
                    discrete_count,
                    schema.discrete_count()
                ),
            });
        }

        let data_start = reader.stream_position()?;
        let record_size = 4 + 4 * (real_count as u64) + 4 * (discrete_count as u64);
        let weights = schema.weights();

        debug!(
            path = %path.display(),
            records = record_count,
            real_fields = real_count,
            discrete_fields = discrete_count,
            "opened record file"
        );

        Ok(Self {
            path: path.to_path_buf(),
            reader,
            schema,
            weights,
            record_count: record_count as usize,
            data_start,
            record_size,
            pos: 0,
        })
    }

    /// Path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Seeks directly to record position `pos` in O(1).
    ///
    /// `pos == len()` is permitted and leaves the cursor at end of data.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::PositionOutOfRange`] when `pos > len()`.
    pub fn seek_to(&mut self, pos: usize) -> Result<(), RecordError> {
        if pos > self.record_count {
            return Err(RecordError::PositionOutOfRange {
                pos,
                len: self.record_count,
            });
        }
        let byte_offset = self.data_start + (pos as u64) * self.record_size;
        self.reader.seek(SeekFrom::Start(byte_offset))?;
        self.pos = pos;
        Ok(())
    }

    fn read_record(&mut self) -> Result<Record, RecordError> {
        let id = read_i32(&mut self.reader)?;
        let mut reals = Vec::with_capacity(self.schema.real_count());
        for _ in 0..self.schema.real_count() {
            reals.push(f64::from(read_f32(&mut self.reader)?));
        }
        let mut discretes = Vec::with_capacity(self.schema.discrete_count());
        for _ in 0..self.schema.discrete_count() {
            discretes.push(read_i32(&mut self.reader)?);
        }
        Ok(Record::new(id, reals, discretes))
    }
}

fn read_descriptor(reader: &mut impl Read) -> Result<FieldDescriptor, RecordError> {
    let name = read_string(reader)?;
    let kind = FieldKind::from_code(read_i32(reader)?)?;
    let weight = read_f32(reader)?;
    let values = if read_bool(reader)? {
        let count = read_i32(reader)?;
        if count < 0 {
            return Err(RecordError::InvalidHeader {
                reason: format!("negative value_count {count} for field '{name}'"),
            });
        }
        let mut values = Vec::with_capacity(count as usize);
        for _ in 0..count {
            values.push(read_string(reader)?);
        }
        Some(values)
    } else {
        None
    };
    Ok(FieldDescriptor::new(name, kind, weight, values))
}

impl RecordSource for FileSource {
    fn next_record(&mut self) -> Result<Option<Record>, RecordError> {
        if self.pos >= self.record_count {
            return Ok(None);
        }
        let record = self.read_record()?;
        self.pos += 1;
        Ok(Some(record))
    }

    fn reset(&mut self) -> Result<(), RecordError> {
        self.reader.seek(SeekFrom::Start(self.data_start))?;
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
        self.record_count
    }

    fn position(&self) -> usize {
        self.pos
    }
}

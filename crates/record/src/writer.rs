//! Binary record file writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::codec::{write_bool, write_f32, write_i32, write_string};
use crate::error::RecordError;
use crate::record::Record;
use crate::schema::Schema;

/// Writes a complete record file: header, field descriptors, then the
/// fixed-size records.
///
/// Every record's field counts are validated against the schema before
/// any byte of it is written. Reals are narrowed `f64` → `f32`; NaN
/// (the missing sentinel) narrows to NaN.
///
/// # Errors
///
/// Returns [`RecordError::RecordShapeMismatch`] for the first record whose
/// shape disagrees with the schema, or an I/O error from the filesystem.
pub fn write_records(
    path: impl AsRef<Path>,
    schema: &Schema,
    records: &[Record],
) -> Result<(), RecordError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);

    write_i32(&mut writer, records.len() as i32)?;
    write_i32(&mut writer, schema.real_count() as i32)?;
    write_i32(&mut writer, schema.discrete_count() as i32)?;
    write_i32(&mut writer, schema.fields().len() as i32)?;
    for field in schema.fields() {
        write_string(&mut writer, field.name())?;
        write_i32(&mut writer, field.kind().code())?;
        write_f32(&mut writer, field.weight())?;
        match field.values() {
            Some(values) => {
                write_bool(&mut writer, true)?;
                write_i32(&mut writer, values.len() as i32)?;
                for value in values {
                    write_string(&mut writer, value)?;
                }
            }
            None => write_bool(&mut writer, false)?,
        }
    }

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
        write_i32(&mut writer, record.id())?;
        for &value in record.reals() {
            write_f32(&mut writer, value as f32)?;
        }
        for &code in record.discretes() {
            write_i32(&mut writer, code)?;
        }
    }

    writer.flush()?;
    debug!(
        path = %path.display(),
        records = records.len(),
        "wrote record file"
    );
    Ok(())
}

//! Low-level little-endian primitives shared by the reader and writer.

use std::io::{Read, Write};

use crate::error::RecordError;

pub(crate) fn read_i32(r: &mut impl Read) -> Result<i32, RecordError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}

pub(crate) fn read_f32(r: &mut impl Read) -> Result<f32, RecordError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(f32::from_le_bytes(buf))
}

pub(crate) fn read_bool(r: &mut impl Read) -> Result<bool, RecordError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0] != 0)
}

/// Reads an `i32` byte-length prefix followed by UTF-8 bytes.
pub(crate) fn read_string(r: &mut impl Read) -> Result<String, RecordError> {
    let len = read_i32(r)?;
    if len < 0 {
        return Err(RecordError::InvalidString {
            reason: format!("negative length {len}"),
        });
    }
    let mut buf = vec![0u8; len as usize];
    r.read_exact(&mut buf)?;
    String::from_utf8(buf).map_err(|e| RecordError::InvalidString {
        reason: e.to_string(),
    })
}

pub(crate) fn write_i32(w: &mut impl Write, value: i32) -> Result<(), RecordError> {
    w.write_all(&value.to_le_bytes())?;
    Ok(())
}

pub(crate) fn write_f32(w: &mut impl Write, value: f32) -> Result<(), RecordError> {
    w.write_all(&value.to_le_bytes())?;
    Ok(())
}

pub(crate) fn write_bool(w: &mut impl Write, value: bool) -> Result<(), RecordError> {
    w.write_all(&[u8::from(value)])?;
    Ok(())
}

pub(crate) fn write_string(w: &mut impl Write, value: &str) -> Result<(), RecordError> {
    write_i32(w, value.len() as i32)?;
    w.write_all(value.as_bytes())?;
    Ok(())
}

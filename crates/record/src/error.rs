//! Error types for argus-record.

use std::path::PathBuf;

/// Error type for all fallible operations in the argus-record crate.
///
/// Covers missing files, raw I/O failures, malformed headers and strings,
/// record/schema shape mismatches, and out-of-range seeks. Format errors
/// are never swallowed: a malformed file aborts the read that hit it.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an I/O error from the underlying reader or writer.
    #[error("i/o error: {source}")]
    Io {
        /// The underlying I/O failure.
        #[from]
        source: std::io::Error,
    },

    /// Returned when the file header is internally inconsistent.
    #[error("invalid header: {reason}")]
    InvalidHeader {
        /// Description of the inconsistency.
        reason: String,
    },

    /// Returned when a field descriptor carries an unknown type code.
    #[error("unknown field kind code {code}")]
    InvalidFieldKind {
        /// The unrecognised wire code.
        code: i32,
    },

    /// Returned when an embedded string is malformed.
    #[error("invalid string: {reason}")]
    InvalidString {
        /// Description of the problem (negative length, bad UTF-8).
        reason: String,
    },

    /// Returned when a record's field counts disagree with the schema.
    #[error("record {index}: {which} field count {got} does not match schema {expected}")]
    RecordShapeMismatch {
        /// Zero-based index of the offending record.
        index: usize,
        /// Which field family mismatched ("real" or "discrete").
        which: &'static str,
        /// Field count the schema requires.
        expected: usize,
        /// Field count the record carries.
        got: usize,
    },

    /// Returned when a seek targets a position past the end of the data.
    #[error("position {pos} out of range for {len} records")]
    PositionOutOfRange {
        /// Requested record position.
        pos: usize,
        /// Number of records in the collection.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = RecordError::FileNotFound {
            path: PathBuf::from("/tmp/missing.bin"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.bin");
    }

    #[test]
    fn display_invalid_header() {
        let err = RecordError::InvalidHeader {
            reason: "negative record count".to_string(),
        };
        assert_eq!(err.to_string(), "invalid header: negative record count");
    }

    #[test]
    fn display_invalid_field_kind() {
        let err = RecordError::InvalidFieldKind { code: 9 };
        assert_eq!(err.to_string(), "unknown field kind code 9");
    }

    #[test]
    fn display_record_shape_mismatch() {
        let err = RecordError::RecordShapeMismatch {
            index: 3,
            which: "real",
            expected: 4,
            got: 2,
        };
        assert_eq!(
            err.to_string(),
            "record 3: real field count 2 does not match schema 4"
        );
    }

    #[test]
    fn display_position_out_of_range() {
        let err = RecordError::PositionOutOfRange { pos: 12, len: 10 };
        assert_eq!(err.to_string(), "position 12 out of range for 10 records");
    }

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "truncated");
        let err: RecordError = io_err.into();
        assert!(matches!(err, RecordError::Io { .. }));
        assert!(err.to_string().contains("truncated"));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<RecordError>();
    }
}

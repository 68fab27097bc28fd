//! Error types for the argus-topk crate.

/// Error type for all fallible operations in the argus-topk crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TopKError {
    /// Returned when a heap is constructed with zero capacity.
    #[error("capacity must be >= 1, got {capacity}")]
    InvalidCapacity {
        /// The invalid capacity value.
        capacity: usize,
    },

    /// Returned when `pop` or `peek` is called on an empty heap.
    ///
    /// Indicates a logic error in the caller: a sentinel-filled heap of
    /// capacity >= 1 never empties during normal neighbor tracking.
    #[error("operation on empty heap")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_capacity() {
        let e = TopKError::InvalidCapacity { capacity: 0 };
        assert_eq!(e.to_string(), "capacity must be >= 1, got 0");
    }

    #[test]
    fn display_empty() {
        assert_eq!(TopKError::Empty.to_string(), "operation on empty heap");
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<TopKError>();
    }
}

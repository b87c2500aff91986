use thiserror::Error;

/// Result type for fallible partitioning operations.
pub type Result<T> = std::result::Result<T, PartitionError>;

/// Errors raised when a partitioning operation is given invalid arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PartitionError {
  #[error("{operation} size must be non-zero")]
  ZeroSize { operation: &'static str },
}

/// Validates a window or chunk size.
pub(crate) fn check_size(n: usize, operation: &'static str) -> Result<usize> {
  if n == 0 {
    return Err(PartitionError::ZeroSize { operation });
  }
  Ok(n)
}

/// Validates a window or chunk size, panicking on zero.
///
/// A zero size is a caller bug rather than a recoverable condition; the
/// `try_*` functions exist for callers that want a `Result` instead.
#[track_caller]
pub(crate) fn require_size(n: usize, operation: &'static str) -> usize {
  match check_size(n, operation) {
    Ok(n) => n,
    Err(err) => panic!("{err}"),
  }
}

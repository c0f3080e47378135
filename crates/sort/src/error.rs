//! Error types for the sorting façades.

use std::fmt;

use thiserror::Error;

/// Broad category of a [`SortError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
  /// A precondition on the arguments failed before anything was mutated.
  InvalidArgument,
}

impl ErrorKind {
  /// Return the stable machine-readable representation of this kind.
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::InvalidArgument => "INVALID_ARGUMENT",
    }
  }
}

impl fmt::Display for ErrorKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// An error produced at the boundary of a sort call.
///
/// Every variant is raised before the container is touched, so a failed call leaves the input
/// exactly as it was.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum SortError {
  /// A signed length was negative.
  #[error("network length must be non-negative, got {len}")]
  NegativeLength {
    /// The rejected length.
    len: isize,
  },
  /// The container is not a single random-access sequence: its columns disagree on length.
  #[error("container columns differ in length: keys={keys}, values={values}")]
  ShapeMismatch {
    /// Length of the key column.
    keys: usize,
    /// Length of the value column.
    values: usize,
  },
}

impl SortError {
  /// Retrieve the [`ErrorKind`] of this error.
  pub const fn kind(&self) -> ErrorKind {
    match self {
      Self::NegativeLength { .. } | Self::ShapeMismatch { .. } => ErrorKind::InvalidArgument,
    }
  }
}

/// Convenient result alias for sorting operations.
pub type Result<T> = std::result::Result<T, SortError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_display() {
    let err = SortError::NegativeLength { len: -3 };
    assert_eq!(err.to_string(), "network length must be non-negative, got -3");
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let err = SortError::ShapeMismatch { keys: 4, values: 2 };
    assert_eq!(err.to_string(), "container columns differ in length: keys=4, values=2");
    assert_eq!(err.kind().to_string(), "INVALID_ARGUMENT");
  }
}

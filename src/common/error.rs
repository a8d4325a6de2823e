//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// A simulation is a pure computation, so the only failure modes are
/// malformed inputs, rejected once when the [`Simulator`] is built.
/// Every policy then runs over validated input and cannot fail.
///
/// [`Simulator`]: crate::Simulator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Frame capacity must be at least 1; a zero-frame pool can never
    /// hold a resident page.
    #[error("frame capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),

    /// The reference string has no entries, so there is nothing to replay.
    #[error("reference string is empty")]
    EmptyReferenceString,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidCapacity(0);
        assert_eq!(format!("{}", err), "frame capacity must be at least 1, got 0");

        let err = Error::EmptyReferenceString;
        assert_eq!(format!("{}", err), "reference string is empty");
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}

use thiserror::Error;

/// Everything that can go wrong before or during a measurement run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The run options cannot produce a meaningful measurement matrix.
    #[error("invalid run configuration: {0}")]
    InvalidConfiguration(String),

    /// Radix sort only handles non-negative values.
    #[error("radix sort requires non-negative values, found {0}")]
    NegativeRadixValue(i64),

    /// The verifying path found a buffer that was not sorted after timing.
    #[error("{algorithm} left an unsorted buffer of len {len}")]
    UnsortedOutput { algorithm: &'static str, len: usize },
}

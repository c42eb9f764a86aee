// src/common/error.rs

#[derive(Debug, thiserror::Error)]
pub enum Sds011Error<E = ()>
where
    E: core::fmt::Debug, // Debug is needed to format the generic Io error
{
    /// Underlying I/O error from the serial interface implementation.
    #[error("I/O error: {0:?}")]
    Io(E),

    /// Command payload exceeds the 12 bytes an outbound frame can carry.
    #[error("command payload too large: {len} bytes (limit 12)")]
    PayloadTooLarge { len: usize },

    /// The byte stream ended before a frame start marker appeared.
    #[error("byte stream ended before a frame start marker")]
    EndOfStream,

    /// The byte stream ended inside a frame body.
    #[error("frame truncated: expected {expected} bytes, got {got}")]
    ShortRead { expected: usize, got: usize },

    /// Working period outside the sensor's accepted 0-30 minute range.
    #[error("working period {0} out of range (0-30)")]
    InvalidWorkingPeriod(u8),
}

// Checksum and terminator mismatches are not errors; they surface as
// `Validity` flags on decoded frames (see common::frame).

// Allow mapping from an underlying interface error
impl<E: core::fmt::Debug> From<E> for Sds011Error<E> {
    fn from(e: E) -> Self {
        Sds011Error::Io(e)
    }
}

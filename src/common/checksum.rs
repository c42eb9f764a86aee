// src/common/checksum.rs

//! Single-byte modular checksums for both frame directions.
//!
//! The SDS011 does not use a CRC; each direction carries a plain sum over a
//! fixed span of the frame, reduced modulo 256.

/// Calculates the checksum of an outbound command frame.
///
/// Defined as `(sum(data) + command - 2) mod 256` over the 12 zero-padded
/// payload bytes. The `-2` is a fixed protocol constant: it equals the two
/// `0xFF` filler bytes' contribution modulo 256, so the result also matches a
/// plain sum over every byte between the type byte and the checksum field.
///
/// # Arguments
///
/// * `command`: The command byte at frame offset 2.
/// * `data`: The payload bytes (already zero-padded to 12 on a real frame).
///
/// # Returns
///
/// The calculated checksum byte.
#[inline]
pub fn outbound_checksum(command: u8, data: &[u8]) -> u8 {
    data.iter()
        .fold(command.wrapping_sub(2), |sum, byte| sum.wrapping_add(*byte))
}

/// Calculates the checksum of an inbound response frame.
///
/// Defined as `(response_type + d0 + .. + d5) mod 256` over the type byte and
/// the six data bytes.
#[inline]
pub fn inbound_checksum(response_type: u8, data: &[u8; 6]) -> u8 {
    data.iter()
        .fold(response_type, |sum, byte| sum.wrapping_add(*byte))
}

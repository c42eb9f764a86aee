// src/common/frame.rs

//! Wire-level frame layouts.
//!
//! Outbound (host to sensor): `AA B4 <cmd> <data x12> FF FF <checksum> AB`,
//! 19 bytes. Inbound (sensor to host): `AA <type> <d0..d5> <checksum> AB`,
//! 10 bytes.

use arrayvec::ArrayVec;
use core::fmt::Debug;

use super::checksum::{inbound_checksum, outbound_checksum};
use super::command::Command;
use super::error::Sds011Error;

/// First byte of every frame in either direction.
pub const FRAME_HEAD: u8 = 0xAA;
/// Last byte of every frame in either direction.
pub const FRAME_TAIL: u8 = 0xAB;
/// Type byte identifying a host-to-sensor command frame.
pub const COMMAND_TYPE: u8 = 0xB4;
/// Filler value for the two bytes between payload and checksum.
const OUTBOUND_FILLER: u8 = 0xFF;

/// Outbound frames are always this long.
pub const OUTBOUND_FRAME_LEN: usize = 19;
/// Inbound frames are always this long.
pub const INBOUND_FRAME_LEN: usize = 10;
/// Maximum command payload length; shorter payloads are zero-padded.
pub const MAX_PAYLOAD_LEN: usize = 12;
/// Number of data bytes carried by an inbound frame.
pub const INBOUND_DATA_LEN: usize = 6;

/// A fully formed 19-byte command frame, ready to transmit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutboundFrame([u8; OUTBOUND_FRAME_LEN]);

impl OutboundFrame {
    /// Builds a command frame from a command code and up to 12 payload bytes.
    ///
    /// The payload is right-padded with zeros to 12 bytes and the checksum is
    /// computed as `(sum(payload_padded) + command - 2) mod 256`. The same
    /// `(command, payload)` pair always yields the same bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Sds011Error::PayloadTooLarge`] when `payload` exceeds 12
    /// bytes.
    pub fn encode<E>(command: Command, payload: &[u8]) -> Result<Self, Sds011Error<E>>
    where
        E: Debug,
    {
        let mut data = ArrayVec::<u8, MAX_PAYLOAD_LEN>::new();
        data.try_extend_from_slice(payload)
            .map_err(|_| Sds011Error::PayloadTooLarge { len: payload.len() })?;
        while !data.is_full() {
            data.push(0);
        }

        let mut raw = [0u8; OUTBOUND_FRAME_LEN];
        raw[0] = FRAME_HEAD;
        raw[1] = COMMAND_TYPE;
        raw[2] = command.code();
        raw[3..15].copy_from_slice(&data);
        raw[15] = OUTBOUND_FILLER;
        raw[16] = OUTBOUND_FILLER;
        raw[17] = outbound_checksum(command.code(), &data);
        raw[18] = FRAME_TAIL;
        Ok(OutboundFrame(raw))
    }

    /// The raw wire bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; OUTBOUND_FRAME_LEN] {
        &self.0
    }

    /// The checksum byte the encoder wrote at offset 17.
    #[inline]
    pub fn checksum(&self) -> u8 {
        self.0[17]
    }
}

/// Content-validity flags attached to every decoded inbound frame.
///
/// The sensor occasionally emits corrupted frames; the decoder reports the
/// mismatch here and still decodes the values, leaving the keep-or-discard
/// decision to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Validity {
    /// Received checksum byte matches the recomputed sum.
    pub checksum_ok: bool,
    /// Final byte is the expected terminator `0xAB`.
    pub terminator_ok: bool,
}

impl Validity {
    /// True when both flags hold.
    #[inline]
    pub const fn is_clean(&self) -> bool {
        self.checksum_ok && self.terminator_ok
    }
}

/// A raw 10-byte response frame as read off the wire.
///
/// Constructing one performs no validation; use [`InboundFrame::validity`]
/// or decode it via [`crate::common::response::decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InboundFrame([u8; INBOUND_FRAME_LEN]);

impl InboundFrame {
    pub const fn from_bytes(raw: [u8; INBOUND_FRAME_LEN]) -> Self {
        InboundFrame(raw)
    }

    /// The response type byte at offset 1 (`0xC0` for measurement reports).
    #[inline]
    pub fn response_type(&self) -> u8 {
        self.0[1]
    }

    /// The six data bytes at offsets 2..=7.
    #[inline]
    pub fn data(&self) -> [u8; INBOUND_DATA_LEN] {
        let mut data = [0u8; INBOUND_DATA_LEN];
        data.copy_from_slice(&self.0[2..8]);
        data
    }

    /// The checksum byte the sensor sent at offset 8.
    #[inline]
    pub fn checksum(&self) -> u8 {
        self.0[8]
    }

    /// The terminator byte at offset 9.
    #[inline]
    pub fn terminator(&self) -> u8 {
        self.0[9]
    }

    /// Recomputes the checksum over the response type and data bytes.
    #[inline]
    pub fn computed_checksum(&self) -> u8 {
        inbound_checksum(self.response_type(), &self.data())
    }

    /// Compares received checksum/terminator against the expected values.
    pub fn validity(&self) -> Validity {
        Validity {
            checksum_ok: self.computed_checksum() == self.checksum(),
            terminator_ok: self.terminator() == FRAME_TAIL,
        }
    }

    /// The raw wire bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; INBOUND_FRAME_LEN] {
        &self.0
    }
}

// src/monitor/sync_monitor/transaction.rs

use super::SyncMonitor;
use crate::common::{
    command::Command,
    error::Sds011Error,
    frame::OutboundFrame,
    hal_traits::Sds011Serial,
    response::Decoded,
};
use core::fmt::Debug;
use log::{debug, warn};

impl<IF> SyncMonitor<IF>
where
    IF: Sds011Serial,
    IF::Error: Debug,
{
    /// Encodes a command frame and transmits it.
    pub fn send_command(
        &mut self,
        command: Command,
        payload: &[u8],
    ) -> Result<(), Sds011Error<IF::Error>> {
        let frame = OutboundFrame::encode(command, payload)?;
        debug!("sending {:?}: {:02X?}", command, frame.as_bytes());
        self.write_frame_bytes(frame.as_bytes())
    }

    /// Resynchronizes to the next inbound frame and decodes it.
    ///
    /// Checksum and terminator mismatches are logged and reported through the
    /// returned [`Decoded::validity`] flags, never as errors: the sensor
    /// emits the occasional corrupted frame, and whether to keep or discard
    /// such a reading is the caller's call. Only structural failures
    /// (end of stream, truncated frame) are hard errors.
    pub fn read_response(&mut self) -> Result<Decoded, Sds011Error<IF::Error>> {
        self.resync()?;
        let frame = self.read_frame()?;
        debug!("received frame: {:02X?}", frame.as_bytes());

        let decoded = frame.decode();
        if !decoded.validity.checksum_ok {
            warn!(
                "checksum mismatch: calculated {:02X}, received {:02X}, frame {:02X?}",
                frame.computed_checksum(),
                frame.checksum(),
                frame.as_bytes()
            );
        }
        if !decoded.validity.terminator_ok {
            warn!(
                "bad frame terminator {:02X}, frame {:02X?}",
                frame.terminator(),
                frame.as_bytes()
            );
        }
        Ok(decoded)
    }

    /// Executes a full command/response exchange.
    pub fn transact(
        &mut self,
        command: Command,
        payload: &[u8],
    ) -> Result<Decoded, Sds011Error<IF::Error>> {
        self.send_command(command, payload)?;
        self.read_response()
    }
}

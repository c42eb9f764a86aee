// src/monitor/sync_monitor/io_helpers.rs

use super::SyncMonitor;
use crate::common::{
    error::Sds011Error,
    frame::{InboundFrame, FRAME_HEAD, INBOUND_FRAME_LEN},
    hal_traits::Sds011Serial,
};
use core::fmt::Debug;

// Implementation block for I/O related helpers
impl<IF> SyncMonitor<IF>
where
    IF: Sds011Serial,
    IF::Error: Debug,
{
    /// Blocks until the interface yields a byte (`Some`) or reports end of
    /// stream (`None`).
    pub(super) fn next_byte(&mut self) -> Result<Option<u8>, Sds011Error<IF::Error>> {
        nb::block!(self.interface.read_byte()).map_err(Sds011Error::Io)
    }

    /// Writes all bytes and flushes the transmit side.
    pub(super) fn write_frame_bytes(&mut self, bytes: &[u8]) -> Result<(), Sds011Error<IF::Error>> {
        for byte in bytes {
            nb::block!(self.interface.write_byte(*byte)).map_err(Sds011Error::Io)?;
        }
        nb::block!(self.interface.flush()).map_err(Sds011Error::Io)
    }

    /// Scans the stream one byte at a time until the frame start marker.
    ///
    /// Consumes nothing beyond the marker; the nine frame body bytes stay in
    /// the stream for [`SyncMonitor::read_frame`]. Blocks for as long as the
    /// transport does.
    ///
    /// # Errors
    ///
    /// [`Sds011Error::EndOfStream`] when the stream closes before a start
    /// marker appears.
    pub fn resync(&mut self) -> Result<u8, Sds011Error<IF::Error>> {
        loop {
            match self.next_byte()? {
                Some(FRAME_HEAD) => return Ok(FRAME_HEAD),
                Some(_) => continue, // garbage between frames, keep scanning
                None => return Err(Sds011Error::EndOfStream),
            }
        }
    }

    /// Reads the nine bytes completing the frame whose start marker
    /// [`SyncMonitor::resync`] just consumed.
    ///
    /// Performs no content validation; checksum and terminator are assessed
    /// during decode.
    ///
    /// # Errors
    ///
    /// [`Sds011Error::ShortRead`] when the stream closes mid-frame. `got`
    /// counts the bytes obtained including the start marker.
    pub fn read_frame(&mut self) -> Result<InboundFrame, Sds011Error<IF::Error>> {
        let mut raw = [0u8; INBOUND_FRAME_LEN];
        raw[0] = FRAME_HEAD;
        for offset in 1..INBOUND_FRAME_LEN {
            match self.next_byte()? {
                Some(byte) => raw[offset] = byte,
                None => {
                    return Err(Sds011Error::ShortRead {
                        expected: INBOUND_FRAME_LEN,
                        got: offset,
                    })
                }
            }
        }
        Ok(InboundFrame::from_bytes(raw))
    }
}

// --- Unit Tests for IO Helpers ---
#[cfg(test)]
mod tests {
    use crate::common::error::Sds011Error;
    use crate::common::frame::FRAME_HEAD;
    use crate::monitor::sync_monitor::testing::MockSerial;
    use crate::monitor::SyncMonitor;

    #[test]
    fn resync_skips_leading_garbage() {
        let mock = MockSerial::with_reads(&[0x00, 0x13, 0xFF, 0xAB, 0xAA, 0xC0, 0x01]);
        let mut monitor = SyncMonitor::new(mock);

        let byte = monitor.resync().unwrap();
        assert_eq!(byte, FRAME_HEAD);
        // Four garbage bytes plus the marker itself; nothing beyond it.
        assert_eq!(monitor.interface.consumed(), 5);
    }

    #[test]
    fn resync_reports_end_of_stream() {
        let mock = MockSerial::with_reads(&[0x01, 0x02, 0x03]);
        let mut monitor = SyncMonitor::new(mock);

        let result = monitor.resync();
        assert!(matches!(result, Err(Sds011Error::EndOfStream)));
    }

    #[test]
    fn resync_on_empty_stream() {
        let mut monitor = SyncMonitor::new(MockSerial::new());
        assert!(matches!(monitor.resync(), Err(Sds011Error::EndOfStream)));
    }

    #[test]
    fn read_frame_returns_the_full_ten_bytes() {
        let wire = [0xAA, 0xC0, 0x64, 0x00, 0xE6, 0x00, 0x00, 0x00, 0x14, 0xAB];
        let mock = MockSerial::with_reads(&wire);
        let mut monitor = SyncMonitor::new(mock);

        monitor.resync().unwrap();
        let frame = monitor.read_frame().unwrap();
        assert_eq!(frame.as_bytes(), &wire);
    }

    #[test]
    fn read_frame_truncated_stream_is_a_short_read() {
        // Start marker plus only four body bytes
        let mock = MockSerial::with_reads(&[0xAA, 0xC0, 0x64, 0x00, 0xE6]);
        let mut monitor = SyncMonitor::new(mock);

        monitor.resync().unwrap();
        let result = monitor.read_frame();
        assert!(matches!(
            result,
            Err(Sds011Error::ShortRead {
                expected: 10,
                got: 5
            })
        ));
    }

    #[test]
    fn back_to_back_frames_decode_in_sequence() {
        let mut mock = MockSerial::new();
        mock.stage(&[0xAA, 0xC0, 0x64, 0x00, 0xE6, 0x00, 0x00, 0x00, 0x14, 0xAB]);
        mock.stage(&[0x42]); // inter-frame noise
        mock.stage(&[0xAA, 0xC0, 0xC8, 0x00, 0x90, 0x01, 0x00, 0x00, 0x19, 0xAB]);
        let mut monitor = SyncMonitor::new(mock);

        monitor.resync().unwrap();
        let first = monitor.read_frame().unwrap().decode();
        assert_eq!(first.measurement().unwrap().pm2_5, 10.0);

        monitor.resync().unwrap();
        let second = monitor.read_frame().unwrap().decode();
        assert_eq!(second.measurement().unwrap().pm2_5, 20.0);
        assert_eq!(second.measurement().unwrap().pm10, 40.0);
        assert!(second.validity.is_clean());
    }
}

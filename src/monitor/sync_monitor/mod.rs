// src/monitor/sync_monitor/mod.rs

mod io_helpers;
mod protocol_helpers;
mod transaction;

use crate::common::{
    command::{ReportingMode, PowerState, PERIOD_CONTINUOUS},
    error::Sds011Error,
    hal_traits::Sds011Serial,
};
use core::fmt::Debug;

/// Drives a single SDS011 sensor over a byte-oriented serial interface.
///
/// The protocol is strictly request/response with one outstanding command at
/// a time, so the monitor owns its interface exclusively. Systems polling
/// several sensors create one monitor per transport; instances share no
/// state.
#[derive(Debug)]
pub struct SyncMonitor<IF>
where
    IF: Sds011Serial,
    IF::Error: Debug,
{
    interface: IF,
}

impl<IF> SyncMonitor<IF>
where
    IF: Sds011Serial,
    IF::Error: Debug,
{
    pub fn new(interface: IF) -> Self {
        SyncMonitor { interface }
    }

    /// Brings the sensor into a known state for polling: wake it, disable
    /// duty cycling, and select the reporting mode.
    pub fn initialize(&mut self, mode: ReportingMode) -> Result<(), Sds011Error<IF::Error>> {
        self.set_power_state(PowerState::Work)?;
        self.set_working_period(PERIOD_CONTINUOUS)?;
        self.set_reporting_mode(mode)
    }
}

// --- Shared test fixtures for the sync_monitor submodules ---
#[cfg(test)]
pub(crate) mod testing {
    use crate::common::hal_traits::Sds011Serial;
    use heapless::Vec;

    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct MockCommError;

    /// Serial stand-in: a staged read queue and a write log. Once the queue
    /// is drained, reads report end of stream.
    pub struct MockSerial {
        reads: Vec<u8, 128>,
        read_pos: usize,
        pub writes: Vec<u8, 128>,
        pub flushes: usize,
    }

    impl MockSerial {
        pub fn new() -> Self {
            MockSerial {
                reads: Vec::new(),
                read_pos: 0,
                writes: Vec::new(),
                flushes: 0,
            }
        }

        pub fn with_reads(data: &[u8]) -> Self {
            let mut mock = Self::new();
            mock.stage(data);
            mock
        }

        pub fn stage(&mut self, data: &[u8]) {
            self.reads
                .extend_from_slice(data)
                .expect("staged data exceeds mock capacity");
        }

        /// Number of bytes consumed from the read queue so far.
        pub fn consumed(&self) -> usize {
            self.read_pos
        }
    }

    impl Sds011Serial for MockSerial {
        type Error = MockCommError;

        fn read_byte(&mut self) -> nb::Result<Option<u8>, Self::Error> {
            match self.reads.get(self.read_pos) {
                Some(byte) => {
                    self.read_pos += 1;
                    Ok(Some(*byte))
                }
                None => Ok(None), // queue drained: stream closed
            }
        }

        fn write_byte(&mut self, byte: u8) -> nb::Result<(), Self::Error> {
            self.writes
                .push(byte)
                .map_err(|_| nb::Error::Other(MockCommError))?;
            Ok(())
        }

        fn flush(&mut self) -> nb::Result<(), Self::Error> {
            self.flushes += 1;
            Ok(())
        }
    }
}

//! SDS011 command definitions.
//!
//! Command codes and payload vocabulary for the sensor's 19-byte command
//! frames. The codes are fixed by the sensor's serial protocol and must match
//! exactly for the device to respond.

/// A command the host can issue to the sensor.
///
/// The discriminant is the command byte transmitted at offset 2 of an
/// outbound frame. Payload bytes are supplied separately when encoding; see
/// [`crate::common::frame::OutboundFrame::encode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Command {
    /// Switch between active reporting and query-on-demand reporting.
    SetMode = 2,
    /// Request the current PM2.5/PM10 reading (query mode).
    QueryData = 4,
    /// Assign a new device ID.
    DeviceId = 5,
    /// Put the sensor to sleep or wake it up.
    Sleep = 6,
    /// Request the firmware version and device ID.
    Firmware = 7,
    /// Set the measurement duty cycle.
    WorkingPeriod = 8,
}

impl Command {
    /// The command byte as it appears on the wire.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// First payload byte of SetMode/Sleep/WorkingPeriod: write the setting.
pub const SUBCMD_SET: u8 = 1;
/// First payload byte of SetMode/Sleep/WorkingPeriod: read the setting back.
pub const SUBCMD_QUERY: u8 = 0;

/// Working period value for continuous measurement (no duty cycling).
pub const PERIOD_CONTINUOUS: u8 = 0;
/// Largest accepted working period, in minutes.
pub const MAX_WORKING_PERIOD: u8 = 30;

/// How the sensor delivers measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ReportingMode {
    /// Sensor streams measurement reports on its own schedule.
    Active = 0,
    /// Sensor reports only when asked via [`Command::QueryData`].
    Query = 1,
}

/// Whether the fan and laser are running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PowerState {
    /// Low-power sleep; the sensor ignores everything except a wake command.
    Sleep = 0,
    /// Measuring.
    Work = 1,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_codes_match_the_wire_protocol() {
        assert_eq!(Command::SetMode.code(), 2);
        assert_eq!(Command::QueryData.code(), 4);
        assert_eq!(Command::DeviceId.code(), 5);
        assert_eq!(Command::Sleep.code(), 6);
        assert_eq!(Command::Firmware.code(), 7);
        assert_eq!(Command::WorkingPeriod.code(), 8);
    }

    #[test]
    fn mode_and_state_wire_values() {
        assert_eq!(ReportingMode::Active as u8, 0);
        assert_eq!(ReportingMode::Query as u8, 1);
        assert_eq!(PowerState::Sleep as u8, 0);
        assert_eq!(PowerState::Work as u8, 1);
    }
}

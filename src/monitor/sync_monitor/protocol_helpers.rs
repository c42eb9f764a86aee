// src/monitor/sync_monitor/protocol_helpers.rs

use super::SyncMonitor;
use crate::common::{
    command::{Command, PowerState, ReportingMode, MAX_WORKING_PERIOD, SUBCMD_SET},
    error::Sds011Error,
    frame::{Validity, MAX_PAYLOAD_LEN},
    hal_traits::Sds011Serial,
    response::{DeviceInfo, Measurement, Response},
};
use core::fmt::Debug;
use log::debug;

impl<IF> SyncMonitor<IF>
where
    IF: Sds011Serial,
    IF::Error: Debug,
{
    /// Switches the sensor between active streaming and query-on-demand.
    ///
    /// The acknowledgment frame is read and discarded; the sensor applies
    /// the mode regardless of what the reply carries.
    pub fn set_reporting_mode(
        &mut self,
        mode: ReportingMode,
    ) -> Result<(), Sds011Error<IF::Error>> {
        let reply = self.transact(Command::SetMode, &[SUBCMD_SET, mode as u8])?;
        debug!("set reporting mode {:?}, reply {:?}", mode, reply.response);
        Ok(())
    }

    /// Puts the sensor to sleep or wakes it up.
    pub fn set_power_state(&mut self, state: PowerState) -> Result<(), Sds011Error<IF::Error>> {
        let reply = self.transact(Command::Sleep, &[SUBCMD_SET, state as u8])?;
        debug!("set power state {:?}, reply {:?}", state, reply.response);
        Ok(())
    }

    /// Sets the measurement duty cycle: 0 is continuous, 1-30 reports once
    /// per that many minutes.
    ///
    /// # Errors
    ///
    /// [`Sds011Error::InvalidWorkingPeriod`] for values above 30; nothing is
    /// written in that case.
    pub fn set_working_period(&mut self, minutes: u8) -> Result<(), Sds011Error<IF::Error>> {
        if minutes > MAX_WORKING_PERIOD {
            return Err(Sds011Error::InvalidWorkingPeriod(minutes));
        }
        let reply = self.transact(Command::WorkingPeriod, &[SUBCMD_SET, minutes])?;
        debug!("set working period {} min, reply {:?}", minutes, reply.response);
        Ok(())
    }

    /// Assigns a new device ID, little-endian in the last two payload bytes.
    pub fn set_device_id(&mut self, id: u16) -> Result<(), Sds011Error<IF::Error>> {
        let mut payload = [0u8; MAX_PAYLOAD_LEN];
        let [lo, hi] = id.to_le_bytes();
        payload[10] = lo;
        payload[11] = hi;
        let reply = self.transact(Command::DeviceId, &payload)?;
        debug!("set device id {:#06x}, reply {:?}", id, reply.response);
        Ok(())
    }

    /// Requests the current reading.
    ///
    /// Returns `None` when the reply is not a measurement report (some
    /// sensors answer the first query after wake-up with a command reply).
    /// The validity flags ride along so the caller can drop corrupted
    /// readings if it wants to.
    pub fn query_data(
        &mut self,
    ) -> Result<Option<(Measurement, Validity)>, Sds011Error<IF::Error>> {
        let decoded = self.transact(Command::QueryData, &[])?;
        match decoded.response {
            Response::Measurement(measurement) => Ok(Some((measurement, decoded.validity))),
            other => {
                debug!("query answered by non-measurement response {:?}", other);
                Ok(None)
            }
        }
    }

    /// Requests the firmware date and device ID.
    pub fn firmware_version(
        &mut self,
    ) -> Result<Option<(DeviceInfo, Validity)>, Sds011Error<IF::Error>> {
        let decoded = self.transact(Command::Firmware, &[])?;
        match decoded.response {
            Response::DeviceInfo(info) => Ok(Some((info, decoded.validity))),
            other => {
                debug!("firmware query answered by {:?}", other);
                Ok(None)
            }
        }
    }
}

// src/common/response.rs

//! Typed views of inbound frames.
//!
//! [`decode`] turns a raw [`InboundFrame`] into a [`Response`] and a
//! [`Validity`] report. Decoding never fails: corrupted frames keep their
//! decoded values alongside cleared validity flags, and unrecognized response
//! types come back as [`Response::Unknown`] rather than an error, since
//! sensor variants differ in what they emit.

use core::fmt;

use super::frame::{InboundFrame, Validity, INBOUND_DATA_LEN};

/// Response type byte of a PM2.5/PM10 measurement report.
pub const MEASUREMENT_REPORT: u8 = 0xC0;
/// Response type byte of a device-info report.
pub const DEVICE_INFO_REPORT: u8 = 0xC1;
/// Response type byte of a command reply (acknowledgments, firmware info).
pub const COMMAND_REPLY: u8 = 0xC5;

/// A particulate-matter reading, in micrograms per cubic meter.
///
/// The sensor reports tenths of a microgram as little-endian 16-bit values;
/// both fields therefore carry one decimal place of precision.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    /// PM2.5 concentration.
    pub pm2_5: f32,
    /// PM10 concentration.
    pub pm10: f32,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PM2.5: {} ug/m3, PM10: {} ug/m3", self.pm2_5, self.pm10)
    }
}

/// Firmware date and device ID, from firmware/device-query replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceInfo {
    /// Firmware year, two digits.
    pub year: u8,
    /// Firmware month.
    pub month: u8,
    /// Firmware day.
    pub day: u8,
    /// The sensor's 16-bit device ID.
    pub device_id: u16,
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Y: {}, M: {}, D: {}, ID: {:#06x}",
            self.year, self.month, self.day, self.device_id
        )
    }
}

/// Any decoded inbound frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Response {
    /// A measurement report (`0xC0`).
    Measurement(Measurement),
    /// A firmware/device-info style reply (`0xC1` or `0xC5`).
    DeviceInfo(DeviceInfo),
    /// Anything else; carries the raw bytes untouched.
    Unknown {
        response_type: u8,
        data: [u8; INBOUND_DATA_LEN],
    },
}

/// A decoded response together with its content-validity report.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decoded {
    pub response: Response,
    pub validity: Validity,
}

impl Decoded {
    /// The measurement, if this frame carried one.
    pub fn measurement(&self) -> Option<Measurement> {
        match self.response {
            Response::Measurement(measurement) => Some(measurement),
            _ => None,
        }
    }

    /// The device info, if this frame carried some.
    pub fn device_info(&self) -> Option<DeviceInfo> {
        match self.response {
            Response::DeviceInfo(info) => Some(info),
            _ => None,
        }
    }
}

/// Decodes an inbound frame by its response type.
///
/// Measurement reports unpack the first two little-endian u16 values and
/// scale by 10 (data bytes 4-5 are reserved). Device-info replies skip the
/// leading echo byte: year/month/day sit at data bytes 1-3 and the device ID
/// little-endian at bytes 4-5.
pub fn decode(frame: &InboundFrame) -> Decoded {
    let data = frame.data();
    let response = match frame.response_type() {
        MEASUREMENT_REPORT => Response::Measurement(Measurement {
            pm2_5: u16::from_le_bytes([data[0], data[1]]) as f32 / 10.0,
            pm10: u16::from_le_bytes([data[2], data[3]]) as f32 / 10.0,
        }),
        DEVICE_INFO_REPORT | COMMAND_REPLY => Response::DeviceInfo(DeviceInfo {
            year: data[1],
            month: data[2],
            day: data[3],
            device_id: u16::from_le_bytes([data[4], data[5]]),
        }),
        response_type => Response::Unknown {
            response_type,
            data,
        },
    };

    Decoded {
        response,
        validity: frame.validity(),
    }
}

impl InboundFrame {
    /// See [`decode`].
    #[inline]
    pub fn decode(&self) -> Decoded {
        decode(self)
    }
}

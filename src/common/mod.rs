// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod checksum;
pub mod command;
pub mod error;
pub mod frame;
pub mod hal_traits;
pub mod response;

// --- Re-export key types/traits/functions for easier access ---

// From checksum.rs
pub use checksum::{inbound_checksum, outbound_checksum};

// From command.rs
pub use command::{Command, PowerState, ReportingMode, PERIOD_CONTINUOUS};

// From error.rs
pub use error::Sds011Error;

// From frame.rs
pub use frame::{InboundFrame, OutboundFrame, Validity};

// From hal_traits.rs
pub use hal_traits::Sds011Serial;

// From response.rs
pub use response::{decode, Decoded, DeviceInfo, Measurement, Response};

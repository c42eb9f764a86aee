// src/lib.rs

#![no_std] // Specify no_std at the crate root

pub mod common;
pub mod monitor;

// Re-export key types for convenience
pub use common::Sds011Error;
pub use monitor::SyncMonitor;

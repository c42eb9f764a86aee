// src/common/hal_traits.rs

use core::fmt::Debug;

/// Abstraction for the byte-oriented serial link to one sensor.
///
/// Implementations wrap whatever transport the platform provides (a UART
/// peripheral, a USB-serial character device, a test fixture). The protocol
/// core performs blocking reads on top of the non-blocking primitives and has
/// no deadline of its own; if a timeout is wanted, the implementation
/// enforces it and surfaces expiry through its `Error` type.
pub trait Sds011Serial {
    /// Associated error type for communication errors.
    type Error: Debug;

    /// Attempts to read a single byte from the serial interface.
    ///
    /// Returns `Ok(Some(byte))` if a byte was read, `Ok(None)` if the stream
    /// has ended (the transport was closed or the device detached), or
    /// `Err(nb::Error::WouldBlock)` if no byte is available yet. Other errors
    /// are returned as `Err(nb::Error::Other(Self::Error))`.
    fn read_byte(&mut self) -> nb::Result<Option<u8>, Self::Error>;

    /// Attempts to write a single byte to the serial interface.
    ///
    /// Returns `Ok(())` if the byte was accepted for transmission, or
    /// `Err(nb::Error::WouldBlock)` if the write buffer is full.
    fn write_byte(&mut self, byte: u8) -> nb::Result<(), Self::Error>;

    /// Attempts to flush the transmit buffer, ensuring all written bytes have
    /// been sent.
    fn flush(&mut self) -> nb::Result<(), Self::Error>;
}

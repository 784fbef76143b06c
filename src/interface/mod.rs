//! Bus interface abstraction for the GNSS driver.
//!
//! The module presents its fix and control state as a flat memory-mapped
//! register space; this trait is the seam between the typed driver API and
//! whatever transport carries those register transactions. Tests substitute
//! scripted mocks here.

pub mod i2c;

/// Byte-level access to the module's register space.
pub trait GnssInterface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Writes one control byte to a register offset.
    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error>;

    /// Reads one byte from a register offset.
    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error>;

    /// Reads a consecutive register group (date, coordinate, scaled triple)
    /// starting at `register` into the provided buffer.
    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error>;

    /// Writes consecutive registers starting at `register` from the provided
    /// buffer.
    fn write_many(&mut self, register: u8, data: &[u8]) -> core::result::Result<(), Self::Error>;
}

//! Register map definitions for the DFRobot GNSS receiver module.
//!
//! The device exposes its current fix as a flat memory-mapped register space;
//! multi-byte quantities (year, coordinates, altitude, COG, SOG) occupy
//! consecutive offsets starting at the addresses below.

/// Default 7-bit I2C address of the module.
pub const DEFAULT_I2C_ADDRESS: u8 = 0x20;

/// Register address of the year high byte (16-bit big-endian year).
pub const REG_YEAR_H: u8 = 0x00;
/// Register address of the UTC hour byte (minute and second follow).
pub const REG_HOUR: u8 = 0x04;
/// Register address of the first latitude byte (6-byte group).
pub const REG_LAT_START: u8 = 0x07;
/// Register address of the first longitude byte (6-byte group).
pub const REG_LON_START: u8 = 0x0D;
/// Register address of the satellites-used count.
pub const REG_SATELLITES_USED: u8 = 0x13;
/// Register address of the altitude high byte (3-byte group).
pub const REG_ALT_H: u8 = 0x14;
/// Register address of the speed-over-ground high byte (3-byte group).
pub const REG_SOG_H: u8 = 0x17;
/// Register address of the course-over-ground high byte (3-byte group).
pub const REG_COG_H: u8 = 0x1A;
/// Register address of the GNSS constellation mode selector.
pub const REG_GNSS_MODE: u8 = 0x22;
/// Register address of the sleep/power control.
pub const REG_SLEEP_MODE: u8 = 0x23;
/// Register address of the RGB indicator control.
pub const REG_RGB_MODE: u8 = 0x24;

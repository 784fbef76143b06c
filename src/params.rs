//! Strongly typed parameter enumerations for the GNSS driver.
//!
//! These enums map directly to the byte values the module accepts in its
//! control registers and are used across [`Config`](crate::config::Config)
//! and the high-level driver APIs. Prefer these types over raw integers to
//! keep control values valid and explicit.
//!
//! # Examples
//!
//! ```rust
//! use dfrobot_gnss::params::{GnssMode, PowerState, RgbState};
//!
//! let mode = GnssMode::GpsBeiDouGlonass;
//! let power = PowerState::Enabled;
//! let rgb = RgbState::On;
//! let _ = (mode, power, rgb);
//! ```

/// Constellation selections accepted by the GNSS-mode register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GnssMode {
    /// GPS only.
    Gps = 1,
    /// BeiDou only.
    BeiDou = 2,
    /// GPS + BeiDou.
    GpsBeiDou = 3,
    /// GLONASS only.
    Glonass = 4,
    /// GPS + GLONASS.
    GpsGlonass = 5,
    /// BeiDou + GLONASS.
    BeiDouGlonass = 6,
    /// GPS + BeiDou + GLONASS.
    GpsBeiDouGlonass = 7,
}

impl GnssMode {
    /// Returns the register byte value for this mode.
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Maps a register byte back to a mode, rejecting values outside 1..=7.
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            1 => Some(Self::Gps),
            2 => Some(Self::BeiDou),
            3 => Some(Self::GpsBeiDou),
            4 => Some(Self::Glonass),
            5 => Some(Self::GpsGlonass),
            6 => Some(Self::BeiDouGlonass),
            7 => Some(Self::GpsBeiDouGlonass),
            _ => None,
        }
    }

    /// Returns `true` when the GPS constellation is active in this mode.
    pub const fn uses_gps(self) -> bool {
        matches!(
            self,
            Self::Gps | Self::GpsBeiDou | Self::GpsGlonass | Self::GpsBeiDouGlonass
        )
    }

    /// Returns `true` when the BeiDou constellation is active in this mode.
    pub const fn uses_beidou(self) -> bool {
        matches!(
            self,
            Self::BeiDou | Self::GpsBeiDou | Self::BeiDouGlonass | Self::GpsBeiDouGlonass
        )
    }

    /// Returns `true` when the GLONASS constellation is active in this mode.
    pub const fn uses_glonass(self) -> bool {
        matches!(
            self,
            Self::Glonass | Self::GpsGlonass | Self::BeiDouGlonass | Self::GpsBeiDouGlonass
        )
    }
}

/// Receiver power states written to the sleep-mode register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PowerState {
    /// Receiver powered and acquiring.
    Enabled = 0x00,
    /// Receiver in low-power sleep.
    Disabled = 0x01,
}

impl PowerState {
    /// Returns the register byte value for this state.
    pub const fn raw(self) -> u8 {
        self as u8
    }
}

/// RGB indicator states written to the RGB-mode register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum RgbState {
    /// Indicator LED enabled.
    On = 0x05,
    /// Indicator LED disabled.
    Off = 0x02,
}

impl RgbState {
    /// Returns the register byte value for this state.
    pub const fn raw(self) -> u8 {
        self as u8
    }
}

/// Hemisphere letter reported alongside each coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Hemisphere {
    /// Northern latitude (`'N'`).
    North,
    /// Southern latitude (`'S'`).
    South,
    /// Eastern longitude (`'E'`).
    East,
    /// Western longitude (`'W'`).
    West,
}

impl Hemisphere {
    /// Maps the ASCII byte the device reports to a hemisphere.
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'N' => Some(Self::North),
            b'S' => Some(Self::South),
            b'E' => Some(Self::East),
            b'W' => Some(Self::West),
            _ => None,
        }
    }

    /// Returns the conventional single-letter suffix.
    pub const fn as_char(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }
}

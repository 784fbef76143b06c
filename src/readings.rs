//! Reading decode utilities.
//!
//! Pure functions that turn raw register payloads into typed readings, plus
//! the composite [`Snapshot`] used by polling callers. The decoders are
//! deterministic and never perform I/O; a failed bus read is handled before
//! they run, so they are never handed absent data.

use core::fmt;

use crate::device::Gnss;
use crate::interface::GnssInterface;
use crate::log::warn;
use crate::params::{GnssMode, Hemisphere};

/// Calendar date reported by the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    /// Full year (e.g. 2024).
    pub year: u16,
    /// Month of year, 1..=12.
    pub month: u8,
    /// Day of month, 1..=31.
    pub day: u8,
}

impl Date {
    /// Placeholder date reported before the first fix.
    pub const NO_FIX: Self = Self {
        year: 2000,
        month: 1,
        day: 1,
    };
}

impl Default for Date {
    fn default() -> Self {
        Self::NO_FIX
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// UTC time of day reported by the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Time {
    /// Hour, 0..=23.
    pub hour: u8,
    /// Minute, 0..=59.
    pub minute: u8,
    /// Second, 0..=59.
    pub second: u8,
}

impl Time {
    /// Placeholder time reported before the first fix.
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };
}

impl Default for Time {
    fn default() -> Self {
        Self::MIDNIGHT
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// A geographic coordinate in decimal degrees plus its hemisphere letter.
///
/// The device reports coordinates as unsigned magnitude with a separate
/// hemisphere letter rather than as a signed value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Unsigned magnitude in decimal degrees.
    pub degrees: f32,
    /// Direction disambiguating the magnitude.
    pub hemisphere: Hemisphere,
}

impl Coordinate {
    /// Latitude placeholder reported before the first fix.
    pub const NO_FIX_LATITUDE: Self = Self {
        degrees: 0.0,
        hemisphere: Hemisphere::South,
    };

    /// Longitude placeholder reported before the first fix.
    pub const NO_FIX_LONGITUDE: Self = Self {
        degrees: 0.0,
        hemisphere: Hemisphere::West,
    };
}

/// Decodes a 6-byte coordinate group.
///
/// Byte 0 is integer degrees, byte 1 integer minutes, bytes 2..5 a big-endian
/// fractional-minutes count scaled by 100 000, and byte 5 the hemisphere
/// letter. `fallback` is used when the letter byte is not one of `NSEW`.
pub fn decode_coordinate(raw: &[u8; 6], fallback: Hemisphere) -> Coordinate {
    let fractional = u32::from_be_bytes([0, raw[2], raw[3], raw[4]]);
    let degrees = raw[0] as f32 + raw[1] as f32 / 60.0 + fractional as f32 / 100_000.0 / 60.0;
    let hemisphere = Hemisphere::from_ascii(raw[5]).unwrap_or(fallback);

    Coordinate { degrees, hemisphere }
}

/// Decodes the shared 3-byte scaled encoding used for altitude, COG and SOG.
///
/// A 16-bit big-endian integer part followed by a hundredths byte.
pub fn decode_scaled(raw: &[u8; 3]) -> f32 {
    u16::from_be_bytes([raw[0], raw[1]]) as f32 + raw[2] as f32 / 100.0
}

/// Decodes the 4-byte date group (big-endian year, month, day).
pub fn decode_date(raw: &[u8; 4]) -> Date {
    Date {
        year: u16::from_be_bytes([raw[0], raw[1]]),
        month: raw[2],
        day: raw[3],
    }
}

/// Decodes the 3-byte time group (hour, minute, second).
pub fn decode_time(raw: &[u8; 3]) -> Time {
    Time {
        hour: raw[0],
        minute: raw[1],
        second: raw[2],
    }
}

/// One polling round of every reading the module exposes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    /// Active constellation mode.
    pub mode: GnssMode,
    /// Number of satellites used in the fix.
    pub satellites: u8,
    /// Calendar date.
    pub date: Date,
    /// UTC time of day.
    pub time: Time,
    /// Latitude magnitude and hemisphere.
    pub latitude: Coordinate,
    /// Longitude magnitude and hemisphere.
    pub longitude: Coordinate,
    /// Altitude in meters.
    pub altitude_m: f32,
    /// Course over ground in degrees true.
    pub course_deg: f32,
    /// Speed over ground in knots.
    pub speed_knots: f32,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Snapshot {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Snapshot {{ mode: {}, satellites: {}, date: {=u16}-{=u8}-{=u8}, time: {=u8}:{=u8}:{=u8}, lat: {=f32} {}, lon: {=f32} {}, alt: {=f32} m, cog: {=f32}, sog: {=f32} kn }}",
            self.mode,
            self.satellites,
            self.date.year,
            self.date.month,
            self.date.day,
            self.time.hour,
            self.time.minute,
            self.time.second,
            self.latitude.degrees,
            self.latitude.hemisphere,
            self.longitude.degrees,
            self.longitude.hemisphere,
            self.altitude_m,
            self.course_deg,
            self.speed_knots
        );
    }
}

/// Reads every field of a [`Snapshot`], substituting the documented no-fix
/// default for any register group that fails to read.
///
/// This keeps a polling caller alive through transient bus faults: a moment
/// without data looks like a receiver without a fix instead of an error. Each
/// masked failure is logged so it stays distinguishable from "no fix yet".
/// Callers that need the underlying errors use the typed accessors on
/// [`Gnss`] directly.
pub fn read_snapshot<IFACE, CommE>(device: &mut Gnss<IFACE>) -> Snapshot
where
    IFACE: GnssInterface<Error = CommE>,
{
    let mode = device.read_gnss_mode().unwrap_or_else(|_| {
        warn!("gnss: mode read failed; reporting last commanded mode");
        device.config().mode
    });

    let satellites = device.read_satellites_used().unwrap_or_else(|_| {
        warn!("gnss: satellite count read failed; reporting 0");
        0
    });

    let date = device.read_date().unwrap_or_else(|_| {
        warn!("gnss: date read failed; reporting no-fix default");
        Date::NO_FIX
    });

    let time = device.read_time().unwrap_or_else(|_| {
        warn!("gnss: time read failed; reporting no-fix default");
        Time::MIDNIGHT
    });

    let latitude = device.read_latitude().unwrap_or_else(|_| {
        warn!("gnss: latitude read failed; reporting no-fix default");
        Coordinate::NO_FIX_LATITUDE
    });

    let longitude = device.read_longitude().unwrap_or_else(|_| {
        warn!("gnss: longitude read failed; reporting no-fix default");
        Coordinate::NO_FIX_LONGITUDE
    });

    let altitude_m = device.read_altitude().unwrap_or_else(|_| {
        warn!("gnss: altitude read failed; reporting 0.0");
        0.0
    });

    let course_deg = device.read_course_over_ground().unwrap_or_else(|_| {
        warn!("gnss: course read failed; reporting 0.0");
        0.0
    });

    let speed_knots = device.read_speed_over_ground().unwrap_or_else(|_| {
        warn!("gnss: speed read failed; reporting 0.0");
        0.0
    });

    Snapshot {
        mode,
        satellites,
        date,
        time,
        latitude,
        longitude,
        altitude_m,
        course_deg,
        speed_knots,
    }
}

//! High-level GNSS module driver implementation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::GnssInterface;
use crate::interface::i2c::I2cInterface;
use crate::params::{GnssMode, Hemisphere, PowerState, RgbState};
use crate::readings::{self, Coordinate, Date, Snapshot, Time};
use crate::registers::{
    REG_ALT_H,
    REG_COG_H,
    REG_GNSS_MODE,
    REG_HOUR,
    REG_LAT_START,
    REG_LON_START,
    REG_RGB_MODE,
    REG_SATELLITES_USED,
    REG_SLEEP_MODE,
    REG_SOG_H,
    REG_YEAR_H,
};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

// Settle time the receiver firmware needs to apply a control write (milliseconds).
const SETTLE_DELAY_MS: u32 = 100;
// Consecutive bytes spanning year-high, year-low, month, day.
const DATE_BYTES: usize = 4;
// Consecutive bytes spanning hour, minute, second.
const TIME_BYTES: usize = 3;
// Consecutive bytes spanning one coordinate group incl. hemisphere letter.
const COORDINATE_BYTES: usize = 6;
// Consecutive bytes spanning one scaled quantity (altitude, COG, SOG).
const SCALED_BYTES: usize = 3;

/// High-level synchronous driver for the DFRobot GNSS receiver module.
pub struct Gnss<IFACE> {
    interface: IFACE,
    config: Config,
}

impl<IFACE> Gnss<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    pub fn new(interface: IFACE, config: Config) -> Self {
        Self { interface, config }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> (IFACE, Config) {
        (self.interface, self.config)
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    /// Returns a shared reference to the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a mutable reference to the active configuration.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }
}

impl<I2C> Gnss<I2cInterface<I2C>>
where
    I2C: I2c,
{
    // ==================================================================
    // == I2C Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for I2C transports at the default address.
    pub fn new_i2c(i2c: I2C, config: Config) -> Self {
        Self::new(I2cInterface::new(i2c), config)
    }

    /// Convenience constructor for I2C transports at a non-default address.
    pub fn new_i2c_with_address(i2c: I2C, address: u8, config: Config) -> Self {
        Self::new(I2cInterface::with_address(i2c, address), config)
    }

    /// Releases the driver, returning the I2C bus and configuration.
    pub fn release_i2c(self) -> (I2C, Config) {
        let (iface, config) = self.release();
        (iface.release(), config)
    }
}

impl<IFACE, CommE> Gnss<IFACE>
where
    IFACE: GnssInterface<Error = CommE>,
{
    // ==================================================================
    // == Initialization & Control ======================================
    // ==================================================================
    /// Initializes the receiver using the current configuration.
    ///
    /// Applies constellation mode, power state, and indicator state in turn,
    /// observing the settle delay after each write so callers do not need to
    /// sequence their own waits before the first query.
    pub fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), CommE> {
        let config = self.config;
        self.set_gnss_mode(config.mode, delay)?;
        self.set_power(config.power, delay)?;
        self.set_rgb(config.rgb, delay)?;
        Ok(())
    }

    /// Selects the active satellite constellations.
    pub fn set_gnss_mode(
        &mut self,
        mode: GnssMode,
        delay: &mut impl DelayNs,
    ) -> Result<(), CommE> {
        self.write_control(REG_GNSS_MODE, mode.raw(), delay)?;
        self.config.mode = mode;
        Ok(())
    }

    /// Selects the constellation mode from a raw register byte.
    ///
    /// Values outside 1..=7 are rejected with [`Error::InvalidMode`] before
    /// any bus traffic is issued.
    pub fn set_gnss_mode_raw(&mut self, raw: u8, delay: &mut impl DelayNs) -> Result<(), CommE> {
        let mode = GnssMode::from_raw(raw).ok_or(Error::InvalidMode)?;
        self.set_gnss_mode(mode, delay)
    }

    /// Sets the receiver power state.
    pub fn set_power(
        &mut self,
        state: PowerState,
        delay: &mut impl DelayNs,
    ) -> Result<(), CommE> {
        self.write_control(REG_SLEEP_MODE, state.raw(), delay)?;
        self.config.power = state;
        Ok(())
    }

    /// Powers the receiver on.
    pub fn enable_power(&mut self, delay: &mut impl DelayNs) -> Result<(), CommE> {
        self.set_power(PowerState::Enabled, delay)
    }

    /// Puts the receiver into low-power sleep.
    pub fn disable_power(&mut self, delay: &mut impl DelayNs) -> Result<(), CommE> {
        self.set_power(PowerState::Disabled, delay)
    }

    /// Sets the RGB indicator state.
    pub fn set_rgb(&mut self, state: RgbState, delay: &mut impl DelayNs) -> Result<(), CommE> {
        self.write_control(REG_RGB_MODE, state.raw(), delay)?;
        self.config.rgb = state;
        Ok(())
    }

    /// Turns the RGB indicator on.
    pub fn rgb_on(&mut self, delay: &mut impl DelayNs) -> Result<(), CommE> {
        self.set_rgb(RgbState::On, delay)
    }

    /// Turns the RGB indicator off.
    pub fn rgb_off(&mut self, delay: &mut impl DelayNs) -> Result<(), CommE> {
        self.set_rgb(RgbState::Off, delay)
    }

    // ==================================================================
    // == Typed Queries =================================================
    // ==================================================================
    /// Reads back the active constellation mode.
    pub fn read_gnss_mode(&mut self) -> Result<GnssMode, CommE> {
        let raw = self
            .interface
            .read_register(REG_GNSS_MODE)
            .map_err(Error::from)?;
        GnssMode::from_raw(raw).ok_or(Error::InvalidMode)
    }

    /// Reads the number of satellites used in the current fix.
    pub fn read_satellites_used(&mut self) -> Result<u8, CommE> {
        self.interface
            .read_register(REG_SATELLITES_USED)
            .map_err(Error::from)
    }

    /// Reads the calendar date of the current fix.
    pub fn read_date(&mut self) -> Result<Date, CommE> {
        let mut raw = [0u8; DATE_BYTES];
        self.interface
            .read_many(REG_YEAR_H, &mut raw)
            .map_err(Error::from)?;
        Ok(readings::decode_date(&raw))
    }

    /// Reads the UTC time of the current fix.
    pub fn read_time(&mut self) -> Result<Time, CommE> {
        let mut raw = [0u8; TIME_BYTES];
        self.interface
            .read_many(REG_HOUR, &mut raw)
            .map_err(Error::from)?;
        Ok(readings::decode_time(&raw))
    }

    /// Reads the latitude of the current fix.
    pub fn read_latitude(&mut self) -> Result<Coordinate, CommE> {
        let mut raw = [0u8; COORDINATE_BYTES];
        self.interface
            .read_many(REG_LAT_START, &mut raw)
            .map_err(Error::from)?;
        Ok(readings::decode_coordinate(&raw, Hemisphere::South))
    }

    /// Reads the longitude of the current fix.
    pub fn read_longitude(&mut self) -> Result<Coordinate, CommE> {
        let mut raw = [0u8; COORDINATE_BYTES];
        self.interface
            .read_many(REG_LON_START, &mut raw)
            .map_err(Error::from)?;
        Ok(readings::decode_coordinate(&raw, Hemisphere::West))
    }

    /// Reads the altitude of the current fix in meters.
    pub fn read_altitude(&mut self) -> Result<f32, CommE> {
        self.read_scaled(REG_ALT_H)
    }

    /// Reads the course over ground in degrees true.
    pub fn read_course_over_ground(&mut self) -> Result<f32, CommE> {
        self.read_scaled(REG_COG_H)
    }

    /// Reads the speed over ground in knots.
    pub fn read_speed_over_ground(&mut self) -> Result<f32, CommE> {
        self.read_scaled(REG_SOG_H)
    }

    /// Reads every field in one round, substituting no-fix defaults for any
    /// register group that fails to read.
    pub fn snapshot(&mut self) -> Snapshot {
        readings::read_snapshot(self)
    }

    // ==================================================================
    // == Internal Transaction Helpers ==================================
    // ==================================================================

    /// Writes a control byte and observes the settle window.
    ///
    /// The receiver needs the settle window even after a failed write
    /// attempt before it is safe to issue the next transaction.
    fn write_control(
        &mut self,
        register: u8,
        value: u8,
        delay: &mut impl DelayNs,
    ) -> Result<(), CommE> {
        let result = self
            .interface
            .write_register(register, value)
            .map_err(Error::from);
        delay.delay_ms(SETTLE_DELAY_MS);
        result
    }

    fn read_scaled(&mut self, register: u8) -> Result<f32, CommE> {
        let mut raw = [0u8; SCALED_BYTES];
        self.interface
            .read_many(register, &mut raw)
            .map_err(Error::from)?;
        Ok(readings::decode_scaled(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::DEFAULT_I2C_ADDRESS;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
    use std::string::ToString;
    use std::vec;
    use std::vec::Vec;

    const ADDR: u8 = DEFAULT_I2C_ADDRESS;

    fn gnss(transactions: &[I2cTransaction]) -> Gnss<I2cInterface<I2cMock>> {
        Gnss::new_i2c(I2cMock::new(transactions), Config::default())
    }

    fn finish(driver: Gnss<I2cInterface<I2cMock>>) {
        let (mut i2c, _config) = driver.release_i2c();
        i2c.done();
    }

    #[test]
    fn init_applies_mode_power_and_rgb_in_order() {
        let config = Config::new()
            .mode(GnssMode::Gps)
            .power(PowerState::Enabled)
            .rgb(RgbState::On)
            .build();
        let expectations = [
            I2cTransaction::write(ADDR, vec![REG_GNSS_MODE, 0x01]),
            I2cTransaction::write(ADDR, vec![REG_SLEEP_MODE, 0x00]),
            I2cTransaction::write(ADDR, vec![REG_RGB_MODE, 0x05]),
        ];
        let mut driver = Gnss::new_i2c(I2cMock::new(&expectations), config);

        driver.init(&mut NoopDelay).unwrap();
        finish(driver);
    }

    #[test]
    fn set_gnss_mode_writes_each_valid_mode_byte() {
        let expectations: Vec<I2cTransaction> = (1..=7u8)
            .map(|raw| I2cTransaction::write(ADDR, vec![REG_GNSS_MODE, raw]))
            .collect();
        let mut driver = gnss(&expectations);

        for raw in 1..=7u8 {
            let mode = GnssMode::from_raw(raw).unwrap();
            driver.set_gnss_mode(mode, &mut NoopDelay).unwrap();
            assert_eq!(driver.config().mode, mode);
        }
        finish(driver);
    }

    #[test]
    fn set_gnss_mode_raw_rejects_out_of_range_without_bus_traffic() {
        let mut driver = gnss(&[]);

        for raw in [0u8, 8, 0x20, 0xFF] {
            assert_eq!(
                driver.set_gnss_mode_raw(raw, &mut NoopDelay),
                Err(Error::InvalidMode)
            );
        }
        finish(driver);
    }

    #[test]
    fn set_gnss_mode_raw_matches_typed_call() {
        let expectations = [
            I2cTransaction::write(ADDR, vec![REG_GNSS_MODE, 0x05]),
            I2cTransaction::write(ADDR, vec![REG_GNSS_MODE, 0x05]),
        ];
        let mut driver = gnss(&expectations);

        driver.set_gnss_mode_raw(5, &mut NoopDelay).unwrap();
        driver
            .set_gnss_mode(GnssMode::GpsGlonass, &mut NoopDelay)
            .unwrap();
        finish(driver);
    }

    #[test]
    fn read_gnss_mode_maps_register_byte() {
        let expectations = [I2cTransaction::write_read(
            ADDR,
            vec![REG_GNSS_MODE],
            vec![0x03],
        )];
        let mut driver = gnss(&expectations);

        assert_eq!(driver.read_gnss_mode().unwrap(), GnssMode::GpsBeiDou);
        finish(driver);
    }

    #[test]
    fn read_gnss_mode_rejects_out_of_range_device_byte() {
        let expectations = [I2cTransaction::write_read(
            ADDR,
            vec![REG_GNSS_MODE],
            vec![0x00],
        )];
        let mut driver = gnss(&expectations);

        assert_eq!(driver.read_gnss_mode(), Err(Error::InvalidMode));
        finish(driver);
    }

    #[test]
    fn power_and_rgb_controls_write_documented_constants() {
        let expectations = [
            I2cTransaction::write(ADDR, vec![REG_SLEEP_MODE, 0x00]),
            I2cTransaction::write(ADDR, vec![REG_SLEEP_MODE, 0x01]),
            I2cTransaction::write(ADDR, vec![REG_RGB_MODE, 0x05]),
            I2cTransaction::write(ADDR, vec![REG_RGB_MODE, 0x02]),
        ];
        let mut driver = gnss(&expectations);

        driver.enable_power(&mut NoopDelay).unwrap();
        driver.disable_power(&mut NoopDelay).unwrap();
        driver.rgb_on(&mut NoopDelay).unwrap();
        driver.rgb_off(&mut NoopDelay).unwrap();
        finish(driver);
    }

    #[test]
    fn control_write_failure_surfaces_interface_error() {
        let expectations = [I2cTransaction::write(ADDR, vec![REG_SLEEP_MODE, 0x00])
            .with_error(ErrorKind::Other)];
        let mut driver = gnss(&expectations);

        assert_eq!(
            driver.enable_power(&mut NoopDelay),
            Err(Error::Interface(ErrorKind::Other))
        );
        finish(driver);
    }

    #[test]
    fn read_satellites_used_returns_count_byte() {
        let expectations = [I2cTransaction::write_read(
            ADDR,
            vec![REG_SATELLITES_USED],
            vec![11],
        )];
        let mut driver = gnss(&expectations);

        assert_eq!(driver.read_satellites_used().unwrap(), 11);
        finish(driver);
    }

    #[test]
    fn read_date_decodes_big_endian_year() {
        let expectations = [I2cTransaction::write_read(
            ADDR,
            vec![REG_YEAR_H],
            vec![0x07, 0xE8, 5, 17],
        )];
        let mut driver = gnss(&expectations);

        assert_eq!(driver.read_date().unwrap().to_string(), "2024-05-17");
        finish(driver);
    }

    #[test]
    fn read_date_roundtrips_register_layout() {
        for year in [2000u16, 2024, 2099] {
            for month in [1u8, 12] {
                for day in [1u8, 28] {
                    let [year_h, year_l] = year.to_be_bytes();
                    let expectations = [I2cTransaction::write_read(
                        ADDR,
                        vec![REG_YEAR_H],
                        vec![year_h, year_l, month, day],
                    )];
                    let mut driver = gnss(&expectations);

                    let date = driver.read_date().unwrap();
                    assert_eq!(
                        date.to_string(),
                        std::format!("{year:04}-{month:02}-{day:02}")
                    );
                    finish(driver);
                }
            }
        }
    }

    #[test]
    fn read_time_decodes_hour_minute_second() {
        let expectations = [I2cTransaction::write_read(
            ADDR,
            vec![REG_HOUR],
            vec![12, 34, 56],
        )];
        let mut driver = gnss(&expectations);

        assert_eq!(driver.read_time().unwrap().to_string(), "12:34:56");
        finish(driver);
    }

    #[test]
    fn read_latitude_decodes_degrees_and_hemisphere() {
        let expectations = [I2cTransaction::write_read(
            ADDR,
            vec![REG_LAT_START],
            vec![22, 30, 0x00, 0xC3, 0x50, b'N'],
        )];
        let mut driver = gnss(&expectations);

        let coord = driver.read_latitude().unwrap();
        let expected = 22.0 + 30.0 / 60.0 + 0.5 / 60.0;
        assert!((coord.degrees - expected).abs() < 1e-5);
        assert_eq!(coord.hemisphere, Hemisphere::North);
        finish(driver);
    }

    #[test]
    fn read_longitude_falls_back_to_west_on_blank_letter() {
        let expectations = [I2cTransaction::write_read(
            ADDR,
            vec![REG_LON_START],
            vec![0, 0, 0, 0, 0, 0],
        )];
        let mut driver = gnss(&expectations);

        let coord = driver.read_longitude().unwrap();
        assert_eq!(coord.degrees, 0.0);
        assert_eq!(coord.hemisphere, Hemisphere::West);
        finish(driver);
    }

    #[test]
    fn scaled_quantities_share_one_decoding() {
        let expectations = [
            I2cTransaction::write_read(ADDR, vec![REG_ALT_H], vec![1, 44, 50]),
            I2cTransaction::write_read(ADDR, vec![REG_COG_H], vec![0, 90, 25]),
            I2cTransaction::write_read(ADDR, vec![REG_SOG_H], vec![0, 12, 75]),
        ];
        let mut driver = gnss(&expectations);

        assert_eq!(driver.read_altitude().unwrap(), 300.5);
        assert_eq!(driver.read_course_over_ground().unwrap(), 90.25);
        assert_eq!(driver.read_speed_over_ground().unwrap(), 12.75);
        finish(driver);
    }

    #[test]
    fn read_failure_surfaces_interface_error() {
        let expectations = [I2cTransaction::write_read(
            ADDR,
            vec![REG_YEAR_H],
            vec![0, 0, 0, 0],
        )
        .with_error(ErrorKind::Other)];
        let mut driver = gnss(&expectations);

        assert_eq!(driver.read_date(), Err(Error::Interface(ErrorKind::Other)));
        finish(driver);
    }

    #[test]
    fn snapshot_reads_every_field() {
        let expectations = [
            I2cTransaction::write_read(ADDR, vec![REG_GNSS_MODE], vec![0x07]),
            I2cTransaction::write_read(ADDR, vec![REG_SATELLITES_USED], vec![9]),
            I2cTransaction::write_read(ADDR, vec![REG_YEAR_H], vec![0x07, 0xE8, 5, 17]),
            I2cTransaction::write_read(ADDR, vec![REG_HOUR], vec![12, 34, 56]),
            I2cTransaction::write_read(
                ADDR,
                vec![REG_LAT_START],
                vec![52, 22, 0x00, 0xC3, 0x50, b'N'],
            ),
            I2cTransaction::write_read(
                ADDR,
                vec![REG_LON_START],
                vec![4, 53, 0x00, 0x00, 0x00, b'E'],
            ),
            I2cTransaction::write_read(ADDR, vec![REG_ALT_H], vec![0, 2, 40]),
            I2cTransaction::write_read(ADDR, vec![REG_COG_H], vec![0, 90, 0]),
            I2cTransaction::write_read(ADDR, vec![REG_SOG_H], vec![0, 5, 50]),
        ];
        let mut driver = gnss(&expectations);

        let snap = driver.snapshot();
        assert_eq!(snap.mode, GnssMode::GpsBeiDouGlonass);
        assert_eq!(snap.satellites, 9);
        assert_eq!(snap.date.to_string(), "2024-05-17");
        assert_eq!(snap.time.to_string(), "12:34:56");
        assert_eq!(snap.latitude.hemisphere, Hemisphere::North);
        assert_eq!(snap.longitude.hemisphere, Hemisphere::East);
        assert_eq!(snap.altitude_m, 2.4);
        assert_eq!(snap.course_deg, 90.0);
        assert_eq!(snap.speed_knots, 5.5);
        finish(driver);
    }

    #[test]
    fn snapshot_substitutes_no_fix_defaults_on_read_failures() {
        let failed = |register: u8, len: usize| {
            I2cTransaction::write_read(ADDR, vec![register], vec![0; len])
                .with_error(ErrorKind::Other)
        };
        let expectations = [
            failed(REG_GNSS_MODE, 1),
            failed(REG_SATELLITES_USED, 1),
            failed(REG_YEAR_H, 4),
            failed(REG_HOUR, 3),
            failed(REG_LAT_START, 6),
            failed(REG_LON_START, 6),
            failed(REG_ALT_H, 3),
            failed(REG_COG_H, 3),
            failed(REG_SOG_H, 3),
        ];
        let mut driver = gnss(&expectations);

        let snap = driver.snapshot();
        assert_eq!(snap.mode, Config::default().mode);
        assert_eq!(snap.satellites, 0);
        assert_eq!(snap.date.to_string(), "2000-01-01");
        assert_eq!(snap.time.to_string(), "00:00:00");
        assert_eq!(snap.latitude.degrees, 0.0);
        assert_eq!(snap.latitude.hemisphere.as_char(), 'S');
        assert_eq!(snap.longitude.degrees, 0.0);
        assert_eq!(snap.longitude.hemisphere.as_char(), 'W');
        assert_eq!(snap.altitude_m, 0.0);
        assert_eq!(snap.course_deg, 0.0);
        assert_eq!(snap.speed_knots, 0.0);
        finish(driver);
    }
}

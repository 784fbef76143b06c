//! Polls the GNSS module every two seconds and prints the fix over RTT.

#![no_std]
#![no_main]

use defmt::info;
use dfrobot_gnss::Gnss;
use dfrobot_gnss::config::Config;
use dfrobot_gnss::params::GnssMode;
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::main;
use panic_rtt_target as _;

esp_bootloader_esp_idf::esp_app_desc!();

const POLL_INTERVAL_MS: u32 = 2_000;

#[main]
fn main() -> ! {
    rtt_target::rtt_init_defmt!();

    let peripherals = esp_hal::init(esp_hal::Config::default().with_cpu_clock(CpuClock::max()));

    let i2c = I2c::new(peripherals.I2C0, I2cConfig::default())
        .unwrap()
        .with_sda(peripherals.GPIO21)
        .with_scl(peripherals.GPIO22);

    let mut delay = Delay::new();

    let config = Config::new().mode(GnssMode::Gps).build();
    let mut gnss = Gnss::new_i2c(i2c, config);

    if gnss.init(&mut delay).is_err() {
        info!("gnss init failed; polling anyway");
    }

    loop {
        info!("{}", gnss.snapshot());
        delay.delay_millis(POLL_INTERVAL_MS);
    }
}

//! Configuration primitives for the GNSS driver.

use crate::params::{GnssMode, PowerState, RgbState};

/// User-facing configuration applied by [`Gnss::init`](crate::Gnss::init).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Constellation selection.
    pub mode: GnssMode,
    /// Receiver power state.
    pub power: PowerState,
    /// RGB indicator state.
    pub rgb: RgbState,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the constellation selection.
    pub fn mode(mut self, mode: GnssMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Overrides the receiver power state.
    pub fn power(mut self, power: PowerState) -> Self {
        self.config.power = power;
        self
    }

    /// Overrides the RGB indicator state.
    pub fn rgb(mut self, rgb: RgbState) -> Self {
        self.config.rgb = rgb;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: GnssMode::GpsBeiDouGlonass,
            power: PowerState::Enabled,
            rgb: RgbState::On,
        }
    }
}

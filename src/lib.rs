#![no_std]

#[cfg(test)]
extern crate std;

mod error;
mod log;

pub mod config;
pub mod device;
pub mod interface;
pub mod params;
pub mod readings;
pub mod registers;

pub use crate::device::Gnss;
pub use crate::error::{Error, Result};
pub use crate::registers::DEFAULT_I2C_ADDRESS;

// src/core/battery/mod.rs

//! Battery sensor sources

pub mod sysfs_source;

pub use sysfs_source::SysfsSource;

use anyhow::Result;

// One fresh sample of the battery sensor files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatteryReading {
    pub status: String,
    pub energy_full: u32,
    pub energy_now: u32,
}

// Anything that can produce a fresh battery reading on demand.
pub trait BatterySource {
    fn read(&self) -> Result<BatteryReading>;
}

// src/core/battery/sysfs_source.rs

use once_cell::sync::OnceCell;

use super::{BatteryReading, BatterySource};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

static SYSFS_BATTERY_PATH: OnceCell<PathBuf> = OnceCell::new();

const POWER_SUPPLY_BASE: &str = "/sys/class/power_supply";

// Reads battery info from Linux sysfs
pub struct SysfsSource {
    path: PathBuf,
}

impl SysfsSource {
    // Scan `/sys/class/power_supply/` for a `type == Battery` entry.
    // Single-battery scope: the first match wins, and the result is
    // memoised for the process lifetime.
    pub fn discover() -> Result<Self> {
        let path = SYSFS_BATTERY_PATH
            .get_or_try_init(|| {
                let base = PathBuf::from(POWER_SUPPLY_BASE);
                for entry in fs::read_dir(&base)
                    .with_context(|| format!("Reading {POWER_SUPPLY_BASE}"))?
                {
                    let entry = entry?;
                    let type_file = entry.path().join("type");
                    let typ = fs::read_to_string(&type_file)
                        .with_context(|| format!("Reading {}", type_file.display()))?;
                    if typ.trim() == "Battery" {
                        return Ok(entry.path());
                    }
                }
                anyhow::bail!("No battery supply found in sysfs");
            })?
            .clone();

        Ok(Self { path })
    }

    // Use a named entry such as `BAT0` directly, skipping discovery
    pub fn with_device(name: &str) -> Self {
        SysfsSource {
            path: PathBuf::from(POWER_SUPPLY_BASE).join(name),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        SysfsSource { path }
    }

    // Read one sysfs file under the battery path and trim the trailing newline
    fn read_trimmed(&self, name: &str) -> Result<String> {
        let file = self.path.join(name);
        let data = fs::read_to_string(&file)
            .with_context(|| format!("Reading sysfs file {}", file.display()))?;
        Ok(data.trim().to_string())
    }

    // The energy files are base-10 unsigned integers that fit in 32 bits
    fn read_energy(&self, name: &str) -> Result<u32> {
        let raw = self.read_trimmed(name)?;
        raw.parse::<u32>()
            .with_context(|| format!("Parsing {name} value {raw:?}"))
    }
}

impl BatterySource for SysfsSource {
    fn read(&self) -> Result<BatteryReading> {
        let status = self.read_trimmed("status")?;
        let energy_full = self.read_energy("energy_full")?;
        let energy_now = self.read_energy("energy_now")?;
        Ok(BatteryReading {
            status,
            energy_full,
            energy_now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::SysfsSource;
    use super::{BatteryReading, BatterySource};
    use std::fs;
    use tempfile::TempDir;

    fn fake_battery(status: &str, full: &str, now: &str) -> (TempDir, SysfsSource) {
        let td = TempDir::new().unwrap();
        let bat_dir = td.path().join("BAT0");
        fs::create_dir_all(&bat_dir).unwrap();
        fs::write(bat_dir.join("type"), "Battery\n").unwrap();
        fs::write(bat_dir.join("status"), status).unwrap();
        fs::write(bat_dir.join("energy_full"), full).unwrap();
        fs::write(bat_dir.join("energy_now"), now).unwrap();
        let source = SysfsSource::with_path(bat_dir);
        (td, source)
    }

    #[test]
    fn read_fake_sysfs() {
        let (_td, source) = fake_battery("Charging\n", "50000\n", "5000\n");
        let reading = source.read().unwrap();
        assert_eq!(
            reading,
            BatteryReading {
                status: "Charging".into(),
                energy_full: 50000,
                energy_now: 5000,
            }
        );
    }

    #[test]
    fn malformed_energy_is_an_error() {
        let (_td, source) = fake_battery("Discharging\n", "not-a-number\n", "5000\n");
        let err = source.read().unwrap_err();
        assert!(err.to_string().contains("energy_full"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let td = TempDir::new().unwrap();
        let source = SysfsSource::with_path(td.path().join("BAT9"));
        assert!(source.read().is_err());
    }
}

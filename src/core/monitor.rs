// src/core/monitor.rs
//
// The battery state machine: percentage derivation, charging-edge
// detection and the rate-limited low-battery warning.

use anyhow::Result;
use std::time::{Duration, Instant};
use tracing::{debug, error};

use super::battery::BatteryReading;
use super::notify::{Notification, Notifier, Urgency};

// Percentage at or below which we nag the user to plug in
pub const CRITICAL_ENERGY_LEVEL: f64 = 24.0;

// Minimum gap between consecutive low-battery warnings
pub const WARNING_COOLDOWN: Duration = Duration::from_secs(10);

// How often the main loop samples the battery
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

const APP_NAME: &str = "batnotify";
const EXPIRE_TIMEOUT: Duration = Duration::from_secs(5);

// Charging states from linux/power_supply.h. The classifier only ever
// produces `Charging` or `Discharging` today; the rest are kept so the
// vocabulary matches the kernel's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChargeState {
    Unknown,
    Charging,
    Discharging,
    #[default]
    NotCharging,
    Full,
}

// floor(100 * energy_now / energy_full). A zero capacity means the sensor
// gave us garbage, so it is an error rather than a NaN.
pub fn percentage(energy_now: u32, energy_full: u32) -> Result<f64> {
    if energy_full == 0 {
        anyhow::bail!("energy_full is zero; cannot derive a percentage");
    }
    Ok((100.0 * f64::from(energy_now) / f64::from(energy_full)).floor())
}

// Exact match on the trimmed sysfs status line; anything that is not
// literally "Charging" counts as discharging.
pub fn classify(status: &str) -> ChargeState {
    if status.trim() == "Charging" {
        ChargeState::Charging
    } else {
        ChargeState::Discharging
    }
}

// Holds the last-known battery state and decides when notifications fire.
// Time comes in as a parameter so the rules can be driven from tests
// without sleeping.
pub struct BatteryMonitor<N: Notifier> {
    charge_state: ChargeState,
    energy_level: f64,
    last_warning: Option<Instant>,
    notifier: N,
}

impl<N: Notifier> BatteryMonitor<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            charge_state: ChargeState::NotCharging,
            energy_level: 99.99,
            last_warning: None,
            notifier,
        }
    }

    pub fn charge_state(&self) -> ChargeState {
        self.charge_state
    }

    pub fn energy_level(&self) -> f64 {
        self.energy_level
    }

    // One poll cycle: refresh derived state, then evaluate the
    // notification rules.
    pub fn tick(&mut self, reading: &BatteryReading, now: Instant) -> Result<()> {
        self.energy_level = percentage(reading.energy_now, reading.energy_full)?;

        let next = classify(&reading.status);
        if next == ChargeState::Charging && self.charge_state != ChargeState::Charging {
            self.send_charging_started();
        }
        self.charge_state = next;

        debug!(state = ?self.charge_state, level = self.energy_level, "battery sampled");

        self.maybe_warn(now);
        Ok(())
    }

    // Fires once per transition into Charging, not once per tick while
    // Charging persists.
    fn send_charging_started(&self) {
        let n = Notification {
            app_name: APP_NAME.into(),
            replaces_id: 0,
            summary: "Battery Status".into(),
            body: "Charging".into(),
            expire_timeout: EXPIRE_TIMEOUT,
            urgency: Some(Urgency::Normal),
        };
        if let Err(e) = self.notifier.send(&n) {
            error!(error = %e, "error sending charging notification");
        }
    }

    // The low-battery rule. Ordering matters here: `last_warning` is only
    // updated when control reaches the send call, so a tick that fails the
    // percentage gate does not restart the cooldown.
    fn maybe_warn(&mut self, now: Instant) {
        if let Some(at) = self.last_warning {
            if now.duration_since(at) < WARNING_COOLDOWN {
                return;
            }
        }
        if self.charge_state == ChargeState::Charging {
            return;
        }
        if self.energy_level > CRITICAL_ENERGY_LEVEL {
            return;
        }

        let n = Notification {
            app_name: APP_NAME.into(),
            replaces_id: 0,
            summary: "Battery leveling warning".into(),
            body: "Please charge your laptop!".into(),
            expire_timeout: EXPIRE_TIMEOUT,
            urgency: Some(Urgency::Critical),
        };
        let sent = self.notifier.send(&n);
        self.last_warning = Some(now);
        if let Err(e) = sent {
            error!(error = %e, "error sending low-battery warning");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_floors() {
        assert_eq!(percentage(5000, 50000).unwrap(), 10.0);
        assert_eq!(percentage(2499, 10000).unwrap(), 24.0);
        assert_eq!(percentage(0, 10000).unwrap(), 0.0);
        assert_eq!(percentage(10000, 10000).unwrap(), 100.0);
    }

    #[test]
    fn percentage_stays_in_bounds() {
        for now in [0u32, 1, 4999, 5000, 49999, 50000] {
            let pct = percentage(now, 50000).unwrap();
            assert!((0.0..=100.0).contains(&pct), "pct {pct} out of bounds");
        }
    }

    #[test]
    fn percentage_rejects_zero_capacity() {
        assert!(percentage(5000, 0).is_err());
    }

    #[test]
    fn classify_exact_match_only() {
        assert_eq!(classify("Charging"), ChargeState::Charging);
        assert_eq!(classify("Charging\n"), ChargeState::Charging);
        assert_eq!(classify("Discharging"), ChargeState::Discharging);
        assert_eq!(classify("Not charging"), ChargeState::Discharging);
        assert_eq!(classify("Full"), ChargeState::Discharging);
        assert_eq!(classify("charging"), ChargeState::Discharging);
        assert_eq!(classify(""), ChargeState::Discharging);
    }
}

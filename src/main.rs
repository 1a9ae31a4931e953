// src/main.rs
extern crate anyhow;
extern crate batnotify;

use anyhow::{Context, Result};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

use batnotify::core::battery::{BatterySource, SysfsSource};
use batnotify::core::config::Config;
use batnotify::core::monitor::{BatteryMonitor, POLL_INTERVAL};
use batnotify::core::notify::DbusNotifier;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Fatal setup: no battery or no session bus means nothing to monitor
    let config = Config::load().context("Loading configuration")?;
    let source = match config.battery.device.as_deref() {
        Some(name) => SysfsSource::with_device(name),
        None => SysfsSource::discover().context("Discovering battery in sysfs")?,
    };
    let notifier = DbusNotifier::new().context("Connecting to the notification service")?;
    let mut monitor = BatteryMonitor::new(notifier);

    info!("batnotify started");

    // Single polling context: each tick reads, classifies and notifies
    // before the next one runs. Sensor errors abort the process.
    let mut ticker = tokio::time::interval(POLL_INTERVAL);
    loop {
        ticker.tick().await;
        let reading = source.read().context("Reading battery sensors")?;
        monitor.tick(&reading, Instant::now())?;
    }
}

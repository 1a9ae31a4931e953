// src/core/notify/dbus_notifier.rs

use super::{Notification, Notifier};
use anyhow::{Context, Result};
use std::collections::HashMap;
use zbus::blocking::{Connection, Proxy};
use zbus::zvariant::Value;

/// Desktop Notifications constants
const NOTIFY_SERVICE: &str = "org.freedesktop.Notifications";
const NOTIFY_PATH: &str = "/org/freedesktop/Notifications";
const NOTIFY_IFACE: &str = "org.freedesktop.Notifications";

// A `Notifier` that talks to the session D-Bus notification service.
// The connection is acquired once and reused for every send.
pub struct DbusNotifier {
    notifications: Proxy<'static>,
}

impl DbusNotifier {
    pub fn new() -> Result<Self> {
        let conn = Connection::session().context("Failed to connect to the session D‑Bus")?;
        let notifications = Proxy::new(&conn, NOTIFY_SERVICE, NOTIFY_PATH, NOTIFY_IFACE)
            .context("Creating notification service proxy")?;
        Ok(Self { notifications })
    }
}

impl Notifier for DbusNotifier {
    fn send(&self, n: &Notification) -> Result<u32> {
        let mut hints: HashMap<&str, Value> = HashMap::new();
        if let Some(urgency) = n.urgency {
            hints.insert("urgency", Value::U8(urgency.hint_byte()));
        }

        // org.freedesktop.Notifications.Notify(susssasa{sv}i);
        // empty icon, no actions, expiry in milliseconds
        let actions: Vec<&str> = Vec::new();
        let expire_ms = i32::try_from(n.expire_timeout.as_millis()).unwrap_or(i32::MAX);
        let id: u32 = self
            .notifications
            .call(
                "Notify",
                &(
                    n.app_name.as_str(),
                    n.replaces_id,
                    "",
                    n.summary.as_str(),
                    n.body.as_str(),
                    actions,
                    hints,
                    expire_ms,
                ),
            )
            .context("Calling Notify on the session bus")?;
        Ok(id)
    }
}

// src/core/notify/mod.rs

//! Desktop notification types and backends

pub mod dbus_notifier;
pub mod notification;

pub use dbus_notifier::DbusNotifier;
pub use notification::{Notification, Notifier, Urgency};

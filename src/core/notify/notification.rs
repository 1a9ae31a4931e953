// src/core/notify/notification.rs

use anyhow::Result;
use std::time::Duration;

// Priority hint consumed by the notification server to influence
// presentation (persistence, colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Low,
    Normal,
    Critical,
}

impl Urgency {
    // Byte value of the `urgency` hint in the Desktop Notifications spec
    pub fn hint_byte(self) -> u8 {
        match self {
            Urgency::Low => 0,
            Urgency::Normal => 1,
            Urgency::Critical => 2,
        }
    }
}

// One fire-and-forget desktop notification request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub app_name: String,
    pub replaces_id: u32,
    pub summary: String,
    pub body: String,
    pub expire_timeout: Duration,
    pub urgency: Option<Urgency>,
}

// Anything capable of displaying a transient desktop alert.
pub trait Notifier {
    // Returns the server-assigned notification id
    fn send(&self, notification: &Notification) -> Result<u32>;
}

// Lets a notifier be shared by reference, e.g. with a test double that
// records what was sent.
impl<N: Notifier + ?Sized> Notifier for &N {
    fn send(&self, notification: &Notification) -> Result<u32> {
        (**self).send(notification)
    }
}

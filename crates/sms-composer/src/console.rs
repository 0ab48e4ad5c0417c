//! Notifications printed to the terminal.

use sms_form::{Notification, NotificationLevel, Notifier};
use tracing::{error, info};

/// Prints notifications on stdout and mirrors them to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => info!(at = %notification.at, "{}", notification.text),
            NotificationLevel::Error => error!(at = %notification.at, "{}", notification.text),
        }
        println!("{}", notification);
    }
}

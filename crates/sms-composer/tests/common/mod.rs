//! Common test utilities for integration tests.

use sms_form::{ComposerSettings, ContactRule, Notification, Notifier, SmsComposer};
use sms_gateway::{FixtureCustomers, MockSmsSink};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Notifier that keeps everything it is given.
#[derive(Default)]
pub struct CollectingNotifier {
    pub notifications: Mutex<Vec<Notification>>,
}

impl CollectingNotifier {
    pub fn texts(&self) -> Vec<String> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.text.clone())
            .collect()
    }
}

impl Notifier for CollectingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

/// Create a composer over the built-in customers and an in-memory sink.
pub fn test_composer(
    sink: MockSmsSink,
    contact_rule: ContactRule,
) -> (SmsComposer, Arc<CollectingNotifier>) {
    let notifier = Arc::new(CollectingNotifier::default());
    let composer = SmsComposer::new(
        Arc::new(FixtureCustomers::new()),
        Arc::new(sink),
        notifier.clone(),
        ComposerSettings {
            contact_rule,
            hint_duration: Duration::from_secs(2),
        },
    );
    (composer, notifier)
}

//! Transient input hints.

use std::time::Duration;
use tokio::time::Instant;

/// How long an "invalid input" hint stays up.
pub const DEFAULT_HINT_DURATION: Duration = Duration::from_secs(2);

/// A hint that dismisses itself once its window lapses.
///
/// Raising it again while visible restarts the window.
#[derive(Debug, Clone)]
pub struct TransientSignal {
    duration: Duration,
    visible_until: Option<Instant>,
}

impl TransientSignal {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            visible_until: None,
        }
    }

    pub fn raise(&mut self) {
        self.visible_until = Some(Instant::now() + self.duration);
    }

    pub fn clear(&mut self) {
        self.visible_until = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible_until
            .is_some_and(|until| Instant::now() < until)
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Default for TransientSignal {
    fn default() -> Self {
        Self::new(DEFAULT_HINT_DURATION)
    }
}

//! Message sinks.

use crate::error::GatewayError;
use crate::types::{SendSmsRequest, SentMessage};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

/// Destination for composed messages.
#[async_trait]
pub trait SmsSink: Send + Sync {
    /// Dispatch a single message. The call is atomic: it either succeeds or fails.
    async fn send_sms(&self, request: SendSmsRequest) -> Result<(), GatewayError>;
}

/// Sink that simulates dispatch latency and keeps what it was given.
#[derive(Clone)]
pub struct MockSmsSink {
    delay: Duration,
    fail: bool,
    sent: Arc<RwLock<Vec<SentMessage>>>,
}

impl MockSmsSink {
    /// Create a sink that accepts every message after `delay`.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            fail: false,
            sent: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Make every send fail after the delay.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Messages accepted so far, oldest first.
    pub async fn sent(&self) -> Vec<SentMessage> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl SmsSink for MockSmsSink {
    #[instrument(skip(self, request), fields(customer = %request.customer_id))]
    async fn send_sms(&self, request: SendSmsRequest) -> Result<(), GatewayError> {
        tokio::time::sleep(self.delay).await;

        if self.fail {
            warn!("Simulated send failure");
            return Err(GatewayError::SendFailed("simulated failure".into()));
        }

        let mut sent = self.sent.write().await;
        sent.push(SentMessage::new(request));
        debug!("Accepted message (total: {})", sent.len());
        Ok(())
    }
}

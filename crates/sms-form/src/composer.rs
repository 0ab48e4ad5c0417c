//! The compose form and its two asynchronous operations.

use crate::error::FormError;
use crate::form::{ContactRule, FormState};
use crate::mask::{FieldMask, MaskResult, PhoneNumberMask, TicketIdMask};
use crate::notify::{Notification, Notifier};
use crate::signal::{TransientSignal, DEFAULT_HINT_DURATION};
use sms_gateway::{Customer, CustomerSource, SendSmsRequest, SmsSink};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Hint shown next to a field that rejected input.
pub const NUMBERS_ONLY_HINT: &str = "Only numbers are accepted";

/// Tunables for a composer.
#[derive(Debug, Clone, Copy)]
pub struct ComposerSettings {
    pub contact_rule: ContactRule,
    pub hint_duration: Duration,
}

impl Default for ComposerSettings {
    fn default() -> Self {
        Self {
            contact_rule: ContactRule::default(),
            hint_duration: DEFAULT_HINT_DURATION,
        }
    }
}

/// Result of a send attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The sink accepted the message and the form was cleared.
    Sent,
    /// The sink failed; the form is unchanged.
    Failed,
    /// Nothing was attempted: the form is incomplete or a send is in flight.
    Rejected,
}

/// Owns the form state and drives customer loading and sending.
pub struct SmsComposer {
    source: Arc<dyn CustomerSource>,
    sink: Arc<dyn SmsSink>,
    notifier: Arc<dyn Notifier>,
    contact_rule: ContactRule,
    customers: Vec<Customer>,
    loading: bool,
    form: FormState,
    ticket_hint: TransientSignal,
    number_hint: TransientSignal,
}

impl SmsComposer {
    pub fn new(
        source: Arc<dyn CustomerSource>,
        sink: Arc<dyn SmsSink>,
        notifier: Arc<dyn Notifier>,
        settings: ComposerSettings,
    ) -> Self {
        Self {
            source,
            sink,
            notifier,
            contact_rule: settings.contact_rule,
            customers: Vec::new(),
            loading: true,
            form: FormState::new(),
            ticket_hint: TransientSignal::new(settings.hint_duration),
            number_hint: TransientSignal::new(settings.hint_duration),
        }
    }

    /// Fetch the customer list. Failures leave the list empty.
    #[instrument(skip(self))]
    pub async fn load_customers(&mut self) {
        self.loading = true;

        match self.source.fetch_customers().await {
            Ok(customers) => {
                info!("Loaded {} customers", customers.len());
                self.customers = customers;
            }
            Err(e) => {
                error!("Error fetching customers: {}", e);
                self.customers.clear();
                self.notifier
                    .notify(Notification::error("Failed to load customers"));
            }
        }

        self.loading = false;
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether a customer can currently be picked.
    pub fn selector_available(&self) -> bool {
        !self.loading && !self.customers.is_empty()
    }

    /// Select the sending customer. An empty id clears the selection.
    pub fn select_customer(&mut self, id: &str) -> Result<(), FormError> {
        if id.is_empty() {
            self.form.selected_customer_id.clear();
            return Ok(());
        }
        if !self.selector_available() {
            return Err(FormError::SelectorUnavailable);
        }
        if !self.customers.iter().any(|c| c.id == id) {
            return Err(FormError::UnknownCustomer(id.to_string()));
        }

        self.form.selected_customer_id = id.to_string();
        Ok(())
    }

    pub fn selected_customer(&self) -> Option<&Customer> {
        self.customers
            .iter()
            .find(|c| c.id == self.form.selected_customer_id)
    }

    /// Apply a raw edit of the ticket-ID field.
    pub fn input_ticket(&mut self, raw: &str) -> MaskResult {
        let result = TicketIdMask.apply(&self.form.ticket_id, raw);
        self.form.ticket_id = result.normalized_value.clone();
        update_hint(&mut self.ticket_hint, &result);
        result
    }

    /// Apply a raw edit of the destination-number field.
    pub fn input_number(&mut self, raw: &str) -> MaskResult {
        let result = PhoneNumberMask.apply(&self.form.to_number, raw);
        self.form.to_number = result.normalized_value.clone();
        update_hint(&mut self.number_hint, &result);
        result
    }

    pub fn set_message(&mut self, text: impl Into<String>) {
        self.form.message_text = text.into();
    }

    /// Character count of the message.
    pub fn message_len(&self) -> usize {
        self.form.message_text.chars().count()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn contact_rule(&self) -> ContactRule {
        self.contact_rule
    }

    pub fn is_valid(&self) -> bool {
        self.form.is_valid(self.contact_rule)
    }

    /// Whether the send action is enabled.
    pub fn can_send(&self) -> bool {
        self.is_valid() && !self.form.sending
    }

    pub fn ticket_hint_visible(&self) -> bool {
        self.ticket_hint.is_visible()
    }

    pub fn number_hint_visible(&self) -> bool {
        self.number_hint.is_visible()
    }

    /// Dispatch the composed message.
    #[instrument(skip(self), fields(customer = %self.form.selected_customer_id))]
    pub async fn send(&mut self) -> SendOutcome {
        if !self.can_send() {
            debug!("Send ignored: form incomplete or already sending");
            return SendOutcome::Rejected;
        }

        let request = SendSmsRequest {
            customer_id: self.form.selected_customer_id.clone(),
            ticket_id: self.form.ticket_for_request(),
            to_number: self.form.number_for_request(),
            message: self.form.message_text.clone(),
        };

        self.form.sending = true;
        let outcome = match self.sink.send_sms(request).await {
            Ok(()) => {
                info!("SMS sent");
                self.notifier
                    .notify(Notification::success("SMS sent successfully!"));
                self.form.reset();
                self.ticket_hint.clear();
                self.number_hint.clear();
                SendOutcome::Sent
            }
            Err(e) => {
                error!("Error sending SMS: {}", e);
                self.notifier.notify(Notification::error("Failed to send SMS"));
                SendOutcome::Failed
            }
        };
        self.form.sending = false;

        outcome
    }
}

fn update_hint(hint: &mut TransientSignal, result: &MaskResult) {
    if result.rejected {
        hint.raise();
    } else {
        hint.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationLevel;
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::eq;
    use sms_gateway::GatewayError;
    use std::sync::Mutex;

    mock! {
        pub Source {}

        #[async_trait]
        impl CustomerSource for Source {
            async fn fetch_customers(&self) -> Result<Vec<Customer>, GatewayError>;
        }
    }

    mock! {
        pub Sink {}

        #[async_trait]
        impl SmsSink for Sink {
            async fn send_sms(&self, request: SendSmsRequest) -> Result<(), GatewayError>;
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        seen: Mutex<Vec<Notification>>,
    }

    impl RecordingNotifier {
        fn levels_and_texts(&self) -> Vec<(NotificationLevel, String)> {
            self.seen
                .lock()
                .unwrap()
                .iter()
                .map(|n| (n.level, n.text.clone()))
                .collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.seen.lock().unwrap().push(notification);
        }
    }

    fn customers() -> Vec<Customer> {
        vec![Customer::new("1", "John Smith"), Customer::new("2", "Sarah Johnson")]
    }

    fn source_ok() -> MockSource {
        let mut source = MockSource::new();
        source
            .expect_fetch_customers()
            .returning(|| Ok(customers()));
        source
    }

    fn composer(
        source: MockSource,
        sink: MockSink,
        rule: ContactRule,
    ) -> (SmsComposer, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let composer = SmsComposer::new(
            Arc::new(source),
            Arc::new(sink),
            notifier.clone(),
            ComposerSettings {
                contact_rule: rule,
                ..ComposerSettings::default()
            },
        );
        (composer, notifier)
    }

    async fn ready(sink: MockSink) -> (SmsComposer, Arc<RecordingNotifier>) {
        let (mut composer, notifier) = composer(source_ok(), sink, ContactRule::TicketOrNumber);
        composer.load_customers().await;
        (composer, notifier)
    }

    #[tokio::test]
    async fn test_load_customers() {
        let (mut composer, notifier) =
            composer(source_ok(), MockSink::new(), ContactRule::TicketOrNumber);
        assert!(composer.is_loading());
        assert!(!composer.selector_available());

        composer.load_customers().await;

        assert!(!composer.is_loading());
        assert!(composer.selector_available());
        assert_eq!(composer.customers(), customers().as_slice());
        assert!(notifier.levels_and_texts().is_empty());
    }

    #[tokio::test]
    async fn test_load_customers_failure() {
        let mut source = MockSource::new();
        source
            .expect_fetch_customers()
            .returning(|| Err(GatewayError::FetchFailed("connection refused".into())));
        let (mut composer, notifier) =
            composer(source, MockSink::new(), ContactRule::TicketOrNumber);

        composer.load_customers().await;

        assert!(!composer.is_loading());
        assert!(composer.customers().is_empty());
        assert!(!composer.selector_available());
        assert_eq!(
            composer.select_customer("1"),
            Err(FormError::SelectorUnavailable)
        );
        assert_eq!(
            notifier.levels_and_texts(),
            vec![(NotificationLevel::Error, "Failed to load customers".to_string())]
        );
    }

    #[tokio::test]
    async fn test_select_customer() {
        let (mut composer, _) = ready(MockSink::new()).await;

        composer.select_customer("2").unwrap();
        assert_eq!(composer.selected_customer().unwrap().name, "Sarah Johnson");

        assert_eq!(
            composer.select_customer("9"),
            Err(FormError::UnknownCustomer("9".into()))
        );
        assert_eq!(composer.form().selected_customer_id, "2");

        composer.select_customer("").unwrap();
        assert!(composer.selected_customer().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticket_input_hint() {
        let (mut composer, _) = ready(MockSink::new()).await;

        composer.input_ticket("12");
        let result = composer.input_ticket("12x");

        assert!(result.rejected);
        assert_eq!(composer.form().ticket_id, "12");
        assert!(composer.ticket_hint_visible());
        assert!(!composer.number_hint_visible());

        tokio::time::advance(DEFAULT_HINT_DURATION).await;
        assert!(!composer.ticket_hint_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_valid_ticket_input_clears_hint() {
        let (mut composer, _) = ready(MockSink::new()).await;

        composer.input_ticket("a");
        assert!(composer.ticket_hint_visible());

        composer.input_ticket("1");
        assert!(!composer.ticket_hint_visible());
        assert_eq!(composer.form().ticket_id, "1");
    }

    #[tokio::test(start_paused = true)]
    async fn test_number_input_hint() {
        let (mut composer, _) = ready(MockSink::new()).await;

        let result = composer.input_number("+1a2b3");

        assert_eq!(result.normalized_value, "+123");
        assert_eq!(composer.form().to_number, "+123");
        assert!(composer.number_hint_visible());

        composer.input_number("+1234");
        assert!(!composer.number_hint_visible());
    }

    #[tokio::test]
    async fn test_message_len_counts_characters() {
        let (mut composer, _) = ready(MockSink::new()).await;
        composer.set_message("héllo");
        assert_eq!(composer.message_len(), 5);
    }

    #[tokio::test]
    async fn test_send_success_resets_form() {
        let mut sink = MockSink::new();
        sink.expect_send_sms()
            .with(eq(SendSmsRequest {
                customer_id: "1".into(),
                ticket_id: Some("42".into()),
                to_number: Some("+15551234".into()),
                message: "Your order shipped".into(),
            }))
            .times(1)
            .returning(|_| Ok(()));
        let (mut composer, notifier) = ready(sink).await;

        composer.select_customer("1").unwrap();
        composer.input_ticket("42");
        composer.input_number("15551234");
        composer.set_message("Your order shipped");
        assert!(composer.can_send());

        assert_eq!(composer.send().await, SendOutcome::Sent);

        assert_eq!(composer.form(), &FormState::new());
        assert!(!composer.form().sending);
        assert!(!composer.can_send());
        assert_eq!(
            notifier.levels_and_texts(),
            vec![(NotificationLevel::Success, "SMS sent successfully!".to_string())]
        );
    }

    #[tokio::test]
    async fn test_send_omits_empty_contact_fields() {
        let mut sink = MockSink::new();
        sink.expect_send_sms()
            .withf(|request| request.ticket_id.as_deref() == Some("7") && request.to_number.is_none())
            .times(1)
            .returning(|_| Ok(()));
        let (mut composer, _) = ready(sink).await;

        composer.select_customer("2").unwrap();
        composer.input_ticket("7");
        composer.input_number("+");
        composer.set_message("Hi");

        assert_eq!(composer.send().await, SendOutcome::Sent);
    }

    #[tokio::test]
    async fn test_send_failure_keeps_form() {
        let mut sink = MockSink::new();
        sink.expect_send_sms()
            .times(1)
            .returning(|_| Err(GatewayError::SendFailed("timeout".into())));
        let (mut composer, notifier) = ready(sink).await;

        composer.select_customer("1").unwrap();
        composer.input_number("+4915112345");
        composer.set_message("Reminder");
        let before = composer.form().clone();

        assert_eq!(composer.send().await, SendOutcome::Failed);

        assert_eq!(composer.form(), &before);
        assert!(!composer.form().sending);
        assert_eq!(
            notifier.levels_and_texts(),
            vec![(NotificationLevel::Error, "Failed to send SMS".to_string())]
        );
    }

    #[tokio::test]
    async fn test_send_rejected_when_invalid() {
        let mut sink = MockSink::new();
        sink.expect_send_sms().never();
        let (mut composer, notifier) = ready(sink).await;

        composer.select_customer("1").unwrap();
        composer.input_ticket("1");
        composer.set_message("   ");

        assert_eq!(composer.send().await, SendOutcome::Rejected);
        assert_eq!(composer.form().ticket_id, "1");
        assert!(notifier.levels_and_texts().is_empty());
    }

    #[tokio::test]
    async fn test_contact_rule_none_allows_message_only() {
        let mut sink = MockSink::new();
        sink.expect_send_sms()
            .withf(|request| request.ticket_id.is_none() && request.to_number.is_none())
            .times(1)
            .returning(|_| Ok(()));
        let (mut composer, _) = composer(source_ok(), sink, ContactRule::None);
        composer.load_customers().await;

        composer.select_customer("1").unwrap();
        composer.set_message("Thanks for your call");

        assert_eq!(composer.send().await, SendOutcome::Sent);
    }

    #[tokio::test]
    async fn test_contact_rule_requires_ticket_or_number() {
        let mut sink = MockSink::new();
        sink.expect_send_sms().never();
        let (mut composer, _) = ready(sink).await;

        composer.select_customer("1").unwrap();
        composer.set_message("Thanks for your call");

        assert!(!composer.is_valid());
        assert_eq!(composer.send().await, SendOutcome::Rejected);
    }
}

//! Send command - dispatches the composed message.

use crate::commands::CommandHandler;
use crate::error::AppResult;
use async_trait::async_trait;
use sms_form::{SendOutcome, SmsComposer};
use tracing::info;

pub struct SendHandler;

#[async_trait]
impl CommandHandler for SendHandler {
    fn trigger(&self) -> &str {
        "send"
    }

    async fn execute(&self, composer: &mut SmsComposer, _args: &str) -> AppResult<String> {
        if !composer.can_send() {
            return Ok(missing_fields(composer));
        }

        info!("Sending...");
        Ok(match composer.send().await {
            SendOutcome::Sent => "Form cleared.".into(),
            SendOutcome::Failed => "Message kept, you can try again.".into(),
            SendOutcome::Rejected => missing_fields(composer),
        })
    }
}

fn missing_fields(composer: &SmsComposer) -> String {
    let form = composer.form();
    let mut missing = Vec::new();

    if form.selected_customer_id.is_empty() {
        missing.push("customer");
    }
    if form.message_text.trim().is_empty() {
        missing.push("message");
    }
    if !composer.contact_rule().is_satisfied(form) {
        missing.push("ticket ID or to number");
    }

    format!("Cannot send yet, missing: {}", missing.join(", "))
}

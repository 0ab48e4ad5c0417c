//! Status command - renders the current form.

use crate::commands::CommandHandler;
use crate::error::AppResult;
use async_trait::async_trait;
use sms_form::{SmsComposer, NUMBERS_ONLY_HINT};

pub struct StatusHandler;

#[async_trait]
impl CommandHandler for StatusHandler {
    fn trigger(&self) -> &str {
        "status"
    }

    async fn execute(&self, composer: &mut SmsComposer, _args: &str) -> AppResult<String> {
        Ok(render(composer))
    }
}

fn render(composer: &SmsComposer) -> String {
    let form = composer.form();
    let customer = match composer.selected_customer() {
        Some(c) => format!("{} ({})", c.name, c.id),
        None if composer.is_loading() => "Loading customers...".into(),
        None => "Select a customer".into(),
    };

    let mut out = format!("Customer:  {}\n", customer);
    out.push_str(&format!("Ticket ID: {}", form.ticket_id));
    if composer.ticket_hint_visible() {
        out.push_str(&format!("  <- {}", NUMBERS_ONLY_HINT));
    }
    out.push_str(&format!("\nTo number: {}", form.to_number));
    if composer.number_hint_visible() {
        out.push_str(&format!("  <- {}", NUMBERS_ONLY_HINT));
    }
    out.push_str(&format!(
        "\nMessage:   {}\n           {} characters\n",
        form.message_text,
        composer.message_len()
    ));
    out.push_str(if composer.can_send() {
        "[ Send SMS ]"
    } else {
        "[ Send SMS ] (incomplete)"
    });

    out
}

//! Ticket command - replaces the ticket-ID field with the typed text.

use crate::commands::CommandHandler;
use crate::error::AppResult;
use async_trait::async_trait;
use sms_form::{SmsComposer, NUMBERS_ONLY_HINT};

pub struct TicketHandler;

#[async_trait]
impl CommandHandler for TicketHandler {
    fn trigger(&self) -> &str {
        "ticket"
    }

    async fn execute(&self, composer: &mut SmsComposer, args: &str) -> AppResult<String> {
        let result = composer.input_ticket(args);

        if result.rejected {
            Ok(format!(
                "{} (ticket ID: {:?})",
                NUMBERS_ONLY_HINT, result.normalized_value
            ))
        } else {
            Ok(format!("Ticket ID: {:?}", result.normalized_value))
        }
    }
}

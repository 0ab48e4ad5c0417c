//! To command - replaces the destination-number field with the typed text.

use crate::commands::CommandHandler;
use crate::error::AppResult;
use async_trait::async_trait;
use sms_form::{SmsComposer, NUMBERS_ONLY_HINT};

pub struct NumberHandler;

#[async_trait]
impl CommandHandler for NumberHandler {
    fn trigger(&self) -> &str {
        "to"
    }

    async fn execute(&self, composer: &mut SmsComposer, args: &str) -> AppResult<String> {
        let result = composer.input_number(args);

        if result.rejected {
            Ok(format!(
                "{} (to number: {:?})",
                NUMBERS_ONLY_HINT, result.normalized_value
            ))
        } else {
            Ok(format!("To number: {:?}", result.normalized_value))
        }
    }
}

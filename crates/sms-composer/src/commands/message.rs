//! Message command - sets the message body.

use crate::commands::CommandHandler;
use crate::error::AppResult;
use async_trait::async_trait;
use sms_form::SmsComposer;

pub struct MessageHandler;

#[async_trait]
impl CommandHandler for MessageHandler {
    fn trigger(&self) -> &str {
        "message"
    }

    async fn execute(&self, composer: &mut SmsComposer, args: &str) -> AppResult<String> {
        composer.set_message(args);
        Ok(format!("{} characters", composer.message_len()))
    }
}

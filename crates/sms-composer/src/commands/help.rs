//! Help command - shows available commands.

use crate::commands::CommandHandler;
use crate::error::AppResult;
use async_trait::async_trait;
use sms_form::SmsComposer;

pub struct HelpHandler;

const HELP_TEXT: &str = r#"Send SMS Message

Commands:
  customers          List customers
  customer <id>      Select the sending customer (empty to clear)
  ticket <digits>    Set the ticket ID
  to <number>        Set the destination number, e.g. +1234567890
  message <text>     Set the message text
  status             Show the form
  send               Send the message
  help               Show this help

A ticket ID or a destination number is required unless configured otherwise."#;

#[async_trait]
impl CommandHandler for HelpHandler {
    fn trigger(&self) -> &str {
        "help"
    }

    async fn execute(&self, _composer: &mut SmsComposer, _args: &str) -> AppResult<String> {
        Ok(HELP_TEXT.into())
    }
}

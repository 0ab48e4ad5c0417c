//! Customer command - picks the sending customer.

use crate::commands::CommandHandler;
use crate::error::AppResult;
use async_trait::async_trait;
use sms_form::SmsComposer;

pub struct SelectHandler;

#[async_trait]
impl CommandHandler for SelectHandler {
    fn trigger(&self) -> &str {
        "customer"
    }

    async fn execute(&self, composer: &mut SmsComposer, args: &str) -> AppResult<String> {
        composer.select_customer(args.trim())?;

        Ok(match composer.selected_customer() {
            Some(customer) => format!("Customer: {}", customer.name),
            None => "Customer cleared.".into(),
        })
    }
}

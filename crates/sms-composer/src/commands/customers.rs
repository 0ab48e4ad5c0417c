//! Customers command - lists the customers a message can be sent for.

use crate::commands::CommandHandler;
use crate::error::AppResult;
use async_trait::async_trait;
use sms_form::SmsComposer;

pub struct CustomersHandler;

#[async_trait]
impl CommandHandler for CustomersHandler {
    fn trigger(&self) -> &str {
        "customers"
    }

    async fn execute(&self, composer: &mut SmsComposer, _args: &str) -> AppResult<String> {
        if composer.is_loading() {
            return Ok("Loading customers...".into());
        }
        if composer.customers().is_empty() {
            return Ok("No customers available.".into());
        }

        let selected = composer.form().selected_customer_id.as_str();
        let lines: Vec<String> = composer
            .customers()
            .iter()
            .map(|c| {
                let marker = if c.id == selected { '*' } else { ' ' };
                format!("{} {:>4}  {}", marker, c.id, c.name)
            })
            .collect();

        Ok(lines.join("\n"))
    }
}

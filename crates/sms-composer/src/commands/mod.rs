//! Command handlers driving the compose form.

mod customers;
mod help;
mod message;
mod number;
mod select;
mod send;
mod status;
mod ticket;

pub use customers::CustomersHandler;
pub use help::HelpHandler;
pub use message::MessageHandler;
pub use number::NumberHandler;
pub use select::SelectHandler;
pub use send::SendHandler;
pub use status::StatusHandler;
pub use ticket::TicketHandler;

use crate::error::AppResult;
use crate::input::CommandLine;
use async_trait::async_trait;
use sms_form::SmsComposer;

/// Command handler trait.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Command word (e.g., "send", "ticket").
    fn trigger(&self) -> &str;

    /// Check if this handler matches the input.
    fn matches(&self, line: &CommandLine) -> bool {
        line.command == self.trigger()
    }

    /// Execute the command against the form.
    async fn execute(&self, composer: &mut SmsComposer, args: &str) -> AppResult<String>;
}

/// Routes input lines to the first matching handler.
pub struct Dispatcher {
    handlers: Vec<Box<dyn CommandHandler>>,
}

impl Dispatcher {
    pub fn new(handlers: Vec<Box<dyn CommandHandler>>) -> Self {
        Self { handlers }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run the handler for `line`; unknown commands get a pointer to `help`.
    pub async fn dispatch(&self, composer: &mut SmsComposer, line: &CommandLine) -> AppResult<String> {
        match self.handlers.iter().find(|h| h.matches(line)) {
            Some(handler) => handler.execute(composer, &line.args).await,
            None => Ok(format!(
                "Unknown command '{}'. Type 'help' for a list of commands.",
                line.command
            )),
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(vec![
            Box::new(CustomersHandler),
            Box::new(SelectHandler),
            Box::new(TicketHandler),
            Box::new(NumberHandler),
            Box::new(MessageHandler),
            Box::new(StatusHandler),
            Box::new(SendHandler),
            Box::new(HelpHandler),
        ])
    }
}

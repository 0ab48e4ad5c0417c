//! Form state and validation.

use serde::Deserialize;

/// Which of the ticket ID and destination number must be filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactRule {
    /// At least one of ticket ID or destination number is required.
    #[default]
    TicketOrNumber,
    /// Neither field is required.
    None,
}

impl ContactRule {
    /// Whether `form` holds the contact details this rule asks for.
    pub fn is_satisfied(self, form: &FormState) -> bool {
        match self {
            ContactRule::TicketOrNumber => {
                !form.ticket_id.is_empty() || form.to_number.trim().len() > 1
            }
            ContactRule::None => true,
        }
    }
}

/// Current contents of the compose form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub selected_customer_id: String,
    pub ticket_id: String,
    pub to_number: String,
    pub message_text: String,
    pub sending: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the form holds enough to be sent under `rule`.
    pub fn is_valid(&self, rule: ContactRule) -> bool {
        !self.selected_customer_id.is_empty()
            && !self.message_text.trim().is_empty()
            && rule.is_satisfied(self)
    }

    /// Clear every field after a successful send.
    pub fn reset(&mut self) {
        self.selected_customer_id.clear();
        self.ticket_id.clear();
        self.to_number.clear();
        self.message_text.clear();
    }

    /// Ticket ID to submit, if any.
    pub fn ticket_for_request(&self) -> Option<String> {
        (!self.ticket_id.is_empty()).then(|| self.ticket_id.clone())
    }

    /// Destination number to submit; a lone `+` counts as no number.
    pub fn number_for_request(&self) -> Option<String> {
        let number = self.to_number.trim();
        (number.len() > 1).then(|| number.to_string())
    }
}

//! Input masks for the ticket-ID and destination-number fields.

/// Outcome of masking one raw input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskResult {
    /// Value the field should hold after this input.
    pub normalized_value: String,
    /// Whether the input contained characters the field does not accept.
    pub rejected: bool,
}

impl MaskResult {
    fn accepted(value: impl Into<String>) -> Self {
        Self {
            normalized_value: value.into(),
            rejected: false,
        }
    }
}

/// A pure transformation from a raw keystroke buffer to a field value.
pub trait FieldMask {
    /// Mask `raw`, given the last accepted value of the field.
    fn apply(&self, previous: &str, raw: &str) -> MaskResult;
}

/// Ticket IDs: decimal digits only. Anything else keeps the previous value.
#[derive(Debug, Clone, Copy, Default)]
pub struct TicketIdMask;

impl FieldMask for TicketIdMask {
    fn apply(&self, previous: &str, raw: &str) -> MaskResult {
        if raw.chars().all(|c| c.is_ascii_digit()) {
            MaskResult::accepted(raw)
        } else {
            MaskResult {
                normalized_value: previous.to_string(),
                rejected: true,
            }
        }
    }
}

/// Destination numbers: a leading `+` followed by decimal digits.
///
/// The value is rebuilt from the whole buffer on every input, so the result
/// does not depend on the previous value or on where the cursor was.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneNumberMask;

impl FieldMask for PhoneNumberMask {
    fn apply(&self, _previous: &str, raw: &str) -> MaskResult {
        if raw.is_empty() || raw == "+" {
            return MaskResult::accepted(raw);
        }

        let rejected = raw.chars().any(|c| !c.is_ascii_digit() && c != '+');
        let rest = raw.strip_prefix('+').unwrap_or(raw);

        let mut normalized = String::with_capacity(raw.len());
        normalized.push('+');
        normalized.extend(rest.chars().filter(char::is_ascii_digit));

        MaskResult {
            normalized_value: normalized,
            rejected,
        }
    }
}

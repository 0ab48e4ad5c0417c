//! SMS compose form: input masks, validation and the send flow.
//!
//! [`SmsComposer`] owns a [`FormState`] and only changes it through the
//! field masks and the two asynchronous operations (loading customers and
//! sending). Errors from the gateway never escape it; they are logged and
//! surfaced through a [`Notifier`].

mod composer;
mod error;
mod form;
mod mask;
mod notify;
mod signal;

pub use composer::{ComposerSettings, SendOutcome, SmsComposer, NUMBERS_ONLY_HINT};
pub use error::FormError;
pub use form::{ContactRule, FormState};
pub use mask::{FieldMask, MaskResult, PhoneNumberMask, TicketIdMask};
pub use notify::{LogNotifier, Notification, NotificationLevel, Notifier};
pub use signal::{TransientSignal, DEFAULT_HINT_DURATION};

//! Form errors.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("Unknown customer: {0}")]
    UnknownCustomer(String),

    #[error("Customer list is not available")]
    SelectorUnavailable,
}

//! Customer sources.

use crate::error::GatewayError;
use crate::types::Customer;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Asynchronous lookup of the customers a message can be sent for.
#[async_trait]
pub trait CustomerSource: Send + Sync {
    /// Fetch the full customer list.
    async fn fetch_customers(&self) -> Result<Vec<Customer>, GatewayError>;
}

/// Customer source backed by fixture data.
///
/// Without a file the built-in list is returned. With a file, the JSON array
/// is read on every fetch so edits show up on the next load.
#[derive(Debug, Clone, Default)]
pub struct FixtureCustomers {
    file: Option<PathBuf>,
}

impl FixtureCustomers {
    /// Source returning the built-in customers.
    pub fn new() -> Self {
        Self { file: None }
    }

    /// Source reading customers from a JSON file.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(path.into()),
        }
    }

    /// The built-in customer list.
    pub fn builtin() -> Vec<Customer> {
        vec![
            Customer::new("1", "John Smith"),
            Customer::new("2", "Sarah Johnson"),
            Customer::new("3", "Michael Brown"),
            Customer::new("4", "Emily Davis"),
            Customer::new("5", "David Wilson"),
        ]
    }
}

#[async_trait]
impl CustomerSource for FixtureCustomers {
    #[instrument(skip(self))]
    async fn fetch_customers(&self) -> Result<Vec<Customer>, GatewayError> {
        let Some(path) = &self.file else {
            return Ok(Self::builtin());
        };

        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::FetchFailed(format!("{}: {}", path.display(), e)))?;

        let customers: Vec<Customer> = serde_json::from_str(&raw)
            .map_err(|e| GatewayError::FetchFailed(format!("{}: {}", path.display(), e)))?;

        debug!("Loaded {} customers from {}", customers.len(), path.display());
        Ok(customers)
    }
}

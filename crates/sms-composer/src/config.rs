//! Application configuration loaded from environment variables.

use anyhow::{Context, Result};
use serde::Deserialize;
use sms_form::{ComposerSettings, ContactRule, DEFAULT_HINT_DURATION};
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub app: AppConfig,

    /// Customer source and message sink
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Form behaviour
    #[serde(default)]
    pub form: FormConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Simulated dispatch latency
    #[serde(default = "default_send_delay", with = "humantime_serde")]
    pub send_delay: Duration,

    /// Fail every send (for exercising the error path)
    #[serde(default)]
    pub fail_sends: bool,

    /// JSON file with the customer list; built-in customers when unset
    #[serde(default)]
    pub customers_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormConfig {
    /// Whether a ticket ID or destination number is required
    #[serde(default)]
    pub contact_rule: ContactRule,

    /// How long "invalid input" hints stay visible
    #[serde(default = "default_hint_duration", with = "humantime_serde")]
    pub hint_duration: Duration,
}

impl FormConfig {
    pub fn settings(&self) -> ComposerSettings {
        ComposerSettings {
            contact_rule: self.contact_rule,
            hint_duration: self.hint_duration,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            send_delay: default_send_delay(),
            fail_sends: false,
            customers_file: None,
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            contact_rule: ContactRule::default(),
            hint_duration: default_hint_duration(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

fn default_send_delay() -> Duration {
    Duration::from_secs(1)
}

fn default_hint_duration() -> Duration {
    DEFAULT_HINT_DURATION
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_environment(config::Environment::default())
    }

    fn from_environment(environment: config::Environment) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(
                environment
                    .separator("__")
                    // Keep values as strings: parsing would turn "+1555..." into a number.
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

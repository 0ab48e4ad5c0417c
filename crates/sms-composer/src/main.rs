//! SMS Composer - Main entry point.

use anyhow::Context;
use sms_composer::commands::Dispatcher;
use sms_composer::config::Config;
use sms_composer::console::ConsoleNotifier;
use sms_composer::error::AppResult;
use sms_composer::input::InputReader;
use sms_composer::session::run_session;
use sms_form::SmsComposer;
use sms_gateway::{CustomerSource, FixtureCustomers, MockSmsSink};
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.app.log_level);

    info!("Starting SMS composer...");

    let source: Arc<dyn CustomerSource> = match &config.gateway.customers_file {
        Some(path) => {
            info!("Customer list: {}", path.display());
            Arc::new(FixtureCustomers::from_file(path))
        }
        None => Arc::new(FixtureCustomers::new()),
    };

    let mut sink = MockSmsSink::new(config.gateway.send_delay);
    if config.gateway.fail_sends {
        warn!("All sends are configured to fail");
        sink = sink.failing();
    }

    let mut composer = SmsComposer::new(
        source,
        Arc::new(sink),
        Arc::new(ConsoleNotifier),
        config.form.settings(),
    );

    println!("Loading customers...");
    composer.load_customers().await;
    println!(
        "{} customers loaded. Type 'help' for commands.",
        composer.customers().len()
    );

    let dispatcher = Dispatcher::default();
    info!("Registered {} command handlers", dispatcher.len());

    let input = InputReader::new(tokio::io::stdin()).stream();
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    run_session(&dispatcher, &mut composer, input, shutdown, |response| {
        println!("{}", response)
    })
    .await;

    info!("Shutting down...");
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

//! Interactive session loop.

use crate::commands::Dispatcher;
use crate::input::CommandLine;
use sms_form::SmsComposer;
use std::future::Future;
use tokio_stream::{Stream, StreamExt};
use tracing::{info, warn};

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    EndOfInput,
    Shutdown,
}

/// Feed `input` through `dispatcher` until input ends or `shutdown` resolves.
///
/// Shutdown is watched while a command runs too; the command's result is
/// then dropped.
pub async fn run_session<S, F, W>(
    dispatcher: &Dispatcher,
    composer: &mut SmsComposer,
    input: S,
    shutdown: F,
    mut respond: W,
) -> SessionEnd
where
    S: Stream<Item = CommandLine>,
    F: Future<Output = ()>,
    W: FnMut(String),
{
    tokio::pin!(input);
    tokio::pin!(shutdown);

    loop {
        let line = tokio::select! {
            line = input.next() => line,
            _ = &mut shutdown => {
                info!("Shutdown signal received");
                return SessionEnd::Shutdown;
            }
        };

        let Some(line) = line else {
            info!("End of input");
            return SessionEnd::EndOfInput;
        };

        tokio::select! {
            result = dispatcher.dispatch(composer, &line) => match result {
                Ok(response) => respond(response),
                Err(e) => respond(format!("Error: {}", e)),
            },
            _ = &mut shutdown => {
                warn!("Shutdown signal received while running '{}'", line.command);
                return SessionEnd::Shutdown;
            }
        }
    }
}

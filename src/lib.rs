//! A single-page ledger for recording debits and credits.
//!
//! This library provides a server that directly serves HTML pages. The page
//! validates each submitted transaction, keeps running totals of debits and
//! credits, and reloads itself once it has been left idle for too long.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod amount;
mod app_state;
mod endpoints;
mod error;
mod html;
mod inactivity;
mod internal_server_error;
mod ledger;
mod logging;
mod not_found;
mod routing;
mod session;
mod validation;

pub use amount::{Amount, parse_amount};
pub use app_state::AppState;
pub use error::Error;
pub use inactivity::{
    ActivitySignal, FireAction, INACTIVITY_TIMEOUT, InactivityTimer, RELOAD_WARNING, TimerState,
};
pub use ledger::{LedgerState, LedgerTotals, RowId, TransactionKind, TransactionRow};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use session::Session;
pub use validation::{
    TransactionForm, ValidTransaction, ValidationAggregator, ValidationFailure,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

#[cfg(test)]
mod test_utils;

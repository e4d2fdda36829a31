//! A dashboard for browsing a list of mock financial transactions.
//!
//! The dashboard shows a month selector, a searchable table of transactions,
//! a page counter and a bar chart of how prices are distributed. All data is
//! generated in memory, and a new set is generated every time a month is
//! selected.
//!
//! This library provides a web server that directly serves HTML pages, with
//! htmx driving the interactive parts of the page.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod dashboard;
mod endpoints;
mod error;
mod filter;
mod html;
mod internal_server_error;
mod logging;
mod mock_data;
mod month;
mod not_found;
mod pagination;
mod routing;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use dashboard::DashboardState;
pub use error::Error;
pub use filter::{filter_transactions, matches_search};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use mock_data::{HistogramBucket, generate_price_histogram, generate_transactions};
pub use pagination::PageNumber;
pub use routing::build_router;
pub use transaction::{Transaction, TransactionId};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
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

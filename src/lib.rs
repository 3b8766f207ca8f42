//! A web app that shows a dashboard of financial transactions.
//!
//! The transactions are fetched from a backend REST API, formatted for
//! display in a configurable currency locale and time zone, and served as
//! HTML pages. The page shell is rendered straight away and the transaction
//! list is loaded once the page has mounted.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::http::StatusCode;
use axum_server::Handle;
use tokio::signal;

mod api_client;
mod app_state;
mod config;
mod currency;
mod dashboard;
mod endpoints;
mod html;
mod internal_server_error;
mod logging;
mod not_found;
mod routing;
mod timezone;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use api_client::ApiClient;
pub use app_state::AppState;
pub use config::Config;
pub use currency::{CurrencyLocale, format_currency};
pub use dashboard::{
    Balance, DisplayConfig, FormattedBalance, TransactionView, UNCATEGORIZED_LABEL,
    build_transaction_views,
};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use timezone::{DEFAULT_TIMEZONE, format_date, get_timezone};
pub use transaction::{Category, Transaction, TransactionType, TransactionsResponse};

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
            Ok(mut terminate_signal) => {
                terminate_signal.recv().await;
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

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request to the transactions API could not be completed, e.g. the
    /// API is unreachable or the request timed out.
    #[error("could not reach the transactions API: {0}")]
    FetchFailed(String),

    /// The transactions API responded with a status code other than 2xx.
    #[error("the transactions API responded with status {0}")]
    UnexpectedStatus(u16),

    /// The body of the transactions API response could not be parsed.
    #[error("could not parse the transactions API response: {0}")]
    MalformedResponse(String),

    /// The base URL for the transactions API is not a valid URL.
    #[error("invalid API URL \"{0}\"")]
    InvalidApiUrl(String),

    /// An amount was NaN or infinite.
    ///
    /// This indicates corrupted data upstream, so the amount is rejected
    /// instead of being rendered as a malformed string.
    #[error("cannot format the non-finite amount {0}")]
    NonFiniteAmount(f64),

    /// A timestamp cannot be represented once converted to the local timezone.
    #[error("the timestamp {0} is out of range for the local timezone")]
    InvalidTimestamp(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// A date could not be formatted.
    #[error("could not format date: {0}")]
    DateFormatError(String),

    /// The currency symbol and separators cannot produce unambiguous amounts.
    #[error("invalid currency locale: {0}")]
    InvalidCurrencyLocale(String),
}

impl Error {
    /// Whether the error was caused by the transactions API rather than by
    /// this server.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Error::FetchFailed(_) | Error::UnexpectedStatus(_) | Error::MalformedResponse(_)
        )
    }

    /// The status code to respond with when this error ends a request.
    pub fn status_code(&self) -> StatusCode {
        if self.is_upstream() {
            StatusCode::BAD_GATEWAY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
mod error_tests {
    use axum::http::StatusCode;

    use crate::Error;

    #[test]
    fn upstream_errors_map_to_bad_gateway() {
        let errors = [
            Error::FetchFailed("connection refused".to_owned()),
            Error::UnexpectedStatus(503),
            Error::MalformedResponse("expected value".to_owned()),
        ];

        for error in errors {
            assert!(error.is_upstream(), "{error:?} should be upstream");
            assert_eq!(error.status_code(), StatusCode::BAD_GATEWAY);
        }
    }

    #[test]
    fn formatting_errors_map_to_internal_server_error() {
        let errors = [
            Error::NonFiniteAmount(f64::NAN),
            Error::InvalidTimestamp("-9999-01-01 0:00:00.0 +00:00:00".to_owned()),
        ];

        for error in errors {
            assert!(!error.is_upstream(), "{error:?} should not be upstream");
            assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}

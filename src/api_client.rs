//! HTTP client for the transactions API.

use std::time::Duration;

use reqwest::{Client as HttpClient, Url};

use crate::{
    Error,
    transaction::{Transaction, TransactionsResponse},
};

/// The resource, relative to the API base URL, that lists transactions.
pub const TRANSACTIONS_RESOURCE: &str = "transactions";

/// Client for the backend API that owns the transactions.
///
/// Cloning is cheap, the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: HttpClient,
    transactions_url: Url,
}

impl ApiClient {
    /// Create a client for the API at `base_url`, e.g. "http://localhost:3333".
    ///
    /// Requests that take longer than `timeout` are abandoned.
    ///
    /// # Errors
    /// Returns [Error::InvalidApiUrl] if `base_url` is not an absolute HTTP(S)
    /// URL, or [Error::FetchFailed] if the HTTP client cannot be initialised.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let transactions_url = build_transactions_url(base_url)?;

        let http_client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .inspect_err(|error| tracing::error!("could not build HTTP client: {error}"))
            .map_err(|error| Error::FetchFailed(error.to_string()))?;

        Ok(Self {
            http_client,
            transactions_url,
        })
    }

    /// The full URL requested by [ApiClient::get_transactions].
    pub fn transactions_url(&self) -> &Url {
        &self.transactions_url
    }

    /// GET /transactions
    ///
    /// Returns the transactions in the order the API listed them. No retry is
    /// attempted.
    ///
    /// # Errors
    /// - [Error::FetchFailed] if the request could not be sent or timed out.
    /// - [Error::UnexpectedStatus] if the API responded with a non-2xx status.
    /// - [Error::MalformedResponse] if the body is not a valid transaction list.
    pub async fn get_transactions(&self) -> Result<Vec<Transaction>, Error> {
        let url = self.transactions_url.clone();
        tracing::debug!("Fetching transactions from {url}");

        let response = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .inspect_err(|error| tracing::error!("could not fetch transactions from {url}: {error}"))
            .map_err(|error| Error::FetchFailed(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("{url} responded with status {status}");
            return Err(Error::UnexpectedStatus(status.as_u16()));
        }

        let body: TransactionsResponse = response
            .json()
            .await
            .inspect_err(|error| tracing::error!("could not read transactions from {url}: {error}"))
            .map_err(|error| {
                if error.is_decode() {
                    Error::MalformedResponse(error.to_string())
                } else {
                    Error::FetchFailed(error.to_string())
                }
            })?;

        tracing::debug!("Fetched {} transactions", body.transactions.len());

        Ok(body.transactions)
    }
}

fn build_transactions_url(base_url: &str) -> Result<Url, Error> {
    let invalid_url = || Error::InvalidApiUrl(base_url.to_owned());

    // Without a trailing slash `Url::join` would replace the last path segment.
    let base_url = if base_url.ends_with('/') {
        base_url.to_owned()
    } else {
        format!("{base_url}/")
    };

    let url = Url::parse(&base_url).map_err(|_| invalid_url())?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid_url());
    }

    url.join(TRANSACTIONS_RESOURCE).map_err(|_| invalid_url())
}

//! Implements a struct that holds the state of the dashboard server.

use std::time::Duration;

use crate::{Error, api_client::ApiClient, config::Config, dashboard::DisplayConfig};

/// The state of the dashboard server.
///
/// The state is read-only once the server starts, so cloning it per request
/// needs no locking.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The client for the transactions API.
    pub api_client: ApiClient,

    /// How amounts and dates are displayed.
    pub display_config: DisplayConfig,
}

impl AppState {
    /// Create a new [AppState] for the transactions API at `api_url`.
    ///
    /// # Errors
    /// Returns an error if `api_url` is not a valid HTTP(S) URL.
    pub fn new(
        api_url: &str,
        request_timeout: Duration,
        display_config: DisplayConfig,
    ) -> Result<Self, Error> {
        Ok(Self {
            api_client: ApiClient::new(api_url, request_timeout)?,
            display_config,
        })
    }

    /// Create a new [AppState] from the server's command line configuration.
    ///
    /// # Errors
    /// Returns an error if any of the settings in `config` are invalid.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::new(
            &config.api_url,
            config.request_timeout(),
            config.display_config()?,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::Parser;

    use crate::{Config, Error, dashboard::DisplayConfig};

    use super::AppState;

    #[test]
    fn builds_state_from_config() {
        let config =
            Config::try_parse_from(["server", "--api-url", "http://localhost:3333"]).unwrap();

        let state = AppState::from_config(&config).unwrap();

        assert_eq!(
            state.api_client.transactions_url().as_str(),
            "http://localhost:3333/transactions"
        );
        assert_eq!(state.display_config.timezone_name(), "America/Sao_Paulo");
    }

    #[test]
    fn rejects_invalid_api_url() {
        let result = AppState::new(
            "localhost",
            Duration::from_secs(1),
            DisplayConfig::default(),
        );

        assert!(matches!(result, Err(Error::InvalidApiUrl(_))));
    }
}

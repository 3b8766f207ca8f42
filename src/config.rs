//! Command line and environment configuration for the dashboard server.

use std::time::Duration;

use clap::Parser;

use crate::{
    Error, currency::CurrencyLocale, dashboard::DisplayConfig, timezone::DEFAULT_TIMEZONE,
};

/// Serves a dashboard of the transactions held by a backend API.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Base URL of the transactions API, e.g. "http://localhost:3333".
    #[arg(long, env = "API_URL")]
    pub api_url: String,

    /// The port to serve the dashboard from.
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    /// Canonical name of the timezone dates are displayed in.
    #[arg(long, env = "DASHBOARD_TIMEZONE", default_value = DEFAULT_TIMEZONE)]
    pub timezone: String,

    /// Symbol placed in front of amounts.
    #[arg(long, default_value = "R$")]
    pub currency_symbol: String,

    /// Character that groups the digits of amounts into thousands.
    #[arg(long, default_value_t = '.')]
    pub thousands_separator: char,

    /// Character between the whole units and the cents of amounts.
    #[arg(long, default_value_t = ',')]
    pub decimal_separator: char,

    /// Seconds to wait for the transactions API before giving up.
    #[arg(long, default_value_t = 10)]
    pub request_timeout: u64,
}

impl Config {
    /// The locale and timezone used to display transactions.
    ///
    /// # Errors
    /// Returns an error if the currency settings are ambiguous or the
    /// timezone is unknown.
    pub fn display_config(&self) -> Result<DisplayConfig, Error> {
        let currency = CurrencyLocale::new(
            &self.currency_symbol,
            self.thousands_separator,
            self.decimal_separator,
        )?;

        DisplayConfig::new(currency, &self.timezone)
    }

    /// How long to wait for the transactions API.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::Parser;

    use crate::{Error, currency::CurrencyLocale};

    use super::Config;

    #[test]
    fn uses_defaults() {
        let config =
            Config::try_parse_from(["server", "--api-url", "http://localhost:3333"]).unwrap();

        assert_eq!(config.api_url, "http://localhost:3333");
        assert_eq!(config.port, 3000);
        assert_eq!(config.timezone, "America/Sao_Paulo");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));

        let display = config.display_config().unwrap();
        assert_eq!(display.currency, CurrencyLocale::brazilian_real());
        assert_eq!(display.timezone_name(), "America/Sao_Paulo");
    }

    #[test]
    fn parses_all_options() {
        let config = Config::try_parse_from([
            "server",
            "--api-url",
            "https://api.example.com",
            "--port",
            "8080",
            "--timezone",
            "Pacific/Auckland",
            "--currency-symbol",
            "NZ$",
            "--thousands-separator",
            ",",
            "--decimal-separator",
            ".",
            "--request-timeout",
            "3",
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.request_timeout(), Duration::from_secs(3));

        let display = config.display_config().unwrap();
        assert_eq!(
            display.currency,
            CurrencyLocale::new("NZ$", ',', '.').unwrap()
        );
        assert_eq!(display.timezone_name(), "Pacific/Auckland");
    }

    #[test]
    fn rejects_invalid_timezone() {
        let config = Config::try_parse_from([
            "server",
            "--api-url",
            "http://localhost:3333",
            "--timezone",
            "Atlantis/Capital",
        ])
        .unwrap();

        assert_eq!(
            config.display_config().err(),
            Some(Error::InvalidTimezoneError("Atlantis/Capital".to_owned()))
        );
    }

    #[test]
    fn rejects_matching_separators() {
        let config = Config::try_parse_from([
            "server",
            "--api-url",
            "http://localhost:3333",
            "--thousands-separator",
            ",",
        ])
        .unwrap();

        assert!(matches!(
            config.display_config(),
            Err(Error::InvalidCurrencyLocale(_))
        ));
    }
}

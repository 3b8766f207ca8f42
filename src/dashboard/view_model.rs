//! Display-ready transactions.
//!
//! Raw transactions from the API hold a numeric value and a UTC timestamp.
//! [TransactionView] adds the currency string and local date that the
//! dashboard shows, using the locale and timezone in [DisplayConfig].

use std::fmt;

use time::OffsetDateTime;
use time_tz::Tz;

use crate::{
    Error,
    currency::{CurrencyLocale, format_currency},
    timezone::{DEFAULT_TIMEZONE, format_date, get_timezone},
    transaction::{Category, Transaction, TransactionType},
};

/// Shown in place of the category title for uncategorized transactions.
pub const UNCATEGORIZED_LABEL: &str = "Sem categoria";

/// How amounts and dates are displayed.
#[derive(Clone)]
pub struct DisplayConfig {
    /// The currency conventions for amounts.
    pub currency: CurrencyLocale,
    timezone_name: String,
    timezone: &'static Tz,
}

impl DisplayConfig {
    /// Create a display config for the canonical timezone name `timezone`,
    /// e.g. "America/Sao_Paulo".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `timezone` is not a known timezone.
    pub fn new(currency: CurrencyLocale, timezone: &str) -> Result<Self, Error> {
        Ok(Self {
            currency,
            timezone_name: timezone.to_owned(),
            timezone: get_timezone(timezone)?,
        })
    }

    /// The canonical name of the timezone dates are displayed in.
    pub fn timezone_name(&self) -> &str {
        &self.timezone_name
    }

    /// The timezone dates are displayed in.
    pub fn timezone(&self) -> &'static Tz {
        self.timezone
    }
}

impl Default for DisplayConfig {
    /// Brazilian Real amounts and dates in São Paulo time.
    fn default() -> Self {
        Self::new(CurrencyLocale::default(), DEFAULT_TIMEZONE)
            .expect("the default timezone is in the timezone database")
    }
}

impl fmt::Debug for DisplayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayConfig")
            .field("currency", &self.currency)
            .field("timezone", &self.timezone_name)
            .finish()
    }
}

/// A transaction with its value and date formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionView {
    /// The ID assigned by the API.
    pub id: String,
    /// A free-text label.
    pub title: String,
    /// The amount in major currency units.
    pub value: f64,
    /// Whether the transaction is income or outcome.
    pub kind: TransactionType,
    /// The category, `None` when the transaction is uncategorized.
    pub category: Option<Category>,
    /// When the transaction was created, in UTC.
    pub created_at: OffsetDateTime,
    /// The value as a currency string, e.g. "R$ 1.000,00".
    pub formatted_value: String,
    /// The local date the transaction was created, e.g. "14/03/2023".
    pub formatted_date: String,
}

impl TransactionView {
    /// Derive the display-ready version of `transaction`.
    ///
    /// # Errors
    /// Returns an error if the value is not finite or the timestamp cannot
    /// be displayed in the configured timezone.
    pub fn new(transaction: &Transaction, config: &DisplayConfig) -> Result<Self, Error> {
        let formatted_value = format_currency(transaction.value, &config.currency)
            .inspect_err(|error| {
                tracing::error!("could not format value of transaction {}: {error}", transaction.id)
            })?;
        let formatted_date = format_date(transaction.created_at, config.timezone())
            .inspect_err(|error| {
                tracing::error!("could not format date of transaction {}: {error}", transaction.id)
            })?;

        Ok(Self {
            id: transaction.id.clone(),
            title: transaction.title.clone(),
            value: transaction.value,
            kind: transaction.kind,
            category: transaction.category.clone(),
            created_at: transaction.created_at,
            formatted_value,
            formatted_date,
        })
    }

    /// The category title, or [UNCATEGORIZED_LABEL] if there is no category.
    pub fn category_label(&self) -> &str {
        self.category
            .as_ref()
            .map(|category| category.title.as_str())
            .unwrap_or(UNCATEGORIZED_LABEL)
    }
}

/// Derive the display-ready versions of `transactions`, keeping their order.
///
/// # Errors
/// Returns the first formatting error, since a bad record means the API
/// data is corrupt.
pub fn build_transaction_views(
    transactions: &[Transaction],
    config: &DisplayConfig,
) -> Result<Vec<TransactionView>, Error> {
    transactions
        .iter()
        .map(|transaction| TransactionView::new(transaction, config))
        .collect()
}

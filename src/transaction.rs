//! The transaction records returned by the transactions API.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Whether a transaction brings money in or sends it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in.
    Income,
    /// Money going out.
    Outcome,
}

impl TransactionType {
    /// The lowercase name used on the wire and in HTML attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Outcome => "outcome",
        }
    }
}

/// The category a transaction is filed under.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    /// The display name of the category.
    pub title: String,
}

/// A financial transaction as returned by the transactions API.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Transaction {
    /// The ID assigned by the API.
    pub id: String,
    /// A free-text label.
    pub title: String,
    /// The amount in major currency units, e.g. reais rather than centavos.
    pub value: f64,
    /// Whether the transaction is income or outcome.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// The category, `None` when the transaction is uncategorized.
    #[serde(default)]
    pub category: Option<Category>,
    /// When the transaction was created, in UTC.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// The body of a `GET /transactions` response.
///
/// Fields other than `transactions` are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TransactionsResponse {
    /// The transactions in the order the API returned them.
    pub transactions: Vec<Transaction>,
}

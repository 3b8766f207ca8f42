//! Dashboard module
//!
//! Provides the page showing the income/outcome summary cards and the table
//! of transactions fetched from the transactions API.

mod cards;
mod handlers;
mod summary;
mod tables;
mod view_model;

pub use handlers::{get_dashboard_page, get_dashboard_transactions};
pub use summary::{Balance, FormattedBalance};
pub use view_model::{DisplayConfig, TransactionView, UNCATEGORIZED_LABEL, build_transaction_views};

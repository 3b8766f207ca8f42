//! The URIs served by the dashboard.

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The dashboard page shell with the summary cards and transactions table.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The HTMX partial that loads the transactions into the dashboard.
pub const DASHBOARD_TRANSACTIONS: &str = "/dashboard/transactions";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

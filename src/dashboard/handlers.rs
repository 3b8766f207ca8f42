//! Dashboard HTTP handlers and view rendering.
//!
//! The dashboard page is served as a shell with empty summary cards and an
//! empty transactions table. Once the page has loaded, HTMX requests the
//! transactions partial exactly once, which fetches the transactions from the
//! API and replaces the shell's content. If loading fails, the partial shows
//! an alert with a button to try again.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_htmx::HxRequest;
use maud::{Markup, html};

use crate::{
    AppState, Error,
    api_client::ApiClient,
    dashboard::{
        cards::balance_cards_view,
        summary::{Balance, FormattedBalance},
        tables::transactions_table,
        view_model::{DisplayConfig, TransactionView, build_transaction_views},
    },
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, PAGE_CONTAINER_STYLE, base, loading_spinner},
};

const DASHBOARD_CONTENT_ID: &str = "dashboard-content";

/// The state needed for displaying the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The client for fetching transactions.
    pub api_client: ApiClient,
    /// How amounts and dates are displayed.
    pub display_config: DisplayConfig,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api_client: state.api_client.clone(),
            display_config: state.display_config.clone(),
        }
    }
}

/// The observable states of the transaction list.
enum ListState {
    /// The page has been served but the transactions have not been requested yet.
    Unloaded,
    /// The transactions were fetched and formatted.
    Loaded(LoadedDashboard),
    /// The transactions could not be fetched or formatted.
    Failed(Error),
}

/// Holds all the data needed to render the loaded dashboard.
struct LoadedDashboard {
    balance: FormattedBalance,
    transactions: Vec<TransactionView>,
}

/// Display the dashboard page before any transactions have been loaded.
pub async fn get_dashboard_page() -> Markup {
    dashboard_view()
}

/// Fetch the transactions and render the dashboard content for HTMX to swap
/// into the page.
///
/// Requests that do not come from HTMX are redirected to the dashboard page,
/// since the partial is not a complete HTML document.
///
/// The fetch is tied to this request: if the client goes away, the handler
/// future is dropped along with the in-flight API request.
pub async fn get_dashboard_transactions(
    HxRequest(is_htmx_request): HxRequest,
    State(state): State<DashboardState>,
) -> Response {
    if !is_htmx_request {
        return Redirect::to(endpoints::DASHBOARD_VIEW).into_response();
    }

    match load_dashboard(&state).await {
        Ok(loaded) => dashboard_content(&ListState::Loaded(loaded)).into_response(),
        Err(error) => {
            let status_code = error.status_code();
            (status_code, dashboard_content(&ListState::Failed(error))).into_response()
        }
    }
}

/// Fetches the transactions and derives everything the loaded dashboard shows.
async fn load_dashboard(state: &DashboardState) -> Result<LoadedDashboard, Error> {
    let transactions = state.api_client.get_transactions().await?;

    let views = build_transaction_views(&transactions, &state.display_config)?;
    let balance = Balance::from_transactions(&transactions)
        .format(&state.display_config.currency)
        .inspect_err(|error| tracing::error!("could not format balance: {error}"))?;

    Ok(LoadedDashboard {
        balance,
        transactions: views,
    })
}

fn dashboard_view() -> Markup {
    let content = html!(
        div class=(PAGE_CONTAINER_STYLE)
        {
            header class="w-full mb-8"
            {
                h1 class="text-2xl font-bold" { "Finance Dashboard" }
            }

            div
                id=(DASHBOARD_CONTENT_ID)
                class="w-full"
                hx-get=(endpoints::DASHBOARD_TRANSACTIONS)
                hx-trigger="load"
                hx-swap="innerHTML"
                hx-target-error=(format!("#{DASHBOARD_CONTENT_ID}"))
            {
                (dashboard_content(&ListState::Unloaded))
            }
        }
    );

    base("Dashboard", &content)
}

fn dashboard_content(state: &ListState) -> Markup {
    let balance = match state {
        ListState::Loaded(loaded) => Some(&loaded.balance),
        ListState::Unloaded | ListState::Failed(_) => None,
    };

    html!(
        (balance_cards_view(balance))

        section id="transactions" class="w-full"
        {
            h2 class="text-xl font-semibold mb-4" { "Listagem" }

            @match state {
                ListState::Unloaded => {
                    p id="transactions-loading" class="mb-4 text-gray-600 dark:text-gray-400"
                    {
                        (loading_spinner())
                        "Carregando transações..."
                    }
                    (transactions_table(&[]))
                }
                ListState::Loaded(loaded) => {
                    (transactions_table(&loaded.transactions))

                    @if loaded.transactions.is_empty() {
                        p id="transactions-empty" class="mt-4 text-gray-600 dark:text-gray-400"
                        {
                            "Nenhuma transação cadastrada."
                        }
                    }
                }
                ListState::Failed(error) => {
                    (load_failed_view(error))
                }
            }
        }
    )
}

/// What to tell the user about `error`, as a title and a suggested fix.
fn failure_message(error: &Error) -> (&'static str, &'static str) {
    match error {
        Error::FetchFailed(_) => (
            "Não foi possível carregar as transações",
            "O servidor de transações não respondeu. Tente novamente em instantes.",
        ),
        Error::UnexpectedStatus(_) => (
            "Não foi possível carregar as transações",
            "O servidor de transações retornou um erro. Tente novamente em instantes.",
        ),
        Error::MalformedResponse(_) => (
            "Não foi possível carregar as transações",
            "O servidor de transações enviou uma resposta inválida.",
        ),
        _ => (
            "Não foi possível exibir as transações",
            "Algumas transações contêm dados inválidos. Verifique os logs do servidor.",
        ),
    }
}

fn load_failed_view(error: &Error) -> Markup {
    let (title, details) = failure_message(error);
    let content_selector = format!("#{DASHBOARD_CONTENT_ID}");

    html!(
        div
            id="transactions-error"
            role="alert"
            class="p-4 mb-4 rounded-lg border border-red-300 bg-red-50 text-red-800
                dark:bg-gray-800 dark:text-red-400 dark:border-red-800"
        {
            p class="font-semibold" { (title) }
            p class="mb-4 text-sm" { (details) }

            button
                type="button"
                class=(BUTTON_PRIMARY_STYLE)
                hx-get=(endpoints::DASHBOARD_TRANSACTIONS)
                hx-target=(content_selector)
                hx-target-error=(content_selector)
                hx-swap="innerHTML"
                hx-indicator="#retry-indicator"
            {
                span id="retry-indicator" class="htmx-indicator" { (loading_spinner()) }
                "Tentar novamente"
            }
        }
    )
}

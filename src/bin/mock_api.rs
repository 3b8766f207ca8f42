//! Serves a fixed set of transactions in the format the dashboard expects.
//!
//! Useful for running the dashboard locally without the real backend.

use std::net::SocketAddr;

use axum::{Json, Router, routing::get};
use axum_server::Handle;
use clap::Parser;
use time::{OffsetDateTime, macros::datetime};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use finance_dashboard::{
    Category, Transaction, TransactionType, TransactionsResponse, graceful_shutdown,
};

/// A stand-in for the transactions API.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The port to serve the API from.
    #[arg(short, long, default_value_t = 3333)]
    port: u16,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();

    let args = Args::parse();
    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));

    let router = Router::new().route("/transactions", get(get_transactions));

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    tracing::info!("Mock transactions API listening on {}", addr);
    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Mock API stopped unexpectedly: {error}");
    }
}

async fn get_transactions() -> Json<TransactionsResponse> {
    tracing::debug!("Serving sample transactions");

    Json(TransactionsResponse {
        transactions: sample_transactions(),
    })
}

fn sample_transactions() -> Vec<Transaction> {
    vec![
        transaction(
            "1",
            "Desenvolvimento de site",
            12000.0,
            TransactionType::Income,
            Some("Venda"),
            datetime!(2021-02-13 14:00 UTC),
        ),
        transaction(
            "2",
            "Aluguel do apartamento",
            1200.0,
            TransactionType::Outcome,
            Some("Casa"),
            datetime!(2021-02-17 12:30 UTC),
        ),
        transaction(
            "3",
            "Hambúrguer",
            59.9,
            TransactionType::Outcome,
            Some("Alimentação"),
            datetime!(2021-03-01 02:15 UTC),
        ),
        transaction(
            "4",
            "Computador",
            5400.0,
            TransactionType::Income,
            None,
            datetime!(2021-03-15 18:45 UTC),
        ),
    ]
}

fn transaction(
    id: &str,
    title: &str,
    value: f64,
    kind: TransactionType,
    category: Option<&str>,
    created_at: OffsetDateTime,
) -> Transaction {
    Transaction {
        id: id.to_owned(),
        title: title.to_owned(),
        value,
        kind,
        category: category.map(|title| Category {
            title: title.to_owned(),
        }),
        created_at,
    }
}

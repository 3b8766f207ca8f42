use axum::Router;
use time::macros::datetime;
use tokio::net::TcpListener;

use crate::transaction::{Category, Transaction, TransactionType};

/// Serve `router` on an ephemeral local port and return its base URL.
///
/// The server runs until the test's runtime shuts down.
pub(crate) async fn spawn_fake_api(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind fake API listener");
    let address = listener
        .local_addr()
        .expect("Could not get fake API address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Fake API server failed");
    });

    format!("http://{address}")
}

pub(crate) fn transaction_fixture(
    id: &str,
    title: &str,
    value: f64,
    kind: TransactionType,
    category: Option<&str>,
) -> Transaction {
    Transaction {
        id: id.to_owned(),
        title: title.to_owned(),
        value,
        kind,
        category: category.map(|title| Category {
            title: title.to_owned(),
        }),
        created_at: datetime!(2023-03-15 02:30 UTC),
    }
}

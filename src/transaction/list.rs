//! Paginated transaction listing endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, Query, State},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    pagination::PageParams,
    transaction::{Transaction, get_transaction_page},
};

/// The state needed for listing transactions.
#[derive(Debug, Clone)]
pub struct ListTransactionsState {
    /// The database connection.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ListTransactionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle listing a page of a user's transactions, newest first.
///
/// `limit` and `offset` come from the query string and fall back to the
/// defaults when absent or non-numeric. An offset past the end of the user's
/// history returns an empty array.
pub async fn list_transactions_endpoint(
    State(state): State<ListTransactionsState>,
    Path(user_id): Path<String>,
    Query(page_params): Query<PageParams>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let (limit, offset) = page_params.resolve();

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    get_transaction_page(&user_id, limit, offset, &connection).map(Json)
}

#[cfg(test)]
mod list_transactions_endpoint_tests {
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{AppState, build_router, endpoints, transaction::Transaction};

    async fn get_test_server_with_rows(user_id: &str, count: usize) -> TestServer {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        let state = AppState::new(connection).expect("Could not create app state");
        let server = TestServer::new(build_router(state));

        for n in 1..=count {
            server
                .post(endpoints::TRANSACTIONS)
                .json(&json!({
                    "text": format!("t{n}"),
                    "amount": n as f64,
                    "userId": user_id
                }))
                .await
                .assert_status_ok();
        }

        server
    }

    #[tokio::test]
    async fn list_returns_newest_first_up_to_limit() {
        let server = get_test_server_with_rows("alice", 7).await;

        let response = server
            .get("/transactions/alice")
            .add_query_param("limit", "3")
            .add_query_param("offset", "0")
            .await;

        response.assert_status_ok();

        let page = response.json::<Vec<Transaction>>();
        let texts: Vec<_> = page
            .iter()
            .map(|transaction| transaction.text.as_str())
            .collect();
        assert_eq!(texts, ["t7", "t6", "t5"]);
    }

    #[tokio::test]
    async fn list_defaults_to_five_rows_from_the_start() {
        let server = get_test_server_with_rows("alice", 7).await;

        let response = server.get("/transactions/alice").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Vec<Transaction>>().len(), 5);
    }

    #[tokio::test]
    async fn list_falls_back_to_defaults_on_garbage_params() {
        let server = get_test_server_with_rows("alice", 7).await;

        let response = server
            .get("/transactions/alice")
            .add_query_param("limit", "banana")
            .add_query_param("offset", "1.5")
            .await;

        response.assert_status_ok();

        let page = response.json::<Vec<Transaction>>();
        assert_eq!(page.len(), 5);
        assert_eq!(page[0].text, "t7");
    }

    #[tokio::test]
    async fn list_past_the_end_returns_empty_array() {
        let server = get_test_server_with_rows("alice", 2).await;

        let response = server
            .get("/transactions/alice")
            .add_query_param("offset", "100")
            .await;

        response.assert_status_ok();
        assert!(response.json::<Vec<Transaction>>().is_empty());
    }

    #[tokio::test]
    async fn list_is_partitioned_by_user() {
        let server = get_test_server_with_rows("alice", 2).await;
        server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "text": "not yours",
                "amount": 1.0,
                "userId": "bob"
            }))
            .await
            .assert_status_ok();

        let response = server.get("/transactions/alice").await;

        response.assert_status_ok();

        let page = response.json::<Vec<Transaction>>();
        assert_eq!(page.len(), 2);
        assert!(page.iter().all(|transaction| transaction.user_id == "alice"));
    }

    #[tokio::test]
    async fn list_for_unknown_user_is_empty() {
        let server = get_test_server_with_rows("alice", 2).await;

        let response = server.get("/transactions/nobody").await;

        response.assert_status_ok();
        assert!(response.json::<Vec<Transaction>>().is_empty());
    }
}

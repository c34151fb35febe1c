//! Transaction update endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    transaction::{Transaction, TransactionChanges, TransactionId, update_transaction},
};

/// The state needed for updating a transaction.
#[derive(Debug, Clone)]
pub struct UpdateTransactionState {
    /// The database connection.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for UpdateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle overwriting the supplied fields of a transaction.
///
/// Responds with 404 when `id` does not refer to a transaction. The body is
/// decoded by hand for the same reason as transaction creation: a malformed
/// field surfaces as an internal error, not an extractor rejection.
pub async fn update_transaction_endpoint(
    State(state): State<UpdateTransactionState>,
    Path(id): Path<TransactionId>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<Transaction>, Error> {
    let changes: TransactionChanges = serde_json::from_value(payload)
        .map_err(|error| Error::InvalidPayload(error.to_string()))?;

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    update_transaction(id, changes, &connection).map(Json)
}

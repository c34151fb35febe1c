//! Transaction creation endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    transaction::{NewTransaction, Transaction, create_transaction},
};

/// The state needed for creating a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The database connection.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle the creation of a new transaction.
///
/// The body is decoded by hand so that a missing required field surfaces as
/// an internal error with the decode message in the body, the same way a
/// storage constraint violation would.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<Transaction>, Error> {
    let new_transaction: NewTransaction = serde_json::from_value(payload)
        .map_err(|error| Error::InvalidPayload(error.to_string()))?;

    let connection = state
        .db_connection
        .lock()
        .map_err(|_| Error::DatabaseLockError)?;

    create_transaction(new_transaction, &connection).map(Json)
}

//! The transaction model and its request payloads.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Alias for the integer type used for transaction IDs.
pub type TransactionId = i64;

/// An income or expense record.
///
/// The sign of `amount` encodes the direction: positive is income, negative
/// is expense. There is no currency field, amounts are in a single implicit
/// currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction. Assigned by the database, immutable.
    pub id: TransactionId,
    /// A free-form description of what the transaction was for.
    pub text: String,
    /// The amount of money earned (positive) or spent (negative).
    pub amount: f64,
    /// The ID of the owning user, an opaque string from the identity
    /// provider. The sole partition key: every query filters by this value.
    pub user_id: String,
    /// A free-form category label, never empty (defaults to "Other").
    pub category: String,
    /// Optional free-form notes.
    pub notes: Option<String>,
    /// When the transaction was recorded. Assigned by the server, the sole
    /// sort key for listing (descending, newest first).
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// The payload for creating a transaction.
///
/// The server trusts the client-supplied `user_id` and `amount` sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    /// A free-form description, must not be empty.
    pub text: String,
    /// The amount of money earned (positive) or spent (negative).
    pub amount: f64,
    /// The ID of the owning user.
    pub user_id: String,
    /// A category label. `None` is stored as "Other".
    pub category: Option<String>,
    /// Optional free-form notes.
    pub notes: Option<String>,
}

/// The payload for updating a transaction.
///
/// Only the supplied fields are overwritten, absent fields keep their stored
/// values. There are no merge semantics beyond that.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionChanges {
    /// Replace the description.
    pub text: Option<String>,
    /// Replace the amount.
    pub amount: Option<f64>,
    /// Move the transaction to another user.
    pub user_id: Option<String>,
    /// Replace the category label.
    pub category: Option<String>,
    /// Replace the notes.
    pub notes: Option<String>,
}

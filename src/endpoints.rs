//! Defines the endpoints for the HTTP API.

/// Create a transaction.
pub const TRANSACTIONS: &str = "/transactions";

/// GET lists a page of a user's transactions (the path parameter is the user
/// ID), PUT and DELETE address a single transaction by its ID.
///
/// The three operations share one route because the router cannot tell a user
/// ID apart from a transaction ID, each handler decodes the parameter itself.
pub const TRANSACTION: &str = "/transactions/{id}";

//! Database initialization for the application.

use rusqlite::Connection;

use crate::transaction::create_transaction_table;

/// Create the database tables and indexes if they do not exist.
///
/// This is run once at startup, there is no migration versioning: the schema
/// is synchronized in place.
///
/// # Errors
/// Returns an error if a table or index could not be created.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    create_transaction_table(connection)
}

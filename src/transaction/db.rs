//! Database operations for transactions.

use rusqlite::{Connection, Row};
use time::OffsetDateTime;

use crate::{
    Error,
    transaction::{NewTransaction, Transaction, TransactionChanges, TransactionId},
};

/// The category stored when the client does not supply one.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Create a transaction and return it with its generated ID and timestamp.
///
/// # Errors
/// Returns [Error::EmptyText] if the description is empty, or
/// [Error::SqlError] if there is an SQL error.
pub fn create_transaction(
    new_transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    if new_transaction.text.trim().is_empty() {
        return Err(Error::EmptyText);
    }

    let category = new_transaction
        .category
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_owned());
    let created_at = OffsetDateTime::now_utc();

    connection.execute(
        "INSERT INTO \"transaction\" (text, amount, user_id, category, notes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        (
            &new_transaction.text,
            new_transaction.amount,
            &new_transaction.user_id,
            &category,
            &new_transaction.notes,
            created_at,
        ),
    )?;

    let id = connection.last_insert_rowid();

    Ok(Transaction {
        id,
        text: new_transaction.text,
        amount: new_transaction.amount,
        user_id: new_transaction.user_id,
        category,
        notes: new_transaction.notes,
        created_at,
    })
}

/// Retrieve a single transaction by ID.
///
/// # Errors
/// Returns [Error::NotFound] if `id` does not refer to a transaction, or
/// [Error::SqlError] if there is some other SQL error.
pub fn get_transaction(
    id: TransactionId,
    connection: &Connection,
) -> Result<Transaction, Error> {
    connection
        .prepare(
            "SELECT id, text, amount, user_id, category, notes, created_at
             FROM \"transaction\" WHERE id = :id",
        )?
        .query_row(&[(":id", &id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve a page of a user's transactions, newest first.
///
/// An `offset` past the end of the user's history returns an empty vector,
/// not an error. No upper bound is enforced on `limit`.
///
/// # Errors
/// Returns [Error::SqlError] if there is an SQL error.
pub fn get_transaction_page(
    user_id: &str,
    limit: i64,
    offset: i64,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            // Ties on created_at are broken by ID to keep the page order
            // stable across requests.
            "SELECT id, text, amount, user_id, category, notes, created_at
             FROM \"transaction\"
             WHERE user_id = ?1
             ORDER BY created_at DESC, id DESC
             LIMIT ?2 OFFSET ?3",
        )?
        .query_map((user_id, limit, offset), map_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(|error| error.into()))
        .collect()
}

/// Overwrite the supplied fields of a transaction and return the updated row.
///
/// # Errors
/// Returns [Error::UpdateMissingTransaction] if `id` does not refer to a
/// transaction, [Error::EmptyText] if the new description is empty, or
/// [Error::SqlError] if there is some other SQL error.
pub fn update_transaction(
    id: TransactionId,
    changes: TransactionChanges,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let mut transaction = get_transaction(id, connection).map_err(|error| match error {
        Error::NotFound => Error::UpdateMissingTransaction,
        other => other,
    })?;

    if let Some(text) = changes.text {
        if text.trim().is_empty() {
            return Err(Error::EmptyText);
        }
        transaction.text = text;
    }
    if let Some(amount) = changes.amount {
        transaction.amount = amount;
    }
    if let Some(user_id) = changes.user_id {
        transaction.user_id = user_id;
    }
    if let Some(category) = changes.category {
        transaction.category = category;
    }
    if let Some(notes) = changes.notes {
        transaction.notes = Some(notes);
    }

    connection.execute(
        "UPDATE \"transaction\"
         SET text = ?1, amount = ?2, user_id = ?3, category = ?4, notes = ?5
         WHERE id = ?6",
        (
            &transaction.text,
            transaction.amount,
            &transaction.user_id,
            &transaction.category,
            &transaction.notes,
            id,
        ),
    )?;

    Ok(transaction)
}

/// Delete a transaction by ID.
///
/// # Errors
/// Returns [Error::DeleteMissingTransaction] if `id` does not refer to a
/// transaction, or [Error::SqlError] if there is an SQL error.
pub fn delete_transaction(id: TransactionId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM \"transaction\" WHERE id = ?1", [id])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingTransaction);
    }

    Ok(())
}

/// Initialize the transaction table and indexes.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
            id INTEGER PRIMARY KEY,
            text TEXT NOT NULL,
            amount REAL NOT NULL,
            user_id TEXT NOT NULL,
            category TEXT NOT NULL DEFAULT 'Other',
            notes TEXT,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_transaction_user_created
            ON \"transaction\"(user_id, created_at DESC);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        text: row.get(1)?,
        amount: row.get(2)?,
        user_id: row.get(3)?,
        category: row.get(4)?,
        notes: row.get(5)?,
        created_at: row.get(6)?,
    })
}

#[cfg(test)]
mod transaction_db_tests {
    use rusqlite::Connection;

    use crate::{
        Error,
        transaction::{NewTransaction, TransactionChanges},
    };

    use super::{
        DEFAULT_CATEGORY, create_transaction, create_transaction_table, delete_transaction,
        get_transaction, get_transaction_page, update_transaction,
    };

    fn get_test_connection() -> Connection {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        create_transaction_table(&connection).expect("Could not create transaction table");

        connection
    }

    fn new_transaction(text: &str, amount: f64, user_id: &str) -> NewTransaction {
        NewTransaction {
            text: text.to_owned(),
            amount,
            user_id: user_id.to_owned(),
            category: None,
            notes: None,
        }
    }

    #[test]
    fn create_assigns_novel_ids_and_timestamp() {
        let connection = get_test_connection();

        let first = create_transaction(new_transaction("Coffee", -4.5, "alice"), &connection)
            .expect("Could not create transaction");
        let second = create_transaction(new_transaction("Salary", 100.0, "alice"), &connection)
            .expect("Could not create transaction");

        assert_ne!(first.id, second.id);
        assert!(second.created_at >= first.created_at);
    }

    #[test]
    fn create_defaults_category_to_other() {
        let connection = get_test_connection();

        let transaction = create_transaction(new_transaction("Coffee", -4.5, "alice"), &connection)
            .expect("Could not create transaction");

        assert_eq!(transaction.category, DEFAULT_CATEGORY);
        assert_eq!(
            get_transaction(transaction.id, &connection)
                .expect("Could not get transaction")
                .category,
            DEFAULT_CATEGORY
        );
    }

    #[test]
    fn create_fails_on_empty_text() {
        let connection = get_test_connection();

        let result = create_transaction(new_transaction("  \t", -4.5, "alice"), &connection);

        assert_eq!(result, Err(Error::EmptyText));
    }

    #[test]
    fn page_is_ordered_newest_first() {
        let connection = get_test_connection();
        let mut ids = Vec::new();
        for n in 1..=3 {
            let transaction =
                create_transaction(new_transaction(&format!("t{n}"), 1.0, "alice"), &connection)
                    .expect("Could not create transaction");
            ids.push(transaction.id);
        }

        let page = get_transaction_page("alice", 10, 0, &connection)
            .expect("Could not get transaction page");

        let got_ids: Vec<_> = page.iter().map(|transaction| transaction.id).collect();
        ids.reverse();
        assert_eq!(got_ids, ids);
    }

    #[test]
    fn page_respects_limit_and_offset() {
        let connection = get_test_connection();
        for n in 1..=7 {
            create_transaction(new_transaction(&format!("t{n}"), 1.0, "alice"), &connection)
                .expect("Could not create transaction");
        }

        let first_page = get_transaction_page("alice", 5, 0, &connection)
            .expect("Could not get transaction page");
        let second_page = get_transaction_page("alice", 5, 5, &connection)
            .expect("Could not get transaction page");

        assert_eq!(first_page.len(), 5);
        assert_eq!(second_page.len(), 2);
        assert_eq!(first_page[0].text, "t7");
        assert_eq!(second_page[1].text, "t1");
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let connection = get_test_connection();
        create_transaction(new_transaction("t1", 1.0, "alice"), &connection)
            .expect("Could not create transaction");

        let page = get_transaction_page("alice", 5, 100, &connection)
            .expect("Could not get transaction page");

        assert!(page.is_empty());
    }

    #[test]
    fn page_only_contains_the_users_rows() {
        let connection = get_test_connection();
        create_transaction(new_transaction("mine", 1.0, "alice"), &connection)
            .expect("Could not create transaction");
        create_transaction(new_transaction("theirs", 1.0, "bob"), &connection)
            .expect("Could not create transaction");

        let page = get_transaction_page("alice", 10, 0, &connection)
            .expect("Could not get transaction page");

        assert_eq!(page.len(), 1);
        assert_eq!(page[0].text, "mine");
    }

    #[test]
    fn update_overwrites_only_supplied_fields() {
        let connection = get_test_connection();
        let transaction = create_transaction(
            NewTransaction {
                text: "Groceries".to_owned(),
                amount: -50.0,
                user_id: "alice".to_owned(),
                category: Some("Food".to_owned()),
                notes: Some("weekly shop".to_owned()),
            },
            &connection,
        )
        .expect("Could not create transaction");

        let updated = update_transaction(
            transaction.id,
            TransactionChanges {
                amount: Some(-25.0),
                ..Default::default()
            },
            &connection,
        )
        .expect("Could not update transaction");

        assert_eq!(updated.amount, -25.0);
        assert_eq!(updated.text, "Groceries");
        assert_eq!(updated.category, "Food");
        assert_eq!(updated.notes.as_deref(), Some("weekly shop"));
        assert_eq!(updated.created_at, transaction.created_at);

        let stored =
            get_transaction(transaction.id, &connection).expect("Could not get transaction");
        assert_eq!(stored, updated);
    }

    #[test]
    fn update_fails_on_missing_transaction() {
        let connection = get_test_connection();

        let result = update_transaction(999, TransactionChanges::default(), &connection);

        assert_eq!(result, Err(Error::UpdateMissingTransaction));
    }

    #[test]
    fn update_fails_on_empty_text() {
        let connection = get_test_connection();
        let transaction = create_transaction(new_transaction("t1", 1.0, "alice"), &connection)
            .expect("Could not create transaction");

        let result = update_transaction(
            transaction.id,
            TransactionChanges {
                text: Some("".to_owned()),
                ..Default::default()
            },
            &connection,
        );

        assert_eq!(result, Err(Error::EmptyText));
    }

    #[test]
    fn delete_removes_the_row() {
        let connection = get_test_connection();
        let transaction = create_transaction(new_transaction("t1", 1.0, "alice"), &connection)
            .expect("Could not create transaction");

        delete_transaction(transaction.id, &connection).expect("Could not delete transaction");

        assert_eq!(
            get_transaction(transaction.id, &connection),
            Err(Error::NotFound)
        );
    }

    #[test]
    fn delete_fails_on_missing_transaction_and_leaves_rows() {
        let connection = get_test_connection();
        create_transaction(new_transaction("t1", 1.0, "alice"), &connection)
            .expect("Could not create transaction");

        let result = delete_transaction(999, &connection);

        assert_eq!(result, Err(Error::DeleteMissingTransaction));
        assert_eq!(
            get_transaction_page("alice", 10, 0, &connection)
                .expect("Could not get transaction page")
                .len(),
            1
        );
    }
}

//! Transaction records and their HTTP endpoints.

mod create;
mod db;
mod delete;
mod domain;
mod list;
mod update;

pub use create::create_transaction_endpoint;
pub use db::{
    DEFAULT_CATEGORY, create_transaction, create_transaction_table, delete_transaction,
    get_transaction, get_transaction_page, update_transaction,
};
pub use delete::delete_transaction_endpoint;
pub use domain::{NewTransaction, Transaction, TransactionChanges, TransactionId};
pub use list::list_transactions_endpoint;
pub use update::update_transaction_endpoint;

//! Creates a database pre-populated with demo transactions for manual
//! testing.

use clap::Parser;
use rusqlite::Connection;

use fintrack::{
    initialize_db,
    transaction::{NewTransaction, create_transaction},
};

/// Creates a database pre-populated with demo transactions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to write the SQLite database to.
    #[arg(long, default_value = "test.sqlite")]
    db_path: String,

    /// The user ID the demo transactions belong to.
    #[arg(long, default_value = "demo-user")]
    user: String,
}

fn main() {
    let args = Args::parse();

    let connection = Connection::open(&args.db_path).expect("Could not open database file.");
    initialize_db(&connection).expect("Could not initialize the database.");

    let rows = [
        ("Salary", 3200.0, "Other", Some("January pay")),
        ("Rent", -1200.0, "Housing", None),
        ("Groceries", -85.5, "Food", Some("weekly shop")),
        ("Bus pass", -60.0, "Transport", None),
        ("Coffee", -4.5, "Food", None),
        ("Concert tickets", -90.0, "Entertainment", Some("two seats")),
        ("Book sale", 15.0, "Other", None),
        ("Electricity", -75.2, "Housing", None),
        ("Takeaway", -28.0, "Food", None),
        ("Freelance invoice", 450.0, "Other", Some("logo design")),
        ("Gym membership", -35.0, "Health", None),
        ("Groceries", -92.3, "Food", None),
    ];

    for (text, amount, category, notes) in rows {
        create_transaction(
            NewTransaction {
                text: text.to_owned(),
                amount,
                user_id: args.user.clone(),
                category: Some(category.to_owned()),
                notes: notes.map(str::to_owned),
            },
            &connection,
        )
        .expect("Could not insert demo transaction.");
    }

    println!(
        "Wrote {} demo transactions for user '{}' to {}",
        rows.len(),
        args.user,
        args.db_path
    );
}

//! A terminal client for the fintrack API.
//!
//! Mirrors the data flow of the web client: paginated list with load-more,
//! in-memory search and category filters, a summary with a category
//! breakdown, and a full refresh from the first page after every mutation.

use clap::{Parser, Subcommand};
use comfy_table::Table;

use fintrack::{
    Error,
    client::{
        ApiClient, CategoryFilter, FeedState, ProviderAccount, Summary, UserProfile,
        filter_transactions, summarize,
    },
    transaction::{NewTransaction, Transaction, TransactionChanges, TransactionId},
};

/// A terminal client for the fintrack API.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The base URL of the API server.
    #[arg(long, default_value = "http://localhost:5000")]
    api_url: String,

    /// The user ID to operate as (the ID from the identity provider).
    #[arg(long)]
    user: String,

    /// The signed-in user's display name, as the identity provider reports
    /// it.
    #[arg(long)]
    name: Option<String>,

    /// The signed-in user's email, used for the header when there is no
    /// display name.
    #[arg(long)]
    email: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List transactions, newest first, a page at a time.
    List {
        /// How many pages to fetch before stopping.
        #[arg(long, default_value_t = 1)]
        pages: usize,

        /// Rows fetched per page.
        #[arg(long, default_value_t = 5)]
        page_limit: usize,

        /// Case-insensitive substring to match against the description.
        #[arg(long, default_value = "")]
        search: String,

        /// Only show transactions with this exact category.
        #[arg(long)]
        category: Option<String>,
    },
    /// Record a new transaction. Positive amounts are income, negative are
    /// expenses.
    Add {
        /// A description of the transaction.
        text: String,

        /// The amount, signed.
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        /// A category label, defaults to "Other" on the server.
        #[arg(long)]
        category: Option<String>,

        /// Free-form notes.
        #[arg(long)]
        notes: Option<String>,
    },
    /// Overwrite fields of an existing transaction.
    Edit {
        /// The ID of the transaction to change.
        id: TransactionId,

        #[arg(long)]
        text: Option<String>,

        #[arg(long, allow_negative_numbers = true)]
        amount: Option<f64>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Permanently remove a transaction.
    Delete {
        /// The ID of the transaction to remove.
        id: TransactionId,
    },
    /// Show income, expense, and balance totals with the spending breakdown.
    Summary,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    let api = ApiClient::new(&args.api_url)?;

    let profile = UserProfile::from(ProviderAccount {
        uid: args.user,
        display_name: args.name,
        email: args.email,
    });
    println!("Logged in as: {}", profile.display_name);

    match args.command {
        Command::List {
            pages,
            page_limit,
            search,
            category,
        } => {
            let feed = fetch_pages(&api, &profile.id, pages, page_limit)?;
            let category_filter = category.map_or(CategoryFilter::All, CategoryFilter::Category);
            let rows = filter_transactions(feed.transactions(), &search, &category_filter);

            print_transactions(rows.into_iter());
            if feed.has_more() {
                println!("More transactions available, rerun with --pages {}", pages + 1);
            }
        }
        Command::Add {
            text,
            amount,
            category,
            notes,
        } => {
            let created = api.create(&NewTransaction {
                text,
                amount,
                user_id: profile.id.clone(),
                category,
                notes,
            })?;
            println!("Created transaction {}", created.id);

            refresh_first_page(&api, &profile.id)?;
        }
        Command::Edit {
            id,
            text,
            amount,
            category,
            notes,
        } => {
            let updated = api.update(
                id,
                &TransactionChanges {
                    text,
                    amount,
                    user_id: None,
                    category,
                    notes,
                },
            )?;
            println!("Updated transaction {}", updated.id);

            refresh_first_page(&api, &profile.id)?;
        }
        Command::Delete { id } => {
            api.delete(id)?;
            println!("Deleted transaction {id}");

            refresh_first_page(&api, &profile.id)?;
        }
        Command::Summary => {
            let history = api.list_all(&profile.id)?;
            print_summary(&summarize(&history));
        }
    }

    Ok(())
}

/// Fetch up to `pages` pages into a fresh feed, stopping early when the
/// server runs out of rows.
fn fetch_pages(
    api: &ApiClient,
    user_id: &str,
    pages: usize,
    page_limit: usize,
) -> Result<FeedState, Error> {
    let mut feed = FeedState::new(page_limit);
    feed.apply_initial_page(api.list_page(user_id, feed.page_limit(), 0)?);

    for _ in 1..pages {
        if !feed.has_more() {
            break;
        }
        let page = api.list_page(user_id, feed.page_limit(), feed.offset())?;
        feed.apply_next_page(page);
    }

    Ok(feed)
}

/// Re-fetch the first page after a mutation, discarding accumulated state,
/// and show it.
fn refresh_first_page(api: &ApiClient, user_id: &str) -> Result<(), Error> {
    let mut feed = FeedState::new(fintrack::DEFAULT_PAGE_LIMIT as usize);
    feed.apply_initial_page(api.list_page(user_id, feed.page_limit(), 0)?);

    print_transactions(feed.transactions().iter());
    Ok(())
}

fn print_transactions<'a>(transactions: impl Iterator<Item = &'a Transaction>) {
    let mut table = Table::new();
    table.set_header(["ID", "Date", "Description", "Category", "Amount", "Notes"]);

    let mut count = 0;
    for transaction in transactions {
        table.add_row([
            transaction.id.to_string(),
            transaction.created_at.date().to_string(),
            transaction.text.clone(),
            transaction.category.clone(),
            format!("{:.2}", transaction.amount),
            transaction.notes.clone().unwrap_or_default(),
        ]);
        count += 1;
    }

    if count == 0 {
        println!("No transactions.");
    } else {
        println!("{table}");
    }
}

fn print_summary(summary: &Summary) {
    let mut totals = Table::new();
    totals.set_header(["Balance", "Income", "Expense"]);
    totals.add_row([
        format!("{:.2}", summary.balance),
        format!("+{:.2}", summary.income),
        format!("-{:.2}", summary.expense),
    ]);
    println!("{totals}");

    if summary.category_totals.is_empty() {
        println!("No expenses yet.");
        return;
    }

    let mut breakdown = Table::new();
    breakdown.set_header(["Category", "Spent"]);

    let mut categories: Vec<_> = summary.category_totals.iter().collect();
    categories.sort_by(|&(_, a), &(_, b)| b.total_cmp(a));
    for (name, amount) in categories {
        breakdown.add_row([name.clone(), format!("-{amount:.2}")]);
    }
    println!("{breakdown}");
}

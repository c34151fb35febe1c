//! In-memory filtering of the loaded transaction pages.
//!
//! Filtering only narrows what is rendered, it never touches pagination
//! state: "load more" always fetches the next unfiltered server page.

use crate::transaction::Transaction;

/// Which category a list view is narrowed to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every category.
    #[default]
    All,
    /// Show only transactions whose category matches exactly.
    Category(String),
}

/// Apply the search and category filters over the loaded rows.
///
/// The search is a case-insensitive substring match on `text`. The two
/// filters are independent and combinable.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    search: &str,
    category: &CategoryFilter,
) -> Vec<&'a Transaction> {
    let search = search.to_lowercase();

    transactions
        .iter()
        .filter(|transaction| transaction.text.to_lowercase().contains(&search))
        .filter(|transaction| match category {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => &transaction.category == name,
        })
        .collect()
}

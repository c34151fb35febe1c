//! Reduction of a transaction history into totals and a category breakdown.

use std::collections::HashMap;

use crate::transaction::Transaction;

/// How many rows the summary fetch asks for in a single request.
///
/// The summary deliberately bypasses pagination: one large fetch, reduced
/// locally.
pub const SUMMARY_FETCH_LIMIT: usize = 1000;

/// Income, expense, and balance totals with per-category expense sums.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Summary {
    /// The sum of all positive amounts.
    pub income: f64,
    /// The sum of the absolute values of all negative amounts.
    pub expense: f64,
    /// `income - expense`.
    pub balance: f64,
    /// Absolute expense amount summed per category. Income rows are excluded.
    pub category_totals: HashMap<String, f64>,
}

/// Reduce `transactions` into a [Summary].
///
/// Recomputed from scratch on every call, there is no incremental update.
/// A zero amount falls into the expense branch and contributes nothing, the
/// same way the sign convention treats it: not income.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut summary = Summary::default();

    for transaction in transactions {
        if transaction.amount > 0.0 {
            summary.income += transaction.amount;
        } else {
            let absolute_amount = transaction.amount.abs();
            summary.expense += absolute_amount;
            *summary
                .category_totals
                .entry(transaction.category.clone())
                .or_insert(0.0) += absolute_amount;
        }
    }

    summary.balance = summary.income - summary.expense;
    summary
}

//! Client-side pagination state for the transaction list.

use crate::transaction::Transaction;

/// The accumulated transaction pages shown by the client, with the bookkeeping
/// needed to ask the server for the next page.
///
/// The state is an explicit store object: the only way it changes is through
/// the reducer methods below, there are no ambient globals.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    transactions: Vec<Transaction>,
    offset: usize,
    has_more: bool,
    page_limit: usize,
}

impl FeedState {
    /// Create an empty feed that fetches `page_limit` rows per page.
    ///
    /// `has_more` starts true so that the first fetch is always attempted.
    pub fn new(page_limit: usize) -> Self {
        Self {
            transactions: Vec::new(),
            offset: 0,
            has_more: true,
            page_limit,
        }
    }

    /// The rows loaded so far, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The offset to request the next page at.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Whether another page might exist on the server.
    ///
    /// This is the full-page heuristic: a page of exactly `page_limit` rows is
    /// taken to mean more rows might exist. It is not verified against a total
    /// count, so when the history is an exact multiple of the page size the
    /// client makes one extra round trip that returns an empty page.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// The fixed number of rows requested per page.
    pub fn page_limit(&self) -> usize {
        self.page_limit
    }

    /// Apply the first page of a fresh fetch, replacing any accumulated rows.
    pub fn apply_initial_page(&mut self, page: Vec<Transaction>) {
        self.offset = page.len();
        self.has_more = page.len() == self.page_limit;
        self.transactions = page;
    }

    /// Append a "load more" page and advance the offset by the returned count.
    pub fn apply_next_page(&mut self, page: Vec<Transaction>) {
        self.offset += page.len();
        self.has_more = page.len() == self.page_limit;
        self.transactions.extend(page);
    }

    /// Discard all accumulated pages.
    ///
    /// Called after any create, update, or delete so that the next fetch
    /// starts again from offset 0 and reflects the latest server state.
    pub fn reset(&mut self) {
        *self = Self::new(self.page_limit);
    }
}

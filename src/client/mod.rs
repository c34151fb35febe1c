//! The client data layer: API calls, pagination state, aggregation, and
//! filtering over the loaded rows.
//!
//! This is everything the terminal client needs that is not rendering. All
//! state lives in explicit store objects ([FeedState]) updated by
//! reducer-style methods, the aggregation and filtering are pure functions.

mod api;
mod feed;
mod filter;
mod identity;
mod summary;

pub use api::ApiClient;
pub use feed::FeedState;
pub use filter::{CategoryFilter, filter_transactions};
pub use identity::{ProviderAccount, UserProfile};
pub use summary::{SUMMARY_FETCH_LIMIT, Summary, summarize};

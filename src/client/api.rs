//! The HTTP client for the transaction API.

use reqwest::{StatusCode, blocking::Client};
use std::time::Duration;

use crate::{
    Error,
    client::summary::SUMMARY_FETCH_LIMIT,
    transaction::{NewTransaction, Transaction, TransactionChanges, TransactionId},
};

/// A blocking client for the four transaction operations.
///
/// There are no retries or cancellation: a failed call returns [Error::Http]
/// and the caller keeps whatever state it already had.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a client for the API server at `base_url`,
    /// e.g. `http://localhost:5000`.
    ///
    /// # Errors
    /// Returns [Error::Http] if the underlying HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|error| Error::Http(error.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client,
        })
    }

    /// Fetch one page of `user_id`'s transactions, newest first.
    pub fn list_page(
        &self,
        user_id: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Transaction>, Error> {
        self.client
            .get(page_url(&self.base_url, user_id, limit, offset))
            .send()
            .map_err(|error| Error::Http(error.to_string()))
            .and_then(check_status)?
            .json()
            .map_err(|error| Error::Http(error.to_string()))
    }

    /// Fetch up to [SUMMARY_FETCH_LIMIT] of `user_id`'s transactions in one
    /// call, for aggregation.
    pub fn list_all(&self, user_id: &str) -> Result<Vec<Transaction>, Error> {
        self.list_page(user_id, SUMMARY_FETCH_LIMIT, 0)
    }

    /// Create a transaction and return the stored record.
    pub fn create(&self, new_transaction: &NewTransaction) -> Result<Transaction, Error> {
        self.client
            .post(format!("{}/transactions", self.base_url))
            .json(new_transaction)
            .send()
            .map_err(|error| Error::Http(error.to_string()))
            .and_then(check_status)?
            .json()
            .map_err(|error| Error::Http(error.to_string()))
    }

    /// Overwrite the supplied fields of a transaction and return the updated
    /// record.
    pub fn update(
        &self,
        id: TransactionId,
        changes: &TransactionChanges,
    ) -> Result<Transaction, Error> {
        self.client
            .put(format!("{}/transactions/{id}", self.base_url))
            .json(changes)
            .send()
            .map_err(|error| Error::Http(error.to_string()))
            .and_then(check_status)?
            .json()
            .map_err(|error| Error::Http(error.to_string()))
    }

    /// Permanently remove a transaction.
    pub fn delete(&self, id: TransactionId) -> Result<(), Error> {
        self.client
            .delete(format!("{}/transactions/{id}", self.base_url))
            .send()
            .map_err(|error| Error::Http(error.to_string()))
            .and_then(check_status)
            .map(|_| ())
    }
}

fn page_url(base_url: &str, user_id: &str, limit: usize, offset: usize) -> String {
    format!("{base_url}/transactions/{user_id}?limit={limit}&offset={offset}")
}

fn check_status(
    response: reqwest::blocking::Response,
) -> Result<reqwest::blocking::Response, Error> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::NOT_FOUND => Err(Error::NotFound),
        status => {
            let body = response.text().unwrap_or_default();
            Err(Error::Http(format!("{status}: {body}")))
        }
    }
}

#[cfg(test)]
mod api_client_tests {
    use crate::{Error, client::api::ApiClient};

    use super::page_url;

    #[test]
    fn page_url_includes_limit_and_offset() {
        assert_eq!(
            page_url("http://localhost:5000", "google-uid-1", 5, 10),
            "http://localhost:5000/transactions/google-uid-1?limit=5&offset=10"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:5000/").expect("Could not build client");

        assert_eq!(client.base_url, "http://localhost:5000");
    }

    #[test]
    fn unreachable_server_surfaces_as_http_error() {
        // Port 9 (discard) is never listening in the test environment.
        let client = ApiClient::new("http://127.0.0.1:9").expect("Could not build client");

        let result = client.list_page("alice", 5, 0);

        assert!(matches!(result, Err(Error::Http(_))));
    }
}

//! # Mock Framework
//!
//! Utilities for testing code that depends on a [`RecordLookup`] without a live service.
//!
//! [`MockLookup`] answers `exists` calls from a queue of expectations, in order.
//! Each expectation names the id it expects and the answer to give back.
//! Call [`MockLookup::verify`] at the end of the test to check every expectation was used.
//!
//! ## When to use Mocks vs Real Lookups
//!
//! | Feature | MockLookup | RecordStore / UserClient |
//! |---------|------------|--------------------------|
//! | **Speed** | Instant | Instant / network round trip |
//! | **Determinism** | 100% Deterministic | Depends on store contents / remote service |
//! | **Error Injection** | Easy (`return_err`) | Hard (needs a failing service) |
//!
//! ## Example
//!
//! ```rust
//! use user_order_services::framework::mock::MockLookup;
//! use user_order_services::framework::{LookupError, RecordLookup};
//! use user_order_services::model::User;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockLookup::<User>::new();
//!     mock.expect_exists("1").return_ok(true);
//!     mock.expect_exists("999").return_err(LookupError::UnexpectedStatus(500));
//!
//!     assert_eq!(mock.exists("1").await, Ok(true));
//!     assert!(mock.exists("999").await.is_err());
//!
//!     mock.verify();
//! }
//! ```

use crate::framework::{LookupError, Record, RecordLookup};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected `exists` call and the answer to give.
struct Expectation {
    id: String,
    response: Result<bool, LookupError>,
}

/// A mock lookup with expectation tracking for fluent testing.
///
/// Clones share one expectation queue, so a test can keep a handle for
/// [`verify`](Self::verify) while the code under test owns another.
pub struct MockLookup<T: Record> {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    calls: Arc<Mutex<Vec<String>>>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> Clone for MockLookup<T> {
    fn clone(&self) -> Self {
        Self {
            expectations: Arc::clone(&self.expectations),
            calls: Arc::clone(&self.calls),
            _record: PhantomData,
        }
    }
}

impl<T: Record> Default for MockLookup<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MockLookup<T> {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self {
            expectations: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            _record: PhantomData,
        }
    }

    /// Expects an `exists` call for `id`.
    pub fn expect_exists(&self, id: impl Into<String>) -> ExistsExpectationBuilder {
        ExistsExpectationBuilder {
            id: id.into(),
            expectations: self.expectations.clone(),
        }
    }

    /// Ids passed to `exists`, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

#[async_trait]
impl<T: Record> RecordLookup<T> for MockLookup<T> {
    async fn exists(&self, id: &str) -> Result<bool, LookupError> {
        self.calls.lock().unwrap().push(id.to_owned());
        let expectation = self.expectations.lock().unwrap().pop_front();
        match expectation {
            Some(expectation) => {
                assert_eq!(
                    expectation.id,
                    id,
                    "{} lookup called with unexpected id",
                    T::KIND
                );
                expectation.response
            }
            None => panic!("Unexpected {} lookup for id {id}", T::KIND),
        }
    }
}

/// Builder for `exists` expectations.
pub struct ExistsExpectationBuilder {
    id: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ExistsExpectationBuilder {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, exists: bool) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            id: self.id,
            response: Ok(exists),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: LookupError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            id: self.id,
            response: Err(error),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;

    #[tokio::test]
    async fn test_mock_lookup_with_expectations() {
        let mock = MockLookup::<User>::new();
        mock.expect_exists("1").return_ok(true);
        mock.expect_exists("2").return_ok(false);
        mock.expect_exists("3")
            .return_err(LookupError::Transport("connection refused".into()));

        let lookup = mock.clone();
        assert_eq!(lookup.exists("1").await, Ok(true));
        assert_eq!(lookup.exists("2").await, Ok(false));
        assert_eq!(
            lookup.exists("3").await,
            Err(LookupError::Transport("connection refused".into()))
        );

        assert_eq!(mock.calls(), vec!["1", "2", "3"]);
        mock.verify();
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn test_verify_panics_on_unused_expectation() {
        let mock = MockLookup::<User>::new();
        mock.expect_exists("1").return_ok(true);
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Unexpected User lookup")]
    async fn test_unexpected_call_panics() {
        let mock = MockLookup::<User>::new();
        let _ = mock.exists("1").await;
    }
}

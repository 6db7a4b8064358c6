//! In-memory quote source for tests.

use super::{PeerError, QuoteSource};
use crate::domain::Quote;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Quote source returning canned quotes, or a canned failure.
#[derive(Debug, Clone)]
pub struct MockQuoteSource {
    name: String,
    quotes: Vec<Quote>,
    failure: Option<String>,
    calls: Arc<AtomicUsize>,
}

impl MockQuoteSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quotes: Vec::new(),
            failure: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_quote(mut self, quote: Quote) -> Self {
        self.quotes.push(quote);
        self
    }

    pub fn with_quotes(mut self, quotes: Vec<Quote>) -> Self {
        self.quotes.extend(quotes);
        self
    }

    /// Make every fetch fail with a network error carrying `message`.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Number of fetches served so far, shared across clones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuoteSource for MockQuoteSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_quotes(&self) -> Result<Vec<Quote>, PeerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(message) => Err(PeerError::Network {
                peer: self.name.clone(),
                message: message.clone(),
            }),
            None => Ok(self.quotes.clone()),
        }
    }
}

//! Sources of quote lists living outside this process.

use crate::domain::Quote;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

pub mod http;
pub mod mock;

pub use http::HttpQuoteSource;
pub use mock::MockQuoteSource;

/// A remote list of quotes, typically another instance's `GET /quotes/`.
#[async_trait]
pub trait QuoteSource: Send + Sync + fmt::Debug {
    /// Short label used in logs and error messages.
    fn name(&self) -> &str;

    /// Fetch the full quote list once. No retry is attempted.
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, PeerError>;
}

/// Error type for peer fetches.
#[derive(Debug, Clone, Error)]
pub enum PeerError {
    /// Connection refused, DNS failure, reset.
    #[error("Network error from {peer}: {message}")]
    Network { peer: String, message: String },
    /// Peer answered with a non-success status.
    #[error("HTTP error {status} from {peer}")]
    Http { peer: String, status: u16 },
    /// Body was not a JSON array of quotes.
    #[error("Parse error from {peer}: {message}")]
    Parse { peer: String, message: String },
}

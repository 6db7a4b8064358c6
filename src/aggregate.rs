//! Merges the local quote list with the lists of peer instances.

use crate::db::Repository;
use crate::domain::Quote;
use crate::peers::{PeerError, QuoteSource};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
    #[error(transparent)]
    Peer(#[from] PeerError),
}

/// Local rows first, then each peer in order.
///
/// Sources are queried one after another. The first failure aborts the whole
/// collection; rows already gathered are discarded. Ids are not deduplicated.
#[derive(Clone, Debug)]
pub struct Aggregator {
    repo: Arc<Repository>,
    peers: Vec<Arc<dyn QuoteSource>>,
}

impl Aggregator {
    pub fn new(repo: Arc<Repository>, peers: Vec<Arc<dyn QuoteSource>>) -> Self {
        Self { repo, peers }
    }

    /// An aggregator with no peers, which serves the local table only.
    pub fn local_only(repo: Arc<Repository>) -> Self {
        Self::new(repo, Vec::new())
    }

    pub fn peer_count(&self) -> usize {
        self.peers.len()
    }

    pub async fn collect(&self) -> Result<Vec<Quote>, AggregateError> {
        let mut quotes = self.repo.list_quotes().await?;
        debug!("Loaded {} local quotes", quotes.len());

        for peer in &self.peers {
            let fetched = peer.fetch_quotes().await?;
            debug!("Fetched {} quotes from {}", fetched.len(), peer.name());
            quotes.extend(fetched);
        }

        if !self.peers.is_empty() {
            info!(
                "Aggregated {} quotes from {} peers",
                quotes.len(),
                self.peers.len()
            );
        }
        Ok(quotes)
    }
}

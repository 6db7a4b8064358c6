//! Peer client speaking this service's own `GET /quotes/` contract.

use super::{PeerError, QuoteSource};
use crate::domain::Quote;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Fetches a peer's quote list over HTTP from a fixed URL.
#[derive(Debug, Clone)]
pub struct HttpQuoteSource {
    client: Client,
    url: String,
}

impl HttpQuoteSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    /// Share an existing client (and its connection pool) across peers.
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl QuoteSource for HttpQuoteSource {
    fn name(&self) -> &str {
        &self.url
    }

    async fn fetch_quotes(&self) -> Result<Vec<Quote>, PeerError> {
        debug!("Fetching quotes from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| PeerError::Network {
                peer: self.url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PeerError::Http {
                peer: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| PeerError::Network {
            peer: self.url.clone(),
            message: e.to_string(),
        })?;

        serde_json::from_slice::<Vec<Quote>>(&bytes).map_err(|e| PeerError::Parse {
            peer: self.url.clone(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_peer_is_network_error() {
        // Bind then drop a listener so the port is known to be closed.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = HttpQuoteSource::new(format!("http://{}/quotes/", addr));
        match source.fetch_quotes().await {
            Err(PeerError::Network { peer, .. }) => assert_eq!(peer, source.url()),
            other => panic!("Expected Network error, got {:?}", other),
        }
    }
}

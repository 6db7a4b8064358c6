//! Quote records as stored locally and as exchanged with peers.

use serde::{Deserialize, Serialize};

/// A stored quote. The id is assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: i64,
    pub author: String,
    pub content: String,
}

/// Payload for creating a quote.
///
/// Unknown fields (including a client-supplied `id`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuote {
    pub author: String,
    pub content: String,
}

impl NewQuote {
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Self {
        NewQuote {
            author: author.into(),
            content: content.into(),
        }
    }
}

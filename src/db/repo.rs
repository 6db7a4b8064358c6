//! Repository layer for quote storage.

use crate::domain::{NewQuote, Quote};
use sqlx::sqlite::SqlitePool;
use sqlx::Row;
use tracing::debug;

/// Storage handle for the quote table.
///
/// Constructed once from an initialized pool and shared through the
/// application state. Call [`Repository::close`] to release the pool.
#[derive(Debug, Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Insert a quote and return it with its assigned id.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn create_quote(&self, quote: &NewQuote) -> Result<Quote, sqlx::Error> {
        let result = sqlx::query("INSERT INTO quote (author, content) VALUES (?, ?)")
            .bind(quote.author.as_str())
            .bind(quote.content.as_str())
            .execute(&self.pool)
            .await?;

        let id = result.last_insert_rowid();
        debug!("Stored quote id={}", id);

        Ok(Quote {
            id,
            author: quote.author.clone(),
            content: quote.content.clone(),
        })
    }

    /// Return every stored quote in storage order.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_quotes(&self) -> Result<Vec<Quote>, sqlx::Error> {
        let rows = sqlx::query("SELECT id, author, content FROM quote")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|row| -> Result<Quote, sqlx::Error> {
                Ok(Quote {
                    id: row.try_get("id")?,
                    author: row.try_get("author")?,
                    content: row.try_get("content")?,
                })
            })
            .collect()
    }

    /// Close the underlying pool. Later calls on this handle fail.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

pub mod aggregate;
pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod peers;

pub use aggregate::{AggregateError, Aggregator};
pub use config::{Config, ServiceMode};
pub use db::{init_db, Repository};
pub use domain::{NewQuote, Quote};
pub use error::AppError;
pub use peers::{HttpQuoteSource, MockQuoteSource, PeerError, QuoteSource};

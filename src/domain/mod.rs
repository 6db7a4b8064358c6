//! Domain types for the quote service.

pub mod quote;

pub use quote::{NewQuote, Quote};

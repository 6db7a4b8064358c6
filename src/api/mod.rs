pub mod chat;
pub mod quotes;

use crate::aggregate::Aggregator;
use crate::db::Repository;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub aggregator: Arc<Aggregator>,
}

impl AppState {
    pub fn new(repo: Arc<Repository>, aggregator: Arc<Aggregator>) -> Self {
        Self { repo, aggregator }
    }

    /// State for the standalone variant: listing returns local rows only.
    pub fn standalone(repo: Arc<Repository>) -> Self {
        let aggregator = Arc::new(Aggregator::local_only(repo.clone()));
        Self::new(repo, aggregator)
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(chat::index))
        .route("/ws", get(chat::ws_handler))
        .route(
            "/quotes/",
            get(quotes::list_quotes).post(quotes::create_quote),
        )
        .route("/quotes", get(quotes::list_quotes).post(quotes::create_quote))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

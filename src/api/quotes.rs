use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::AppState;
use crate::domain::{NewQuote, Quote};
use crate::error::AppError;

pub async fn create_quote(
    State(state): State<AppState>,
    Json(payload): Json<NewQuote>,
) -> Result<(StatusCode, &'static str), AppError> {
    state.repo.create_quote(&payload).await?;
    Ok((StatusCode::CREATED, "Created"))
}

pub async fn list_quotes(State(state): State<AppState>) -> Result<Json<Vec<Quote>>, AppError> {
    let quotes = state.aggregator.collect().await?;
    tracing::debug!("Returning {} quotes", quotes.len());
    Ok(Json(quotes))
}

use axum::http::StatusCode;
use axum::routing::get;
use quotebook::api::{self, AppState};
use quotebook::db::init_db;
use quotebook::peers::{HttpQuoteSource, QuoteSource};
use quotebook::{Aggregator, NewQuote, Repository};
use std::net::SocketAddr;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tower::util::ServiceExt;

async fn temp_repo(temp_dir: &TempDir, name: &str) -> Arc<Repository> {
    let db_path = temp_dir
        .path()
        .join(name)
        .to_string_lossy()
        .to_string();
    let pool = init_db(&db_path).await.expect("init_db failed");
    Arc::new(Repository::new(pool))
}

/// Serve `app` on an ephemeral local port for the rest of the test.
async fn spawn_server(app: axum::Router) -> anyhow::Result<SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Server error: {}", e);
        }
    });
    Ok(addr)
}

/// A standalone instance holding one quote by `author`.
async fn spawn_peer(temp_dir: &TempDir, author: &str) -> String {
    let repo = temp_repo(temp_dir, &format!("{}.db", author)).await;
    repo.create_quote(&NewQuote::new(author, format!("from {}", author)))
        .await
        .unwrap();
    let addr = spawn_server(api::create_router(AppState::standalone(repo)))
        .await
        .unwrap();
    format!("http://{}/quotes/", addr)
}

/// A peer whose listing always answers 500.
async fn spawn_failing_peer() -> String {
    let peer = axum::Router::new().route(
        "/quotes/",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let addr = spawn_server(peer).await.unwrap();
    format!("http://{}/quotes/", addr)
}

fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/quotes/", addr)
}

fn aggregator_app(repo: Arc<Repository>, peer_urls: Vec<String>) -> axum::Router {
    let peers: Vec<Arc<dyn QuoteSource>> = peer_urls
        .into_iter()
        .map(|url| Arc::new(HttpQuoteSource::new(url)) as Arc<dyn QuoteSource>)
        .collect();
    let aggregator = Arc::new(Aggregator::new(repo.clone(), peers));
    api::create_router(AppState::new(repo, aggregator))
}

async fn get_quotes(app: axum::Router) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .method("GET")
        .uri("/quotes/")
        .body(axum::body::Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_aggregates_local_then_peers_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let peer_a = spawn_peer(&temp_dir, "peer-a").await;
    let peer_b = spawn_peer(&temp_dir, "peer-b").await;

    let repo = temp_repo(&temp_dir, "local.db").await;
    repo.create_quote(&NewQuote::new("local", "from local"))
        .await
        .unwrap();

    let app = aggregator_app(repo, vec![peer_a, peer_b]);
    let (status, json) = get_quotes(app).await;
    assert_eq!(status, StatusCode::OK);

    let quotes = json.as_array().unwrap();
    assert_eq!(quotes.len(), 3);
    let authors: Vec<&str> = quotes
        .iter()
        .map(|q| q["author"].as_str().unwrap())
        .collect();
    assert_eq!(authors, vec!["local", "peer-a", "peer-b"]);

    // Every instance numbers its own rows, so ids repeat and are kept.
    assert!(quotes.iter().all(|q| q["id"] == 1));
}

#[tokio::test]
async fn test_empty_local_table_still_includes_peers() {
    let temp_dir = TempDir::new().unwrap();
    let peer_a = spawn_peer(&temp_dir, "peer-a").await;

    let repo = temp_repo(&temp_dir, "local.db").await;
    let app = aggregator_app(repo, vec![peer_a]);

    let (status, json) = get_quotes(app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["author"], "peer-a");
}

#[tokio::test]
async fn test_unreachable_peer_fails_whole_request() {
    let temp_dir = TempDir::new().unwrap();
    let peer_a = spawn_peer(&temp_dir, "peer-a").await;

    let repo = temp_repo(&temp_dir, "local.db").await;
    repo.create_quote(&NewQuote::new("local", "from local"))
        .await
        .unwrap();

    let app = aggregator_app(repo, vec![peer_a, closed_port_url()]);
    let (status, json) = get_quotes(app).await;

    assert!(status.is_server_error());
    assert!(!json.is_array());
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_peer_error_status_fails_request() {
    let temp_dir = TempDir::new().unwrap();
    let broken = spawn_failing_peer().await;

    let repo = temp_repo(&temp_dir, "local.db").await;
    let app = aggregator_app(repo, vec![broken]);

    let (status, _) = get_quotes(app).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_malformed_peer_body_fails_request() {
    let temp_dir = TempDir::new().unwrap();
    let peer = axum::Router::new().route("/quotes/", get(|| async { "not json" }));
    let addr = spawn_server(peer).await.unwrap();

    let repo = temp_repo(&temp_dir, "local.db").await;
    let app = aggregator_app(repo, vec![format!("http://{}/quotes/", addr)]);

    let (status, json) = get_quotes(app).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(json["error"].as_str().unwrap().contains("Parse error"));
}

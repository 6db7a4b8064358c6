use quotebook::peers::{HttpQuoteSource, QuoteSource};
use quotebook::{api, config::Config, db::init_db, Aggregator, Repository};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let pool = match init_db(&config.database_path).await {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };

    let repo = Arc::new(Repository::new(pool));

    let client = reqwest::Client::new();
    let peers: Vec<Arc<dyn QuoteSource>> = config
        .peer_urls
        .iter()
        .map(|url| {
            Arc::new(HttpQuoteSource::with_client(client.clone(), url.clone()))
                as Arc<dyn QuoteSource>
        })
        .collect();
    let aggregator = Arc::new(Aggregator::new(repo.clone(), peers));

    tracing::info!(
        "Running in {:?} mode with {} peers",
        config.mode,
        aggregator.peer_count()
    );

    let app = api::create_router(api::AppState::new(repo.clone(), aggregator));

    // Bind to address
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Server listening on {}", addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
        })
        .await;

    repo.close().await;

    if let Err(e) = served {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}

use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod common;
mod config;
mod docs;
mod infrastructure;
mod modules;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting server...");

    let config = config::settings::AppConfig::new()
        .expect("Missing required environment variables (see .env.example)");

    let storage = infrastructure::storage::s3::StorageService::new(&config).await;
    let transcribe = infrastructure::transcribe::client::TranscribeService::new(&config);
    let extractor = modules::transcription::extractor::TranscriptExtractor::new();

    let state = state::AppState::new(config, storage, transcribe, extractor);

    let addr = format!("0.0.0.0:{}", state.config.server_port);
    let app = app::create_app(state).await;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server port");
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await.expect("Server error");
}

#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid configuration");
    let state = state::AppState::new(&config).expect("http client init failed");

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, upstream = %config.api_base_url, "activities host listening");
    axum::serve(listener, app).await.expect("server failed");
}

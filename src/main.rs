mod config;
mod db;
mod error;
mod pagination;
mod routes;
mod services;
mod state;
mod store;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env().expect("invalid configuration");

    let store = store::open(&config.store)
        .await
        .expect("agent file store init failed");
    let state = state::AppState::new(store, config.page_size);

    let app = routes::app(state);
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, page_size = config.page_size, "agentfiles listening");
    axum::serve(listener, app).await.expect("server failed");
}

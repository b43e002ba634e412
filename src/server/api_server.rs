//! HTTP-сервер на axum

use crate::config::ServerConfig;
use crate::server::handlers::{index, not_found, translate, AppState};
use axum::{
    routing::{any, get},
    Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Собрать маршруты приложения
pub fn router(config: &ServerConfig) -> Router {
    let state = Arc::new(AppState {
        template_path: config.template_path.clone(),
    });

    Router::new()
        .route("/", get(index))
        .route("/translate", any(translate))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .fallback(not_found)
        .with_state(state)
}

/// Запустить сервер и обслуживать запросы до завершения процесса
pub async fn start_server(config: ServerConfig) -> std::io::Result<()> {
    let app = router(&config);
    let addr = config.bind_addr();

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("Morse translator listening on http://{}", addr);

    axum::serve(listener, app).await
}

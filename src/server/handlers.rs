//! Обработчики HTTP-запросов

use crate::service::{translate_json, TranslateError, TranslationResponse};
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Общее состояние обработчиков
#[derive(Clone, Debug)]
pub struct AppState {
    pub template_path: PathBuf,
}

/// GET / - главная страница
pub async fn index(State(state): State<Arc<AppState>>) -> Response {
    match tokio::fs::read_to_string(&state.template_path).await {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            log::error!(
                "Failed to read template {}: {}",
                state.template_path.display(),
                e
            );
            (StatusCode::INTERNAL_SERVER_ERROR, "Template not available").into_response()
        }
    }
}

/// /translate - JSON API перевода (только POST)
///
/// Любая ошибка, включая слишком большое или нечитаемое тело,
/// возвращается в JSON со статусом 200.
pub async fn translate(
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Json<TranslationResponse> {
    if method != Method::POST {
        log::debug!("Rejected {} /translate", method);
        return Json(TranslationResponse::failure(
            TranslateError::MethodNotAllowed.to_string(),
        ));
    }

    match body {
        Ok(body) => Json(translate_json(&body)),
        Err(e) => {
            log::warn!("Failed to read request body: {}", e);
            Json(TranslationResponse::failure(
                TranslateError::BadRequest(e.body_text()).to_string(),
            ))
        }
    }
}

/// Ответ для неизвестных путей
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "404 page not found")
}

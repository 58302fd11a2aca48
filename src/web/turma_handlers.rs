// src/web/turma_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::turma::{Turma, TurmaPayload},
    services::{report_service, turma_service},
    state::AppState,
    web::{
        extract::{ApiJson, ApiPath},
        mw_auth::AuthUser,
    },
};
use axum::{
    extract::{Extension, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

// GET /api/turmas
pub async fn list_turmas(State(state): State<AppState>) -> AppResult<Json<Vec<Turma>>> {
    Ok(Json(turma_service::list_turmas(&state.db_pool).await?))
}

// GET /api/turmas/{id}
pub async fn get_turma(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<Turma>> {
    Ok(Json(turma_service::get_turma(&state.db_pool, id).await?))
}

// POST /api/turmas
pub async fn create_turma(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<TurmaPayload>,
) -> AppResult<impl IntoResponse> {
    let input = payload.validate()?;
    let id = turma_service::create_turma(&state.db_pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": id, "message": "Turma cadastrada com sucesso" })),
    ))
}

// PUT /api/turmas/{id}
pub async fn update_turma(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<TurmaPayload>,
) -> AppResult<impl IntoResponse> {
    let input = payload.validate()?;
    turma_service::update_turma(&state.db_pool, id, &input).await?;
    Ok(Json(json!({ "message": "Turma atualizada com sucesso" })))
}

// DELETE /api/turmas/{id}
pub async fn delete_turma(
    State(state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<impl IntoResponse> {
    turma_service::delete_turma(&state.db_pool, id).await?;
    tracing::info!("🗑️ Turma {} excluída por {}", id, claims.user.email);
    Ok(Json(json!({ "message": "Turma excluída com sucesso" })))
}

// GET /api/turmas/{id}/pdf
pub async fn turma_pdf(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Response> {
    let report = report_service::generate_class_roster(&state.db_pool, id).await?;
    let disposition = content_disposition(&report.filename)?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        report.bytes,
    )
        .into_response())
}

/// `attachment` com nome ASCII e variante `filename*` (RFC 5987) em UTF-8.
fn content_disposition(filename: &str) -> AppResult<HeaderValue> {
    let ascii: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii() && !c.is_ascii_control() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let value = format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        ascii,
        urlencoding::encode(filename)
    );
    HeaderValue::from_str(&value).map_err(|e| {
        tracing::error!("Content-Disposition inválido para '{}': {}", filename, e);
        AppError::InternalServerError
    })
}

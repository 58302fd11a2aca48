// src/web/professor_handlers.rs
use crate::{
    error::AppResult,
    models::professor::{Professor, ProfessorPayload},
    services::professor_service,
    state::AppState,
    web::extract::{ApiJson, ApiPath},
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub async fn list_professores(State(state): State<AppState>) -> AppResult<Json<Vec<Professor>>> {
    Ok(Json(professor_service::list_professores(&state.db_pool).await?))
}

// GET /api/professores/buscar/{termo}
pub async fn search_professores(
    State(state): State<AppState>,
    ApiPath(termo): ApiPath<String>,
) -> AppResult<Json<Vec<Professor>>> {
    Ok(Json(professor_service::search_professores(&state.db_pool, &termo).await?))
}

pub async fn get_professor(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<Professor>> {
    Ok(Json(professor_service::get_professor(&state.db_pool, id).await?))
}

pub async fn create_professor(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ProfessorPayload>,
) -> AppResult<impl IntoResponse> {
    let input = payload.validate()?;
    let id = professor_service::create_professor(&state.db_pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": id, "message": "Professor cadastrado com sucesso" })),
    ))
}

pub async fn update_professor(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<ProfessorPayload>,
) -> AppResult<impl IntoResponse> {
    let input = payload.validate()?;
    professor_service::update_professor(&state.db_pool, id, &input).await?;
    Ok(Json(json!({ "message": "Professor atualizado com sucesso" })))
}

pub async fn delete_professor(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<impl IntoResponse> {
    professor_service::delete_professor(&state.db_pool, id).await?;
    Ok(Json(json!({ "message": "Professor excluído com sucesso" })))
}

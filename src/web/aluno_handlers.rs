// src/web/aluno_handlers.rs
use crate::{
    error::AppResult,
    models::aluno::{Aluno, AlunoPayload},
    services::aluno_service,
    state::AppState,
    web::extract::{ApiJson, ApiPath},
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub async fn list_alunos(State(state): State<AppState>) -> AppResult<Json<Vec<Aluno>>> {
    Ok(Json(aluno_service::list_alunos(&state.db_pool).await?))
}

// GET /api/alunos/turma/{id}
pub async fn list_alunos_by_turma(
    State(state): State<AppState>,
    ApiPath(turma_id): ApiPath<i64>,
) -> AppResult<Json<Vec<Aluno>>> {
    Ok(Json(aluno_service::list_alunos_by_turma(&state.db_pool, turma_id).await?))
}

// GET /api/alunos/buscar/{termo}
pub async fn search_alunos(
    State(state): State<AppState>,
    ApiPath(termo): ApiPath<String>,
) -> AppResult<Json<Vec<Aluno>>> {
    Ok(Json(aluno_service::search_alunos(&state.db_pool, &termo).await?))
}

pub async fn get_aluno(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<Json<Aluno>> {
    Ok(Json(aluno_service::get_aluno(&state.db_pool, id).await?))
}

pub async fn create_aluno(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<AlunoPayload>,
) -> AppResult<impl IntoResponse> {
    let input = payload.validate()?;
    let id = aluno_service::create_aluno(&state.db_pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": id, "message": "Aluno cadastrado com sucesso" })),
    ))
}

pub async fn update_aluno(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<AlunoPayload>,
) -> AppResult<impl IntoResponse> {
    let input = payload.validate()?;
    aluno_service::update_aluno(&state.db_pool, id, &input).await?;
    Ok(Json(json!({ "message": "Aluno atualizado com sucesso" })))
}

pub async fn delete_aluno(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> AppResult<impl IntoResponse> {
    aluno_service::delete_aluno(&state.db_pool, id).await?;
    Ok(Json(json!({ "message": "Aluno excluído com sucesso" })))
}

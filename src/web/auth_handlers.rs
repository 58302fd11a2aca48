// src/web/auth_handlers.rs
use crate::{
    error::AppResult,
    models::user::{LoginPayload, LoginResponse, RegisterPayload},
    services::auth_service,
    state::AppState,
    web::extract::ApiJson,
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

// POST /api/registrar
pub async fn handle_register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterPayload>,
) -> AppResult<impl IntoResponse> {
    auth_service::register(&state.db_pool, state.bcrypt_cost, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Usuário criado com sucesso!" })),
    ))
}

// POST /api/login
pub async fn handle_login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginPayload>,
) -> AppResult<Json<LoginResponse>> {
    let response = auth_service::login(&state.db_pool, &state.token_keys, payload).await?;
    Ok(Json(response))
}

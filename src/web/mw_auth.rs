// src/web/mw_auth.rs
use crate::{
    error::AppError,
    models::user::Claims,
    services::auth_service::{self, TokenKeys},
};
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

/// Identidade do pedido autenticado, posta nas extensões pelo middleware.
#[derive(Clone, Debug)]
pub struct AuthUser(pub Claims);

// Middleware que exige `Authorization: Bearer <token>` válido
pub async fn require_auth(
    State(keys): State<TokenKeys>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&request).ok_or_else(|| {
        tracing::debug!("Autenticação MW: pedido sem bearer token para {}", request.uri());
        AppError::MissingToken
    })?;

    let claims = auth_service::verify_token(&keys, token)?;
    tracing::debug!("Autenticação MW: utilizador {} autenticado.", claims.user.email);

    request.extensions_mut().insert(AuthUser(claims));
    Ok(next.run(request).await)
}

fn bearer_token(request: &Request) -> Option<&str> {
    let value = request.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("Bearer") && !token.is_empty()).then_some(token)
}

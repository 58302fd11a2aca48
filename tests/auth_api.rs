// tests/auth_api.rs
mod common;

use axum::http::{header, Method, Request, StatusCode};
use chrono::Utc;
use common::{TestApp, SECRET};
use escola::{
    models::user::{Claims, PublicUser},
    services::auth_service::{self, TokenKeys},
};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn register_then_login_returns_token_for_same_identity() {
    let app = TestApp::new().await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/registrar",
            None,
            Some(json!({ "nome": "Joana", "email": "joana@escola.com", "senha": "s3gredo" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body.get("accessToken").is_none(), "registo não devolve token");

    let (status, body) = app
        .request(
            Method::POST,
            "/api/login",
            None,
            Some(json!({ "email": "joana@escola.com", "senha": "s3gredo" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "joana@escola.com");
    assert_eq!(body["user"]["nome"], "Joana");

    let token = body["accessToken"].as_str().unwrap();
    let claims = auth_service::verify_token(&app.state.token_keys, token).unwrap();
    assert_eq!(claims.user.id, body["user"]["id"].as_i64().unwrap());
    assert_eq!(claims.user.email, "joana@escola.com");
    assert_eq!(claims.user.nome, "Joana");
}

#[tokio::test]
async fn stored_password_is_a_bcrypt_hash() {
    let app = TestApp::new().await;
    app.login_as("hash@escola.com").await;

    let senha: String = sqlx::query_scalar("SELECT senha FROM usuarios WHERE email = ?1")
        .bind("hash@escola.com")
        .fetch_one(&app.state.db_pool)
        .await
        .unwrap();
    assert_ne!(senha, "senha123");
    assert!(senha.starts_with("$2"));
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let app = TestApp::new().await;
    app.login_as("dup@escola.com").await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/registrar",
            None,
            Some(json!({ "nome": "Outro", "email": "dup@escola.com", "senha": "x" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Este e-mail já está cadastrado.");
}

#[tokio::test]
async fn register_requires_all_fields() {
    let app = TestApp::new().await;
    let (status, body) = app
        .request(
            Method::POST,
            "/api/registrar",
            None,
            Some(json!({ "nome": "Sem Senha", "email": "x@escola.com" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Todos os campos são obrigatórios.");
}

#[tokio::test]
async fn wrong_password_and_unknown_email_fail_identically() {
    let app = TestApp::new().await;
    app.login_as("real@escola.com").await;

    let wrong_password = app
        .request(
            Method::POST,
            "/api/login",
            None,
            Some(json!({ "email": "real@escola.com", "senha": "errada" })),
        )
        .await;
    let unknown_email = app
        .request(
            Method::POST,
            "/api/login",
            None,
            Some(json!({ "email": "ninguem@escola.com", "senha": "senha123" })),
        )
        .await;

    assert_eq!(wrong_password.0, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password, unknown_email);
}

#[tokio::test]
async fn protected_route_without_token_is_unauthorized() {
    let app = TestApp::new().await;
    let (status, _) = app.request(Method::GET, "/api/turmas", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn non_bearer_authorization_counts_as_missing() {
    let app = TestApp::new().await;
    for value in ["Basic dXNlcjpwYXNz", "Token xyz", "Bearer"] {
        let request = Request::builder()
            .uri("/api/alunos")
            .header(header::AUTHORIZATION, value)
            .body(axum::body::Body::empty())
            .unwrap();

        let response = app.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "header: {value}");
    }
}

#[tokio::test]
async fn tampered_token_is_forbidden() {
    let app = TestApp::new().await;
    let token = app.login_as("tamper@escola.com").await;

    // Troca o primeiro caractere da assinatura
    let sig_start = token.rfind('.').unwrap() + 1;
    let first = token.as_bytes()[sig_start];
    let mut tampered = token.clone();
    tampered.replace_range(sig_start..=sig_start, if first == b'A' { "B" } else { "A" });

    let (status, _) = app.get("/api/professores", &tampered).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.get("/api/professores", "nem-sequer-um-jwt").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn expired_token_is_forbidden() {
    let app = TestApp::new().await;
    let now = Utc::now().timestamp();
    let claims = Claims {
        user: PublicUser {
            id: 1,
            email: "velho@escola.com".into(),
            nome: "Velho".into(),
        },
        iat: now - 9 * 3600,
        exp: now - 3600,
    };
    let token = auth_service::encode_claims(&TokenKeys::from_secret(SECRET.as_bytes()), &claims).unwrap();

    let (status, _) = app.get("/api/turmas", &token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn valid_token_reaches_handler() {
    let app = TestApp::new().await;
    let token = app.login_as("ok@escola.com").await;

    let (status, body) = app.get("/api/turmas", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

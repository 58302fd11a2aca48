// tests/common/mod.rs
#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use escola::{db, state::AppState, web::routes::create_router};
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

pub const SECRET: &str = "segredo-de-teste-com-tamanho-suficiente";

/// Estado com base em memória. Uma única ligação que nunca expira,
/// senão a base desaparece entre pedidos.
pub async fn test_state() -> AppState {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Falha ao abrir SQLite em memória");
    db::run_migrations(&pool).await.expect("Falha nas migrações");
    AppState::new(pool, SECRET, 4)
}

pub struct TestApp {
    pub state: AppState,
    pub router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let state = test_state().await;
        let router = create_router(state.clone(), None);
        Self { state, router }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let (status, _, bytes) = self.raw(method, uri, token, body).await;
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn raw(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, bytes.to_vec())
    }

    pub async fn get(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, Some(token), None).await
    }

    pub async fn post(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(token), Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(token), Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, Some(token), None).await
    }

    /// Regista e faz login, devolvendo o bearer token.
    pub async fn login_as(&self, email: &str) -> String {
        let (status, _) = self
            .request(
                Method::POST,
                "/api/registrar",
                None,
                Some(json!({ "nome": "Secretaria", "email": email, "senha": "senha123" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = self
            .request(
                Method::POST,
                "/api/login",
                None,
                Some(json!({ "email": email, "senha": "senha123" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        body["accessToken"].as_str().unwrap().to_string()
    }

    /// Cria uma turma e devolve o id.
    pub async fn create_turma(&self, token: &str, nome: &str, serie: &str) -> i64 {
        let (status, body) = self
            .post(
                "/api/turmas",
                token,
                json!({ "nome": nome, "serie": serie, "ano": 2024, "professor": null }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_i64().unwrap()
    }

    pub async fn create_aluno(&self, token: &str, nome: &str, cpf: &str, turma_id: Option<i64>) -> i64 {
        let (status, body) = self.post("/api/alunos", token, aluno_json(nome, cpf, turma_id)).await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_i64().unwrap()
    }
}

pub fn professor_json(nome: &str, cpf: &str, email: &str) -> Value {
    json!({
        "nome_completo": nome,
        "data_nascimento": "1980-04-12",
        "genero": "Feminino",
        "cpf": cpf,
        "rg": "12.345.678-9",
        "endereco_rua": "Rua das Flores",
        "endereco_numero": "100",
        "endereco_bairro": "Centro",
        "endereco_cidade": "Recife",
        "endereco_estado": "PE",
        "endereco_cep": "50000-000",
        "email_institucional": email,
        "telefone": "(81) 99999-0000",
        "disciplinas": "Matemática, Física",
        "formacao_academica": "Licenciatura em Matemática",
        "data_admissao": "2015-02-01"
    })
}

pub fn aluno_json(nome: &str, cpf: &str, turma_id: Option<i64>) -> Value {
    json!({
        "nome_completo": nome,
        "data_nascimento": "2012-08-20",
        "genero": "Masculino",
        "cpf": cpf,
        "rg": "",
        "endereco_rua": "Av. Boa Viagem",
        "endereco_numero": "42",
        "endereco_bairro": "Boa Viagem",
        "endereco_cidade": "Recife",
        "endereco_estado": "PE",
        "endereco_cep": "51000-000",
        "nome_responsavel": "Maria Responsável",
        "telefone_responsavel": "(81) 98888-1111",
        "email_responsavel": "maria@familia.com",
        "turma_id": turma_id,
        "ano_ingresso": "2024"
    })
}

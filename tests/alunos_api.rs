// tests/alunos_api.rs
mod common;

use axum::http::StatusCode;
use common::{aluno_json, TestApp};
use serde_json::json;

#[tokio::test]
async fn reads_embed_class_name_and_series() {
    let app = TestApp::new().await;
    let token = app.login_as("sec@escola.com").await;
    let turma_id = app.create_turma(&token, "4º A", "4º Ano").await;
    let id = app.create_aluno(&token, "Tiago", "100", Some(turma_id)).await;

    let (status, aluno) = app.get(&format!("/api/alunos/{id}"), &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(aluno["turma_id"], turma_id);
    assert_eq!(aluno["turma_nome"], "4º A");
    assert_eq!(aluno["turma_serie"], "4º Ano");
    assert_eq!(aluno["ano_ingresso"], 2024);
    assert_eq!(aluno["status"], "Ativo");
    assert!(aluno["rg"].is_null(), "rg vazio fica NULL");

    // Nome da turma é resolvido na leitura, acompanha a renomeação
    app.put(
        &format!("/api/turmas/{turma_id}"),
        &token,
        json!({ "nome": "4º A (tarde)", "serie": "4º Ano", "ano": 2024 }),
    )
    .await;
    let (_, aluno) = app.get(&format!("/api/alunos/{id}"), &token).await;
    assert_eq!(aluno["turma_nome"], "4º A (tarde)");
}

#[tokio::test]
async fn student_without_class_is_allowed() {
    let app = TestApp::new().await;
    let token = app.login_as("sec@escola.com").await;
    let id = app.create_aluno(&token, "Sem Turma", "200", None).await;

    let (_, aluno) = app.get(&format!("/api/alunos/{id}"), &token).await;
    assert!(aluno["turma_id"].is_null());
    assert!(aluno["turma_nome"].is_null());
}

#[tokio::test]
async fn nonexistent_class_reference_is_rejected() {
    let app = TestApp::new().await;
    let token = app.login_as("sec@escola.com").await;

    let (status, body) = app.post("/api/alunos", &token, aluno_json("Fantasma", "300", Some(404))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("turma_id"));

    let (_, lista) = app.get("/api/alunos", &token).await;
    assert_eq!(lista, json!([]));
}

#[tokio::test]
async fn non_numeric_turma_id_is_a_validation_error() {
    let app = TestApp::new().await;
    let token = app.login_as("sec@escola.com").await;
    let mut body = aluno_json("Erro", "301", None);
    body["turma_id"] = json!("sétima");

    let (status, body) = app.post("/api/alunos", &token, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("turma_id"));
}

#[tokio::test]
async fn duplicate_cpf_is_rejected() {
    let app = TestApp::new().await;
    let token = app.login_as("sec@escola.com").await;
    app.create_aluno(&token, "Primeiro", "400", None).await;

    let (status, body) = app.post("/api/alunos", &token, aluno_json("Segundo", "400", None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "CPF já cadastrado.");
}

#[tokio::test]
async fn list_by_class_and_search_are_ordered_by_name() {
    let app = TestApp::new().await;
    let token = app.login_as("sec@escola.com").await;
    let a = app.create_turma(&token, "2º A", "2º Ano").await;
    let b = app.create_turma(&token, "2º B", "2º Ano").await;
    app.create_aluno(&token, "Vitor Lima", "1", Some(a)).await;
    app.create_aluno(&token, "Bruna Lima", "2", Some(a)).await;
    app.create_aluno(&token, "Caio Alves", "3", Some(b)).await;

    let (_, da_turma) = app.get(&format!("/api/alunos/turma/{a}"), &token).await;
    let nomes: Vec<_> = da_turma
        .as_array()
        .unwrap()
        .iter()
        .map(|x| x["nome_completo"].as_str().unwrap())
        .collect();
    assert_eq!(nomes, ["Bruna Lima", "Vitor Lima"]);

    let (_, encontrados) = app.get("/api/alunos/buscar/LIMA", &token).await;
    assert_eq!(encontrados.as_array().unwrap().len(), 2);
    assert_eq!(encontrados[0]["nome_completo"], "Bruna Lima");

    let (_, todos) = app.get("/api/alunos", &token).await;
    assert_eq!(todos.as_array().unwrap().len(), 3);
    assert_eq!(todos[1]["nome_completo"], "Caio Alves");
    assert_eq!(todos[1]["turma_nome"], "2º B");
}

#[tokio::test]
async fn update_is_full_replace_and_missing_rows_are_not_found() {
    let app = TestApp::new().await;
    let token = app.login_as("sec@escola.com").await;
    let turma = app.create_turma(&token, "3º A", "3º Ano").await;
    let id = app.create_aluno(&token, "Davi", "500", Some(turma)).await;

    let mut updated = aluno_json("Davi Nunes", "500", None);
    updated["rg"] = json!("99.888.777-6");
    updated["status"] = json!("Transferido");
    let (status, _) = app.put(&format!("/api/alunos/{id}"), &token, updated).await;
    assert_eq!(status, StatusCode::OK);

    let (_, aluno) = app.get(&format!("/api/alunos/{id}"), &token).await;
    assert_eq!(aluno["nome_completo"], "Davi Nunes");
    assert_eq!(aluno["rg"], "99.888.777-6");
    assert_eq!(aluno["status"], "Transferido");
    assert!(aluno["turma_id"].is_null());

    let (status, _) = app.put("/api/alunos/9999", &token, aluno_json("X", "9", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete("/api/alunos/9999", &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// src/web/routes.rs
use crate::{
    state::AppState,
    web::{aluno_handlers, auth_handlers, mw_auth, professor_handlers, turma_handlers},
};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use tower_http::services::ServeDir;

pub fn create_router(app_state: AppState, frontend_dir: Option<PathBuf>) -> Router {
    // --- Rotas Públicas ---
    let public_routes = Router::new()
        .route("/api/registrar", post(auth_handlers::handle_register))
        .route("/api/login", post(auth_handlers::handle_login));

    let turma_routes = Router::new()
        .route("/", get(turma_handlers::list_turmas).post(turma_handlers::create_turma))
        .route(
            "/{id}",
            get(turma_handlers::get_turma)
                .put(turma_handlers::update_turma)
                .delete(turma_handlers::delete_turma),
        )
        .route("/{id}/pdf", get(turma_handlers::turma_pdf));

    let professor_routes = Router::new()
        .route(
            "/",
            get(professor_handlers::list_professores).post(professor_handlers::create_professor),
        )
        .route("/buscar/{termo}", get(professor_handlers::search_professores))
        .route(
            "/{id}",
            get(professor_handlers::get_professor)
                .put(professor_handlers::update_professor)
                .delete(professor_handlers::delete_professor),
        );

    let aluno_routes = Router::new()
        .route("/", get(aluno_handlers::list_alunos).post(aluno_handlers::create_aluno))
        .route("/turma/{id}", get(aluno_handlers::list_alunos_by_turma))
        .route("/buscar/{termo}", get(aluno_handlers::search_alunos))
        .route(
            "/{id}",
            get(aluno_handlers::get_aluno)
                .put(aluno_handlers::update_aluno)
                .delete(aluno_handlers::delete_aluno),
        );

    // --- Rotas Autenticadas ---
    // Todas exigem bearer token válido
    let authenticated_routes = Router::new()
        .nest("/api/turmas", turma_routes)
        .nest("/api/professores", professor_routes)
        .nest("/api/alunos", aluno_routes)
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            mw_auth::require_auth,
        ));

    let router = Router::new()
        .merge(public_routes)
        .merge(authenticated_routes)
        .with_state(app_state);

    // Front-end estático (index.html, js, css) fora de /api
    match frontend_dir {
        Some(dir) => {
            tracing::info!("🗂️ Servindo front-end a partir de {}", dir.display());
            router.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true))
        }
        None => router,
    }
}

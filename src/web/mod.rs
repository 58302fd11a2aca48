// src/web/mod.rs
pub mod aluno_handlers;
pub mod auth_handlers;
pub mod extract;
pub mod mw_auth;
pub mod professor_handlers;
pub mod routes;
pub mod turma_handlers;

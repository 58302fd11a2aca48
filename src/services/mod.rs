// src/services/mod.rs
pub mod aluno_service;
pub mod auth_service;
pub mod professor_service;
pub mod report_service;
pub mod turma_service;
pub mod user_service;

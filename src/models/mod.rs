// src/models/mod.rs
pub mod aluno;
pub mod fields;
pub mod professor;
pub mod turma;
pub mod user;

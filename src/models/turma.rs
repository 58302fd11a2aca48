// src/models/turma.rs
use crate::{
    error::AppResult,
    models::fields::{FieldCheck, IntField},
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Linha da tabela `turmas`.
///
/// `professor` é uma cópia do nome do professor tirada quando a turma é
/// gravada. Não acompanha alterações posteriores ao perfil do professor.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Turma {
    pub id: i64,
    pub nome: String,
    pub serie: String,
    pub professor: Option<String>,
    pub ano: i64,
    pub data_cadastro: Option<NaiveDateTime>,
}

// Corpo de POST/PUT /api/turmas
#[derive(Debug, Default, Deserialize)]
pub struct TurmaPayload {
    pub nome: Option<String>,
    pub serie: Option<String>,
    pub ano: Option<IntField>,
    pub professor: Option<String>,
}

/// Dados já validados, prontos a gravar.
#[derive(Debug, Clone)]
pub struct TurmaInput {
    pub nome: String,
    pub serie: String,
    pub ano: i64,
    pub professor: Option<String>,
}

impl TurmaPayload {
    pub fn validate(self) -> AppResult<TurmaInput> {
        let mut check = FieldCheck::new();
        let input = TurmaInput {
            nome: check.required("nome", self.nome),
            serie: check.required("serie", self.serie),
            ano: check.required_int("ano", self.ano),
            professor: FieldCheck::optional(self.professor),
        };
        check.finish()?;
        Ok(input)
    }
}

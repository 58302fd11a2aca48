// src/models/aluno.rs
use crate::{
    error::AppResult,
    models::fields::{status_or_default, FieldCheck, IntField},
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Aluno tal como é lido: `turma_nome`/`turma_serie` vêm de um LEFT JOIN
/// feito no momento da leitura, não são guardados.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Aluno {
    pub id: i64,
    pub nome_completo: String,
    pub data_nascimento: String,
    pub genero: String,
    pub cpf: String,
    pub rg: Option<String>,
    pub endereco_rua: String,
    pub endereco_numero: String,
    pub endereco_bairro: String,
    pub endereco_cidade: String,
    pub endereco_estado: String,
    pub endereco_cep: String,
    pub nome_responsavel: String,
    pub telefone_responsavel: String,
    pub email_responsavel: String,
    pub turma_id: Option<i64>,
    pub ano_ingresso: i64,
    pub status: String,
    pub data_cadastro: Option<NaiveDateTime>,
    pub turma_nome: Option<String>,
    pub turma_serie: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AlunoPayload {
    pub nome_completo: Option<String>,
    pub data_nascimento: Option<String>,
    pub genero: Option<String>,
    pub cpf: Option<String>,
    pub rg: Option<String>,
    pub endereco_rua: Option<String>,
    pub endereco_numero: Option<String>,
    pub endereco_bairro: Option<String>,
    pub endereco_cidade: Option<String>,
    pub endereco_estado: Option<String>,
    pub endereco_cep: Option<String>,
    pub nome_responsavel: Option<String>,
    pub telefone_responsavel: Option<String>,
    pub email_responsavel: Option<String>,
    pub turma_id: Option<IntField>,
    pub ano_ingresso: Option<IntField>,
    pub status: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AlunoInput {
    pub nome_completo: String,
    pub data_nascimento: String,
    pub genero: String,
    pub cpf: String,
    pub rg: Option<String>,
    pub endereco_rua: String,
    pub endereco_numero: String,
    pub endereco_bairro: String,
    pub endereco_cidade: String,
    pub endereco_estado: String,
    pub endereco_cep: String,
    pub nome_responsavel: String,
    pub telefone_responsavel: String,
    pub email_responsavel: String,
    pub turma_id: Option<i64>,
    pub ano_ingresso: i64,
    pub status: String,
}

impl AlunoPayload {
    pub fn validate(self) -> AppResult<AlunoInput> {
        let mut check = FieldCheck::new();
        let input = AlunoInput {
            nome_completo: check.required("nome_completo", self.nome_completo),
            data_nascimento: check.required("data_nascimento", self.data_nascimento),
            genero: check.required("genero", self.genero),
            cpf: check.required("cpf", self.cpf),
            rg: FieldCheck::optional(self.rg),
            endereco_rua: check.required("endereco_rua", self.endereco_rua),
            endereco_numero: check.required("endereco_numero", self.endereco_numero),
            endereco_bairro: check.required("endereco_bairro", self.endereco_bairro),
            endereco_cidade: check.required("endereco_cidade", self.endereco_cidade),
            endereco_estado: check.required("endereco_estado", self.endereco_estado),
            endereco_cep: check.required("endereco_cep", self.endereco_cep),
            nome_responsavel: check.required("nome_responsavel", self.nome_responsavel),
            telefone_responsavel: check.required("telefone_responsavel", self.telefone_responsavel),
            email_responsavel: check.required("email_responsavel", self.email_responsavel),
            turma_id: check.optional_int("turma_id", self.turma_id),
            ano_ingresso: check.required_int("ano_ingresso", self.ano_ingresso),
            status: status_or_default(self.status),
        };
        check.finish()?;
        Ok(input)
    }
}

/// Linha mínima para o relatório da turma.
#[derive(Debug, Clone, FromRow)]
pub struct RosterEntry {
    pub nome_completo: String,
    pub cpf: String,
    pub status: String,
}

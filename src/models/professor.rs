// src/models/professor.rs
use crate::{
    error::AppResult,
    models::fields::{status_or_default, FieldCheck},
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Professor {
    pub id: i64,
    pub nome_completo: String,
    pub data_nascimento: String, // YYYY-MM-DD
    pub genero: String,
    pub cpf: String,
    pub rg: String,
    pub endereco_rua: String,
    pub endereco_numero: String,
    pub endereco_bairro: String,
    pub endereco_cidade: String,
    pub endereco_estado: String,
    pub endereco_cep: String,
    pub email_institucional: String,
    pub telefone: String,
    pub disciplinas: String,
    pub formacao_academica: String,
    pub data_admissao: String,
    pub status: String,
    pub data_cadastro: Option<NaiveDateTime>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProfessorPayload {
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
    pub email_institucional: Option<String>,
    pub telefone: Option<String>,
    pub disciplinas: Option<String>,
    pub formacao_academica: Option<String>,
    pub data_admissao: Option<String>,
    pub status: Option<String>,
}

/// Perfil completo validado. Update substitui todos os campos.
#[derive(Debug, Clone)]
pub struct ProfessorInput {
    pub nome_completo: String,
    pub data_nascimento: String,
    pub genero: String,
    pub cpf: String,
    pub rg: String,
    pub endereco_rua: String,
    pub endereco_numero: String,
    pub endereco_bairro: String,
    pub endereco_cidade: String,
    pub endereco_estado: String,
    pub endereco_cep: String,
    pub email_institucional: String,
    pub telefone: String,
    pub disciplinas: String,
    pub formacao_academica: String,
    pub data_admissao: String,
    pub status: String,
}

impl ProfessorPayload {
    pub fn validate(self) -> AppResult<ProfessorInput> {
        let mut check = FieldCheck::new();
        let input = ProfessorInput {
            nome_completo: check.required("nome_completo", self.nome_completo),
            data_nascimento: check.required("data_nascimento", self.data_nascimento),
            genero: check.required("genero", self.genero),
            cpf: check.required("cpf", self.cpf),
            rg: check.required("rg", self.rg),
            endereco_rua: check.required("endereco_rua", self.endereco_rua),
            endereco_numero: check.required("endereco_numero", self.endereco_numero),
            endereco_bairro: check.required("endereco_bairro", self.endereco_bairro),
            endereco_cidade: check.required("endereco_cidade", self.endereco_cidade),
            endereco_estado: check.required("endereco_estado", self.endereco_estado),
            endereco_cep: check.required("endereco_cep", self.endereco_cep),
            email_institucional: check.required("email_institucional", self.email_institucional),
            telefone: check.required("telefone", self.telefone),
            disciplinas: check.required("disciplinas", self.disciplinas),
            formacao_academica: check.required("formacao_academica", self.formacao_academica),
            data_admissao: check.required("data_admissao", self.data_admissao),
            status: status_or_default(self.status),
        };
        check.finish()?;
        Ok(input)
    }
}

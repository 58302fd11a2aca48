// src/models/fields.rs
use crate::error::{AppError, AppResult};
use serde::Deserialize;

/// Campo inteiro vindo do cliente. O formulário do browser envia tudo
/// como texto ("2024"), a API também aceita números JSON.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IntField {
    Int(i64),
    Text(String),
}

/// Acumula campos em falta/inválidos de um payload antes de qualquer escrita.
#[derive(Debug, Default)]
pub struct FieldCheck {
    missing: Vec<&'static str>,
    invalid: Vec<&'static str>,
}

impl FieldCheck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texto obrigatório: ausente ou só espaços conta como em falta.
    pub fn required(&mut self, name: &'static str, value: Option<String>) -> String {
        match value {
            Some(v) if !v.trim().is_empty() => v,
            _ => {
                self.missing.push(name);
                String::new()
            }
        }
    }

    /// Texto opcional: string vazia vira NULL.
    pub fn optional(value: Option<String>) -> Option<String> {
        value.filter(|v| !v.trim().is_empty())
    }

    pub fn required_int(&mut self, name: &'static str, value: Option<IntField>) -> i64 {
        match self.parse_int(name, value) {
            Some(n) => n,
            None => {
                if !self.invalid.contains(&name) {
                    self.missing.push(name);
                }
                0
            }
        }
    }

    pub fn optional_int(&mut self, name: &'static str, value: Option<IntField>) -> Option<i64> {
        self.parse_int(name, value)
    }

    fn parse_int(&mut self, name: &'static str, value: Option<IntField>) -> Option<i64> {
        match value? {
            IntField::Int(n) => Some(n),
            IntField::Text(s) if s.trim().is_empty() => None,
            IntField::Text(s) => match s.trim().parse::<i64>() {
                Ok(n) => Some(n),
                Err(_) => {
                    self.invalid.push(name);
                    None
                }
            },
        }
    }

    /// Falha com `Validation` a nomear todos os campos com problema.
    pub fn finish(self) -> AppResult<()> {
        let mut problems = Vec::new();
        if !self.missing.is_empty() {
            problems.push(format!(
                "Campos obrigatórios não preenchidos: {}",
                self.missing.join(", ")
            ));
        }
        if !self.invalid.is_empty() {
            problems.push(format!("Valores numéricos inválidos: {}", self.invalid.join(", ")));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(problems.join(". ")))
        }
    }
}

/// Status por omissão de professores e alunos.
pub const STATUS_ATIVO: &str = "Ativo";

pub fn status_or_default(value: Option<String>) -> String {
    FieldCheck::optional(value).unwrap_or_else(|| STATUS_ATIVO.to_string())
}

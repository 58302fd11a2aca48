// src/error.rs
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Erro na base de dados: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Erro de migração da base de dados: {0}")]
    SqlxMigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Erro de variável de ambiente: {0}")]
    EnvVarError(#[from] std::env::VarError),

    #[error("Erro ao processar password")]
    PasswordHashingError,

    #[error("Erro ao emitir token: {0}")]
    TokenError(#[from] jsonwebtoken::errors::Error),

    #[error("Erro ao gerar relatório: {0}")]
    ReportError(String),

    // --- Erros de domínio (mensagem segura para o cliente) ---
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    DuplicateKey(String),

    #[error("Este e-mail já está cadastrado.")]
    DuplicateEmail,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    HasDependents(String),

    // Mesma mensagem para e-mail desconhecido e senha errada
    #[error("Credenciais inválidas.")]
    InvalidCredentials,

    #[error("Token de acesso ausente.")]
    MissingToken,

    #[error("Token inválido ou expirado.")]
    InvalidOrExpiredToken,

    #[error("Erro interno inesperado")]
    InternalServerError,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::DuplicateKey(_)
            | AppError::DuplicateEmail
            | AppError::HasDependents(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidCredentials | AppError::MissingToken => StatusCode::UNAUTHORIZED,
            AppError::InvalidOrExpiredToken => StatusCode::FORBIDDEN,
            AppError::SqlxError(_)
            | AppError::SqlxMigrateError(_)
            | AppError::EnvVarError(_)
            | AppError::PasswordHashingError
            | AppError::TokenError(_)
            | AppError::ReportError(_)
            | AppError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Mensagem devolvida ao cliente. Falhas internas nunca expõem detalhes.
    fn user_message(&self) -> String {
        match self {
            AppError::SqlxError(_) | AppError::SqlxMigrateError(_) => {
                "Erro ao aceder aos dados.".to_string()
            }
            AppError::EnvVarError(_) => "Erro de configuração.".to_string(),
            AppError::PasswordHashingError => "Erro ao processar credenciais.".to_string(),
            AppError::TokenError(_) => "Erro ao emitir credenciais de acesso.".to_string(),
            AppError::ReportError(_) => "Não foi possível gerar o PDF.".to_string(),
            AppError::InternalServerError => "Ocorreu um erro inesperado.".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Erro processado: {:?}", self);
        } else {
            tracing::debug!("Pedido rejeitado ({}): {}", status.as_u16(), self);
        }

        (status, Json(json!({ "error": self.user_message() }))).into_response()
    }
}

// Corpo JSON mal formado conta como erro de validação
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(format!("Corpo do pedido inválido: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(format!("Parâmetro inválido na rota: {}", rejection.body_text()))
    }
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;

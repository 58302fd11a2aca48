// src/models/user.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Representa um utilizador lido da tabela 'usuarios'
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub senha: String, // hash bcrypt, nunca a senha em claro
}

// Corpo de POST /api/registrar
#[derive(Debug, Deserialize)]
pub struct RegisterPayload {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub senha: Option<String>,
}

// Corpo de POST /api/login
#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub senha: String,
}

/// Identidade embutida no token e devolvida ao cliente.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: i64,
    pub email: String,
    pub nome: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            nome: user.nome.clone(),
        }
    }
}

/// Claims do JWT: a identidade mais `iat`/`exp` (segundos UNIX).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(flatten)]
    pub user: PublicUser,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user: PublicUser,
}

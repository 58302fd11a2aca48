// src/state.rs
use crate::services::auth_service::TokenKeys;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    // Chaves para assinar/verificar os bearer tokens
    pub token_keys: TokenKeys,
    pub bcrypt_cost: u32,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, jwt_secret: &str, bcrypt_cost: u32) -> Self {
        Self {
            db_pool,
            token_keys: TokenKeys::from_secret(jwt_secret.as_bytes()),
            bcrypt_cost,
        }
    }
}

// Permite extrair o pool da DB diretamente
impl axum::extract::FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> SqlitePool {
        state.db_pool.clone()
    }
}

impl axum::extract::FromRef<AppState> for TokenKeys {
    fn from_ref(state: &AppState) -> TokenKeys {
        state.token_keys.clone()
    }
}

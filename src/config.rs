// src/config.rs
use crate::error::AppResult;
use std::{env, path::PathBuf};

const DEFAULT_DATABASE_URL: &str = "sqlite://escola.db";
const DEFAULT_PORT: u16 = 3000;

/// Configuração lida do ambiente (e do `.env`, se existir).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
    pub frontend_dir: Option<PathBuf>,
    pub bcrypt_cost: u32,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            tracing::info!("DATABASE_URL não definida, usando {}", DEFAULT_DATABASE_URL);
            DEFAULT_DATABASE_URL.to_string()
        });

        // Sem segredo não há como assinar tokens: falha logo no arranque
        let jwt_secret = env::var("JWT_SECRET")?;
        if jwt_secret.len() < 32 {
            tracing::warn!("⚠️ JWT_SECRET é curta, considere usar uma chave mais longa e aleatória!");
        }

        let port = parse_or("PORT", DEFAULT_PORT);
        let bcrypt_cost = parse_or("BCRYPT_COST", bcrypt::DEFAULT_COST);
        let frontend_dir = env::var("FRONTEND_DIR").ok().map(PathBuf::from);

        Ok(Self {
            database_url,
            jwt_secret,
            port,
            frontend_dir,
            bcrypt_cost,
        })
    }
}

fn parse_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Valor inválido para {}: '{}', usando {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

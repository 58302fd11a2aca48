// src/db.rs
use crate::error::{AppError, AppResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

pub async fn create_db_pool(database_url: &str) -> AppResult<SqlitePool> {
    tracing::info!("Ligando à base de dados: {}", database_url);

    // Criar se não existir; as FKs ficam ligadas (turma_id -> turmas.id)
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;
    Ok(pool)
}

/// Cria as tabelas (ficheiros SQL em ./migrations).
pub async fn run_migrations(pool: &SqlitePool) -> AppResult<()> {
    tracing::info!("Executando migrações da base de dados...");
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Migrações concluídas.");
    Ok(())
}

/// Violação de UNIQUE (códigos SQLite 2067 / 1555).
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

/// Violação de FOREIGN KEY (código SQLite 787).
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation())
}

/// Converte o erro de escrita no erro de domínio certo.
/// `unique` é a mensagem para chave duplicada da entidade em causa.
pub fn map_write_error(err: sqlx::Error, unique: &str) -> AppError {
    if is_unique_violation(&err) {
        AppError::DuplicateKey(unique.to_string())
    } else if is_foreign_key_violation(&err) {
        AppError::Validation("Turma informada (turma_id) não existe.".to_string())
    } else {
        AppError::SqlxError(err)
    }
}

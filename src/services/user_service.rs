// src/services/user_service.rs
use crate::{
    db,
    error::{AppError, AppResult},
    models::user::User,
};
use sqlx::SqlitePool;

/// Busca um utilizador pelo e-mail (chave de login).
pub async fn find_user_by_email(db_pool: &SqlitePool, email: &str) -> AppResult<Option<User>> {
    tracing::debug!("Buscando utilizador por e-mail: {}", email);
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, nome, email, senha
        FROM usuarios
        WHERE email = ?1
        "#,
    )
    .bind(email)
    .fetch_optional(db_pool)
    .await?;

    if user.is_none() {
        tracing::debug!("Utilizador '{}' não encontrado.", email);
    }
    Ok(user)
}

/// Insere um utilizador com a senha já em hash. Devolve o novo id.
pub async fn create_user(
    db_pool: &SqlitePool,
    nome: &str,
    email: &str,
    senha_hash: &str,
) -> AppResult<i64> {
    tracing::info!("Tentando criar utilizador: {}", email);

    let result = sqlx::query("INSERT INTO usuarios (nome, email, senha) VALUES (?1, ?2, ?3)")
        .bind(nome)
        .bind(email)
        .bind(senha_hash)
        .execute(db_pool)
        .await;

    match result {
        Ok(done) => {
            tracing::info!("✅ Utilizador '{}' criado com sucesso.", email);
            Ok(done.last_insert_rowid())
        }
        Err(e) if db::is_unique_violation(&e) => {
            tracing::warn!("Falha ao criar user: e-mail '{}' já existe.", email);
            Err(AppError::DuplicateEmail)
        }
        Err(e) => Err(e.into()),
    }
}

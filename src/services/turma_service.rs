// src/services/turma_service.rs
use crate::{
    db,
    error::{AppError, AppResult},
    models::turma::{Turma, TurmaInput},
};
use sqlx::SqlitePool;

const DUPLICADA: &str = "Nome da turma já existe";
const NAO_ENCONTRADA: &str = "Turma não encontrada";

pub async fn list_turmas(db_pool: &SqlitePool) -> AppResult<Vec<Turma>> {
    let turmas = sqlx::query_as::<_, Turma>(
        "SELECT id, nome, serie, professor, ano, data_cadastro FROM turmas ORDER BY serie, nome",
    )
    .fetch_all(db_pool)
    .await?;
    tracing::debug!("Encontradas {} turmas.", turmas.len());
    Ok(turmas)
}

pub async fn find_turma(db_pool: &SqlitePool, id: i64) -> AppResult<Option<Turma>> {
    let turma = sqlx::query_as::<_, Turma>(
        "SELECT id, nome, serie, professor, ano, data_cadastro FROM turmas WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(db_pool)
    .await?;
    Ok(turma)
}

pub async fn get_turma(db_pool: &SqlitePool, id: i64) -> AppResult<Turma> {
    find_turma(db_pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(NAO_ENCONTRADA.to_string()))
}

pub async fn create_turma(db_pool: &SqlitePool, input: &TurmaInput) -> AppResult<i64> {
    tracing::info!("Criando turma '{}'", input.nome);
    let done = sqlx::query("INSERT INTO turmas (nome, serie, ano, professor) VALUES (?1, ?2, ?3, ?4)")
        .bind(&input.nome)
        .bind(&input.serie)
        .bind(input.ano)
        .bind(&input.professor)
        .execute(db_pool)
        .await
        .map_err(|e| db::map_write_error(e, DUPLICADA))?;
    Ok(done.last_insert_rowid())
}

/// Substitui todos os campos da turma.
pub async fn update_turma(db_pool: &SqlitePool, id: i64, input: &TurmaInput) -> AppResult<()> {
    let rows_affected = sqlx::query(
        "UPDATE turmas SET nome = ?1, serie = ?2, ano = ?3, professor = ?4 WHERE id = ?5",
    )
    .bind(&input.nome)
    .bind(&input.serie)
    .bind(input.ano)
    .bind(&input.professor)
    .bind(id)
    .execute(db_pool)
    .await
    .map_err(|e| db::map_write_error(e, DUPLICADA))?
    .rows_affected();

    if rows_affected == 0 {
        return Err(AppError::NotFound(NAO_ENCONTRADA.to_string()));
    }
    tracing::info!("✅ Turma {} atualizada.", id);
    Ok(())
}

pub async fn count_alunos(db_pool: &SqlitePool, turma_id: i64) -> AppResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM alunos WHERE turma_id = ?1")
        .bind(turma_id)
        .fetch_one(db_pool)
        .await?;
    Ok(count)
}

/// Apaga a turma se nenhum aluno a referenciar.
/// Contagem e DELETE são instruções independentes (sem transação).
pub async fn delete_turma(db_pool: &SqlitePool, id: i64) -> AppResult<()> {
    let alunos = count_alunos(db_pool, id).await?;
    if alunos > 0 {
        tracing::warn!("Turma {} tem {} alunos, exclusão recusada.", id, alunos);
        return Err(AppError::HasDependents(
            "Não é possível excluir turma com alunos cadastrados".to_string(),
        ));
    }

    let rows_affected = sqlx::query("DELETE FROM turmas WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        return Err(AppError::NotFound(NAO_ENCONTRADA.to_string()));
    }
    tracing::info!("🗑️ Turma {} excluída.", id);
    Ok(())
}

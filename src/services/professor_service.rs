// src/services/professor_service.rs
use crate::{
    db,
    error::{AppError, AppResult},
    models::professor::{Professor, ProfessorInput},
};
use sqlx::{sqlite::SqliteArguments, query::Query, Sqlite, SqlitePool};

const DUPLICADO: &str = "CPF ou Email já cadastrado.";
const NAO_ENCONTRADO: &str = "Professor não encontrado";

const COLUNAS: &str = "id, nome_completo, data_nascimento, genero, cpf, rg, endereco_rua, \
    endereco_numero, endereco_bairro, endereco_cidade, endereco_estado, endereco_cep, \
    email_institucional, telefone, disciplinas, formacao_academica, data_admissao, status, \
    data_cadastro";

pub async fn list_professores(db_pool: &SqlitePool) -> AppResult<Vec<Professor>> {
    let sql = format!("SELECT {COLUNAS} FROM professores ORDER BY nome_completo");
    let professores = sqlx::query_as::<_, Professor>(&sql)
        .fetch_all(db_pool)
        .await?;
    Ok(professores)
}

/// Pesquisa por parte do nome (LIKE, sem distinção de maiúsculas ASCII).
pub async fn search_professores(db_pool: &SqlitePool, termo: &str) -> AppResult<Vec<Professor>> {
    tracing::debug!("Pesquisando professores por '{}'", termo);
    let sql = format!(
        "SELECT {COLUNAS} FROM professores WHERE nome_completo LIKE ?1 ORDER BY nome_completo"
    );
    let professores = sqlx::query_as::<_, Professor>(&sql)
        .bind(format!("%{termo}%"))
        .fetch_all(db_pool)
        .await?;
    Ok(professores)
}

pub async fn get_professor(db_pool: &SqlitePool, id: i64) -> AppResult<Professor> {
    let sql = format!("SELECT {COLUNAS} FROM professores WHERE id = ?1");
    sqlx::query_as::<_, Professor>(&sql)
        .bind(id)
        .fetch_optional(db_pool)
        .await?
        .ok_or_else(|| AppError::NotFound(NAO_ENCONTRADO.to_string()))
}

// Liga os 17 campos do perfil pela ordem das colunas em INSERT/UPDATE
fn bind_perfil<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    p: &'q ProfessorInput,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    query
        .bind(&p.nome_completo)
        .bind(&p.data_nascimento)
        .bind(&p.genero)
        .bind(&p.cpf)
        .bind(&p.rg)
        .bind(&p.endereco_rua)
        .bind(&p.endereco_numero)
        .bind(&p.endereco_bairro)
        .bind(&p.endereco_cidade)
        .bind(&p.endereco_estado)
        .bind(&p.endereco_cep)
        .bind(&p.email_institucional)
        .bind(&p.telefone)
        .bind(&p.disciplinas)
        .bind(&p.formacao_academica)
        .bind(&p.data_admissao)
        .bind(&p.status)
}

pub async fn create_professor(db_pool: &SqlitePool, input: &ProfessorInput) -> AppResult<i64> {
    tracing::info!("Criando professor '{}'", input.nome_completo);
    let query = sqlx::query(
        r#"
        INSERT INTO professores (
            nome_completo, data_nascimento, genero, cpf, rg, endereco_rua, endereco_numero,
            endereco_bairro, endereco_cidade, endereco_estado, endereco_cep,
            email_institucional, telefone, disciplinas, formacao_academica, data_admissao, status
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    );
    let done = bind_perfil(query, input)
        .execute(db_pool)
        .await
        .map_err(|e| db::map_write_error(e, DUPLICADO))?;
    Ok(done.last_insert_rowid())
}

pub async fn update_professor(
    db_pool: &SqlitePool,
    id: i64,
    input: &ProfessorInput,
) -> AppResult<()> {
    let query = sqlx::query(
        r#"
        UPDATE professores SET
            nome_completo = ?, data_nascimento = ?, genero = ?, cpf = ?, rg = ?,
            endereco_rua = ?, endereco_numero = ?, endereco_bairro = ?, endereco_cidade = ?,
            endereco_estado = ?, endereco_cep = ?, email_institucional = ?, telefone = ?,
            disciplinas = ?, formacao_academica = ?, data_admissao = ?, status = ?
        WHERE id = ?
        "#,
    );
    let rows_affected = bind_perfil(query, input)
        .bind(id)
        .execute(db_pool)
        .await
        .map_err(|e| db::map_write_error(e, DUPLICADO))?
        .rows_affected();

    if rows_affected == 0 {
        return Err(AppError::NotFound(NAO_ENCONTRADO.to_string()));
    }
    Ok(())
}

/// Turmas que guardaram o nome deste professor mantêm a cópia.
pub async fn delete_professor(db_pool: &SqlitePool, id: i64) -> AppResult<()> {
    let rows_affected = sqlx::query("DELETE FROM professores WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        return Err(AppError::NotFound(NAO_ENCONTRADO.to_string()));
    }
    tracing::info!("🗑️ Professor {} excluído.", id);
    Ok(())
}

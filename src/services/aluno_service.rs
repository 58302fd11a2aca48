// src/services/aluno_service.rs
use crate::{
    db,
    error::{AppError, AppResult},
    models::aluno::{Aluno, AlunoInput, RosterEntry},
};
use sqlx::{query::Query, sqlite::SqliteArguments, Sqlite, SqlitePool};

const DUPLICADO: &str = "CPF já cadastrado.";
const NAO_ENCONTRADO: &str = "Aluno não encontrado";

// Nome/série da turma resolvidos no momento da leitura
const SELECT_COM_TURMA: &str = r#"
    SELECT a.id, a.nome_completo, a.data_nascimento, a.genero, a.cpf, a.rg,
           a.endereco_rua, a.endereco_numero, a.endereco_bairro, a.endereco_cidade,
           a.endereco_estado, a.endereco_cep, a.nome_responsavel, a.telefone_responsavel,
           a.email_responsavel, a.turma_id, a.ano_ingresso, a.status, a.data_cadastro,
           t.nome AS turma_nome, t.serie AS turma_serie
    FROM alunos a
    LEFT JOIN turmas t ON a.turma_id = t.id
"#;

pub async fn list_alunos(db_pool: &SqlitePool) -> AppResult<Vec<Aluno>> {
    let sql = format!("{SELECT_COM_TURMA} ORDER BY a.nome_completo");
    let alunos = sqlx::query_as::<_, Aluno>(&sql).fetch_all(db_pool).await?;
    Ok(alunos)
}

pub async fn list_alunos_by_turma(db_pool: &SqlitePool, turma_id: i64) -> AppResult<Vec<Aluno>> {
    let sql = format!("{SELECT_COM_TURMA} WHERE a.turma_id = ?1 ORDER BY a.nome_completo");
    let alunos = sqlx::query_as::<_, Aluno>(&sql)
        .bind(turma_id)
        .fetch_all(db_pool)
        .await?;
    Ok(alunos)
}

pub async fn search_alunos(db_pool: &SqlitePool, termo: &str) -> AppResult<Vec<Aluno>> {
    tracing::debug!("Pesquisando alunos por '{}'", termo);
    let sql = format!("{SELECT_COM_TURMA} WHERE a.nome_completo LIKE ?1 ORDER BY a.nome_completo");
    let alunos = sqlx::query_as::<_, Aluno>(&sql)
        .bind(format!("%{termo}%"))
        .fetch_all(db_pool)
        .await?;
    Ok(alunos)
}

pub async fn get_aluno(db_pool: &SqlitePool, id: i64) -> AppResult<Aluno> {
    let sql = format!("{SELECT_COM_TURMA} WHERE a.id = ?1");
    sqlx::query_as::<_, Aluno>(&sql)
        .bind(id)
        .fetch_optional(db_pool)
        .await?
        .ok_or_else(|| AppError::NotFound(NAO_ENCONTRADO.to_string()))
}

/// Lista usada pelo relatório: só os campos impressos, por ordem alfabética.
pub async fn roster_for_turma(db_pool: &SqlitePool, turma_id: i64) -> AppResult<Vec<RosterEntry>> {
    let entries = sqlx::query_as::<_, RosterEntry>(
        "SELECT nome_completo, cpf, status FROM alunos WHERE turma_id = ?1 ORDER BY nome_completo",
    )
    .bind(turma_id)
    .fetch_all(db_pool)
    .await?;
    Ok(entries)
}

fn bind_perfil<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    a: &'q AlunoInput,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    query
        .bind(&a.nome_completo)
        .bind(&a.data_nascimento)
        .bind(&a.genero)
        .bind(&a.cpf)
        .bind(&a.rg)
        .bind(&a.endereco_rua)
        .bind(&a.endereco_numero)
        .bind(&a.endereco_bairro)
        .bind(&a.endereco_cidade)
        .bind(&a.endereco_estado)
        .bind(&a.endereco_cep)
        .bind(&a.nome_responsavel)
        .bind(&a.telefone_responsavel)
        .bind(&a.email_responsavel)
        .bind(a.turma_id)
        .bind(a.ano_ingresso)
        .bind(&a.status)
}

pub async fn create_aluno(db_pool: &SqlitePool, input: &AlunoInput) -> AppResult<i64> {
    tracing::info!("Criando aluno '{}'", input.nome_completo);
    let query = sqlx::query(
        r#"
        INSERT INTO alunos (
            nome_completo, data_nascimento, genero, cpf, rg, endereco_rua, endereco_numero,
            endereco_bairro, endereco_cidade, endereco_estado, endereco_cep, nome_responsavel,
            telefone_responsavel, email_responsavel, turma_id, ano_ingresso, status
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    );
    let done = bind_perfil(query, input)
        .execute(db_pool)
        .await
        .map_err(|e| db::map_write_error(e, DUPLICADO))?;
    Ok(done.last_insert_rowid())
}

pub async fn update_aluno(db_pool: &SqlitePool, id: i64, input: &AlunoInput) -> AppResult<()> {
    let query = sqlx::query(
        r#"
        UPDATE alunos SET
            nome_completo = ?, data_nascimento = ?, genero = ?, cpf = ?, rg = ?,
            endereco_rua = ?, endereco_numero = ?, endereco_bairro = ?, endereco_cidade = ?,
            endereco_estado = ?, endereco_cep = ?, nome_responsavel = ?,
            telefone_responsavel = ?, email_responsavel = ?, turma_id = ?, ano_ingresso = ?,
            status = ?
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

pub async fn delete_aluno(db_pool: &SqlitePool, id: i64) -> AppResult<()> {
    let rows_affected = sqlx::query("DELETE FROM alunos WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        return Err(AppError::NotFound(NAO_ENCONTRADO.to_string()));
    }
    tracing::info!("🗑️ Aluno {} excluído.", id);
    Ok(())
}

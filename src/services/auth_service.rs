// src/services/auth_service.rs
use crate::{
    error::{AppError, AppResult},
    models::{
        fields::FieldCheck,
        user::{Claims, LoginPayload, LoginResponse, PublicUser, RegisterPayload},
    },
    services::user_service,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sqlx::SqlitePool;

/// Validade de um token emitido no login.
pub const TOKEN_TTL_HOURS: i64 = 8;

/// Chaves HS256 derivadas do segredo configurado.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

/// Verifica se a senha fornecida corresponde ao hash guardado.
pub async fn verify_password(password: &str, stored_hash: &str) -> AppResult<bool> {
    let password = password.to_string();
    let stored_hash = stored_hash.to_string();
    tokio::task::spawn_blocking(move || {
        tracing::debug!("Verificando hash bcrypt...");
        bcrypt::verify(&password, &stored_hash)
    })
    .await
    .map_err(|e| {
        tracing::error!("Erro na task spawn_blocking (verify_password): {:?}", e);
        AppError::InternalServerError
    })?
    .map_err(|e| {
        tracing::error!("Erro bcrypt ao verificar senha: {:?}", e);
        AppError::PasswordHashingError
    })
}

/// Gera um hash bcrypt (salt aleatório por chamada) fora das threads do runtime.
pub async fn hash_password(password: &str, cost: u32) -> AppResult<String> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || {
        tracing::debug!("Gerando hash bcrypt (custo {})...", cost);
        bcrypt::hash(&password, cost)
    })
    .await
    .map_err(|e| {
        tracing::error!("Erro na task spawn_blocking (hash_password): {:?}", e);
        AppError::InternalServerError
    })?
    .map_err(|e| {
        tracing::error!("Erro bcrypt ao gerar hash: {:?}", e);
        AppError::PasswordHashingError
    })
}

/// Regista um utilizador. Não devolve token: o cliente faz login a seguir.
pub async fn register(
    db_pool: &SqlitePool,
    bcrypt_cost: u32,
    payload: RegisterPayload,
) -> AppResult<i64> {
    let mut check = FieldCheck::new();
    let nome = check.required("nome", payload.nome);
    let email = check.required("email", payload.email);
    let senha = check.required("senha", payload.senha);
    check
        .finish()
        .map_err(|_| AppError::Validation("Todos os campos são obrigatórios.".to_string()))?;

    let senha_hash = hash_password(&senha, bcrypt_cost).await?;
    user_service::create_user(db_pool, &nome, &email, &senha_hash).await
}

/// Login por e-mail/senha. E-mail desconhecido e senha errada dão o mesmo erro.
pub async fn login(
    db_pool: &SqlitePool,
    keys: &TokenKeys,
    payload: LoginPayload,
) -> AppResult<LoginResponse> {
    tracing::info!("Tentativa de login para: {}", payload.email);

    let Some(user) = user_service::find_user_by_email(db_pool, &payload.email).await? else {
        tracing::warn!("Utilizador não encontrado: {}", payload.email);
        return Err(AppError::InvalidCredentials);
    };

    if !verify_password(&payload.senha, &user.senha).await? {
        tracing::warn!("Senha incorreta para: {}", payload.email);
        return Err(AppError::InvalidCredentials);
    }

    let public = PublicUser::from(&user);
    let access_token = issue_token(keys, &public)?;
    tracing::info!("✅ Login bem-sucedido para: {}", user.email);

    Ok(LoginResponse {
        access_token,
        user: public,
    })
}

/// Assina um token HS256 com {id, email, nome} válido por 8 horas.
pub fn issue_token(keys: &TokenKeys, user: &PublicUser) -> AppResult<String> {
    let now = Utc::now();
    let claims = Claims {
        user: user.clone(),
        iat: now.timestamp(),
        exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
    };
    encode_claims(keys, &claims)
}

pub fn encode_claims(keys: &TokenKeys, claims: &Claims) -> AppResult<String> {
    Ok(jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        claims,
        &keys.encoding,
    )?)
}

/// Valida assinatura e expiração; qualquer falha é `InvalidOrExpiredToken`.
pub fn verify_token(keys: &TokenKeys, token: &str) -> AppResult<Claims> {
    let validation = Validation::new(Algorithm::HS256);
    jsonwebtoken::decode::<Claims>(token, &keys.decoding, &validation)
        .map(|data| data.claims)
        .map_err(|e| {
            tracing::debug!("Token rejeitado: {}", e);
            AppError::InvalidOrExpiredToken
        })
}

use anyhow::{Context, Result};
use chrono::Utc;
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use crate::shared::config;
use crate::shared::data::db::get_connection;

const JWT_SECRET_KEY: &str = "jwt_secret";

/// Access token for a user, lifetime taken from `[auth] access_token_hours`
pub async fn generate_access_token(user_id: &str, username: &str) -> Result<String> {
    let now = Utc::now();
    let lifetime = chrono::Duration::hours(config::auth_config().access_token_hours);

    let claims = TokenClaims {
        sub: user_id.to_string(),
        username: username.to_string(),
        exp: (now + lifetime).timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let secret = get_jwt_secret().await?;
    encode_claims(&claims, &secret)
}

/// Validate JWT token and extract claims
pub async fn validate_token(token: &str) -> Result<TokenClaims> {
    let secret = get_jwt_secret().await?;
    decode_claims(token, &secret)
}

pub fn encode_claims(claims: &TokenClaims, secret: &str) -> Result<String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode JWT token")
}

/// Checks signature and expiry
pub fn decode_claims(token: &str, secret: &str) -> Result<TokenClaims> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;

    Ok(token_data.claims)
}

/// Opaque refresh token; only its hash is stored
pub fn generate_refresh_token() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Expiry of a refresh token issued now, RFC 3339
pub fn calculate_refresh_token_expiration() -> String {
    let lifetime = chrono::Duration::days(config::auth_config().refresh_token_days);
    (Utc::now() + lifetime).to_rfc3339()
}

/// Signing secret from sys_settings, generated and stored on first use
pub async fn get_jwt_secret() -> Result<String> {
    if let Some(secret) = get_jwt_secret_from_db().await? {
        return Ok(secret);
    }

    let secret = generate_jwt_secret();
    save_jwt_secret_to_db(&secret).await?;
    tracing::info!("Generated new JWT secret");

    // Another request may have stored its own secret first
    Ok(get_jwt_secret_from_db().await?.unwrap_or(secret))
}

/// 256 random bits, base64
fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let random_bytes: [u8; 32] = rand::thread_rng().gen();
    general_purpose::STANDARD.encode(random_bytes)
}

async fn get_jwt_secret_from_db() -> Result<Option<String>> {
    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT value FROM sys_settings WHERE key = ?",
            [JWT_SECRET_KEY.into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(Some(row.try_get("", "value")?)),
        None => Ok(None),
    }
}

async fn save_jwt_secret_to_db(secret: &str) -> Result<()> {
    let conn = get_connection();
    let now = Utc::now().to_rfc3339();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT OR IGNORE INTO sys_settings (key, value, description, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?)",
        [
            JWT_SECRET_KEY.into(),
            secret.to_string().into(),
            "Auto-generated JWT secret for authentication".into(),
            now.clone().into(),
            now.into(),
        ],
    ))
    .await
    .context("Failed to store JWT secret")?;

    Ok(())
}

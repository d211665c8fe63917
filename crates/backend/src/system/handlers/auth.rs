use axum::{extract::Json, http::StatusCode};
use chrono::Utc;
use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, RegisterRequest, UserInfo,
};
use contracts::system::users::{CreateUserDto, User};
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use sha2::{Digest, Sha256};

use crate::shared::data::db::get_connection;
use crate::system::auth::extractor::CurrentUser;
use crate::system::auth::jwt;
use crate::system::users::service::{self as user_service, AuthError};

fn auth_failure(action: &str, e: AuthError) -> StatusCode {
    match e {
        AuthError::Storage(ref err) => tracing::error!("{} failed: {:#}", action, err),
        ref other => tracing::info!("{} rejected: {}", action, other),
    }
    e.status_code()
}

/// POST /api/system/auth/register
///
/// Creates the account and signs it in right away
pub async fn register(
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<LoginResponse>), StatusCode> {
    let dto = CreateUserDto {
        username: request.username,
        password: request.password,
        email: request.email,
        full_name: request.full_name,
    };

    let user_id = user_service::register(dto)
        .await
        .map_err(|e| auth_failure("Registration", e))?;

    let user = user_service::get_by_id(&user_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load registered user {}: {}", user_id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;

    let response = issue_tokens(user).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/system/auth/login
pub async fn login(Json(request): Json<LoginRequest>) -> Result<Json<LoginResponse>, StatusCode> {
    let user = user_service::verify_credentials(&request.username, &request.password)
        .await
        .map_err(|e| auth_failure("Login", e))?;

    Ok(Json(issue_tokens(user).await?))
}

/// POST /api/system/auth/refresh
pub async fn refresh(
    Json(request): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, StatusCode> {
    let user_id = validate_refresh_token(&request.refresh_token)
        .await
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    let user = user_service::get_by_id(&user_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load user {}: {}", user_id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .filter(|u| u.is_active)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let access_token = jwt::generate_access_token(&user.id, &user.username)
        .await
        .map_err(|e| {
            tracing::error!("Failed to issue access token: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(RefreshResponse { access_token }))
}

/// POST /api/system/auth/logout
pub async fn logout(Json(request): Json<RefreshRequest>) -> Result<StatusCode, StatusCode> {
    revoke_refresh_token(&request.refresh_token)
        .await
        .map_err(|e| {
            tracing::error!("Failed to revoke refresh token: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(StatusCode::OK)
}

/// GET /api/system/auth/me
pub async fn current_user(CurrentUser(claims): CurrentUser) -> Result<Json<UserInfo>, StatusCode> {
    let user = user_service::get_by_id(&claims.sub)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load user {}: {}", claims.sub, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(user.into()))
}

async fn issue_tokens(user: User) -> Result<LoginResponse, StatusCode> {
    let access_token = jwt::generate_access_token(&user.id, &user.username)
        .await
        .map_err(|e| {
            tracing::error!("Failed to issue access token: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let refresh_token = jwt::generate_refresh_token();
    store_refresh_token(&user.id, &refresh_token)
        .await
        .map_err(|e| {
            tracing::error!("Failed to store refresh token: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(LoginResponse {
        access_token,
        refresh_token,
        user: user.into(),
    })
}

async fn store_refresh_token(user_id: &str, token: &str) -> anyhow::Result<()> {
    let now = Utc::now().to_rfc3339();

    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO sys_refresh_tokens (id, user_id, token_hash, expires_at, created_at)
             VALUES (?, ?, ?, ?, ?)",
            [
                uuid::Uuid::new_v4().to_string().into(),
                user_id.to_string().into(),
                hash_token(token).into(),
                jwt::calculate_refresh_token_expiration().into(),
                now.into(),
            ],
        ))
        .await?;

    Ok(())
}

/// Owner of a live (unexpired, unrevoked) refresh token
async fn validate_refresh_token(token: &str) -> anyhow::Result<String> {
    let now = Utc::now().to_rfc3339();

    let result = get_connection()
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT user_id FROM sys_refresh_tokens
             WHERE token_hash = ? AND expires_at > ? AND revoked_at IS NULL",
            [hash_token(token).into(), now.into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(row.try_get("", "user_id")?),
        None => Err(anyhow::anyhow!("Invalid or expired refresh token")),
    }
}

async fn revoke_refresh_token(token: &str) -> anyhow::Result<()> {
    get_connection()
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "UPDATE sys_refresh_tokens SET revoked_at = ? WHERE token_hash = ? AND revoked_at IS NULL",
            [Utc::now().to_rfc3339().into(), hash_token(token).into()],
        ))
        .await?;

    Ok(())
}

fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_token_is_hex_sha256() {
        let hash = hash_token("abc");
        assert_eq!(
            hash,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_ne!(hash_token("abd"), hash);
    }
}

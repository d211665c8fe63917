use axum::http::StatusCode;
use chrono::Utc;
use contracts::system::users::{CreateUserDto, User};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use super::repository;
use crate::system::auth::password;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Username already exists")]
    UsernameTaken,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("{0}")]
    WeakPassword(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("User account is inactive")]
    InactiveAccount,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::EmptyUsername | AuthError::InvalidEmail | AuthError::WeakPassword(_) => {
                StatusCode::BAD_REQUEST
            }
            AuthError::UsernameTaken => StatusCode::CONFLICT,
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::InactiveAccount => StatusCode::FORBIDDEN,
            AuthError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Blank strings count as absent
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Create an account and return its id
pub async fn register(dto: CreateUserDto) -> Result<String, AuthError> {
    let username = dto.username.trim().to_string();
    if username.is_empty() {
        return Err(AuthError::EmptyUsername);
    }

    let email = non_blank(dto.email);
    if let Some(ref email) = email {
        if !email.contains('@') {
            return Err(AuthError::InvalidEmail);
        }
    }

    password::validate_password_strength(&dto.password)
        .map_err(|e| AuthError::WeakPassword(e.to_string()))?;

    if repository::get_by_username(&username).await?.is_some() {
        return Err(AuthError::UsernameTaken);
    }

    let password_hash = password::hash_password(&dto.password)?;

    let user_id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339();

    let user = User {
        id: user_id.clone(),
        username,
        email,
        full_name: non_blank(dto.full_name),
        is_active: true,
        created_at: now.clone(),
        updated_at: now,
        last_login_at: None,
    };

    // A concurrent registration may take the name between the check and the insert
    repository::create_with_password(&user, &password_hash)
        .await
        .map_err(insert_error)?;
    tracing::info!("Registered user {} ({})", user.username, user_id);

    Ok(user_id)
}

/// Insert failure of a new user; the UNIQUE index on username means the name was taken
pub fn insert_error(e: anyhow::Error) -> AuthError {
    let unique_violation = e
        .downcast_ref::<DbErr>()
        .map(|db| {
            matches!(db.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
                || db.to_string().contains("UNIQUE constraint failed: sys_users.username")
        })
        .unwrap_or(false);

    if unique_violation {
        AuthError::UsernameTaken
    } else {
        AuthError::Storage(e)
    }
}

pub async fn get_by_id(id: &str) -> anyhow::Result<Option<User>> {
    repository::get_by_id(id).await
}

/// Check a login attempt; unknown user and wrong password are indistinguishable
pub async fn verify_credentials(username: &str, password: &str) -> Result<User, AuthError> {
    let user = repository::get_by_username(username.trim())
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    if !user.is_active {
        return Err(AuthError::InactiveAccount);
    }

    let password_hash = repository::get_password_hash(&user.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Password hash not found for {}", user.id))?;

    if !password::verify_password(password, &password_hash)? {
        return Err(AuthError::InvalidCredentials);
    }

    if let Err(e) = repository::update_last_login(&user.id).await {
        tracing::warn!("Failed to record login of {}: {}", user.id, e);
    }

    Ok(user)
}

use axum::{http::StatusCode, Json};
use contracts::domain::a002_shop_profile::aggregate::{ShopProfile, ShopProfileDto};

use crate::domain::a002_shop_profile;
use crate::system::auth::extractor::CurrentUser;

/// GET /api/profile
pub async fn get(user: CurrentUser) -> Result<Json<ShopProfile>, StatusCode> {
    match a002_shop_profile::service::get(user.owner_id()).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to load profile of {}: {}", user.owner_id(), e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// PUT /api/profile
pub async fn save(
    user: CurrentUser,
    Json(dto): Json<ShopProfileDto>,
) -> Result<Json<ShopProfile>, (StatusCode, String)> {
    match a002_shop_profile::service::save(user.owner_id(), dto).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            let status = e.status_code();
            if status.is_server_error() {
                tracing::error!("Failed to save profile of {}: {:#}", user.owner_id(), e);
            }
            Err((status, e.to_string()))
        }
    }
}

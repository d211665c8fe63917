use super::repository;
use contracts::domain::a002_shop_profile::aggregate::{ShopProfile, ShopProfileDto};

use crate::shared::error::ServiceError;

/// Stored profile, or an empty one when the user never saved it
pub async fn get(user_id: &str) -> anyhow::Result<ShopProfile> {
    Ok(repository::get(user_id)
        .await?
        .unwrap_or_else(|| ShopProfile::empty(user_id)))
}

pub async fn save(user_id: &str, dto: ShopProfileDto) -> Result<ShopProfile, ServiceError> {
    let mut profile = get(user_id).await?;
    profile.update(&dto);
    profile.validate().map_err(ServiceError::Validation)?;
    profile.before_write();

    repository::upsert(&profile).await?;
    tracing::info!("Profile of {} saved", user_id);
    Ok(profile)
}

use chrono::{DateTime, Utc};
use contracts::domain::a002_shop_profile::aggregate::ShopProfile;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::{EntityTrait, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_shop_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub bio: String,
    pub shop_name: String,
    pub updated_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ShopProfile {
    fn from(m: Model) -> Self {
        ShopProfile {
            user_id: m.user_id,
            full_name: m.full_name,
            phone: m.phone,
            address: m.address,
            bio: m.bio,
            shop_name: m.shop_name,
            updated_at: m
                .updated_at
                .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
                .map(|d| d.with_timezone(&Utc)),
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn get(user_id: &str) -> anyhow::Result<Option<ShopProfile>> {
    let result = Entity::find_by_id(user_id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

/// Insert or overwrite the profile of `profile.user_id`
pub async fn upsert(profile: &ShopProfile) -> anyhow::Result<()> {
    let active = ActiveModel {
        user_id: Set(profile.user_id.clone()),
        full_name: Set(profile.full_name.clone()),
        phone: Set(profile.phone.clone()),
        address: Set(profile.address.clone()),
        bio: Set(profile.bio.clone()),
        shop_name: Set(profile.shop_name.clone()),
        updated_at: Set(profile.updated_at.map(|d| d.to_rfc3339())),
    };
    Entity::insert(active)
        .on_conflict(
            OnConflict::column(Column::UserId)
                .update_columns([
                    Column::FullName,
                    Column::Phone,
                    Column::Address,
                    Column::Bio,
                    Column::ShopName,
                    Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec(conn())
        .await?;
    Ok(())
}

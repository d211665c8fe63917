use chrono::{DateTime, NaiveDate, Utc};
use contracts::domain::a001_sale_record::aggregate::{SaleRecord, SaleRecordId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_sale_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub owner_id: String,
    pub sale_date: String, // stored as YYYY-MM-DD
    pub product_name: String,
    pub product_id: String,
    pub price: f64,
    pub stock_sold: i64,
    pub profit_margin: f64,
    pub stock_balance: i64,
    pub created_at: String, // RFC 3339
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Rows are checked on the way out: a row that does not form a valid record is an error,
/// not something to patch up with defaults.
impl TryFrom<Model> for SaleRecord {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&m.id)
            .map_err(|e| anyhow::anyhow!("Sale record {}: invalid id: {}", m.id, e))?;
        let sale_date = NaiveDate::parse_from_str(&m.sale_date, "%Y-%m-%d")
            .map_err(|e| anyhow::anyhow!("Sale record {}: invalid sale_date: {}", m.id, e))?;
        let timestamp = DateTime::parse_from_rfc3339(&m.created_at)
            .map_err(|e| anyhow::anyhow!("Sale record {}: invalid created_at: {}", m.id, e))?
            .with_timezone(&Utc);
        let stock_sold = u32::try_from(m.stock_sold)
            .map_err(|_| anyhow::anyhow!("Sale record {}: invalid stock_sold", m.id))?;
        let stock_balance = u32::try_from(m.stock_balance)
            .map_err(|_| anyhow::anyhow!("Sale record {}: invalid stock_balance", m.id))?;

        let record = SaleRecord {
            id: SaleRecordId(id),
            sale_date,
            product_name: m.product_name,
            product_id: m.product_id,
            price: m.price,
            stock_sold,
            profit_margin: m.profit_margin,
            stock_balance,
            timestamp,
            owner_id: m.owner_id,
        };
        record
            .validate()
            .map_err(|e| anyhow::anyhow!("Sale record {}: {}", m.id, e))?;
        Ok(record)
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Rows that do not form a valid record are skipped with a warning
fn into_records(models: Vec<Model>) -> Vec<SaleRecord> {
    models
        .into_iter()
        .filter_map(|m| match SaleRecord::try_from(m) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Skipping stored sale: {:#}", e);
                None
            }
        })
        .collect()
}

/// All records of `owner_id`, newest sale date first
pub async fn list_by_owner(owner_id: &str) -> anyhow::Result<Vec<SaleRecord>> {
    let models = Entity::find()
        .filter(Column::OwnerId.eq(owner_id))
        .order_by_desc(Column::SaleDate)
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?;
    Ok(into_records(models))
}

pub async fn get_for_owner(id: Uuid, owner_id: &str) -> anyhow::Result<Option<SaleRecord>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::OwnerId.eq(owner_id))
        .one(conn())
        .await?;
    Ok(into_records(result.into_iter().collect()).pop())
}

pub async fn insert(record: &SaleRecord) -> anyhow::Result<Uuid> {
    let uuid = record.id.value();
    let active = ActiveModel {
        id: Set(record.to_string_id()),
        owner_id: Set(record.owner_id.clone()),
        sale_date: Set(record.sale_date.format("%Y-%m-%d").to_string()),
        product_name: Set(record.product_name.clone()),
        product_id: Set(record.product_id.clone()),
        price: Set(record.price),
        stock_sold: Set(i64::from(record.stock_sold)),
        profit_margin: Set(record.profit_margin),
        stock_balance: Set(i64::from(record.stock_balance)),
        created_at: Set(record.timestamp.to_rfc3339()),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

/// Hard delete, limited to the owner's own records
pub async fn delete_for_owner(id: Uuid, owner_id: &str) -> anyhow::Result<bool> {
    let result = Entity::delete_many()
        .filter(Column::Id.eq(id.to_string()))
        .filter(Column::OwnerId.eq(owner_id))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

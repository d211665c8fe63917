use super::repository;
use contracts::domain::a001_sale_record::aggregate::{SaleRecord, SaleRecordDto};
use uuid::Uuid;

use crate::shared::error::ServiceError;

/// Record a sale for `owner_id`; id and timestamp are assigned here
pub async fn create(dto: SaleRecordDto, owner_id: &str) -> Result<Uuid, ServiceError> {
    let record = SaleRecord::new_for_insert(&dto, owner_id).map_err(ServiceError::Validation)?;
    let id = repository::insert(&record).await?;
    tracing::info!(
        "Sale {} recorded for {}: {} x{}",
        id,
        owner_id,
        record.product_name,
        record.stock_sold
    );
    Ok(id)
}

pub async fn delete(id: Uuid, owner_id: &str) -> anyhow::Result<bool> {
    repository::delete_for_owner(id, owner_id).await
}

pub async fn get_by_id(id: Uuid, owner_id: &str) -> anyhow::Result<Option<SaleRecord>> {
    repository::get_for_owner(id, owner_id).await
}

/// Owner's records, newest first, optionally only those of one product name
pub async fn list(owner_id: &str, product: Option<&str>) -> anyhow::Result<Vec<SaleRecord>> {
    let records = repository::list_by_owner(owner_id).await?;
    Ok(match product.map(str::trim).filter(|p| !p.is_empty()) {
        Some(product) => filter_by_product(records, product),
        None => records,
    })
}

/// Case-insensitive exact match on product name
pub fn filter_by_product(records: Vec<SaleRecord>, product: &str) -> Vec<SaleRecord> {
    let wanted = product.to_lowercase();
    records
        .into_iter()
        .filter(|r| r.product_name.to_lowercase() == wanted)
        .collect()
}

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use contracts::domain::a001_sale_record::aggregate::{
    SaleRecord, SaleRecordDto, SaleRecordListQuery,
};
use serde_json::json;

use crate::domain::a001_sale_record;
use crate::system::auth::extractor::CurrentUser;

fn parse_id(id: &str) -> Result<uuid::Uuid, StatusCode> {
    uuid::Uuid::parse_str(id).map_err(|_| StatusCode::BAD_REQUEST)
}

/// GET /api/sales?product=
pub async fn list(
    user: CurrentUser,
    Query(query): Query<SaleRecordListQuery>,
) -> Result<Json<Vec<SaleRecord>>, StatusCode> {
    match a001_sale_record::service::list(user.owner_id(), query.product.as_deref()).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list sales of {}: {}", user.owner_id(), e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/sales/:id
pub async fn get_by_id(
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<SaleRecord>, StatusCode> {
    let uuid = parse_id(&id)?;
    match a001_sale_record::service::get_by_id(uuid, user.owner_id()).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load sale {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/sales
pub async fn create(
    user: CurrentUser,
    Json(dto): Json<SaleRecordDto>,
) -> Result<(StatusCode, Json<serde_json::Value>), (StatusCode, String)> {
    match a001_sale_record::service::create(dto, user.owner_id()).await {
        Ok(id) => Ok((StatusCode::CREATED, Json(json!({ "id": id.to_string() })))),
        Err(e) => {
            let status = e.status_code();
            if status.is_server_error() {
                tracing::error!("Failed to record sale: {:#}", e);
            }
            Err((status, e.to_string()))
        }
    }
}

/// DELETE /api/sales/:id
pub async fn delete(user: CurrentUser, Path(id): Path<String>) -> Result<(), StatusCode> {
    let uuid = parse_id(&id)?;
    match a001_sale_record::service::delete(uuid, user.owner_id()).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to delete sale {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

use axum::{extract::Query, http::StatusCode, response::Response, Json};
use contracts::dashboards::d400_sales_analytics::{SalesAnalyticsRequest, SalesAnalyticsResponse};

use super::csv_attachment;
use crate::dashboards::d400_sales_analytics::service;
use crate::system::auth::extractor::CurrentUser;

/// GET /api/d400/sales_analytics?start_date=yyyy-MM-dd&end_date=yyyy-MM-dd
pub async fn get_sales_analytics(
    user: CurrentUser,
    Query(request): Query<SalesAnalyticsRequest>,
) -> Result<Json<SalesAnalyticsResponse>, StatusCode> {
    match service::get_sales_analytics(user.owner_id(), request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!("Failed to build sales analytics: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/d400/sales_analytics/export
pub async fn export_sales_report(
    user: CurrentUser,
    Query(request): Query<SalesAnalyticsRequest>,
) -> Result<Response, StatusCode> {
    match service::export_sales_report(user.owner_id(), request).await {
        Ok(report) => Ok(csv_attachment(report)),
        Err(e) => {
            tracing::error!("Failed to export sales report: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

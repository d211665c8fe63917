use axum::{extract::Query, http::StatusCode, response::Response, Json};
use contracts::dashboards::d401_sales_forecast::{SalesForecastRequest, SalesForecastResponse};

use super::csv_attachment;
use crate::dashboards::d401_sales_forecast::service::{self, SalesForecastError};
use crate::shared::analytics::ForecastError;
use crate::system::auth::extractor::CurrentUser;

fn forecast_failure(e: SalesForecastError) -> (StatusCode, String) {
    match e {
        SalesForecastError::Forecast(ForecastError::InvalidMonth(_)) => {
            (StatusCode::BAD_REQUEST, e.to_string())
        }
        SalesForecastError::Forecast(ForecastError::InsufficientData { .. }) => {
            (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
        }
        SalesForecastError::Storage(err) => {
            tracing::error!("Failed to build sales forecast: {:#}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to build sales forecast".to_string(),
            )
        }
    }
}

/// GET /api/d401/sales_forecast?year=2025&month=12
pub async fn get_sales_forecast(
    user: CurrentUser,
    Query(request): Query<SalesForecastRequest>,
) -> Result<Json<SalesForecastResponse>, (StatusCode, String)> {
    service::get_sales_forecast(user.owner_id(), request)
        .await
        .map(Json)
        .map_err(forecast_failure)
}

/// GET /api/d401/sales_forecast/export
pub async fn export_forecast_report(
    user: CurrentUser,
    Query(request): Query<SalesForecastRequest>,
) -> Result<Response, (StatusCode, String)> {
    service::export_forecast_report(user.owner_id(), request)
        .await
        .map(csv_attachment)
        .map_err(forecast_failure)
}

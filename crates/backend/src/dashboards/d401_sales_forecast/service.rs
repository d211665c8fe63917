use contracts::dashboards::d401_sales_forecast::{SalesForecastRequest, SalesForecastResponse};
use thiserror::Error;

use crate::domain::a001_sale_record::repository;
use crate::shared::analytics::{self, ForecastError};
use crate::shared::export::{self, CsvReport};

#[derive(Debug, Error)]
pub enum SalesForecastError {
    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub async fn get_sales_forecast(
    owner_id: &str,
    request: SalesForecastRequest,
) -> Result<SalesForecastResponse, SalesForecastError> {
    let records = repository::list_by_owner(owner_id).await?;
    let entries = analytics::generate_forecast(&records, &request)?;

    Ok(SalesForecastResponse {
        period: request.period(),
        entries,
    })
}

pub async fn export_forecast_report(
    owner_id: &str,
    request: SalesForecastRequest,
) -> Result<CsvReport, SalesForecastError> {
    let forecast = get_sales_forecast(owner_id, request).await?;
    Ok(export::forecast_report(&forecast.entries)?)
}

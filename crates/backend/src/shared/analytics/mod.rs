//! Reporting core: pure transforms over an already-fetched, owner-scoped
//! snapshot of sale records. Nothing here performs I/O or logs.

pub mod charts;
pub mod date_filter;
pub mod forecast;
pub mod metrics;

pub use charts::{distribution, product_sales, profit_trend};
pub use date_filter::filter_by_date_range;
pub use forecast::{generate_forecast, ForecastError, FORECAST_CONFIDENCE};
pub use metrics::summarize;

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{NaiveDate, TimeZone, Utc};
    use contracts::domain::a001_sale_record::aggregate::{SaleRecord, SaleRecordId};
    use uuid::Uuid;

    /// Record with the fields the analytics care about; the rest is filler
    pub fn sale(date: &str, product: &str, price: f64, sold: u32) -> SaleRecord {
        SaleRecord {
            id: SaleRecordId(Uuid::new_v4()),
            sale_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            product_name: product.to_string(),
            product_id: format!("ID-{}", product),
            price,
            stock_sold: sold,
            profit_margin: 0.0,
            stock_balance: 0,
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            owner_id: "owner-1".to_string(),
        }
    }

    pub fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }
}

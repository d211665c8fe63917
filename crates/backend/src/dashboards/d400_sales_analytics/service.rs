use anyhow::Result;
use chrono::{Datelike, NaiveDate, Utc};
use contracts::dashboards::d400_sales_analytics::{
    DateRange, SalesAnalyticsRequest, SalesAnalyticsResponse,
};
use contracts::domain::a001_sale_record::aggregate::SaleRecord;

use crate::domain::a001_sale_record::repository;
use crate::shared::analytics;
use crate::shared::export::{self, CsvReport};

/// Fill in missing bounds: first day of `today`'s month .. `today`
pub fn resolve_range(request: &SalesAnalyticsRequest, today: NaiveDate) -> DateRange {
    let month_start = today.with_day(1).unwrap_or(today);
    DateRange::new(
        request.start_date.unwrap_or(month_start),
        request.end_date.unwrap_or(today),
    )
}

/// Everything the analytics page shows, computed from one snapshot
pub fn build_response(records: &[SaleRecord], range: DateRange) -> SalesAnalyticsResponse {
    let filtered = analytics::filter_by_date_range(records, &range);

    SalesAnalyticsResponse {
        date_range: range,
        record_count: filtered.len(),
        metrics: analytics::summarize(&filtered),
        product_sales: analytics::product_sales(&filtered),
        profit_trend: analytics::profit_trend(&filtered),
        distribution: analytics::distribution(&filtered),
    }
}

pub async fn get_sales_analytics(
    owner_id: &str,
    request: SalesAnalyticsRequest,
) -> Result<SalesAnalyticsResponse> {
    let range = resolve_range(&request, Utc::now().date_naive());
    let records = repository::list_by_owner(owner_id).await?;
    Ok(build_response(&records, range))
}

/// CSV of the records inside the resolved range
pub async fn export_sales_report(
    owner_id: &str,
    request: SalesAnalyticsRequest,
) -> Result<CsvReport> {
    let range = resolve_range(&request, Utc::now().date_naive());
    let records = repository::list_by_owner(owner_id).await?;
    let filtered = analytics::filter_by_date_range(&records, &range);
    export::sales_report(&filtered, &range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::analytics::test_support::{date, sale};

    #[test]
    fn test_missing_dates_default_to_current_month() {
        let range = resolve_range(&SalesAnalyticsRequest::default(), date("2024-03-17"));
        assert_eq!(range.start_date, date("2024-03-01"));
        assert_eq!(range.end_date, date("2024-03-17"));
    }

    #[test]
    fn test_given_dates_are_kept() {
        let request = SalesAnalyticsRequest {
            start_date: Some(date("2023-01-01")),
            end_date: None,
        };
        let range = resolve_range(&request, date("2024-03-17"));
        assert_eq!(range.start_date, date("2023-01-01"));
        assert_eq!(range.end_date, date("2024-03-17"));
    }

    #[test]
    fn test_response_uses_only_records_in_range() {
        let records = vec![
            sale("2024-03-01", "Tea", 10.0, 2),
            sale("2024-03-05", "Coffee", 20.0, 1),
            sale("2024-04-01", "Tea", 10.0, 7),
        ];
        let range = DateRange::new(date("2024-03-01"), date("2024-03-31"));

        let response = build_response(&records, range);

        assert_eq!(response.record_count, 2);
        assert_eq!(response.metrics.total_sold_stock, 3);
        assert_eq!(response.metrics.total_revenue, 40.0);
        assert_eq!(response.product_sales.len(), 2);
        assert_eq!(response.profit_trend.len(), 2);
        assert_eq!(response.distribution[0].value, 2);
    }

    #[test]
    fn test_empty_range_gives_zeroed_metrics() {
        let records = vec![sale("2024-03-01", "Tea", 10.0, 2)];
        let range = DateRange::new(date("2025-01-01"), date("2025-01-31"));

        let response = build_response(&records, range);

        assert_eq!(response.record_count, 0);
        assert_eq!(response.metrics.total_products, 0);
        assert_eq!(response.metrics.average_profit_margin, 0.0);
        assert!(response.product_sales.is_empty());
    }
}

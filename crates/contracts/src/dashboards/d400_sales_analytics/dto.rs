use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::serde_date;

/// Query of the analytics dashboard. Missing dates are filled in by the server
/// (first day of the current month .. today).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesAnalyticsRequest {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Inclusive date window. `start_date <= end_date` is not enforced:
/// an inverted range simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(with = "serde_date")]
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    #[serde(with = "serde_date")]
    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,
}

impl DateRange {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Both ends inclusive
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Summary cards of the analytics page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricsSummary {
    /// Distinct product identifiers
    #[serde(rename = "totalProducts")]
    pub total_products: usize,
    #[serde(rename = "totalSoldStock")]
    pub total_sold_stock: u64,
    #[serde(rename = "totalBalanceStock")]
    pub total_balance_stock: u64,
    /// Mean margin in percent, 0 for an empty set
    #[serde(rename = "averageProfitMargin")]
    pub average_profit_margin: f64,
    /// Σ price × units sold
    #[serde(rename = "totalRevenue")]
    pub total_revenue: f64,
}

/// Units sold per product (bar chart)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSales {
    pub product: String,
    pub sales: u64,
}

/// Profit of one sale (line chart)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitPoint {
    /// Display date, e.g. "Mar 01, 2024"
    pub date: String,
    pub profit: f64,
}

/// Share of a product in total units sold (pie chart)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSlice {
    pub name: String,
    pub value: u64,
    /// value / Σ values, 0 when nothing was sold
    pub share: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesAnalyticsResponse {
    pub date_range: DateRange,
    pub record_count: usize,
    pub metrics: MetricsSummary,
    pub product_sales: Vec<ProductSales>,
    pub profit_trend: Vec<ProfitPoint>,
    pub distribution: Vec<DistributionSlice>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = DateRange::new(d(2024, 1, 1), d(2024, 1, 31));
        assert!(range.contains(d(2024, 1, 1)));
        assert!(range.contains(d(2024, 1, 31)));
        assert!(!range.contains(d(2024, 2, 1)));
        assert!(!range.contains(d(2023, 12, 31)));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let range = DateRange::new(d(2024, 2, 1), d(2024, 1, 1));
        assert!(!range.contains(d(2024, 1, 15)));
    }

    #[test]
    fn test_request_accepts_iso_dates() {
        let req: SalesAnalyticsRequest =
            serde_json::from_str(r#"{"start_date":"2024-01-01","end_date":"2024-01-31"}"#)
                .unwrap();
        assert_eq!(req.start_date, Some(d(2024, 1, 1)));
        assert_eq!(req.end_date, Some(d(2024, 1, 31)));
    }
}

use std::collections::HashMap;

use chrono::Datelike;
use contracts::dashboards::d401_sales_forecast::{ForecastEntry, SalesForecastRequest};
use contracts::domain::a001_sale_record::aggregate::SaleRecord;
use thiserror::Error;

/// Confidence attached to every forecast entry, percent. Not derived from the data.
pub const FORECAST_CONFIDENCE: u32 = 95;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ForecastError {
    #[error("Insufficient data for forecasting: no sales recorded in month {month} of any year")]
    InsufficientData { month: u32 },

    #[error("Invalid month: {0} (expected 1..=12)")]
    InvalidMonth(u32),
}

/// Predict units per product for the requested month.
///
/// History is every record sold in the same calendar month, whatever the year;
/// `request.year` does not narrow it. The prediction is the rounded mean of
/// units sold per sale, products listed in order of first appearance.
pub fn generate_forecast(
    records: &[SaleRecord],
    request: &SalesForecastRequest,
) -> Result<Vec<ForecastEntry>, ForecastError> {
    if !(1..=12).contains(&request.month) {
        return Err(ForecastError::InvalidMonth(request.month));
    }

    let history: Vec<&SaleRecord> = records
        .iter()
        .filter(|r| r.sale_date.month() == request.month)
        .collect();

    if history.is_empty() {
        return Err(ForecastError::InsufficientData {
            month: request.month,
        });
    }

    // (product, sum, count) in first-seen order
    let mut groups: Vec<(&str, u64, u64)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for record in history {
        let name = record.product_name.as_str();
        let i = *index.entry(name).or_insert_with(|| {
            groups.push((name, 0, 0));
            groups.len() - 1
        });
        groups[i].1 += u64::from(record.stock_sold);
        groups[i].2 += 1;
    }

    Ok(groups
        .into_iter()
        .map(|(product, sum, count)| ForecastEntry {
            product: product.to_string(),
            predicted_stock: (sum as f64 / count as f64).round() as u64,
            confidence: FORECAST_CONFIDENCE,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::analytics::test_support::sale;

    fn march_2025() -> SalesForecastRequest {
        SalesForecastRequest {
            year: 2025,
            month: 3,
        }
    }

    #[test]
    fn test_mean_of_history_is_predicted() {
        let records = vec![
            sale("2022-03-05", "A", 1.0, 10),
            sale("2023-03-10", "A", 1.0, 20),
            sale("2024-03-15", "A", 1.0, 30),
        ];
        let forecast = generate_forecast(&records, &march_2025()).unwrap();
        assert_eq!(
            forecast,
            vec![ForecastEntry {
                product: "A".into(),
                predicted_stock: 20,
                confidence: FORECAST_CONFIDENCE,
            }]
        );
        assert_eq!(forecast, generate_forecast(&records, &march_2025()).unwrap());
    }

    #[test]
    fn test_other_months_are_ignored() {
        let records = vec![
            sale("2024-02-28", "A", 1.0, 100),
            sale("2024-03-01", "A", 1.0, 4),
            sale("2024-04-01", "B", 1.0, 9),
        ];
        let forecast = generate_forecast(&records, &march_2025()).unwrap();
        assert_eq!(forecast.len(), 1);
        assert_eq!(forecast[0].predicted_stock, 4);
    }

    #[test]
    fn test_year_does_not_filter() {
        let records = vec![sale("2019-03-01", "A", 1.0, 7)];
        let request = SalesForecastRequest {
            year: 2030,
            month: 3,
        };
        assert_eq!(generate_forecast(&records, &request).unwrap()[0].predicted_stock, 7);
    }

    #[test]
    fn test_rounds_half_up_and_keeps_first_seen_order() {
        let records = vec![
            sale("2024-03-01", "B", 1.0, 1),
            sale("2024-03-02", "A", 1.0, 2),
            sale("2024-03-03", "B", 1.0, 2),
            sale("2024-03-04", "A", 1.0, 2),
        ];
        let forecast = generate_forecast(&records, &march_2025()).unwrap();
        let products: Vec<_> = forecast.iter().map(|f| f.product.as_str()).collect();
        assert_eq!(products, vec!["B", "A"]);
        assert_eq!(forecast[0].predicted_stock, 2); // 1.5 -> 2
        assert_eq!(forecast[1].predicted_stock, 2);
    }

    #[test]
    fn test_empty_history_reports_insufficient_data() {
        let records = vec![sale("2024-01-01", "A", 1.0, 5)];
        assert_eq!(
            generate_forecast(&records, &march_2025()),
            Err(ForecastError::InsufficientData { month: 3 })
        );
        assert_eq!(
            generate_forecast(&[], &march_2025()),
            Err(ForecastError::InsufficientData { month: 3 })
        );
    }

    #[test]
    fn test_invalid_month() {
        let request = SalesForecastRequest {
            year: 2025,
            month: 13,
        };
        assert_eq!(
            generate_forecast(&[], &request),
            Err(ForecastError::InvalidMonth(13))
        );
    }
}

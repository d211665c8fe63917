use std::collections::HashSet;

use contracts::dashboards::d400_sales_analytics::MetricsSummary;
use contracts::domain::a001_sale_record::aggregate::SaleRecord;

/// Summary cards over `records`. An empty slice gives all zeros.
pub fn summarize(records: &[SaleRecord]) -> MetricsSummary {
    let total_products = records
        .iter()
        .map(|r| r.product_id.as_str())
        .collect::<HashSet<_>>()
        .len();
    let total_sold_stock = records.iter().map(|r| u64::from(r.stock_sold)).sum();
    let total_balance_stock = records.iter().map(|r| u64::from(r.stock_balance)).sum();
    let margin_sum: f64 = records.iter().map(|r| r.profit_margin).sum();
    let average_profit_margin = if records.is_empty() {
        0.0
    } else {
        margin_sum / records.len() as f64
    };
    let total_revenue = records.iter().map(SaleRecord::revenue).sum();

    MetricsSummary {
        total_products,
        total_sold_stock,
        total_balance_stock,
        average_profit_margin,
        total_revenue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::analytics::test_support::sale;

    #[test]
    fn test_empty_set_is_all_zero() {
        let m = summarize(&[]);
        assert_eq!(m, MetricsSummary::default());
        assert_eq!(m.average_profit_margin, 0.0);
    }

    #[test]
    fn test_revenue_is_price_times_units() {
        let records = vec![
            sale("2024-01-01", "A", 10.0, 2),
            sale("2024-01-02", "B", 5.0, 3),
        ];
        assert_eq!(summarize(&records).total_revenue, 35.0);
    }

    #[test]
    fn test_totals_and_average() {
        let mut a = sale("2024-01-01", "A", 2.0, 3);
        a.profit_margin = 10.0;
        a.stock_balance = 7;
        let mut b = sale("2024-01-02", "A", 2.0, 1);
        b.profit_margin = 30.0;
        b.stock_balance = 6;
        let mut c = sale("2024-01-03", "B", 4.0, 5);
        c.profit_margin = 20.0;
        c.stock_balance = 1;

        let m = summarize(&[a, b, c]);
        assert_eq!(m.total_products, 2);
        assert_eq!(m.total_sold_stock, 9);
        assert_eq!(m.total_balance_stock, 14);
        assert!((m.average_profit_margin - 20.0).abs() < 1e-9);
        assert_eq!(m.total_revenue, 28.0);
    }

    #[test]
    fn test_distinct_products_by_identifier_not_name() {
        let a = sale("2024-01-01", "Tea", 1.0, 1);
        let mut b = sale("2024-01-01", "Tea", 1.0, 1);
        b.product_id = "ID-Tea-Large".into();
        assert_eq!(summarize(&[a, b]).total_products, 2);
    }

    #[test]
    fn test_order_independent() {
        let records = vec![
            sale("2024-01-01", "A", 1.5, 2),
            sale("2024-01-02", "B", 2.5, 4),
            sale("2024-01-03", "C", 3.5, 6),
        ];
        let mut reversed = records.clone();
        reversed.reverse();
        assert_eq!(summarize(&records), summarize(&reversed));
    }
}

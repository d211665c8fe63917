use std::collections::HashMap;

use contracts::dashboards::d400_sales_analytics::{DistributionSlice, ProductSales, ProfitPoint};
use contracts::domain::a001_sale_record::aggregate::SaleRecord;

use crate::shared::format::format_display_date;

/// Units sold per product name, in order of first appearance
pub fn product_sales(records: &[SaleRecord]) -> Vec<ProductSales> {
    let mut totals: Vec<ProductSales> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        match index.get(record.product_name.as_str()) {
            Some(&i) => totals[i].sales += u64::from(record.stock_sold),
            None => {
                index.insert(record.product_name.as_str(), totals.len());
                totals.push(ProductSales {
                    product: record.product_name.clone(),
                    sales: u64::from(record.stock_sold),
                });
            }
        }
    }

    totals
}

/// Profit of each sale in chronological order. Sales on the same day keep input order.
pub fn profit_trend(records: &[SaleRecord]) -> Vec<ProfitPoint> {
    let mut sorted: Vec<&SaleRecord> = records.iter().collect();
    // stable
    sorted.sort_by_key(|r| r.sale_date);

    sorted
        .into_iter()
        .map(|r| ProfitPoint {
            date: format_display_date(r.sale_date),
            profit: r.profit(),
        })
        .collect()
}

/// Per-product share of all units sold
pub fn distribution(records: &[SaleRecord]) -> Vec<DistributionSlice> {
    let totals = product_sales(records);
    let grand_total: u64 = totals.iter().map(|p| p.sales).sum();

    totals
        .into_iter()
        .map(|p| DistributionSlice {
            share: if grand_total == 0 {
                0.0
            } else {
                p.sales as f64 / grand_total as f64
            },
            name: p.product,
            value: p.sales,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::analytics::test_support::sale;

    #[test]
    fn test_product_sales_first_occurrence_order() {
        let records = vec![
            sale("2024-01-01", "A", 1.0, 3),
            sale("2024-01-02", "B", 1.0, 1),
            sale("2024-01-03", "A", 1.0, 2),
        ];
        assert_eq!(
            product_sales(&records),
            vec![
                ProductSales {
                    product: "A".into(),
                    sales: 5
                },
                ProductSales {
                    product: "B".into(),
                    sales: 1
                },
            ]
        );
    }

    #[test]
    fn test_profit_trend_is_chronological() {
        let mut march = sale("2024-03-01", "A", 10.0, 2);
        march.profit_margin = 50.0;
        let mut january = sale("2024-01-01", "B", 4.0, 5);
        january.profit_margin = 25.0;

        let trend = profit_trend(&[march, january]);
        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].date, "Jan 01, 2024");
        assert_eq!(trend[0].profit, 5.0);
        assert_eq!(trend[1].date, "Mar 01, 2024");
        assert_eq!(trend[1].profit, 10.0);
    }

    #[test]
    fn test_profit_trend_ties_keep_input_order() {
        let mut first = sale("2024-02-02", "A", 1.0, 1);
        first.profit_margin = 100.0;
        let mut second = sale("2024-02-02", "B", 3.0, 1);
        second.profit_margin = 100.0;
        let earlier = sale("2024-02-01", "C", 1.0, 0);

        let profits: Vec<f64> = profit_trend(&[first, second, earlier])
            .into_iter()
            .map(|p| p.profit)
            .collect();
        assert_eq!(profits, vec![0.0, 1.0, 3.0]);
    }

    #[test]
    fn test_distribution_shares_sum_to_one() {
        let records = vec![
            sale("2024-01-01", "A", 1.0, 3),
            sale("2024-01-02", "B", 1.0, 1),
        ];
        let slices = distribution(&records);
        assert_eq!(slices[0].name, "A");
        assert_eq!(slices[0].value, 3);
        assert!((slices[0].share - 0.75).abs() < 1e-9);
        assert!((slices[1].share - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_distribution_with_nothing_sold_has_zero_shares() {
        let records = vec![
            sale("2024-01-01", "A", 1.0, 0),
            sale("2024-01-02", "B", 1.0, 0),
        ];
        let slices = distribution(&records);
        assert_eq!(slices.len(), 2);
        assert!(slices.iter().all(|s| s.share == 0.0));
        assert!(distribution(&[]).is_empty());
    }
}

use contracts::dashboards::d400_sales_analytics::DateRange;
use contracts::domain::a001_sale_record::aggregate::SaleRecord;

/// Records whose sale date lies in `range` (both ends inclusive), in input order
pub fn filter_by_date_range(records: &[SaleRecord], range: &DateRange) -> Vec<SaleRecord> {
    records
        .iter()
        .filter(|r| range.contains(r.sale_date))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::analytics::test_support::{date, sale};

    fn january() -> DateRange {
        DateRange::new(date("2024-01-01"), date("2024-01-31"))
    }

    #[test]
    fn test_keeps_bounds_and_drops_outside() {
        let records = vec![
            sale("2023-12-31", "A", 1.0, 1),
            sale("2024-01-01", "B", 1.0, 1),
            sale("2024-01-15", "C", 1.0, 1),
            sale("2024-01-31", "D", 1.0, 1),
            sale("2024-02-01", "E", 1.0, 1),
        ];
        let names: Vec<_> = filter_by_date_range(&records, &january())
            .into_iter()
            .map(|r| r.product_name)
            .collect();
        assert_eq!(names, vec!["B", "C", "D"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_by_date_range(&[], &january()).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let records = vec![
            sale("2024-01-10", "A", 1.0, 1),
            sale("2024-03-10", "B", 1.0, 1),
            sale("2024-01-20", "C", 1.0, 1),
        ];
        let once = filter_by_date_range(&records, &january());
        let twice = filter_by_date_range(&once, &january());
        assert_eq!(once, twice);
    }
}

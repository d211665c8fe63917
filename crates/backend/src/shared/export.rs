//! CSV rendering of the sales and forecast reports
use anyhow::{Context, Result};
use contracts::dashboards::d400_sales_analytics::DateRange;
use contracts::dashboards::d401_sales_forecast::ForecastEntry;
use contracts::domain::a001_sale_record::aggregate::SaleRecord;

use super::format::{file_slug, format_display_date};

pub const FORECAST_REPORT_FILE: &str = "forecast-report.csv";

/// A rendered report ready to be sent as an attachment
#[derive(Debug, Clone)]
pub struct CsvReport {
    pub file_name: String,
    pub content: String,
}

/// "Sales Report Mar 01, 2024 - Mar 31, 2024"
pub fn sales_report_title(range: &DateRange) -> String {
    format!(
        "Sales Report {} - {}",
        format_display_date(range.start_date),
        format_display_date(range.end_date)
    )
}

pub fn sales_report(records: &[SaleRecord], range: &DateRange) -> Result<CsvReport> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "Date",
        "Product",
        "ID",
        "Price",
        "Stock Sold",
        "Profit Margin",
        "Stock Balance",
    ])?;
    for record in records {
        writer.write_record([
            format_display_date(record.sale_date),
            record.product_name.clone(),
            record.product_id.clone(),
            format!("{:.2}", record.price),
            record.stock_sold.to_string(),
            format!("{}%", record.profit_margin),
            record.stock_balance.to_string(),
        ])?;
    }

    Ok(CsvReport {
        file_name: format!("{}.csv", file_slug(&sales_report_title(range))),
        content: finish(writer)?,
    })
}

pub fn forecast_report(entries: &[ForecastEntry]) -> Result<CsvReport> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Product", "Predicted Stock", "Confidence"])?;
    for entry in entries {
        writer.write_record([
            entry.product.clone(),
            entry.predicted_stock.to_string(),
            format!("{}%", entry.confidence),
        ])?;
    }

    Ok(CsvReport {
        file_name: FORECAST_REPORT_FILE.to_string(),
        content: finish(writer)?,
    })
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e))?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

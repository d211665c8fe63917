pub mod a001_sale_record;
pub mod a002_shop_profile;
pub mod chatbot;
pub mod d400_sales_analytics;
pub mod d401_sales_forecast;

use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::shared::export::CsvReport;

/// Send a report as a downloadable file
pub(crate) fn csv_attachment(report: CsvReport) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", report.file_name),
            ),
        ],
        report.content,
    )
        .into_response()
}

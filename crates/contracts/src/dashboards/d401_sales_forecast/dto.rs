use serde::{Deserialize, Serialize};

/// Request for the forecast dashboard, e.g. `?year=2025&month=12`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesForecastRequest {
    /// Shown to the user as part of the period; history is taken from every year
    pub year: i32,
    /// 1..=12
    pub month: u32,
}

impl SalesForecastRequest {
    /// Period in format "YYYY-MM"
    pub fn period(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Predicted units for one product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub product: String,
    #[serde(rename = "predictedStock")]
    pub predicted_stock: u64,
    /// Percent, constant for every entry
    pub confidence: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesForecastResponse {
    /// Period in format "YYYY-MM"
    pub period: String,
    pub entries: Vec<ForecastEntry>,
}

use crate::domain::common::AggregateId;
use crate::shared::serde_date;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sale record identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SaleRecordId(pub Uuid);

impl SaleRecordId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for SaleRecordId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SaleRecordId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// One recorded sales transaction of a shop owner.
///
/// Records are created once and never edited; the only other lifecycle step is
/// deletion by the owner. Every instance that exists has passed [`SaleRecord::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: SaleRecordId,

    /// Calendar date of the sale (YYYY-MM-DD)
    #[serde(with = "serde_date")]
    #[serde(rename = "saleDate")]
    pub sale_date: NaiveDate,

    #[serde(rename = "productName")]
    pub product_name: String,

    #[serde(rename = "productId")]
    pub product_id: String,

    /// Unit price
    pub price: f64,

    /// Units sold in this transaction
    #[serde(rename = "stockSold")]
    pub stock_sold: u32,

    /// Profit margin, percent (0..=100)
    #[serde(rename = "profitMargin")]
    pub profit_margin: f64,

    /// Stock left after the sale
    #[serde(rename = "stockBalance")]
    pub stock_balance: u32,

    /// When the record was submitted
    pub timestamp: DateTime<Utc>,

    /// Owner (sys_users.id)
    #[serde(rename = "userId")]
    pub owner_id: String,
}

impl SaleRecord {
    /// Build a new record from a submission of `owner_id`.
    ///
    /// Negative or non-finite numbers, empty names and margins above 100 are rejected here,
    /// so nothing past this point re-checks the shape of a record.
    pub fn new_for_insert(dto: &SaleRecordDto, owner_id: &str) -> Result<Self, String> {
        let stock_sold = u32::try_from(dto.stock_sold)
            .map_err(|_| "Stock sold must be a non-negative integer".to_string())?;
        let stock_balance = u32::try_from(dto.stock_balance)
            .map_err(|_| "Stock balance must be a non-negative integer".to_string())?;

        let record = Self {
            id: SaleRecordId::new_v4(),
            sale_date: dto.sale_date,
            product_name: dto.product_name.trim().to_string(),
            product_id: dto.product_id.trim().to_string(),
            price: dto.price,
            stock_sold,
            profit_margin: dto.profit_margin,
            stock_balance,
            timestamp: Utc::now(),
            owner_id: owner_id.to_string(),
        };
        record.validate()?;
        Ok(record)
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.product_name.trim().is_empty() {
            return Err("Product name cannot be empty".into());
        }
        if self.product_id.trim().is_empty() {
            return Err("Product ID cannot be empty".into());
        }
        if self.owner_id.trim().is_empty() {
            return Err("Owner is required".into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("Price must be a non-negative number".into());
        }
        if !self.profit_margin.is_finite() || !(0.0..=100.0).contains(&self.profit_margin) {
            return Err("Profit margin must be between 0 and 100".into());
        }
        Ok(())
    }

    /// price × units sold
    pub fn revenue(&self) -> f64 {
        self.price * f64::from(self.stock_sold)
    }

    /// units sold × price × margin / 100
    pub fn profit(&self) -> f64 {
        f64::from(self.stock_sold) * self.price * (self.profit_margin / 100.0)
    }
}

// =============================================================================
// DTO
// =============================================================================

/// Sale submission as sent by the client. Integers are signed here so that
/// negative input reaches validation instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRecordDto {
    #[serde(with = "serde_date")]
    #[serde(rename = "saleDate")]
    pub sale_date: NaiveDate,
    #[serde(rename = "productName")]
    pub product_name: String,
    #[serde(rename = "productId")]
    pub product_id: String,
    pub price: f64,
    #[serde(rename = "stockSold")]
    pub stock_sold: i64,
    #[serde(rename = "profitMargin")]
    pub profit_margin: f64,
    #[serde(rename = "stockBalance")]
    pub stock_balance: i64,
}

/// Query of the sales list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaleRecordListQuery {
    /// Case-insensitive exact product name
    pub product: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> SaleRecordDto {
        SaleRecordDto {
            sale_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            product_name: " Tea ".into(),
            product_id: "T-1".into(),
            price: 12.5,
            stock_sold: 4,
            profit_margin: 20.0,
            stock_balance: 10,
        }
    }

    #[test]
    fn test_new_for_insert_trims_and_tags_owner() {
        let record = SaleRecord::new_for_insert(&dto(), "user-1").unwrap();
        assert_eq!(record.product_name, "Tea");
        assert_eq!(record.owner_id, "user-1");
        assert_eq!(record.stock_sold, 4);
        assert_eq!(record.revenue(), 50.0);
        assert_eq!(record.profit(), 10.0);
    }

    #[test]
    fn test_rejects_negative_numbers() {
        let mut d = dto();
        d.stock_sold = -1;
        assert!(SaleRecord::new_for_insert(&d, "user-1").is_err());

        let mut d = dto();
        d.stock_balance = -5;
        assert!(SaleRecord::new_for_insert(&d, "user-1").is_err());

        let mut d = dto();
        d.price = -0.01;
        assert!(SaleRecord::new_for_insert(&d, "user-1").is_err());
    }

    #[test]
    fn test_rejects_margin_out_of_range() {
        let mut d = dto();
        d.profit_margin = 100.5;
        assert!(SaleRecord::new_for_insert(&d, "user-1").is_err());

        let mut d = dto();
        d.profit_margin = f64::NAN;
        assert!(SaleRecord::new_for_insert(&d, "user-1").is_err());
    }

    #[test]
    fn test_rejects_blank_names_and_owner() {
        let mut d = dto();
        d.product_name = "   ".into();
        assert!(SaleRecord::new_for_insert(&d, "user-1").is_err());

        assert!(SaleRecord::new_for_insert(&dto(), "").is_err());
    }

    #[test]
    fn test_dto_uses_camel_case_and_iso_date() {
        let json = r#"{
            "saleDate": "2024-01-31",
            "productName": "Coffee",
            "productId": "C-9",
            "price": 3.0,
            "stockSold": 2,
            "profitMargin": 15,
            "stockBalance": 7
        }"#;
        let parsed: SaleRecordDto = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.sale_date, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        assert_eq!(parsed.profit_margin, 15.0);

        let bad = json.replace("2024-01-31", "31.01.2024");
        assert!(serde_json::from_str::<SaleRecordDto>(&bad).is_err());
    }
}

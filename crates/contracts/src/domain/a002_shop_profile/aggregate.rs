use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shop owner's profile, one per user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopProfile {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub phone: String,
    pub address: String,
    pub bio: String,
    #[serde(rename = "shopName")]
    pub shop_name: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ShopProfile {
    /// Profile of a user who has not filled anything in yet
    pub fn empty(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            full_name: String::new(),
            phone: String::new(),
            address: String::new(),
            bio: String::new(),
            shop_name: String::new(),
            updated_at: None,
        }
    }

    pub fn update(&mut self, dto: &ShopProfileDto) {
        self.full_name = dto.full_name.trim().to_string();
        self.phone = dto.phone.trim().to_string();
        self.address = dto.address.trim().to_string();
        self.bio = dto.bio.trim().to_string();
        self.shop_name = dto.shop_name.trim().to_string();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.user_id.trim().is_empty() {
            return Err("User is required".into());
        }
        if !self
            .phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'))
        {
            return Err("Phone may contain only digits, spaces and + - ( )".into());
        }
        if self.bio.chars().count() > 1000 {
            return Err("Bio is limited to 1000 characters".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopProfileDto {
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub bio: String,
    #[serde(rename = "shopName", default)]
    pub shop_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_trims_fields() {
        let mut profile = ShopProfile::empty("u1");
        profile.update(&ShopProfileDto {
            full_name: "  Asha Rao ".into(),
            phone: "+91 98765-43210".into(),
            address: "MG Road".into(),
            bio: String::new(),
            shop_name: " Corner Store".into(),
        });
        assert_eq!(profile.full_name, "Asha Rao");
        assert_eq!(profile.shop_name, "Corner Store");
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_phone_with_letters_is_rejected() {
        let mut profile = ShopProfile::empty("u1");
        profile.phone = "call me".into();
        assert!(profile.validate().is_err());
    }
}

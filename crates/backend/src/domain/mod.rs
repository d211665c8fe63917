pub mod a001_sale_record;
pub mod a002_shop_profile;

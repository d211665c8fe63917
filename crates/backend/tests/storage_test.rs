//! Repositories against a real SQLite file.
//!
//! The connection is process-global, so everything runs in one test.

use backend::domain::a001_sale_record::repository;
use backend::shared::data::{db, migration_runner};
use backend::system::users::repository as user_repository;
use backend::system::users::service::{self as user_service, AuthError};
use chrono::{NaiveDate, Utc};
use contracts::domain::a001_sale_record::aggregate::{SaleRecord, SaleRecordDto};
use contracts::system::users::User;
use tempfile::TempDir;

fn user(id: &str, username: &str) -> User {
    let now = Utc::now().to_rfc3339();
    User {
        id: id.to_string(),
        username: username.to_string(),
        email: None,
        full_name: None,
        is_active: true,
        created_at: now.clone(),
        updated_at: now,
        last_login_at: None,
    }
}

async fn add_user(id: &str) {
    user_repository::create_with_password(&user(id, &format!("user-{}", id)), "hash")
        .await
        .unwrap();
}

async fn add_sale(owner: &str, date: &str, product: &str) -> SaleRecord {
    let dto = SaleRecordDto {
        sale_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        product_name: product.to_string(),
        product_id: format!("ID-{}", product),
        price: 2.0,
        stock_sold: 3,
        profit_margin: 10.0,
        stock_balance: 5,
    };
    let record = SaleRecord::new_for_insert(&dto, owner).unwrap();
    repository::insert(&record).await.unwrap();
    record
}

#[tokio::test]
async fn repositories_against_sqlite() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("salestrendz.db");
    migration_runner::run_migrations(&db_path).await.unwrap();
    db::initialize_database(&db_path).await.unwrap();

    sale_records_are_scoped_to_their_owner().await;
    duplicate_username_insert_is_a_conflict().await;
}

async fn sale_records_are_scoped_to_their_owner() {
    add_user("owner-a").await;
    add_user("owner-b").await;

    let a_sale = add_sale("owner-a", "2024-03-10", "Tea").await;
    add_sale("owner-b", "2024-01-05", "Coffee").await;
    add_sale("owner-b", "2024-02-20", "Cocoa").await;

    // Someone else's record reads as missing
    let a_id = a_sale.id.value();
    assert!(repository::get_for_owner(a_id, "owner-b")
        .await
        .unwrap()
        .is_none());
    assert_eq!(
        repository::get_for_owner(a_id, "owner-a").await.unwrap(),
        Some(a_sale.clone())
    );

    // ... and cannot be deleted by them
    assert!(!repository::delete_for_owner(a_id, "owner-b").await.unwrap());
    assert!(repository::get_for_owner(a_id, "owner-a")
        .await
        .unwrap()
        .is_some());

    // Only own rows, newest sale date first
    let b_products: Vec<String> = repository::list_by_owner("owner-b")
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.product_name)
        .collect();
    assert_eq!(b_products, vec!["Cocoa", "Coffee"]);

    let a_records = repository::list_by_owner("owner-a").await.unwrap();
    assert_eq!(a_records, vec![a_sale]);

    // The owner can delete their own record
    assert!(repository::delete_for_owner(a_id, "owner-a").await.unwrap());
    assert!(repository::list_by_owner("owner-a").await.unwrap().is_empty());
}

/// Two registrations that both passed the existence check
async fn duplicate_username_insert_is_a_conflict() {
    user_repository::create_with_password(&user("first", "asha"), "hash")
        .await
        .unwrap();

    let err = user_repository::create_with_password(&user("second", "asha"), "hash")
        .await
        .unwrap_err();

    assert!(matches!(
        user_service::insert_error(err),
        AuthError::UsernameTaken
    ));
    assert!(user_repository::get_by_id("second").await.unwrap().is_none());
}

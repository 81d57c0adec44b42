//! Integration tests for the Products domain
//!
//! Run against a real PostgreSQL via testcontainers, using the seeded catalog.
//! They need Docker and are ignored by default (`cargo test -- --ignored`).

use domain_products::*;
use rust_decimal::Decimal;
use test_utils::{TestDatabase, assertions::*};

fn page(offset: u64, limit: u64) -> ProductsFilter {
    ProductsFilter {
        offset,
        limit,
        ..Default::default()
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_seeded_catalog_is_listed_in_id_order() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let (products, total) = repo.list(page(0, 10)).await.unwrap();

    assert_eq!(total, 8);
    assert_eq!(products.len(), 8);
    assert_sorted_by(&products, |p| p.id, "products");
    assert_eq!(products[0].code, "PROD001");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_products_are_hydrated() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let first = repo.get_by_code("PROD001").await.unwrap();
    assert_eq!(first.price, Decimal::new(1099, 2));
    assert_eq!(assert_some(first.category, "category").code, "CLOTHING");
    assert_eq!(first.variants.len(), 2);
    assert!(first.variants.iter().all(|v| v.product_id == first.id));

    let orphan = repo.get_by_code("PROD008").await.unwrap();
    assert!(orphan.category.is_none());
    assert!(orphan.variants.is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_category_filter_against_store() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let (products, total) = repo
        .list(ProductsFilter {
            category_code: Some("SHOES".into()),
            ..page(0, 10)
        })
        .await
        .unwrap();

    assert_eq!(total, 2);
    let codes: Vec<_> = products.iter().map(|p| p.code.as_str()).collect();
    assert_eq!(codes, ["PROD002", "PROD005"]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_price_filter_against_store() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let (products, total) = repo
        .list(ProductsFilter {
            max_price: Some(Decimal::new(1000, 2)),
            ..page(0, 10)
        })
        .await
        .unwrap();

    // 8.75, 5.99, 7.25
    assert_eq!(total, 3);
    assert!(products.iter().all(|p| p.price <= Decimal::TEN));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_pagination_against_store() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let (products, total) = repo.list(page(6, 5)).await.unwrap();

    assert_eq!(total, 8);
    let codes: Vec<_> = products.iter().map(|p| p.code.as_str()).collect();
    assert_eq!(codes, ["PROD007", "PROD008"]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_unknown_code_is_not_found() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let err = repo.get_by_code("PROD999").await.unwrap_err();
    assert!(matches!(err, ProductError::NotFound(_)));
}

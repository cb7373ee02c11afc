use chrono::{DateTime, Utc};
use tempfile::TempDir;

use tienda_bot::model::{
    CatalogDocument, Contact, Order, Product, ProductId, ProductionRecord, UserId,
};
use tienda_bot::store::{seed_products, CatalogStore, StoreError};

fn millis(ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ms).expect("Valid timestamp")
}

fn sample_document() -> CatalogDocument {
    CatalogDocument {
        products: vec![Product::new(
            ProductId(1),
            "Croquetas de pollo",
            "Croquetas",
            45,
            8.0,
        )],
        orders: vec![Order {
            name: "Croquetas de pollo".to_owned(),
            qty: 5,
            total: 40.0,
            date: millis(1_700_000_000_000),
            user: Contact::new(UserId(53)).with_first_name("Ana"),
        }],
        production: vec![ProductionRecord {
            item: "Croquetas de pollo".to_owned(),
            qty: 100,
            date: millis(1_700_000_100_000),
        }],
    }
}

#[test]
fn store_exposes_its_backing_path() {
    let store = CatalogStore::new("db.json");

    assert_eq!(store.path(), std::path::Path::new("db.json"));
}

#[tokio::test]
async fn missing_file_loads_as_empty_document() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = CatalogStore::new(dir.path().join("db.json"));

    let document = store.load().await.expect("Failed to load");

    assert_eq!(document, CatalogDocument::default());
}

#[tokio::test]
async fn save_then_load_round_trips() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = CatalogStore::new(dir.path().join("db.json"));
    let document = sample_document();

    store.save(&document).await.expect("Failed to save");
    let loaded = store.load().await.expect("Failed to load");

    assert_eq!(loaded, document);
    // the temp file never survives a successful save
    assert!(!dir.path().join("db.tmp").exists());
}

/// Pins the on-disk layout: top-level collections, epoch-millis dates, bare
/// numeric ids, and absent optional contact fields omitted entirely.
#[tokio::test]
async fn document_layout_on_disk_is_stable() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = CatalogStore::new(dir.path().join("db.json"));

    store
        .save(&sample_document())
        .await
        .expect("Failed to save");

    let raw = std::fs::read_to_string(dir.path().join("db.json")).expect("Failed to read file");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("File is not JSON");

    assert!(value.get("products").is_some());
    assert!(value.get("orders").is_some());
    assert!(value.get("production").is_some());
    assert_eq!(value["products"][0]["id"], 1);
    assert_eq!(value["orders"][0]["date"], 1_700_000_000_000_i64);
    assert_eq!(value["orders"][0]["user"]["id"], 53);
    assert_eq!(value["orders"][0]["user"]["first_name"], "Ana");
    assert!(
        value["orders"][0]["user"].get("phone").is_none(),
        "Absent contact fields must be omitted, not null"
    );
}

#[tokio::test]
async fn bootstrap_seeds_an_empty_store_once() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = CatalogStore::new(dir.path().join("db.json"));

    let document = store.bootstrap().await.expect("Failed to bootstrap");
    assert_eq!(document.products, seed_products());
    assert!(document.orders.is_empty());

    // Mutate the catalog the way a running shop would, then bootstrap again:
    // nothing gets re-seeded and nothing is lost.
    let mut document = store.load().await.expect("Failed to load");
    document.find_product_mut(ProductId(1)).unwrap().stock = 45;
    document.orders.push(Order {
        name: "Croquetas de pollo".to_owned(),
        qty: 5,
        total: 40.0,
        date: millis(1_700_000_000_000),
        user: Contact::new(UserId(53)),
    });
    store.save(&document).await.expect("Failed to save");

    let again = store.bootstrap().await.expect("Failed to re-bootstrap");
    assert_eq!(again.find_product(ProductId(1)).unwrap().stock, 45);
    assert_eq!(again.orders.len(), 1);
}

#[tokio::test]
async fn malformed_document_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("db.json");
    std::fs::write(&path, "{ this is not json").expect("Failed to write file");
    let store = CatalogStore::new(&path);

    let error = store.load().await.expect_err("Load should fail");

    assert!(matches!(error, StoreError::Malformed(_)));
}

#[tokio::test]
async fn unreadable_path_is_an_io_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    // A directory can exist but never read as a document.
    let store = CatalogStore::new(dir.path());

    let error = store.load().await.expect_err("Load should fail");

    assert!(matches!(error, StoreError::Io(_)));
}

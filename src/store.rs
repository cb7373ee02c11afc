//! JSON-document persistence for the catalog.
//!
//! The store holds a path, nothing else. Callers load the whole document,
//! mutate it in memory and save it back wholesale; one interaction is one
//! load → operate → save unit. There is no locking, so the last write wins,
//! which is fine while a single event loop owns all writes.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tracing::{debug, info};

use crate::model::{CatalogDocument, Product, ProductId};

/// Errors raised by the persistence layer.
///
/// Every variant means the same thing to the person chatting with the bot:
/// the store is unavailable for this interaction. The variants exist so logs
/// can tell an unreadable disk from a corrupted document.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("Catalog store I/O failure: {0}")]
    Io(#[from] io::Error),

    /// The backing file exists but does not hold a valid catalog document.
    #[error("Catalog document is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Path-backed store for the single catalog document.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the document from disk.
    ///
    /// A missing file is not an error: the shop simply has not sold anything
    /// yet, so an empty document is returned. Anything else (unreadable file,
    /// invalid JSON) surfaces as [`StoreError`].
    pub async fn load(&self) -> Result<CatalogDocument, StoreError> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no document on disk, starting empty");
                Ok(CatalogDocument::default())
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Writes the document to disk.
    ///
    /// The bytes go to a sibling `.tmp` file first and are renamed into
    /// place, so a crash mid-write never leaves a truncated document behind.
    pub async fn save(&self, document: &CatalogDocument) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(document)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &bytes).await?;
        fs::rename(&tmp, &self.path).await?;
        debug!(
            path = %self.path.display(),
            products = document.products.len(),
            orders = document.orders.len(),
            "document saved"
        );
        Ok(())
    }

    /// Loads the document and seeds the starter catalog if the product list
    /// is empty, then writes the result back. Safe to call on every startup:
    /// an already-populated catalog is left alone.
    pub async fn bootstrap(&self) -> Result<CatalogDocument, StoreError> {
        let mut document = self.load().await?;
        if document.products.is_empty() {
            document.products = seed_products();
            info!(
                products = document.products.len(),
                "catalog seeded with starter products"
            );
        }
        self.save(&document).await?;
        Ok(document)
    }
}

/// Starter catalog written the first time the bot runs against an empty
/// store.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(ProductId(1), "Croquetas de pollo", "Croquetas", 50, 8.0),
        Product::new(ProductId(2), "Croquetas de res", "Croquetas", 30, 9.0),
        Product::new(ProductId(3), "Natilla vainilla", "Natillas", 60, 3.0),
        Product::new(ProductId(4), "Natilla chocolate", "Natillas", 40, 3.0),
        Product::new(ProductId(5), "Snack mix", "Otros", 20, 2.0),
    ]
}

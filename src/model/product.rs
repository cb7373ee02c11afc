use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe identifier for a catalog product.
///
/// Serializes as the bare number, matching the document layout on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(raw: u32) -> Self {
        ProductId(raw)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product offered by the shop.
///
/// `price` is the current unit price; orders freeze their own total at
/// purchase time, so editing a price never rewrites history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Display grouping for the catalog listing.
    pub category: String,
    pub stock: u32,
    pub price: f64,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier within the catalog
    /// * `name` - Product name shown to customers
    /// * `category` - Catalog grouping
    /// * `stock` - Units currently available
    /// * `price` - Current unit price
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        stock: u32,
        price: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            stock,
            price,
        }
    }
}

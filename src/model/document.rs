use serde::{Deserialize, Serialize};

use super::{Order, Product, ProductId, ProductionRecord};

/// The whole shop state: one JSON object with three collections.
///
/// The document is always loaded and saved wholesale; there is no partial
/// update. Missing collections deserialize as empty, so a hand-edited or
/// older document still loads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub production: Vec<ProductionRecord>,
}

impl CatalogDocument {
    pub fn find_product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn find_product_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|product| product.id == id)
    }
}

//! Stock mutation over an in-memory catalog document.
//!
//! Both operations leave persistence to the caller: the dispatcher loads the
//! document, applies one operation and saves the result as a single unit.
//! On any error the document is left exactly as it was.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

use crate::model::{CatalogDocument, Contact, Order, Product, ProductId};

/// Errors that can occur while mutating stock.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// No product carries the requested id.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    /// The provided quantity is invalid (zero).
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),
}

/// Adds `qty` units to a product's stock and returns the updated snapshot.
pub fn restock(
    document: &mut CatalogDocument,
    id: ProductId,
    qty: u32,
) -> Result<Product, InventoryError> {
    let product = document
        .find_product_mut(id)
        .ok_or(InventoryError::NotFound(id))?;
    product.stock = product.stock.saturating_add(qty);
    debug!(product = %id, stock = product.stock, "stock increased");
    Ok(product.clone())
}

/// Registers a purchase: decrements stock and appends the resulting order.
///
/// The order total is frozen at `qty × price`; later price edits never touch
/// past orders. `at` is injected so callers (and tests) control the clock.
pub fn purchase(
    document: &mut CatalogDocument,
    id: ProductId,
    qty: u32,
    buyer: Contact,
    at: DateTime<Utc>,
) -> Result<Order, InventoryError> {
    if qty == 0 {
        return Err(InventoryError::InvalidQuantity(qty));
    }
    let product = document
        .find_product_mut(id)
        .ok_or(InventoryError::NotFound(id))?;
    if qty > product.stock {
        return Err(InventoryError::InsufficientStock {
            requested: qty,
            available: product.stock,
        });
    }
    product.stock -= qty;
    let stock = product.stock;
    let order = Order {
        name: product.name.clone(),
        qty,
        total: f64::from(qty) * product.price,
        date: at,
        user: buyer,
    };
    document.orders.push(order.clone());
    debug!(product = %id, qty, stock, "purchase recorded");
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn catalog() -> CatalogDocument {
        CatalogDocument {
            products: vec![
                Product::new(ProductId(1), "Croquetas de pollo", "Croquetas", 50, 8.0),
                Product::new(ProductId(3), "Natilla vainilla", "Natillas", 60, 3.0),
            ],
            ..CatalogDocument::default()
        }
    }

    fn buyer() -> Contact {
        Contact::new(crate::model::UserId(42)).with_first_name("Ana")
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn purchase_decrements_stock_and_appends_order() {
        let mut document = catalog();

        let order = purchase(&mut document, ProductId(1), 5, buyer(), noon()).unwrap();

        assert_eq!(order.name, "Croquetas de pollo");
        assert_eq!(order.qty, 5);
        assert_eq!(order.total, 40.0);
        assert_eq!(order.date, noon());
        assert_eq!(order.user.id, crate::model::UserId(42));
        assert_eq!(document.find_product(ProductId(1)).unwrap().stock, 45);
        assert_eq!(document.orders, vec![order]);
    }

    #[test]
    fn purchase_rejects_insufficient_stock() {
        let mut document = catalog();
        let before = document.clone();

        let error = purchase(&mut document, ProductId(1), 51, buyer(), noon()).unwrap_err();

        assert_eq!(
            error,
            InventoryError::InsufficientStock {
                requested: 51,
                available: 50
            }
        );
        assert_eq!(document, before);
    }

    #[test]
    fn purchase_rejects_unknown_product() {
        let mut document = catalog();
        let before = document.clone();

        let error = purchase(&mut document, ProductId(99), 1, buyer(), noon()).unwrap_err();

        assert_eq!(error, InventoryError::NotFound(ProductId(99)));
        assert_eq!(document, before);
    }

    #[test]
    fn purchase_rejects_zero_quantity() {
        let mut document = catalog();
        let before = document.clone();

        let error = purchase(&mut document, ProductId(1), 0, buyer(), noon()).unwrap_err();

        assert_eq!(error, InventoryError::InvalidQuantity(0));
        assert_eq!(document, before);
    }

    #[test]
    fn purchase_total_uses_price_at_purchase_time() {
        let mut document = catalog();

        let order = purchase(&mut document, ProductId(1), 2, buyer(), noon()).unwrap();
        document.find_product_mut(ProductId(1)).unwrap().price = 99.0;

        assert_eq!(order.total, 16.0);
        assert_eq!(document.orders[0].total, 16.0);
    }

    #[test]
    fn consecutive_purchases_accumulate_orders() {
        let mut document = catalog();

        purchase(&mut document, ProductId(1), 5, buyer(), noon()).unwrap();
        purchase(&mut document, ProductId(3), 2, buyer(), noon()).unwrap();

        assert_eq!(document.orders.len(), 2);
        assert_eq!(document.find_product(ProductId(1)).unwrap().stock, 45);
        assert_eq!(document.find_product(ProductId(3)).unwrap().stock, 58);
        assert_eq!(document.orders[1].name, "Natilla vainilla");
        assert_eq!(document.orders[1].total, 6.0);
    }

    #[test]
    fn restock_adds_units() {
        let mut document = catalog();

        let product = restock(&mut document, ProductId(1), 20).unwrap();

        assert_eq!(product.stock, 70);
        assert_eq!(document.find_product(ProductId(1)).unwrap().stock, 70);
    }

    #[test]
    fn restock_rejects_unknown_product() {
        let mut document = catalog();
        let before = document.clone();

        let error = restock(&mut document, ProductId(99), 20).unwrap_err();

        assert_eq!(error, InventoryError::NotFound(ProductId(99)));
        assert_eq!(document, before);
    }
}

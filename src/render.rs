//! Reply texts, in the shop's Spanish voice.
//!
//! Everything here is a pure function from data to text, so formatting is
//! testable without running the event loop. Markdown markers (`*bold*`,
//! backticks) only appear in texts the dispatcher sends with the Markdown
//! parse mode; plain confirmations carry none.

use crate::commands::MenuAction;
use crate::model::{Contact, Order, Product, ProductionRecord};
use crate::reports::MonthlySummary;
use crate::transport::{InlineButton, InlineKeyboard};

/// Greeting for anyone who is not the owner.
pub const GREETING: &str = "Hola, soy la tienda oficial 🛍️";

/// Restock reply when the product id does not exist.
pub const INVALID_ID: &str = "ID inválido";

/// Purchase reply when the product id does not exist.
pub const PRODUCT_NOT_FOUND: &str = "Producto no encontrado";

/// Purchase reply when the requested quantity exceeds the stock.
pub const OUT_OF_STOCK: &str = "No hay suficiente stock";

/// Purchase reply when the quantity is zero.
pub const INVALID_QUANTITY: &str = "Cantidad inválida";

/// Generic reply when the catalog store cannot be read or written.
pub const STORE_FAILURE: &str = "⚠️ Error interno, inténtalo de nuevo más tarde.";

/// Dashboard header for the owner: welcome line plus the month's numbers.
pub fn dashboard(sender: &Contact, summary: &MonthlySummary) -> String {
    format!(
        "*¡Bienvenido @{}!*\n\n💰 *Ventas mes:* {} unidades\n💵 *Ganancias mes:* ${:.2}",
        sender.mention().unwrap_or(""),
        summary.units_sold,
        summary.earnings
    )
}

/// The five dashboard buttons, one per row, in fixed order.
pub fn main_menu() -> InlineKeyboard {
    InlineKeyboard {
        rows: MenuAction::ALL
            .iter()
            .map(|action| vec![InlineButton::new(action.label(), action.token())])
            .collect(),
    }
}

/// Product list grouped by category, categories in first-seen order.
pub fn catalog(products: &[Product]) -> String {
    let mut groups: Vec<(&str, Vec<&Product>)> = Vec::new();
    for product in products {
        match groups
            .iter_mut()
            .find(|(category, _)| *category == product.category)
        {
            Some((_, members)) => members.push(product),
            None => groups.push((product.category.as_str(), vec![product])),
        }
    }

    let mut text = String::from("*Catálogo*\n\n");
    for (category, members) in groups {
        text.push_str(&format!("*{}*\n", category));
        for product in members {
            text.push_str(&format!(
                "• {} – ${} (Stock: {})\n",
                product.name, product.price, product.stock
            ));
        }
        text.push('\n');
    }
    text
}

/// Most-recent-first order list. Empty list renders as the bare header.
pub fn recent_orders(orders: &[&Order]) -> String {
    let mut text = String::from("*Últimos pedidos:*\n");
    for order in orders {
        text.push_str(&format!(
            "• {} – {} u – ${} – {}\n",
            order.name,
            order.qty,
            order.total,
            order.date.format("%d/%m %H:%M")
        ));
    }
    text
}

/// Deduplicated buyer list with phone fallback.
pub fn contacts(contacts: &[&Contact]) -> String {
    let mut text = String::from("*Contactos:*\n");
    for contact in contacts {
        text.push_str(&format!(
            "• {} – {}\n",
            contact.display_name(),
            contact.phone.as_deref().unwrap_or("Sin teléfono")
        ));
    }
    text
}

/// Usage hint behind the stock button.
pub fn stock_help() -> &'static str {
    "*Actualizar stock:*\nEnvía /stock <id> <cantidad>\nEj: `/stock 1 20`"
}

/// Trailing-week production list.
pub fn production(records: &[&ProductionRecord]) -> String {
    let mut text = String::from("*Producción últimos 7 días:*\n");
    for record in records {
        text.push_str(&format!(
            "• {} – {} u – {}\n",
            record.item,
            record.qty,
            record.date.format("%d/%m")
        ));
    }
    text
}

/// Confirmation after a restock.
pub fn restocked(product: &Product) -> String {
    format!("✅ Stock actualizado: {} → {} u", product.name, product.stock)
}

/// Confirmation after a purchase.
pub fn purchase_registered(order: &Order) -> String {
    format!("✅ Compra registrada: {} × {}", order.qty, order.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductId, UserId};
    use chrono::{TimeZone, Utc};

    #[test]
    fn dashboard_formats_earnings_with_two_decimals() {
        let owner = Contact::new(UserId(1)).with_username("tendera");
        let summary = MonthlySummary {
            units_sold: 5,
            earnings: 40.0,
        };

        assert_eq!(
            dashboard(&owner, &summary),
            "*¡Bienvenido @tendera!*\n\n💰 *Ventas mes:* 5 unidades\n💵 *Ganancias mes:* $40.00"
        );
    }

    #[test]
    fn dashboard_falls_back_to_first_name() {
        let owner = Contact::new(UserId(1)).with_first_name("Marta");
        let summary = MonthlySummary::default();

        assert!(dashboard(&owner, &summary).starts_with("*¡Bienvenido @Marta!*"));
    }

    #[test]
    fn main_menu_has_one_button_per_row() {
        let keyboard = main_menu();

        assert_eq!(keyboard.rows.len(), 5);
        for row in &keyboard.rows {
            assert_eq!(row.len(), 1);
        }
        assert_eq!(keyboard.rows[0][0].label, "📦 Catálogo");
        assert_eq!(keyboard.rows[0][0].token, "menu_catalogo");
        assert_eq!(keyboard.rows[4][0].token, "menu_production");
    }

    #[test]
    fn catalog_groups_by_category_in_first_seen_order() {
        let products = vec![
            Product::new(ProductId(1), "Croquetas de pollo", "Croquetas", 50, 8.0),
            Product::new(ProductId(3), "Natilla vainilla", "Natillas", 60, 3.0),
            Product::new(ProductId(2), "Croquetas de res", "Croquetas", 30, 9.0),
        ];

        assert_eq!(
            catalog(&products),
            "*Catálogo*\n\n\
             *Croquetas*\n\
             • Croquetas de pollo – $8 (Stock: 50)\n\
             • Croquetas de res – $9 (Stock: 30)\n\n\
             *Natillas*\n\
             • Natilla vainilla – $3 (Stock: 60)\n\n"
        );
    }

    #[test]
    fn empty_catalog_is_just_the_header() {
        assert_eq!(catalog(&[]), "*Catálogo*\n\n");
    }

    #[test]
    fn order_lines_show_day_month_and_time() {
        let order = Order {
            name: "Croquetas de pollo".into(),
            qty: 5,
            total: 40.0,
            date: Utc.with_ymd_and_hms(2024, 6, 3, 9, 5, 0).unwrap(),
            user: Contact::new(UserId(1)),
        };

        assert_eq!(
            recent_orders(&[&order]),
            "*Últimos pedidos:*\n• Croquetas de pollo – 5 u – $40 – 03/06 09:05\n"
        );
    }

    #[test]
    fn contact_lines_fall_back_when_phone_is_missing() {
        let with_phone = Contact::new(UserId(1))
            .with_first_name("Ana")
            .with_last_name("Pérez")
            .with_phone("555-0101");
        let without_phone = Contact::new(UserId(2)).with_first_name("Beto");

        assert_eq!(
            contacts(&[&with_phone, &without_phone]),
            "*Contactos:*\n• Ana Pérez – 555-0101\n• Beto – Sin teléfono\n"
        );
    }

    #[test]
    fn production_lines_show_day_and_month() {
        let record = ProductionRecord {
            item: "Croquetas de pollo".into(),
            qty: 100,
            date: Utc.with_ymd_and_hms(2024, 6, 10, 16, 0, 0).unwrap(),
        };

        assert_eq!(
            production(&[&record]),
            "*Producción últimos 7 días:*\n• Croquetas de pollo – 100 u – 10/06\n"
        );
    }

    #[test]
    fn confirmations_read_naturally() {
        let product = Product::new(ProductId(1), "Croquetas de pollo", "Croquetas", 70, 8.0);
        assert_eq!(
            restocked(&product),
            "✅ Stock actualizado: Croquetas de pollo → 70 u"
        );

        let order = Order {
            name: "Snack mix".into(),
            qty: 2,
            total: 4.0,
            date: Utc.with_ymd_and_hms(2024, 6, 3, 9, 5, 0).unwrap(),
            user: Contact::new(UserId(1)),
        };
        assert_eq!(purchase_registered(&order), "✅ Compra registrada: 2 × Snack mix");
    }
}

//! Inbound text and callback-token recognition.
//!
//! Recognized input is a closed set. Anything else parses to `None` and the
//! dispatcher stays silent: no usage help, no error reply. Malformed
//! arguments (missing, non-numeric, negative) make the whole command
//! unrecognized rather than partially valid.

use crate::model::ProductId;

/// A recognized slash command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `/start`: dashboard for the owner, greeting for everyone else.
    Start,
    /// `/stock <id> <qty>`: owner-only restock.
    Stock { id: ProductId, qty: u32 },
    /// `/compra <id> <qty>`, or `/comprar <id>` for a single unit.
    Buy { id: ProductId, qty: u32 },
}

/// Parses a message text into a command.
///
/// Tokens beyond the recognized form are ignored, so `/start ahora` still
/// reads as `/start`.
pub fn parse_command(text: &str) -> Option<Command> {
    let mut words = text.split_whitespace();
    match words.next()? {
        "/start" => Some(Command::Start),
        "/stock" => {
            let id = words.next()?.parse().ok()?;
            let qty = words.next()?.parse().ok()?;
            Some(Command::Stock {
                id: ProductId(id),
                qty,
            })
        }
        "/compra" => {
            let id = words.next()?.parse().ok()?;
            let qty = words.next()?.parse().ok()?;
            Some(Command::Buy {
                id: ProductId(id),
                qty,
            })
        }
        "/comprar" => {
            let id = words.next()?.parse().ok()?;
            Some(Command::Buy {
                id: ProductId(id),
                qty: 1,
            })
        }
        _ => None,
    }
}

/// A dashboard menu selection, identified by its callback token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Catalog,
    Orders,
    Contacts,
    StockHelp,
    Production,
}

impl MenuAction {
    /// Every menu entry, in dashboard row order.
    pub const ALL: [MenuAction; 5] = [
        MenuAction::Catalog,
        MenuAction::Orders,
        MenuAction::Contacts,
        MenuAction::StockHelp,
        MenuAction::Production,
    ];

    /// Wire token carried inside the button callback.
    pub fn token(self) -> &'static str {
        match self {
            MenuAction::Catalog => "menu_catalogo",
            MenuAction::Orders => "menu_pedidos",
            MenuAction::Contacts => "menu_contactos",
            MenuAction::StockHelp => "menu_stock",
            MenuAction::Production => "menu_production",
        }
    }

    /// Button label shown on the dashboard.
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Catalog => "📦 Catálogo",
            MenuAction::Orders => "📋 Pedidos",
            MenuAction::Contacts => "👤 Contactos",
            MenuAction::StockHelp => "🔄 Actualizar stock",
            MenuAction::Production => "📈 Producción 7d",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|action| action.token() == token)
    }
}

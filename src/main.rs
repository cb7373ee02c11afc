//! # Tienda Bot: scripted session
//!
//! Drives the storefront event loop through a console transport: inbound
//! events are scripted below, outbound replies are printed to stdout. The
//! same loop, store and handlers run unchanged under a real chat-network
//! adapter; only the [`ChatTransport`] implementation differs.
//!
//! ```bash
//! RUST_LOG=info BOT_TOKEN=demo cargo run
//! ```

use async_trait::async_trait;
use clap::Parser;
use tracing::info;

use tienda_bot::bot::StorefrontBot;
use tienda_bot::commands::MenuAction;
use tienda_bot::config::{setup_tracing, Cli};
use tienda_bot::model::{Contact, UserId};
use tienda_bot::store::CatalogStore;
use tienda_bot::transport::{
    CallbackId, ChatEvent, ChatId, ChatTransport, SendOptions, TransportError,
};

/// Transport that prints every reply to stdout.
struct ConsoleTransport;

#[async_trait]
impl ChatTransport for ConsoleTransport {
    async fn send_message(
        &self,
        chat: ChatId,
        text: &str,
        options: SendOptions,
    ) -> Result<(), TransportError> {
        println!("── mensaje → chat {} ──", chat);
        println!("{}", text);
        if let Some(keyboard) = options.keyboard {
            for row in keyboard.rows {
                let line: Vec<String> = row
                    .iter()
                    .map(|button| format!("[{}]", button.label))
                    .collect();
                println!("{}", line.join(" "));
            }
        }
        println!();
        Ok(())
    }

    async fn acknowledge(&self, callback: &CallbackId) -> Result<(), TransportError> {
        println!("(callback {} confirmado)", callback);
        Ok(())
    }
}

fn command(sender: &Contact, chat: ChatId, text: &str) -> ChatEvent {
    ChatEvent::Command {
        chat,
        sender: sender.clone(),
        text: text.to_owned(),
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let cli = Cli::parse();
    let store = CatalogStore::new(&cli.store_path);
    info!(owner = cli.owner_id, store = %store.path().display(), "Starting storefront bot");

    let document = store.bootstrap().await.map_err(|e| e.to_string())?;
    info!(
        products = document.products.len(),
        orders = document.orders.len(),
        "Catalog ready"
    );

    let (bot, handle) = StorefrontBot::new(cli.bot_config(), store, ConsoleTransport, 32);
    let bot_task = tokio::spawn(bot.run());

    let owner = Contact::new(UserId(cli.owner_id)).with_username("tendera");
    let owner_chat = ChatId(cli.owner_id);
    let customer = Contact::new(UserId(53_412))
        .with_first_name("Ana")
        .with_last_name("Pérez")
        .with_phone("555-0101");
    let customer_chat = ChatId(53_412);

    // Owner opens the dashboard and walks through every menu entry.
    handle
        .dispatch(command(&owner, owner_chat, "/start"))
        .await
        .map_err(|e| e.to_string())?;
    for (i, action) in MenuAction::ALL.iter().enumerate() {
        let tap = ChatEvent::MenuTap {
            chat: owner_chat,
            sender: owner.clone(),
            callback: CallbackId(format!("cb-{}", i + 1)),
            token: action.token().to_owned(),
        };
        handle.dispatch(tap).await.map_err(|e| e.to_string())?;
    }

    // A customer greets, buys five units, then overshoots the stock.
    handle
        .dispatch(command(&customer, customer_chat, "/start"))
        .await
        .map_err(|e| e.to_string())?;
    handle
        .dispatch(command(&customer, customer_chat, "/compra 1 5"))
        .await
        .map_err(|e| e.to_string())?;
    handle
        .dispatch(command(&customer, customer_chat, "/compra 1 999"))
        .await
        .map_err(|e| e.to_string())?;

    // Free-form chatter is a no-op.
    handle
        .dispatch(command(&customer, customer_chat, "gracias!"))
        .await
        .map_err(|e| e.to_string())?;

    // Owner restocks and checks the updated numbers.
    handle
        .dispatch(command(&owner, owner_chat, "/stock 1 20"))
        .await
        .map_err(|e| e.to_string())?;
    handle
        .dispatch(command(&owner, owner_chat, "/start"))
        .await
        .map_err(|e| e.to_string())?;

    // Dropping the last handle lets the loop drain and exit.
    drop(handle);
    bot_task.await.map_err(|e| e.to_string())?;

    info!("Session completed");
    Ok(())
}

//! # Storefront Event Loop
//!
//! The bot is split into the two halves of an actor:
//!
//! - [`StorefrontBot`]: the "server" half. It owns the store handle, the
//!   transport and the receiver end of the channel, and processes inbound
//!   events one at a time.
//! - [`BotHandle`]: the cloneable "client" half. Transports push events
//!   through it and await completion of the whole interaction.
//!
//! **Concurrency model**: events are handled strictly sequentially, so a
//! purchase finishes its load → mutate → save cycle before the next event
//! touches the store. Within one process there is no read-modify-write race;
//! across processes the store stays last-write-wins.
//!
//! **Shutdown**: drop every handle and the loop drains its queue and exits,
//! which is what lets tests (and the scripted session in `main`) join the
//! task deterministically.

use chrono::Utc;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, warn};

use crate::commands::{self, Command, MenuAction};
use crate::config::BotConfig;
use crate::inventory::{self, InventoryError};
use crate::model::{Contact, ProductId};
use crate::render;
use crate::reports;
use crate::store::{CatalogStore, StoreError};
use crate::transport::{CallbackId, ChatEvent, ChatId, ChatTransport, SendOptions, TransportError};

/// Errors surfaced to whoever drives the event loop.
///
/// Only the driver sees these; the person chatting already got their reply
/// (or, for store failures, a generic apology) before the error propagates.
#[derive(Debug, Error)]
pub enum BotError {
    /// The event loop is gone; no more events can be dispatched.
    #[error("Bot event loop closed")]
    Closed,

    /// The loop dropped the completion channel without answering.
    #[error("Bot dropped the completion channel")]
    Dropped,

    /// The catalog store failed mid-interaction.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The transport failed to deliver a reply or an acknowledgement.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

type Completion = oneshot::Sender<Result<(), BotError>>;

struct Envelope {
    event: ChatEvent,
    respond_to: Completion,
}

/// Cloneable sender half: feeds events into the loop.
#[derive(Clone)]
pub struct BotHandle {
    sender: mpsc::Sender<Envelope>,
}

impl BotHandle {
    /// Delivers one event and waits until the loop has fully handled it,
    /// replies included.
    pub async fn dispatch(&self, event: ChatEvent) -> Result<(), BotError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(Envelope { event, respond_to })
            .await
            .map_err(|_| BotError::Closed)?;
        response.await.map_err(|_| BotError::Dropped)?
    }
}

/// The server half of the bot.
pub struct StorefrontBot<T: ChatTransport> {
    config: BotConfig,
    store: CatalogStore,
    transport: T,
    receiver: mpsc::Receiver<Envelope>,
}

impl<T: ChatTransport> StorefrontBot<T> {
    /// Creates the loop and its handle. `buffer` bounds the pending-event
    /// queue; senders wait when it is full.
    pub fn new(
        config: BotConfig,
        store: CatalogStore,
        transport: T,
        buffer: usize,
    ) -> (Self, BotHandle) {
        let (sender, receiver) = mpsc::channel(buffer);
        (
            Self {
                config,
                store,
                transport,
                receiver,
            },
            BotHandle { sender },
        )
    }

    /// Runs the event loop until every handle is dropped.
    pub async fn run(mut self) {
        info!(owner = %self.config.owner, "Bot started");
        while let Some(Envelope { event, respond_to }) = self.receiver.recv().await {
            let outcome = self.handle_event(event).await;
            if let Err(error) = &outcome {
                warn!(error = %error, "Event handling failed");
            }
            let _ = respond_to.send(outcome);
        }
        info!("Bot shutdown");
    }

    async fn handle_event(&mut self, event: ChatEvent) -> Result<(), BotError> {
        match event {
            ChatEvent::Command { chat, sender, text } => {
                debug!(%chat, user = %sender.id, text = %text, "Command received");
                self.handle_command(chat, sender, &text).await
            }
            ChatEvent::MenuTap {
                chat,
                sender,
                callback,
                token,
            } => {
                debug!(%chat, user = %sender.id, token = %token, "Menu tap received");
                self.handle_menu_tap(chat, &sender, &callback, &token).await
            }
        }
    }

    async fn handle_command(
        &self,
        chat: ChatId,
        sender: Contact,
        text: &str,
    ) -> Result<(), BotError> {
        let Some(command) = commands::parse_command(text) else {
            // unrecognized input is a no-op, not an error
            debug!(%chat, "Unrecognized input ignored");
            return Ok(());
        };
        match command {
            Command::Start => self.start(chat, &sender).await,
            Command::Stock { id, qty } => {
                if !self.config.is_owner(sender.id) {
                    debug!(user = %sender.id, "Stock command from non-owner ignored");
                    return Ok(());
                }
                self.restock(chat, id, qty).await
            }
            Command::Buy { id, qty } => self.purchase(chat, sender, id, qty).await,
        }
    }

    /// `/start`: dashboard with menu for the owner, plain greeting for
    /// everyone else.
    async fn start(&self, chat: ChatId, sender: &Contact) -> Result<(), BotError> {
        if !self.config.is_owner(sender.id) {
            self.transport
                .send_message(chat, render::GREETING, SendOptions::default())
                .await?;
            return Ok(());
        }

        let document = match self.store.load().await {
            Ok(document) => document,
            Err(error) => return self.store_failed(chat, error).await,
        };
        let summary = reports::monthly_summary(&document, Utc::now());
        let text = render::dashboard(sender, &summary);
        let options = SendOptions::markdown().with_keyboard(render::main_menu());
        self.transport.send_message(chat, &text, options).await?;
        Ok(())
    }

    /// `/stock`: one load → restock → save unit, owner already checked.
    async fn restock(&self, chat: ChatId, id: ProductId, qty: u32) -> Result<(), BotError> {
        let mut document = match self.store.load().await {
            Ok(document) => document,
            Err(error) => return self.store_failed(chat, error).await,
        };
        match inventory::restock(&mut document, id, qty) {
            Ok(product) => {
                if let Err(error) = self.store.save(&document).await {
                    return self.store_failed(chat, error).await;
                }
                info!(product = %id, stock = product.stock, "Stock updated");
                self.transport
                    .send_message(chat, &render::restocked(&product), SendOptions::default())
                    .await?;
                Ok(())
            }
            Err(error) => {
                debug!(product = %id, error = %error, "Restock rejected");
                self.transport
                    .send_message(chat, render::INVALID_ID, SendOptions::default())
                    .await?;
                Ok(())
            }
        }
    }

    /// `/compra` and `/comprar`: one load → purchase → save unit, open to
    /// everyone.
    async fn purchase(
        &self,
        chat: ChatId,
        buyer: Contact,
        id: ProductId,
        qty: u32,
    ) -> Result<(), BotError> {
        let mut document = match self.store.load().await {
            Ok(document) => document,
            Err(error) => return self.store_failed(chat, error).await,
        };
        match inventory::purchase(&mut document, id, qty, buyer, Utc::now()) {
            Ok(order) => {
                if let Err(error) = self.store.save(&document).await {
                    return self.store_failed(chat, error).await;
                }
                info!(product = %id, qty, total = order.total, "Purchase registered");
                self.transport
                    .send_message(
                        chat,
                        &render::purchase_registered(&order),
                        SendOptions::default(),
                    )
                    .await?;
                Ok(())
            }
            Err(error) => {
                debug!(product = %id, error = %error, "Purchase rejected");
                let reply = match error {
                    InventoryError::NotFound(_) => render::PRODUCT_NOT_FOUND,
                    InventoryError::InsufficientStock { .. } => render::OUT_OF_STOCK,
                    InventoryError::InvalidQuantity(_) => render::INVALID_QUANTITY,
                };
                self.transport
                    .send_message(chat, reply, SendOptions::default())
                    .await?;
                Ok(())
            }
        }
    }

    async fn handle_menu_tap(
        &self,
        chat: ChatId,
        sender: &Contact,
        callback: &CallbackId,
        token: &str,
    ) -> Result<(), BotError> {
        // ack first: the client spinner stops no matter what happens next
        self.transport.acknowledge(callback).await?;

        if !self.config.is_owner(sender.id) {
            debug!(user = %sender.id, token, "Menu tap from non-owner ignored");
            return Ok(());
        }
        let Some(action) = MenuAction::from_token(token) else {
            debug!(token, "Unknown menu token ignored");
            return Ok(());
        };

        let document = match self.store.load().await {
            Ok(document) => document,
            Err(error) => return self.store_failed(chat, error).await,
        };
        let text = match action {
            MenuAction::Catalog => render::catalog(&document.products),
            MenuAction::Orders => render::recent_orders(&reports::recent_orders(
                &document,
                reports::RECENT_ORDERS_LIMIT,
            )),
            MenuAction::Contacts => render::contacts(&reports::unique_contacts(&document)),
            MenuAction::StockHelp => render::stock_help().to_owned(),
            MenuAction::Production => {
                render::production(&reports::production_last_7_days(&document, Utc::now()))
            }
        };
        self.transport
            .send_message(chat, &text, SendOptions::markdown())
            .await?;
        Ok(())
    }

    /// Store failures end the interaction with a generic apology; the error
    /// still propagates so the driver can log and count it.
    async fn store_failed(&self, chat: ChatId, error: StoreError) -> Result<(), BotError> {
        error!(error = %error, "Catalog store unavailable");
        self.transport
            .send_message(chat, render::STORE_FAILURE, SendOptions::default())
            .await?;
        Err(error.into())
    }
}

//! # Tienda Bot
//!
//! > **A storefront chat bot over a single JSON catalog document.**
//!
//! The bot listens for chat commands and dashboard button taps, reads or
//! mutates a flat products/orders/production document, and answers with
//! formatted Spanish text. One privileged identity (the owner) gets a sales
//! dashboard and stock management; everyone else gets a greeting and the
//! purchase command.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One document, explicit units
//! All shop state lives in a single JSON document. Every mutating
//! interaction is an explicit load → operate → save unit; nothing caches the
//! document between events. This keeps persistence boringly predictable:
//! the file on disk is always a complete, self-describing catalog.
//!
//! ### One loop, no locks
//! Inbound events flow through a single event loop ([`bot::StorefrontBot`])
//! that handles each one to completion before taking the next. Within one
//! process there is no read-modify-write race on the store, so no mutex
//! guards the document. Across processes the store is last-write-wins, which
//! is a documented choice, not a guarantee.
//!
//! ### The transport is a contract
//! The bot never names a chat network. It consumes [`transport::ChatEvent`]s
//! and replies through the [`transport::ChatTransport`] trait, so the same
//! loop runs under a real network adapter, the console driver in `main`, or
//! the recording double used by the tests.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`], [`store`])
//! - **Role**: the persisted document (products, orders, production records)
//!   and the path-backed store that loads, saves and seeds it.
//!
//! ### 2. The Logic ([`inventory`], [`reports`])
//! - **Role**: stock mutation (restock, purchase) and read-only aggregation
//!   (monthly summary, recent orders, unique contacts, trailing-week
//!   production). Pure functions over the in-memory document.
//!
//! ### 3. The Surface ([`commands`], [`render`])
//! - **Role**: recognizing the closed command/menu set and producing the
//!   exact reply texts. Both sides are pure and tested without the loop.
//!
//! ### 4. The Runtime ([`bot`], [`transport`], [`config`])
//! - **Role**: the event loop with its cloneable handle, the transport
//!   contract plus its recording double, and process configuration.
//!
//! ## 🚀 Quick Start
//!
//! ### Running the scripted demo session
//!
//! ```bash
//! RUST_LOG=info BOT_TOKEN=demo cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod bot;
pub mod commands;
pub mod config;
pub mod inventory;
pub mod model;
pub mod render;
pub mod reports;
pub mod store;
pub mod transport;

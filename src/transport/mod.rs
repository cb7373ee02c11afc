//! The chat-transport boundary.
//!
//! The bot never talks to a chat network directly; it consumes inbound
//! [`ChatEvent`]s and replies through the [`ChatTransport`] trait. Anything
//! that can deliver a message and confirm a button tap can drive the bot:
//! the binary ships a console implementation for scripted sessions, and the
//! [`mock`] module records traffic for tests.

pub mod mock;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

use crate::model::Contact;

/// Identifier of a conversation on the transport side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

impl From<i64> for ChatId {
    fn from(raw: i64) -> Self {
        ChatId(raw)
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Correlation token of a button tap.
///
/// The transport expects exactly one acknowledgement per tap, otherwise the
/// client keeps its spinner running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackId(pub String);

impl From<&str> for CallbackId {
    fn from(raw: &str) -> Self {
        CallbackId(raw.to_owned())
    }
}

impl fmt::Display for CallbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An inbound event delivered by the transport.
#[derive(Debug, Clone)]
pub enum ChatEvent {
    /// A plain text message, possibly a slash command.
    Command {
        chat: ChatId,
        sender: Contact,
        text: String,
    },
    /// A tap on one of the dashboard buttons.
    MenuTap {
        chat: ChatId,
        sender: Contact,
        callback: CallbackId,
        token: String,
    },
}

/// Markup mode for outbound text.
///
/// Only Markdown is used today; plain text goes out with no mode at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    Markdown,
}

/// One tappable button: a visible label and the token sent back on tap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineButton {
    pub label: String,
    pub token: String,
}

impl InlineButton {
    pub fn new(label: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            token: token.into(),
        }
    }
}

/// Rows of buttons attached beneath a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineKeyboard {
    pub rows: Vec<Vec<InlineButton>>,
}

/// Formatting options for an outbound message.
///
/// The default is plain text with no keyboard, which is what most replies
/// use.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SendOptions {
    pub parse_mode: Option<ParseMode>,
    pub keyboard: Option<InlineKeyboard>,
}

impl SendOptions {
    /// Markdown-formatted text, no keyboard.
    pub fn markdown() -> Self {
        Self {
            parse_mode: Some(ParseMode::Markdown),
            keyboard: None,
        }
    }

    /// Attaches an inline keyboard.
    pub fn with_keyboard(mut self, keyboard: InlineKeyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }
}

/// The transport failed to deliver a reply or an acknowledgement.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Chat transport failure: {0}")]
pub struct TransportError(pub String);

/// Outbound contract of the chat network.
#[async_trait]
pub trait ChatTransport: Send + Sync + 'static {
    /// Delivers `text` to `chat` with the given formatting.
    async fn send_message(
        &self,
        chat: ChatId,
        text: &str,
        options: SendOptions,
    ) -> Result<(), TransportError>;

    /// Confirms receipt of a button tap so the client stops its spinner.
    async fn acknowledge(&self, callback: &CallbackId) -> Result<(), TransportError>;
}

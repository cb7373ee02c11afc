//! # Recording Transport
//!
//! Transport double for tests: accepts every send, records it, and lets the
//! test assert on exactly what the bot put on the wire.
//!
//! Clone the transport before handing it to the bot; all clones share the
//! same recording.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{CallbackId, ChatId, ChatTransport, SendOptions, TransportError};

/// A message captured by [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct SentMessage {
    pub chat: ChatId,
    pub text: String,
    pub options: SendOptions,
}

/// Transport that records outbound traffic instead of delivering it.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    inner: Arc<Mutex<Recorded>>,
}

#[derive(Debug, Default)]
struct Recorded {
    messages: Vec<SentMessage>,
    acks: Vec<CallbackId>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything sent so far, in order.
    pub fn messages(&self) -> Vec<SentMessage> {
        self.inner.lock().unwrap().messages.clone()
    }

    /// Callback ids acknowledged so far, in order.
    pub fn acknowledged(&self) -> Vec<CallbackId> {
        self.inner.lock().unwrap().acks.clone()
    }

    /// Text of the most recent message, if any.
    pub fn last_text(&self) -> Option<String> {
        self.inner
            .lock()
            .unwrap()
            .messages
            .last()
            .map(|message| message.text.clone())
    }
}

#[async_trait]
impl ChatTransport for RecordingTransport {
    async fn send_message(
        &self,
        chat: ChatId,
        text: &str,
        options: SendOptions,
    ) -> Result<(), TransportError> {
        self.inner.lock().unwrap().messages.push(SentMessage {
            chat,
            text: text.to_owned(),
            options,
        });
        Ok(())
    }

    async fn acknowledge(&self, callback: &CallbackId) -> Result<(), TransportError> {
        self.inner.lock().unwrap().acks.push(callback.clone());
        Ok(())
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe identifier for a chat user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl From<i64> for UserId {
    fn from(raw: i64) -> Self {
        UserId(raw)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of a buyer, embedded in every order.
///
/// All profile fields are optional because the chat network only shares what
/// the user exposes. Absent fields are omitted from the document on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Contact {
    /// Creates a contact with only the id set.
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            first_name: None,
            last_name: None,
            username: None,
            phone: None,
        }
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// First and last name joined with a space; empty when neither is set.
    pub fn display_name(&self) -> String {
        let mut parts = Vec::new();
        if let Some(first_name) = &self.first_name {
            parts.push(first_name.as_str());
        }
        if let Some(last_name) = &self.last_name {
            parts.push(last_name.as_str());
        }
        parts.join(" ")
    }

    /// Handle used to greet the user: the username when set, the first name
    /// otherwise.
    pub fn mention(&self) -> Option<&str> {
        self.username.as_deref().or(self.first_name.as_deref())
    }
}

//! Shared response envelope types for API handlers.
//!
//! Every JSON response carries a `success` flag. Payloads sit under a key
//! named after what they hold (`services`, `step`, `banner`, ...), so the
//! keyed envelope is serialized by hand rather than derived.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// `{ "success": true, <key>: value, "message"?: ... }`.
#[derive(Debug)]
pub struct Keyed<T> {
    pub key: &'static str,
    pub value: T,
    pub message: Option<String>,
}

impl<T> Keyed<T> {
    pub fn new(key: &'static str, value: T) -> Self {
        Self {
            key,
            value,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T: Serialize> Serialize for Keyed<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.message.is_some() { 3 } else { 2 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("success", &true)?;
        map.serialize_entry(self.key, &self.value)?;
        if let Some(message) = &self.message {
            map.serialize_entry("message", message)?;
        }
        map.end()
    }
}

/// `{ "success": true, "message": ... }`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

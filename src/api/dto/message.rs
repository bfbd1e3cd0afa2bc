//! Confirmation bodies returned by organizer mutations.

use serde::Serialize;

/// `{"message": "..."}`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{"message": "...", "id": 7}` returned after a link is stored.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i64,
}

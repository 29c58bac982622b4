use serde::{Deserialize, Serialize};

/// Generic acknowledgement body for operations with no resource payload
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new<S: Into<String>>(message: S) -> Self {
        MessageResponse {
            message: message.into(),
        }
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Acknowledgement body for write endpoints, e.g. `{"message": "School added successfully"}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
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

/// Error body, e.g. `{"error": "Server error"}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

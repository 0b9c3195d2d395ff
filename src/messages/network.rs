//! Network messages - communication between App and Network layers

use crate::models::PromptRequest;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Run one generation against the Gemini API
    Generate {
        id: u64,
        request: PromptRequest,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// The service returned generated text
    Completed {
        id: u64,
        text: String,
        time_ms: u64,
    },
    /// The call failed; `message` is the human-readable description
    Failed {
        id: u64,
        message: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID the response belongs to
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Completed { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
        }
    }
}

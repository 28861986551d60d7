//! Completion gateway port
//!
//! Defines the interface for relaying a conversation to the hosted
//! completion service. Implementations (adapters) live in the
//! infrastructure layer.

use async_trait::async_trait;
use borderpass_domain::{Message, StreamEvent};
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors that can occur during completion gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Upstream returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// One request to the completion service: the contextual system prompt
/// plus the running conversation.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub messages: Vec<Message>,
}

/// Gateway to the hosted completion service.
///
/// Each invocation is independent — the gateway holds no conversation
/// state across calls, and a call is not cancelable once issued.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Issue one streaming completion call.
    async fn stream_chat(&self, request: CompletionRequest) -> Result<StreamHandle, GatewayError>;
}

/// Handle for receiving streaming events from a completion call.
///
/// Wraps an `mpsc::Receiver<StreamEvent>` and provides convenience methods
/// for consuming the stream.
#[derive(Debug)]
pub struct StreamHandle {
    pub receiver: mpsc::Receiver<StreamEvent>,
}

impl StreamHandle {
    pub fn new(receiver: mpsc::Receiver<StreamEvent>) -> Self {
        Self { receiver }
    }

    /// Consume the stream and collect all text into a single string.
    ///
    /// Useful when the caller wants streaming at the transport level but
    /// only needs the final text.
    pub async fn collect_text(mut self) -> Result<String, GatewayError> {
        let mut full_text = String::new();
        while let Some(event) = self.receiver.recv().await {
            match event {
                StreamEvent::Delta(chunk) => full_text.push_str(&chunk),
                StreamEvent::Completed(text) => {
                    if full_text.is_empty() {
                        return Ok(text);
                    }
                    return Ok(full_text);
                }
                StreamEvent::Error(e) => {
                    return Err(GatewayError::RequestFailed(e));
                }
            }
        }
        // Channel closed without Completed — return what we have
        Ok(full_text)
    }
}

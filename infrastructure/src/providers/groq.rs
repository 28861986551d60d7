//! Groq completion gateway
//!
//! Streams chat completions from Groq's OpenAI-compatible endpoint.
//! The HTTP response is server-sent events; each `data:` line carries a
//! JSON chunk with a content delta. The adapter bridges that stream
//! into the application layer's `StreamEvent` channel.

use async_trait::async_trait;
use borderpass_application::{
    AssistantParams, CompletionGateway, CompletionRequest, GatewayError, StreamHandle,
};
use borderpass_domain::{Message, StreamEvent};
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Completion gateway backed by Groq's chat completions API.
pub struct GroqCompletionGateway {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    params: AssistantParams,
}

impl GroqCompletionGateway {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            params: AssistantParams::default(),
        }
    }

    /// Build a gateway whose API key is read from the named environment
    /// variable.
    pub fn from_env(var: &str) -> Result<Self, GatewayError> {
        let api_key = std::env::var(var).map_err(|_| {
            GatewayError::Other(format!("environment variable {var} is not set"))
        })?;
        Ok(Self::new(api_key))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_params(mut self, params: AssistantParams) -> Self {
        self.params = params;
        self
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct StreamChunk {
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    delta: StreamDelta,
}

#[derive(Debug, Default, Deserialize)]
struct StreamDelta {
    #[serde(default)]
    content: Option<String>,
}

/// Outcome of parsing one line of the SSE body.
#[derive(Debug, PartialEq)]
pub(crate) enum SseLine {
    Delta(String),
    Done,
    Skip,
}

pub(crate) fn parse_sse_line(line: &str) -> SseLine {
    let line = line.trim();
    let Some(payload) = line.strip_prefix("data:") else {
        return SseLine::Skip;
    };
    let payload = payload.trim();
    if payload == "[DONE]" {
        return SseLine::Done;
    }
    match serde_json::from_str::<StreamChunk>(payload) {
        Ok(chunk) => {
            let content = chunk
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.delta.content);
            match content {
                Some(text) if !text.is_empty() => SseLine::Delta(text),
                _ => SseLine::Skip,
            }
        }
        Err(e) => {
            warn!("Skipping malformed stream chunk: {}", e);
            SseLine::Skip
        }
    }
}

#[async_trait]
impl CompletionGateway for GroqCompletionGateway {
    async fn stream_chat(&self, request: CompletionRequest) -> Result<StreamHandle, GatewayError> {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);
        messages.push(Message::system(request.system_prompt));
        messages.extend(request.messages);

        let body = ChatCompletionRequest {
            model: self.params.model.clone(),
            messages,
            temperature: self.params.temperature,
            max_tokens: self.params.max_tokens,
            stream: true,
        };

        debug!(model = %body.model, "Sending completion request to Groq");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let (tx, rx) = mpsc::channel(32);

        tokio::spawn(async move {
            let mut byte_stream = response.bytes_stream();
            let mut buffer = String::new();
            let mut full_text = String::new();

            while let Some(chunk) = byte_stream.next().await {
                let chunk = match chunk {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        warn!("Completion stream interrupted: {}", e);
                        let _ = tx.send(StreamEvent::Error(e.to_string())).await;
                        return;
                    }
                };
                buffer.push_str(&String::from_utf8_lossy(&chunk));

                while let Some(pos) = buffer.find('\n') {
                    let line: String = buffer.drain(..=pos).collect();
                    match parse_sse_line(&line) {
                        SseLine::Delta(text) => {
                            full_text.push_str(&text);
                            if tx.send(StreamEvent::Delta(text)).await.is_err() {
                                // Receiver dropped — stop reading
                                return;
                            }
                        }
                        SseLine::Done => {
                            let _ = tx.send(StreamEvent::Completed(full_text)).await;
                            return;
                        }
                        SseLine::Skip => {}
                    }
                }
            }

            // Upstream closed without [DONE]
            let _ = tx.send(StreamEvent::Completed(full_text)).await;
        });

        Ok(StreamHandle::new(rx))
    }
}

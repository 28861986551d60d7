//! Assist use case — one contextual completion call for the chat widget.
//!
//! Builds the system prompt for the current question and relays a single
//! streaming call through the [`CompletionGateway`]. No retries, no
//! backoff: any failure is logged and surfaced to the caller as one error.

use crate::ports::completion_gateway::{
    CompletionGateway, CompletionRequest, GatewayError, StreamHandle,
};
use borderpass_domain::util::truncate_str;
use borderpass_domain::{Message, Question, ResponseStore, build_system_prompt};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur during an assist call.
#[derive(Error, Debug)]
pub enum AssistError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Conversation is empty")]
    EmptyConversation,
}

/// The inbound chat payload: the running conversation plus questionnaire
/// context, mirroring the widget's request body.
#[derive(Debug, Clone)]
pub struct AssistInput {
    pub messages: Vec<Message>,
    pub current_question: Question,
    pub responses: ResponseStore,
}

/// Use case for running one assist interaction.
///
/// Stateless across calls: each invocation builds fresh context from its
/// input and issues exactly one gateway call.
pub struct AssistUseCase {
    gateway: Arc<dyn CompletionGateway>,
}

impl AssistUseCase {
    pub fn new(gateway: Arc<dyn CompletionGateway>) -> Self {
        Self { gateway }
    }

    /// Execute the assist interaction, returning the relay stream.
    pub async fn execute(&self, input: AssistInput) -> Result<StreamHandle, AssistError> {
        if input.messages.is_empty() {
            return Err(AssistError::EmptyConversation);
        }

        let system_prompt = build_system_prompt(&input.current_question, &input.responses);

        if let Some(last) = input.messages.last() {
            info!(
                "Assist call on '{}': {}",
                input.current_question.id,
                truncate_str(&last.content, 100)
            );
        }

        let request = CompletionRequest {
            system_prompt,
            messages: input.messages,
        };

        match self.gateway.stream_chat(request).await {
            Ok(handle) => Ok(handle),
            Err(e) => {
                warn!("Completion call failed: {e}");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use borderpass_domain::{QuestionKind, StreamEvent};
    use std::sync::Mutex;
    use tokio::sync::mpsc;

    /// Gateway double that records the request and replays canned events.
    struct FakeGateway {
        events: Vec<StreamEvent>,
        seen: Mutex<Vec<CompletionRequest>>,
    }

    impl FakeGateway {
        fn new(events: Vec<StreamEvent>) -> Self {
            Self {
                events,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CompletionGateway for FakeGateway {
        async fn stream_chat(
            &self,
            request: CompletionRequest,
        ) -> Result<StreamHandle, GatewayError> {
            self.seen.lock().unwrap().push(request);
            let (tx, rx) = mpsc::channel(8);
            for event in self.events.clone() {
                tx.send(event).await.map_err(|e| GatewayError::Other(e.to_string()))?;
            }
            Ok(StreamHandle::new(rx))
        }
    }

    /// Gateway double that always fails.
    struct FailingGateway;

    #[async_trait]
    impl CompletionGateway for FailingGateway {
        async fn stream_chat(
            &self,
            _request: CompletionRequest,
        ) -> Result<StreamHandle, GatewayError> {
            Err(GatewayError::ConnectionError("refused".to_string()))
        }
    }

    fn input() -> AssistInput {
        AssistInput {
            messages: vec![Message::user("Can I skip this?")],
            current_question: Question::new("email", QuestionKind::ShortText, "Email?")
                .required()
                .with_input_type("email"),
            responses: ResponseStore::new(),
        }
    }

    #[tokio::test]
    async fn relays_the_stream_and_sends_context() {
        let gateway = Arc::new(FakeGateway::new(vec![
            StreamEvent::Delta("You can't ".to_string()),
            StreamEvent::Delta("skip required fields.".to_string()),
            StreamEvent::Completed("You can't skip required fields.".to_string()),
        ]));
        let use_case = AssistUseCase::new(gateway.clone());

        let handle = use_case.execute(input()).await.unwrap();
        let text = handle.collect_text().await.unwrap();
        assert_eq!(text, "You can't skip required fields.");

        let seen = gateway.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].system_prompt.contains("entering their email address"));
        assert_eq!(seen[0].messages.len(), 1);
    }

    #[tokio::test]
    async fn gateway_failure_surfaces_as_one_error() {
        let use_case = AssistUseCase::new(Arc::new(FailingGateway));
        let err = use_case.execute(input()).await.unwrap_err();
        assert!(matches!(err, AssistError::Gateway(_)));
    }

    #[tokio::test]
    async fn empty_conversation_is_rejected() {
        let use_case = AssistUseCase::new(Arc::new(FailingGateway));
        let mut empty = input();
        empty.messages.clear();
        let err = use_case.execute(empty).await.unwrap_err();
        assert!(matches!(err, AssistError::EmptyConversation));
    }
}

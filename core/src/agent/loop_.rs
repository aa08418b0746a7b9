use crate::agent::{ContextBuilder, HistoryMode, Persona};
use crate::error::{BuddyError, Result};
use crate::session::Turn;
use crate::traits::{ChatMessage, ChatRequest, ChatResponse, Provider};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_MAX_ITERATIONS: usize = 8;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Emitted while a turn is in flight, before the runner blocks on something.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnProgress {
    Thinking,
    ToolCall { name: String },
}

pub type ProgressCallback = Arc<dyn Fn(TurnProgress) + Send + Sync>;

/// Runs one request/response cycle against the model, dispatching any tool
/// calls to the persona's registry. Holds no per-conversation state.
pub struct AgentLoop {
    provider: Arc<dyn Provider>,
    persona: Arc<Persona>,
    context_builder: ContextBuilder,
    max_iterations: usize,
    request_timeout: Duration,
    progress: Option<ProgressCallback>,
}

impl AgentLoop {
    pub fn new(provider: Arc<dyn Provider>, persona: Arc<Persona>) -> Self {
        let context_builder = ContextBuilder::new(persona.instructions());
        Self {
            provider,
            persona,
            context_builder,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            progress: None,
        }
    }

    /// At least one backend call is always allowed.
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max.max(1);
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_history_mode(mut self, mode: HistoryMode) -> Self {
        self.context_builder = self.context_builder.with_history_mode(mode);
        self
    }

    pub fn with_progress(mut self, callback: ProgressCallback) -> Self {
        self.progress = Some(callback);
        self
    }

    fn notify(&self, event: TurnProgress) {
        if let Some(ref progress) = self.progress {
            progress(event);
        }
    }

    async fn call_backend(&self, request: ChatRequest<'_>) -> Result<ChatResponse> {
        let timeout_ms = self.request_timeout.as_millis() as u64;
        let result = tokio::time::timeout(self.request_timeout, self.provider.chat(request))
            .await
            .unwrap_or_else(|_| Err(BuddyError::Timeout(timeout_ms)));

        if let Err(ref e) = result {
            warn!(provider = self.provider.name(), "Model backend call failed: {}", e);
        }
        result
    }

    pub async fn run_turn(&self, user_input: &str, prior_turns: &[Turn]) -> Result<String> {
        let tools = self.persona.tools();
        let specs = tools.specs();
        let mut messages = self.context_builder.build_messages(prior_turns, user_input);

        for iteration in 1..=self.max_iterations {
            let request = ChatRequest {
                messages: &messages,
                tools: if specs.is_empty() { None } else { Some(specs.as_slice()) },
            };

            self.notify(TurnProgress::Thinking);
            debug!(
                iteration,
                messages = messages.len(),
                persona = self.persona.name(),
                "Calling model backend"
            );
            let response = self.call_backend(request).await?;

            if !response.has_tool_calls() {
                let answer = response.text.unwrap_or_default();
                if answer.trim().is_empty() {
                    return Err(BuddyError::MalformedResponse(
                        "model returned neither text nor tool calls".to_string(),
                    ));
                }
                return Ok(answer);
            }

            if let Some(unknown) = response
                .tool_calls
                .iter()
                .find(|call| tools.get(&call.name).is_none())
            {
                return Err(BuddyError::UnregisteredTool(unknown.name.clone()));
            }

            if iteration == self.max_iterations {
                break;
            }

            messages.push(ChatMessage::assistant_with_tool_calls(
                response.text_or_empty(),
                response.tool_calls.clone(),
            ));

            for call in response.tool_calls {
                self.notify(TurnProgress::ToolCall {
                    name: call.name.clone(),
                });
                debug!(tool = %call.name, id = %call.id, "Dispatching tool call");
                let output = tools.execute(&call.name, &call.arguments)?;
                messages.push(ChatMessage::tool_result(call.id, output));
            }
        }

        Err(BuddyError::RunawayLoop {
            max_iterations: self.max_iterations,
        })
    }
}

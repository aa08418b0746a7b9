use crate::agent::AgentLoop;
use crate::error::{BuddyError, ErrorKind, Result};
use crate::session::{SessionId, SessionStore, Turn};
use std::sync::Arc;
use tracing::info;

pub const GREETING: &str = "👋 Salam! I'm your AI Health Buddy.\nTell me what you need: medical help, mental support, or meal planning!";

/// Entry points the chat front-end calls into.
pub struct HealthBuddy {
    agent: Arc<AgentLoop>,
    sessions: SessionStore,
}

impl HealthBuddy {
    pub fn new(agent: AgentLoop) -> Self {
        Self {
            agent: Arc::new(agent),
            sessions: SessionStore::new(),
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn on_session_start(&self, id: SessionId) -> &'static str {
        info!(session = %id, "Session started");
        self.sessions.start(id);
        GREETING
    }

    /// Runs one turn for the session. The user turn is recorded up front; the
    /// assistant turn only once an answer exists, so a failed or dropped turn
    /// never leaves a partial reply in the transcript.
    pub async fn on_message(&self, id: &SessionId, text: &str) -> Result<String> {
        let handle = self
            .sessions
            .get(id)
            .ok_or_else(|| BuddyError::UnknownSession(id.to_string()))?;

        let mut session = handle.lock().await;
        let prior = session.turns().to_vec();
        session.push(Turn::user(text));

        let answer = self.agent.run_turn(text, &prior).await?;
        session.push(Turn::assistant(answer.clone()));
        Ok(answer)
    }

    pub fn on_session_end(&self, id: &SessionId) {
        if self.sessions.end(id) {
            info!(session = %id, "Session ended");
        }
    }
}

/// Text shown to the user when a turn fails. Never phrased as advice.
pub fn render_failure(err: &BuddyError) -> String {
    match err.kind() {
        ErrorKind::Configuration => format!(
            "⚠️ [error] Health Buddy is misconfigured and cannot answer: {}",
            err
        ),
        ErrorKind::Backend => format!(
            "⚠️ [error] Health Buddy is unavailable right now ({}). No advice was generated; please try again later.",
            err
        ),
        ErrorKind::RunawayLoop => format!(
            "⚠️ [error] Health Buddy could not finish this request: {}",
            err
        ),
    }
}

pub mod agent;
pub mod chat;
pub mod config;
pub mod error;
#[cfg(feature = "messaging")]
pub mod messaging;
pub mod providers;
pub mod session;
pub mod tools;
pub mod traits;

#[cfg(test)]
mod testing;

pub use agent::{AgentLoop, ContextBuilder, HistoryMode, Persona, ToolRegistry, TurnProgress};
pub use chat::{GREETING, HealthBuddy, render_failure};
pub use config::Config;
pub use error::{BuddyError, ErrorKind};
pub use providers::*;
pub use session::{Role, Session, SessionId, SessionStore, Turn};
pub use tools::*;
pub use traits::*;

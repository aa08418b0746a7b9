pub mod context;
pub mod loop_;
pub mod persona;
pub mod registry;

pub use context::{ContextBuilder, HistoryMode};
pub use loop_::{AgentLoop, TurnProgress};
pub use persona::Persona;
pub use registry::ToolRegistry;

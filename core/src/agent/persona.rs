use crate::agent::ToolRegistry;
use crate::error::Result;
use crate::tools::{MealPlanTool, MedicalAdviceTool, MentalSupportTool};
use std::sync::Arc;

pub const HEALTH_BUDDY_NAME: &str = "AI Health Buddy";

pub const HEALTH_BUDDY_INSTRUCTIONS: &str = "You are a friendly AI Health Buddy that provides:
- Basic medical suggestions
- Mental wellness tips
- Meal plans based on goals
- Keep your answers short and friendly. Use the tools available to help users.";

/// Identity presented to the model. Immutable once built.
pub struct Persona {
    name: String,
    instructions: String,
    tools: ToolRegistry,
}

impl Persona {
    pub fn new(name: impl Into<String>, instructions: impl Into<String>, tools: ToolRegistry) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
            tools,
        }
    }

    pub fn health_buddy() -> Result<Self> {
        let tools = ToolRegistry::new()
            .with_tool(Arc::new(MedicalAdviceTool))?
            .with_tool(Arc::new(MentalSupportTool))?
            .with_tool(Arc::new(MealPlanTool))?;
        Ok(Self::new(HEALTH_BUDDY_NAME, HEALTH_BUDDY_INSTRUCTIONS, tools))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_buddy_declares_three_tools() {
        let persona = Persona::health_buddy().unwrap();
        assert_eq!(persona.name(), "AI Health Buddy");
        assert_eq!(
            persona.tools().names(),
            vec!["give_medical_advice", "provide_mental_support", "plan_meal"]
        );
        assert!(persona.instructions().contains("short and friendly"));
    }
}

use crate::error::{BuddyError, Result};
use crate::traits::{Tool, ToolSpec};
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Result<()> {
        if self.get(tool.name()).is_some() {
            return Err(BuddyError::DuplicateTool(tool.name().to_string()));
        }
        self.tools.push(tool);
        Ok(())
    }

    pub fn with_tool(mut self, tool: Arc<dyn Tool>) -> Result<Self> {
        self.register(tool)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    pub fn specs(&self) -> Vec<ToolSpec> {
        self.tools.iter().map(|t| t.spec()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Runs the named tool. A name the registry does not know means the model
    /// and the persona disagree about capabilities.
    pub fn execute(&self, name: &str, arguments: &str) -> Result<String> {
        let tool = self
            .get(name)
            .ok_or_else(|| BuddyError::UnregisteredTool(name.to_string()))?;
        tool.execute(arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{MealPlanTool, MedicalAdviceTool, medical_advice::FEVER_ADVICE};

    #[test]
    fn duplicate_names_are_rejected() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(MedicalAdviceTool)).unwrap();
        let err = registry.register(Arc::new(MedicalAdviceTool)).unwrap_err();
        assert!(matches!(err, BuddyError::DuplicateTool(ref name) if name == "give_medical_advice"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn execute_dispatches_by_name() {
        let registry = ToolRegistry::new()
            .with_tool(Arc::new(MedicalAdviceTool))
            .unwrap()
            .with_tool(Arc::new(MealPlanTool))
            .unwrap();
        let reply = registry
            .execute("give_medical_advice", r#"{"symptom":"mild fever"}"#)
            .unwrap();
        assert_eq!(reply, FEVER_ADVICE);
        assert_eq!(registry.names(), vec!["give_medical_advice", "plan_meal"]);
    }

    #[test]
    fn unknown_tool_is_configuration_error() {
        let registry = ToolRegistry::new();
        let err = registry.execute("send_whatsapp_message", "{}").unwrap_err();
        assert!(err.is_configuration());
    }
}

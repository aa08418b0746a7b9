use crate::config::Config;
use crate::error::{BuddyError, Result};
use crate::providers::OpenAIProvider;
use crate::traits::Provider;
use std::sync::Arc;

const GEMINI_KEY_VARS: &[&str] = &["GEMINI_API_KEY", "HEALTHBUDDY_GEMINI_API_KEY"];
const OPENAI_KEY_VARS: &[&str] = &["OPENAI_API_KEY", "HEALTHBUDDY_OPENAI_API_KEY"];

/// Builds the configured backend. A missing credential fails here, at
/// startup, rather than on the first message.
pub fn create_provider(config: &Config) -> Result<Arc<dyn Provider>> {
    create_provider_with_env(config, |name| std::env::var(name).ok())
}

pub fn create_provider_with_env(
    config: &Config,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Arc<dyn Provider>> {
    let provider_name = config.provider.as_deref().unwrap_or("gemini");

    let mut provider = match provider_name.to_lowercase().as_str() {
        "gemini" => {
            let api_key = resolve_api_key_with_fallback(GEMINI_KEY_VARS, &config.api_key, &env)?;
            OpenAIProvider::gemini(api_key)
        }
        "openai" => {
            let api_key = resolve_api_key_with_fallback(OPENAI_KEY_VARS, &config.api_key, &env)?;
            OpenAIProvider::new(api_key)
        }
        _ => {
            return Err(BuddyError::Configuration(format!(
                "Unknown provider: {}. Available: gemini, openai",
                provider_name
            )));
        }
    };

    if let Some(model) = &config.model {
        provider = provider.with_model(model.clone());
    }
    if let Some(base_url) = &config.base_url {
        provider = provider.with_base_url(base_url.clone());
    }

    Ok(Arc::new(provider.with_temperature(config.temperature)))
}

fn resolve_api_key_with_fallback(
    env_vars: &[&str],
    config_key: &str,
    env: impl Fn(&str) -> Option<String>,
) -> Result<String> {
    for var_name in env_vars {
        if let Some(key) = env(var_name).filter(|k| !k.trim().is_empty()) {
            return Ok(key);
        }
    }
    if !config_key.is_empty() {
        Ok(config_key.to_string())
    } else {
        Err(BuddyError::Configuration(format!(
            "No API key found. Set {} or api_key in the config file",
            env_vars[0]
        )))
    }
}

/// Configuration for the idea generation engine
use serde::{Deserialize, Serialize};

/// Upper bound on ideas per request; mind-map branches wider than this are
/// unreadable, and hosted models are prompted for 3-5 anyway.
const MAX_SUPPORTED_IDEAS: usize = 10;

/// Configuration for an idea-generation backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdeaEngineConfig {
    /// Model name or identifier sent to hosted backends
    pub model_name: String,

    /// Sampling temperature for hosted backends
    pub temperature: f32,

    /// Completion token budget; enough for 3-5 short ideas
    pub max_tokens: u32,

    /// Maximum number of ideas returned per request
    pub max_ideas: usize,

    /// Maximum words per idea label (prompt asks for 1-5)
    pub max_words_per_idea: usize,

    /// Request timeout for hosted backends, in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for IdeaEngineConfig {
    fn default() -> Self {
        Self {
            model_name: "meta-llama/llama-3.3-8b-instruct:free".to_string(),
            temperature: 0.7,
            max_tokens: 200,
            max_ideas: 5,
            max_words_per_idea: 5,
            request_timeout_ms: 15_000,
        }
    }
}

impl IdeaEngineConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model_name.is_empty() {
            return Err("model_name cannot be empty".to_string());
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err("temperature must be between 0.0 and 2.0".to_string());
        }

        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than 0".to_string());
        }

        if self.max_ideas == 0 {
            return Err("max_ideas must be greater than 0".to_string());
        }

        if self.max_ideas > MAX_SUPPORTED_IDEAS {
            return Err(format!(
                "max_ideas cannot exceed {} (wider branches are unreadable)",
                MAX_SUPPORTED_IDEAS
            ));
        }

        if self.max_words_per_idea == 0 {
            return Err("max_words_per_idea must be greater than 0".to_string());
        }

        if self.request_timeout_ms == 0 {
            return Err("request_timeout_ms must be greater than 0".to_string());
        }

        Ok(())
    }
}

//! Idea generator trait and the built-in local backend
//!
//! [`IdeaGenerator`] is the boundary the mind-map core calls through. Hosted
//! chat-completion backends implement it by sending [`crate::build_prompt`]
//! output and running the reply through [`crate::parse_ideas`];
//! [`KeywordIdeaGenerator`] implements it locally with deterministic
//! templates so the application works offline and tests stay hermetic.

use crate::config::IdeaEngineConfig;
use crate::error::Result;

/// Registry name of the built-in keyword-template generator.
pub const KEYWORD_GENERATOR_NAME: &str = "keyword-template";

// Expansion angles applied to the node label, in emission order.
const ANGLES: &[&str] = &["benefits", "risks", "examples", "next steps", "open questions"];

/// Asynchronous source of child-node suggestions.
///
/// Implementations return an ordered list of short labels (typically 3-5
/// items, 1-5 words each). An `Ok(vec![])` result means the backend had
/// nothing usable; callers treat that like a failure and fall back.
#[async_trait::async_trait]
pub trait IdeaGenerator: Send + Sync {
    async fn suggest(&self, node_label: &str, parent_label: Option<&str>) -> Result<Vec<String>>;
}

/// Deterministic local generator: expands the node label with fixed angles.
///
/// Output depends only on the label and the config, so repeated calls give
/// identical suggestions. The label head is truncated so every idea stays
/// within `max_words_per_idea`.
pub struct KeywordIdeaGenerator {
    config: IdeaEngineConfig,
}

impl KeywordIdeaGenerator {
    pub fn new(config: IdeaEngineConfig) -> Self {
        Self { config }
    }

    /// Leading words of the label that leave room for the longest angle.
    fn topic_head(&self, label: &str) -> String {
        // Longest angle is two words.
        let budget = self.config.max_words_per_idea.saturating_sub(2).max(1);
        label
            .split_whitespace()
            .take(budget)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[async_trait::async_trait]
impl IdeaGenerator for KeywordIdeaGenerator {
    async fn suggest(&self, node_label: &str, _parent_label: Option<&str>) -> Result<Vec<String>> {
        let head = self.topic_head(node_label);
        if head.is_empty() {
            // Nothing to expand; the caller substitutes its fallback set.
            return Ok(Vec::new());
        }

        let ideas: Vec<String> = ANGLES
            .iter()
            .take(self.config.max_ideas)
            .map(|angle| format!("{} {}", head, angle))
            .collect();

        tracing::debug!(label = node_label, count = ideas.len(), "generated local ideas");
        Ok(ideas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> KeywordIdeaGenerator {
        KeywordIdeaGenerator::new(IdeaEngineConfig::default())
    }

    #[tokio::test]
    async fn test_suggestions_are_deterministic() {
        let generator = generator();
        let first = generator.suggest("Solar power", None).await.unwrap();
        let second = generator.suggest("Solar power", None).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
        assert_eq!(first[0], "Solar power benefits");
    }

    #[tokio::test]
    async fn test_word_budget_is_respected() {
        let generator = generator();
        let ideas = generator
            .suggest("A very long node label with many words", None)
            .await
            .unwrap();

        for idea in ideas {
            assert!(idea.split_whitespace().count() <= 5, "too many words: {idea}");
        }
    }

    #[tokio::test]
    async fn test_blank_label_yields_no_ideas() {
        let generator = generator();
        let ideas = generator.suggest("   ", None).await.unwrap();
        assert!(ideas.is_empty());
    }

    #[tokio::test]
    async fn test_max_ideas_cap() {
        let config = IdeaEngineConfig {
            max_ideas: 2,
            ..IdeaEngineConfig::default()
        };
        let generator = KeywordIdeaGenerator::new(config);
        let ideas = generator.suggest("Topic", None).await.unwrap();
        assert_eq!(ideas.len(), 2);
    }
}

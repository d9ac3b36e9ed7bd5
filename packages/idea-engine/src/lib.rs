/// IdeaSpark Idea Engine - Child-Node Suggestion Service
///
/// This crate provides the idea-generation boundary for the IdeaSpark mind
/// mapper: given the label of a node (and optionally its parent's label for
/// context), a generator asynchronously returns a short ordered list of
/// child-node suggestions.
///
/// # Features
///
/// - **Opaque Generator Trait**: hosted chat-completion backends and local
///   heuristic generators plug in behind the same [`IdeaGenerator`] trait
/// - **Chat Output Parsing**: robust parsing of raw model output (numbered
///   lists, bullets, stray headings) into clean 1-5 word idea labels
/// - **Deterministic Local Generator**: keyword-template generator used as
///   the default backend and in tests, no network required
/// - **Versioned Registry**: generators register under name+version with one
///   active generator per family
///
/// # Example
///
/// ```
/// use ideaspark_idea_engine::{IdeaEngineConfig, IdeaGenerator, KeywordIdeaGenerator};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let generator = KeywordIdeaGenerator::new(IdeaEngineConfig::default());
///     let ideas = generator.suggest("Solar power", Some("Renewable energy")).await?;
///
///     assert!(!ideas.is_empty());
///     Ok(())
/// }
/// ```
pub mod config;
pub mod error;
pub mod generator;
pub mod parse;
pub mod registry;

// Re-export main types
pub use config::IdeaEngineConfig;
pub use error::{IdeaEngineError, Result};
pub use generator::{IdeaGenerator, KeywordIdeaGenerator, KEYWORD_GENERATOR_NAME};
pub use parse::{build_prompt, parse_ideas, SYSTEM_PROMPT};
pub use registry::{GeneratorRegistry, RegistryError, ResolvedGenerator};

//! Prompt construction and chat-completion output parsing
//!
//! Hosted backends are instructed to return one idea per line, 1-5 words,
//! without numbering. Smaller models follow that loosely, so parsing also
//! strips numbered-list prefixes ("1. ", "2) ") and bullets ("- ", "* "),
//! and drops lines that look like leftover headings or instructions.

use regex::Regex;
use std::sync::OnceLock;

/// System prompt sent to hosted chat-completion backends.
pub const SYSTEM_PROMPT: &str = "You are a creative mind mapping assistant. \
    Generate concise, insightful ideas that expand on concepts. Each idea \
    should be 1-5 words only, and each idea on a new line.";

// List prefixes the model was told not to use but emits anyway.
const LIST_PREFIX_PATTERN: &str = r"^\s*(?:\d+[.)]\s+|[-*]\s+)";

// Parsing tolerates slightly wordier lines than the prompt asks for.
const MAX_PARSED_WORDS: usize = 7;

/// Build the user prompt for a node, with optional parent context.
///
/// # Examples
///
/// ```
/// use ideaspark_idea_engine::build_prompt;
///
/// let prompt = build_prompt("Solar power", Some("Renewable energy"));
/// assert!(prompt.contains("\"Solar power\""));
/// assert!(prompt.contains("\"Renewable energy\""));
/// ```
pub fn build_prompt(node_label: &str, parent_label: Option<&str>) -> String {
    let mut prompt = format!(
        "Generate 3-5 concise, distinct child concepts or actionable ideas \
         for a mind map node titled \"{}\"",
        node_label
    );

    if let Some(parent) = parent_label.filter(|p| !p.trim().is_empty()) {
        prompt.push_str(&format!(" which is under the parent node \"{}\"", parent));
    }

    prompt.push_str(
        ". Each idea should be on a new line. Do not use any numbering or \
         bullet points. Each idea should be 1-5 words.",
    );

    prompt
}

/// Parse raw chat-completion output into clean idea labels.
///
/// Splits on newlines, strips list prefixes, trims whitespace, and drops:
/// - empty lines
/// - lines longer than 7 words (leftover prose, not an idea)
/// - lines ending with ':' (headings like "Here are some ideas:")
///
/// Returns ideas in the order the model produced them. An empty result means
/// the output was unusable; callers decide whether to fall back.
pub fn parse_ideas(raw: &str) -> Vec<String> {
    static LIST_PREFIX: OnceLock<Regex> = OnceLock::new();
    let list_prefix = LIST_PREFIX.get_or_init(|| {
        Regex::new(LIST_PREFIX_PATTERN).expect("list prefix pattern is valid")
    });

    raw.lines()
        .map(|line| list_prefix.replace(line, "").trim().to_string())
        .filter(|line| {
            let words = line.split_whitespace().count();
            words > 0 && words <= MAX_PARSED_WORDS && !line.ends_with(':')
        })
        .collect()
}

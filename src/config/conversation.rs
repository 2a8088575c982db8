//! Conversation action configuration

use serde::Deserialize;

/// Tunables for the action-specific prompts
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationConfig {
    /// Minimum word count requested from the summarizer
    #[serde(default = "default_summary_min_words")]
    pub summary_min_words: u32,

    /// Number of questions requested from the question generator
    #[serde(default = "default_question_count")]
    pub question_count: u32,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            summary_min_words: default_summary_min_words(),
            question_count: default_question_count(),
        }
    }
}

fn default_summary_min_words() -> u32 {
    8000
}

fn default_question_count() -> u32 {
    20
}

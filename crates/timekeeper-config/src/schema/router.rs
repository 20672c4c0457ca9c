//! Intent routing and session-control word lists.

use serde::{Deserialize, Serialize};
use timekeeper_common::locale::{EXIT_WORDS, TIME_KEYWORDS};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Substrings that route an utterance to the time responder.
    pub time_keywords: Vec<String>,
    /// Whole inputs that end the session (compared case-insensitively).
    pub exit_words: Vec<String>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            time_keywords: TIME_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            exit_words: EXIT_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

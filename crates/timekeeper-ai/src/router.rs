//! Intent router: decides which responder handles a turn.
//!
//! Classification is a substring test of the lower-cased utterance
//! against a keyword list. There is no tokenization, so a keyword
//! also matches inside longer words ("час" matches "часто").

use timekeeper_common::locale::TIME_KEYWORDS;

use crate::{Message, Role};

/// Characters trimmed from both ends of an utterance before matching.
const EDGE_PUNCTUATION: &[char] = &[',', '.', '!', '?'];

/// Which branch a turn takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Answer with the current UTC time.
    Time,
    /// Forward the conversation to the model.
    General,
    /// Nothing to answer.
    Terminate,
}

/// Routes utterances by keyword membership.
#[derive(Debug, Clone)]
pub struct IntentRouter {
    /// Lower-cased time keywords.
    time_keywords: Vec<String>,
}

impl IntentRouter {
    pub fn new<I, S>(time_keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            time_keywords: time_keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Classify the conversation by its last message.
    ///
    /// An empty conversation, or one whose last message is not from the
    /// user, terminates without a reply.
    pub fn classify(&self, messages: &[Message]) -> Intent {
        match messages.last() {
            Some(last) if last.role == Role::User => {
                if self.needs_time(&last.content) {
                    Intent::Time
                } else {
                    Intent::General
                }
            }
            _ => Intent::Terminate,
        }
    }

    /// Whether `text` asks for the current time.
    pub fn needs_time(&self, text: &str) -> bool {
        let query = text.to_lowercase();
        let query = query.trim_matches(EDGE_PUNCTUATION);
        self.time_keywords.iter().any(|k| query.contains(k.as_str()))
    }

    pub fn keywords(&self) -> &[String] {
        &self.time_keywords
    }
}

impl Default for IntentRouter {
    fn default() -> Self {
        Self::new(TIME_KEYWORDS)
    }
}

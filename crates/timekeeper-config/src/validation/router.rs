//! Router section validation.

use crate::schema::TimekeeperConfig;

pub(crate) fn validate_router(errors: &mut Vec<String>, config: &TimekeeperConfig) {
    let router = &config.router;

    // A blank keyword is a substring of every input.
    check_word_list(errors, "router.time_keywords", &router.time_keywords);
    // A blank exit word would turn an empty line into "quit".
    check_word_list(errors, "router.exit_words", &router.exit_words);
}

fn check_word_list(errors: &mut Vec<String>, name: &str, words: &[String]) {
    if words.is_empty() {
        errors.push(format!("{name} must not be empty"));
    }
    if words.iter().any(|w| w.trim().is_empty()) {
        errors.push(format!("{name} must not contain blank entries"));
    }
}

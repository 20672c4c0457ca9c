//! User-facing strings and the built-in word lists.
//!
//! The bot speaks Russian; keyword lists also carry the English forms.

/// Words whose presence marks a request for the current time.
pub const TIME_KEYWORDS: &[&str] = &[
    "time",
    "час",
    "время",
    "который час",
    "текущее время",
    "сколько времени",
];

/// Inputs that end the interactive session.
pub const EXIT_WORDS: &[&str] = &["выход", "exit", "quit"];

pub const BANNER: &str = "⏰ Точное время: Бот готов (введите 'выход' для завершения)";
pub const USER_PROMPT: &str = "Вы: ";
pub const BOT_PREFIX: &str = "Бот: ";

/// Prefix of every time reply; the ISO-8601 timestamp follows.
pub const TIME_REPLY_PREFIX: &str = "Текущее время UTC: ";

pub const TIME_ERROR: &str = "Ошибка определения времени";
pub const MODEL_ERROR: &str = "Ошибка при обработке";
pub const TRANSIENT_ERROR: &str = "Временная ошибка системы";

//! The interactive read-dispatch-print loop.

use std::io::Write;
use std::sync::Arc;

use timekeeper_ai::{Dispatcher, Message, Role};
use timekeeper_common::locale::{BANNER, BOT_PREFIX, TRANSIENT_ERROR, USER_PROMPT};
use timekeeper_common::TimekeeperError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, error};

/// Read lines from `input` until an exit word or end of input.
///
/// Every turn starts from a fresh single-message conversation. Faults
/// inside a turn are reported to the user and the loop carries on; only
/// a failing `input` or `output` stream ends it with an error.
pub async fn run<R, W>(
    dispatcher: Arc<Dispatcher>,
    exit_words: &[String],
    mut input: R,
    output: &mut W,
) -> timekeeper_common::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(output, "{BANNER}")?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{USER_PROMPT}")?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            debug!("end of input");
            writeln!(output)?;
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim(),
            Err(e) => {
                report_fault(output, &TimekeeperError::Turn(format!("input is not UTF-8: {e}")))?;
                continue;
            }
        };

        if is_exit_word(line, exit_words) {
            break;
        }

        match run_turn(&dispatcher, line).await {
            Ok(Some(reply)) => writeln!(output, "{BOT_PREFIX}{reply}")?,
            Ok(None) => {}
            Err(e) => report_fault(output, &e)?,
        }
    }
    Ok(())
}

/// Case-insensitive whole-input match against the exit words.
///
/// A blank line is never an exit, whatever the list holds.
pub fn is_exit_word(line: &str, exit_words: &[String]) -> bool {
    if line.is_empty() {
        return false;
    }
    let line = line.to_lowercase();
    exit_words.iter().any(|w| w.to_lowercase() == line)
}

/// Dispatch one utterance on its own task so a panic becomes an error.
async fn run_turn(
    dispatcher: &Arc<Dispatcher>,
    line: &str,
) -> timekeeper_common::Result<Option<String>> {
    let dispatcher = Arc::clone(dispatcher);
    let conversation = vec![Message::user(line)];

    let state = tokio::spawn(async move { dispatcher.dispatch(conversation).await })
        .await
        .map_err(|e| TimekeeperError::Turn(e.to_string()))?;

    Ok(state
        .into_iter()
        .last()
        .filter(|m| m.role == Role::Assistant)
        .map(|m| m.content))
}

fn report_fault<W: Write>(output: &mut W, err: &TimekeeperError) -> std::io::Result<()> {
    error!("System error: {err}");
    writeln!(output, "{BOT_PREFIX}{TRANSIENT_ERROR}")
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use timekeeper_ai::{AiClient, AiError, AiResponse, TokenUsage};
    use timekeeper_common::locale::EXIT_WORDS;

    struct CannedClient(&'static str);

    #[async_trait]
    impl AiClient for CannedClient {
        async fn send_message(&self, _messages: &[Message]) -> Result<AiResponse, AiError> {
            Ok(AiResponse {
                content: self.0.to_string(),
                usage: TokenUsage::default(),
            })
        }
    }

    struct PanickingClient;

    #[async_trait]
    impl AiClient for PanickingClient {
        async fn send_message(&self, _messages: &[Message]) -> Result<AiResponse, AiError> {
            panic!("model adapter bug");
        }
    }

    fn exit_words() -> Vec<String> {
        EXIT_WORDS.iter().map(|w| w.to_string()).collect()
    }

    async fn session(client: Arc<dyn AiClient>, input: &[u8]) -> String {
        let dispatcher = Arc::new(Dispatcher::new(client));
        let mut output = Vec::new();
        run(dispatcher, &exit_words(), input, &mut output)
            .await
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn exit_word_ends_session_without_reply() {
        for word in ["выход", "EXIT", "Quit", "  ВЫХОД  "] {
            let input = format!("{word}\nКоторый час?\n");
            let out = session(Arc::new(CannedClient("unused")), input.as_bytes()).await;
            assert_eq!(out, format!("{BANNER}\n{USER_PROMPT}"), "word {word:?}");
        }
    }

    #[tokio::test]
    async fn time_question_prints_timestamp() {
        let out = session(Arc::new(CannedClient("unused")), "Который час?\nexit\n".as_bytes()).await;
        let reply = out
            .lines()
            .find_map(|l| l.split_once(BOT_PREFIX).map(|(_, r)| r))
            .expect("a bot reply");
        let stamp = reply
            .strip_prefix("Текущее время UTC: ")
            .expect("time template");
        assert!(stamp.ends_with("+00:00"), "got {stamp}");
    }

    #[tokio::test]
    async fn general_question_prints_model_text() {
        let out = session(
            Arc::new(CannedClient("Отлично!")),
            "Привет, как дела?\nquit\n".as_bytes(),
        )
        .await;
        assert!(out.contains("Бот: Отлично!\n"), "got {out}");
    }

    #[tokio::test]
    async fn panicking_turn_reports_and_continues() {
        let out = session(
            Arc::new(PanickingClient),
            "Привет\nКоторый час?\nвыход\n".as_bytes(),
        )
        .await;
        assert!(out.contains("Бот: Временная ошибка системы\n"), "got {out}");
        assert!(out.contains("Бот: Текущее время UTC: "), "got {out}");
    }

    #[tokio::test]
    async fn invalid_utf8_line_reports_and_continues() {
        let mut input = b"\xff\xfe\n".to_vec();
        input.extend_from_slice("Привет\n".as_bytes());
        let out = session(Arc::new(CannedClient("ответ")), &input).await;
        assert!(out.contains("Бот: Временная ошибка системы\n"), "got {out}");
        assert!(out.contains("Бот: ответ\n"), "got {out}");
    }

    #[tokio::test]
    async fn end_of_input_ends_session() {
        let out = session(Arc::new(CannedClient("ok")), b"").await;
        assert_eq!(out, format!("{BANNER}\n{USER_PROMPT}\n"));
    }

    #[tokio::test]
    async fn each_turn_sends_only_the_new_message() {
        use std::sync::Mutex;

        struct Recorder(Mutex<Vec<usize>>);

        #[async_trait]
        impl AiClient for Recorder {
            async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError> {
                self.0.lock().unwrap().push(messages.len());
                Ok(AiResponse {
                    content: "ok".into(),
                    usage: TokenUsage::default(),
                })
            }
        }

        let recorder = Arc::new(Recorder(Mutex::new(Vec::new())));
        session(recorder.clone(), "раз\nдва\nтри\n".as_bytes()).await;
        assert_eq!(*recorder.0.lock().unwrap(), vec![1, 1, 1]);
    }

    #[tokio::test]
    async fn blank_line_goes_to_model_even_with_blank_exit_word() {
        let dispatcher = Arc::new(Dispatcher::new(Arc::new(CannedClient("пусто"))));
        let words = vec![String::new(), "exit".to_string()];
        let mut output = Vec::new();
        run(dispatcher, &words, "\nexit\n".as_bytes(), &mut output)
            .await
            .unwrap();

        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("Бот: пусто\n"), "got {out}");
        assert!(!is_exit_word("", &words));
    }

    #[test]
    fn exit_word_matching_is_whole_input() {
        let words = exit_words();
        assert!(is_exit_word("Exit", &words));
        assert!(!is_exit_word("exit please", &words));
        assert!(!is_exit_word("", &words));
    }
}

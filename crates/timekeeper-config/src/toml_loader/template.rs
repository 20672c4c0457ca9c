//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Timekeeper Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[model]
# base_url = "http://localhost:11434"   # OLLAMA_HOST takes precedence
# name = "llama3.2:latest"
# temperature = 0.0          # 0.0-2.0
# request_timeout_secs = 120 # 1-3600
# connect_timeout_secs = 10  # 1-300

[router]
# time_keywords = ["time", "час", "время", "который час", "текущее время", "сколько времени"]
# exit_words = ["выход", "exit", "quit"]

[logging]
# level = "info"             # trace, debug, info, warn, error
"##
    .to_string()
}

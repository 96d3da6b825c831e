pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

pub const COMPLETIONS_PATH: &str = "/completions";
pub const MODERATIONS_PATH: &str = "/moderations";

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_EVENT_STREAM: &str = "text/event-stream";

pub const CONNECT_TIMEOUT_SECS: u64 = 30;
pub const READ_TIMEOUT_SECS: u64 = 60;

pub(crate) const ENV_API_KEY: &str = "COMPLETIONS_API_KEY";
pub(crate) const ENV_BASE_URL: &str = "COMPLETIONS_BASE_URL";
pub(crate) const ENV_REQUEST_TIMEOUT: &str = "COMPLETIONS_REQUEST_TIMEOUT_SECS";
pub(crate) const ENV_CONFIG_FILE: &str = "COMPLETIONS_CONFIG_FILE";
pub(crate) const DEFAULT_CONFIG_FILE: &str = "./config.json";

pub(crate) const SSE_DATA_PREFIX: &str = "data:";
pub(crate) const SSE_DONE: &str = "[DONE]";

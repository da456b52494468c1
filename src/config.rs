//! Client configuration: backend endpoints and context-window sizes.
//!
//! DESIGN
//! ======
//! The client reads no environment variables. `ClientConfig::default()` is the
//! production configuration; tests construct variants directly.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default path of the analysis endpoint.
pub const DEFAULT_ANALYZE_ENDPOINT: &str = "/analyze";
/// Default path of the chat endpoint.
pub const DEFAULT_CHAT_ENDPOINT: &str = "/chat";
/// Number of trailing history entries replayed with each chat request.
pub const DEFAULT_HISTORY_WINDOW: usize = 10;
/// Number of characters of resume/job text included in the chat context.
pub const DEFAULT_PREVIEW_CHARS: usize = 500;

/// Runtime configuration shared by the backend client and chat state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub analyze_endpoint: String,
    pub chat_endpoint: String,
    pub history_window: usize,
    pub preview_chars: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            analyze_endpoint: DEFAULT_ANALYZE_ENDPOINT.to_owned(),
            chat_endpoint: DEFAULT_CHAT_ENDPOINT.to_owned(),
            history_window: DEFAULT_HISTORY_WINDOW,
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

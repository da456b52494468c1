//! Client error taxonomy shared by both controllers.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is terminal for the action that triggered it. Analysis
//! failures surface as a blocking notice; chat failures surface as a fixed
//! bot-authored fallback message in the transcript.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Shown when either analysis input is blank.
pub const VALIDATION_MESSAGE: &str = "Please provide both resume and job description.";
/// Used when `/analyze` reports failure without an `error` string.
pub const DEFAULT_ANALYSIS_ERROR: &str = "Analysis failed";
/// Chat fallback for network errors and non-2xx responses.
pub const CHAT_CONNECTION_FALLBACK: &str =
    "Sorry, I'm having trouble connecting. Please check your internet connection.";
/// Chat fallback for responses carrying `success: false`.
pub const CHAT_APPLICATION_FALLBACK: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("resume and job description are both required")]
    Validation,
    #[error("transport error: {0}")]
    Transport(String),
    #[error("{0}")]
    Analysis(String),
    #[error("chat transport error: {0}")]
    ChatTransport(String),
    #[error("chat request reported failure")]
    ChatApplication,
    #[error("request already in flight")]
    Busy,
}

impl ClientError {
    /// Stable machine-readable code, used in log records.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation => "E_VALIDATION",
            Self::Transport(_) => "E_TRANSPORT",
            Self::Analysis(_) => "E_ANALYSIS",
            Self::ChatTransport(_) => "E_CHAT_TRANSPORT",
            Self::ChatApplication => "E_CHAT_APPLICATION",
            Self::Busy => "E_BUSY",
        }
    }

    /// Level at which the failure is logged: `error` for transport
    /// failures, `debug` for rejected duplicates, `warn` otherwise.
    pub fn log_level(&self) -> log::Level {
        match self {
            Self::Transport(_) | Self::ChatTransport(_) => log::Level::Error,
            Self::Busy => log::Level::Debug,
            Self::Validation | Self::Analysis(_) | Self::ChatApplication => log::Level::Warn,
        }
    }

    /// Text shown to the user for this failure, or `None` when the failure
    /// is not user-visible.
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Validation => Some(VALIDATION_MESSAGE.to_owned()),
            Self::Transport(detail) | Self::Analysis(detail) => Some(format!("Analysis failed: {detail}")),
            Self::ChatTransport(_) => Some(CHAT_CONNECTION_FALLBACK.to_owned()),
            Self::ChatApplication => Some(CHAT_APPLICATION_FALLBACK.to_owned()),
            Self::Busy => None,
        }
    }
}

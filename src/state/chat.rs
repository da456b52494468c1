//! Chat widget state: transcript, rolling history, and context snapshot.
//!
//! DESIGN
//! ======
//! The transcript is what the widget shows; the history is what the backend
//! sees. Fallback bot messages land only in the transcript, and a turn enters
//! the history only after the backend answered it successfully.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::net::types::{ChatContextSnapshot, ChatMessage, ChatRequest};
use crate::state::analysis::AnalysisContext;
use crate::state::events::AnalysisCompleted;

/// Canned prompts offered as one-click buttons.
pub const QUICK_QUESTIONS: [&str; 3] = [
    "How can I improve my match score?",
    "Which missing skill should I learn first?",
    "How should I tailor my resume for this job?",
];

/// Who authored a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Bot,
}

/// A single message shown in the chat widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub id: String,
    pub author: Author,
    pub content: String,
    /// Local `HH:MM` at the time the entry was added.
    pub time_label: String,
}

/// State for the chat widget.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub open: bool,
    pub input: String,
    pub transcript: Vec<TranscriptEntry>,
    pub history: Vec<ChatMessage>,
    pub context: AnalysisContext,
    /// True while an exchange is in flight; drives the typing indicator.
    pub typing: bool,
    history_window: usize,
    preview_chars: usize,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

/// First `max_chars` characters of `text`.
pub fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Derive the context payload sent with a chat message.
pub fn build_snapshot(context: &AnalysisContext, preview_chars: usize) -> ChatContextSnapshot {
    ChatContextSnapshot {
        has_resume: !context.resume_text.trim().is_empty(),
        has_job: !context.job_text.trim().is_empty(),
        has_analysis: context.last_result.is_some(),
        resume_preview: preview(&context.resume_text, preview_chars),
        job_preview: preview(&context.job_text, preview_chars),
        analysis: context.last_result.clone(),
    }
}

impl ChatState {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            open: false,
            input: String::new(),
            transcript: Vec::new(),
            history: Vec::new(),
            context: AnalysisContext::default(),
            typing: false,
            history_window: config.history_window,
            preview_chars: config.preview_chars,
        }
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Adopt the result of a completed analysis immediately.
    pub fn apply_analysis(&mut self, event: &AnalysisCompleted) {
        self.context = AnalysisContext {
            resume_text: event.resume_text.clone(),
            job_text: event.job_text.clone(),
            last_result: Some(event.result.clone()),
        };
    }

    /// Replace the context with the page's current input values.
    pub fn refresh_context(&mut self, current: AnalysisContext) {
        self.context = current;
    }

    /// Trailing slice of the history that accompanies the next request.
    pub fn history_window(&self) -> &[ChatMessage] {
        let skip = self.history.len().saturating_sub(self.history_window);
        &self.history[skip..]
    }

    pub fn snapshot(&self) -> ChatContextSnapshot {
        build_snapshot(&self.context, self.preview_chars)
    }

    /// Start an exchange from the current input.
    ///
    /// Returns `None` (and changes nothing) when the input is blank or an
    /// exchange is already in flight. Otherwise echoes the message into the
    /// transcript, clears the input, shows the typing indicator, and returns
    /// the request to send.
    pub fn begin_send(&mut self, time_label: &str) -> Option<ChatRequest> {
        let message = self.input.trim().to_owned();
        if message.is_empty() || self.typing {
            return None;
        }
        self.push_entry(Author::User, message.clone(), time_label);
        self.input.clear();
        self.typing = true;
        Some(ChatRequest { message, context: self.snapshot(), history: self.history_window().to_vec() })
    }

    /// Apply the outcome of the exchange started for `message`.
    ///
    /// Success appends the reply to the transcript and records both turns in
    /// the history. Failure appends the matching fallback text only.
    pub fn finish_send(&mut self, message: &str, outcome: Result<String, ClientError>, time_label: &str) {
        self.typing = false;
        match outcome {
            Ok(reply) => {
                self.push_entry(Author::Bot, reply.clone(), time_label);
                self.history.push(ChatMessage::user(message));
                self.history.push(ChatMessage::assistant(reply));
            }
            Err(err) => {
                if let Some(fallback) = err.user_message() {
                    self.push_entry(Author::Bot, fallback, time_label);
                }
            }
        }
    }

    fn push_entry(&mut self, author: Author, content: String, time_label: &str) {
        self.transcript.push(TranscriptEntry {
            id: uuid::Uuid::new_v4().to_string(),
            author,
            content,
            time_label: time_label.to_owned(),
        });
    }
}

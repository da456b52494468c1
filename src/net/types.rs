//! Wire DTOs for the `/analyze` and `/chat` endpoints.
//!
//! DESIGN
//! ======
//! Response types accept the loose shapes the backend emits (missing fields,
//! float scores, extra keys) and convert into strict client types through
//! `into_result`, which is the single place a response's `success` flag is
//! interpreted.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, DEFAULT_ANALYSIS_ERROR};

/// Form field carrying the resume text.
pub const RESUME_FIELD: &str = "resume_text";
/// Form field carrying the job description text.
pub const JOB_FIELD: &str = "job_text";

// =============================================================
// /analyze
// =============================================================

/// Form-encoded body of `POST /analyze`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub job_text: String,
}

impl AnalyzeRequest {
    /// Field name/value pairs in the order they are appended to the form.
    pub fn form_fields(&self) -> [(&'static str, &str); 2] {
        [(RESUME_FIELD, self.resume_text.as_str()), (JOB_FIELD, self.job_text.as_str())]
    }
}

/// Raw `/analyze` response before the `success` flag is interpreted.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub match_score: Option<f64>,
    #[serde(default)]
    pub matching_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
}

impl AnalyzeResponse {
    /// Convert into a strict result.
    ///
    /// # Errors
    ///
    /// Returns `Analysis` with the server message when `success` is false,
    /// and `Transport` when a success response carries no score.
    pub fn into_result(self) -> Result<AnalysisResult, ClientError> {
        if !self.success {
            let message = self
                .error
                .filter(|msg| !msg.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ANALYSIS_ERROR.to_owned());
            return Err(ClientError::Analysis(message));
        }
        let Some(score) = self.match_score else {
            return Err(ClientError::Transport("response missing match_score".to_owned()));
        };
        Ok(AnalysisResult {
            match_score: normalize_score(score),
            matching_skills: self.matching_skills,
            missing_skills: self.missing_skills,
        })
    }
}

/// Structured result of a successful analysis.
///
/// Also sent back to `/chat` as `context.analysis`, so it keeps the
/// backend's snake_case field names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Match percentage, 0..=100.
    pub match_score: u8,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Round a wire score to the nearest integer percentage and clamp to 0..=100.
///
/// Non-finite inputs map to 0.
pub fn normalize_score(raw: f64) -> u8 {
    if !raw.is_finite() {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let score = raw.round().clamp(0.0, 100.0) as u8;
    score
}

// =============================================================
// /chat
// =============================================================

/// Author of a history entry as understood by the chat backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn of the rolling chat history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ChatRole::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: ChatRole::Assistant, content: content.into() }
    }
}

/// Summary of the page's resume/job/analysis state sent with each message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatContextSnapshot {
    pub has_resume: bool,
    pub has_job: bool,
    pub has_analysis: bool,
    pub resume_preview: String,
    pub job_preview: String,
    pub analysis: Option<AnalysisResult>,
}

/// JSON body of `POST /chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub context: ChatContextSnapshot,
    pub history: Vec<ChatMessage>,
}

/// Raw `/chat` response before the `success` flag is interpreted.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub response: Option<String>,
}

impl ChatResponse {
    /// Convert into the bot reply text.
    ///
    /// # Errors
    ///
    /// Returns `ChatApplication` when `success` is false or no reply is present.
    pub fn into_result(self) -> Result<String, ClientError> {
        match (self.success, self.response) {
            (true, Some(reply)) => Ok(reply),
            _ => Err(ClientError::ChatApplication),
        }
    }
}

//! Analysis-side page state: inputs, loading flag, last result, and chart.
//!
//! DESIGN
//! ======
//! A submission is split into `begin_submit` (validate, single-flight guard,
//! build the request) and `finish_submit` (apply the outcome). Both are
//! synchronous so the async controller can run them inside a store closure
//! on either side of the network call.

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

use crate::error::ClientError;
use crate::net::types::{AnalysisResult, AnalyzeRequest};
use crate::state::events::AnalysisCompleted;
use crate::util::chart::ChartSlot;

pub const SAMPLE_RESUME: &str = "Python developer with 3 years experience in web development using React and Django. \
Strong problem-solving skills and team collaboration. Experience with database management using SQL.";

pub const SAMPLE_JOB: &str = "Looking for Python Developer with React experience. Machine Learning knowledge \
preferred. Strong communication skills required. AWS experience is a plus.";

/// Which of the two analysis inputs an action targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputField {
    Resume,
    Job,
}

impl InputField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Resume => "Resume",
            Self::Job => "Job Description",
        }
    }
}

/// Visible panel for an input: paste text or choose a file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Text,
    File,
}

/// Current contents of one input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputSource {
    pub text: String,
    pub mode: InputMode,
    /// Name of the chosen file, if any.
    pub file_name: Option<String>,
}

impl InputSource {
    /// Text as presented to the chat assistant: the field text plus a marker
    /// naming the uploaded file.
    pub fn context_text(&self) -> String {
        match &self.file_name {
            Some(name) => format!("{}\n[Uploaded file: {name}]", self.text),
            None => self.text.clone(),
        }
    }

    fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Resume/job text plus the last analysis result, as read by the chat side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalysisContext {
    pub resume_text: String,
    pub job_text: String,
    pub last_result: Option<AnalysisResult>,
}

/// Qualitative feedback tier for a match score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchTier {
    Excellent,
    Good,
    Moderate,
    Low,
}

impl MatchTier {
    /// Lower bounds are inclusive: 80, 60, 40.
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Moderate,
            _ => Self::Low,
        }
    }

    pub fn feedback(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent match! You have most required skills.",
            Self::Good => "Good match! Consider developing a few more skills.",
            Self::Moderate => "Moderate match. Focus on developing key missing skills.",
            Self::Low => "Low match. Significant skill development needed.",
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::Low => "low",
        }
    }
}

/// Score text as displayed, e.g. `65%`.
pub fn format_score(score: u8) -> String {
    format!("{score}%")
}

/// State for the analysis form and results section.
#[derive(Clone, Debug, Default)]
pub struct AnalysisState {
    pub resume: InputSource,
    pub job: InputSource,
    pub loading: bool,
    pub result: Option<AnalysisResult>,
    pub chart: ChartSlot,
    /// Last user-visible failure message.
    pub notice: Option<String>,
    /// Bumped on each successful analysis so the results section can scroll
    /// itself into view.
    pub reveal_seq: u64,
}

impl AnalysisState {
    pub fn input(&self, field: InputField) -> &InputSource {
        match field {
            InputField::Resume => &self.resume,
            InputField::Job => &self.job,
        }
    }

    fn input_mut(&mut self, field: InputField) -> &mut InputSource {
        match field {
            InputField::Resume => &mut self.resume,
            InputField::Job => &mut self.job,
        }
    }

    pub fn set_text(&mut self, field: InputField, text: String) {
        self.input_mut(field).text = text;
    }

    /// Show the text or file panel for `field`.
    pub fn switch_input(&mut self, field: InputField, mode: InputMode) {
        self.input_mut(field).mode = mode;
    }

    pub fn select_file(&mut self, field: InputField, file_name: Option<String>) {
        self.input_mut(field).file_name = file_name.filter(|name| !name.is_empty());
    }

    pub fn load_sample_data(&mut self) {
        self.resume.text = SAMPLE_RESUME.to_owned();
        self.job.text = SAMPLE_JOB.to_owned();
    }

    pub fn tier(&self) -> Option<MatchTier> {
        self.result.as_ref().map(|r| MatchTier::from_score(r.match_score))
    }

    /// Snapshot of the current inputs and last result for the chat side.
    pub fn context(&self) -> AnalysisContext {
        AnalysisContext {
            resume_text: self.resume.context_text(),
            job_text: self.job.context_text(),
            last_result: self.result.clone(),
        }
    }

    /// Validate inputs and enter the loading state.
    ///
    /// # Errors
    ///
    /// `Busy` while another submission is in flight (state untouched);
    /// `Validation` when either text is blank after trimming.
    pub fn begin_submit(&mut self) -> Result<AnalyzeRequest, ClientError> {
        if self.loading {
            return Err(ClientError::Busy);
        }
        if self.resume.is_blank() || self.job.is_blank() {
            let err = ClientError::Validation;
            self.notice = err.user_message();
            return Err(err);
        }
        self.loading = true;
        self.notice = None;
        Ok(AnalyzeRequest { resume_text: self.resume.text.clone(), job_text: self.job.text.clone() })
    }

    /// Leave the loading state and apply the outcome of a submission.
    ///
    /// On failure the previous results stay on screen untouched.
    ///
    /// # Errors
    ///
    /// Passes the failure through after recording its user message.
    pub fn finish_submit(
        &mut self,
        outcome: Result<AnalysisResult, ClientError>,
    ) -> Result<AnalysisCompleted, ClientError> {
        self.loading = false;
        match outcome {
            Ok(result) => {
                self.chart.replace(result.match_score);
                self.result = Some(result.clone());
                self.notice = None;
                self.reveal_seq += 1;
                Ok(AnalysisCompleted {
                    result,
                    resume_text: self.resume.context_text(),
                    job_text: self.job.context_text(),
                })
            }
            Err(err) => {
                self.notice = err.user_message();
                Err(err)
            }
        }
    }
}

use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::controllers::fake_backend::FakeBackend;
use crate::state::analysis::{InputField, MatchTier, format_score};

fn stores(resume: &str, job: &str) -> (RefCell<AnalysisState>, RefCell<AnalysisEvents>) {
    let mut state = AnalysisState::default();
    state.set_text(InputField::Resume, resume.to_owned());
    state.set_text(InputField::Job, job.to_owned());
    (RefCell::new(state), RefCell::new(AnalysisEvents::default()))
}

// =============================================================
// Success path
// =============================================================

#[test]
fn example_submission_renders_good_match() {
    let backend = FakeBackend::default();
    backend.push_analysis_success(65.0, &["Python", "React"], &["Machine Learning"]);
    let (analysis, events) =
        stores("Python developer, 3 years, React, Django", "Python Developer, React, ML preferred");

    let completed = block_on(submit_analysis(&backend, &analysis, &events)).unwrap();

    assert_eq!(backend.analyze_count(), 1);
    let state = analysis.borrow();
    let result = state.result.as_ref().unwrap();
    assert_eq!(format_score(result.match_score), "65%");
    assert_eq!(state.tier(), Some(MatchTier::Good));
    assert!(state.tier().unwrap().feedback().starts_with("Good match"));
    assert_eq!(result.matching_skills.len(), 2);
    assert_eq!(result.missing_skills.len(), 1);
    assert!(!state.loading);
    assert_eq!(completed.result, *result);
}

#[test]
fn request_carries_both_text_fields() {
    let backend = FakeBackend::default();
    backend.push_analysis_success(90.0, &[], &[]);
    let (analysis, events) = stores("resume body", "job body");

    block_on(submit_analysis(&backend, &analysis, &events)).unwrap();

    let calls = backend.analyze_calls.borrow();
    assert_eq!(calls[0].form_fields(), [("resume_text", "resume body"), ("job_text", "job body")]);
}

#[test]
fn success_publishes_analysis_completed_event() {
    let backend = FakeBackend::default();
    backend.push_analysis_success(81.0, &["SQL"], &[]);
    let (analysis, events) = stores("r", "j");

    block_on(submit_analysis(&backend, &analysis, &events)).unwrap();

    let channel = events.borrow();
    assert_eq!(channel.seq(), 1);
    assert_eq!(channel.latest().map(|ev| ev.result.match_score), Some(81));
    assert_eq!(channel.latest().map(|ev| ev.resume_text.as_str()), Some("r"));
}

#[test]
fn repeated_submissions_keep_one_chart_instance() {
    let backend = FakeBackend::default();
    let (analysis, events) = stores("r", "j");
    for score in [20.0, 55.0, 100.0] {
        backend.push_analysis_success(score, &[], &[]);
        block_on(submit_analysis(&backend, &analysis, &events)).unwrap();
        assert_eq!(analysis.borrow().chart.live_instances(), 1);
    }
    assert_eq!(analysis.borrow().chart.current().map(|c| c.data()), Some([100, 0]));
    assert_eq!(backend.analyze_count(), 3);
}

// =============================================================
// Failure paths
// =============================================================

#[test]
fn blank_inputs_issue_no_request() {
    let backend = FakeBackend::default();
    for (resume, job) in [("", "job"), ("resume", "   "), (" \n", "\t")] {
        let (analysis, events) = stores(resume, job);
        let err = block_on(submit_analysis(&backend, &analysis, &events)).unwrap_err();
        assert_eq!(err, ClientError::Validation);
        assert!(analysis.borrow().notice.is_some());
        assert_eq!(events.borrow().seq(), 0);
    }
    assert_eq!(backend.analyze_count(), 0);
}

#[test]
fn transport_failure_clears_loading_without_partial_update() {
    let backend = FakeBackend::default();
    backend.push_analyze(Err(ClientError::Transport("/analyze returned HTTP 500".to_owned())));
    let (analysis, events) = stores("r", "j");

    let err = block_on(submit_analysis(&backend, &analysis, &events)).unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
    let state = analysis.borrow();
    assert!(!state.loading);
    assert!(state.result.is_none());
    assert_eq!(state.chart.live_instances(), 0);
    assert_eq!(state.notice.as_deref(), Some("Analysis failed: /analyze returned HTTP 500"));
    assert_eq!(events.borrow().seq(), 0);
}

#[test]
fn application_failure_surfaces_server_message() {
    let backend = FakeBackend::default();
    backend.push_analyze(Ok(AnalyzeResponse {
        success: false,
        error: Some("Analysis failed: vectorizer error".to_owned()),
        ..AnalyzeResponse::default()
    }));
    let (analysis, events) = stores("r", "j");

    let err = block_on(submit_analysis(&backend, &analysis, &events)).unwrap_err();

    assert_eq!(err, ClientError::Analysis("Analysis failed: vectorizer error".to_owned()));
    assert!(!analysis.borrow().loading);
    assert_eq!(backend.analyze_count(), 1);
}

#[test]
fn in_flight_submission_rejects_a_second_one() {
    let backend = FakeBackend::default();
    let (analysis, events) = stores("r", "j");
    analysis.borrow_mut().loading = true;

    let err = block_on(submit_analysis(&backend, &analysis, &events)).unwrap_err();

    assert_eq!(err, ClientError::Busy);
    assert_eq!(backend.analyze_count(), 0);
    assert!(analysis.borrow().notice.is_none());
}

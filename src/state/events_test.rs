use super::*;

fn completed(score: u8) -> AnalysisCompleted {
    AnalysisCompleted {
        result: AnalysisResult { match_score: score, matching_skills: Vec::new(), missing_skills: Vec::new() },
        resume_text: "resume".to_owned(),
        job_text: "job".to_owned(),
    }
}

#[test]
fn analysis_events_default_is_empty() {
    let events = AnalysisEvents::default();
    assert_eq!(events.seq(), 0);
    assert!(events.latest().is_none());
}

#[test]
fn publish_bumps_sequence_and_keeps_latest() {
    let mut events = AnalysisEvents::default();
    events.publish(completed(40));
    events.publish(completed(90));
    assert_eq!(events.seq(), 2);
    assert_eq!(events.latest().map(|ev| ev.result.match_score), Some(90));
}

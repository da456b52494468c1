//! Analysis submission flow.

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

use crate::error::ClientError;
use crate::net::api::MatchBackend;
use crate::net::types::AnalyzeResponse;
use crate::state::analysis::AnalysisState;
use crate::state::events::{AnalysisCompleted, AnalysisEvents};
use crate::state::store::StateStore;
use crate::util::notify;

/// Validate the inputs, post them to `/analyze`, and apply the result.
///
/// Publishes `AnalysisCompleted` on success. Every user-visible failure is
/// reported through a blocking notice before it is returned.
///
/// # Errors
///
/// `Validation` for blank inputs (no request is sent), `Busy` while another
/// submission is in flight or the state store is gone, `Transport` for
/// network/HTTP failures, and `Analysis` when the backend reports failure.
pub async fn submit_analysis<B, S, E>(backend: &B, analysis: &S, events: &E) -> Result<AnalysisCompleted, ClientError>
where
    B: MatchBackend,
    S: StateStore<AnalysisState>,
    E: StateStore<AnalysisEvents>,
{
    let request = match analysis.modify(AnalysisState::begin_submit) {
        Some(Ok(request)) => request,
        Some(Err(err)) => return Err(report(err)),
        None => return Err(ClientError::Busy),
    };

    log::info!("sending analysis request");
    let outcome = backend.analyze(&request).await.and_then(AnalyzeResponse::into_result);

    let completed = match analysis.modify(|state| state.finish_submit(outcome)) {
        Some(Ok(completed)) => completed,
        Some(Err(err)) => return Err(report(err)),
        None => return Err(ClientError::Busy),
    };

    log::info!("analysis complete: {}% match", completed.result.match_score);
    events.modify(|channel| channel.publish(completed.clone()));
    Ok(completed)
}

fn report(err: ClientError) -> ClientError {
    log::log!(err.log_level(), "analysis failed [{}]: {err}", err.error_code());
    if let Some(message) = err.user_message() {
        notify::alert(&message);
    }
    err
}

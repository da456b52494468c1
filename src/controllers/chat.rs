//! Chat exchange flow.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::error::ClientError;
use crate::net::api::MatchBackend;
use crate::net::types::ChatResponse;
use crate::state::analysis::AnalysisState;
use crate::state::chat::ChatState;
use crate::state::store::StateStore;
use crate::util::clock;

/// What happened to a send attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Exchange {
    /// Blank input, an exchange already in flight, or a disposed store.
    Skipped,
    Replied(String),
    /// The fallback text was shown in place of a reply.
    Failed(ClientError),
}

/// Send the widget's current input to `/chat`.
///
/// The context snapshot is rebuilt from the analysis page right before the
/// request goes out, so edits made since the last analysis are included.
pub async fn send_message<B, C, A>(backend: &B, chat: &C, analysis: &A) -> Exchange
where
    B: MatchBackend,
    C: StateStore<ChatState>,
    A: StateStore<AnalysisState>,
{
    let current = analysis.inspect(AnalysisState::context).unwrap_or_default();
    let started = chat.modify(|state| {
        state.refresh_context(current);
        state.begin_send(&clock::now_label())
    });
    let Some(Some(request)) = started else {
        return Exchange::Skipped;
    };

    log::info!("sending chat message ({} history entries)", request.history.len());
    let outcome = backend.chat(&request).await.and_then(ChatResponse::into_result);

    let exchange = match &outcome {
        Ok(reply) => Exchange::Replied(reply.clone()),
        Err(err) => {
            log::log!(err.log_level(), "chat failed [{}]: {err}", err.error_code());
            Exchange::Failed(err.clone())
        }
    };
    chat.modify(|state| state.finish_send(&request.message, outcome, &clock::now_label()));
    exchange
}

/// Fill the input with a canned question and send it.
pub async fn quick_question<B, C, A>(backend: &B, chat: &C, analysis: &A, question: &str) -> Exchange
where
    B: MatchBackend,
    C: StateStore<ChatState>,
    A: StateStore<AnalysisState>,
{
    let accepted = chat.modify(|state| {
        if state.typing {
            return false;
        }
        question.clone_into(&mut state.input);
        true
    });
    if accepted != Some(true) {
        return Exchange::Skipped;
    }
    send_message(backend, chat, analysis).await
}

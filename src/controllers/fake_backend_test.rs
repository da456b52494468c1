//! Scripted `MatchBackend` that records every request it receives.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use crate::error::ClientError;
use crate::net::api::MatchBackend;
use crate::net::types::{AnalyzeRequest, AnalyzeResponse, ChatRequest, ChatResponse};

#[derive(Default)]
pub struct FakeBackend {
    pub analyze_calls: RefCell<Vec<AnalyzeRequest>>,
    pub chat_calls: RefCell<Vec<ChatRequest>>,
    analyze_replies: RefCell<VecDeque<Result<AnalyzeResponse, ClientError>>>,
    chat_replies: RefCell<VecDeque<Result<ChatResponse, ClientError>>>,
}

impl FakeBackend {
    pub fn push_analyze(&self, reply: Result<AnalyzeResponse, ClientError>) {
        self.analyze_replies.borrow_mut().push_back(reply);
    }

    pub fn push_analysis_success(&self, score: f64, matching: &[&str], missing: &[&str]) {
        self.push_analyze(Ok(AnalyzeResponse {
            success: true,
            error: None,
            match_score: Some(score),
            matching_skills: matching.iter().map(|s| (*s).to_owned()).collect(),
            missing_skills: missing.iter().map(|s| (*s).to_owned()).collect(),
        }));
    }

    pub fn push_chat(&self, reply: Result<ChatResponse, ClientError>) {
        self.chat_replies.borrow_mut().push_back(reply);
    }

    pub fn push_chat_reply(&self, text: &str) {
        self.push_chat(Ok(ChatResponse { success: true, response: Some(text.to_owned()) }));
    }

    pub fn analyze_count(&self) -> usize {
        self.analyze_calls.borrow().len()
    }

    pub fn chat_count(&self) -> usize {
        self.chat_calls.borrow().len()
    }
}

#[async_trait(?Send)]
impl MatchBackend for FakeBackend {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse, ClientError> {
        self.analyze_calls.borrow_mut().push(request.clone());
        self.analyze_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Transport("no scripted analyze reply".to_owned())))
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ClientError> {
        self.chat_calls.borrow_mut().push(request.clone());
        self.chat_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::ChatTransport("no scripted chat reply".to_owned())))
    }
}

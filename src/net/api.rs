//! HTTP client for the analysis and chat endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): `HttpBackend` returns a transport error, and
//! controller tests substitute their own `MatchBackend`.
//!
//! ERROR HANDLING
//! ==============
//! Network failures, non-2xx statuses, and undecodable bodies all become
//! transport errors. A decoded body is returned as-is; interpreting its
//! `success` flag is the caller's job (see `net::types`).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{AnalyzeRequest, AnalyzeResponse, ChatRequest, ChatResponse};
use crate::config::ClientConfig;
use crate::error::ClientError;

/// Backend seam used by the controllers.
///
/// Futures are `?Send`: the browser runtime is single-threaded and
/// `gloo-net` futures hold JS handles.
#[async_trait(?Send)]
pub trait MatchBackend {
    /// Post resume and job text to the analysis endpoint.
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse, ClientError>;

    /// Post a chat message with its context and history window.
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ClientError>;
}

/// `MatchBackend` that talks to the real endpoints over `fetch`.
#[derive(Clone, Debug, Default)]
pub struct HttpBackend {
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[cfg(any(test, feature = "csr"))]
fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(any(test, feature = "csr"))]
fn http_status_failed_message(endpoint: &str, status: u16) -> String {
    format!("{endpoint} returned HTTP {status}")
}

#[cfg(any(test, not(feature = "csr")))]
fn unavailable_message(endpoint: &str) -> String {
    format!("{endpoint} is only reachable from the browser")
}

#[async_trait(?Send)]
impl MatchBackend for HttpBackend {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse, ClientError> {
        let endpoint = self.config.analyze_endpoint.as_str();
        #[cfg(feature = "csr")]
        {
            let transport = ClientError::Transport;

            let form = web_sys::FormData::new().map_err(|e| transport(format!("{e:?}")))?;
            for (name, value) in request.form_fields() {
                form.append_with_str(name, value).map_err(|e| transport(format!("{e:?}")))?;
            }

            // The browser sets the multipart Content-Type (with boundary) for FormData bodies.
            let resp = gloo_net::http::Request::post(endpoint)
                .body(form)
                .map_err(|e| transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| transport(e.to_string()))?;
            if !is_success_status(resp.status()) {
                return Err(transport(http_status_failed_message(endpoint, resp.status())));
            }
            resp.json::<AnalyzeResponse>().await.map_err(|e| transport(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _request = request;
            Err(ClientError::Transport(unavailable_message(endpoint)))
        }
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ClientError> {
        let endpoint = self.config.chat_endpoint.as_str();
        #[cfg(feature = "csr")]
        {
            let transport = ClientError::ChatTransport;

            let resp = gloo_net::http::Request::post(endpoint)
                .json(request)
                .map_err(|e| transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| transport(e.to_string()))?;
            if !is_success_status(resp.status()) {
                return Err(transport(http_status_failed_message(endpoint, resp.status())));
            }
            resp.json::<ChatResponse>().await.map_err(|e| transport(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _request = request;
            Err(ClientError::ChatTransport(unavailable_message(endpoint)))
        }
    }
}

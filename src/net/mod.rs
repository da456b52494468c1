//! Networking modules for the analysis and chat endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the `MatchBackend` seam and its `gloo-net` implementation;
//! `types` defines the wire schema shared with the backend.

pub mod api;
pub mod types;

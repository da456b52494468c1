//! Async flows that connect UI actions, state, and the backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call these from `spawn_local`; tests call them under
//! `block_on` with a `RefCell` store and a scripted backend. Each flow
//! mutates state only inside `StateStore` closures, before and after its
//! single network call.

pub mod analysis;
pub mod chat;

#[cfg(test)]
#[path = "fake_backend_test.rs"]
mod fake_backend;

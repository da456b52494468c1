//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each controller owns one explicit state object (`analysis`, `chat`)
//! provided to components as an `RwSignal` via context. The only coupling
//! between them is the typed event channel in `events`.

pub mod analysis;
pub mod chat;
pub mod events;
pub mod store;

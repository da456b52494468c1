//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (canvas drawing,
//! clocks, alerts) from component logic so the logic stays natively testable.

pub mod chart;
pub mod clock;
pub mod markdown;
pub mod notify;

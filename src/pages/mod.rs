//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The app has a single page; it owns the analysis dispatch and delegates
//! rendering details to `components`.

pub mod home;

//! Blocking user notifications.
//!
//! In the browser this is `window.alert`; elsewhere the message is only
//! logged so native tests stay deterministic.

/// Show `message` to the user and wait for acknowledgement.
pub fn alert(message: &str) {
    log::warn!("user notice: {message}");
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.alert_with_message(message) {
                log::error!("alert failed: {err:?}");
            }
        }
    }
}

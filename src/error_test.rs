use super::*;

// =============================================================
// user_message
// =============================================================

#[test]
fn validation_message_asks_for_both_inputs() {
    assert_eq!(
        ClientError::Validation.user_message().as_deref(),
        Some("Please provide both resume and job description.")
    );
}

#[test]
fn analysis_and_transport_messages_are_prefixed() {
    assert_eq!(
        ClientError::Analysis("No skills found".to_owned()).user_message().as_deref(),
        Some("Analysis failed: No skills found")
    );
    assert_eq!(
        ClientError::Transport("HTTP 502".to_owned()).user_message().as_deref(),
        Some("Analysis failed: HTTP 502")
    );
}

#[test]
fn chat_errors_map_to_fixed_fallbacks() {
    let connection = ClientError::ChatTransport("offline".to_owned()).user_message();
    assert!(connection.is_some_and(|text| text.contains("trouble connecting")));
    let application = ClientError::ChatApplication.user_message();
    assert!(application.is_some_and(|text| text.contains("encountered an error")));
}

#[test]
fn busy_is_not_user_visible() {
    assert!(ClientError::Busy.user_message().is_none());
}

// =============================================================
// error_code / Display
// =============================================================

#[test]
fn error_codes_are_distinct() {
    let errors = [
        ClientError::Validation,
        ClientError::Transport(String::new()),
        ClientError::Analysis(String::new()),
        ClientError::ChatTransport(String::new()),
        ClientError::ChatApplication,
        ClientError::Busy,
    ];
    for (i, a) in errors.iter().enumerate() {
        for (j, b) in errors.iter().enumerate() {
            if i != j {
                assert_ne!(a.error_code(), b.error_code());
            }
        }
    }
}

#[test]
fn analysis_display_is_server_message() {
    assert_eq!(ClientError::Analysis("bad input".to_owned()).to_string(), "bad input");
}

// =============================================================
// log_level
// =============================================================

#[test]
fn transport_failures_log_at_error_on_both_sides() {
    assert_eq!(ClientError::Transport("HTTP 500".to_owned()).log_level(), log::Level::Error);
    assert_eq!(ClientError::ChatTransport("offline".to_owned()).log_level(), log::Level::Error);
}

#[test]
fn application_and_validation_failures_log_at_warn() {
    assert_eq!(ClientError::Validation.log_level(), log::Level::Warn);
    assert_eq!(ClientError::Analysis("bad input".to_owned()).log_level(), log::Level::Warn);
    assert_eq!(ClientError::ChatApplication.log_level(), log::Level::Warn);
}

#[test]
fn busy_logs_at_debug() {
    assert_eq!(ClientError::Busy.log_level(), log::Level::Debug);
}

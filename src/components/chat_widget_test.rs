use super::*;

#[test]
fn textarea_height_grows_until_the_cap() {
    assert_eq!(textarea_height(0), 0);
    assert_eq!(textarea_height(42), 42);
    assert_eq!(textarea_height(120), 120);
    assert_eq!(textarea_height(480), MAX_INPUT_HEIGHT);
}

#[test]
fn textarea_height_ignores_negative_measurements() {
    assert_eq!(textarea_height(-5), 0);
}

#[test]
fn enter_sends_but_shift_enter_does_not() {
    assert!(is_send_key("Enter", false));
    assert!(!is_send_key("Enter", true));
    assert!(!is_send_key("a", false));
    assert!(!is_send_key("Tab", false));
}

#[test]
fn cleared_input_returns_to_auto_height() {
    assert_eq!(input_height("", 96), None);
    assert_eq!(input_height("", 400), None);
}

#[test]
fn typed_input_grows_up_to_the_cap() {
    assert_eq!(input_height("short", 24), Some(24));
    assert_eq!(input_height("a\nvery\nlong\nmessage\n...", 300), Some(MAX_INPUT_HEIGHT));
}

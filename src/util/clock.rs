//! Wall-clock labels for chat transcript entries.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Format hours and minutes as a two-digit `HH:MM` label.
pub fn format_clock(hours: u32, minutes: u32) -> String {
    format!("{:02}:{:02}", hours % 24, minutes % 60)
}

/// Current local time as `HH:MM`, or an empty label outside the browser.
pub fn now_label() -> String {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        format_clock(now.get_hours(), now.get_minutes())
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

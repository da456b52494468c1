//! Markdown rendering for assistant replies.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

/// Link schemes allowed in rendered replies. Scheme-less (relative) targets
/// are always allowed.
const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Replacement target for links and images with a disallowed scheme.
const BLOCKED_URL: &str = "#";

/// Render a bot reply to HTML.
///
/// Raw HTML in the reply is dropped, link and image targets outside
/// `SAFE_SCHEMES` are replaced with `#`, and single newlines become `<br />`
/// so replies keep the line structure the backend produced.
pub fn render_reply_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::SoftBreak => Some(Event::HardBreak),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
            Some(Event::Start(Tag::Link { link_type, dest_url: guard_url(dest_url), title, id }))
        }
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => {
            Some(Event::Start(Tag::Image { link_type, dest_url: guard_url(dest_url), title, id }))
        }
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

fn guard_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_safe_url(&url) { url } else { CowStr::Borrowed(BLOCKED_URL) }
}

/// True for relative targets and targets whose scheme is in `SAFE_SCHEMES`.
///
/// Browsers ignore whitespace and control characters inside a scheme
/// (`java\tscript:`), so those are stripped before the scheme is read.
pub fn is_safe_url(url: &str) -> bool {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .collect::<String>()
        .to_ascii_lowercase();
    match normalized.find([':', '/', '?', '#']) {
        Some(idx) if normalized[idx..].starts_with(':') => SAFE_SCHEMES.contains(&&normalized[..idx]),
        _ => true,
    }
}

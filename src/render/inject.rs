use std::sync::OnceLock;

use regex::Regex;

/// Comment marker replaced by [`inject_seed`] when present in a page.
pub const SEED_PLACEHOLDER: &str = "<!-- loader-seed -->";

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)<!--\s*loader-seed\s*-->").expect("invalid placeholder regex")
    })
}

fn body_close_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)</body\s*>").expect("invalid body regex"))
}

/// Insert a rendered seed block into a server-rendered page.
///
/// Every seed placeholder comment is replaced. Without a placeholder the block goes right
/// before the last closing `</body>` tag, and pages without a body get the block appended.
pub fn inject_seed(html: &str, block: &str) -> String {
    let placeholder = placeholder_pattern();
    if placeholder.is_match(html) {
        return placeholder
            .replace_all(html, regex::NoExpand(block))
            .into_owned();
    }

    if let Some(close) = body_close_pattern().find_iter(html).last() {
        let mut out = String::with_capacity(html.len() + block.len() + 1);
        out.push_str(&html[..close.start()]);
        out.push_str(block);
        out.push('\n');
        out.push_str(&html[close.start()..]);
        return out;
    }

    let mut out = String::with_capacity(html.len() + block.len() + 1);
    out.push_str(html);
    if !html.is_empty() && !html.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(block);
    out
}

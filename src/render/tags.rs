use crate::models::ScriptDescriptor;

/// Escape a value for use inside a double-quoted HTML attribute.
pub fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render one `<script src>` tag per descriptor, in order.
pub fn render_script_tags(scripts: &[ScriptDescriptor]) -> String {
    scripts
        .iter()
        .map(|script| format!("<script src=\"{}\"></script>", escape_attribute(&script.src)))
        .collect::<Vec<_>>()
        .join("\n")
}

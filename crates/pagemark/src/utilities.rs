//! Utility functions for HTML output.

/// Escape text for use in HTML element content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    result
}

/// Wrap a fragment in a single element
pub fn wrap(tag: &str, content: &str) -> String {
    format!("<{tag}>{content}</{tag}>")
}

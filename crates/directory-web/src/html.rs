//! Small helpers for building HTML by hand

use std::borrow::Cow;

/// Escape text for use in element content and quoted attribute values
#[must_use]
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Build `path?k=v&...`, skipping empty values
#[must_use]
pub fn href(path: &str, params: &[(&str, String)]) -> String {
    let query = params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_plain_text_is_borrowed() {
        assert!(matches!(escape("Emily Johnson"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            escape(r#"<script>alert("x" & 'y')</script>"#),
            "&lt;script&gt;alert(&quot;x&quot; &amp; &#39;y&#39;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_href_encodes_and_skips_empty() {
        assert_eq!(
            href("/employees", &[("q", "ann lee".to_string()), ("page", String::new())]),
            "/employees?q=ann%20lee"
        );
        assert_eq!(href("/employees", &[]), "/employees");
    }
}

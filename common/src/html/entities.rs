//! Escaping for text and attribute values.
//!
//! Plain text gets the markup characters escaped and the extended Latin
//! glyphs most common in names and addresses written as named entities, which
//! survives mail clients that mangle the declared charset.

use regex::Regex;
use std::sync::LazyLock;

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"</?[a-zA-Z][a-zA-Z0-9-]*(\s[^<>]*)?/?>")
        .expect("BUG: hardcoded tag regex is statically valid")
});

const NAMED: &[(char, &str)] = &[
    ('á', "&aacute;"),
    ('é', "&eacute;"),
    ('í', "&iacute;"),
    ('ó', "&oacute;"),
    ('ú', "&uacute;"),
    ('Á', "&Aacute;"),
    ('É', "&Eacute;"),
    ('Í', "&Iacute;"),
    ('Ó', "&Oacute;"),
    ('Ú', "&Uacute;"),
    ('à', "&agrave;"),
    ('è', "&egrave;"),
    ('ì', "&igrave;"),
    ('ò', "&ograve;"),
    ('ù', "&ugrave;"),
    ('À', "&Agrave;"),
    ('È', "&Egrave;"),
    ('â', "&acirc;"),
    ('ê', "&ecirc;"),
    ('î', "&icirc;"),
    ('ô', "&ocirc;"),
    ('û', "&ucirc;"),
    ('ä', "&auml;"),
    ('ë', "&euml;"),
    ('ï', "&iuml;"),
    ('ö', "&ouml;"),
    ('ü', "&uuml;"),
    ('Ä', "&Auml;"),
    ('Ö', "&Ouml;"),
    ('Ü', "&Uuml;"),
    ('ñ', "&ntilde;"),
    ('Ñ', "&Ntilde;"),
    ('ã', "&atilde;"),
    ('õ', "&otilde;"),
    ('ç', "&ccedil;"),
    ('Ç', "&Ccedil;"),
    ('ß', "&szlig;"),
    ('ø', "&oslash;"),
    ('å', "&aring;"),
    ('æ', "&aelig;"),
    ('€', "&euro;"),
    ('£', "&pound;"),
    ('¥', "&yen;"),
    ('©', "&copy;"),
    ('®', "&reg;"),
    ('™', "&trade;"),
    ('°', "&deg;"),
    ('¿', "&iquest;"),
    ('¡', "&iexcl;"),
];

/// Whether `content` carries markup, in which case it is embedded verbatim.
pub fn looks_like_html(content: &str) -> bool {
    HTML_TAG.is_match(content)
}

/// Escapes plain text for element content. Newlines become `<br/>`.
pub fn encode_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\n' => out.push_str("<br/>"),
            '\r' => {}
            other => match NAMED.iter().find(|(c, _)| *c == other) {
                Some((_, entity)) => out.push_str(entity),
                None => out.push(other),
            },
        }
    }
    out
}

/// Element content for a text field: markup as is, anything else encoded.
pub fn text_content(content: &str) -> String {
    if looks_like_html(content) {
        content.to_string()
    } else {
        encode_text(content)
    }
}

/// Escapes a value for a double-quoted attribute.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_accents_and_currency() {
        assert_eq!(encode_text("José €5"), "Jos&eacute; &euro;5");
    }

    #[test]
    fn newlines_become_breaks() {
        assert_eq!(encode_text("a\r\nb\nc"), "a<br/>b<br/>c");
    }

    #[test]
    fn markup_is_left_alone() {
        assert!(looks_like_html("<b>bold</b> text"));
        assert!(looks_like_html("line<br/>line"));
        assert_eq!(text_content("<i>é</i>"), "<i>é</i>");
    }

    #[test]
    fn comparisons_are_not_markup() {
        assert!(!looks_like_html("a < b > c"));
        assert_eq!(text_content("a < b"), "a &lt; b");
    }

    #[test]
    fn attributes_escape_quotes() {
        assert_eq!(escape_attr(r#"a"b&c"#), "a&quot;b&amp;c");
    }
}

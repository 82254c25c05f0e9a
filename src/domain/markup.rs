//! Markup helpers: escaping and markdown-to-text extraction

use pulldown_cmark::{Event, Parser};

/// Escape text for an HTML/XML text node or attribute value
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Extract the plain text of a markdown document, dropping all markup
pub fn plain_text(markdown: &str) -> String {
    let mut out = String::new();
    for event in Parser::new(markdown) {
        match event {
            Event::Text(text) => out.push_str(&text),
            Event::Code(code) => out.push_str(&code),
            Event::SoftBreak | Event::HardBreak => out.push(' '),
            Event::End(_) => {
                if !out.ends_with(' ') && !out.is_empty() {
                    out.push(' ');
                }
            }
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trim text to at most `max_words` words, appending an ellipsis when cut
pub fn trim_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        return words.join(" ");
    }
    let mut out = words[..max_words].join(" ");
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape("a & b <tag> \"q\" 'x'"),
            "a &amp; b &lt;tag&gt; &quot;q&quot; &#39;x&#39;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_plain_text_strips_markup() {
        let text = plain_text("# Title\n\nSome **bold** and `code` here.");
        assert_eq!(text, "Title Some bold and code here.");
    }

    #[test]
    fn test_plain_text_joins_lines() {
        let text = plain_text("line one\nline two");
        assert_eq!(text, "line one line two");
    }

    #[test]
    fn test_trim_words_short_input_untouched() {
        assert_eq!(trim_words("one two three", 25), "one two three");
    }

    #[test]
    fn test_trim_words_truncates_with_ellipsis() {
        assert_eq!(trim_words("a b c d e", 3), "a b c…");
    }
}

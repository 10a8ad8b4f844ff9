//! Cell content: trusted model markup vs. teacher-typed plain text.
//!
//! HTML output injects `TrustedMarkup` verbatim and escapes `PlainText`.
//! The PDF writer has no HTML engine, so both kinds are flattened to lines here.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum CellContent {
    /// HTML fragment from the model (`<ul>`, `<ol>`, `<li>`, `<br>`, `<p>`).
    TrustedMarkup(String),
    /// Teacher input; always escaped.
    PlainText(String),
}

pub fn escape_html(text: &str) -> String {
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

/// Plain text as printed lines. With `preserve_breaks` every `\n` starts a new
/// line; otherwise all whitespace collapses into a single line.
pub fn plain_to_lines(text: &str, preserve_breaks: bool) -> Vec<String> {
    if preserve_breaks {
        let mut lines: Vec<String> = text.lines().map(collapse_whitespace).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        lines
    } else {
        let line = collapse_whitespace(text);
        if line.is_empty() {
            Vec::new()
        } else {
            vec![line]
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

enum ListKind {
    Unordered,
    Ordered(u32),
}

/// Flattens a markup fragment into printed lines.
///
/// `<li>` items become `- item` or `n. item` (nested lists indent two spaces per
/// level); block tags and `<br>` end the current line; other tags are dropped.
pub fn markup_to_lines(markup: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut lists: Vec<ListKind> = Vec::new();
    let mut chars = markup.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '<' => {
                let mut tag = String::new();
                for c in chars.by_ref() {
                    if c == '>' {
                        break;
                    }
                    tag.push(c);
                }
                let tag = tag.trim();
                let closing = tag.starts_with('/');
                let name: String = tag
                    .trim_start_matches('/')
                    .chars()
                    .take_while(|c| c.is_ascii_alphanumeric())
                    .collect::<String>()
                    .to_ascii_lowercase();

                match (name.as_str(), closing) {
                    ("ul", false) => {
                        flush_line(&mut current, &mut lines);
                        lists.push(ListKind::Unordered);
                    }
                    ("ol", false) => {
                        flush_line(&mut current, &mut lines);
                        lists.push(ListKind::Ordered(0));
                    }
                    ("ul" | "ol", true) => {
                        flush_line(&mut current, &mut lines);
                        lists.pop();
                    }
                    ("li", false) => {
                        flush_line(&mut current, &mut lines);
                        let indent = "  ".repeat(lists.len().saturating_sub(1));
                        current.push_str(&indent);
                        match lists.last_mut() {
                            Some(ListKind::Ordered(n)) => {
                                *n += 1;
                                current.push_str(&format!("{n}. "));
                            }
                            _ => current.push_str("- "),
                        }
                    }
                    ("li" | "br" | "p" | "div" | "tr", _) => flush_line(&mut current, &mut lines),
                    _ => {}
                }
            }
            '&' => {
                let mut entity = String::new();
                while let Some(&c) = chars.peek() {
                    if !(c.is_ascii_alphanumeric() || c == '#') || entity.len() > 8 {
                        break;
                    }
                    entity.push(c);
                    chars.next();
                }
                match (decode_entity(&entity), chars.peek()) {
                    (Some(decoded), Some(';')) => {
                        chars.next();
                        push_text(&mut current, decoded);
                    }
                    _ => {
                        current.push('&');
                        for c in entity.chars() {
                            push_text(&mut current, c);
                        }
                    }
                }
            }
            c => push_text(&mut current, c),
        }
    }
    flush_line(&mut current, &mut lines);
    lines
}

fn push_text(current: &mut String, c: char) {
    if c.is_whitespace() {
        if !current.is_empty() && !current.ends_with(' ') {
            current.push(' ');
        }
    } else {
        current.push(c);
    }
}

fn flush_line(current: &mut String, lines: &mut Vec<String>) {
    let line = current.trim_end();
    // A bare bullet marker with no text is not worth a line.
    let marker_only = matches!(line.trim(), "-")
        || line
            .trim()
            .strip_suffix('.')
            .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()));
    if !line.trim().is_empty() && !marker_only {
        lines.push(line.to_string());
    }
    current.clear();
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" | "#39" => Some('\''),
        "nbsp" => Some(' '),
        _ => entity
            .strip_prefix('#')
            .and_then(|n| n.parse::<u32>().ok())
            .and_then(char::from_u32),
    }
}

impl CellContent {
    pub fn to_html(&self) -> String {
        match self {
            CellContent::TrustedMarkup(markup) => markup.clone(),
            CellContent::PlainText(text) => escape_html(text),
        }
    }

    pub fn to_lines(&self, preserve_breaks: bool) -> Vec<String> {
        match self {
            CellContent::TrustedMarkup(markup) => markup_to_lines(markup),
            CellContent::PlainText(text) => plain_to_lines(text, preserve_breaks),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_covers_special_characters() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_plain_text_is_escaped_markup_is_not() {
        let plain = CellContent::PlainText("<script>x</script>".to_string());
        let markup = CellContent::TrustedMarkup("<ul><li>a</li></ul>".to_string());
        assert_eq!(plain.to_html(), "&lt;script&gt;x&lt;/script&gt;");
        assert_eq!(markup.to_html(), "<ul><li>a</li></ul>");
    }

    #[test]
    fn test_unordered_list_to_lines() {
        let lines = markup_to_lines("<ul><li>Satu</li><li>Dua  kata</li></ul>");
        assert_eq!(lines, vec!["- Satu", "- Dua kata"]);
    }

    #[test]
    fn test_ordered_list_numbers_items() {
        let lines = markup_to_lines("<ol>\n  <li>Salam</li>\n  <li>Doa</li>\n  <li>Apersepsi</li>\n</ol>");
        assert_eq!(lines, vec!["1. Salam", "2. Doa", "3. Apersepsi"]);
    }

    #[test]
    fn test_nested_list_indents() {
        let lines = markup_to_lines("<ul><li>Induk<ul><li>Anak</li></ul></li></ul>");
        assert_eq!(lines, vec!["- Induk", "  - Anak"]);
    }

    #[test]
    fn test_entities_and_breaks() {
        let lines = markup_to_lines("Guru &amp; siswa<br>a &lt; b&nbsp;c<br/>R&D");
        assert_eq!(lines, vec!["Guru & siswa", "a < b c", "R&D"]);
    }

    #[test]
    fn test_plain_text_preserves_breaks_only_when_asked() {
        let text = "TP 1\nTP 2\n";
        assert_eq!(plain_to_lines(text, true), vec!["TP 1", "TP 2"]);
        assert_eq!(plain_to_lines(text, false), vec!["TP 1 TP 2"]);
        assert!(plain_to_lines("   ", false).is_empty());
    }
}

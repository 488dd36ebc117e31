/// Escape text for inclusion in HTML or XML content and attribute values.
pub fn escape_markup(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape `text` and turn every line break into `hard_break`.
///
/// `\r\n` counts as a single break.
pub fn line_breaks_to_markup(text: &str, hard_break: &str) -> String {
    escape_markup(text)
        .replace("\r\n", "\n")
        .replace('\n', hard_break)
}

/// Turn a document title into a safe file stem.
///
/// Path separators, control characters and characters Windows rejects are
/// replaced with `_`. Returns "untitled" when nothing usable remains.
pub fn sanitize_file_stem(title: &str) -> String {
    let cleaned: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let cleaned = cleaned.trim_matches('.').trim();
    if cleaned.is_empty() {
        "untitled".to_string()
    } else {
        cleaned.to_string()
    }
}

/// Insert `snippet` at byte offset `pos`, clamped to a char boundary.
///
/// Returns the new text and the byte offset just past the inserted snippet.
pub fn insert_at(text: &str, pos: usize, snippet: &str) -> (String, usize) {
    let mut pos = pos.min(text.len());
    while !text.is_char_boundary(pos) {
        pos -= 1;
    }
    let mut result = String::with_capacity(text.len() + snippet.len());
    result.push_str(&text[..pos]);
    result.push_str(snippet);
    result.push_str(&text[pos..]);
    (result, pos + snippet.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup() {
        assert_eq!(escape_markup("a < b & c > d"), "a &lt; b &amp; c &gt; d");
        assert_eq!(escape_markup(r#"say "hi" it's"#), "say &quot;hi&quot; it&#39;s");
        assert_eq!(escape_markup("plain"), "plain");
    }

    #[test]
    fn test_line_breaks_to_markup() {
        assert_eq!(line_breaks_to_markup("line1\nline2", "<br>"), "line1<br>line2");
        assert_eq!(line_breaks_to_markup("a\r\nb", "<br/>"), "a<br/>b");
        assert_eq!(line_breaks_to_markup("<x>\n", "<br>"), "&lt;x&gt;<br>");
    }

    #[test]
    fn test_sanitize_file_stem() {
        assert_eq!(sanitize_file_stem("My Book"), "My Book");
        assert_eq!(sanitize_file_stem("a/b\\c"), "a_b_c");
        assert_eq!(sanitize_file_stem("what?"), "what_");
        assert_eq!(sanitize_file_stem("tab\there"), "tab_here");
        assert_eq!(sanitize_file_stem("  "), "untitled");
        assert_eq!(sanitize_file_stem(".."), "untitled");
        assert_eq!(sanitize_file_stem("نساج الملاحم"), "نساج الملاحم");
    }

    #[test]
    fn test_insert_at() {
        assert_eq!(insert_at("hello world", 5, ","), ("hello, world".to_string(), 6));
        assert_eq!(insert_at("abc", 100, "!"), ("abc!".to_string(), 4));
        assert_eq!(insert_at("", 0, "x"), ("x".to_string(), 1));
    }

    #[test]
    fn test_insert_at_clamps_to_char_boundary() {
        // 'é' is two bytes; offset 1 falls inside it
        let (text, end) = insert_at("é", 1, "x");
        assert_eq!(text, "xé");
        assert_eq!(end, 1);
    }
}

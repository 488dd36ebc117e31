//! Splits raw editor text into renderable paragraphs.
//!
//! A paragraph is one source line whose trimmed form is non-empty. The
//! sequence is lazy and can be restarted by cloning it or calling
//! [`format_content`] again; nothing is cached between calls.

use std::str::Lines;

/// A borrowed view over one non-blank line of the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paragraph<'a> {
    /// Zero-based line index in the source, blank lines included.
    pub index: usize,
    pub text: &'a str,
}

/// Lazy iterator over the paragraphs of a text.
#[derive(Debug, Clone)]
pub struct Paragraphs<'a> {
    lines: Lines<'a>,
    next_index: usize,
}

impl<'a> Iterator for Paragraphs<'a> {
    type Item = Paragraph<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            let index = self.next_index;
            self.next_index += 1;
            if !line.trim().is_empty() {
                return Some(Paragraph { index, text: line });
            }
        }
        None
    }
}

/// Format `text` into its paragraph sequence.
pub fn format_content(text: &str) -> Paragraphs<'_> {
    Paragraphs {
        lines: text.lines(),
        next_index: 0,
    }
}

/// Join paragraphs back with newlines: the source with blank lines removed.
pub fn normalize(text: &str) -> String {
    format_content(text)
        .map(|p| p.text)
        .collect::<Vec<_>>()
        .join("\n")
}

use crate::app::services::stats::DocumentStats;

/// The manuscript being written. Lives for one authoring session only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub author: String,
    raw_text: String,
}

impl Document {
    /// A fresh, empty manuscript.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            raw_text: String::new(),
        }
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Replace the whole text. Returns false when nothing changed.
    pub fn set_raw_text(&mut self, text: String) -> bool {
        if self.raw_text == text {
            return false;
        }
        self.raw_text = text;
        true
    }

    pub fn is_empty(&self) -> bool {
        self.raw_text.is_empty()
    }

    /// Unsaved work exists whenever there is text; documents are never persisted.
    pub fn is_dirty(&self) -> bool {
        !self.raw_text.is_empty()
    }

    pub fn stats(&self) -> DocumentStats {
        DocumentStats::compute(&self.raw_text)
    }

    pub fn window_title(&self) -> String {
        let marker = if self.is_dirty() { "*" } else { "" };
        format!("{}{} - Kitab", marker, self.title)
    }
}

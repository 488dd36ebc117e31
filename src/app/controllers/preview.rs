use crate::app::domain::Document;
use crate::app::services::preview::PreviewPage;

/// What the preview widget should do after a document change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewUpdate {
    pub html: String,
    /// Jump to the bottom once the new HTML has been laid out.
    pub scroll_to_end: bool,
}

#[derive(Debug, Default)]
pub struct PreviewController {
    last_html: Option<String>,
}

impl PreviewController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the page. Returns `None` when the rendered page is unchanged.
    pub fn refresh(&mut self, doc: &Document, is_live: bool) -> Option<PreviewUpdate> {
        let page = PreviewPage::compose(&doc.title, &doc.author, doc.raw_text(), is_live);
        let html = page.to_helpview_html();
        if self.last_html.as_deref() == Some(html.as_str()) {
            return None;
        }
        self.last_html = Some(html.clone());
        Some(PreviewUpdate {
            html,
            scroll_to_end: is_live,
        })
    }

    /// Forget the cached page so the next refresh always renders.
    pub fn invalidate(&mut self) {
        self.last_html = None;
    }
}

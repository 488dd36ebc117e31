//! Book-page preview composition.
//!
//! [`PreviewPage`] is the layout-independent description of the page; it is
//! turned into the small HTML subset FLTK's HelpView understands.

use super::formatter::{Paragraph, format_content};
use super::text_ops::escape_markup;

/// Fixed page number literal in the page footer.
pub const PAGE_LABEL: &str = "Page 1";

pub const EMPTY_PLACEHOLDER: &str = "Start writing to see the live preview";

/// Marker appended after the last paragraph while live.
pub const LIVE_CARET: &str = "\u{258C}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageBody<'a> {
    Placeholder,
    Paragraphs(Vec<Paragraph<'a>>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewPage<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub body: PageBody<'a>,
    pub show_caret: bool,
}

impl<'a> PreviewPage<'a> {
    /// Compose the page for the current document state.
    ///
    /// Empty content yields the placeholder. Whitespace-only content has no
    /// paragraphs to show but is not "empty", so the page body is an empty
    /// paragraph list followed by the caret when live.
    pub fn compose(title: &'a str, author: &'a str, content: &'a str, is_live: bool) -> Self {
        let body = if content.is_empty() {
            PageBody::Placeholder
        } else {
            PageBody::Paragraphs(format_content(content).collect())
        };
        let show_caret = is_live && matches!(body, PageBody::Paragraphs(_));
        Self {
            title,
            author,
            body,
            show_caret,
        }
    }

    pub fn footer(&self) -> (&str, &'static str) {
        (self.title, PAGE_LABEL)
    }

    /// Render for an FLTK HelpView.
    pub fn to_helpview_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<html><body bgcolor=\"#ffffff\">");
        html.push_str(&format!(
            "<center><h1>{}</h1><hr><p><font color=\"#4b5563\">{}</font></p></center>",
            escape_markup(self.title),
            escape_markup(self.author)
        ));

        match &self.body {
            PageBody::Placeholder => {
                html.push_str(&format!(
                    "<br><br><center><font color=\"#9ca3af\">{}</font></center><br><br>",
                    EMPTY_PLACEHOLDER
                ));
            }
            PageBody::Paragraphs(paragraphs) => {
                let last = paragraphs.len().saturating_sub(1);
                for (i, p) in paragraphs.iter().enumerate() {
                    html.push_str("<p>");
                    html.push_str(&escape_markup(p.text));
                    if self.show_caret && i == last {
                        html.push_str(&caret_html());
                    }
                    html.push_str("</p>");
                }
                if self.show_caret && paragraphs.is_empty() {
                    html.push_str(&format!("<p>{}</p>", caret_html()));
                }
            }
        }

        let (footer_title, page) = self.footer();
        html.push_str(&format!(
            "<hr><table width=\"100%\"><tr><td><font size=\"2\" color=\"#6b7280\">{}</font></td>\
             <td align=\"right\"><font size=\"2\" color=\"#6b7280\">{}</font></td></tr></table>",
            escape_markup(footer_title),
            page
        ));
        html.push_str("</body></html>");
        html
    }
}

fn caret_html() -> String {
    format!(" <font color=\"#8b5cf6\">{}</font>", LIVE_CARET)
}

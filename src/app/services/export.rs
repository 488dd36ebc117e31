//! Export of the current manuscript into downloadable files.
//!
//! Each format has an [`Exporter`] that writes its payload into any
//! `Write + Seek` destination. The table of logical formats, file extensions
//! and MIME types lives in [`EXPORT_TARGETS`] so that the mismatch between the
//! "pdf"/"docx" labels and what is actually written stays visible in one place.

use std::io::{Cursor, Seek, Write};
use std::path::PathBuf;
use std::str::FromStr;

use tracing::{debug, info};

use super::download::DownloadSink;
use super::epub::EpubExporter;
use super::text_ops::{escape_markup, line_breaks_to_markup, sanitize_file_stem};
use crate::app::infrastructure::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Pdf,
    Epub,
    Docx,
}

/// Static description of one export action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportTarget {
    pub format: ExportFormat,
    /// Label the user picks ("pdf", "epub", "docx").
    pub label: &'static str,
    /// Extension actually written. Differs from the label for pdf and docx.
    pub extension: &'static str,
    pub mime_type: &'static str,
}

/// pdf and docx are textual stand-ins (HTML and plain text); epub is a real
/// EPUB 2 container.
pub const EXPORT_TARGETS: &[ExportTarget] = &[
    ExportTarget {
        format: ExportFormat::Pdf,
        label: "pdf",
        extension: "html",
        mime_type: "text/html",
    },
    ExportTarget {
        format: ExportFormat::Epub,
        label: "epub",
        extension: "epub",
        mime_type: "application/epub+zip",
    },
    ExportTarget {
        format: ExportFormat::Docx,
        label: "docx",
        extension: "doc",
        mime_type: "application/msword",
    },
];

impl ExportFormat {
    pub fn all() -> &'static [ExportFormat] {
        &[Self::Pdf, Self::Epub, Self::Docx]
    }

    pub fn target(&self) -> &'static ExportTarget {
        // Every variant has exactly one row in EXPORT_TARGETS
        match self {
            Self::Pdf => &EXPORT_TARGETS[0],
            Self::Epub => &EXPORT_TARGETS[1],
            Self::Docx => &EXPORT_TARGETS[2],
        }
    }

    pub fn label(&self) -> &'static str {
        self.target().label
    }

    /// Menu text for the export action.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF (HTML)",
            Self::Epub => "EPUB",
            Self::Docx => "DOCX (Word 97)",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        EXPORT_TARGETS
            .iter()
            .find(|t| t.label.eq_ignore_ascii_case(wanted))
            .map(|t| t.format)
            .ok_or_else(|| AppError::UnsupportedFormat(s.to_string()))
    }
}

/// One-shot export request. Consumed by [`export`] and not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// Requested format label; validated when the export runs.
    pub format: String,
    pub title: String,
    pub author: String,
    pub content: String,
}

impl ExportRequest {
    pub fn new(
        format: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            format: format.into(),
            title: title.into(),
            author: author.into(),
            content: content.into(),
        }
    }

    pub fn for_format(format: ExportFormat, title: &str, author: &str, content: &str) -> Self {
        Self::new(format.label(), title, author, content)
    }

    /// Whether there is anything worth exporting.
    pub fn has_content(&self) -> bool {
        is_exportable(&self.content)
    }
}

/// Export actions are disabled for empty or whitespace-only content.
pub fn is_exportable(content: &str) -> bool {
    !content.trim().is_empty()
}

/// A fully built payload, ready to hand to a [`DownloadSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub mime_type: &'static str,
    pub data: Vec<u8>,
}

/// Writes one format's payload.
pub trait Exporter {
    fn export<W: Write + Seek>(&self, request: &ExportRequest, writer: &mut W) -> Result<()>;
}

/// Standalone HTML document, used for the "pdf" action.
#[derive(Debug, Default)]
pub struct HtmlExporter;

impl Exporter for HtmlExporter {
    fn export<W: Write + Seek>(&self, request: &ExportRequest, writer: &mut W) -> Result<()> {
        let title = escape_markup(&request.title);
        let html = format!(
            r#"<!DOCTYPE html>
<html dir="auto">
  <head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>
      body {{ font-family: 'Noto Sans Arabic', Arial, sans-serif; }}
      .header {{ text-align: center; margin-bottom: 40px; }}
      .content {{ line-height: 1.8; }}
    </style>
  </head>
  <body>
    <div class="header">
      <h1>{title}</h1>
      <h3>By: {author}</h3>
    </div>
    <div class="content">
      {content}
    </div>
  </body>
</html>
"#,
            author = escape_markup(&request.author),
            content = line_breaks_to_markup(&request.content, "<br>"),
        );
        writer.write_all(html.as_bytes())?;
        Ok(())
    }
}

/// Plain-text document, used for the "docx" action.
#[derive(Debug, Default)]
pub struct PlainTextExporter;

impl Exporter for PlainTextExporter {
    fn export<W: Write + Seek>(&self, request: &ExportRequest, writer: &mut W) -> Result<()> {
        write!(
            writer,
            "{}\n\nBy: {}\n\n{}",
            request.title, request.author, request.content
        )?;
        Ok(())
    }
}

/// Build the artifact for `request`.
///
/// Returns `Ok(None)` when the content is blank. Fails with
/// [`AppError::UnsupportedFormat`] before any payload is built.
pub fn serialize(request: &ExportRequest) -> Result<Option<ExportArtifact>> {
    let format: ExportFormat = request.format.parse()?;
    if !request.has_content() {
        debug!(format = format.label(), "Export skipped: no content");
        return Ok(None);
    }

    let target = format.target();
    let mut buf = Cursor::new(Vec::new());
    match format {
        ExportFormat::Pdf => HtmlExporter.export(request, &mut buf)?,
        ExportFormat::Epub => EpubExporter.export(request, &mut buf)?,
        ExportFormat::Docx => PlainTextExporter.export(request, &mut buf)?,
    }

    Ok(Some(ExportArtifact {
        filename: format!("{}.{}", sanitize_file_stem(&request.title), target.extension),
        mime_type: target.mime_type,
        data: buf.into_inner(),
    }))
}

/// Serialize `request` and hand the result to `sink`.
///
/// Returns the delivered file's location, or `None` when there was nothing
/// to export. The sink only sees fully built payloads.
pub fn export<S: DownloadSink + ?Sized>(
    request: &ExportRequest,
    sink: &mut S,
) -> Result<Option<PathBuf>> {
    let Some(artifact) = serialize(request)? else {
        return Ok(None);
    };
    let location = sink.deliver(&artifact)?;
    info!(
        file = %artifact.filename,
        mime = artifact.mime_type,
        bytes = artifact.data.len(),
        "Export delivered"
    );
    Ok(Some(location))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        delivered: Vec<ExportArtifact>,
    }

    impl DownloadSink for RecordingSink {
        fn deliver(&mut self, artifact: &ExportArtifact) -> Result<PathBuf> {
            self.delivered.push(artifact.clone());
            Ok(PathBuf::from(&artifact.filename))
        }
    }

    fn payload_text(artifact: &ExportArtifact) -> String {
        String::from_utf8(artifact.data.clone()).unwrap()
    }

    #[test]
    fn test_pdf_export_is_html_with_hard_breaks() {
        let request = ExportRequest::new("pdf", "T", "A", "line1\nline2");
        let mut sink = RecordingSink::default();
        let location = export(&request, &mut sink).unwrap();

        assert_eq!(location, Some(PathBuf::from("T.html")));
        assert_eq!(sink.delivered.len(), 1);
        let artifact = &sink.delivered[0];
        assert_eq!(artifact.filename, "T.html");
        assert_eq!(artifact.mime_type, "text/html");

        let html = payload_text(artifact);
        assert!(html.contains("<title>T</title>"));
        assert!(html.contains("<h1>T</h1>"));
        assert!(html.contains("By: A"));
        assert!(html.contains("line1<br>line2"));
    }

    #[test]
    fn test_docx_export_is_plain_text() {
        let request = ExportRequest::new("docx", "T", "A", "body");
        let artifact = serialize(&request).unwrap().unwrap();
        assert_eq!(artifact.filename, "T.doc");
        assert_eq!(artifact.mime_type, "application/msword");
        assert_eq!(payload_text(&artifact), "T\n\nBy: A\n\nbody");
    }

    #[test]
    fn test_epub_export_metadata() {
        let request = ExportRequest::new("epub", "T", "A", "body");
        let artifact = serialize(&request).unwrap().unwrap();
        assert_eq!(artifact.filename, "T.epub");
        assert_eq!(artifact.mime_type, "application/epub+zip");
        // Zip local file header magic
        assert_eq!(&artifact.data[..4], b"PK\x03\x04");
    }

    #[test]
    fn test_unsupported_format_triggers_no_download() {
        let request = ExportRequest::new("csv", "T", "A", "body");
        let mut sink = RecordingSink::default();
        let err = export(&request, &mut sink).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFormat(ref f) if f == "csv"));
        assert!(sink.delivered.is_empty());
    }

    #[test]
    fn test_blank_content_is_a_no_op() {
        for format in ExportFormat::all() {
            for content in ["", "   ", "\n\t\n"] {
                let request = ExportRequest::for_format(*format, "T", "A", content);
                let mut sink = RecordingSink::default();
                assert_eq!(export(&request, &mut sink).unwrap(), None);
                assert!(sink.delivered.is_empty());
            }
        }
    }

    #[test]
    fn test_format_labels_parse_case_insensitively() {
        assert_eq!("PDF".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert_eq!(" epub ".parse::<ExportFormat>().unwrap(), ExportFormat::Epub);
        assert_eq!("docx".parse::<ExportFormat>().unwrap(), ExportFormat::Docx);
        assert!("doc".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_target_table_is_consistent() {
        for format in ExportFormat::all() {
            assert_eq!(format.target().format, *format);
        }
        assert_eq!(ExportFormat::Pdf.target().extension, "html");
        assert_eq!(ExportFormat::Docx.target().extension, "doc");
    }

    #[test]
    fn test_markup_in_title_is_escaped_and_filename_sanitized() {
        let request = ExportRequest::new("pdf", "a/b <c>", "A", "x");
        let artifact = serialize(&request).unwrap().unwrap();
        assert_eq!(artifact.filename, "a_b _c_.html");
        assert!(payload_text(&artifact).contains("<h1>a/b &lt;c&gt;</h1>"));
    }
}

//! EPUB exporter.
//!
//! Packages the manuscript as a single-chapter EPUB 2 book.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::io::{Seek, Write};

use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use super::export::{ExportRequest, Exporter};
use super::text_ops::{escape_markup, line_breaks_to_markup};
use crate::app::infrastructure::error::Result;

const CHAPTER_HREF: &str = "chapter.xhtml";

const CONTAINER_XML: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
  <rootfiles>
    <rootfile full-path="OEBPS/content.opf" media-type="application/oebps-package+xml"/>
  </rootfiles>
</container>"#;

/// Deflate level for every entry except `mimetype`.
const COMPRESSION_LEVEL: i64 = 6;

#[derive(Debug, Default)]
pub struct EpubExporter;

impl Exporter for EpubExporter {
    fn export<W: Write + Seek>(&self, request: &ExportRequest, writer: &mut W) -> Result<()> {
        let mut zip = ZipWriter::new(writer);

        let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        let deflated = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(COMPRESSION_LEVEL));

        let identifier = book_identifier(request);
        let language = detect_language(&request.content);

        // mimetype must be first and uncompressed
        zip.start_file("mimetype", stored)?;
        zip.write_all(b"application/epub+zip")?;

        zip.start_file("META-INF/container.xml", deflated)?;
        zip.write_all(CONTAINER_XML)?;

        zip.start_file("OEBPS/content.opf", deflated)?;
        zip.write_all(generate_opf(request, &identifier, language).as_bytes())?;

        zip.start_file("OEBPS/toc.ncx", deflated)?;
        zip.write_all(generate_ncx(request, &identifier).as_bytes())?;

        zip.start_file(format!("OEBPS/{}", CHAPTER_HREF), deflated)?;
        zip.write_all(generate_chapter(request, language).as_bytes())?;

        zip.finish()?;
        Ok(())
    }
}

fn generate_opf(request: &ExportRequest, identifier: &str, language: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<package xmlns="http://www.idpf.org/2007/opf" version="2.0" unique-identifier="BookId">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:opf="http://www.idpf.org/2007/opf">
    <dc:title>{title}</dc:title>
    <dc:creator opf:role="aut">{author}</dc:creator>
    <dc:identifier id="BookId">{identifier}</dc:identifier>
    <dc:language>{language}</dc:language>
  </metadata>
  <manifest>
    <item id="ncx" href="toc.ncx" media-type="application/x-dtbncx+xml"/>
    <item id="chapter" href="{chapter}" media-type="application/xhtml+xml"/>
  </manifest>
  <spine toc="ncx">
    <itemref idref="chapter"/>
  </spine>
</package>
"#,
        title = escape_markup(&request.title),
        author = escape_markup(&request.author),
        identifier = escape_markup(identifier),
        language = escape_markup(language),
        chapter = CHAPTER_HREF,
    )
}

fn generate_ncx(request: &ExportRequest, identifier: &str) -> String {
    let title = escape_markup(&request.title);
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE ncx PUBLIC "-//NISO//DTD ncx 2005-1//EN" "http://www.daisy.org/z3986/2005/ncx-2005-1.dtd">
<ncx xmlns="http://www.daisy.org/z3986/2005/ncx/" version="2005-1">
  <head>
    <meta name="dtb:uid" content="{identifier}"/>
    <meta name="dtb:depth" content="1"/>
    <meta name="dtb:totalPageCount" content="0"/>
    <meta name="dtb:maxPageNumber" content="0"/>
  </head>
  <docTitle>
    <text>{title}</text>
  </docTitle>
  <navMap>
    <navPoint id="navpoint-1" playOrder="1">
      <navLabel>
        <text>{title}</text>
      </navLabel>
      <content src="{chapter}"/>
    </navPoint>
  </navMap>
</ncx>
"#,
        identifier = escape_markup(identifier),
        chapter = CHAPTER_HREF,
    )
}

fn generate_chapter(request: &ExportRequest, language: &str) -> String {
    // XHTML 1.1 has no `dir` attribute; direction goes through CSS
    let direction = if language == "ar" { "rtl" } else { "ltr" };
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.1//EN" "http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd">
<html xmlns="http://www.w3.org/1999/xhtml" xml:lang="{language}">
  <head>
    <title>{title}</title>
    <style type="text/css">body {{ direction: {direction}; }}</style>
  </head>
  <body>
    <h1>{title}</h1>
    <h2>{author}</h2>
    <div>{content}</div>
  </body>
</html>
"#,
        title = escape_markup(&request.title),
        author = escape_markup(&request.author),
        content = line_breaks_to_markup(&request.content, "<br/>"),
    )
}

/// Stable identifier derived from the manuscript itself.
fn book_identifier(request: &ExportRequest) -> String {
    let mut hasher = DefaultHasher::new();
    request.title.hash(&mut hasher);
    request.author.hash(&mut hasher);
    request.content.hash(&mut hasher);
    format!("urn:kitab:{:016x}", hasher.finish())
}

/// "ar" when Arabic letters outnumber Latin ones, otherwise "en".
fn detect_language(text: &str) -> &'static str {
    let (arabic, latin) = text.chars().fold((0usize, 0usize), |(ar, la), c| {
        if ('\u{0600}'..='\u{06FF}').contains(&c) {
            (ar + 1, la)
        } else if c.is_ascii_alphabetic() {
            (ar, la + 1)
        } else {
            (ar, la)
        }
    });
    if arabic > latin { "ar" } else { "en" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    fn build(request: &ExportRequest) -> ZipArchive<Cursor<Vec<u8>>> {
        let mut buf = Cursor::new(Vec::new());
        EpubExporter.export(request, &mut buf).unwrap();
        ZipArchive::new(Cursor::new(buf.into_inner())).unwrap()
    }

    fn read_entry(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
        let mut file = archive.by_name(name).unwrap();
        let mut s = String::new();
        file.read_to_string(&mut s).unwrap();
        s
    }

    #[test]
    fn test_mimetype_is_first_and_stored() {
        let mut archive = build(&ExportRequest::new("epub", "T", "A", "body"));
        let first = archive.by_index(0).unwrap();
        assert_eq!(first.name(), "mimetype");
        assert_eq!(first.compression(), CompressionMethod::Stored);
        drop(first);
        assert_eq!(read_entry(&mut archive, "mimetype"), "application/epub+zip");
    }

    #[test]
    fn test_package_contents() {
        let mut archive = build(&ExportRequest::new("epub", "T & Co", "A", "line1\nline2"));
        assert_eq!(archive.len(), 5);

        let opf = read_entry(&mut archive, "OEBPS/content.opf");
        assert!(opf.contains("<dc:title>T &amp; Co</dc:title>"));
        assert!(opf.contains(">A</dc:creator>"));
        assert!(opf.contains("<dc:language>en</dc:language>"));

        let chapter = read_entry(&mut archive, "OEBPS/chapter.xhtml");
        assert!(chapter.contains("xmlns=\"http://www.w3.org/1999/xhtml\""));
        assert!(chapter.contains("<h2>A</h2>"));
        assert!(chapter.contains("line1<br/>line2"));

        let ncx = read_entry(&mut archive, "OEBPS/toc.ncx");
        assert!(ncx.contains("<content src=\"chapter.xhtml\"/>"));

        let container = read_entry(&mut archive, "META-INF/container.xml");
        assert!(container.contains("OEBPS/content.opf"));
    }

    #[test]
    fn test_identifier_is_stable() {
        let a = ExportRequest::new("epub", "T", "A", "body");
        let b = ExportRequest::new("epub", "T", "A", "other body");
        assert_eq!(book_identifier(&a), book_identifier(&a.clone()));
        assert_ne!(book_identifier(&a), book_identifier(&b));
    }

    #[test]
    fn test_language_detection() {
        assert_eq!(detect_language("Once upon a time"), "en");
        assert_eq!(detect_language("في زمنٍ بعيد"), "ar");
        assert_eq!(detect_language(""), "en");
    }

    #[test]
    fn test_chapter_is_xhtml_1_1() {
        let mut archive = build(&ExportRequest::new("epub", "T", "A", "في زمنٍ بعيد"));
        let chapter = read_entry(&mut archive, "OEBPS/chapter.xhtml");
        assert!(chapter.contains("<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.1//EN\""));
        assert!(!chapter.contains("<!DOCTYPE html>"));
        assert!(!chapter.contains(" dir="));
        assert!(chapter.contains("xml:lang=\"ar\""));
        assert!(chapter.contains("direction: rtl;"));
    }
}

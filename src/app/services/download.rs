//! Delivery of export artifacts to the user's filesystem.
//!
//! A delivery first claims its final name by creating an empty placeholder
//! with `create_new`, which fails instead of replacing an existing file. The
//! payload is then staged in a hidden `.part` file and renamed over that
//! placeholder. Both files are owned by guards that delete them on drop unless
//! the delivery completed, so a failed delivery leaves nothing behind.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::export::ExportArtifact;
use crate::app::infrastructure::error::{AppError, Result};

/// Receives finished export artifacts.
pub trait DownloadSink {
    /// Store `artifact` and return where it ended up.
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<PathBuf>;
}

/// Saves artifacts into a directory, never overwriting existing files.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Configured folder, else the user's download folder, else the working directory.
    pub fn resolve(configured: Option<&str>) -> Self {
        let dir = configured
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;

        let mut reserved = reserve_path(&self.dir, &artifact.filename)?;
        let name = reserved
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| artifact.filename.clone());
        let mut staged = StagedFile::create(self.dir.join(format!(".{}.part", name)))?;
        staged.write_all(&artifact.data)?;
        staged.commit(&reserved.path)?;
        reserved.committed = true;

        debug!(path = %reserved.path.display(), "Artifact saved");
        Ok(reserved.path.clone())
    }
}

/// Candidate names for `filename`: `name.ext`, `name (1).ext`, ...
fn candidate_names(filename: &str) -> impl Iterator<Item = String> + '_ {
    let (stem, ext) = match filename.rfind('.') {
        Some(dot) if dot > 0 => (&filename[..dot], &filename[dot..]),
        _ => (filename, ""),
    };
    std::iter::once(filename.to_string())
        .chain((1..).map(move |n| format!("{} ({}){}", stem, n, ext)))
}

/// Claim the first free name for `filename` in `dir` by creating an empty
/// placeholder. The returned guard removes it unless committed.
fn reserve_path(dir: &Path, filename: &str) -> Result<StagedFile> {
    for name in candidate_names(filename) {
        let path = dir.join(name);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => {
                return Ok(StagedFile {
                    path,
                    file: None,
                    committed: false,
                });
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Err(AppError::Download(format!("no free name for {}", filename)))
}

/// A temporary file that is removed on drop unless committed.
struct StagedFile {
    path: PathBuf,
    file: Option<fs::File>,
    committed: bool,
}

impl StagedFile {
    fn create(path: PathBuf) -> Result<Self> {
        let file = fs::File::create(&path)?;
        Ok(Self {
            path,
            file: Some(file),
            committed: false,
        })
    }

    fn write_all(&mut self, data: &[u8]) -> Result<()> {
        let file = self
            .file
            .as_mut()
            .ok_or_else(|| AppError::Download("staging file already closed".to_string()))?;
        file.write_all(data)?;
        file.sync_all()?;
        Ok(())
    }

    fn commit(&mut self, target: &Path) -> Result<()> {
        // Close the handle before renaming; Windows refuses to move open files
        self.file.take();
        fs::rename(&self.path, target).map_err(|e| {
            AppError::Download(format!("could not move export into place: {}", e))
        })?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        self.file.take();
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != ErrorKind::NotFound {
                warn!(path = %self.path.display(), error = %e, "Failed to remove staging file");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn artifact(name: &str, data: &[u8]) -> ExportArtifact {
        ExportArtifact {
            filename: name.to_string(),
            mime_type: "text/plain",
            data: data.to_vec(),
        }
    }

    fn dir_entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .flatten()
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_deliver_writes_file_and_leaves_no_staging() {
        let tmp = TempDir::new().unwrap();
        let mut sink = DirectorySink::new(tmp.path());

        let path = sink.deliver(&artifact("Book.html", b"<html/>")).unwrap();

        assert_eq!(path, tmp.path().join("Book.html"));
        assert_eq!(fs::read(&path).unwrap(), b"<html/>");
        assert_eq!(dir_entries(tmp.path()), vec!["Book.html"]);
    }

    #[test]
    fn test_deliver_never_overwrites() {
        let tmp = TempDir::new().unwrap();
        let mut sink = DirectorySink::new(tmp.path());

        sink.deliver(&artifact("Book.doc", b"one")).unwrap();
        let second = sink.deliver(&artifact("Book.doc", b"two")).unwrap();

        assert_eq!(second, tmp.path().join("Book (1).doc"));
        assert_eq!(fs::read(tmp.path().join("Book.doc")).unwrap(), b"one");
        assert_eq!(fs::read(second).unwrap(), b"two");
    }

    #[test]
    fn test_deliver_creates_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("exports").join("drafts");
        let mut sink = DirectorySink::new(&nested);

        let path = sink.deliver(&artifact("x.epub", b"PK")).unwrap();
        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }

    #[test]
    fn test_failed_commit_removes_staging_file() {
        let tmp = TempDir::new().unwrap();
        let staging = tmp.path().join(".x.part");
        {
            let mut staged = StagedFile::create(staging.clone()).unwrap();
            staged.write_all(b"partial").unwrap();
            // Target directory does not exist, so the rename fails
            let target = tmp.path().join("missing").join("x");
            assert!(matches!(staged.commit(&target), Err(AppError::Download(_))));
            assert!(staging.exists());
        }
        assert!(!staging.exists());
        assert!(dir_entries(tmp.path()).is_empty());
    }

    #[test]
    fn test_reserve_path_without_extension() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("notes"), b"").unwrap();
        let mut reserved = reserve_path(tmp.path(), "notes").unwrap();
        assert_eq!(reserved.path, tmp.path().join("notes (1)"));
        reserved.committed = true;
    }

    #[test]
    fn test_reserved_name_is_not_handed_out_twice() {
        let tmp = TempDir::new().unwrap();
        let first = reserve_path(tmp.path(), "Book.txt").unwrap();
        let second = reserve_path(tmp.path(), "Book.txt").unwrap();

        assert_eq!(first.path, tmp.path().join("Book.txt"));
        assert_eq!(second.path, tmp.path().join("Book (1).txt"));
        assert!(first.path.exists() && second.path.exists());

        drop(first);
        drop(second);
        assert!(dir_entries(tmp.path()).is_empty());
    }

    #[test]
    fn test_failed_delivery_releases_reserved_name() {
        let tmp = TempDir::new().unwrap();
        // A directory where the staging file should go makes staging fail
        fs::create_dir(tmp.path().join(".Book.html.part")).unwrap();
        let mut sink = DirectorySink::new(tmp.path());

        assert!(sink.deliver(&artifact("Book.html", b"<html/>")).is_err());
        assert_eq!(dir_entries(tmp.path()), vec![".Book.html.part"]);
    }

    #[test]
    fn test_existing_file_is_untouched_by_later_delivery() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("Book.doc"), b"mine").unwrap();
        let mut sink = DirectorySink::new(tmp.path());

        let path = sink.deliver(&artifact("Book.doc", b"export")).unwrap();

        assert_eq!(path, tmp.path().join("Book (1).doc"));
        assert_eq!(fs::read(tmp.path().join("Book.doc")).unwrap(), b"mine");
        assert_eq!(dir_entries(tmp.path()), vec!["Book (1).doc", "Book.doc"]);
    }

    #[test]
    fn test_resolve_prefers_configured_directory() {
        let sink = DirectorySink::resolve(Some("/tmp/kitab-exports"));
        assert_eq!(sink.dir(), Path::new("/tmp/kitab-exports"));

        let fallback = DirectorySink::resolve(Some("  "));
        assert_ne!(fallback.dir(), Path::new("  "));
    }
}

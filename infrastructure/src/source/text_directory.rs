//! Plain-text document source backed by the local file system.
//!
//! Each document is a text file holding the already-extracted contents of
//! one exam document. Files come either from a directory filtered by
//! extension or from an explicit list.

use async_trait::async_trait;
use exam_extract_application::{DocumentRef, DocumentSourcePort, SourceError};
use exam_extract_domain::SourceDocument;
use glob::{Pattern, glob};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where the source finds its files
#[derive(Debug, Clone)]
enum Origin {
    Directory {
        dir: PathBuf,
        extensions: Vec<String>,
    },
    Files(Vec<PathBuf>),
}

/// Reads document text from `.txt` (or configured) files
#[derive(Debug, Clone)]
pub struct TextDirectorySource {
    origin: Origin,
}

impl TextDirectorySource {
    /// Scan `dir` for files whose extension is in `extensions`.
    ///
    /// Extensions are compared without the leading dot and case-insensitively.
    pub fn directory(dir: impl Into<PathBuf>, extensions: &[String]) -> Self {
        let extensions = extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self {
            origin: Origin::Directory {
                dir: dir.into(),
                extensions,
            },
        }
    }

    /// Read exactly the given files, in the given order.
    pub fn files(files: Vec<PathBuf>) -> Self {
        Self {
            origin: Origin::Files(files),
        }
    }

    fn document_ref(path: &Path) -> DocumentRef {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        DocumentRef::new(name, path.display().to_string())
    }

    fn has_extension(path: &Path, extensions: &[String]) -> bool {
        path.extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .is_some_and(|e| extensions.contains(&e))
    }

    fn scan(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, SourceError> {
        let pattern = format!("{}/*", Pattern::escape(&dir.to_string_lossy()));
        let entries = glob(&pattern).map_err(|e| SourceError::List(e.to_string()))?;

        let mut paths = Vec::new();
        for entry in entries {
            match entry {
                Ok(path) if path.is_file() && Self::has_extension(&path, extensions) => {
                    paths.push(path)
                }
                Ok(_) => {}
                Err(e) => warn!("Skipping unreadable entry: {}", e),
            }
        }
        paths.sort();
        Ok(paths)
    }
}

#[async_trait]
impl DocumentSourcePort for TextDirectorySource {
    fn describe(&self) -> String {
        match &self.origin {
            Origin::Directory { dir, extensions } => {
                format!("{} (*.{})", dir.display(), extensions.join(", *."))
            }
            Origin::Files(files) => format!("{} file(s)", files.len()),
        }
    }

    async fn list_documents(&self) -> Result<Vec<DocumentRef>, SourceError> {
        let paths = match &self.origin {
            Origin::Directory { dir, extensions } => {
                if !dir.is_dir() {
                    return Err(SourceError::NotFound(dir.display().to_string()));
                }
                let paths = Self::scan(dir, extensions)?;
                if paths.is_empty() {
                    warn!(
                        "No *.{} files found in {}",
                        extensions.join(", *."),
                        dir.display()
                    );
                }
                paths
            }
            Origin::Files(files) => {
                if let Some(missing) = files.iter().find(|f| !f.is_file()) {
                    return Err(SourceError::NotFound(missing.display().to_string()));
                }
                files.clone()
            }
        };

        debug!("Found {} document(s) in {}", paths.len(), self.describe());
        Ok(paths.iter().map(|p| Self::document_ref(p)).collect())
    }

    async fn read_document(&self, document: &DocumentRef) -> Result<SourceDocument, SourceError> {
        let bytes = tokio::fs::read(&document.location)
            .await
            .map_err(|e| SourceError::Read {
                name: document.name.clone(),
                message: e.to_string(),
            })?;

        // Extracted text occasionally carries stray bytes; keep what decodes.
        let text = String::from_utf8_lossy(&bytes).into_owned();
        Ok(SourceDocument::new(document.name.clone(), text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn exts(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_lists_matching_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "second").unwrap();
        fs::write(dir.path().join("a.TXT"), "first").unwrap();
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();
        fs::create_dir(dir.path().join("nested.txt")).unwrap();

        let source = TextDirectorySource::directory(dir.path(), &exts(&[".txt"]));
        let docs = source.list_documents().await.unwrap();

        let names: Vec<_> = docs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a.TXT", "b.txt"]);
    }

    #[tokio::test]
    async fn test_missing_directory_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let source = TextDirectorySource::directory(&missing, &exts(&["txt"]));

        let err = source.list_documents().await.unwrap_err();
        assert!(matches!(err, SourceError::NotFound(p) if p.contains("nope")));
    }

    #[tokio::test]
    async fn test_empty_directory_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let source = TextDirectorySource::directory(dir.path(), &exts(&["txt"]));
        assert!(source.list_documents().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reads_document_text() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("exam.txt"), "Question ID ab12\nWhat?").unwrap();

        let source = TextDirectorySource::directory(dir.path(), &exts(&["txt"]));
        let docs = source.list_documents().await.unwrap();
        let doc = source.read_document(&docs[0]).await.unwrap();

        assert_eq!(doc.name, "exam.txt");
        assert_eq!(doc.text, "Question ID ab12\nWhat?");
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_decoded_lossily() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exam.txt");
        fs::write(&path, [b'o', b'k', 0xff]).unwrap();

        let source = TextDirectorySource::files(vec![path]);
        let docs = source.list_documents().await.unwrap();
        let doc = source.read_document(&docs[0]).await.unwrap();
        assert!(doc.text.starts_with("ok"));
    }

    #[tokio::test]
    async fn test_explicit_files_keep_order() {
        let dir = tempfile::tempdir().unwrap();
        let z = dir.path().join("z.txt");
        let a = dir.path().join("a.txt");
        fs::write(&z, "z").unwrap();
        fs::write(&a, "a").unwrap();

        let source = TextDirectorySource::files(vec![z, a]);
        let names: Vec<_> = source
            .list_documents()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["z.txt", "a.txt"]);
    }

    #[tokio::test]
    async fn test_explicit_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = TextDirectorySource::files(vec![dir.path().join("gone.txt")]);
        assert!(matches!(
            source.list_documents().await,
            Err(SourceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_read_failure_names_document() {
        let source = TextDirectorySource::files(Vec::new());
        let doc = DocumentRef::new("ghost.txt", "/definitely/not/here/ghost.txt");

        let err = source.read_document(&doc).await.unwrap_err();
        assert!(matches!(err, SourceError::Read { name, .. } if name == "ghost.txt"));
    }

    #[test]
    fn test_describe_directory() {
        let source = TextDirectorySource::directory("./documents", &exts(&["txt", "text"]));
        assert_eq!(source.describe(), "./documents (*.txt, *.text)");
    }
}

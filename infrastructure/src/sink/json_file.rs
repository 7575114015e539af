//! Question sink backed by a single JSON collection file.
//!
//! The file holds one JSON object keyed by question id:
//!
//! ```json
//! { "ab12": { "id": "ab12", "prompt": "What is X?", ... } }
//! ```
//!
//! An upsert loads the existing collection, replaces entries by id and
//! writes the whole collection back through a temporary file.

use async_trait::async_trait;
use exam_extract_application::{QuestionSinkPort, SinkError};
use exam_extract_domain::Question;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

/// JSON file collection keyed by question id
#[derive(Debug, Clone)]
pub struct JsonFileQuestionSink {
    path: PathBuf,
}

impl JsonFileQuestionSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<Map<String, Value>, SinkError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(SinkError::Load {
                    path: self.display_path(),
                    message: e.to_string(),
                });
            }
        };

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(SinkError::Load {
                path: self.display_path(),
                message: "expected a JSON object keyed by question id".to_string(),
            }),
            Err(e) => Err(SinkError::Load {
                path: self.display_path(),
                message: e.to_string(),
            }),
        }
    }

    async fn store(&self, collection: &Map<String, Value>) -> Result<(), SinkError> {
        let write_err = |e: std::io::Error| SinkError::Write {
            path: self.display_path(),
            message: e.to_string(),
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
        }

        let json = serde_json::to_string_pretty(collection)
            .map_err(|e| SinkError::Serialization(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await.map_err(write_err)?;
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(write_err(e));
        }
        Ok(())
    }
}

#[async_trait]
impl QuestionSinkPort for JsonFileQuestionSink {
    fn describe(&self) -> String {
        self.display_path()
    }

    async fn upsert_all(&self, questions: &[Question]) -> Result<usize, SinkError> {
        let mut collection = self.load().await?;
        let existing = collection.len();

        for question in questions {
            let record = serde_json::to_value(question)
                .map_err(|e| SinkError::Serialization(e.to_string()))?;
            collection.insert(question.id().to_string(), record);
        }

        self.store(&collection).await?;
        debug!(
            "Wrote {} records to {} ({} before, {} after)",
            questions.len(),
            self.display_path(),
            existing,
            collection.len()
        );
        Ok(questions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_extract_domain::QuestionId;

    fn question(id: &str, prompt: &str) -> Question {
        Question::new(QuestionId::try_new(id).unwrap()).with_prompt(prompt)
    }

    fn read_collection(path: &Path) -> Map<String, Value> {
        let content = std::fs::read_to_string(path).unwrap();
        match serde_json::from_str(&content).unwrap() {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_creates_collection_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("questions.json");
        let sink = JsonFileQuestionSink::new(&path);

        let written = sink
            .upsert_all(&[question("ab12", "What is X?"), question("cd34", "What is Y?")])
            .await
            .unwrap();

        assert_eq!(written, 2);
        let collection = read_collection(&path);
        assert_eq!(collection.len(), 2);
        assert_eq!(collection["ab12"]["prompt"], "What is X?");
        assert_eq!(collection["ab12"]["id"], "ab12");
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_second_write_replaces_same_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        let sink = JsonFileQuestionSink::new(&path);

        sink.upsert_all(&[question("ab12", "old"), question("cd34", "kept")])
            .await
            .unwrap();
        sink.upsert_all(&[question("ab12", "new")]).await.unwrap();

        let collection = read_collection(&path);
        assert_eq!(collection.len(), 2);
        assert_eq!(collection["ab12"]["prompt"], "new");
        assert_eq!(collection["cd34"]["prompt"], "kept");
    }

    #[tokio::test]
    async fn test_later_duplicate_in_batch_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        let sink = JsonFileQuestionSink::new(&path);

        sink.upsert_all(&[question("ab12", "first"), question("ab12", "second")])
            .await
            .unwrap();

        let collection = read_collection(&path);
        assert_eq!(collection.len(), 1);
        assert_eq!(collection["ab12"]["prompt"], "second");
    }

    #[tokio::test]
    async fn test_empty_existing_file_is_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        std::fs::write(&path, "  \n").unwrap();

        let sink = JsonFileQuestionSink::new(&path);
        assert_eq!(sink.upsert_all(&[question("ab12", "x")]).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_non_object_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let sink = JsonFileQuestionSink::new(&path);
        let err = sink.upsert_all(&[question("ab12", "x")]).await.unwrap_err();
        assert!(matches!(err, SinkError::Load { .. }));
        // The existing file is left untouched
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[1, 2, 3]");
    }

    #[tokio::test]
    async fn test_failed_replace_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A non-empty directory at the target path makes the rename fail
        let path = dir.path().join("questions.json");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "x").unwrap();

        let sink = JsonFileQuestionSink::new(&path);
        let err = sink.store(&Map::new()).await.unwrap_err();

        assert!(matches!(err, SinkError::Write { .. }));
        assert!(!path.with_extension("json.tmp").exists());
        assert!(path.join("keep").exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        std::fs::write(&path, "{ not json").unwrap();

        let sink = JsonFileQuestionSink::new(&path);
        assert!(matches!(
            sink.upsert_all(&[question("ab12", "x")]).await,
            Err(SinkError::Load { .. })
        ));
    }
}

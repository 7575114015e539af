//! JSONL file writer for import events.
//!
//! Each [`ImportEvent`] becomes one JSON line carrying the payload fields
//! plus `type` and `timestamp`.

use exam_extract_application::{ImportEvent, ImportEventLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL import logger that appends one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlImportLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlImportLogger {
    /// Open (or create) the log at the given path, appending to existing runs.
    ///
    /// Creates parent directories if needed. Returns `None` if the file
    /// cannot be opened; the import then runs without an event log.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create import log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open import log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(event: ImportEvent) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut map = match event.payload {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert(
            "type".to_string(),
            Value::String(event.event_type.to_string()),
        );
        map.insert("timestamp".to_string(), Value::String(timestamp));
        Value::Object(map)
    }
}

impl ImportEventLogger for JsonlImportLogger {
    fn log(&self, event: ImportEvent) {
        let Ok(line) = serde_json::to_string(&Self::record(event)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlImportLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_object_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("import.jsonl");
        let logger = JsonlImportLogger::new(&path).unwrap();

        logger.log(ImportEvent::new(
            "document_parsed",
            json!({ "document": "math.txt", "questions": 2 }),
        ));
        logger.log(ImportEvent::new(
            "document_failed",
            json!({ "document": "broken.txt", "error": "unreadable" }),
        ));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "document_parsed");
        assert_eq!(lines[0]["document"], "math.txt");
        assert_eq!(lines[0]["questions"], 2);
        assert!(lines[0]["timestamp"].is_string());
        assert_eq!(lines[1]["type"], "document_failed");
        assert_eq!(lines[1]["error"], "unreadable");
    }

    #[test]
    fn test_non_object_payload_is_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("import.jsonl");
        let logger = JsonlImportLogger::new(&path).unwrap();

        logger.log(ImportEvent::new("note", json!("just a string")));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines[0]["type"], "note");
        assert_eq!(lines[0]["data"], "just a string");
    }

    #[test]
    fn test_appends_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("import.jsonl");

        for run in 0..2 {
            let logger = JsonlImportLogger::new(&path).unwrap();
            logger.log(ImportEvent::new("upload_complete", json!({ "run": run })));
        }

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["run"], 1);
    }

    #[test]
    fn test_unopenable_path_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a log file
        assert!(JsonlImportLogger::new(dir.path()).is_none());
    }
}

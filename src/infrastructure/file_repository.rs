// Filesystem adapter for the dashboard document
use crate::application::document_repository::{DocumentError, DocumentRepository};
use crate::domain::dashboard::DashboardDocument;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Re-reads the document file on every call, so producer updates are visible on
/// the next request with no caching in between.
pub struct FileDocumentRepository {
    path: PathBuf,
}

impl FileDocumentRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl DocumentRepository for FileDocumentRepository {
    async fn load(&self) -> Result<Option<DashboardDocument>, DocumentError> {
        // Single guarded read instead of an existence check followed by a read,
        // so a file deleted in between cannot surface as a raw I/O failure.
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(serde_json::from_slice(&bytes)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_missing_file_is_no_document() {
        let dir = tempfile::tempdir().unwrap();
        let repository = FileDocumentRepository::new(dir.path().join("dashboard.json"));
        assert!(repository.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_partial_document_gets_field_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.json");
        std::fs::write(&path, r#"{"tasks": [{"id": 1}]}"#).unwrap();

        let document = FileDocumentRepository::new(path)
            .load()
            .await
            .unwrap()
            .unwrap();
        assert_eq!(document.tasks, vec![json!({"id": 1})]);
        assert!(document.projects.is_empty());
        assert_eq!(document.notifications.len(), 2);
        assert_eq!(document.history.len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.json");
        std::fs::write(&path, "not json at all").unwrap();

        let result = FileDocumentRepository::new(path).load().await;
        assert!(matches!(result, Err(DocumentError::Parse(_))));
    }

    #[tokio::test]
    async fn test_wrongly_typed_field_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.json");
        std::fs::write(&path, r#"{"tasks": 5}"#).unwrap();

        let result = FileDocumentRepository::new(path).load().await;
        assert!(matches!(result, Err(DocumentError::Parse(_))));
    }
}

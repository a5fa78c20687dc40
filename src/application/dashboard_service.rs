// Dashboard service - use cases over the document repository
use crate::application::document_repository::{DocumentError, DocumentRepository};
use crate::domain::dashboard::DashboardDocument;
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn DocumentRepository>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn DocumentRepository>) -> Self {
        Self { repository }
    }

    /// The raw `tasks` sequence, empty when no document has been produced yet.
    pub async fn tasks(&self) -> Result<Vec<Value>, DocumentError> {
        let document = self.repository.load().await?;
        Ok(document.map(|d| d.tasks).unwrap_or_default())
    }

    /// The full four-field document, with per-field defaults when absent.
    pub async fn snapshot(&self) -> Result<DashboardDocument, DocumentError> {
        Ok(self.repository.load().await?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    struct FixedRepository(Option<DashboardDocument>);

    #[async_trait]
    impl DocumentRepository for FixedRepository {
        async fn load(&self) -> Result<Option<DashboardDocument>, DocumentError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_tasks_is_empty_without_a_document() {
        let service = DashboardService::new(Arc::new(FixedRepository(None)));
        assert!(service.tasks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_snapshot_defaults_without_a_document() {
        let service = DashboardService::new(Arc::new(FixedRepository(None)));
        let snapshot = service.snapshot().await.unwrap();
        assert!(snapshot.tasks.is_empty());
        assert_eq!(snapshot.notifications.len(), 2);
    }

    #[tokio::test]
    async fn test_tasks_come_from_the_document() {
        let document: DashboardDocument =
            serde_json::from_value(json!({"tasks": [{"id": 1}]})).unwrap();
        let service = DashboardService::new(Arc::new(FixedRepository(Some(document))));
        assert_eq!(service.tasks().await.unwrap(), vec![json!({"id": 1})]);
    }
}

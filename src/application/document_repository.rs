// Repository trait for dashboard document access
use crate::domain::dashboard::DashboardDocument;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read dashboard file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dashboard file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Load the current dashboard document.
    ///
    /// `None` means the external producer has not written the file yet, which
    /// is a normal state, not an error.
    async fn load(&self) -> Result<Option<DashboardDocument>, DocumentError>;
}

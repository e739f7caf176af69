use super::types::AnalysisError;
use async_trait::async_trait;
use std::sync::Arc;

/// One request/response exchange with a text-analysis service.
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    /// Analyse `text` and return the reply to show in the thread.
    async fn analyze(&self, text: &str) -> Result<String, AnalysisError>;
}

#[async_trait]
impl<T: AnalysisClient + ?Sized> AnalysisClient for Arc<T> {
    async fn analyze(&self, text: &str) -> Result<String, AnalysisError> {
        (**self).analyze(text).await
    }
}

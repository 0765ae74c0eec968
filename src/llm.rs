//! Completion-provider abstraction
//!
//! Provides a common interface for remote completion providers so the relay
//! can be tested with injected mocks.

mod deepseek;
mod error;

pub use deepseek::DeepSeekService;
pub use error::{LlmError, LlmErrorKind};

use async_trait::async_trait;
use std::sync::Arc;

/// Common interface for completion providers
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Make a single completion request for one user message
    async fn complete(&self, message: &str) -> Result<String, LlmError>;

    /// Provider name reported in the response envelope's `source` field
    fn provider(&self) -> &str;
}

/// Logging wrapper for completion services
pub struct LoggingService {
    inner: Arc<dyn CompletionService>,
    provider: String,
}

impl LoggingService {
    pub fn new(inner: Arc<dyn CompletionService>) -> Self {
        let provider = inner.provider().to_string();
        Self { inner, provider }
    }
}

#[async_trait]
impl CompletionService for LoggingService {
    async fn complete(&self, message: &str) -> Result<String, LlmError> {
        let start = std::time::Instant::now();
        let result = self.inner.complete(message).await;
        let duration = start.elapsed();

        match &result {
            Ok(text) => {
                tracing::info!(
                    provider = %self.provider,
                    duration_ms = %duration.as_millis(),
                    chars = text.len(),
                    "completion request succeeded"
                );
            }
            Err(e) => {
                tracing::warn!(
                    provider = %self.provider,
                    duration_ms = %duration.as_millis(),
                    kind = ?e.kind,
                    error = %e.message,
                    "completion request failed"
                );
            }
        }

        result
    }

    fn provider(&self) -> &str {
        &self.provider
    }
}

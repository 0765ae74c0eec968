//! Relay decision procedure
//!
//! For each message: normalize, compute the local candidate, optionally make
//! one remote completion attempt, and fold the outcome into a uniform
//! response envelope. Remote failure is absorbed into the local path, never
//! surfaced to the caller.

#[cfg(test)]
mod proptests;

use crate::fallback::FallbackTable;
use crate::llm::{CompletionService, LlmError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Marker prefixed to local-path replies
const LOCAL_MARKER: char = '⚡';
/// Marker prefixed to remote-path replies
const AI_MARKER: char = '🤖';

const ERROR_MESSAGE: &str = "Estou com instabilidades temporárias. Tente novamente!";

/// Which response source answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseMode {
    Local,
    Ai,
    Error,
}

/// Uniform response returned to the caller regardless of which path produced
/// the reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    pub response: String,
    pub mode: ResponseMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Envelope {
    fn local(reply: &str) -> Self {
        Self {
            success: true,
            response: format!("{LOCAL_MARKER} {reply}"),
            mode: ResponseMode::Local,
            source: Some("fallback".to_string()),
        }
    }

    fn ai(provider: &str, text: &str) -> Self {
        Self {
            success: true,
            response: format!("{AI_MARKER} {text}"),
            mode: ResponseMode::Ai,
            source: Some(provider.to_string()),
        }
    }

    /// Generic error envelope. Non-diagnostic on purpose; details go to the
    /// server log only.
    pub fn error() -> Self {
        Self {
            success: false,
            response: format!("{LOCAL_MARKER} {ERROR_MESSAGE}"),
            mode: ResponseMode::Error,
            source: None,
        }
    }
}

/// Relays a message to the remote provider when one is configured, falling
/// back to the canned-response table otherwise.
pub struct ChatRelay {
    table: FallbackTable,
    remote: Option<Arc<dyn CompletionService>>,
}

impl ChatRelay {
    pub fn new(table: FallbackTable, remote: Option<Arc<dyn CompletionService>>) -> Self {
        Self { table, remote }
    }

    pub fn remote_configured(&self) -> bool {
        self.remote.is_some()
    }

    /// Produce an envelope for one message. Total for non-empty input; the
    /// HTTP layer rejects empty messages before calling this.
    pub async fn respond(&self, message: &str) -> Envelope {
        let normalized = message.trim().to_lowercase();
        let local = self.table.lookup(&normalized);

        if let Some(remote) = &self.remote {
            match Self::attempt_remote(remote.as_ref(), message).await {
                Ok(text) => return Envelope::ai(remote.provider(), &text),
                Err(e) => {
                    tracing::warn!(
                        provider = %remote.provider(),
                        error = %e,
                        "remote completion failed, using local fallback"
                    );
                }
            }
        }

        Envelope::local(local)
    }

    /// The single remote attempt. Carries the raw message (normalization is
    /// for the local lookup only); no retry.
    async fn attempt_remote(
        remote: &dyn CompletionService,
        message: &str,
    ) -> Result<String, LlmError> {
        remote.complete(message).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted provider for relay tests
    pub struct FakeService {
        pub reply: Result<String, &'static str>,
        pub calls: AtomicUsize,
    }

    impl FakeService {
        pub fn succeeding(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn failing(message: &'static str) -> Self {
            Self {
                reply: Err(message),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CompletionService for FakeService {
        async fn complete(&self, _message: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply
                .clone()
                .map_err(LlmError::network)
        }

        fn provider(&self) -> &str {
            "deepseek"
        }
    }
}

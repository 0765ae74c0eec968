//! Property-based tests for the relay decision procedure
//!
//! Verifies the invariants that hold for arbitrary input:
//! - With no remote service the relay is a pure function of the message
//! - Local-path responses always carry the local marker and `mode=local`
//! - Remote failure and no-credential produce identical envelopes

use super::testing::FakeService;
use super::{ChatRelay, ResponseMode};
use crate::fallback::FallbackTable;
use proptest::prelude::*;
use std::sync::Arc;

fn local_only() -> ChatRelay {
    ChatRelay::new(FallbackTable::vexus(), None)
}

fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
        .block_on(fut)
}

proptest! {
    #[test]
    fn idempotent_without_remote(message in ".{1,200}") {
        let relay = local_only();
        let first = block_on(relay.respond(&message));
        let second = block_on(relay.respond(&message));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn local_path_shape(message in ".{1,200}") {
        let envelope = block_on(local_only().respond(&message));
        prop_assert!(envelope.success);
        prop_assert_eq!(envelope.mode, ResponseMode::Local);
        prop_assert!(envelope.response.starts_with('⚡'));
        prop_assert_eq!(envelope.source.as_deref(), Some("fallback"));
    }

    #[test]
    fn remote_failure_matches_no_credential(message in ".{1,200}") {
        let failing = ChatRelay::new(
            FallbackTable::vexus(),
            Some(Arc::new(FakeService::failing("connection reset"))),
        );
        let degraded = block_on(failing.respond(&message));
        let baseline = block_on(local_only().respond(&message));
        prop_assert_eq!(degraded, baseline);
    }
}

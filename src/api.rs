//! HTTP API for the Vexus chat relay

mod assets;
mod handlers;
mod types;

pub use handlers::create_router;

use crate::relay::ChatRelay;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<ChatRelay>,
}

impl AppState {
    pub fn new(relay: ChatRelay) -> Self {
        Self {
            relay: Arc::new(relay),
        }
    }
}

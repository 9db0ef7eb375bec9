// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::chat_proxy::ChatProxy;
use crate::services::provider::{CompletionProvider, OpenAiProvider};

pub type SharedState = Arc<AppState>;

#[derive(Debug, Clone)]
pub struct AppState {
    pub chat: ChatProxy,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let provider = OpenAiProvider::new(config.base_url.clone(), config.api_key.clone());
        Self::with_provider(Arc::new(provider))
    }

    pub fn with_provider(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            chat: ChatProxy::new(provider),
        }
    }
}

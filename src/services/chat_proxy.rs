// src/services/chat_proxy.rs
use std::sync::Arc;

use tracing::{debug, error, instrument, warn};
use uuid::Uuid;

use crate::message::{ChatReply, ChatRequest};
use crate::services::provider::{
    CompletionMessage, CompletionProvider, CompletionRequest, Role,
};

pub const DEFAULT_CONTEXT: &str = "You are a helpful assistant.";

/// Returned when the upstream refuses the call or no credential is configured.
pub const CAPABILITIES_FALLBACK: &str = "I'm an AI assistant for this portfolio. \
I can tell you about the developer's skills, projects, work experience and how to get in touch. \
The live chat service is unavailable right now, but feel free to browse the site or use the contact form!";

/// Returned on network failures, unreadable responses and unusable requests.
pub const INVITATION_FALLBACK: &str = "Sorry, something went wrong on my end. \
Try asking me about the developer's projects, skills or experience!";

/// Returned when the upstream succeeds but generates no text.
pub const EMPTY_REPLY: &str = "Sorry, I couldn't generate a response.";

/// Fixed sampling parameters sent with every upstream call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.7,
            max_tokens: 500,
        }
    }
}

#[derive(Clone)]
pub struct ChatProxy {
    provider: Arc<dyn CompletionProvider>,
    settings: CompletionSettings,
}

impl std::fmt::Debug for ChatProxy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatProxy")
            .field("settings", &self.settings)
            .finish()
    }
}

impl ChatProxy {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self::with_settings(provider, CompletionSettings::default())
    }

    pub fn with_settings(provider: Arc<dyn CompletionProvider>, settings: CompletionSettings) -> Self {
        Self { provider, settings }
    }

    pub fn settings(&self) -> &CompletionSettings {
        &self.settings
    }

    /// Build the `[system, user]` upstream call for one chat message.
    pub fn build_request(&self, request: &ChatRequest) -> CompletionRequest {
        let context = request
            .context
            .as_deref()
            .filter(|ctx| !ctx.trim().is_empty())
            .unwrap_or(DEFAULT_CONTEXT);

        CompletionRequest {
            model: self.settings.model.clone(),
            messages: vec![
                CompletionMessage {
                    role: Role::System,
                    content: context.to_string(),
                },
                CompletionMessage {
                    role: Role::User,
                    content: request.message.clone(),
                },
            ],
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        }
    }

    /// Answer one chat message. Never fails: every upstream problem is
    /// mapped to one of the fixed fallback replies.
    #[instrument(name = "chat", skip_all, fields(request_id = %Uuid::new_v4()))]
    pub async fn handle(&self, request: ChatRequest) -> ChatReply {
        if request.message.trim().is_empty() {
            warn!("empty chat message, not forwarding");
            return ChatReply::new(INVITATION_FALLBACK);
        }

        let upstream = self.build_request(&request);

        match self.provider.complete(&upstream).await {
            Ok(resp) => match resp.first_text() {
                Some(text) => {
                    debug!(chars = text.len(), "upstream reply received");
                    ChatReply::new(text)
                }
                None => {
                    warn!(choices = resp.choices.len(), "upstream returned no usable text");
                    ChatReply::new(EMPTY_REPLY)
                }
            },
            Err(e) if e.is_rejection() => {
                warn!(error = %e, "upstream rejected chat request");
                ChatReply::new(CAPABILITIES_FALLBACK)
            }
            Err(e) => {
                error!(error = %e, "chat request failed");
                ChatReply::new(INVITATION_FALLBACK)
            }
        }
    }
}

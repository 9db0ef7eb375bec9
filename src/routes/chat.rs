use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::warn;

use crate::{
    message::{ChatReply, ChatRequest},
    services::chat_proxy::INVITATION_FALLBACK,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Json<ChatReply> {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(error = %rejection, "unreadable chat request body");
            return Json(ChatReply::new(INVITATION_FALLBACK));
        }
    };

    Json(state.chat.handle(request).await)
}

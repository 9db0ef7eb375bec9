use portfolio_chat::error::UpstreamError;
use portfolio_chat::message::ChatReply;
use portfolio_chat::routes::create_router;
use portfolio_chat::services::chat_proxy::INVITATION_FALLBACK;
use portfolio_chat::services::provider::{
    ChoiceMessage, Choice, CompletionProvider, CompletionRequest, CompletionResponse,
};
use portfolio_chat::state::AppState;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use tower::util::ServiceExt;

/// Replies with the user message, upper-cased.
struct Shout;

#[async_trait]
impl CompletionProvider for Shout {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, UpstreamError> {
        Ok(CompletionResponse {
            choices: vec![Choice {
                message: Some(ChoiceMessage {
                    content: Some(request.messages[1].content.to_uppercase()),
                }),
            }],
        })
    }
}

fn app() -> axum::Router {
    let state = Arc::new(AppState::with_provider(Arc::new(Shout)));
    create_router().with_state(state)
}

async fn post_chat(body: &'static str, content_type: &str) -> (StatusCode, ChatReply) {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/chat")
                .header("content-type", content_type)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body_bytes).unwrap())
}

#[tokio::test]
async fn test_chat_endpoint() {
    let (status, reply) = post_chat(
        r#"{"message": "hello", "context": "You are Ada's assistant."}"#,
        "application/json",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply.message, "HELLO");
}

#[tokio::test]
async fn test_context_is_optional() {
    let (status, reply) = post_chat(r#"{"message": "hi there"}"#, "application/json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply.message, "HI THERE");
}

#[tokio::test]
async fn test_invalid_json_still_ok() {
    let (status, reply) = post_chat(r#"{"message": "#, "application/json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply.message, INVITATION_FALLBACK);
}

#[tokio::test]
async fn test_missing_message_still_ok() {
    let (status, reply) = post_chat(r#"{"context": "x"}"#, "application/json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply.message, INVITATION_FALLBACK);
}

#[tokio::test]
async fn test_wrong_content_type_still_ok() {
    let (status, reply) = post_chat(r#"{"message": "hello"}"#, "text/plain").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply.message, INVITATION_FALLBACK);
}

#[tokio::test]
async fn test_health() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}

//! Gemini provider tests against a local mock of the Generative Language API.

use quest_service::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use quest_service::services::providers::{FinishReason, ProviderError, TextProvider};
use secrecy::Secret;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "gemini-1.5-flash-latest";
const GENERATE_PATH: &str = "/v1beta/models/gemini-1.5-flash-latest:generateContent";

fn provider_for(server: &MockServer) -> GeminiTextProvider {
    GeminiTextProvider::new(GeminiConfig {
        api_key: Secret::new("test-key".to_string()),
        model: MODEL.to_string(),
        api_base: format!("{}/v1beta", server.uri()),
    })
    .expect("Failed to create provider")
}

#[tokio::test]
async fn returns_candidate_text_and_usage() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{"role": "user", "parts": [{"text": "hello"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "```json\n{\"tasks\":"}, {"text": "[]}\n```"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 7, "totalTokenCount": 19}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = provider_for(&server).generate("hello").await.unwrap();

    assert_eq!(response.text, "```json\n{\"tasks\":[]}\n```");
    assert_eq!(response.input_tokens, 12);
    assert_eq!(response.output_tokens, 7);
    assert_eq!(response.finish_reason, FinishReason::Complete);
}

#[tokio::test]
async fn too_many_requests_is_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = provider_for(&server).generate("hello").await.unwrap_err();
    assert!(matches!(err, ProviderError::RateLimited));
}

#[tokio::test]
async fn error_status_is_api_error_with_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let err = provider_for(&server).generate("hello").await.unwrap_err();
    match err {
        ProviderError::ApiError(msg) => assert!(msg.contains("API key not valid")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn safety_stop_is_content_filtered() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"finishReason": "SAFETY"}]
        })))
        .mount(&server)
        .await;

    let err = provider_for(&server).generate("hello").await.unwrap_err();
    assert!(matches!(err, ProviderError::ContentFiltered));
}

#[tokio::test]
async fn blocked_prompt_is_content_filtered() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        })))
        .mount(&server)
        .await;

    let err = provider_for(&server).generate("hello").await.unwrap_err();
    assert!(matches!(err, ProviderError::ContentFiltered));
}

#[tokio::test]
async fn no_candidates_is_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let err = provider_for(&server).generate("hello").await.unwrap_err();
    assert!(matches!(err, ProviderError::EmptyResponse));
}

#[tokio::test]
async fn unreachable_host_is_network_error() {
    let provider = GeminiTextProvider::new(GeminiConfig {
        api_key: Secret::new("test-key".to_string()),
        model: MODEL.to_string(),
        api_base: "http://127.0.0.1:9/v1beta".to_string(),
    })
    .unwrap();

    let err = provider.generate("hello").await.unwrap_err();
    assert!(matches!(err, ProviderError::NetworkError(_)));
}

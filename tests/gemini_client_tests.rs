use trip_planner_backend::services::gemini::GeminiClient;
use trip_planner_backend::services::generator::{GenerationError, TextGenerator};
use trip_planner_backend::services::prompt::GenerationSettings;

use wiremock::{Mock, MockServer, ResponseTemplate, matchers};

const MODEL_PATH: &str = "/models/gemini-1.5-flash:generateContent";

fn client(server: &MockServer) -> GeminiClient {
    GeminiClient::new(server.uri(), "gemini-1.5-flash", "test-key")
}

#[tokio::test]
async fn test_generate_success() {
    let mock_server = MockServer::start().await;

    let response_body = serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": "Day 1: Alfama"}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 30, "candidatesTokenCount": 5}
    });

    Mock::given(matchers::method("POST"))
        .and(matchers::path(MODEL_PATH))
        .and(matchers::header("x-goog-api-key", "test-key"))
        .and(matchers::body_partial_json(serde_json::json!({
            "contents": [{"role": "user", "parts": [{"text": "plan it"}]}],
            "generationConfig": {"candidateCount": 1, "maxOutputTokens": 500, "temperature": 1.0}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(response_body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let text = client(&mock_server)
        .generate("plan it", &GenerationSettings::default())
        .await
        .unwrap();

    assert_eq!(text.as_deref(), Some("Day 1: Alfama"));
}

#[tokio::test]
async fn test_generate_no_candidates() {
    let mock_server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .and(matchers::path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"promptFeedback": {"blockReason": "SAFETY"}})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let text = client(&mock_server)
        .generate("plan it", &GenerationSettings::default())
        .await
        .unwrap();

    assert!(text.is_none());
}

#[tokio::test]
async fn test_generate_upstream_error() {
    let mock_server = MockServer::start().await;

    let error_body = r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;

    Mock::given(matchers::method("POST"))
        .and(matchers::path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_string(error_body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .generate("plan it", &GenerationSettings::default())
        .await
        .unwrap_err();

    match err {
        GenerationError::Upstream { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("API key not valid"));
        }
        other => panic!("expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_generate_invalid_body() {
    let mock_server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .and(matchers::path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .generate("plan it", &GenerationSettings::default())
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::Decode(_)));
}

#[tokio::test]
async fn test_generate_connection_refused() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = GeminiClient::new(format!("http://{}", addr), "gemini-1.5-flash", "test-key");
    let err = client
        .generate("plan it", &GenerationSettings::default())
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::Transport(_)));
}

//! Integration tests for the conversation HTTP endpoints.
//!
//! These tests drive the real router, orchestration service, and PDF
//! pipeline; only the LLM provider is replaced with a mock. Fixture PDFs are
//! served by a local listener.

use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::http::{header, Request, StatusCode};
use axum::routing::get;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use file_talk::adapters::agent::MockAgentClient;
use file_talk::adapters::http::{conversation_router, ConversationAppState};
use file_talk::adapters::pdf::PdfPipeline;
use file_talk::application::{ConversationService, PromptSettings};
use file_talk::config::PdfConfig;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Builds a PDF with one page per entry, each page carrying its entry as text.
fn pdf_bytes(pages: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Resources" => dictionary! {
                "Font" => dictionary! {
                    "F1" => font_id,
                },
            },
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

/// Serves `body` with the given content type on a local listener and returns
/// the document URL.
async fn serve_document(path: &'static str, body: Vec<u8>, content_type: &'static str) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = Router::new().route(
        path,
        get(move || async move { ([(header::CONTENT_TYPE, content_type)], Bytes::from(body)) }),
    );
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}{}", addr, path)
}

/// Builds the application router around a mock agent and a scratch storage
/// directory.
fn app(agent: MockAgentClient, storage: &TempDir) -> Router {
    let pdf_config = PdfConfig {
        storage_path: storage.path().to_string_lossy().into_owned(),
        retry_delay_ms: 10,
        ..Default::default()
    };
    let documents = Arc::new(PdfPipeline::new(pdf_config));
    let settings = PromptSettings {
        model_id: "mock-model".to_string(),
        summary_min_words: 8000,
        question_count: 20,
    };
    let service = Arc::new(ConversationService::new(documents, Arc::new(agent), settings));
    conversation_router(ConversationAppState::new(service))
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn storage_is_empty(storage: &TempDir) -> bool {
    std::fs::read_dir(storage.path()).unwrap().next().is_none()
}

// =============================================================================
// Validation failures (no I/O may happen)
// =============================================================================

#[tokio::test]
async fn missing_action_is_rejected_without_io() {
    let storage = TempDir::new().unwrap();
    let agent = MockAgentClient::new();
    let app = app(agent.clone(), &storage);

    let (status, body) = post_json(
        app,
        "/conversation/",
        json!({"documenturl": "https://x/doc.pdf"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(agent.call_count(), 0);
}

#[tokio::test]
async fn missing_documenturl_is_rejected_without_io() {
    let storage = TempDir::new().unwrap();
    let agent = MockAgentClient::new();
    let app = app(agent.clone(), &storage);

    let (status, body) = post_json(app, "/conversation/", json!({"action": "summarizer"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(agent.call_count(), 0);
}

#[tokio::test]
async fn unknown_action_is_rejected_without_io() {
    let storage = TempDir::new().unwrap();
    let agent = MockAgentClient::new();
    let app = app(agent.clone(), &storage);

    let (status, body) = post_json(
        app,
        "/conversation/",
        json!({"action": "translate", "documenturl": "https://x/doc.pdf"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("question_answer, summarizer, generate_questions"));
    assert_eq!(agent.call_count(), 0);
}

#[tokio::test]
async fn blank_question_is_rejected_for_question_answer() {
    let storage = TempDir::new().unwrap();
    let agent = MockAgentClient::new();
    let app = app(agent.clone(), &storage);

    let (status, body) = post_json(
        app,
        "/conversation/",
        json!({
            "action": "question_answer",
            "documenturl": "https://x/doc.pdf",
            "question": "   "
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(agent.call_count(), 0);
}

#[tokio::test]
async fn inverted_page_range_is_rejected_without_io() {
    let storage = TempDir::new().unwrap();
    let agent = MockAgentClient::new();
    let app = app(agent.clone(), &storage);

    let (status, body) = post_json(
        app,
        "/conversation/",
        json!({
            "action": "summarizer",
            "documenturl": "https://x/doc.pdf",
            "min_page": 5,
            "max_page": 3
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(agent.call_count(), 0);
}

// =============================================================================
// End-to-end conversation flows
// =============================================================================

#[tokio::test]
async fn summarize_end_to_end_returns_exact_envelope() {
    let storage = TempDir::new().unwrap();
    let url = serve_document(
        "/doc.pdf",
        pdf_bytes(&["Hello world", "Second page"]),
        "application/pdf",
    )
    .await;
    let agent = MockAgentClient::new().with_response("Summary text");
    let app = app(agent.clone(), &storage);

    let (status, body) = post_json(
        app,
        "/conversation/",
        json!({"action": "summarizer", "documenturl": url}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "content": {
                "success": true,
                "message": "Document summarized successfully",
                "data": "Summary text"
            },
            "userType": "Chatbot"
        })
    );

    let prompt = agent.last_prompt().unwrap();
    assert!(prompt.contains("Hello world"));
    assert!(prompt.contains("at least 8000 words"));
    assert!(storage_is_empty(&storage), "downloaded file must be cleaned up");
}

#[tokio::test]
async fn question_answer_end_to_end() {
    let storage = TempDir::new().unwrap();
    let url = serve_document(
        "/manual.pdf",
        pdf_bytes(&["The reactor runs at 400 kelvin"]),
        "application/pdf",
    )
    .await;
    let agent = MockAgentClient::new().with_response("It runs at 400 kelvin.");
    let app = app(agent.clone(), &storage);

    let (status, body) = post_json(
        app,
        "/conversation/",
        json!({
            "action": "question_answer",
            "documenturl": url,
            "question": "What temperature does the reactor run at?"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"]["message"], "Question answered successfully");
    assert_eq!(body["content"]["data"], "It runs at 400 kelvin.");

    let prompt = agent.last_prompt().unwrap();
    assert!(prompt.contains("400 kelvin"));
    assert!(prompt.contains("Question: What temperature does the reactor run at?"));
}

#[tokio::test]
async fn generate_questions_end_to_end() {
    let storage = TempDir::new().unwrap();
    let url = serve_document(
        "/notes.pdf",
        pdf_bytes(&["Photosynthesis converts light into chemical energy"]),
        "application/pdf",
    )
    .await;
    let agent = MockAgentClient::new().with_response("1. What is photosynthesis?");
    let app = app(agent.clone(), &storage);

    let (status, body) = post_json(
        app,
        "/conversation/",
        json!({"action": "generate_questions", "documenturl": url}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"]["message"], "Questions generated successfully");
    assert!(agent.last_prompt().unwrap().contains("Generate 20 thoughtful"));
}

// =============================================================================
// Pipeline failures map to the declared statuses
// =============================================================================

#[tokio::test]
async fn non_pdf_document_is_rejected_before_the_agent_runs() {
    let storage = TempDir::new().unwrap();
    let url = serve_document("/page", b"<html></html>".to_vec(), "text/html").await;
    let agent = MockAgentClient::new();
    let app = app(agent.clone(), &storage);

    let (status, body) = post_json(
        app,
        "/conversation/",
        json!({"action": "summarizer", "documenturl": url}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "PDF_INVALID_FORMAT");
    assert_eq!(agent.call_count(), 0);
}

#[tokio::test]
async fn rate_limit_from_the_provider_maps_to_429() {
    let storage = TempDir::new().unwrap();
    let url = serve_document("/a.pdf", pdf_bytes(&["text"]), "application/pdf").await;
    let agent = MockAgentClient::new()
        .with_error(file_talk::domain::DomainError::rate_limited("API rate limit exceeded"));
    let app = app(agent, &storage);

    let (status, body) = post_json(
        app,
        "/conversation/",
        json!({"action": "summarizer", "documenturl": url}),
    )
    .await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["error"]["code"], "RATE_LIMIT_EXCEEDED");
}

#[tokio::test]
async fn agent_timeout_maps_to_503() {
    let storage = TempDir::new().unwrap();
    let url = serve_document("/b.pdf", pdf_bytes(&["text"]), "application/pdf").await;
    let agent = MockAgentClient::new().with_error(file_talk::domain::DomainError::timeout(120));
    let app = app(agent, &storage);

    let (status, body) = post_json(
        app,
        "/conversation/",
        json!({"action": "summarizer", "documenturl": url}),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "TIMEOUT_ERROR");
}

// =============================================================================
// Metadata and options endpoints
// =============================================================================

#[tokio::test]
async fn get_conversation_returns_api_metadata() {
    let storage = TempDir::new().unwrap();
    let app = app(MockAgentClient::new(), &storage);

    let (status, body) = get_json(app, "/conversation/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "File Talk AI - Conversation API");
    assert_eq!(body["version"], "v1");
    assert!(body["endpoints"]["POST /conversation/"].is_string());
}

#[tokio::test]
async fn options_default_to_the_full_menu() {
    let storage = TempDir::new().unwrap();
    let app = app(MockAgentClient::new(), &storage);

    let (status, body) = post_json(app, "/options/", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    let actions: Vec<&str> = body["options"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["action"].as_str().unwrap())
        .collect();
    assert_eq!(
        actions,
        vec!["question_answer", "summarizer", "generate_questions", "main_menu"]
    );
}

#[tokio::test]
async fn options_with_started_flag_return_the_full_menu() {
    let storage = TempDir::new().unwrap();
    let app = app(MockAgentClient::new(), &storage);

    let (status, body) = post_json(app, "/options/", json!({"startedChatbot": true})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["options"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn options_before_start_offer_only_upload() {
    let storage = TempDir::new().unwrap();
    let app = app(MockAgentClient::new(), &storage);

    let (status, body) = post_json(
        app,
        "/options/",
        json!({"chatbotId": "abc-123", "startedChatbot": false}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let options = body["options"].as_array().unwrap();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0]["action"], "upload_file");
    assert_eq!(options[0]["label"], "Upload PDF File");
}

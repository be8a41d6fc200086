// SPDX-License-Identifier: MPL-2.0
//! Exercises `ApiClient` against an in-process fake translation server.

use axum::extract::Multipart;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use iced_translator::api::{ApiClient, TextRequest};
use iced_translator::domain::upload::UploadKind;
use iced_translator::error::Error;
use serde_json::{json, Value};
use tempfile::tempdir;

const PDF_BYTES: &[u8] = b"%PDF-1.4 translated";

/// Serves `router` on an ephemeral port and returns its base URL.
async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake server");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("fake server");
    });
    format!("http://{addr}")
}

fn fake_server() -> Router {
    Router::new()
        .route("/api/languages", get(languages))
        .route("/api/translate/text", post(translate_text))
        .route("/api/translate/file", post(translate_file))
        .route("/api/ollama-status", get(ollama_status))
        .route("/api/download/report_translated.pdf", get(download))
        .route("/api/download/missing.pdf", get(missing))
}

async fn languages() -> impl IntoResponse {
    // Raw body so key order is exactly what the client sees.
    (
        [(header::CONTENT_TYPE, "application/json")],
        r#"{"source_languages":{"auto":"Auto Detect","ja":"Japanese","en":"English"},
            "target_languages":{"zh-TW":"Traditional Chinese","en":"English"}}"#,
    )
}

async fn translate_text(Json(body): Json<Value>) -> impl IntoResponse {
    match body["text"].as_str() {
        Some("boom") => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "X"})),
        ),
        Some(text) => (
            StatusCode::OK,
            Json(json!({
                "translated_text": format!(
                    "{text} [{}->{}]",
                    body["source_lang"].as_str().unwrap_or_default(),
                    body["target_lang"].as_str().unwrap_or_default()
                )
            })),
        ),
        None => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "No text provided"})),
        ),
    }
}

/// Echoes the received multipart fields through the download URL.
async fn translate_file(mut multipart: Multipart) -> impl IntoResponse {
    let mut file_name = String::new();
    let mut file_len = 0;
    let mut source = String::new();
    let mut target = String::new();

    while let Ok(Some(field)) = multipart.next_field().await {
        match field.name().unwrap_or_default().to_string().as_str() {
            "file" => {
                file_name = field.file_name().unwrap_or_default().to_string();
                file_len = field.bytes().await.map(|b| b.len()).unwrap_or(0);
            }
            "source_lang" => source = field.text().await.unwrap_or_default(),
            "target_lang" => target = field.text().await.unwrap_or_default(),
            _ => {}
        }
    }

    if file_len == 0 {
        return Json(json!({"error": "Empty file"}));
    }
    Json(json!({
        "download_url": format!("/api/download/{file_name}?len={file_len}&src={source}&tgt={target}")
    }))
}

async fn ollama_status() -> impl IntoResponse {
    Json(json!({"running": true, "model_ready": false, "model": "translategemma"}))
}

async fn download() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/pdf")], PDF_BYTES)
}

async fn missing() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({"error": "File not found"})))
}

#[tokio::test]
async fn languages_keep_server_order() {
    let client = ApiClient::new(&spawn(fake_server()).await).unwrap();

    let catalog = client.languages().await.unwrap();

    let source: Vec<&str> = catalog.source.iter().map(|l| l.code.as_str()).collect();
    assert_eq!(source, ["auto", "ja", "en"]);
    assert_eq!(catalog.target[0].name, "Traditional Chinese");
}

#[tokio::test]
async fn text_translation_sends_languages() {
    let client = ApiClient::new(&spawn(fake_server()).await).unwrap();

    let translated = client
        .translate_text(&TextRequest {
            text: "hello".to_string(),
            source_lang: "auto".to_string(),
            target_lang: "zh-TW".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(translated, "hello [auto->zh-TW]");
}

#[tokio::test]
async fn server_error_message_is_surfaced_verbatim() {
    let client = ApiClient::new(&spawn(fake_server()).await).unwrap();

    let err = client
        .translate_text(&TextRequest {
            text: "boom".to_string(),
            source_lang: "en".to_string(),
            target_lang: "ja".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err, Error::Api("X".to_string()));
    assert_eq!(err.to_string(), "X");
}

#[tokio::test]
async fn file_translation_posts_multipart_fields() {
    let client = ApiClient::new(&spawn(fake_server()).await).unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.pdf");
    std::fs::write(&path, b"%PDF-1.4 source").unwrap();
    let file = UploadKind::Pdf.check(&path, 15, u64::MAX).unwrap();

    let url = client.translate_file(&file, "auto", "ja").await.unwrap();

    assert_eq!(url, "/api/download/report.pdf?len=15&src=auto&tgt=ja");
}

#[tokio::test]
async fn file_translation_error_is_api_error() {
    let client = ApiClient::new(&spawn(fake_server()).await).unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("blank.png");
    std::fs::write(&path, b"").unwrap();
    let file = UploadKind::Image.check(&path, 0, u64::MAX).unwrap();

    let err = client.translate_file(&file, "auto", "en").await.unwrap_err();

    assert_eq!(err, Error::Api("Empty file".to_string()));
}

#[tokio::test]
async fn translate_text_non_json_is_parse_error() {
    let router = Router::new().route(
        "/api/translate/text",
        post(|| async { (StatusCode::BAD_GATEWAY, "<html>bad gateway</html>") }),
    );
    let client = ApiClient::new(&spawn(router).await).unwrap();

    let err = client
        .translate_text(&TextRequest {
            text: "hello".to_string(),
            source_lang: "auto".to_string(),
            target_lang: "ja".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Parse(_)), "got {err:?}");
    assert!(err.to_string().starts_with("Invalid response: "));
}

#[tokio::test]
async fn backend_status_reports_missing_model() {
    let client = ApiClient::new(&spawn(fake_server()).await).unwrap();

    let status = client.backend_status().await.unwrap();

    assert!(status.running);
    assert!(!status.is_ready());
    assert_eq!(status.model.as_deref(), Some("translategemma"));
}

#[tokio::test]
async fn download_streams_to_disk() {
    let client = ApiClient::new(&spawn(fake_server()).await).unwrap();
    let dir = tempdir().unwrap();
    let destination = dir.path().join("out").join("report_translated.pdf");

    let written = client
        .download_to("/api/download/report_translated.pdf", &destination)
        .await
        .unwrap();

    assert_eq!(written, PDF_BYTES.len() as u64);
    assert_eq!(std::fs::read(&destination).unwrap(), PDF_BYTES);
}

#[tokio::test]
async fn failed_download_uses_server_message() {
    let client = ApiClient::new(&spawn(fake_server()).await).unwrap();

    let err = client
        .fetch_bytes("/api/download/missing.pdf")
        .await
        .unwrap_err();

    assert_eq!(err, Error::Api("File not found".to_string()));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = ApiClient::new(&format!("http://{addr}")).unwrap();

    let err = client.backend_status().await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)), "got {err:?}");
}

// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the translation server.
//!
//! Every response is read as JSON whatever its status code: the server
//! reports failures as `{"error": "..."}` bodies with 4xx/5xx statuses, and
//! the `error` field alone decides whether a call failed.
//!
//! Requests have no timeout and are never retried.

pub mod models;

pub use models::{BackendStatus, TextRequest};

use crate::domain::language::LanguageCatalog;
use crate::domain::upload::SelectedFile;
use crate::error::{Error, Result};
use models::{ErrorResponse, FileResponse, LanguagesResponse, TextResponse};
use reqwest::multipart::{Form, Part};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use std::path::Path;

const USER_AGENT: &str = concat!("IcedTranslator/", env!("CARGO_PKG_VERSION"));

/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client for the server at `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url =
            Url::parse(base_url).map_err(|e| Error::Config(format!("invalid server URL: {e}")))?;
        // Endpoints are joined relative to the base, which needs a trailing slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::Config(format!("invalid endpoint {path}: {e}")))
    }

    /// Resolves a URL returned by the server (usually an absolute path such
    /// as `/api/download/...`) against the base URL.
    pub fn resolve(&self, url: &str) -> Result<Url> {
        self.base_url
            .join(url)
            .map_err(|e| Error::Parse(format!("invalid download URL {url}: {e}")))
    }

    /// `GET /api/languages`
    pub async fn languages(&self) -> Result<LanguageCatalog> {
        let response = self.http.get(self.endpoint("api/languages")?).send().await?;
        let body: LanguagesResponse = read_json(response).await?;
        Ok(body.into())
    }

    /// `POST /api/translate/text`, returning the translated text.
    pub async fn translate_text(&self, request: &TextRequest) -> Result<String> {
        tracing::info!(
            chars = request.text.chars().count(),
            source = %request.source_lang,
            target = %request.target_lang,
            "translating text"
        );
        let response = self
            .http
            .post(self.endpoint("api/translate/text")?)
            .json(request)
            .send()
            .await?;
        let body: TextResponse = read_json(response).await?;
        body.into_result()
    }

    /// `POST /api/translate/file` (multipart), returning the download URL of
    /// the translated file as sent by the server.
    pub async fn translate_file(
        &self,
        file: &SelectedFile,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String> {
        tracing::info!(
            file = %file.name,
            bytes = file.size_bytes,
            source = %source_lang,
            target = %target_lang,
            "uploading file for translation"
        );
        let bytes = tokio::fs::read(&file.path).await?;
        let part = Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(file.mime_type())?;
        let form = Form::new()
            .part("file", part)
            .text("source_lang", source_lang.to_string())
            .text("target_lang", target_lang.to_string());

        let response = self
            .http
            .post(self.endpoint("api/translate/file")?)
            .multipart(form)
            .send()
            .await?;
        let body: FileResponse = read_json(response).await?;
        body.into_result()
    }

    /// `GET /api/ollama-status`
    pub async fn backend_status(&self) -> Result<BackendStatus> {
        let response = self
            .http
            .get(self.endpoint("api/ollama-status")?)
            .send()
            .await?;
        read_json(response).await
    }

    /// Fetches a translated file fully into memory (image previews).
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.http.get(self.resolve(url)?).send().await?;
        let response = ensure_success(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Streams a translated file to `destination`, returning the byte count.
    pub async fn download_to(&self, url: &str, destination: &Path) -> Result<u64> {
        use futures_util::StreamExt;
        use tokio::io::AsyncWriteExt;

        let response = self.http.get(self.resolve(url)?).send().await?;
        let response = ensure_success(response).await?;

        if let Some(parent) = destination.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let mut file = tokio::fs::File::create(destination).await?;

        let mut written: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;

        tracing::info!(path = %destination.display(), bytes = written, "download complete");
        Ok(written)
    }
}

/// Decodes the body as JSON, regardless of the status code.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| {
        tracing::warn!(%status, "response is not the expected JSON: {e}");
        Error::Parse(e.to_string())
    })
}

/// Turns a non-2xx file response into an error, preferring the server's
/// own `error` message when the body carries one.
async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let bytes = response.bytes().await.unwrap_or_default();
    match serde_json::from_slice::<ErrorResponse>(&bytes) {
        Ok(ErrorResponse {
            error: Some(message),
        }) if !message.is_empty() => Err(Error::Api(message)),
        _ => Err(Error::Transport(format!("HTTP status: {status}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_invalid_url() {
        assert!(matches!(ApiClient::new("not a url"), Err(Error::Config(_))));
    }

    #[test]
    fn endpoints_join_under_base_path() {
        let client = ApiClient::new("http://host:8080/translator").unwrap();
        assert_eq!(
            client.endpoint("api/languages").unwrap().as_str(),
            "http://host:8080/translator/api/languages"
        );
    }

    #[test]
    fn endpoints_join_at_root() {
        let client = ApiClient::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(
            client.endpoint("api/translate/text").unwrap().as_str(),
            "http://127.0.0.1:8080/api/translate/text"
        );
    }

    #[test]
    fn resolve_handles_absolute_paths_and_full_urls() {
        let client = ApiClient::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(
            client.resolve("/api/download/abc_translated.pdf").unwrap().as_str(),
            "http://127.0.0.1:8080/api/download/abc_translated.pdf"
        );
        assert_eq!(
            client.resolve("https://cdn.example/x.png").unwrap().as_str(),
            "https://cdn.example/x.png"
        );
    }
}

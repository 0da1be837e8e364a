use crate::models::*;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// The question-answering server the page talks to.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn upload(&self, file: &FileHandle) -> Result<UploadResponse>;

    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse>;

    async fn health(&self) -> Result<HealthResponse>;
}

/// Talks to the server over HTTP. Response status codes are not inspected,
/// only the JSON body is.
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

/// Parses a reply body that must be a JSON object. Arrays would otherwise
/// be matched to struct fields by position.
async fn read_object<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    let body: Value = response
        .json()
        .await
        .with_context(|| format!("{} response was not valid JSON", what))?;

    if !body.is_object() {
        return Err(anyhow::anyhow!("{} response was not a JSON object: {}", what, body));
    }

    serde_json::from_value(body).with_context(|| format!("Unexpected {} response shape", what.to_lowercase()))
}

#[async_trait]
impl Backend for HttpBackend {
    async fn upload(&self, file: &FileHandle) -> Result<UploadResponse> {
        let content_type = file.content_type.as_deref().unwrap_or(FALLBACK_CONTENT_TYPE);
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(content_type)
            .with_context(|| format!("Invalid content type: {}", content_type))?;
        let form = Form::new().part("file", part);

        log::info!("Uploading {} ({} bytes)", file.name, file.bytes.len());

        let response = self
            .client
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()
            .await
            .context("Upload request failed")?;

        log::debug!("Upload responded with {}", response.status());

        read_object(response, "Upload").await
    }

    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse> {
        log::info!("Querying with top_k={}", request.top_k);

        let response = self
            .client
            .post(self.endpoint("query"))
            .json(request)
            .send()
            .await
            .context("Query request failed")?;

        log::debug!("Query responded with {}", response.status());

        let query: QueryResponse = read_object(response, "Query").await?;

        let sources = query.source_names();
        if !sources.is_empty() {
            log::debug!("Answer sources: {}", sources.join(", "));
        }

        Ok(query)
    }

    async fn health(&self) -> Result<HealthResponse> {
        let response = self
            .client
            .get(self.endpoint("health"))
            .send()
            .await
            .context("Health request failed")?;

        read_object(response, "Health").await
    }
}

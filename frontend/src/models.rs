use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

pub const DEFAULT_TOP_K: usize = 5;

pub const SELECT_FILE_MESSAGE: &str = "Please select a file.";
pub const UPLOADING_MESSAGE: &str = "Uploading...";
pub const UPLOAD_FAILED_MESSAGE: &str = "Upload failed";
pub const ENTER_QUESTION_MESSAGE: &str = "Please enter a question.";
pub const THINKING_MESSAGE: &str = "Thinking...";
pub const NO_ANSWER_MESSAGE: &str = "No answer found.";
pub const QUERY_FAILED_MESSAGE: &str = "Query failed";
pub const CHECKING_MESSAGE: &str = "Checking...";
pub const HEALTH_FAILED_MESSAGE: &str = "Health check failed";
pub const UNKNOWN_HEALTH_TEXT: &str = "unknown";

/// Shown when the upload response carries neither `status` nor `detail`.
pub const MISSING_STATUS_TEXT: &str = "undefined";

/// A user-selected local file, held in memory for the duration of one upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type,
            bytes,
        }
    }

    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| anyhow::anyhow!("Not a file path: {}", path.display()))?;

        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Ok(Self {
            content_type: content_type_for(path),
            name,
            bytes,
        })
    }
}

fn content_type_for(path: &Path) -> Option<String> {
    let extension = path.extension()?.to_string_lossy().to_lowercase();
    match extension.as_str() {
        "pdf" => Some("application/pdf".to_string()),
        "txt" => Some("text/plain".to_string()),
        _ => None,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryRequest {
    pub question: String,
    pub top_k: usize,
}

impl QueryRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            top_k: DEFAULT_TOP_K,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    /// Echoed back by the server but never displayed, so any JSON is accepted.
    #[serde(default)]
    pub file: Option<Value>,
}

impl UploadResponse {
    /// `status`, falling back to `detail`. Empty strings count as absent.
    pub fn display_text(&self) -> String {
        non_empty(&self.status)
            .or_else(|| non_empty(&self.detail))
            .unwrap_or(MISSING_STATUS_TEXT)
            .to_string()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub answer: Option<String>,
    /// Only logged. Kept loose so a malformed list never hides the answer.
    #[serde(default)]
    pub sources: Option<Value>,
}

impl QueryResponse {
    pub fn display_text(&self) -> String {
        non_empty(&self.answer).unwrap_or(NO_ANSWER_MESSAGE).to_string()
    }

    /// The string entries of `sources`, skipping anything else.
    pub fn source_names(&self) -> Vec<&str> {
        match &self.sources {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn query_request_serializes_fixed_top_k() {
        let body = serde_json::to_value(QueryRequest::new("  what is X?  ")).unwrap();
        assert_eq!(body, serde_json::json!({ "question": "  what is X?  ", "top_k": 5 }));
    }

    #[test]
    fn upload_status_falls_back_to_detail() {
        let ok: UploadResponse = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert_eq!(ok.display_text(), "ok");

        let rejected: UploadResponse = serde_json::from_str(r#"{"detail": "too large"}"#).unwrap();
        assert_eq!(rejected.display_text(), "too large");

        let blank: UploadResponse = serde_json::from_str(r#"{"status": "", "detail": "nope"}"#).unwrap();
        assert_eq!(blank.display_text(), "nope");

        let empty: UploadResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.display_text(), MISSING_STATUS_TEXT);
    }

    #[test]
    fn query_answer_falls_back_to_placeholder() {
        let empty: QueryResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.display_text(), NO_ANSWER_MESSAGE);
        assert!(empty.source_names().is_empty());

        let blank: QueryResponse = serde_json::from_str(r#"{"answer": ""}"#).unwrap();
        assert_eq!(blank.display_text(), NO_ANSWER_MESSAGE);

        let null: QueryResponse = serde_json::from_str(r#"{"answer": null}"#).unwrap();
        assert_eq!(null.display_text(), NO_ANSWER_MESSAGE);

        let full: QueryResponse =
            serde_json::from_str(r#"{"answer": "X is Y", "sources": ["a.pdf"]}"#).unwrap();
        assert_eq!(full.display_text(), "X is Y");
        assert_eq!(full.source_names(), vec!["a.pdf"]);
    }

    #[test]
    fn unshown_fields_accept_any_json() {
        let null_sources: QueryResponse =
            serde_json::from_str(r#"{"answer": "X is Y", "sources": null}"#).unwrap();
        assert_eq!(null_sources.display_text(), "X is Y");
        assert!(null_sources.source_names().is_empty());

        let mixed: QueryResponse =
            serde_json::from_str(r#"{"answer": "X", "sources": ["a.pdf", 3, {"b": 1}]}"#).unwrap();
        assert_eq!(mixed.source_names(), vec!["a.pdf"]);

        let numeric_file: UploadResponse =
            serde_json::from_str(r#"{"status": "uploaded", "file": 7}"#).unwrap();
        assert_eq!(numeric_file.display_text(), "uploaded");
    }

    #[tokio::test]
    async fn file_handle_reads_path_and_infers_type() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(b"policy text").unwrap();

        let handle = FileHandle::from_path(file.path()).await.unwrap();
        assert_eq!(handle.bytes, b"policy text");
        assert_eq!(handle.content_type.as_deref(), Some("text/plain"));
        assert!(handle.name.ends_with(".txt"));
    }

    #[tokio::test]
    async fn file_handle_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileHandle::from_path(dir.path().join("missing.pdf")).await;
        assert!(result.is_err());
    }
}

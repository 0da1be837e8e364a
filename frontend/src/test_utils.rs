use crate::backend::Backend;
use crate::models::*;
use anyhow::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::sync::oneshot;

struct Reply {
    gate: Option<oneshot::Receiver<()>>,
    outcome: std::result::Result<Value, String>,
}

/// Backend double that records requests and answers from a queue of replies.
/// A gated reply is held back until its sender fires (or is dropped).
#[derive(Default)]
pub(crate) struct FakeBackend {
    uploads: Mutex<Vec<FileHandle>>,
    queries: Mutex<Vec<QueryRequest>>,
    health_checks: Mutex<usize>,
    replies: Mutex<VecDeque<Reply>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_reply(&self, body: Value) {
        self.push(None, Ok(body));
    }

    pub fn push_failure(&self, message: &str) {
        self.push(None, Err(message.to_string()));
    }

    pub fn push_gated(&self, body: Value) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.push(Some(rx), Ok(body));
        tx
    }

    pub fn push_gated_failure(&self, message: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.push(Some(rx), Err(message.to_string()));
        tx
    }

    pub fn uploads(&self) -> Vec<FileHandle> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn queries(&self) -> Vec<QueryRequest> {
        self.queries.lock().unwrap().clone()
    }

    pub fn health_checks(&self) -> usize {
        *self.health_checks.lock().unwrap()
    }

    fn push(&self, gate: Option<oneshot::Receiver<()>>, outcome: std::result::Result<Value, String>) {
        self.replies.lock().unwrap().push_back(Reply { gate, outcome });
    }

    async fn next_reply<T: DeserializeOwned>(&self) -> Result<T> {
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("no reply queued for fake backend");

        if let Some(gate) = reply.gate {
            let _ = gate.await;
        }

        match reply.outcome {
            Ok(body) => Ok(serde_json::from_value(body)?),
            Err(message) => Err(anyhow::anyhow!(message)),
        }
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn upload(&self, file: &FileHandle) -> Result<UploadResponse> {
        self.uploads.lock().unwrap().push(file.clone());
        self.next_reply().await
    }

    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse> {
        self.queries.lock().unwrap().push(request.clone());
        self.next_reply().await
    }

    async fn health(&self) -> Result<HealthResponse> {
        *self.health_checks.lock().unwrap() += 1;
        self.next_reply().await
    }
}

pub(crate) fn text_file(name: &str, contents: &str) -> FileHandle {
    FileHandle::new(name, Some("text/plain".to_string()), contents.as_bytes().to_vec())
}

use crate::backend::Backend;
use crate::config::FrontendConfig;
use crate::controls::{TextInput, TextOutput};
use crate::models::*;
use crate::sequence::RequestSequence;
use anyhow::Result;
use std::sync::Arc;

pub struct QueryAction {
    question: Arc<dyn TextInput>,
    answer: Arc<dyn TextOutput>,
    backend: Arc<dyn Backend>,
    sequence: RequestSequence,
    report_failures: bool,
    discard_stale: bool,
}

impl QueryAction {
    pub fn new(
        question: Arc<dyn TextInput>,
        answer: Arc<dyn TextOutput>,
        backend: Arc<dyn Backend>,
        config: &FrontendConfig,
    ) -> Self {
        Self {
            question,
            answer,
            backend,
            sequence: RequestSequence::new(),
            report_failures: config.report_failures,
            discard_stale: config.discard_stale,
        }
    }

    /// Sends the question and shows the answer.
    ///
    /// Blank input is rejected after trimming, but the question goes out
    /// exactly as typed, surrounding whitespace included.
    pub async fn execute(&self) -> Result<()> {
        let question = self.question.value();
        if question.trim().is_empty() {
            self.answer.set_text(ENTER_QUESTION_MESSAGE);
            return Ok(());
        }

        self.answer.set_text(THINKING_MESSAGE);
        let ticket = self.sequence.issue();

        let request = QueryRequest::new(question);
        let result = self.backend.query(&request).await;

        if self.discard_stale && !self.sequence.is_latest(ticket) {
            log::warn!("Discarding stale answer for request #{}", ticket);
            return result.map(|_| ());
        }

        match result {
            Ok(response) => {
                self.answer.set_text(&response.display_text());
                Ok(())
            }
            Err(err) => {
                if self.report_failures {
                    log::warn!("Query failed: {:#}", err);
                    self.answer.set_text(QUERY_FAILED_MESSAGE);
                }
                Err(err)
            }
        }
    }
}

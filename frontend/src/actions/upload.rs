use crate::backend::Backend;
use crate::config::FrontendConfig;
use crate::controls::{FileSelection, TextOutput};
use crate::models::*;
use crate::sequence::RequestSequence;
use anyhow::Result;
use std::sync::Arc;

pub struct UploadAction {
    files: Arc<dyn FileSelection>,
    status: Arc<dyn TextOutput>,
    backend: Arc<dyn Backend>,
    sequence: RequestSequence,
    report_failures: bool,
    discard_stale: bool,
}

impl UploadAction {
    pub fn new(
        files: Arc<dyn FileSelection>,
        status: Arc<dyn TextOutput>,
        backend: Arc<dyn Backend>,
        config: &FrontendConfig,
    ) -> Self {
        Self {
            files,
            status,
            backend,
            sequence: RequestSequence::new(),
            report_failures: config.report_failures,
            discard_stale: config.discard_stale,
        }
    }

    /// Uploads the first selected file and shows the server's status message.
    pub async fn execute(&self) -> Result<()> {
        let selected = self.files.selected_files();
        let Some(file) = selected.first() else {
            self.status.set_text(SELECT_FILE_MESSAGE);
            return Ok(());
        };

        self.status.set_text(UPLOADING_MESSAGE);
        let ticket = self.sequence.issue();

        let result = self.backend.upload(file).await;

        if self.discard_stale && !self.sequence.is_latest(ticket) {
            log::warn!("Discarding stale upload response for {}", file.name);
            return result.map(|_| ());
        }

        match result {
            Ok(response) => {
                self.status.set_text(&response.display_text());
                Ok(())
            }
            Err(err) => {
                if self.report_failures {
                    log::warn!("Upload of {} failed: {:#}", file.name, err);
                    self.status.set_text(UPLOAD_FAILED_MESSAGE);
                }
                Err(err)
            }
        }
    }
}

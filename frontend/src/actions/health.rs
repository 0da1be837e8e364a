use crate::backend::Backend;
use crate::config::FrontendConfig;
use crate::controls::TextOutput;
use crate::models::*;
use anyhow::Result;
use std::sync::Arc;

/// Shows whether the server is up.
pub struct HealthAction {
    status: Arc<dyn TextOutput>,
    backend: Arc<dyn Backend>,
    report_failures: bool,
}

impl HealthAction {
    pub fn new(status: Arc<dyn TextOutput>, backend: Arc<dyn Backend>, config: &FrontendConfig) -> Self {
        Self {
            status,
            backend,
            report_failures: config.report_failures,
        }
    }

    pub async fn execute(&self) -> Result<()> {
        self.status.set_text(CHECKING_MESSAGE);

        match self.backend.health().await {
            Ok(health) => {
                let status = health.status.filter(|s| !s.is_empty());
                self.status.set_text(status.as_deref().unwrap_or(UNKNOWN_HEALTH_TEXT));
                Ok(())
            }
            Err(err) => {
                if self.report_failures {
                    log::warn!("Health check failed: {:#}", err);
                    self.status.set_text(HEALTH_FAILED_MESSAGE);
                }
                Err(err)
            }
        }
    }
}

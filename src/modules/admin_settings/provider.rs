use std::sync::Mutex;

use crate::api::error;
use crate::modules::admin_settings::model::AdminSettingsResponse;

#[async_trait::async_trait]
pub trait AdminDetailsSource {
    async fn fetch_details(&self) -> Result<AdminSettingsResponse, error::SystemError>;
}

/// Session-scoped holder for the site contact details: fetched once on
/// first use and shared by everything rendered in that session, with an
/// explicit refetch after an admin edit. No ambient singleton; the
/// provider lives exactly as long as its owner.
pub struct AdminDetailsProvider<S: AdminDetailsSource> {
    source: S,
    details: Mutex<Option<AdminSettingsResponse>>,
}

impl<S: AdminDetailsSource> AdminDetailsProvider<S> {
    pub fn new(source: S) -> Self {
        Self { source, details: Mutex::new(None) }
    }

    /// Fetches on first call; later calls are no-ops.
    pub async fn init(&self) -> Result<(), error::SystemError> {
        if self.is_loaded() {
            return Ok(());
        }
        self.refetch().await
    }

    pub async fn refetch(&self) -> Result<(), error::SystemError> {
        let details = self.source.fetch_details().await?;
        *self.details.lock().unwrap() = Some(details);
        Ok(())
    }

    pub fn current(&self) -> Option<AdminSettingsResponse> {
        self.details.lock().unwrap().clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.details.lock().unwrap().is_some()
    }
}

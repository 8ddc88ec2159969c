//! Report export service.
//!
//! No report is rendered. Accepted exports get an opaque identifier and a
//! download URL that never resolves.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::Error;
use crate::domain::generators::opaque_id;
use crate::domain::ports::{
    ExportRequest, ExportStatus, RandomSource, RecordStore, ReportCommand, ReportExport,
};
use crate::domain::service_support::require_user;

const EXPORT_PREFIX: &str = "exp";
const DOWNLOAD_ROOT: &str = "/downloads";

/// Service implementing [`ReportCommand`].
#[derive(Clone)]
pub struct ReportExportService<S> {
    store: Arc<S>,
    random: Arc<dyn RandomSource>,
    clock: Arc<dyn Clock>,
}

impl<S> ReportExportService<S> {
    /// Create a service over the given store, randomness and clock.
    pub fn new(store: Arc<S>, random: Arc<dyn RandomSource>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            random,
            clock,
        }
    }
}

#[async_trait]
impl<S> ReportCommand for ReportExportService<S>
where
    S: RecordStore,
{
    async fn export(&self, request: ExportRequest) -> Result<ReportExport, Error> {
        require_user(self.store.as_ref(), request.user_id).await?;
        let export_id = opaque_id(self.random.as_ref(), EXPORT_PREFIX);
        let download_url = format!("{DOWNLOAD_ROOT}/{export_id}.{}", request.format);
        info!(user_id = %request.user_id, %export_id, "report export queued");
        Ok(ReportExport {
            export_id,
            report_type: request.report_type,
            format: request.format,
            status: ExportStatus::Processing,
            download_url,
            requested_at: self.clock.utc(),
        })
    }
}

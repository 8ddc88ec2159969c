//! Report export API handler.
//!
//! ```text
//! POST /api/reports/export  {"userId":1,"reportType":"cashflow","format":"pdf"}
//! ```

use actix_web::web;
use serde::Deserialize;

use crate::domain::MissingFields;
use crate::domain::ports::{ExportRequest, ReportExport};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{RawUserId, missing_fields_error, non_blank};

/// Export body. Every field is required.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBody {
    pub user_id: Option<RawUserId>,
    pub report_type: Option<String>,
    pub format: Option<String>,
}

/// Queue a report export.
pub async fn export_report(
    state: web::Data<HttpState>,
    payload: web::Json<ExportBody>,
) -> ApiResult<web::Json<ReportExport>> {
    let ExportBody {
        user_id,
        report_type,
        format,
    } = payload.into_inner();
    let (raw_user_id, report_type, format) = match (
        user_id.filter(RawUserId::is_present),
        non_blank(report_type),
        non_blank(format),
    ) {
        (Some(user_id), Some(report_type), Some(format)) => (user_id, report_type, format),
        (user_id, report_type, format) => {
            return Err(missing_fields_error(MissingFields::among([
                ("userId", user_id.is_some()),
                ("reportType", report_type.is_some()),
                ("format", format.is_some()),
            ])));
        }
    };
    let export = state
        .reports
        .export(ExportRequest {
            user_id: raw_user_id.resolve()?,
            report_type,
            format,
        })
        .await?;
    Ok(web::Json(export))
}

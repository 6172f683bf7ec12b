use beacon_database::{Database, Report};
use beacon_models::v0::ReportStatusFilter;
use beacon_result::{create_error, Result};
use rocket::serde::json::Json;
use rocket::State;
use schemars::JsonSchema;
use serde::Deserialize;

/// # Query Parameters
#[derive(Deserialize, JsonSchema, FromForm)]
pub struct OptionsFetchReports {
    /// Report status to include, one of `pending`, `agreed` or `disagreed`
    status: Option<String>,
}

/// # Fetch Reports
///
/// Fetch all reports with the given status, most recent first.
#[openapi(tag = "Moderation")]
#[get("/?<options..>")]
pub async fn fetch_reports(
    db: &State<Database>,
    options: OptionsFetchReports,
) -> Result<Json<Vec<Report>>> {
    let filter: ReportStatusFilter = options
        .status
        .as_deref()
        .and_then(|status| status.parse().ok())
        .ok_or_else(|| create_error!(InvalidFilter))?;

    let reports = db.fetch_reports_by_status(&filter).await?;
    Ok(Json(reports))
}

use beacon_database::{Database, Report};
use beacon_models::v0::ReportAction;
use beacon_result::{create_error, Result};
use rocket::serde::json::Json;
use rocket::State;
use schemars::JsonSchema;
use serde::Deserialize;

/// # Verdict Data
#[derive(Deserialize, JsonSchema)]
pub struct DataHandleReport {
    /// Report to handle
    report_id: String,
    /// Verdict to apply, one of `agree`, `disagree` or `read`
    action: String,
}

/// # Handle Report
///
/// Apply a moderator verdict to a pending report.
///
/// Agreeing with a report also deletes the reported content.
#[openapi(tag = "Moderation")]
#[post("/handle", data = "<data>")]
pub async fn handle_report(
    db: &State<Database>,
    data: Json<DataHandleReport>,
) -> Result<Json<Report>> {
    let data = data.into_inner();

    let action: ReportAction = data
        .action
        .parse()
        .map_err(|_| create_error!(InvalidAction))?;

    let mut report = db.fetch_report(&data.report_id).await?;
    report.apply(db.inner(), action).await?;

    Ok(Json(report))
}

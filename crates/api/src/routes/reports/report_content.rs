use beacon_database::{Database, Report};
use beacon_models::v0::ReportedContent;
use beacon_result::{create_error, Result};
use rocket::serde::json::Json;
use rocket::State;
use schemars::JsonSchema;
use serde::Deserialize;
use validator::Validate;

/// # Report Data
#[derive(Validate, Deserialize, JsonSchema)]
pub struct DataReportContent {
    /// Content being reported
    target: ReportedContent,
    /// Reason for the report
    #[validate(length(min = 1, max = 1000))]
    content: String,
    /// Id of the reporting user
    author_id: String,
    /// Username of the reporting user
    author_username: String,
}

/// # Report Content
///
/// Report a post or comment to the moderation team.
#[openapi(tag = "Moderation")]
#[post("/", data = "<data>")]
pub async fn report_content(
    db: &State<Database>,
    data: Json<DataReportContent>,
) -> Result<Json<Report>> {
    let data = data.into_inner();
    data.validate().map_err(|error| {
        create_error!(FailedValidation {
            error: error.to_string()
        })
    })?;

    // The reported content must exist
    match &data.target {
        ReportedContent::Post { id } => {
            db.fetch_post(id).await?;
        }
        ReportedContent::Comment { post_id, id } => {
            let comment = db.fetch_comment(id).await?;
            if &comment.post_id != post_id {
                return Err(create_error!(NotFound));
            }
        }
    }

    let report = Report::create(
        db.inner(),
        data.target,
        data.content,
        data.author_id,
        data.author_username,
    )
    .await?;

    Ok(Json(report))
}

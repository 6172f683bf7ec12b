use beacon_database::{Comment, Database};
use beacon_result::{create_error, Result};
use rocket::serde::json::Json;
use rocket::State;
use schemars::JsonSchema;
use serde::Deserialize;

/// # Comment Data
#[derive(Deserialize, JsonSchema)]
pub struct DataCreateComment {
    /// Comment body
    content: String,
    /// Id of the author
    author_id: String,
    /// Username of the author
    author_username: String,
}

/// # Write Comment
///
/// Write a new comment on the given post.
#[openapi(tag = "Feed")]
#[post("/<post_id>/comments", data = "<data>")]
pub async fn create_comment(
    db: &State<Database>,
    post_id: String,
    data: Json<DataCreateComment>,
) -> Result<Json<Comment>> {
    let data = data.into_inner();

    let config = beacon_config::config().await;
    if data.content.is_empty()
        || data.content.len() > config.features.limits.comment_content_length
    {
        return Err(create_error!(FailedValidation {
            error: "comment content length out of bounds".to_string()
        }));
    }

    // Comments can only be written on posts that still exist
    db.fetch_post(&post_id).await?;

    let comment = Comment::create(
        db.inner(),
        post_id,
        data.content,
        data.author_id,
        data.author_username,
    )
    .await?;

    Ok(Json(comment))
}

use beacon_database::{Comment, Database};
use beacon_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Fetch Comments
///
/// Fetch all comments on the given post, most recent first.
#[openapi(tag = "Feed")]
#[get("/<post_id>/comments")]
pub async fn fetch_comments(
    db: &State<Database>,
    post_id: String,
) -> Result<Json<Vec<Comment>>> {
    // A deleted post has no comment view
    db.fetch_post(&post_id).await?;

    let comments = db.fetch_comments_by_post(&post_id).await?;
    Ok(Json(comments))
}

use beacon_database::{Database, Post};
use beacon_result::{create_error, Result};
use rocket::serde::json::Json;
use rocket::State;
use schemars::JsonSchema;
use serde::Deserialize;

/// # Post Data
#[derive(Deserialize, JsonSchema)]
pub struct DataCreatePost {
    /// Post body
    content: String,
    /// Id of the author
    author_id: String,
    /// Username of the author
    author_username: String,
}

/// # Publish Post
///
/// Publish a new post to the coordination feed.
#[openapi(tag = "Feed")]
#[post("/", data = "<data>")]
pub async fn create_post(db: &State<Database>, data: Json<DataCreatePost>) -> Result<Json<Post>> {
    let data = data.into_inner();

    let config = beacon_config::config().await;
    if data.content.is_empty() || data.content.len() > config.features.limits.post_content_length {
        return Err(create_error!(FailedValidation {
            error: "post content length out of bounds".to_string()
        }));
    }

    let post = Post::create(
        db.inner(),
        data.content,
        data.author_id,
        data.author_username,
    )
    .await?;

    Ok(Json(post))
}

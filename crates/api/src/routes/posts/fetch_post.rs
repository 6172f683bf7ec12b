use beacon_database::{Database, Post};
use beacon_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Fetch Post
///
/// Fetch a single post by its id.
#[openapi(tag = "Feed")]
#[get("/<id>")]
pub async fn fetch_post(db: &State<Database>, id: String) -> Result<Json<Post>> {
    let post = db.fetch_post(&id).await?;
    Ok(Json(post))
}

use beacon_database::{Database, Post};
use beacon_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Fetch Feed
///
/// Fetch all posts, most recent first.
#[openapi(tag = "Feed")]
#[get("/")]
pub async fn fetch_posts(db: &State<Database>) -> Result<Json<Vec<Post>>> {
    let posts = db.fetch_posts().await?;
    Ok(Json(posts))
}

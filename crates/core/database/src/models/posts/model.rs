use beacon_result::Result;
use iso8601_timestamp::Timestamp;

use crate::Database;

auto_derived!(
    /// Post on the coordination feed
    pub struct Post {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the user who published this post
        pub author_id: String,
        /// Username of the author
        pub author_username: String,
        /// Post body
        pub content: String,
        /// When the post was published
        pub created_at: Timestamp,
    }
);

impl Post {
    /// Publish a new post
    pub async fn create(
        db: &Database,
        content: String,
        author_id: String,
        author_username: String,
    ) -> Result<Post> {
        let post = Post {
            id: ulid::Ulid::new().to_string(),
            author_id,
            author_username,
            content,
            created_at: Timestamp::now_utc(),
        };

        db.insert_post(&post).await?;
        Ok(post)
    }

    /// Delete this post
    pub async fn delete(&self, db: &Database) -> Result<()> {
        db.delete_post(&self.id).await
    }
}

use beacon_result::Result;
use iso8601_timestamp::Timestamp;

use crate::Database;

auto_derived!(
    /// Comment on a post
    pub struct Comment {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the post this comment belongs to
        pub post_id: String,
        /// Id of the user who wrote this comment
        pub author_id: String,
        /// Username of the author
        pub author_username: String,
        /// Comment body
        pub content: String,
        /// When the comment was written
        pub created_at: Timestamp,
    }
);

impl Comment {
    /// Write a new comment on a post
    pub async fn create(
        db: &Database,
        post_id: String,
        content: String,
        author_id: String,
        author_username: String,
    ) -> Result<Comment> {
        let comment = Comment {
            id: ulid::Ulid::new().to_string(),
            post_id,
            author_id,
            author_username,
            content,
            created_at: Timestamp::now_utc(),
        };

        db.insert_comment(&comment).await?;
        Ok(comment)
    }
}

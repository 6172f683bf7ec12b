use beacon_result::Result;

use crate::Comment;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractComments: Sync + Send {
    /// Insert a new comment into the database
    async fn insert_comment(&self, comment: &Comment) -> Result<()>;

    /// Fetch a comment by its id
    async fn fetch_comment(&self, id: &str) -> Result<Comment>;

    /// Fetch all comments on a post, most recent first
    async fn fetch_comments_by_post(&self, post_id: &str) -> Result<Vec<Comment>>;

    /// Delete a comment from the database by its id
    async fn delete_comment(&self, id: &str) -> Result<()>;
}

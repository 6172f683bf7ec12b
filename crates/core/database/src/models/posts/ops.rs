use beacon_result::Result;

use crate::Post;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractPosts: Sync + Send {
    /// Insert a new post into the database
    async fn insert_post(&self, post: &Post) -> Result<()>;

    /// Fetch a post by its id
    async fn fetch_post(&self, id: &str) -> Result<Post>;

    /// Fetch all posts, most recent first
    async fn fetch_posts(&self) -> Result<Vec<Post>>;

    /// Delete a post from the database by its id
    async fn delete_post(&self, id: &str) -> Result<()>;
}

use beacon_result::Result;

use crate::Post;
use crate::ReferenceDb;

use super::AbstractPosts;

#[async_trait]
impl AbstractPosts for ReferenceDb {
    /// Insert a new post into the database
    async fn insert_post(&self, post: &Post) -> Result<()> {
        let mut posts = self.posts.lock().await;
        if posts.contains_key(&post.id) {
            Err(create_store_error!("insert", "post"))
        } else {
            posts.insert(post.id.to_string(), post.clone());
            Ok(())
        }
    }

    /// Fetch a post by its id
    async fn fetch_post(&self, id: &str) -> Result<Post> {
        let posts = self.posts.lock().await;
        posts.get(id).cloned().ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch all posts, most recent first
    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        let posts = self.posts.lock().await;
        let mut posts: Vec<Post> = posts.values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    /// Delete a post from the database by its id
    async fn delete_post(&self, id: &str) -> Result<()> {
        let mut posts = self.posts.lock().await;
        if posts.remove(id).is_some() {
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }
}

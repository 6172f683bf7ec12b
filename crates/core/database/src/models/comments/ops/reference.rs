use beacon_result::Result;

use crate::Comment;
use crate::ReferenceDb;

use super::AbstractComments;

#[async_trait]
impl AbstractComments for ReferenceDb {
    /// Insert a new comment into the database
    async fn insert_comment(&self, comment: &Comment) -> Result<()> {
        let mut comments = self.comments.lock().await;
        if comments.contains_key(&comment.id) {
            Err(create_store_error!("insert", "comment"))
        } else {
            comments.insert(comment.id.to_string(), comment.clone());
            Ok(())
        }
    }

    /// Fetch a comment by its id
    async fn fetch_comment(&self, id: &str) -> Result<Comment> {
        let comments = self.comments.lock().await;
        comments
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch all comments on a post, most recent first
    async fn fetch_comments_by_post(&self, post_id: &str) -> Result<Vec<Comment>> {
        let comments = self.comments.lock().await;
        let mut comments: Vec<Comment> = comments
            .values()
            .filter(|comment| comment.post_id == post_id)
            .cloned()
            .collect();

        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(comments)
    }

    /// Delete a comment from the database by its id
    async fn delete_comment(&self, id: &str) -> Result<()> {
        let mut comments = self.comments.lock().await;
        if comments.remove(id).is_some() {
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }
}

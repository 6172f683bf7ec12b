use beacon_result::Result;
use mongodb::options::FindOptions;

use crate::Comment;
use crate::MongoDb;

use super::AbstractComments;

static COL: &str = "comments";

#[async_trait]
impl AbstractComments for MongoDb {
    /// Insert a new comment into the database
    async fn insert_comment(&self, comment: &Comment) -> Result<()> {
        query!(self, insert_one, COL, &comment).map(|_| ())
    }

    /// Fetch a comment by its id
    async fn fetch_comment(&self, id: &str) -> Result<Comment> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch all comments on a post, most recent first
    async fn fetch_comments_by_post(&self, post_id: &str) -> Result<Vec<Comment>> {
        query!(
            self,
            find_with_options,
            COL,
            doc! {
                "post_id": post_id,
            },
            FindOptions::builder()
                .sort(doc! {
                    "created_at": -1,
                })
                .build()
        )
    }

    /// Delete a comment from the database by its id
    async fn delete_comment(&self, id: &str) -> Result<()> {
        if query!(self, delete_one_by_id, COL, id)?.deleted_count == 0 {
            Err(create_error!(NotFound))
        } else {
            Ok(())
        }
    }
}
